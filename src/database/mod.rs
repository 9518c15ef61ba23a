//! # ماژول دیتابیس (Database Layer)
//!
//! این ماژول لایه ارتباط با دیتابیس رو مدیریت میکنه.
//!
//! ## مفاهیم Rust:
//! - **Arc<T>**: Reference Counting برای اشتراک داده بین threads
//! - **async/await**: برنامه‌نویسی غیرهمزمان
//!
//! ## الگوهای طراحی:
//! - Repository Pattern: جداسازی لایه داده از منطق
//! - Connection Pool: مدیریت اتصالات دیتابیس

mod repository;

pub use repository::*;

use std::sync::Arc;
use std::time::Duration;

use sqlx::{
    migrate::Migrator,
    sqlite::{SqlitePool, SqlitePoolOptions},
};

use crate::error::Result;

// مسیر migration‌ها
static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

// =====================================
// Database Connection
// =====================================
/// اتصال به دیتابیس با Connection Pool
///
/// هر clone فقط شمارنده `Arc` رو زیاد میکنه و pool مشترک میمونه.
#[derive(Debug, Clone)]
pub struct Database {
    pool: Arc<SqlitePool>,
}

impl Database {
    /// اتصال به دیتابیس
    ///
    /// # Arguments
    /// * `database_url` - آدرس دیتابیس (مثلا `sqlite://data/items.db?mode=rwc`)
    ///
    /// # Errors
    /// خطا برمیگردونه اگه پوشه ساخته نشه یا اتصال موفق نباشه
    pub async fn connect(database_url: impl AsRef<str>) -> Result<Self> {
        let url = database_url.as_ref();

        // ساخت پوشه فایل دیتابیس اگه وجود نداره
        if let Some(path) = url.strip_prefix("sqlite://") {
            let path = path.split('?').next().unwrap_or(path);
            if let Some(parent) = std::path::Path::new(path).parent() {
                if !parent.as_os_str().is_empty() {
                    std::fs::create_dir_all(parent)?;
                }
            }
        }

        let pool = SqlitePoolOptions::new()
            .max_connections(10)
            .min_connections(1)
            .acquire_timeout(Duration::from_secs(5))
            .idle_timeout(Duration::from_secs(600))
            .connect(url)
            .await?;

        Ok(Self {
            pool: Arc::new(pool),
        })
    }

    /// دیتابیس in-memory با migration‌های اجرا شده
    ///
    /// فقط یک اتصال داره و اون اتصال هیچوقت بسته نمیشه، چون با بسته
    /// شدنش کل داده از بین میره.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let db = Self {
            pool: Arc::new(pool),
        };

        db.migrate().await?;
        Ok(db)
    }

    /// اجرای migration‌ها
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&*self.pool).await?;
        Ok(())
    }

    /// دسترسی به pool
    #[must_use]
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// بررسی سلامت دیتابیس
    pub async fn health_check(&self) -> Result<()> {
        sqlx::query("SELECT 1").execute(&*self.pool).await?;
        Ok(())
    }

    /// شروع یک تراکنش
    ///
    /// اگه commit نشه، موقع drop خودکار rollback میشه.
    pub async fn begin(&self) -> Result<sqlx::Transaction<'_, sqlx::Sqlite>> {
        Ok(self.pool.begin().await?)
    }
}
