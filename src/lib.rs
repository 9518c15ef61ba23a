//! # Catalog Stats Library
//!
//! سرویسی که دیتابیس رو از یک کاتالوگ محصولات پر میکنه و آمار ماهانه
//! (بازه‌های قیمت و دسته‌بندی‌ها) رو برای نمودارها ارائه میده.
//!
//! ## ساختار پروژه
//!
//! ```text
//! src/
//! ├── lib.rs          # نقطه ورود کتابخانه - اینجا!
//! ├── main.rs         # نقطه ورود باینری
//! ├── config/         # مدیریت تنظیمات
//! ├── error/          # تعریف خطاها
//! ├── database/       # لایه دیتابیس
//! ├── catalog/        # منبع بیرونی محصولات
//! ├── models/         # مدل‌های داده
//! ├── services/       # منطق seed و آمار
//! ├── api/            # لایه API
//! └── utils/          # توابع کمکی
//! ```
//!
//! ## مثال استفاده
//!
//! ```rust,no_run
//! use catalog_stats::{api::create_router, config::Config, database::Database, services::AppState};
//!
//! #[tokio::main]
//! async fn main() -> catalog_stats::Result<()> {
//!     let config = Config::from_env()?;
//!     let db = Database::connect(&config.database_url).await?;
//!     db.migrate().await?;
//!     let _app = create_router(AppState::new(db, config)?);
//!     Ok(())
//! }
//! ```

// =====================================
// Module Declarations
// =====================================

/// ماژول مدیریت تنظیمات برنامه
pub mod config;

/// ماژول تعریف و مدیریت خطاها
pub mod error;

/// ماژول ارتباط با دیتابیس
pub mod database;

/// ماژول کاتالوگ محصولات بیرونی
pub mod catalog;

/// ماژول مدل‌های داده
pub mod models;

/// ماژول سرویس‌ها (Business Logic)
pub mod services;

/// ماژول API و HTTP Handlers
pub mod api;

/// ماژول توابع کمکی
pub mod utils;

// =====================================
// Re-exports
// =====================================

/// نتیجه عملیات با خطای سفارشی ما
pub use error::Result;

/// خطای اصلی برنامه
pub use error::AppError;

// =====================================
// Prelude Module
// =====================================
/// ماژول prelude برای import راحت‌تر آیتم‌های پرکاربرد
///
/// ```rust
/// use catalog_stats::prelude::*;
/// ```
pub mod prelude {
    pub use crate::catalog::{CatalogSource, HttpCatalog, StaticCatalog};
    pub use crate::config::Config;
    pub use crate::database::{Database, ItemRepository};
    pub use crate::error::{AppError, Result};
    pub use crate::models::*;
    pub use crate::services::*;
}
