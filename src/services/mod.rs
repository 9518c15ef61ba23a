//! # ماژول سرویس‌ها (Business Logic Layer)
//!
//! ## لایه‌بندی معماری
//!
//! ```text
//! ┌─────────────────┐
//! │    API Layer    │  <-- HTTP handlers (axum)
//! ├─────────────────┤
//! │  Service Layer  │  <-- seed و آمار (اینجا!)
//! ├─────────────────┤
//! │ Repository Layer│  <-- ItemRepository     CatalogSource --> HTTP
//! ├─────────────────┤
//! │    Database     │  <-- SQLite
//! └─────────────────┘
//! ```

mod seed_service;
mod stats_service;

pub use seed_service::*;
pub use stats_service::*;

use std::sync::Arc;

use crate::{
    catalog::{CatalogSource, HttpCatalog},
    config::Config,
    database::{Database, ItemRepository},
    error::Result,
};

// =====================================
// Application State
// =====================================
/// وضعیت برنامه که بین همه handlers اشتراک‌گذاری میشه
///
/// # مفاهیم:
/// - `Arc<T>`: Reference counting برای thread-safe sharing
/// - `Clone`: فقط Arc‌ها clone میشن، نه داده
#[derive(Clone)]
pub struct AppState {
    /// تنظیمات برنامه
    pub config: Arc<Config>,

    /// اتصال دیتابیس (برای health check)
    pub database: Database,

    /// سرویس seed
    pub seed_service: Arc<SeedService>,

    /// سرویس آمار
    pub stats_service: Arc<StatsService>,
}

impl AppState {
    /// ساخت AppState با کاتالوگ HTTP از روی تنظیمات
    ///
    /// # Errors
    /// اگه HTTP client ساخته نشه
    pub fn new(db: Database, config: Config) -> Result<Self> {
        let catalog = HttpCatalog::from_config(&config)?;
        Ok(Self::with_catalog(db, config, Arc::new(catalog)))
    }

    /// ساخت AppState با یک منبع کاتالوگ دلخواه
    ///
    /// # مفاهیم:
    /// - Dependency Injection: همه وابستگی‌ها از بیرون تزریق میشن
    #[must_use]
    pub fn with_catalog(db: Database, config: Config, catalog: Arc<dyn CatalogSource>) -> Self {
        let repo = ItemRepository::new(db.clone());

        Self {
            config: Arc::new(config),
            database: db,
            seed_service: Arc::new(SeedService::new(repo.clone(), catalog)),
            stats_service: Arc::new(StatsService::new(repo)),
        }
    }

    /// دسترسی به config
    #[must_use]
    pub fn config(&self) -> &Config {
        &self.config
    }
}
