//! # سرویس Seed
//!
//! پر کردن دوباره دیتابیس از کاتالوگ محصولات

use std::sync::Arc;
use std::time::Instant;

use tokio::sync::Mutex;
use tracing::{info, instrument, warn};
use validator::Validate;

use crate::{
    catalog::CatalogSource,
    database::ItemRepository,
    error::Result,
    models::{Item, NewItem},
};

// =====================================
// Seed Service
// =====================================
/// سرویس seed
///
/// # مسئولیت‌ها:
/// - گرفتن محصولات از کاتالوگ
/// - تبدیل و اعتبارسنجی رکوردها
/// - جایگزینی کامل مجموعه در یک تراکنش
///
/// `gate` تضمین میکنه در هر لحظه فقط یک seed در حال اجرا باشه.
pub struct SeedService {
    repo: ItemRepository,
    catalog: Arc<dyn CatalogSource>,
    gate: Mutex<()>,
}

impl SeedService {
    /// ساخت سرویس جدید
    #[must_use]
    pub fn new(repo: ItemRepository, catalog: Arc<dyn CatalogSource>) -> Self {
        Self {
            repo,
            catalog,
            gate: Mutex::new(()),
        }
    }

    /// اجرای seed
    ///
    /// رکوردهای نامعتبر (عنوان خالی یا قیمت منفی) رد میشن و لاگ میشن.
    ///
    /// # Errors
    /// - `Upstream`: کاتالوگ در دسترس نیست یا پاسخ خرابه
    /// - `Database`: نوشتن انجام نشد؛ محتوای قبلی دست نخورده میمونه
    #[instrument(skip(self))]
    pub async fn seed(&self) -> Result<Vec<Item>> {
        let _guard = self.gate.lock().await;
        let started = Instant::now();

        let products = self.catalog.fetch_products().await?;
        let fetched = products.len();

        let items: Vec<NewItem> = products
            .into_iter()
            .map(NewItem::from)
            .filter(|item| match item.validate() {
                Ok(()) => true,
                Err(e) => {
                    warn!(name = %item.name, error = %e, "Skipping invalid catalog record");
                    false
                }
            })
            .collect();

        let stored = self.repo.replace_all(&items).await?;

        info!(
            fetched,
            inserted = stored.len(),
            skipped = fetched - items.len(),
            duration_ms = %started.elapsed().as_millis(),
            "Database seeded"
        );

        Ok(stored)
    }
}
