//! # کاتالوگ محصولات (External Catalog)
//!
//! منبع بیرونی داده برای seed.
//!
//! ## مفاهیم Rust:
//! - **Trait به عنوان مرز**: سرویس seed فقط `CatalogSource` رو میشناسه
//! - **async_trait**: متد async در trait object (`Arc<dyn CatalogSource>`)
//! - **reqwest**: HTTP client غیرهمزمان

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, instrument};

use crate::{
    config::Config,
    error::{AppError, Result},
    models::CatalogProduct,
};

// =====================================
// Catalog Source Trait
// =====================================
/// هر چیزی که بتونه لیست محصولات رو برگردونه
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CatalogSource: Send + Sync {
    /// گرفتن لیست کامل محصولات، به ترتیب منبع
    async fn fetch_products(&self) -> Result<Vec<CatalogProduct>>;
}

// =====================================
// HTTP Catalog
// =====================================
/// کاتالوگ از طریق HTTP (پیش‌فرض: fakestoreapi.com)
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: Client,
    url: String,
}

impl HttpCatalog {
    /// ساخت client با timeout و User-Agent از تنظیمات
    ///
    /// # Errors
    /// `AppError::Config` اگه client ساخته نشه
    pub fn from_config(config: &Config) -> Result<Self> {
        let client = Client::builder()
            .user_agent(concat!("catalog-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(config.catalog_timeout())
            .build()
            .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: config.catalog_url.clone(),
        })
    }

    /// آدرس کاتالوگ
    #[must_use]
    pub fn url(&self) -> &str {
        &self.url
    }
}

#[async_trait]
impl CatalogSource for HttpCatalog {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch_products(&self) -> Result<Vec<CatalogProduct>> {
        let products = self
            .client
            .get(&self.url)
            .send()
            .await?
            .error_for_status()?
            .json::<Vec<CatalogProduct>>()
            .await?;

        debug!(count = products.len(), "Fetched catalog products");
        Ok(products)
    }
}

// =====================================
// Static Catalog
// =====================================
/// کاتالوگ ثابت در حافظه
///
/// برای اجرای آفلاین و تست‌های end-to-end.
#[derive(Debug, Clone, Default)]
pub struct StaticCatalog {
    products: Vec<CatalogProduct>,
}

impl StaticCatalog {
    #[must_use]
    pub fn new(products: Vec<CatalogProduct>) -> Self {
        Self { products }
    }
}

#[async_trait]
impl CatalogSource for StaticCatalog {
    async fn fetch_products(&self) -> Result<Vec<CatalogProduct>> {
        Ok(self.products.clone())
    }
}
