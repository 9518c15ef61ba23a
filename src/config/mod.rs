//! # ماژول تنظیمات (Configuration)
//!
//! این ماژول مسئول خوندن و مدیریت تنظیمات سرویس هست.
//!
//! ## مفاهیم Rust:
//! - **Derive Macros**: تولید خودکار کد با `#[derive(...)]`
//! - **Default Trait**: مقادیر پیش‌فرض
//! - **Builder Pattern**: ساخت تدریجی آبجکت

use std::env;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// آدرس پیش‌فرض کاتالوگ محصولات
pub const DEFAULT_CATALOG_URL: &str = "https://fakestoreapi.com/products";

/// تنظیمات اصلی برنامه
///
/// # مثال
/// ```rust
/// use catalog_stats::config::Config;
///
/// let config = Config::default();
/// println!("Port: {}", config.port);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// آدرس هاست سرور
    pub host: String,

    /// پورت سرور
    pub port: u16,

    /// آدرس اتصال به دیتابیس
    pub database_url: String,

    /// آدرس API کاتالوگ محصولات
    pub catalog_url: String,

    /// حداکثر زمان انتظار برای کاتالوگ (ثانیه)
    pub catalog_timeout_secs: u64,

    /// حداکثر زمان پردازش هر request (ثانیه)
    pub request_timeout_secs: u64,

    /// محیط اجرا (development, production)
    pub environment: Environment,
}

/// محیط اجرای برنامه
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// محیط توسعه - لاگ‌های خوانا
    #[default]
    Development,

    /// محیط تست
    Testing,

    /// محیط تولید - لاگ JSON
    Production,
}

impl Environment {
    /// آیا در محیط توسعه هستیم؟
    #[must_use]
    pub fn is_development(&self) -> bool {
        matches!(self, Environment::Development)
    }

    /// آیا در محیط تولید هستیم؟
    #[must_use]
    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// تبدیل String به Environment
///
/// # مفاهیم:
/// - `impl From<T>`: پیاده‌سازی trait تبدیل
/// - `_`: wildcard برای بقیه حالت‌ها
impl From<String> for Environment {
    fn from(s: String) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Environment::Production,
            "testing" | "test" => Environment::Testing,
            _ => Environment::Development,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_url: "sqlite://data/items.db?mode=rwc".to_string(),
            catalog_url: DEFAULT_CATALOG_URL.to_string(),
            catalog_timeout_secs: 10,
            request_timeout_secs: 30,
            environment: Environment::Development,
        }
    }
}

impl Config {
    /// ساخت تنظیمات از متغیرهای محیطی
    ///
    /// متغیرهایی که نباشن یا parse نشن مقدار پیش‌فرض میگیرن.
    ///
    /// # مثال
    /// ```rust,no_run
    /// use catalog_stats::config::Config;
    ///
    /// let config = Config::from_env().expect("Failed to load config");
    /// ```
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();

        let get_env = |key: &str, default: &str| -> String {
            env::var(key).unwrap_or_else(|_| default.to_string())
        };

        let parse_env = |key: &str, default: u64| -> u64 {
            env::var(key)
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default)
        };

        let port = env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(defaults.port);

        Ok(Self {
            host: get_env("HOST", &defaults.host),
            port,
            database_url: get_env("DATABASE_URL", &defaults.database_url),
            catalog_url: get_env("CATALOG_URL", &defaults.catalog_url),
            catalog_timeout_secs: parse_env("CATALOG_TIMEOUT_SECS", defaults.catalog_timeout_secs),
            request_timeout_secs: parse_env("REQUEST_TIMEOUT_SECS", defaults.request_timeout_secs),
            environment: get_env("ENVIRONMENT", "development").into(),
        })
    }

    /// اعتبارسنجی تنظیمات
    ///
    /// # Errors
    /// `AppError::Config` اگه یکی از مقادیر قابل استفاده نباشه
    pub fn validate(&self) -> Result<()> {
        if self.port == 0 {
            return Err(AppError::Config("PORT cannot be 0".to_string()));
        }

        let catalog = url::Url::parse(&self.catalog_url).map_err(|e| {
            AppError::Config(format!("CATALOG_URL '{}' is invalid: {}", self.catalog_url, e))
        })?;

        if !matches!(catalog.scheme(), "http" | "https") {
            return Err(AppError::Config(format!(
                "CATALOG_URL must use http or https, got '{}'",
                catalog.scheme()
            )));
        }

        if self.catalog_timeout_secs == 0 || self.request_timeout_secs == 0 {
            return Err(AppError::Config(
                "Timeouts must be greater than 0 seconds".to_string(),
            ));
        }

        Ok(())
    }

    /// آدرس کامل سرور
    #[must_use]
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// timeout کاتالوگ به صورت Duration
    #[must_use]
    pub fn catalog_timeout(&self) -> Duration {
        Duration::from_secs(self.catalog_timeout_secs)
    }

    /// timeout هر request به صورت Duration
    #[must_use]
    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

// =====================================
// Builder Pattern
// =====================================
/// ساخت Config با Builder Pattern
///
/// # مثال
/// ```rust
/// use catalog_stats::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new()
///     .port(8080)
///     .host("127.0.0.1")
///     .build();
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// ساخت builder جدید
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: Config::default(),
        }
    }

    /// تنظیم پورت
    #[must_use]
    pub fn port(mut self, port: u16) -> Self {
        self.config.port = port;
        self
    }

    /// تنظیم هاست
    #[must_use]
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.config.host = host.into();
        self
    }

    /// تنظیم database_url
    #[must_use]
    pub fn database_url(mut self, url: impl Into<String>) -> Self {
        self.config.database_url = url.into();
        self
    }

    /// تنظیم آدرس کاتالوگ
    #[must_use]
    pub fn catalog_url(mut self, url: impl Into<String>) -> Self {
        self.config.catalog_url = url.into();
        self
    }

    /// تنظیم timeout کاتالوگ
    #[must_use]
    pub fn catalog_timeout_secs(mut self, secs: u64) -> Self {
        self.config.catalog_timeout_secs = secs;
        self
    }

    /// تنظیم timeout request
    #[must_use]
    pub fn request_timeout_secs(mut self, secs: u64) -> Self {
        self.config.request_timeout_secs = secs;
        self
    }

    /// تنظیم محیط
    #[must_use]
    pub fn environment(mut self, env: Environment) -> Self {
        self.config.environment = env;
        self
    }

    /// ساخت Config نهایی
    #[must_use]
    pub fn build(self) -> Config {
        self.config
    }

    /// ساخت Config با اعتبارسنجی
    ///
    /// # Errors
    /// خطا برمیگردونه اگه اعتبارسنجی fail بشه
    pub fn build_validated(self) -> Result<Config> {
        let config = self.build();
        config.validate()?;
        Ok(config)
    }
}
