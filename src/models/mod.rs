//! # ماژول مدل‌ها (Domain Models)
//!
//! این ماژول مدل‌های داده برنامه رو تعریف میکنه.
//!
//! ## تفاوت انواع مدل:
//! - **Entity**: داده‌ای که در دیتابیس ذخیره میشه (`Item`)
//! - **DTO**: برای ارسال/دریافت از API (`SeedResponse`, `HealthResponse`)
//! - **Domain Model**: منطق خالص آمار (`MonthWindow`, `PriceBucket`)

mod item;
mod stats;
mod dto;

pub use item::*;
pub use stats::*;
pub use dto::*;

use serde::{Deserialize, Serialize};

// =====================================
// Common Types (Newtype Pattern)
// =====================================
/// شناسه یکتا
///
/// # Newtype Pattern
/// یه `String` ساده رو wrap میکنه تا با بقیه رشته‌ها قاطی نشه.
///
/// # مثال
/// ```rust
/// use catalog_stats::models::Id;
///
/// let id = Id::new();
/// assert_eq!(id.as_str().len(), 21);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Id(String);

impl Id {
    /// ساخت ID جدید با nanoid
    #[must_use]
    pub fn new() -> Self {
        Self(nanoid::nanoid!(21))
    }

    /// گرفتن به عنوان &str
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// تبدیل به String
    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl Default for Id {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for Id {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
