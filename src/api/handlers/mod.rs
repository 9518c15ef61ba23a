//! # HTTP Handlers
//!
//! هر handler یک async function هست که request میگیره و response برمیگردونه.
//! منطق اصلی توی سرویس‌هاست؛ handler‌ها فقط ورودی و خروجی رو شکل میدن.

pub mod seed;
pub mod stats;
pub mod health;

use crate::error::AppError;

/// پاسخ JSON برای مسیرهای ناشناخته
pub async fn not_found() -> AppError {
    AppError::NotFound("No route matches this path".to_string())
}
