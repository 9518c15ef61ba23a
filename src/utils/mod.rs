//! # ماژول توابع کمکی (Utilities)
//!
//! parse کردن پارامترهای ماه و سال، و تمیزکاری رشته‌ها.

use chrono::{Datelike, Utc};

use crate::error::{AppError, Result};

// =====================================
// Constants
// =====================================
/// کوچک‌ترین سال قابل قبول در query
pub const MIN_YEAR: i32 = 1970;

/// بزرگ‌ترین سال قابل قبول در query
pub const MAX_YEAR: i32 = 9999;

// =====================================
// Month & Year
// =====================================
/// parse کردن ماه از path
///
/// فقط عدد صحیح مبنای 10 بین 1 تا 12 قبوله.
///
/// # مثال
/// ```rust
/// use catalog_stats::utils::parse_month;
///
/// assert_eq!(parse_month("03").unwrap(), 3);
/// assert!(parse_month("abc").is_err());
/// assert!(parse_month("13").is_err());
/// ```
pub fn parse_month(raw: &str) -> Result<u32> {
    raw.trim()
        .parse::<u32>()
        .ok()
        .filter(|month| (1..=12).contains(month))
        .ok_or_else(|| AppError::invalid_month(raw))
}

/// بررسی محدوده سال
pub fn validate_year(year: i32) -> Result<i32> {
    if (MIN_YEAR..=MAX_YEAR).contains(&year) {
        Ok(year)
    } else {
        Err(AppError::BadRequest(format!(
            "Invalid year {}: expected a value between {} and {}",
            year, MIN_YEAR, MAX_YEAR
        )))
    }
}

/// سال جاری به وقت UTC
///
/// فقط در لبه HTTP (extractor) صدا زده میشه؛ منطق آمار سال رو ورودی میگیره.
#[must_use]
pub fn current_year() -> i32 {
    Utc::now().year()
}

// =====================================
// String Utilities
// =====================================
/// تمیز کردن whitespace‌های اضافی
#[must_use]
pub fn clean_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
