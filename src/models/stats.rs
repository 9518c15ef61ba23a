//! # مدل‌های آمار
//!
//! پنجره زمانی ماه، بازه‌های قیمت و شکل خروجی endpoint‌های آمار.
//! همه چیز اینجا pure هست و به ساعت سیستم دست نمیزنه.

use chrono::{DateTime, Datelike, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use crate::error::{AppError, Result};

// =====================================
// Month Window
// =====================================
/// بازه نیمه‌باز `[start, end)` یک ماه تقویمی به وقت UTC
///
/// # مثال
/// ```rust
/// use catalog_stats::models::MonthWindow;
///
/// let window = MonthWindow::new(2024, 12).unwrap();
/// assert_eq!(window.end.to_rfc3339(), "2025-01-01T00:00:00+00:00");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    pub year: i32,
    pub month: u32,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl MonthWindow {
    /// ساخت پنجره برای `month` از سال `year`
    ///
    /// # Errors
    /// `BadRequest` اگه ماه بیرون از 1 تا 12 باشه یا سال قابل نمایش نباشه
    pub fn new(year: i32, month: u32) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(AppError::invalid_month(&month.to_string()));
        }

        let (next_year, next_month) = if month == 12 {
            (year.saturating_add(1), 1)
        } else {
            (year, month + 1)
        };

        let start = first_instant(year, month)?;
        let end = first_instant(next_year, next_month)?;

        Ok(Self {
            year,
            month,
            start,
            end,
        })
    }

    /// پنجره ماهی که `instant` داخلش هست
    ///
    /// # Errors
    /// فقط وقتی که ماه بعد از `instant` قابل نمایش نباشه
    pub fn containing(instant: DateTime<Utc>) -> Result<Self> {
        Self::new(instant.year(), instant.month())
    }

    /// آیا `instant` داخل پنجره هست؟
    #[must_use]
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }
}

fn first_instant(year: i32, month: u32) -> Result<DateTime<Utc>> {
    Utc.with_ymd_and_hms(year, month, 1, 0, 0, 0)
        .single()
        .ok_or_else(|| AppError::BadRequest(format!("Year {} is out of range", year)))
}

// =====================================
// Price Buckets
// =====================================
/// یک بازه قیمت برای نمودار میله‌ای
///
/// حد پایین بسته یا باز هست (`min_inclusive`)، حد بالا همیشه بسته و
/// `None` یعنی بی‌نهایت.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceBucket {
    pub label: &'static str,
    pub min: f64,
    pub min_inclusive: bool,
    pub max: Option<f64>,
}

impl PriceBucket {
    /// آیا قیمت داخل این بازه هست؟
    #[must_use]
    pub fn contains(&self, price: f64) -> bool {
        let above_min = if self.min_inclusive {
            price >= self.min
        } else {
            price > self.min
        };

        above_min && self.max.map_or(true, |max| price <= max)
    }

    /// پیدا کردن بازه‌ای که قیمت داخلش میفته
    ///
    /// قیمت منفی (یا NaN) توی هیچ بازه‌ای نیست.
    #[must_use]
    pub fn classify(price: f64) -> Option<&'static PriceBucket> {
        PRICE_BUCKETS.iter().find(|bucket| bucket.contains(price))
    }
}

/// چهار بازه ثابت قیمت، به ترتیب خروجی
///
/// برچسب‌ها عدد صحیح هستن ولی مرزها پیوسته‌ان: 50 در `0-50`،
/// 50.5 و 51 در `51-100`، و 150.5 در `151+`.
pub static PRICE_BUCKETS: [PriceBucket; 4] = [
    PriceBucket {
        label: "0-50",
        min: 0.0,
        min_inclusive: true,
        max: Some(50.0),
    },
    PriceBucket {
        label: "51-100",
        min: 50.0,
        min_inclusive: false,
        max: Some(100.0),
    },
    PriceBucket {
        label: "101-150",
        min: 100.0,
        min_inclusive: false,
        max: Some(150.0),
    },
    PriceBucket {
        label: "151+",
        min: 150.0,
        min_inclusive: false,
        max: None,
    },
];

// =====================================
// Response Shapes
// =====================================
/// تعداد آیتم‌ها در یک بازه قیمت
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRangeCount {
    pub range: String,
    pub count: i64,
}

/// تعداد آیتم‌ها در یک دسته‌بندی
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct CategoryCount {
    pub category: String,
    pub count: i64,
}

/// خروجی endpoint ترکیبی
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CombinedStats {
    pub bar_data: Vec<PriceRangeCount>,
    pub pie_data: Vec<CategoryCount>,
}
