//! # Custom Extractors
//!
//! Extractor‌های سفارشی برای استخراج داده از request
//!
//! ## چطور کار میکنه؟
//! وقتی یه extractor به عنوان پارامتر handler تعریف میشه،
//! axum قبل از اجرای handler، extractor رو اجرا میکنه.
//! پس ورودی نامعتبر قبل از هر دسترسی به دیتابیس رد میشه.

use axum::{
    async_trait,
    extract::{FromRequestParts, Path, Query},
    http::request::Parts,
};
use serde::Deserialize;

use crate::{error::AppError, models::MonthWindow, utils};

// =====================================
// Stats Period Extractor
// =====================================
/// پارامترهای query اختیاری آمار
#[derive(Debug, Default, Deserialize)]
pub struct PeriodQuery {
    pub year: Option<i32>,
}

/// پنجره ماهی که از `/:month` و `?year=` ساخته میشه
///
/// اگه `year` نیاد، سال جاری استفاده میشه.
///
/// # استفاده در handler:
/// ```rust,ignore
/// async fn handler(StatsPeriod(window): StatsPeriod) -> ... {
///     // window حتما معتبره
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct StatsPeriod(pub MonthWindow);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for StatsPeriod {
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw_month) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|e| AppError::BadRequest(format!("Invalid path: {}", e)))?;

        let Query(query) = Query::<PeriodQuery>::from_request_parts(parts, state)
            .await
            .map_err(|_| {
                AppError::BadRequest("Invalid year: expected an integer".to_string())
            })?;

        let month = utils::parse_month(&raw_month)?;
        let year = match query.year {
            Some(year) => utils::validate_year(year)?,
            None => utils::current_year(),
        };

        Ok(StatsPeriod(MonthWindow::new(year, month)?))
    }
}

// =====================================
// Request ID Extractor
// =====================================
/// خوندن Request ID که middleware گذاشته
#[derive(Debug, Clone)]
pub struct RequestId(pub String);

impl RequestId {
    /// Header name برای request ID
    pub const HEADER_NAME: &'static str = "x-request-id";
}

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for RequestId {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let request_id = parts
            .headers
            .get(Self::HEADER_NAME)
            .and_then(|v| v.to_str().ok())
            .map(ToString::to_string)
            .unwrap_or_else(|| nanoid::nanoid!(12));

        Ok(RequestId(request_id))
    }
}
