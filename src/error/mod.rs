//! # ماژول مدیریت خطاها (Error Handling)
//!
//! این ماژول سیستم مدیریت خطای سرویس رو تعریف میکنه.
//!
//! ## مفاهیم Rust:
//! - **Custom Error Types**: تعریف نوع خطای سفارشی
//! - **thiserror**: derive macro برای Error trait
//! - **From Trait**: تبدیل خودکار نوع‌ها
//! - **Result Type Alias**: alias برای ساده‌تر شدن کد
//!
//! ## خطاهای کاربر و سرور
//!
//! خطاهای کاربر (4xx) پیام کامل خودشون رو برمیگردونن.
//! خطاهای سرور (5xx) کامل لاگ میشن ولی کلاینت فقط یه پیام ثابت میبینه.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, error};

// =====================================
// Result Type Alias
// =====================================
/// نوع Result سفارشی برنامه
///
/// به جای نوشتن `Result<Item, AppError>` میتونیم بنویسیم `Result<Item>`
pub type Result<T, E = AppError> = std::result::Result<T, E>;

// =====================================
// Custom Error Enum
// =====================================
/// خطای اصلی برنامه
///
/// # مفاهیم:
/// - `#[derive(Error)]`: از thiserror برای پیاده‌سازی Error trait
/// - `#[from]`: تبدیل خودکار از نوع‌های دیگه با `?`
#[derive(Debug, Error)]
pub enum AppError {
    // ----------------------------------------
    // خطاهای کاربر (4xx)
    // ----------------------------------------

    /// درخواست نامعتبر - 400
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// پیدا نشد - 404
    #[error("Not found: {0}")]
    NotFound(String),

    // ----------------------------------------
    // خطاهای سرور (5xx)
    // ----------------------------------------

    /// خطای داخلی سرور - 500
    #[error("Internal server error: {0}")]
    Internal(String),

    /// خطای سرور
    #[error("Server error: {0}")]
    Server(String),

    /// خطای تنظیمات
    #[error("Configuration error: {0}")]
    Config(String),

    // ----------------------------------------
    // خطاهای تبدیل شده از کتابخانه‌ها
    // ----------------------------------------

    /// خطای دیتابیس
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// خطای اجرای migration
    #[error("Migration error: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    /// خطای کاتالوگ بالادستی (شبکه، status غیر 2xx، JSON خراب) - 502
    #[error("Catalog request failed: {0}")]
    Upstream(#[from] reqwest::Error),

    /// خطای IO
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl AppError {
    /// گرفتن HTTP status code متناسب با خطا
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            // 4xx Client Errors
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,

            // 5xx Server Errors
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Database(_)
            | Self::Migrate(_)
            | Self::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// آیا این یه خطای سرور هست؟
    #[must_use]
    pub fn is_server_error(&self) -> bool {
        self.status_code().is_server_error()
    }

    /// پیامی که به کلاینت نشون داده میشه
    ///
    /// جزئیات خطاهای سرور (query، آدرس داخلی، stack) هیچوقت بیرون نمیره.
    #[must_use]
    pub fn public_message(&self) -> String {
        match self {
            Self::BadRequest(_) | Self::NotFound(_) => self.to_string(),
            Self::Upstream(_) => "Failed to fetch the product catalog".to_string(),
            Self::Database(_) | Self::Migrate(_) => "Database operation failed".to_string(),
            Self::Internal(_)
            | Self::Server(_)
            | Self::Config(_)
            | Self::Io(_) => "Internal server error".to_string(),
        }
    }

    /// ساخت خطای ماه نامعتبر
    #[must_use]
    pub fn invalid_month(raw: &str) -> Self {
        Self::BadRequest(format!(
            "Invalid month '{}': expected an integer between 1 and 12",
            raw
        ))
    }
}

// =====================================
// Error Response DTO
// =====================================
/// ساختار پاسخ خطا در API
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    /// نوع خطا (مثلا "Bad Request")
    pub error: String,

    /// پیام خطا
    pub message: String,

    /// کد وضعیت HTTP
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_code: Option<u16>,
}

impl ErrorResponse {
    /// ساخت پاسخ خطای جدید
    pub fn new(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            error: error.into(),
            message: message.into(),
            status_code: None,
        }
    }

    /// اضافه کردن کد وضعیت
    #[must_use]
    pub fn with_status(mut self, status: StatusCode) -> Self {
        self.status_code = Some(status.as_u16());
        self
    }
}

// =====================================
// IntoResponse Implementation
// =====================================
/// تبدیل AppError به Response HTTP
///
/// این باعث میشه بتونیم AppError رو مستقیم از handler برگردونیم.
impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if self.is_server_error() {
            error!(error = %self, "Server error occurred");
        } else {
            debug!(error = %self, "Request rejected");
        }

        let status = self.status_code();

        let error_response = ErrorResponse::new(
            status.canonical_reason().unwrap_or("Error"),
            self.public_message(),
        )
        .with_status(status);

        (status, Json(error_response)).into_response()
    }
}
