//! # Data Transfer Objects (DTOs)
//!
//! DTO‌هایی که مستقیم به کلاینت ارسال میشن

use serde::{Deserialize, Serialize};

use super::Item;

// =====================================
// Seed
// =====================================
/// پاسخ موفق `POST /api/seed`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedResponse {
    pub message: String,
    pub items: Vec<Item>,
}

impl SeedResponse {
    /// پیام ثابت seed موفق
    pub const SUCCESS_MESSAGE: &'static str = "Database seeded successfully!";

    #[must_use]
    pub fn seeded(items: Vec<Item>) -> Self {
        Self {
            message: Self::SUCCESS_MESSAGE.to_string(),
            items,
        }
    }
}

// =====================================
// Health Check
// =====================================
/// پاسخ health check
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub database: bool,
}

impl HealthResponse {
    /// ساخت پاسخ بر اساس وضعیت دیتابیس
    #[must_use]
    pub fn from_database_status(database_ok: bool) -> Self {
        Self {
            status: if database_ok { "healthy" } else { "degraded" }.to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            database: database_ok,
        }
    }
}
