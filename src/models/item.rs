//! # مدل Item
//!
//! Entity اصلی و شکل‌های ورودی مربوط بهش

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::utils;

// =====================================
// Item Entity
// =====================================
/// آیتم ذخیره شده در دیتابیس
///
/// `created_at` رو فقط repository موقع insert مقدار میده.
/// در JSON فیلدها camelCase هستن (`createdAt`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    /// شناسه یکتا
    pub id: String,

    /// عنوان نمایشی
    pub name: String,

    /// توضیحات (میتونه خالی باشه)
    pub description: String,

    /// قیمت (منفی نیست)
    pub price: f64,

    /// دسته‌بندی - کلید گروه‌بندی در آمار
    pub category: String,

    /// زمان ثبت
    pub created_at: DateTime<Utc>,
}

// =====================================
// New Item (insert shape)
// =====================================
/// داده لازم برای ثبت آیتم جدید
///
/// # مفاهیم:
/// - `#[derive(Validate)]`: اعتبارسنجی خودکار
/// - این DTO به Repository داده میشه
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct NewItem {
    #[validate(length(min = 1, message = "Name must not be empty"))]
    pub name: String,

    pub description: String,

    #[validate(range(min = 0.0, message = "Price must not be negative"))]
    pub price: f64,

    pub category: String,
}

impl NewItem {
    /// ساخت آیتم جدید
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: f64,
        category: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            price,
            category: category.into(),
        }
    }
}

// =====================================
// Catalog Product (upstream record)
// =====================================
/// رکورد محصول از API کاتالوگ
///
/// فیلدهای اضافه (مثل `id`, `image`, `rating`) نادیده گرفته میشن.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CatalogProduct {
    pub title: String,

    #[serde(default)]
    pub description: String,

    pub price: f64,

    pub category: String,
}

/// تبدیل محصول کاتالوگ به آیتم محلی
///
/// `name <- title` و فاصله‌های اضافه در عنوان و دسته‌بندی حذف میشن.
impl From<CatalogProduct> for NewItem {
    fn from(product: CatalogProduct) -> Self {
        Self {
            name: utils::clean_whitespace(&product.title),
            description: product.description,
            price: product.price,
            category: utils::clean_whitespace(&product.category),
        }
    }
}
