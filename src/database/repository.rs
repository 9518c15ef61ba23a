//! # Repository Pattern
//!
//! دسترسی به جدول `items`.
//!
//! ## Repository Pattern چیه؟
//! یه لایه انتزاعی بین منطق برنامه و دیتابیس.
//! - سرویس‌ها نمیدونن داده کجا ذخیره میشه
//! - query‌های SQL فقط اینجا نوشته میشن

use chrono::{DateTime, Utc};
use sqlx::{QueryBuilder, Sqlite};

use super::Database;
use crate::error::Result;
use crate::models::{CategoryCount, Id, Item, MonthWindow, NewItem, PriceBucket};

// =====================================
// Item Repository
// =====================================
/// Repository برای مدیریت آیتم‌ها
#[derive(Debug, Clone)]
pub struct ItemRepository {
    db: Database,
}

impl ItemRepository {
    /// ساخت repository جدید
    #[must_use]
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    /// جایگزینی کامل مجموعه: حذف همه و ثبت دسته جدید
    ///
    /// # مفاهیم:
    /// - Transaction: یا همه تغییرات اعمال میشن یا هیچکدوم
    /// - همه آیتم‌های یک دسته یه `created_at` مشترک میگیرن
    ///
    /// آیتم‌ها به همون ترتیب ورودی برگردونده میشن.
    pub async fn replace_all(&self, items: &[NewItem]) -> Result<Vec<Item>> {
        let now = Utc::now();
        let mut tx = self.db.begin().await?;

        sqlx::query("DELETE FROM items").execute(&mut *tx).await?;

        let mut stored = Vec::with_capacity(items.len());
        for new_item in items {
            let item = Self::stamp(new_item, now);

            sqlx::query(
                r#"
                INSERT INTO items (id, name, description, price, category, created_at)
                VALUES (?, ?, ?, ?, ?, ?)
                "#,
            )
            .bind(&item.id)
            .bind(&item.name)
            .bind(&item.description)
            .bind(item.price)
            .bind(&item.category)
            .bind(item.created_at)
            .execute(&mut *tx)
            .await?;

            stored.push(item);
        }

        tx.commit().await?;
        Ok(stored)
    }

    /// ثبت یک آیتم با زمان مشخص
    ///
    /// seed همیشه از `replace_all` استفاده میکنه؛ این برای ساختن
    /// داده در ماه‌های مختلف (مثلا در تست‌ها) هست.
    pub async fn insert_at(&self, new_item: &NewItem, created_at: DateTime<Utc>) -> Result<Item> {
        let item = Self::stamp(new_item, created_at);

        sqlx::query(
            r#"
            INSERT INTO items (id, name, description, price, category, created_at)
            VALUES (?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&item.id)
        .bind(&item.name)
        .bind(&item.description)
        .bind(item.price)
        .bind(&item.category)
        .bind(item.created_at)
        .execute(self.db.pool())
        .await?;

        Ok(item)
    }

    /// همه آیتم‌ها به ترتیب ثبت
    pub async fn find_all(&self) -> Result<Vec<Item>> {
        let items = sqlx::query_as::<_, Item>(
            r#"
            SELECT id, name, description, price, category, created_at
            FROM items
            ORDER BY rowid ASC
            "#,
        )
        .fetch_all(self.db.pool())
        .await?;

        Ok(items)
    }

    /// شمارش کل
    pub async fn count(&self) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM items")
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }

    // =====================================
    // Statistics Queries
    // =====================================

    /// تعداد آیتم‌های یک بازه قیمت در پنجره ماه
    ///
    /// # مفاهیم:
    /// - `QueryBuilder`: ساخت query پویا با bind امن
    pub async fn count_in_bucket(&self, window: &MonthWindow, bucket: &PriceBucket) -> Result<i64> {
        let mut query: QueryBuilder<'_, Sqlite> =
            QueryBuilder::new("SELECT COUNT(*) FROM items WHERE created_at >= ");
        query.push_bind(window.start);
        query.push(" AND created_at < ");
        query.push_bind(window.end);

        query.push(if bucket.min_inclusive {
            " AND price >= "
        } else {
            " AND price > "
        });
        query.push_bind(bucket.min);

        if let Some(max) = bucket.max {
            query.push(" AND price <= ");
            query.push_bind(max);
        }

        let count = query
            .build_query_scalar::<i64>()
            .fetch_one(self.db.pool())
            .await?;

        Ok(count)
    }

    /// گروه‌بندی آیتم‌های پنجره ماه بر اساس دسته‌بندی
    ///
    /// دسته‌هایی که آیتمی ندارن اصلا برنمیگردن. ترتیب بر اساس نام دسته.
    pub async fn count_by_category(&self, window: &MonthWindow) -> Result<Vec<CategoryCount>> {
        let counts = sqlx::query_as::<_, CategoryCount>(
            r#"
            SELECT category, COUNT(*) AS count
            FROM items
            WHERE created_at >= ? AND created_at < ?
            GROUP BY category
            ORDER BY category ASC
            "#,
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_all(self.db.pool())
        .await?;

        Ok(counts)
    }

    /// تعداد کل آیتم‌های پنجره ماه
    pub async fn count_in_window(&self, window: &MonthWindow) -> Result<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM items WHERE created_at >= ? AND created_at < ?",
        )
        .bind(window.start)
        .bind(window.end)
        .fetch_one(self.db.pool())
        .await?;

        Ok(count)
    }

    fn stamp(new_item: &NewItem, created_at: DateTime<Utc>) -> Item {
        Item {
            id: Id::new().into_string(),
            name: new_item.name.clone(),
            description: new_item.description.clone(),
            price: new_item.price,
            category: new_item.category.clone(),
            created_at,
        }
    }
}
