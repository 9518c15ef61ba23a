//! # سرویس آمار
//!
//! محاسبه آمار ماهانه: بازه‌های قیمت، دسته‌بندی‌ها و ترکیب هر دو

use futures::future::try_join_all;
use tracing::instrument;

use crate::{
    database::ItemRepository,
    error::Result,
    models::{CategoryCount, CombinedStats, MonthWindow, PriceRangeCount, PRICE_BUCKETS},
};

// =====================================
// Stats Service
// =====================================
/// سرویس آمار
///
/// هیچ state‌ای جز repository نداره؛ پنجره ماه همیشه از بیرون داده میشه.
#[derive(Debug, Clone)]
pub struct StatsService {
    repo: ItemRepository,
}

impl StatsService {
    #[must_use]
    pub fn new(repo: ItemRepository) -> Self {
        Self { repo }
    }

    /// تعداد آیتم‌ها در هر بازه قیمت
    ///
    /// # مفاهیم:
    /// - Fan-out / fan-in: چهار query همزمان با `try_join_all`
    /// - ترتیب خروجی همون ترتیب `PRICE_BUCKETS` هست
    #[instrument(skip(self), fields(year = window.year, month = window.month))]
    pub async fn bar_stats(&self, window: &MonthWindow) -> Result<Vec<PriceRangeCount>> {
        let queries = PRICE_BUCKETS.iter().map(|bucket| async move {
            let count = self.repo.count_in_bucket(window, bucket).await?;
            Ok::<_, crate::error::AppError>(PriceRangeCount {
                range: bucket.label.to_string(),
                count,
            })
        });

        try_join_all(queries).await
    }

    /// تعداد آیتم‌ها در هر دسته‌بندی
    #[instrument(skip(self), fields(year = window.year, month = window.month))]
    pub async fn pie_stats(&self, window: &MonthWindow) -> Result<Vec<CategoryCount>> {
        self.repo.count_by_category(window).await
    }

    /// آمار میله‌ای و دایره‌ای با هم، به صورت همزمان
    #[instrument(skip(self), fields(year = window.year, month = window.month))]
    pub async fn combined_stats(&self, window: &MonthWindow) -> Result<CombinedStats> {
        let (bar_data, pie_data) =
            tokio::try_join!(self.bar_stats(window), self.pie_stats(window))?;

        Ok(CombinedStats { bar_data, pie_data })
    }
}
