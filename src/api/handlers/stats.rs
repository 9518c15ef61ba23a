//! # Stats Handlers
//!
//! آمار ماهانه برای نمودارها
//!
//! همه endpoint‌ها `?year=YYYY` اختیاری قبول میکنن (پیش‌فرض: سال جاری).

use axum::{extract::State, Json};

use crate::{
    api::extractors::StatsPeriod,
    error::Result,
    models::{CategoryCount, CombinedStats, PriceRangeCount},
    services::AppState,
};

// =====================================
// Bar Chart
// =====================================
/// تعداد آیتم‌ها در چهار بازه قیمت
///
/// # Endpoint
/// `GET /api/stats/bar/:month`
///
/// # Response
/// ```json
/// [
///   { "range": "0-50", "count": 1 },
///   { "range": "51-100", "count": 0 },
///   { "range": "101-150", "count": 0 },
///   { "range": "151+", "count": 0 }
/// ]
/// ```
pub async fn bar_chart(
    State(state): State<AppState>,
    StatsPeriod(window): StatsPeriod,
) -> Result<Json<Vec<PriceRangeCount>>> {
    let stats = state.stats_service.bar_stats(&window).await?;
    Ok(Json(stats))
}

// =====================================
// Pie Chart
// =====================================
/// تعداد آیتم‌ها در هر دسته‌بندی
///
/// # Endpoint
/// `GET /api/stats/pie/:month`
pub async fn pie_chart(
    State(state): State<AppState>,
    StatsPeriod(window): StatsPeriod,
) -> Result<Json<Vec<CategoryCount>>> {
    let stats = state.stats_service.pie_stats(&window).await?;
    Ok(Json(stats))
}

// =====================================
// Combined
// =====================================
/// هر دو آمار در یک پاسخ
///
/// # Endpoint
/// `GET /api/stats/combined/:month`
///
/// # Response
/// ```json
/// { "barData": [...], "pieData": [...] }
/// ```
pub async fn combined(
    State(state): State<AppState>,
    StatsPeriod(window): StatsPeriod,
) -> Result<Json<CombinedStats>> {
    let stats = state.stats_service.combined_stats(&window).await?;
    Ok(Json(stats))
}
