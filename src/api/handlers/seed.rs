//! # Seed Handler
//!
//! پر کردن دوباره دیتابیس از کاتالوگ

use axum::{extract::State, Json};
use tracing::info;

use crate::{
    api::extractors::RequestId,
    error::Result,
    models::SeedResponse,
    services::AppState,
};

// =====================================
// Seed Database
// =====================================
/// حذف همه آیتم‌ها و ثبت دوباره از کاتالوگ
///
/// # Endpoint
/// `POST /api/seed`
///
/// # Response
/// ```json
/// {
///   "message": "Database seeded successfully!",
///   "items": [{ "id": "...", "name": "...", "price": 109.95, ... }]
/// }
/// ```
pub async fn seed_database(
    State(state): State<AppState>,
    RequestId(request_id): RequestId,
) -> Result<Json<SeedResponse>> {
    let items = state.seed_service.seed().await?;

    info!(request_id = %request_id, count = items.len(), "Seed request completed");

    Ok(Json(SeedResponse::seeded(items)))
}
