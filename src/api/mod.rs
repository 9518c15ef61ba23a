//! # لایه API
//!
//! این ماژول HTTP handlers و routing رو مدیریت میکنه.
//!
//! ## مفاهیم Rust + Axum:
//! - **Router**: تعریف مسیرها
//! - **Extractors**: استخراج و اعتبارسنجی داده از request
//! - **State**: اشتراک state بین handlers
//! - **Tower**: زیرساخت middleware
//!
//! ## ساختار URL‌ها:
//! - `POST /api/seed` - پر کردن دوباره دیتابیس از کاتالوگ
//! - `GET /api/stats/bar/:month` - تعداد در بازه‌های قیمت
//! - `GET /api/stats/pie/:month` - تعداد در هر دسته‌بندی
//! - `GET /api/stats/combined/:month` - هر دو با هم
//! - `GET /health` - Health check

mod handlers;
mod middleware;
mod extractors;

pub use handlers::*;
pub use middleware::*;
pub use extractors::*;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use tower::ServiceBuilder;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::services::AppState;

// =====================================
// Router Builder
// =====================================
/// ساخت Router اصلی برنامه
///
/// # مفاهیم:
/// - `.nest()`: گروه‌بندی route‌ها
/// - `.layer()`: اضافه کردن middleware
/// - `.with_state()`: تزریق state
pub fn create_router(state: AppState) -> Router {
    let request_timeout = state.config().request_timeout();

    Router::new()
        .nest("/api", api_routes())
        .route("/health", get(handlers::health::health_check))
        .fallback(handlers::not_found)
        .layer(
            ServiceBuilder::new()
                // اولین layer بیرونی‌ترین هست
                .layer(axum_middleware::from_fn(middleware::request_id))
                .layer(TraceLayer::new_for_http())
                .layer(TimeoutLayer::new(request_timeout))
                .layer(CompressionLayer::new())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(axum_middleware::from_fn(middleware::security_headers)),
        )
        .with_state(state)
}

/// Route‌های API
fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/seed", post(handlers::seed::seed_database))
        .nest("/stats", stats_routes())
}

/// Route‌های آمار
fn stats_routes() -> Router<AppState> {
    Router::new()
        .route("/bar/:month", get(handlers::stats::bar_chart))
        .route("/pie/:month", get(handlers::stats::pie_chart))
        .route("/combined/:month", get(handlers::stats::combined))
}
