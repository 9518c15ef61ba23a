//! # تست‌های Integration
//!
//! این فایل تست‌های end-to-end رو شامل میشه.
//!
//! ## مفاهیم Rust در تست‌ها:
//! - `#[tokio::test]`: تست‌های async
//! - `tower::ServiceExt::oneshot`: فرستادن یک request به Router بدون باز کردن پورت
//! - `proptest!`: تست بر اساس ویژگی (property-based)
//!
//! ## اجرای تست‌ها:
//! ```bash
//! cargo test                               # همه تست‌ها
//! cargo test --test integration_tests      # فقط این فایل
//! cargo test api_tests                     # فقط تست‌های HTTP
//! ```

// =====================================
// تست‌های Utils
// =====================================
mod utils_tests {
    use catalog_stats::utils;

    #[test]
    fn test_month_parsing() {
        assert_eq!(utils::parse_month("3").unwrap(), 3);
        assert_eq!(utils::parse_month("12").unwrap(), 12);

        assert!(utils::parse_month("abc").is_err());
        assert!(utils::parse_month("0").is_err());
        assert!(utils::parse_month("13").is_err());
    }

    #[test]
    fn test_year_range() {
        assert!(utils::validate_year(utils::MIN_YEAR).is_ok());
        assert!(utils::validate_year(utils::MAX_YEAR).is_ok());
        assert!(utils::validate_year(utils::MIN_YEAR - 1).is_err());
        assert!(utils::validate_year(utils::MAX_YEAR + 1).is_err());
    }

    #[test]
    fn test_clean_whitespace() {
        assert_eq!(utils::clean_whitespace("  men's   clothing "), "men's clothing");
    }
}

// =====================================
// تست‌های Config
// =====================================
mod config_tests {
    use catalog_stats::config::{Config, ConfigBuilder, Environment, DEFAULT_CATALOG_URL};

    #[test]
    fn test_default_config() {
        let config = Config::default();

        assert_eq!(config.port, 5000);
        assert_eq!(config.catalog_url, DEFAULT_CATALOG_URL);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_validation() {
        let result = ConfigBuilder::new().catalog_url("ftp://example.com").build_validated();
        assert!(result.is_err());

        let result = ConfigBuilder::new().port(0).build_validated();
        assert!(result.is_err());

        let config = ConfigBuilder::new()
            .host("127.0.0.1")
            .port(8080)
            .environment(Environment::Testing)
            .build_validated()
            .unwrap();
        assert_eq!(config.server_addr(), "127.0.0.1:8080");
    }

    #[test]
    fn test_environment_parsing() {
        assert_eq!(Environment::from("prod".to_string()), Environment::Production);
        assert_eq!(Environment::from("TEST".to_string()), Environment::Testing);
        assert_eq!(Environment::from("whatever".to_string()), Environment::Development);
    }
}

// =====================================
// تست‌های Error
// =====================================
mod error_tests {
    use axum::http::StatusCode;
    use catalog_stats::error::AppError;

    #[test]
    fn test_error_status_codes() {
        assert_eq!(AppError::invalid_month("13").status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            AppError::NotFound("x".to_string()).status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::Internal("x".to_string()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_internal_details_are_hidden() {
        let err = AppError::Config("secret path /etc/app".to_string());
        assert!(!err.public_message().contains("/etc/app"));
    }
}

// =====================================
// تست‌های Model
// =====================================
mod model_tests {
    use catalog_stats::models::{MonthWindow, PriceBucket, PRICE_BUCKETS};
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_bucket_labels_in_order() {
        let labels: Vec<_> = PRICE_BUCKETS.iter().map(|b| b.label).collect();
        assert_eq!(labels, vec!["0-50", "51-100", "101-150", "151+"]);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(PriceBucket::classify(0.0).unwrap().label, "0-50");
        assert_eq!(PriceBucket::classify(50.0).unwrap().label, "0-50");
        assert_eq!(PriceBucket::classify(50.5).unwrap().label, "51-100");
        assert_eq!(PriceBucket::classify(100.0).unwrap().label, "51-100");
        assert_eq!(PriceBucket::classify(150.5).unwrap().label, "151+");
        assert!(PriceBucket::classify(-1.0).is_none());
    }

    #[test]
    fn test_month_window_is_half_open() {
        let window = MonthWindow::new(2024, 1).unwrap();

        let last_second = Utc.with_ymd_and_hms(2024, 1, 31, 23, 59, 59).unwrap();
        let next_month = Utc.with_ymd_and_hms(2024, 2, 1, 0, 0, 0).unwrap();

        assert!(window.contains(last_second));
        assert!(!window.contains(next_month));
    }
}

// =====================================
// تست‌های HTTP (end-to-end)
// =====================================
mod api_tests {
    use std::sync::Arc;

    use axum::{
        body::{to_bytes, Body},
        http::{Request, StatusCode},
        Router,
    };
    use chrono::Datelike;
    use pretty_assertions::assert_eq;
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use catalog_stats::{
        api::create_router,
        catalog::StaticCatalog,
        config::ConfigBuilder,
        database::Database,
        error::ErrorResponse,
        models::{
            CatalogProduct, CategoryCount, CombinedStats, HealthResponse, Item, PriceRangeCount,
            SeedResponse,
        },
        services::AppState,
    };

    fn product(title: &str, price: f64, category: &str) -> CatalogProduct {
        CatalogProduct {
            title: title.to_string(),
            description: "d".to_string(),
            price,
            category: category.to_string(),
        }
    }

    /// ساخت Router با دیتابیس in-memory و کاتالوگ ثابت
    async fn test_app(products: Vec<CatalogProduct>) -> Router {
        let db = Database::in_memory().await.unwrap();
        let config = ConfigBuilder::new().build();
        let state = AppState::with_catalog(db, config, Arc::new(StaticCatalog::new(products)));
        create_router(state)
    }

    async fn send(app: &Router, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();

        let response = app.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body.to_vec())
    }

    async fn send_json<T: DeserializeOwned>(app: &Router, method: &str, uri: &str) -> (StatusCode, T) {
        let (status, body) = send(app, method, uri).await;
        (status, serde_json::from_slice(&body).unwrap())
    }

    async fn seed(app: &Router) -> Vec<Item> {
        let (status, response): (_, SeedResponse) = send_json(app, "POST", "/api/seed").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(response.message, SeedResponse::SUCCESS_MESSAGE);
        response.items
    }

    /// مسیر آمار برای ماهی که آیتم‌ها داخلش ساخته شدن
    fn stats_uri(kind: &str, item: &Item) -> String {
        format!(
            "/api/stats/{}/{}?year={}",
            kind,
            item.created_at.month(),
            item.created_at.year()
        )
    }

    #[tokio::test]
    async fn test_seed_then_bar_and_pie() {
        let app = test_app(vec![product("A", 10.0, "x")]).await;

        let items = seed(&app).await;
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "A");
        assert_eq!(items[0].description, "d");

        let (status, bar): (_, Vec<PriceRangeCount>) =
            send_json(&app, "GET", &stats_uri("bar", &items[0])).await;
        assert_eq!(status, StatusCode::OK);
        let counts: Vec<_> = bar.iter().map(|b| (b.range.as_str(), b.count)).collect();
        assert_eq!(
            counts,
            vec![("0-50", 1), ("51-100", 0), ("101-150", 0), ("151+", 0)]
        );

        let (status, pie): (_, Vec<CategoryCount>) =
            send_json(&app, "GET", &stats_uri("pie", &items[0])).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            pie,
            vec![CategoryCount {
                category: "x".to_string(),
                count: 1
            }]
        );
    }

    #[tokio::test]
    async fn test_other_month_is_empty() {
        let app = test_app(vec![product("A", 10.0, "x")]).await;
        let items = seed(&app).await;

        let other_year = items[0].created_at.year() - 1;
        let uri = format!("/api/stats/pie/{}?year={}", items[0].created_at.month(), other_year);
        let (status, pie): (_, Vec<CategoryCount>) = send_json(&app, "GET", &uri).await;

        assert_eq!(status, StatusCode::OK);
        assert!(pie.is_empty());

        let uri = format!("/api/stats/bar/{}?year={}", items[0].created_at.month(), other_year);
        let (_, bar): (_, Vec<PriceRangeCount>) = send_json(&app, "GET", &uri).await;
        assert_eq!(bar.len(), 4);
        assert!(bar.iter().all(|b| b.count == 0));
    }

    #[tokio::test]
    async fn test_pie_is_sorted_by_category() {
        let app = test_app(vec![
            product("A", 10.0, "zeta"),
            product("B", 60.0, "alpha"),
            product("C", 200.0, "zeta"),
        ])
        .await;
        let items = seed(&app).await;

        let (_, pie): (_, Vec<CategoryCount>) =
            send_json(&app, "GET", &stats_uri("pie", &items[0])).await;
        let pairs: Vec<_> = pie.iter().map(|c| (c.category.as_str(), c.count)).collect();
        assert_eq!(pairs, vec![("alpha", 1), ("zeta", 2)]);
    }

    #[tokio::test]
    async fn test_combined_matches_separate_endpoints() {
        let app = test_app(vec![
            product("A", 10.0, "x"),
            product("B", 120.0, "y"),
            product("C", 151.0, "x"),
        ])
        .await;
        let items = seed(&app).await;

        let (_, bar): (_, Vec<PriceRangeCount>) =
            send_json(&app, "GET", &stats_uri("bar", &items[0])).await;
        let (_, pie): (_, Vec<CategoryCount>) =
            send_json(&app, "GET", &stats_uri("pie", &items[0])).await;
        let (status, combined): (_, CombinedStats) =
            send_json(&app, "GET", &stats_uri("combined", &items[0])).await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(combined, CombinedStats { bar_data: bar, pie_data: pie });
    }

    #[tokio::test]
    async fn test_combined_uses_camel_case_keys() {
        let app = test_app(vec![product("A", 10.0, "x")]).await;
        let items = seed(&app).await;

        let (_, value): (_, serde_json::Value) =
            send_json(&app, "GET", &stats_uri("combined", &items[0])).await;
        assert!(value.get("barData").is_some());
        assert!(value.get("pieData").is_some());
    }

    #[tokio::test]
    async fn test_invalid_month_is_rejected() {
        let app = test_app(vec![]).await;

        for month in ["abc", "0", "13"] {
            for kind in ["bar", "pie", "combined"] {
                let uri = format!("/api/stats/{}/{}", kind, month);
                let (status, error): (_, ErrorResponse) = send_json(&app, "GET", &uri).await;

                assert_eq!(status, StatusCode::BAD_REQUEST, "{}", uri);
                assert_eq!(error.status_code, Some(400));
            }
        }
    }

    #[tokio::test]
    async fn test_invalid_year_is_rejected() {
        let app = test_app(vec![]).await;

        let (status, _) = send(&app, "GET", "/api/stats/bar/1?year=abc").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);

        let (status, _) = send(&app, "GET", "/api/stats/bar/1?year=1800").await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_reseed_replaces_collection() {
        let app = test_app(vec![product("A", 10.0, "x"), product("B", 75.0, "y")]).await;

        let first = seed(&app).await;
        let second = seed(&app).await;

        let names = |items: &[Item]| items.iter().map(|i| i.name.clone()).collect::<Vec<_>>();
        assert_eq!(names(&first), names(&second));

        let (_, pie): (_, Vec<CategoryCount>) =
            send_json(&app, "GET", &stats_uri("pie", &second[0])).await;
        let total: i64 = pie.iter().map(|c| c.count).sum();
        assert_eq!(total, 2);
    }

    #[tokio::test]
    async fn test_request_id_header() {
        let app = test_app(vec![]).await;

        let response = app
            .clone()
            .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert!(response.headers().contains_key("x-request-id"));
        assert_eq!(response.headers()["x-content-type-options"], "nosniff");

        let response = app
            .oneshot(
                Request::builder()
                    .uri("/health")
                    .header("x-request-id", "abc123")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(response.headers()["x-request-id"], "abc123");
    }

    #[tokio::test]
    async fn test_health_reports_database() {
        let app = test_app(vec![]).await;

        let (status, health): (_, HealthResponse) = send_json(&app, "GET", "/health").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(health.status, "healthy");
        assert!(health.database);
    }

    #[tokio::test]
    async fn test_unknown_route_is_json_404() {
        let app = test_app(vec![]).await;

        let (status, error): (_, ErrorResponse) = send_json(&app, "GET", "/api/nope").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(error.status_code, Some(404));
    }
}

// =====================================
// Property-Based Tests
// =====================================
mod property_tests {
    use catalog_stats::models::PRICE_BUCKETS;
    use catalog_stats::utils;
    use proptest::prelude::*;

    proptest! {
        /// هر قیمت نامنفی دقیقا در یک بازه میفته
        #[test]
        fn test_price_in_exactly_one_bucket(price in 0.0f64..1_000_000.0) {
            let matches = PRICE_BUCKETS.iter().filter(|b| b.contains(price)).count();
            prop_assert_eq!(matches, 1);
        }

        /// ماه‌های 1 تا 12 همیشه قبول میشن
        #[test]
        fn test_valid_months_parse(month in 1u32..=12) {
            prop_assert_eq!(utils::parse_month(&month.to_string()).unwrap(), month);
        }

        /// هر عدد بیرون از 1 تا 12 رد میشه
        #[test]
        fn test_out_of_range_months_fail(month in 13u32..100_000) {
            prop_assert!(utils::parse_month(&month.to_string()).is_err());
        }
    }
}
