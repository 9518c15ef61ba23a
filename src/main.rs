//! # Catalog Stats - نقطه ورود برنامه
//!
//! ترتیب راه‌اندازی: `.env` -> تنظیمات -> لاگینگ -> دیتابیس -> router -> سرور

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use catalog_stats::{
    api::create_router,
    config::{Config, Environment},
    database::Database,
    error::{AppError, Result},
    services::AppState,
};

/// نقطه ورود اصلی برنامه
///
/// # Errors
/// خطا برمیگردونه اگه:
/// - تنظیمات نامعتبر باشن
/// - دیتابیس متصل نشه یا migration شکست بخوره
/// - سرور استارت نشه
#[tokio::main]
async fn main() -> Result<()> {
    // اگه فایل .env نباشه اوکیه
    dotenvy::dotenv().ok();

    let config = Config::from_env()?;
    init_tracing(config.environment);

    info!("🚀 Starting Catalog Stats Service...");

    config.validate()?;
    info!(catalog_url = %config.catalog_url, "✅ Configuration loaded successfully");

    let database = Database::connect(&config.database_url).await?;
    info!("✅ Database connected successfully");

    database.migrate().await?;
    info!("✅ Database migrations applied");

    let addr = config.server_addr();
    let state = AppState::new(database, config)?;
    let app = create_router(state);

    let listener = TcpListener::bind(&addr).await?;
    info!("🌐 Server listening on http://{}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Server(e.to_string()))?;

    Ok(())
}

/// راه‌اندازی سیستم tracing برای لاگینگ
///
/// # مفاهیم:
/// - EnvFilter: فیلتر کردن لاگ‌ها بر اساس `RUST_LOG`
/// - `Option<Layer>`: لایه‌ای که `None` باشه هیچ کاری نمیکنه
///
/// در production خروجی JSON و در بقیه محیط‌ها خروجی خوانا.
fn init_tracing(environment: Environment) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("catalog_stats=debug,tower_http=debug"));

    let (pretty, json) = if environment.is_production() {
        (None, Some(fmt::layer().json().with_target(true)))
    } else {
        (
            Some(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_file(true)
                    .with_line_number(true)
                    .pretty(),
            ),
            None,
        )
    };

    tracing_subscriber::registry()
        .with(env_filter)
        .with(pretty)
        .with(json)
        .init();
}
