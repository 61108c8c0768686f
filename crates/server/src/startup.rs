use std::{env, net::SocketAddr, sync::Arc};

use axum::Router;
use common::utils::logging::init_logging_default;
use dotenvy::dotenv;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::routes::{self, ServerState};
use service::notify::SmtpNotifier;

/// Initialize logging via shared common utils
fn init_logging() {
    init_logging_default();
}

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Load configuration from config.toml, falling back to env vars section by
/// section when no file is present.
fn load_config() -> configs::AppConfig {
    match configs::AppConfig::load_and_validate() {
        Ok(cfg) => cfg,
        Err(_) => {
            let mut cfg = configs::AppConfig::default();
            cfg.server.host = env::var("SERVER_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
            cfg.server.port = env::var("SERVER_PORT")
                .ok()
                .and_then(|p| p.parse::<u16>().ok())
                .unwrap_or(8080);
            cfg.database.normalize_from_env();
            cfg.mail.normalize_from_env();
            cfg
        }
    }
}

/// Public entry: build the app and run the HTTP server
pub async fn run() -> anyhow::Result<()> {
    dotenv().ok();
    init_logging();

    let cfg = load_config();

    // DB connection
    let db = if cfg.database.url.trim().is_empty() {
        models::db::connect().await?
    } else {
        models::db::connect_with_config(&cfg.database).await?
    };

    if !cfg.mail.notifications_enabled() {
        info!("admin address not configured; contact notifications disabled");
    }
    let notifier = Arc::new(SmtpNotifier::new(cfg.mail.clone()));

    let state = ServerState { db, notifier };

    // Build router
    let app: Router = routes::build_router(build_cors(), state);

    // Bind and serve
    let addr: SocketAddr = format!("{}:{}", cfg.server.host, cfg.server.port).parse()?;
    info!(%addr, "starting dispatch api server");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
