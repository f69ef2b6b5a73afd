//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but request-level
//! errors should use `kernel::error::AppError`.

mod config;

use axum::{
    Router,
    http::{Method, Uri, header},
};
use config::ServerConfig;
use kernel::error::app_error::AppError;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use withdrawal::withdrawal_router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,withdrawal=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ServerConfig::from_env()?;

    tracing::info!(
        max_notes = config.withdrawal.max_notes,
        max_amount = config.withdrawal.max_dispensable_amount(),
        "Withdrawal limits loaded"
    );

    let app = build_app(&config);

    // Start server
    tracing::info!("Listening on {}", config.addr);

    let listener = TcpListener::bind(config.addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

fn build_app(config: &ServerConfig) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(config.allowed_origins.clone())
        .allow_methods(AllowMethods::list([Method::POST, Method::OPTIONS]))
        .allow_headers(AllowHeaders::list([header::CONTENT_TYPE, header::ACCEPT]));

    Router::new()
        .nest("/api", withdrawal_router(config.withdrawal.clone()))
        .fallback(not_found)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
}

async fn not_found(uri: Uri) -> AppError {
    AppError::not_found(format!("No route for {}", uri.path()))
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "Failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down");
}
