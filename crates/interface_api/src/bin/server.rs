//! Medical Claims Dashboard - Server Binary
//!
//! Serves the dashboard page and its JSON endpoints.
//!
//! # Usage
//!
//! ```bash
//! # Run with default configuration
//! cargo run --bin claims-dashboard
//!
//! # Point at another workbook
//! DASHBOARD_DATA_PATH=/data/claims.xlsx DASHBOARD_SHEET_NAME=Sheet1 cargo run --bin claims-dashboard
//! ```
//!
//! # Environment Variables
//!
//! * `DASHBOARD_HOST` - Server host (default: 0.0.0.0)
//! * `DASHBOARD_PORT` - Server port (default: 8501)
//! * `DASHBOARD_DATA_PATH` - Workbook path (default: Cleaned_Medical_Bills_Processed.xlsx)
//! * `DASHBOARD_SHEET_NAME` - Sheet name (default: All_Cleaned_Data)
//! * `DASHBOARD_REFRESH_INTERVAL_SECS` - Page refresh interval (default: 120)
//! * `DASHBOARD_CURRENCY` - Display currency code (default: INR)
//! * `DASHBOARD_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)
//! * `DASHBOARD_LOG_FORMAT` - Log output: pretty or json (default: pretty)

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Context;
use infra_sheet::WorkbookClaimSource;
use interface_api::{config::DashboardConfig, create_router};
use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = DashboardConfig::from_env().context("Failed to read DASHBOARD_* settings")?;
    init_tracing(&config.log_level, &config.log_format);
    config.validate().context("Invalid dashboard configuration")?;

    tracing::info!(
        host = %config.host,
        port = %config.port,
        data_path = %config.data_path.display(),
        sheet = %config.sheet_name,
        refresh_secs = config.refresh_interval_secs,
        "Starting Medical Claims Dashboard"
    );

    if !config.data_path.exists() {
        tracing::warn!(
            data_path = %config.data_path.display(),
            "Workbook not found; pages will show a load error until it appears"
        );
    }

    let source = WorkbookClaimSource::new(config.data_path.clone(), config.sheet_name.clone());
    let app = create_router(Arc::new(source), config.clone());

    let addr: SocketAddr = config
        .server_addr()
        .parse()
        .with_context(|| format!("Invalid server address {}", config.server_addr()))?;

    tracing::info!(%addr, "Server listening");

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(log_level))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    let registry = tracing_subscriber::registry().with(filter);
    if log_format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_target(true))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_target(true))
            .init();
    }
}

/// Waits for Ctrl+C or SIGTERM so in-flight cycles can finish.
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            tracing::info!("Received Ctrl+C, initiating graceful shutdown");
        }
        _ = terminate => {
            tracing::info!("Received SIGTERM, initiating graceful shutdown");
        }
    }
}
