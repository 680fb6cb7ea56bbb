//! HTTP Dashboard Layer
//!
//! This crate serves the medical claims dashboard using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: the HTML page, JSON aggregates, the claim table and chart options
//! - **Charts**: Plotly and ECharts option builders
//! - **Middleware**: request logging
//! - **DTOs**: query parsing and response bodies
//! - **Error Handling**: consistent error responses
//!
//! Every request that needs data runs one rendering cycle through
//! [`AppState::run_cycle`]. Cycles are serialized, so a page refresh that
//! arrives while another cycle is still reading the workbook waits for it.
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::create_router;
//!
//! let app = create_router(source, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod charts;
pub mod config;
pub mod dto;
pub mod error;
pub mod frontend;
pub mod handlers;
pub mod middleware;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Instant;

use axum::{middleware as axum_middleware, routing::get, Router};
use tokio::sync::Mutex;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use domain_claims::{ClaimFilter, ClaimSet, ClaimSource, ClaimsPipeline, PipelineOutput};

use crate::config::DashboardConfig;
use crate::error::ApiError;
use crate::handlers::{charts as chart_handlers, dashboard, health, page};
use crate::middleware::request_log_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub source: Arc<dyn ClaimSource>,
    pub config: DashboardConfig,
    cycle_lock: Arc<Mutex<()>>,
    cycles: Arc<AtomicU64>,
}

impl AppState {
    pub fn new(source: Arc<dyn ClaimSource>, config: DashboardConfig) -> Self {
        Self {
            source,
            config,
            cycle_lock: Arc::new(Mutex::new(())),
            cycles: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Number of rendering cycles started so far
    pub fn cycles_started(&self) -> u64 {
        self.cycles.load(Ordering::SeqCst)
    }

    /// Runs one load, filter and aggregate cycle.
    ///
    /// The workbook read runs on the blocking pool and owns the cycle lock
    /// until it finishes, even if the request that started it is dropped.
    pub async fn run_cycle(&self, filter: ClaimFilter) -> Result<PipelineOutput, ApiError> {
        let guard = Arc::clone(&self.cycle_lock).lock_owned().await;
        let cycle = self.cycles.fetch_add(1, Ordering::SeqCst) + 1;
        let started = Instant::now();

        let source = Arc::clone(&self.source);
        let result = tokio::task::spawn_blocking(move || {
            let _guard = guard;
            ClaimsPipeline::new(source).run(&filter)
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Rendering cycle {} aborted: {}", cycle, e)))?;

        match result {
            Ok(output) => {
                info!(
                    cycle,
                    rows = output.claims.len(),
                    duration_ms = started.elapsed().as_millis() as u64,
                    "Rendering cycle complete"
                );
                Ok(output)
            }
            Err(err) => {
                warn!(cycle, error = %err, "Rendering cycle failed");
                Err(err.into())
            }
        }
    }

    /// Loads the source once without filtering, under the same lock
    pub async fn check_source(&self) -> Result<ClaimSet, ApiError> {
        let guard = Arc::clone(&self.cycle_lock).lock_owned().await;
        let source = Arc::clone(&self.source);
        tokio::task::spawn_blocking(move || {
            let _guard = guard;
            source.load()
        })
        .await
        .map_err(|e| ApiError::Internal(format!("Source check aborted: {}", e)))?
        .map_err(ApiError::from)
    }
}

/// Creates the dashboard router
///
/// # Arguments
///
/// * `source` - Where each rendering cycle loads claims from
/// * `config` - Dashboard configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(source: Arc<dyn ClaimSource>, config: DashboardConfig) -> Router {
    let state = AppState::new(source, config);

    // Liveness and readiness
    let health_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check));

    // JSON routes
    let api_routes = Router::new()
        .route("/dashboard", get(dashboard::get_dashboard))
        .route("/claims", get(dashboard::list_claims))
        .route("/charts/pie", get(chart_handlers::pie_chart))
        .route("/charts/bar", get(chart_handlers::bar_chart))
        .route("/charts/donut", get(chart_handlers::donut_chart));

    Router::new()
        .route("/", get(page::render_dashboard))
        .merge(health_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(axum_middleware::from_fn(request_log_middleware)),
        )
        .with_state(state)
}
