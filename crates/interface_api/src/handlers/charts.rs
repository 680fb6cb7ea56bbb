//! Chart option handlers
//!
//! Each handler runs a cycle with the requested filters and returns the
//! option object the browser-side chart library renders.

use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;

use crate::charts;
use crate::dto::dashboard::DashboardQuery;
use crate::{error::ApiError, AppState};

/// Plotly pie of claim counts per type
pub async fn pie_chart(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Value>, ApiError> {
    let output = state.run_cycle(query.filter()?).await?;
    Ok(Json(charts::pie_figure(&output.type_counts)))
}

/// Plotly grouped bar of claimed vs approved per type
pub async fn bar_chart(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Value>, ApiError> {
    let output = state.run_cycle(query.filter()?).await?;
    Ok(Json(charts::bar_figure(&output.type_sums, state.config.currency)))
}

/// ECharts donut of claim counts per type
pub async fn donut_chart(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<Value>, ApiError> {
    let output = state.run_cycle(query.filter()?).await?;
    Ok(Json(charts::donut_option(&output.type_counts)))
}
