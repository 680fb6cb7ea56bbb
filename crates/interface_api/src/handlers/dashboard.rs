//! Dashboard data handlers

use axum::{
    extract::{Query, State},
    Json,
};

use crate::dto::dashboard::{ClaimsTableResponse, DashboardQuery, DashboardResponse};
use crate::{error::ApiError, AppState};

/// Counts and sums per claim type for the current filters
pub async fn get_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardResponse>, ApiError> {
    let filter = query.filter()?;
    let output = state.run_cycle(filter).await?;
    Ok(Json(DashboardResponse::new(filter, &output)))
}

/// The filtered claim table
pub async fn list_claims(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<ClaimsTableResponse>, ApiError> {
    let filter = query.filter()?;
    let output = state.run_cycle(filter).await?;
    Ok(Json(ClaimsTableResponse::new(&output)))
}
