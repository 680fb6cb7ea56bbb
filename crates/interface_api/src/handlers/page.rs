//! Dashboard page handler

use axum::{
    extract::{Query, State},
    response::{Html, IntoResponse, Response},
};
use tracing::warn;

use crate::dto::dashboard::{DashboardQuery, View};
use crate::error::ApiError;
use crate::frontend::{self, PageContext};
use crate::AppState;

/// Renders the selected view as a full HTML page.
///
/// Failures still produce the page: the sidebar stays usable and the view
/// is replaced by an error banner carrying the matching status code.
pub async fn render_dashboard(
    State(state): State<AppState>,
    Query(query): Query<DashboardQuery>,
) -> Response {
    let mut ctx = PageContext {
        view: View::default(),
        filter: Default::default(),
        refresh_secs: state.config.refresh_interval_secs,
        currency: state.config.currency,
    };

    let result = match (query.view(), query.filter()) {
        (Ok(view), Ok(filter)) => {
            ctx.view = view;
            ctx.filter = filter;
            state.run_cycle(filter).await
        }
        (Err(err), _) | (_, Err(err)) => Err(err),
    };

    match result {
        Ok(output) => Html(frontend::render_page(&ctx, &frontend::render_view(&ctx, &output)))
            .into_response(),
        Err(err) => render_failure(&ctx, err),
    }
}

fn render_failure(ctx: &PageContext, err: ApiError) -> Response {
    warn!(view = %ctx.view, kind = err.kind(), error = %err, "Dashboard page failed");
    let page = frontend::render_page(ctx, &frontend::render_error(&err));
    (err.status(), Html(page)).into_response()
}
