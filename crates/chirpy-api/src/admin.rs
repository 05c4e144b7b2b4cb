use axum::{
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
};
use tracing::info;

use crate::error::ApiError;
use crate::state::{AppState, with_db};

pub fn metrics_page(hits: u64) -> String {
    format!(
        "<html><body><h1>Welcome, Chirpy Admin</h1><p>Chirpy has been visited {} times!</p></body></html>",
        hits
    )
}

/// GET /admin/metrics
pub async fn metrics(State(state): State<AppState>) -> Html<String> {
    Html(metrics_page(state.hits.read()))
}

/// POST /admin/reset: zero the visit counter and delete all users.
pub async fn reset(State(state): State<AppState>) -> Result<Response, ApiError> {
    if !state.config.reset_allowed() {
        return Err(ApiError::Forbidden(format!(
            "reset is not allowed on platform '{}'",
            state.config.platform
        )));
    }

    let deleted = with_db(&state, |db| db.delete_all_users()).await?;
    state.hits.reset();
    info!("Admin reset: visit counter cleared, {} users deleted", deleted);

    Ok((
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
        .into_response())
}
