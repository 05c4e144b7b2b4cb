use axum::{
    http::{StatusCode, header},
    response::IntoResponse,
};

/// GET /api/healthz
pub async fn healthz() -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        "OK",
    )
}
