use axum::{
    Router,
    middleware,
    routing::{get, post},
};
use tower::Layer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::error::ApiError;
use crate::state::AppState;
use crate::{admin, auth, chirps, health, metrics};

/// Assemble the full HTTP surface.
pub fn app(state: AppState) -> Router {
    // Static files under /app, every request counted
    let assets = middleware::from_fn_with_state(state.clone(), metrics::count_visit)
        .layer(ServeDir::new(&state.config.static_dir));

    let api = Router::new()
        .route("/healthz", get(health::healthz))
        .route("/users", post(auth::create_user))
        .route("/login", post(auth::login))
        .route("/chirps", get(chirps::list_chirps).post(chirps::create_chirp))
        .route("/chirps/{chirp_id}", get(chirps::get_chirp))
        .route("/validate_chirp", post(chirps::validate_chirp));

    let admin = Router::new()
        .route("/metrics", get(admin::metrics))
        .route("/reset", post(admin::reset));

    Router::new()
        .nest_service("/app", assets)
        .nest("/api", api)
        .nest("/admin", admin)
        .fallback(not_found)
        .method_not_allowed_fallback(method_not_allowed)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn not_found() -> ApiError {
    ApiError::NotFound("no match found in request".into())
}

async fn method_not_allowed() -> ApiError {
    ApiError::MethodNotAllowed("method not allowed".into())
}
