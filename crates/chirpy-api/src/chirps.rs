use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::Response,
};
use tracing::{debug, info};
use uuid::Uuid;

use chirpy_filter::validate;
use chirpy_types::api::{Chirp, CreateChirpRequest, ValidateChirpRequest, ValidateChirpResponse};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::response::respond_with_json;
use crate::rows::chirp_from_row;
use crate::state::{AppState, with_db};

/// Length check then censoring, shared by the create and validate endpoints.
fn clean_body(state: &AppState, body: &str) -> Result<String, ApiError> {
    let body = validate(body, state.config.max_body_length)?;
    let cleaned = state.blocklist.censor(body);
    if cleaned != body {
        debug!("Censored chirp body");
    }
    Ok(cleaned)
}

/// POST /api/chirps: validate, censor and store a chirp.
pub async fn create_chirp(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateChirpRequest>,
) -> Result<Response, ApiError> {
    let body = clean_body(&state, &req.body)?;

    let chirp_id = Uuid::new_v4().to_string();
    let user_id = req.user_id.to_string();
    let row = with_db(&state, move |db| db.create_chirp(&chirp_id, &body, &user_id)).await?;
    info!("Created chirp {} for user {}", row.id, row.user_id);

    respond_with_json(StatusCode::CREATED, &chirp_from_row(row))
}

/// GET /api/chirps: every chirp, oldest first.
pub async fn list_chirps(State(state): State<AppState>) -> Result<Response, ApiError> {
    let rows = with_db(&state, |db| db.list_chirps()).await?;
    let chirps: Vec<Chirp> = rows.into_iter().map(chirp_from_row).collect();

    respond_with_json(StatusCode::OK, &chirps)
}

/// GET /api/chirps/{chirp_id}
pub async fn get_chirp(
    State(state): State<AppState>,
    Path(chirp_id): Path<String>,
) -> Result<Response, ApiError> {
    let chirp_id: Uuid = chirp_id
        .parse()
        .map_err(|_| ApiError::NotFound("no match found in request".into()))?;

    let id = chirp_id.to_string();
    let row = with_db(&state, move |db| db.get_chirp_by_id(&id))
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("chirp {} not found", chirp_id)))?;

    respond_with_json(StatusCode::OK, &chirp_from_row(row))
}

/// POST /api/validate_chirp: the create pipeline without storage.
pub async fn validate_chirp(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ValidateChirpRequest>,
) -> Result<Response, ApiError> {
    let cleaned_body = clean_body(&state, &req.body)?;

    respond_with_json(StatusCode::OK, &ValidateChirpResponse { cleaned_body })
}
