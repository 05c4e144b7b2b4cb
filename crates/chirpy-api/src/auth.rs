use axum::{extract::State, http::StatusCode, response::Response};
use tracing::info;
use uuid::Uuid;

use chirpy_types::api::{CreateUserRequest, LoginRequest};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::password::{hash_password, verify_password};
use crate::response::respond_with_json;
use crate::rows::user_from_row;
use crate::state::{AppState, with_db};

/// POST /api/users: register a new account.
pub async fn create_user(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<CreateUserRequest>,
) -> Result<Response, ApiError> {
    let email = req.email.trim().to_string();
    if email.is_empty() || req.password.is_empty() {
        return Err(ApiError::BadRequest("email and password are required".into()));
    }

    let password_hash = hash_password(&req.password)?;
    let user_id = Uuid::new_v4().to_string();

    // The UNIQUE index on email decides between concurrent registrations
    let row = with_db(&state, move |db| db.create_user(&user_id, &email, &password_hash))
        .await?
        .ok_or_else(|| ApiError::Conflict("email already registered".into()))?;
    info!("Registered user {}", row.id);

    respond_with_json(StatusCode::CREATED, &user_from_row(row))
}

/// POST /api/login: check credentials and return the account.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Response, ApiError> {
    let email = req.email.trim().to_string();
    let row = with_db(&state, move |db| db.get_user_by_email(&email))
        .await?
        .ok_or_else(rejected)?;

    if !verify_password(&req.password, &row.password)? {
        return Err(rejected());
    }

    respond_with_json(StatusCode::OK, &user_from_row(row))
}

fn rejected() -> ApiError {
    ApiError::Unauthorized("incorrect email or password".into())
}
