use axum::{
    body::Bytes,
    extract::{FromRequest, Request},
};
use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// JSON body extractor whose rejections use the `{"error": ...}` envelope
/// instead of axum's plain-text ones.
#[derive(Debug)]
pub struct JsonBody<T>(pub T);

impl<S, T> FromRequest<S> for JsonBody<T>
where
    S: Send + Sync,
    T: DeserializeOwned,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let bytes = Bytes::from_request(req, state)
            .await
            .map_err(|_| ApiError::BadRequest("failed to read request body".into()))?;

        let value = serde_json::from_slice(&bytes)
            .map_err(|_| ApiError::BadRequest("failed to unmarshal request".into()))?;

        Ok(Self(value))
    }
}
