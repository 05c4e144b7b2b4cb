use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;

use chirpy_types::api::ErrorResponse;

use crate::error::ApiError;

/// Serialize `payload` and wrap it in a JSON response with `status`.
///
/// The body is encoded before anything else is built, so an encoding
/// failure leaves no half-written response behind: the caller gets
/// `ApiError::Encoding` and decides what to send instead.
pub fn respond_with_json<T>(status: StatusCode, payload: &T) -> Result<Response, ApiError>
where
    T: Serialize + ?Sized,
{
    let body = serde_json::to_vec(payload)?;
    Ok((status, [(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// `{"error": message}` with `status`.
pub fn respond_with_error(status: StatusCode, message: &str) -> Response {
    let payload = ErrorResponse {
        error: message.to_string(),
    };
    respond_with_json(status, &payload).unwrap_or_else(|_| {
        (
            StatusCode::INTERNAL_SERVER_ERROR,
            [(header::CONTENT_TYPE, "application/json")],
            r#"{"error":"failed to encode response"}"#,
        )
            .into_response()
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn json_response_sets_status_and_content_type() {
        let resp = respond_with_json(StatusCode::CREATED, &serde_json::json!({ "ok": true })).unwrap();
        assert_eq!(resp.status(), StatusCode::CREATED);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    }

    #[test]
    fn unencodable_payload_is_an_error() {
        // JSON object keys must be strings
        let mut payload = HashMap::new();
        payload.insert((1u8, 2u8), "value");

        let err = respond_with_json(StatusCode::OK, &payload).unwrap_err();
        assert!(matches!(err, ApiError::Encoding(_)));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn error_response_uses_given_status() {
        let resp = respond_with_error(StatusCode::BAD_REQUEST, "chirp is too long");
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        assert_eq!(resp.headers()[header::CONTENT_TYPE], "application/json");
    }
}
