//! JSON error responses for the HTTP facade.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{Map, Value};
use tracing::{error, warn};

use crate::FbbError;

/// A status code plus a JSON body that always carries an `error` message.
#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    body: Map<String, Value>,
}

impl ApiError {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        let mut body = Map::new();
        body.insert("error".to_string(), Value::String(message.into()));
        Self { status, body }
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, message)
    }

    /// Add a field next to `error`, e.g. `success: false`.
    pub fn with_field(mut self, key: &str, value: Value) -> Self {
        self.body.insert(key.to_string(), value);
        self
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

/// Client mistakes map to 400, everything else to 500.
impl From<FbbError> for ApiError {
    fn from(err: FbbError) -> Self {
        if err.is_client_error() {
            warn!(error = %err, "rejected request");
            Self::bad_request(err.to_string())
        } else {
            error!(error = %err, "request failed");
            Self::new(StatusCode::INTERNAL_SERVER_ERROR, err.to_string())
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(Value::Object(self.body))).into_response()
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_client_errors_are_bad_requests() {
        let err = ApiError::from(FbbError::NoActiveSession);
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.body["error"], "No active save set");
    }

    #[test]
    fn test_upstream_errors_are_internal() {
        let err = ApiError::from(FbbError::Unauthorized);
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[test]
    fn test_with_field() {
        let err = ApiError::bad_request("Missing teamId").with_field("success", Value::Bool(false));
        assert_eq!(
            Value::Object(err.body),
            json!({"error": "Missing teamId", "success": false})
        );
    }
}
