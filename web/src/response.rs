//! Response envelope.
//!
//! Every response body, success or failure, has the same shape:
//!
//! ```json
//! { "code": 200, "message": "success", "data": { ... } }
//! ```
//!
//! `data` is `null` when there is nothing to return.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Message used for every successful response.
pub const SUCCESS: &str = "success";

/// JSON envelope returned by every endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// HTTP status code, repeated in the body
    pub code: u16,
    /// `"success"` or the error text
    pub message: String,
    /// Payload, `null` when absent
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    /// Envelope with an explicit status.
    #[must_use]
    pub fn new(status: StatusCode, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code: status.as_u16(),
            message: message.into(),
            data,
        }
    }

    /// 200 with a payload.
    #[must_use]
    pub fn ok(data: T) -> Self {
        Self::new(StatusCode::OK, SUCCESS, Some(data))
    }

    /// 201 with a payload.
    #[must_use]
    pub fn created(data: T) -> Self {
        Self::new(StatusCode::CREATED, SUCCESS, Some(data))
    }
}

impl ApiResponse<()> {
    /// 200 with no payload.
    #[must_use]
    pub fn success() -> Self {
        Self::new(StatusCode::OK, SUCCESS, None)
    }

    /// 201 with no payload.
    #[must_use]
    pub fn created_empty() -> Self {
        Self::new(StatusCode::CREATED, SUCCESS, None)
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, Json(self)).into_response()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_envelope_shape() {
        let body = serde_json::to_value(ApiResponse::ok(vec![1, 2])).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"code": 200, "message": "success", "data": [1, 2]})
        );
    }

    #[test]
    fn test_empty_data_is_null() {
        let body = serde_json::to_value(ApiResponse::created_empty()).unwrap();
        assert_eq!(
            body,
            serde_json::json!({"code": 201, "message": "success", "data": null})
        );
    }

    #[test]
    fn test_status_carried_to_response() {
        let response = ApiResponse::created("R1").into_response();
        assert_eq!(response.status(), StatusCode::CREATED);
    }
}
