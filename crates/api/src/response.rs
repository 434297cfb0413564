//! API response types.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON response with an explicit status code.
///
/// Bodies are written as-is, without an envelope.
#[derive(Debug)]
pub struct ApiResponse<T: Serialize> {
    status: StatusCode,
    body: T,
}

impl<T: Serialize> ApiResponse<T> {
    /// Create a `200 OK` response.
    pub const fn ok(body: T) -> Self {
        Self {
            status: StatusCode::OK,
            body,
        }
    }

    /// Create a `201 Created` response.
    pub const fn created(body: T) -> Self {
        Self {
            status: StatusCode::CREATED,
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

/// Success response carrying a human-readable message next to the payload.
#[derive(Debug, Serialize)]
pub struct MessageResponse<T: Serialize> {
    /// Outcome description.
    pub message: &'static str,
    /// Payload fields, inlined next to `message`.
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> MessageResponse<T> {
    /// Pair a message with its payload.
    pub const fn new(message: &'static str, data: T) -> Self {
        Self { message, data }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Serialize)]
    struct Payload {
        planet: u8,
    }

    #[test]
    fn test_message_response_is_flat() {
        let value =
            serde_json::to_value(MessageResponse::new("done", Payload { planet: 1 })).unwrap();
        assert_eq!(value, json!({"message": "done", "planet": 1}));
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiResponse::ok(()).into_response().status(), StatusCode::OK);
        assert_eq!(
            ApiResponse::created(()).into_response().status(),
            StatusCode::CREATED
        );
    }
}
