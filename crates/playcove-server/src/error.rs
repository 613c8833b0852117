//! HTTP error mapping.

use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use tracing::warn;

use playcove_core::CoveError;

/// Error as surfaced on the HTTP boundary.
#[derive(Debug)]
pub struct ApiError {
    pub status: StatusCode,
    pub message: String,
}

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    pub fn unauthorized(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNAUTHORIZED,
            message: message.into(),
        }
    }
}

impl From<CoveError> for ApiError {
    fn from(err: CoveError) -> Self {
        let status = match &err {
            CoveError::NotFound { .. } => StatusCode::NOT_FOUND,
            CoveError::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            CoveError::Forbidden(_) => StatusCode::FORBIDDEN,
            CoveError::Conflict(_) => StatusCode::CONFLICT,
            CoveError::ExternalService { .. } => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        Self {
            status,
            message: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        warn!(status = %self.status, message = %self.message, "request failed");
        (
            self.status,
            Json(serde_json::json!({"error": self.message})),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cove_errors_map_to_the_documented_status_codes() {
        let cases = [
            (CoveError::not_found("user", "u-1"), StatusCode::NOT_FOUND),
            (CoveError::invalid_argument("bad"), StatusCode::BAD_REQUEST),
            (CoveError::forbidden("nope"), StatusCode::FORBIDDEN),
            (CoveError::conflict("dup"), StatusCode::CONFLICT),
            (
                CoveError::external_service("llm", "down"),
                StatusCode::BAD_GATEWAY,
            ),
            (
                CoveError::internal("boom"),
                StatusCode::INTERNAL_SERVER_ERROR,
            ),
        ];

        for (err, expected) in cases {
            assert_eq!(ApiError::from(err).status, expected);
        }
    }
}
