use serde::Serialize;
use thiserror::Error;

use crate::constants::BACKEND_UNREACHABLE_MESSAGE;

/// Error types for the WebSocket shims
#[derive(Error, Debug)]
pub enum ShimError {
    #[error("Backend unreachable: {0}")]
    BackendUnreachable(String),

    #[error("Invalid header value: {0}")]
    InvalidHeader(String),

    #[error("Missing connection ID")]
    MissingConnectionId,

    #[error("Unsupported route: {0}")]
    UnsupportedRoute(String),
}

/// Type alias for Results using ShimError
pub type Result<T> = std::result::Result<T, ShimError>;

/// JSON payload returned to the client alongside a 502
#[derive(Debug, Clone, Serialize)]
struct ErrorBody<'a> {
    message: &'a str,
}

/// Serialized 502 body: `{"message":"Bad Gateway: Backend Unreachable"}`
pub fn bad_gateway_body() -> String {
    let body = ErrorBody {
        message: BACKEND_UNREACHABLE_MESSAGE,
    };
    serde_json::to_string(&body)
        .unwrap_or_else(|_| format!(r#"{{"message":"{}"}}"#, BACKEND_UNREACHABLE_MESSAGE))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ShimError::BackendUnreachable("connection refused".to_string());
        assert_eq!(err.to_string(), "Backend unreachable: connection refused");

        let err = ShimError::MissingConnectionId;
        assert_eq!(err.to_string(), "Missing connection ID");

        let err = ShimError::UnsupportedRoute("$disconnect".to_string());
        assert_eq!(err.to_string(), "Unsupported route: $disconnect");
    }

    #[test]
    fn test_bad_gateway_body_is_exact() {
        assert_eq!(
            bad_gateway_body(),
            r#"{"message":"Bad Gateway: Backend Unreachable"}"#
        );
    }
}
