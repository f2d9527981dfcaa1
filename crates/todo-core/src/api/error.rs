//! Client-side error taxonomy.

use serde::Deserialize;
use thiserror::Error;

use super::http::Response;

/// Shown when the list cannot be loaded and the server gave no reason
pub const UNREACHABLE_MESSAGE: &str = "The server was unreachable!";

pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Error)]
pub enum ApiError {
    /// The request never got an answer
    #[error("transport failure: {0}")]
    Transport(String),
    /// The server answered with a non-success status
    #[error("server responded with status {status}{}", detail(.message))]
    Status { status: u16, message: Option<String> },
    /// The server answered but the body could not be decoded
    #[error("malformed response body: {0}")]
    Malformed(#[from] serde_json::Error),
}

fn detail(message: &Option<String>) -> String {
    message.as_deref().map(|m| format!(": {m}")).unwrap_or_default()
}

#[derive(Deserialize)]
struct ErrorPayload {
    error: String,
}

impl ApiError {
    /// Build a `Status` error from a non-success response, keeping the
    /// server's `error` message when the body is a JSON error payload.
    pub fn from_response(response: &Response) -> Self {
        let message = response
            .body
            .as_deref()
            .and_then(|body| serde_json::from_str::<ErrorPayload>(body).ok())
            .map(|payload| payload.error);
        ApiError::Status {
            status: response.status,
            message,
        }
    }

    /// Text suitable for showing to the user
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Status { message: Some(message), .. } => message.clone(),
            _ => UNREACHABLE_MESSAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_payload_is_surfaced() {
        let err = ApiError::from_response(&Response::error(500, "The database is on vacation"));
        assert_eq!(err.user_message(), "The database is on vacation");
        assert_eq!(err.to_string(), "server responded with status 500: The database is on vacation");
    }

    #[test]
    fn test_plain_text_failure_reads_as_unreachable() {
        let err = ApiError::from_response(&Response::text(500, "Bad gateway"));
        assert!(matches!(err, ApiError::Status { status: 500, message: None }));
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
    }

    #[test]
    fn test_transport_failure_reads_as_unreachable() {
        let err = ApiError::Transport("connection refused".into());
        assert_eq!(err.user_message(), UNREACHABLE_MESSAGE);
    }
}
