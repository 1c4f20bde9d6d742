/*
[INPUT]:  Error sources (HTTP transport, API error payloads, serialization, configuration)
[OUTPUT]: Structured error type shared by every requester
[POS]:    Error handling layer - unified error types for entire crate
[UPDATE]: When adding new error sources or improving error messages
*/

use reqwest::StatusCode;
use thiserror::Error;

use crate::types::ErrorResponse;

/// Main error type for the kabu station adapter
#[derive(Error, Debug)]
pub enum KabusError {
    /// HTTP request failed before a response was read
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// API answered with a non-200 status
    #[error(
        "API error (status {}, code {}): {}",
        .0.status_code,
        .0.code,
        .0.message
    )]
    Api(ErrorResponse),

    /// Serialization/deserialization failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// URL parsing failed
    #[error("Invalid URL: {0}")]
    UrlParse(#[from] url::ParseError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl KabusError {
    /// HTTP status of an API error, if this is one
    pub fn status_code(&self) -> Option<u16> {
        match self {
            KabusError::Api(response) => Some(response.status_code),
            KabusError::Http(err) => err.status().map(|status| status.as_u16()),
            _ => None,
        }
    }

    /// Broker-supplied error code of an API error
    pub fn api_code(&self) -> Option<i32> {
        match self {
            KabusError::Api(response) => Some(response.code),
            _ => None,
        }
    }

    /// Check if the API rejected the token or the credentials
    pub fn is_auth_error(&self) -> bool {
        matches!(
            self.status_code().and_then(|code| StatusCode::from_u16(code).ok()),
            Some(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
        )
    }
}

impl From<ErrorResponse> for KabusError {
    fn from(response: ErrorResponse) -> Self {
        KabusError::Api(response)
    }
}

/// Result type alias for kabu station operations
pub type Result<T> = std::result::Result<T, KabusError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status_code: u16, code: i32, message: &str) -> KabusError {
        KabusError::Api(ErrorResponse {
            status_code,
            body: String::new(),
            code,
            message: message.to_string(),
        })
    }

    #[test]
    fn test_api_error_accessors() {
        let err = api_error(400, 4001001, "内部エラー");
        assert_eq!(err.status_code(), Some(400));
        assert_eq!(err.api_code(), Some(4001001));
        assert!(!err.is_auth_error());
    }

    #[test]
    fn test_api_error_display() {
        let err = api_error(400, 4001005, "パラメータ変換エラー");
        assert_eq!(
            err.to_string(),
            "API error (status 400, code 4001005): パラメータ変換エラー"
        );
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(api_error(401, 4001009, "APIキー不一致").is_auth_error());
        assert!(api_error(403, 4001013, "トークン取得失敗").is_auth_error());
        assert!(!KabusError::Config("bad".to_string()).is_auth_error());
    }

    #[test]
    fn test_non_api_errors_have_no_code() {
        let err = KabusError::Config("unknown environment".to_string());
        assert_eq!(err.status_code(), None);
        assert_eq!(err.api_code(), None);
    }
}
