//! API Errors
//!
//! Failure taxonomy for backend calls.

use thiserror::Error;

/// Common result type for backend calls
pub type ApiResult<T> = Result<T, ApiError>;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Request never got an HTTP response
    #[error("network error: {0}")]
    Network(String),
    #[error("request timed out after {0} ms")]
    Timeout(u32),
    /// 409: someone else changed the resource first
    #[error("conflict: resource state changed on the server")]
    Conflict,
    #[error("server responded with HTTP {status}")]
    Status { status: u16 },
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("browser API unavailable: {0}")]
    Browser(String),
}

impl ApiError {
    /// Classify an HTTP status; `None` means success
    pub fn from_status(status: u16) -> Option<Self> {
        match status {
            200..=299 => None,
            409 => Some(ApiError::Conflict),
            _ => Some(ApiError::Status { status }),
        }
    }

    /// True when the server received the request and answered it
    pub fn server_answered(&self) -> bool {
        matches!(self, ApiError::Conflict | ApiError::Status { .. } | ApiError::Decode(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_classification() {
        assert_eq!(ApiError::from_status(200), None);
        assert_eq!(ApiError::from_status(204), None);
        assert_eq!(ApiError::from_status(409), Some(ApiError::Conflict));
        assert_eq!(ApiError::from_status(401), Some(ApiError::Status { status: 401 }));
        assert_eq!(ApiError::from_status(500), Some(ApiError::Status { status: 500 }));
    }

    #[test]
    fn test_server_answered() {
        assert!(ApiError::Status { status: 404 }.server_answered());
        assert!(ApiError::Conflict.server_answered());
        assert!(!ApiError::Network("offline".into()).server_answered());
        assert!(!ApiError::Timeout(100).server_answered());
    }
}
