//! Error types for the Circonus client.

use thiserror::Error;

/// Result type alias for client operations.
pub type Result<T> = std::result::Result<T, ClientError>;

/// Errors that can occur during Circonus client operations.
#[derive(Error, Debug)]
pub enum ClientError {
    /// A resource identifier failed validation before any request was sent.
    #[error("invalid {resource} CID ({cid})")]
    InvalidCid { resource: &'static str, cid: String },

    /// No API token was configured.
    #[error("Missing credentials: {0}")]
    MissingCredentials(String),

    /// HTTP request error.
    #[error("HTTP error: {0}")]
    HttpError(#[from] reqwest::Error),

    /// API error response from Circonus.
    #[error("API error ({status}) at {url}: {message}{}", .reference.as_ref().map(|r| format!(" [Reference: {r}]")).unwrap_or_default())]
    ApiError {
        status: u16,
        url: String,
        message: String,
        reference: Option<String>,
    },

    /// Invalid response format from Circonus.
    #[error("Invalid response format: {0}")]
    InvalidResponse(String),

    /// Maximum retries exceeded.
    #[error("Maximum retries exceeded ({0} attempts)")]
    MaxRetriesExceeded(usize),

    /// Invalid URL.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),
}

impl ClientError {
    /// Check if this error is retryable.
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::HttpError(e) => e.is_timeout() || e.is_connect(),
            Self::ApiError { status, .. } => Self::is_retryable_status(*status),
            _ => false,
        }
    }

    /// Check if an HTTP status code is retryable.
    ///
    /// Retryable status codes:
    /// - 429: Too Many Requests (rate limiting)
    /// - 502: Bad Gateway
    /// - 503: Service Unavailable
    /// - 504: Gateway Timeout
    ///
    /// 500 is not retried: the API returns it for malformed searches, which
    /// fail the same way on every attempt.
    pub fn is_retryable_status(status: u16) -> bool {
        matches!(status, 429 | 502 | 503 | 504)
    }

    /// Check if this error indicates an authentication failure.
    pub fn is_auth_error(&self) -> bool {
        match self {
            Self::MissingCredentials(_) => true,
            Self::ApiError { status, .. } => *status == 401 || *status == 403,
            _ => false,
        }
    }

    /// Check if this error means the requested resource does not exist.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ApiError { status: 404, .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_cid_display() {
        let err = ClientError::InvalidCid {
            resource: "alert",
            cid: "none".to_string(),
        };
        assert_eq!(err.to_string(), "invalid alert CID (none)");
    }

    #[test]
    fn test_api_error_display_with_reference() {
        let err = ClientError::ApiError {
            status: 403,
            url: "https://api.circonus.com/v2/alert".to_string(),
            message: "Forbidden: token not authorized".to_string(),
            reference: Some("abc-123".to_string()),
        };
        let display = err.to_string();
        assert!(display.starts_with("API error (403) at https://api.circonus.com/v2/alert"));
        assert!(display.ends_with("[Reference: abc-123]"));
    }

    #[test]
    fn test_error_is_retryable() {
        assert!(!ClientError::MaxRetriesExceeded(4).is_retryable());
        assert!(
            ClientError::ApiError {
                status: 503,
                url: String::new(),
                message: String::new(),
                reference: None,
            }
            .is_retryable()
        );
        assert!(
            !ClientError::InvalidCid {
                resource: "alert",
                cid: "none".to_string(),
            }
            .is_retryable()
        );
    }

    #[test]
    fn test_error_is_auth_error() {
        assert!(ClientError::MissingCredentials("test".to_string()).is_auth_error());
        assert!(
            ClientError::ApiError {
                status: 401,
                url: String::new(),
                message: String::new(),
                reference: None,
            }
            .is_auth_error()
        );
        assert!(!ClientError::MaxRetriesExceeded(4).is_auth_error());
    }

    #[test]
    fn test_is_retryable_status() {
        assert!(ClientError::is_retryable_status(429));
        assert!(ClientError::is_retryable_status(502));
        assert!(ClientError::is_retryable_status(503));
        assert!(ClientError::is_retryable_status(504));

        assert!(!ClientError::is_retryable_status(400));
        assert!(!ClientError::is_retryable_status(401));
        assert!(!ClientError::is_retryable_status(404));
        assert!(!ClientError::is_retryable_status(500));
        assert!(!ClientError::is_retryable_status(200));
    }

    #[test]
    fn test_is_not_found() {
        assert!(
            ClientError::ApiError {
                status: 404,
                url: String::new(),
                message: String::new(),
                reference: None,
            }
            .is_not_found()
        );
        assert!(!ClientError::InvalidResponse("x".to_string()).is_not_found());
    }
}
