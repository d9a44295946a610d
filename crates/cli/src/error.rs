//! CLI exit codes for scripting and automation.
//!
//! Responsibilities:
//! - Define structured exit codes that scripts can use to distinguish error types.
//! - Map ClientError and ConfigError variants to appropriate exit codes.
//!
//! Does NOT handle:
//! - Error message formatting (handled by anyhow Display).
//! - Signal handling (see cancellation.rs).
//!
//! Invariants:
//! - Exit codes 1-8 are reserved for specific error categories.
//! - Exit code 130 is reserved for SIGINT (128 + SIGINT).

use circonus_client::ClientError;
use circonus_config::ConfigError;

/// Structured exit codes for circonus-cli.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    Success = 0,

    /// Unhandled or generic failure, including invalid configuration values.
    GeneralError = 1,

    /// Missing API token or HTTP 401.
    AuthenticationFailed = 2,

    /// Network, timeout, DNS or URL failure.
    ConnectionError = 3,

    /// HTTP 404 for the requested alert.
    NotFound = 4,

    /// Invalid CID, bad parameters, or an undecodable response.
    ValidationError = 5,

    /// HTTP 403.
    PermissionDenied = 6,

    /// HTTP 429 after retries were exhausted.
    RateLimited = 7,

    /// HTTP 502/503/504 after retries were exhausted.
    ServiceUnavailable = 8,

    /// SIGINT/Ctrl+C.
    Interrupted = 130,
}

impl ExitCode {
    /// Convert the exit code to an i32 for use with std::process::exit().
    pub const fn as_i32(self) -> i32 {
        self as u8 as i32
    }
}

impl From<&ClientError> for ExitCode {
    fn from(err: &ClientError) -> Self {
        match err {
            ClientError::MissingCredentials(_) => ExitCode::AuthenticationFailed,
            ClientError::ApiError { status: 401, .. } => ExitCode::AuthenticationFailed,

            ClientError::InvalidUrl(_) => ExitCode::ConnectionError,
            ClientError::HttpError(e) => {
                if e.is_connect() || e.is_timeout() {
                    ExitCode::ConnectionError
                } else {
                    ExitCode::GeneralError
                }
            }

            ClientError::ApiError { status: 404, .. } => ExitCode::NotFound,

            ClientError::InvalidCid { .. } => ExitCode::ValidationError,
            ClientError::InvalidResponse(_) => ExitCode::ValidationError,
            ClientError::ApiError { status: 400, .. } => ExitCode::ValidationError,

            ClientError::ApiError { status: 403, .. } => ExitCode::PermissionDenied,

            ClientError::ApiError { status: 429, .. } => ExitCode::RateLimited,

            ClientError::ApiError {
                status: 502..=504, ..
            } => ExitCode::ServiceUnavailable,
            // Only retryable statuses exhaust retries; the last one was 429 or 5xx.
            ClientError::MaxRetriesExceeded(_) => ExitCode::ServiceUnavailable,

            ClientError::ApiError { .. } => ExitCode::GeneralError,
        }
    }
}

impl From<&ConfigError> for ExitCode {
    fn from(err: &ConfigError) -> Self {
        match err {
            ConfigError::MissingToken => ExitCode::AuthenticationFailed,
            ConfigError::InvalidValue { .. }
            | ConfigError::MissingBaseUrl
            | ConfigError::InvalidTimeout { .. }
            | ConfigError::InvalidMaxRetries { .. }
            | ConfigError::DotenvParse { .. }
            | ConfigError::DotenvIo { .. }
            | ConfigError::DotenvUnknown => ExitCode::GeneralError,
        }
    }
}

/// Extension trait for anyhow::Error to extract exit codes.
pub trait ExitCodeExt {
    /// Returns ExitCode::GeneralError if no ClientError or ConfigError is in the chain.
    fn exit_code(&self) -> ExitCode;
}

impl ExitCodeExt for anyhow::Error {
    fn exit_code(&self) -> ExitCode {
        self.chain()
            .find_map(|cause| {
                if let Some(err) = cause.downcast_ref::<ClientError>() {
                    Some(ExitCode::from(err))
                } else {
                    cause.downcast_ref::<ConfigError>().map(ExitCode::from)
                }
            })
            .unwrap_or(ExitCode::GeneralError)
    }
}
