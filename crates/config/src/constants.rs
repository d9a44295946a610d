//! Centralized constants for the Circonus client workspace.
//!
//! This module contains default values used across crates to avoid
//! magic number duplication.

// =============================================================================
// Connection & Timeout Defaults
// =============================================================================

/// Default Circonus API base URL.
pub const DEFAULT_API_URL: &str = "https://api.circonus.com/v2";

/// Default application name sent in the `X-Circonus-App-Name` header.
pub const DEFAULT_APP_NAME: &str = "circonus-cli";

/// Default HTTP request timeout in seconds.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Maximum allowed request timeout in seconds (1 hour).
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// Default maximum number of HTTP redirects to follow.
pub const DEFAULT_MAX_REDIRECTS: usize = 5;

/// Default maximum number of retries for failed requests.
pub const DEFAULT_MAX_RETRIES: usize = 3;

/// Upper bound for configured retries.
pub const MAX_MAX_RETRIES: usize = 10;

// =============================================================================
// HTTP Headers
// =============================================================================

/// Header carrying the API token.
pub const HEADER_AUTH_TOKEN: &str = "X-Circonus-Auth-Token";

/// Header carrying the application name the token is registered for.
pub const HEADER_APP_NAME: &str = "X-Circonus-App-Name";

/// Header selecting the account for tokens with access to several accounts.
pub const HEADER_ACCOUNT_ID: &str = "X-Circonus-Account-ID";
