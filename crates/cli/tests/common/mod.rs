//! Shared test utilities for circonus-cli integration tests.
//!
//! Invariants:
//! - Commands never load a local `.env` file.
//! - `CIRCONUS_API_TOKEN` is set to "test-token" unless overridden.

use assert_cmd::Command;

pub const TEST_TOKEN: &str = "test-token";

/// Returns a hermetic `circonus-cli` command for integration testing.
pub fn circonus_cmd() -> Command {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("circonus-cli");

    cmd.env("DOTENV_DISABLED", "1");
    cmd.env("CIRCONUS_API_TOKEN", TEST_TOKEN);

    cmd.env_remove("CIRCONUS_API_URL")
        .env_remove("CIRCONUS_API_APP")
        .env_remove("CIRCONUS_ACCOUNT_ID")
        .env_remove("CIRCONUS_SKIP_VERIFY")
        .env_remove("CIRCONUS_TIMEOUT")
        .env_remove("CIRCONUS_MAX_RETRIES")
        .env_remove("RUST_LOG");

    cmd
}

/// Returns a hermetic `circonus-cli` command pointed at `base_url`.
pub fn circonus_cmd_with_base_url(base_url: &str) -> Command {
    let mut cmd = circonus_cmd();
    cmd.env("CIRCONUS_API_URL", base_url);
    cmd
}
