//! Environment variable tests for the configuration loader builder.

use crate::loader::builder::ConfigLoader;
use crate::loader::error::ConfigError;
use secrecy::ExposeSecret;
use serial_test::serial;
use std::time::Duration;

use super::env_lock;

#[test]
#[serial]
fn test_env_populates_config() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CIRCONUS_API_URL", Some("https://circonus.example.com/v2")),
            ("CIRCONUS_API_TOKEN", Some("env-token")),
            ("CIRCONUS_API_APP", Some("env-app")),
            ("CIRCONUS_ACCOUNT_ID", Some("7")),
            ("CIRCONUS_SKIP_VERIFY", Some("true")),
            ("CIRCONUS_TIMEOUT", Some("45")),
            ("CIRCONUS_MAX_RETRIES", Some("2")),
        ],
        || {
            let config = ConfigLoader::new().from_env().unwrap().build().unwrap();

            assert_eq!(config.connection.base_url, "https://circonus.example.com/v2");
            assert_eq!(config.auth.token_key.expose_secret(), "env-token");
            assert_eq!(config.auth.token_app, "env-app");
            assert_eq!(config.auth.account_id.as_deref(), Some("7"));
            assert!(config.connection.skip_verify);
            assert_eq!(config.connection.timeout, Duration::from_secs(45));
            assert_eq!(config.connection.max_retries, 2);
        },
    );
}

#[test]
#[serial]
fn test_builder_values_take_precedence_over_env() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CIRCONUS_API_URL", Some("https://env.example.com/v2")),
            ("CIRCONUS_API_TOKEN", Some("env-token")),
        ],
        || {
            let config = ConfigLoader::new()
                .with_base_url("https://cli.example.com/v2".to_string())
                .with_token_key("cli-token".to_string())
                .from_env()
                .unwrap()
                .build()
                .unwrap();

            assert_eq!(config.connection.base_url, "https://cli.example.com/v2");
            assert_eq!(config.auth.token_key.expose_secret(), "cli-token");
        },
    );
}

#[test]
#[serial]
fn test_empty_env_vars_ignored() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars(
        [
            ("CIRCONUS_API_TOKEN", Some("   ")),
            ("CIRCONUS_API_URL", Some("")),
        ],
        || {
            let result = ConfigLoader::new().from_env().unwrap().build();
            assert!(matches!(result, Err(ConfigError::MissingToken)));
        },
    );
}

#[test]
#[serial]
fn test_invalid_numeric_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("CIRCONUS_TIMEOUT", Some("soon"))], || {
        let result = ConfigLoader::new().from_env();
        match result {
            Err(ConfigError::InvalidValue { var, .. }) => assert_eq!(var, "CIRCONUS_TIMEOUT"),
            _ => panic!("expected InvalidValue for CIRCONUS_TIMEOUT"),
        }
    });
}

#[test]
#[serial]
fn test_invalid_bool_env_var() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("CIRCONUS_SKIP_VERIFY", Some("maybe"))], || {
        let result = ConfigLoader::new().from_env();
        assert!(matches!(result, Err(ConfigError::InvalidValue { .. })));
    });
}

#[test]
#[serial]
fn test_dotenv_disabled_skips_loading() {
    let _lock = env_lock().lock().unwrap();

    temp_env::with_vars([("DOTENV_DISABLED", Some("1"))], || {
        assert!(ConfigLoader::new().load_dotenv().is_ok());
    });
}
