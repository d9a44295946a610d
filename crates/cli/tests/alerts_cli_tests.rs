//! Integration tests for the `alerts` subcommands.

mod common;

use circonus_client::testing::load_fixture;
use common::{TEST_TOKEN, circonus_cmd, circonus_cmd_with_base_url};
use predicates::prelude::*;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

#[tokio::test]
async fn test_alerts_get_bare_id_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert/1234"))
        .and(header("X-Circonus-Auth-Token", TEST_TOKEN))
        .and(header("X-Circonus-App-Name", "circonus-cli"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/get_alert.json")))
        .expect(1)
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args(["alerts", "get", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--- Alert Information ---"))
        .stdout(predicate::str::contains("CID: /alert/1234"));
}

#[tokio::test]
async fn test_alerts_get_json_output() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert/1234"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/get_alert.json")))
        .mount(&server)
        .await;

    let output = circonus_cmd_with_base_url(&server.uri())
        .args(["alerts", "get", "/alert/1234", "--output", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["_cid"], "/alert/1234");
}

#[tokio::test]
async fn test_alerts_get_invalid_cid_makes_no_request() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args(["alerts", "get", "/invalid"])
        .assert()
        .code(5)
        .stderr(predicate::str::contains("invalid alert CID (/alert//invalid)"));
}

#[tokio::test]
async fn test_alerts_get_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert/99"))
        .respond_with(ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "code": "404",
            "message": "Not Found"
        })))
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args(["alerts", "get", "99"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("404"));
}

#[tokio::test]
async fn test_alerts_list_table() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/list_alerts.json")))
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args(["alerts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("CID"))
        .stdout(predicate::str::contains("/alert/1234"))
        .stdout(predicate::str::contains("/alert/1235"))
        .stdout(predicate::str::contains("/alert/1236"));
}

#[tokio::test]
async fn test_alerts_list_empty_json() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args(["--output", "json", "alerts", "list"])
        .assert()
        .success()
        .stdout(predicate::str::diff("[]\n"));
}

#[tokio::test]
async fn test_alerts_search_sends_sorted_query() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert"))
        .and(|request: &Request| {
            request.url.query()
                == Some("f__cleared_on=null&search=%28host%3D%22somehost.example.com%22%29")
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/open_alerts.json")))
        .expect(1)
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args([
            "alerts",
            "search",
            "--search",
            "(host=\"somehost.example.com\")",
            "--filter",
            "f__cleared_on=null",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("/alert/1235"));
}

#[tokio::test]
async fn test_alerts_search_without_arguments_lists_all() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert"))
        .and(|request: &Request| request.url.query().is_none())
        .respond_with(ResponseTemplate::new(200).set_body_json(load_fixture("alerts/list_alerts.json")))
        .expect(1)
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args(["alerts", "search"])
        .assert()
        .success();
}

#[test]
fn test_alerts_search_bad_filter_is_usage_error() {
    circonus_cmd()
        .args(["alerts", "search", "--filter", "f__severity"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("KEY=VALUE"));
}

#[tokio::test]
async fn test_cli_flags_override_env_and_send_account_header() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert"))
        .and(header("X-Circonus-Auth-Token", "flag-token"))
        .and(header("X-Circonus-App-Name", "flag-app"))
        .and(header("X-Circonus-Account-ID", "42"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1)
        .mount(&server)
        .await;

    circonus_cmd()
        .env("CIRCONUS_API_URL", "http://127.0.0.1:1")
        .args([
            "--api-url",
            &server.uri(),
            "--api-token",
            "flag-token",
            "--api-app",
            "flag-app",
            "--account-id",
            "42",
            "alerts",
            "list",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("No alerts found."));
}

#[tokio::test]
async fn test_forbidden_returns_permission_denied() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/alert"))
        .respond_with(ResponseTemplate::new(403).set_body_json(load_fixture("alerts/error_forbidden.json")))
        .mount(&server)
        .await;

    circonus_cmd_with_base_url(&server.uri())
        .args(["alerts", "list"])
        .assert()
        .code(6)
        .stderr(predicate::str::contains("Forbidden"));
}

#[test]
fn test_missing_token_returns_authentication_exit_code() {
    circonus_cmd()
        .env_remove("CIRCONUS_API_TOKEN")
        .args(["alerts", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("CIRCONUS_API_TOKEN"));
}

#[test]
fn test_invalid_timeout_is_general_error() {
    circonus_cmd_with_base_url("http://127.0.0.1:1")
        .args(["--timeout", "0", "alerts", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("invalid timeout"));
}

#[test]
fn test_connection_refused_returns_exit_code_3() {
    circonus_cmd_with_base_url("http://127.0.0.1:1")
        .args(["--max-retries", "1", "alerts", "list"])
        .assert()
        .code(3);
}

#[test]
fn test_invalid_output_format() {
    circonus_cmd_with_base_url("http://127.0.0.1:1")
        .args(["--output", "xml", "alerts", "list"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Invalid output format"));
}

#[test]
fn test_help_lists_alert_subcommands() {
    circonus_cmd()
        .args(["alerts", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("get"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("search"));
}
