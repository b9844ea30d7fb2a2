//! Tests for the auth module

use super::*;
use wiremock::matchers::{basic_auth, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

#[test]
fn test_credentials_accessors() {
    let creds = Credentials::new("hacker", "secret-token");
    assert_eq!(creds.username(), "hacker");
    assert_eq!(creds.api_key(), "secret-token");
}

#[test]
fn test_credentials_debug_redacts_api_key() {
    let creds = Credentials::new("hacker", "secret-token");
    let debug = format!("{creds:?}");

    assert!(debug.contains("hacker"));
    assert!(debug.contains("<redacted>"));
    assert!(!debug.contains("secret-token"));
}

#[test]
fn test_basic_auth_header() {
    let creds = Credentials::new("user", "pass");

    let client = reqwest::Client::new();
    let req = creds.apply(client.get("https://example.com/api"));

    let built = req.build().unwrap();
    // base64("user:pass") = "dXNlcjpwYXNz"
    assert_eq!(
        built.headers().get("Authorization").unwrap(),
        "Basic dXNlcjpwYXNz"
    );
}

#[tokio::test]
async fn test_basic_auth_reaches_server() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/hackers/programs"))
        .and(basic_auth("hacker", "token-123"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let creds = Credentials::new("hacker", "token-123");
    let client = reqwest::Client::new();
    let response = creds
        .apply(client.get(format!("{}/v1/hackers/programs", server.uri())))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), 200);
}
