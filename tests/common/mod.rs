//! Shared helpers for the mockito-backed integration tests.

#![allow(dead_code)]

use gigachat::GigaChatOptions;
use url::Url;

/// Options pointing both the API base address and the OAuth endpoint at the
/// mock server.
pub fn server_options(server: &mockito::ServerGuard) -> GigaChatOptions {
    GigaChatOptions::new("secret-key")
        .unwrap()
        .api_base_address(Url::parse(&format!("{}/api/v1/", server.url())).unwrap())
        .oauth_endpoint(Url::parse(&format!("{}/oauth", server.url())).unwrap())
}

/// Token endpoint body with the given lifetime in seconds.
pub fn token_body(lifetime_secs: i64) -> String {
    format!(r#"{{"access_token":"test-token","expires_at":{lifetime_secs}}}"#)
}
