#![allow(dead_code)]

use tvdb_rs::{Credentials, Locale, Tvdb};
use wiremock::matchers::{body_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Token the stubbed login endpoint hands out.
pub const TOKEN: &str = "stub-header.stub-payload.stub-signature";

pub const USERNAME: &str = "account";
pub const USER_KEY: &str = "stub-user-key";
pub const API_KEY: &str = "stub-api-key";

/// Stub the login endpoint. `expected_calls` is asserted when the server shuts down, which
/// makes redundant or missing authentication visible in every test using this helper.
pub async fn mock_login(server: &MockServer, expected_calls: u64) {
    Mock::given(method("POST"))
        .and(path("/login"))
        .and(body_json(serde_json::json!({
            "username": USERNAME,
            "userkey": USER_KEY,
            "apikey": API_KEY,
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "token": TOKEN,
        })))
        .expect(expected_calls)
        .mount(server)
        .await;
}

/// A client pointed at the given mock server, credentials matching [`mock_login`].
pub fn client(server: &MockServer) -> Tvdb {
    Tvdb::builder()
        .base_url(server.uri())
        .credentials(Credentials::new(USERNAME, USER_KEY, API_KEY))
        .build()
        .unwrap()
}

/// Like [`client`] but with a client-wide default language.
pub fn client_with_language(server: &MockServer, language: Locale) -> Tvdb {
    Tvdb::builder()
        .base_url(server.uri())
        .credentials(Credentials::new(USERNAME, USER_KEY, API_KEY))
        .default_language(language)
        .build()
        .unwrap()
}
