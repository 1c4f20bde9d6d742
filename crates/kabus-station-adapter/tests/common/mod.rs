/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for kabus-station-adapter tests

use kabus_station_adapter::HttpClient;
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Transport pointing at `path` on the mock server
pub fn mock_client(server: &MockServer, path: &str, token: &str) -> HttpClient {
    HttpClient::new(&format!("{}/kabusapi{}", server.uri(), path), token)
        .expect("mock client should build")
}

/// Token returned by the mocked `/token` endpoint
pub fn mock_token() -> String {
    "8d6b5d1d6c7a4bd9a37e6c3c5e3b6d1f".to_string()
}

/// Error payload the API sends for internal errors
pub const INTERNAL_ERROR_BODY: &str = r#"{"Code": 4001001,"Message": "内部エラー"}"#;
