/*
[INPUT]:  Test configuration and mock server requirements
[OUTPUT]: Shared test utilities, fixtures, and mock helpers
[POS]:    Test infrastructure - shared across all test modules
[UPDATE]: When adding new test patterns or fixtures
*/

//! Common test utilities for swyftx-client tests

use swyftx_client::{ClientConfig, SwyftxClient};
use wiremock::MockServer;

/// Setup a mock HTTP server for testing
pub async fn setup_mock_server() -> MockServer {
    MockServer::start().await
}

/// Client configuration pointed at the mock server
#[allow(dead_code)]
pub fn mock_config(server: &MockServer) -> ClientConfig {
    ClientConfig {
        base_url: server.uri(),
        ..ClientConfig::default()
    }
}

/// Client against the mock server carrying a fixed access token
#[allow(dead_code)]
pub fn mock_client(server: &MockServer) -> SwyftxClient {
    SwyftxClient::with_config(mock_config(server), mock_api_key())
        .expect("client init")
        .with_token(mock_access_token())
}

#[allow(dead_code)]
pub fn mock_api_key() -> String {
    "test-api-key".to_string()
}

#[allow(dead_code)]
pub fn mock_access_token() -> String {
    "eyJhbGciOiJIUzI1NiIsInR5cCI6IkpXVCJ9.test.signature".to_string()
}
