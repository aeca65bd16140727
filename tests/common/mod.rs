//! Shared fixtures for integration tests.

use std::io::Write;

use tempfile::NamedTempFile;

/// Config document used across tests.
pub const GATEWAY_JSON: &str = r#"{
    "port": "8080",
    "versions": {
        "V1": {"/users": "users-api.internal", "/orders": "orders-api.internal"},
        "v2": {"/users": "users-v2.internal"}
    },
    "scheme": "https",
    "fallback_rule": "https://docs.example.com",
    "not_found_error": {"error": "not found", "code": 404}
}"#;

/// Write `content` to a temporary file that lives as long as the handle.
pub fn write_config(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
