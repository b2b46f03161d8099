use crate::ApiClient;

use std::time::Duration;

#[test]
fn test_base_url_trailing_slash_trimmed() {
    let client = ApiClient::new("http://localhost:8000/");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_base_url_no_trailing_slash() {
    let client = ApiClient::new("http://localhost:8000");
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_with_timeout_trims_base_url() {
    let client = ApiClient::with_timeout("http://localhost:8000//", Duration::from_secs(5)).unwrap();
    assert_eq!(client.base_url, "http://localhost:8000");
}

#[test]
fn test_from_config_uses_base_url() {
    let config = hs_config::ApiConfig {
        base_url: "https://portal.example/".to_string(),
        timeout_secs: 3,
    };
    let client = ApiClient::from_config(&config).unwrap();
    assert_eq!(client.base_url, "https://portal.example");
}

#[test]
fn test_error_message_from_message_field() {
    let body = r#"{"message": "Quote could not be saved"}"#;
    assert_eq!(
        ApiClient::error_message(body).as_deref(),
        Some("Quote could not be saved")
    );
}

#[test]
fn test_error_message_from_error_string() {
    let body = r#"{"error": "Shipment not found. Please check your tracking number."}"#;
    assert_eq!(
        ApiClient::error_message(body).as_deref(),
        Some("Shipment not found. Please check your tracking number.")
    );
}

#[test]
fn test_error_message_from_nested_error_object() {
    let body = r#"{"error": {"code": "NOT_FOUND", "message": "Missing"}}"#;
    assert_eq!(ApiClient::error_message(body).as_deref(), Some("Missing"));
}

#[test]
fn test_error_message_from_detail() {
    let body = r#"{"detail": "Authentication credentials were not provided."}"#;
    assert_eq!(
        ApiClient::error_message(body).as_deref(),
        Some("Authentication credentials were not provided.")
    );
}

#[test]
fn test_error_message_from_non_field_errors() {
    let body = r#"{"non_field_errors": ["Invalid credentials"]}"#;
    assert_eq!(
        ApiClient::error_message(body).as_deref(),
        Some("Invalid credentials")
    );
}

#[test]
fn test_error_message_absent() {
    assert!(ApiClient::error_message("<html>502 Bad Gateway</html>").is_none());
    assert!(ApiClient::error_message(r#"{"email": ["This field is required."]}"#).is_none());
    assert!(ApiClient::error_message("").is_none());
}
