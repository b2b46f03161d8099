use crate::ApiError;

#[test]
fn given_404_when_from_status_then_not_found() {
    let err = ApiError::from_status(404, Some("gone".into()));

    assert!(err.is_not_found());
    assert!(!err.is_transport());
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.server_message(), Some("gone"));
}

#[test]
fn given_500_when_from_status_then_status_variant() {
    let err = ApiError::from_status(500, None);

    assert!(!err.is_not_found());
    assert_eq!(err.status(), Some(500));
    assert!(err.server_message().is_none());
    assert!(matches!(err, ApiError::Status { status: 500, .. }));
}

#[test]
fn given_json_error_when_converted_then_json_variant() {
    let json_err = serde_json::from_str::<serde_json::Value>("not json").unwrap_err();
    let err: ApiError = json_err.into();

    assert!(matches!(err, ApiError::Json { .. }));
    assert!(err.status().is_none());
}

#[test]
fn test_user_message_never_leaks_server_detail() {
    let err = ApiError::from_status(401, Some("token_not_valid: signature expired".into()));

    assert_eq!(err.user_message(), "The request failed. Please try again.");
    assert!(!err.user_message().contains("token"));
}

#[test]
fn test_display_includes_status_and_message() {
    let err = ApiError::from_status(400, Some("Passwords don't match".into()));
    let text = err.to_string();

    assert!(text.contains("400"));
    assert!(text.contains("Passwords don't match"));
}
