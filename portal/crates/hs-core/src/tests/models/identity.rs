use crate::{AuthResponse, Identity, Role};

#[test]
fn given_numeric_id_when_deserialize_then_id_is_string() {
    let json = r#"{"id":42,"email":"jane@example.com","username":"jane","first_name":"Jane","last_name":"Roe","phone":"","company":"","address":""}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.id, "42");
    assert_eq!(identity.email, "jane@example.com");
    assert_eq!(identity.phone.as_deref(), Some(""));
    assert!(identity.role.is_none());
}

#[test]
fn given_string_id_when_deserialize_then_id_is_preserved() {
    let json = r#"{"id":"demo-admin-1","email":"admin@heritageshipping.com","role":"admin"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.id, "demo-admin-1");
    assert_eq!(identity.role, Some(Role::Admin));
    assert!(identity.username.is_empty());
    assert!(identity.company.is_none());
}

#[test]
fn given_unknown_role_when_deserialize_then_maps_to_other() {
    let json = r#"{"id":"1","email":"a@b.c","role":"harbour_master"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    assert_eq!(identity.role, Some(Role::Other("harbour_master".to_string())));
}

#[test]
fn given_unknown_role_when_round_tripped_then_tag_preserved() {
    let json = r#"{"id":"1","email":"a@b.c","role":"manager"}"#;
    let identity: Identity = serde_json::from_str(json).unwrap();

    let saved = serde_json::to_string(&identity).unwrap();
    let restored: Identity = serde_json::from_str(&saved).unwrap();

    assert!(saved.contains(r#""role":"manager""#));
    assert_eq!(restored.role, Some(Role::Other("manager".to_string())));
    assert_eq!(restored, identity);
}

#[test]
fn given_missing_email_when_deserialize_then_error() {
    let json = r#"{"id":"1"}"#;
    assert!(serde_json::from_str::<Identity>(json).is_err());
}

#[test]
fn given_identity_without_role_when_serialize_then_role_omitted() {
    let identity = Identity {
        id: "7".into(),
        email: "x@y.z".into(),
        username: "x".into(),
        first_name: "X".into(),
        last_name: "Y".into(),
        phone: None,
        company: None,
        address: None,
        role: None,
    };

    let json = serde_json::to_string(&identity).unwrap();
    assert!(!json.contains("role"));
}

#[test]
fn test_display_name_and_initials() {
    let mut identity: Identity =
        serde_json::from_str(r#"{"id":"1","email":"a@b.c","username":"jdoe","first_name":"john","last_name":"doe"}"#)
            .unwrap();

    assert_eq!(identity.display_name(), "john doe");
    assert_eq!(identity.initials(), "JD");

    identity.first_name.clear();
    identity.last_name.clear();
    assert_eq!(identity.display_name(), "jdoe");
    assert_eq!(identity.initials(), "");
}

#[test]
fn test_auth_response_into_parts() {
    let json = r#"{"access":"a.b.c","refresh":"r.s.t","user":{"id":5,"email":"u@v.w"}}"#;
    let response: AuthResponse = serde_json::from_str(json).unwrap();

    let (tokens, user) = response.into_parts();
    assert_eq!(tokens.access, "a.b.c");
    assert_eq!(tokens.refresh.as_deref(), Some("r.s.t"));
    assert_eq!(user.id, "5");
}

#[test]
fn test_auth_response_without_refresh() {
    let json = r#"{"access":"a.b.c","user":{"id":5,"email":"u@v.w"}}"#;
    let response: AuthResponse = serde_json::from_str(json).unwrap();

    let (tokens, _) = response.into_parts();
    assert!(tokens.refresh.is_none());
}
