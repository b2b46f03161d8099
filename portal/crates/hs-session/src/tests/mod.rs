
use hs_core::{Identity, Role};

/// A backend-style identity, distinct from the demo accounts.
pub(crate) fn sample_identity() -> Identity {
    Identity {
        id: "17".to_string(),
        email: "john@abc.example".to_string(),
        username: "jdoe".to_string(),
        first_name: "John".to_string(),
        last_name: "Doe".to_string(),
        phone: None,
        company: Some("ABC Trading Ltd".to_string()),
        address: None,
        role: Some(Role::Customer),
    }
}

/// Backend that nothing listens on.
pub(crate) const UNREACHABLE_API: &str = "http://127.0.0.1:9";
