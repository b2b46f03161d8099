//! Fixed demo accounts that sign in without contacting the backend.

use hs_core::{Identity, Role};

pub const DEMO_PASSWORD: &str = "demo123";

pub const ADMIN_EMAIL: &str = "admin@heritageshipping.com";
pub const CUSTOMER_EMAIL: &str = "customer@heritageshipping.com";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DemoAccount {
    Admin,
    Customer,
}

impl DemoAccount {
    pub const ALL: [DemoAccount; 2] = [DemoAccount::Admin, DemoAccount::Customer];

    pub fn email(&self) -> &'static str {
        match self {
            Self::Admin => ADMIN_EMAIL,
            Self::Customer => CUSTOMER_EMAIL,
        }
    }

    /// Case-insensitive, surrounding whitespace ignored.
    pub fn from_email(email: &str) -> Option<Self> {
        let email = email.trim();
        Self::ALL
            .into_iter()
            .find(|account| account.email().eq_ignore_ascii_case(email))
    }

    pub fn identity(&self) -> Identity {
        match self {
            Self::Admin => Identity {
                id: "demo-admin-1".to_string(),
                email: ADMIN_EMAIL.to_string(),
                username: "admin".to_string(),
                first_name: "Admin".to_string(),
                last_name: "User".to_string(),
                phone: Some("+880 31-710101".to_string()),
                company: Some("Heritage Shipping Limited".to_string()),
                address: Some("Chattogram Port Authority, Chattogram, Bangladesh".to_string()),
                role: Some(Role::Admin),
            },
            Self::Customer => Identity {
                id: "demo-customer-1".to_string(),
                email: CUSTOMER_EMAIL.to_string(),
                username: "customer".to_string(),
                first_name: "John".to_string(),
                last_name: "Doe".to_string(),
                phone: Some("+880 1712-345678".to_string()),
                company: Some("ABC Trading Ltd".to_string()),
                address: Some("Dhaka, Bangladesh".to_string()),
                role: Some(Role::Customer),
            },
        }
    }
}

impl std::fmt::Display for DemoAccount {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Customer => write!(f, "customer"),
        }
    }
}

impl std::str::FromStr for DemoAccount {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "admin" => Ok(Self::Admin),
            "customer" => Ok(Self::Customer),
            other => Err(format!("unknown demo account '{other}'")),
        }
    }
}

/// Demo identity for a matching email and the shared password, else `None`.
pub fn authenticate(email: &str, password: &str) -> Option<Identity> {
    if password != DEMO_PASSWORD {
        return None;
    }
    DemoAccount::from_email(email).map(|account| account.identity())
}
