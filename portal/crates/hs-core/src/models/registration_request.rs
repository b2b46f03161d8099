use serde::Serialize;

/// Profile fields submitted when creating an account.
#[derive(Debug, Clone, Default, Serialize)]
pub struct RegistrationRequest {
    pub username: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub phone: String,
    pub company: String,
    pub password: String,
    pub password_confirm: String,
}

impl RegistrationRequest {
    pub fn passwords_match(&self) -> bool {
        self.password == self.password_confirm
    }
}
