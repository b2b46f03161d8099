use crate::models::inquiry_type::InquiryType;
use crate::{CoreError, Result as CoreErrorResult};

use serde::{Deserialize, Serialize};

/// Message sent from the public contact form.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ContactInquiry {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub company: String,
    pub inquiry_type: InquiryType,
    pub subject: String,
    pub message: String,
}

impl ContactInquiry {
    pub fn validate(&self) -> CoreErrorResult<()> {
        if self.name.trim().is_empty() {
            return Err(CoreError::validation("name is required"));
        }
        if !self.email.contains('@') {
            return Err(CoreError::validation("email must be a valid address"));
        }
        if self.subject.trim().is_empty() || self.message.trim().is_empty() {
            return Err(CoreError::validation("subject and message are required"));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactReceipt {
    pub message: String,
}
