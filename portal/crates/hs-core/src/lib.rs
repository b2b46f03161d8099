pub mod error;
pub mod models;

#[cfg(test)]
mod tests;

pub use error::{CoreError, Result};
pub use models::auth_response::AuthResponse;
pub use models::cargo_type::CargoType;
pub use models::company_stats::CompanyStats;
pub use models::contact_inquiry::{ContactInquiry, ContactReceipt};
pub use models::identity::Identity;
pub use models::inquiry_type::InquiryType;
pub use models::quote_receipt::QuoteReceipt;
pub use models::quote_record::QuoteRecord;
pub use models::quote_request::QuoteRequest;
pub use models::registration_request::RegistrationRequest;
pub use models::role::Role;
pub use models::service_type::ServiceType;
pub use models::shipment::Shipment;
pub use models::shipment_status::ShipmentStatus;
pub use models::stored_credential::{StoredCredential, TokenPair};
pub use models::tracking_update::TrackingUpdate;
