pub mod auth_response;
pub mod cargo_type;
pub mod company_stats;
pub mod contact_inquiry;
pub mod identity;
pub mod inquiry_type;
pub mod quote_receipt;
pub mod quote_record;
pub mod quote_request;
pub mod registration_request;
pub mod role;
pub mod service_type;
pub mod shipment;
pub mod shipment_status;
pub mod stored_credential;
pub mod tracking_update;
