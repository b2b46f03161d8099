mod enums;
mod identity;
mod quote_request;
mod shipment;
