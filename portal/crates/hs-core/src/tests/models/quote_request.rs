use crate::{CargoType, CoreError, QuoteRequest, ServiceType};

use chrono::NaiveDate;

fn sample_request() -> QuoteRequest {
    QuoteRequest {
        service_type: ServiceType::OceanFreight,
        origin_port: "Chattogram".into(),
        destination_port: "Rotterdam".into(),
        cargo_type: CargoType::Container,
        weight: 1500.0,
        dimensions: "20ft".into(),
        estimated_value: None,
        preferred_shipping_date: NaiveDate::from_ymd_opt(2026, 12, 1).unwrap(),
        special_requirements: String::new(),
        company_name: "ABC Trading Ltd".into(),
        contact_name: "John Doe".into(),
        email: "john@abc.example".into(),
        phone: "+880 1712-345678".into(),
        cargo_description: "Garments".into(),
    }
}

#[test]
fn test_parse_weight() {
    assert_eq!(QuoteRequest::parse_weight("12.5"), 12.5);
    assert_eq!(QuoteRequest::parse_weight("  7 "), 7.0);
    assert_eq!(QuoteRequest::parse_weight(""), 0.0);
    assert_eq!(QuoteRequest::parse_weight("heavy"), 0.0);
}

#[test]
fn test_parse_estimated_value() {
    assert_eq!(QuoteRequest::parse_estimated_value("2500"), Some(2500.0));
    assert_eq!(QuoteRequest::parse_estimated_value(""), None);
    assert_eq!(QuoteRequest::parse_estimated_value("0"), None);
    assert_eq!(QuoteRequest::parse_estimated_value("lots"), None);
}

#[test]
fn given_unit_suffix_when_parse_weight_then_leading_number_kept() {
    assert_eq!(QuoteRequest::parse_weight("1500kg"), 1500.0);
    assert_eq!(QuoteRequest::parse_weight("1500 kg"), 1500.0);
    assert_eq!(QuoteRequest::parse_weight(" 12.75 tonnes"), 12.75);
    assert_eq!(QuoteRequest::parse_weight("1,200"), 1.0);
    assert_eq!(QuoteRequest::parse_weight(".5t"), 0.5);
    assert_eq!(QuoteRequest::parse_weight("2e3kg"), 2000.0);
    assert_eq!(QuoteRequest::parse_weight("3e"), 3.0);
    assert_eq!(QuoteRequest::parse_weight("7."), 7.0);
    assert_eq!(QuoteRequest::parse_weight("kg1500"), 0.0);
    assert_eq!(QuoteRequest::parse_weight("-"), 0.0);
    assert_eq!(QuoteRequest::parse_weight("."), 0.0);
}

#[test]
fn given_currency_suffix_when_parse_estimated_value_then_leading_number_kept() {
    assert_eq!(QuoteRequest::parse_estimated_value("25000 USD"), Some(25000.0));
    assert_eq!(QuoteRequest::parse_estimated_value("0 USD"), None);
    assert_eq!(QuoteRequest::parse_estimated_value("USD 25000"), None);
}

#[test]
fn given_complete_request_when_validate_then_ok() {
    assert!(sample_request().validate().is_ok());
}

#[test]
fn given_blank_origin_when_validate_then_names_field() {
    let request = QuoteRequest {
        origin_port: "  ".into(),
        ..sample_request()
    };

    match request.validate() {
        Err(CoreError::Validation { message, .. }) => assert!(message.contains("origin_port")),
        other => panic!("Expected Validation error, got {other:?}"),
    }
}

#[test]
fn given_request_when_serialize_then_numeric_weight_and_null_value() {
    let json = serde_json::to_value(sample_request()).unwrap();

    assert_eq!(json["weight"], 1500.0);
    assert!(json["estimated_value"].is_null());
    assert_eq!(json["service_type"], "ocean_freight");
    assert_eq!(json["preferred_shipping_date"], "2026-12-01");
}
