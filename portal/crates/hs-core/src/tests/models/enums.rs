use crate::{CargoType, CoreError, InquiryType, Role, ServiceType, ShipmentStatus};

use std::str::FromStr;

#[test]
fn test_service_type_from_str() {
    assert_eq!(
        ServiceType::from_str("ocean_freight").unwrap(),
        ServiceType::OceanFreight
    );
    assert_eq!(
        ServiceType::from_str("customs").unwrap(),
        ServiceType::Customs
    );
    assert!(matches!(
        ServiceType::from_str("teleport"),
        Err(CoreError::InvalidServiceType { .. })
    ));
}

#[test]
fn test_service_type_serde_matches_as_str() {
    for service in [
        ServiceType::OceanFreight,
        ServiceType::AirFreight,
        ServiceType::LandTransport,
        ServiceType::Multimodal,
        ServiceType::Warehousing,
        ServiceType::Customs,
    ] {
        let json = serde_json::to_string(&service).unwrap();
        assert_eq!(json, format!("\"{}\"", service.as_str()));
    }
}

#[test]
fn test_cargo_type_from_str() {
    assert_eq!(CargoType::from_str("roro").unwrap(), CargoType::Roro);
    assert_eq!(CargoType::Roro.label(), "Roll-on/Roll-off");
    assert!(CargoType::from_str("Container").is_err());
}

#[test]
fn test_inquiry_type_from_str() {
    assert_eq!(
        InquiryType::from_str("partnership").unwrap(),
        InquiryType::Partnership
    );
    assert!(matches!(
        InquiryType::from_str(""),
        Err(CoreError::InvalidInquiryType { .. })
    ));
}

#[test]
fn test_shipment_status_unknown_maps_to_other() {
    let status: ShipmentStatus = serde_json::from_str("\"lost_at_sea\"").unwrap();
    assert_eq!(status, ShipmentStatus::Other);

    let status: ShipmentStatus = serde_json::from_str("\"out_for_delivery\"").unwrap();
    assert_eq!(status, ShipmentStatus::OutForDelivery);
    assert_eq!(status.label(), "Out for Delivery");
    assert!(!status.is_final());
    assert!(ShipmentStatus::Delivered.is_final());
}

#[test]
fn test_role_from_str() {
    assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
    assert_eq!(Role::from_str("customer").unwrap(), Role::Customer);
    assert_eq!(
        Role::from_str("captain").unwrap(),
        Role::Other("captain".to_string())
    );
    assert_eq!(Role::Other("captain".to_string()).to_string(), "captain");
}
