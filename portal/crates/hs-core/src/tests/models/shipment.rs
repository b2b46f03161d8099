use crate::{Shipment, ShipmentStatus};

fn shipment_json(updates: &str) -> String {
    format!(
        r#"{{
            "tracking_number": "HSL123456789",
            "status": "in_transit",
            "origin_port": "Chattogram",
            "destination_port": "Singapore",
            "vessel_name": "Heritage Star",
            "estimated_delivery": "2026-11-02T09:00:00+06:00",
            "weight": "1200.00",
            "updates": {updates}
        }}"#
    )
}

#[test]
fn given_updates_when_current_location_then_uses_newest() {
    let json = shipment_json(
        r#"[
            {"status":"Departed","location":"Bay of Bengal","timestamp":"2026-10-18T10:00:00Z","description":"At sea"},
            {"status":"Loaded","location":"Chattogram","timestamp":"2026-10-16T08:30:00Z","description":"Container loaded"}
        ]"#,
    );
    let shipment: Shipment = serde_json::from_str(&json).unwrap();

    assert_eq!(shipment.status, ShipmentStatus::InTransit);
    assert_eq!(shipment.updates.len(), 2);
    assert_eq!(shipment.current_location(), "Bay of Bengal");
    assert_eq!(shipment.latest_update().unwrap().status, "Departed");
    assert_eq!(shipment.route(), "Chattogram → Singapore");
}

#[test]
fn given_no_updates_when_current_location_then_in_transit() {
    let shipment: Shipment = serde_json::from_str(&shipment_json("[]")).unwrap();

    assert!(shipment.latest_update().is_none());
    assert_eq!(shipment.current_location(), "In Transit");
}

#[test]
fn given_offset_timestamp_when_deserialize_then_normalized_to_utc() {
    let shipment: Shipment = serde_json::from_str(&shipment_json("[]")).unwrap();

    assert_eq!(
        shipment.estimated_delivery.to_rfc3339(),
        "2026-11-02T03:00:00+00:00"
    );
}

#[test]
fn given_null_vessel_when_deserialize_then_none() {
    let json = shipment_json("[]").replace("\"Heritage Star\"", "null");
    let shipment: Shipment = serde_json::from_str(&json).unwrap();

    assert!(shipment.vessel_name.is_none());
}
