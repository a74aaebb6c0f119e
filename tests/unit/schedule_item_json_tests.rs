// Decoding backend inspection JSON into schedule items

use ons_week_schedule::models::schedule_item::{AddressId, ItemId, ScheduleItem};
use pretty_assertions::assert_eq;
use serde_json::json;

use crate::fixtures::items;

#[test]
fn test_fixture_json_matches_builders() {
    let decoded: Vec<ScheduleItem> = serde_json::from_str(items::week_items_json()).unwrap();

    assert_eq!(decoded.len(), 5);
    assert_eq!(decoded[0].id, ItemId::from(42));
    assert_eq!(decoded[0].address_label.as_deref(), Some("12 Main St"));
    assert_eq!(decoded[0].address_id, Some(AddressId::new("9")));
    assert!(!decoded[0].is_scheduled());
    assert_eq!(decoded[1].inspector_name.as_deref(), Some("R. Diaz"));
    assert_eq!(decoded[2].id, ItemId::new("8"));
    assert!(decoded[2].is_scheduled());
    assert!(!decoded[4].is_scheduled());
}

#[test]
fn test_blank_source_falls_back_to_default_title() {
    let item: ScheduleItem = serde_json::from_value(json!({"id": 1, "source": "  "})).unwrap();
    assert_eq!(item.display_title(), "Inspection");
}

#[test]
fn test_flat_address_fields() {
    let item: ScheduleItem = serde_json::from_value(json!({
        "id": 3,
        "combadd": "4 Elm Rd",
        "address_id": "77"
    }))
    .unwrap();

    assert_eq!(item.address_label.as_deref(), Some("4 Elm Rd"));
    assert_eq!(item.address_id, Some(AddressId::new("77")));
}

#[test]
fn test_assignee_fallbacks() {
    let item: ScheduleItem = serde_json::from_value(json!({
        "id": 4,
        "assigned_to": {"name": "K. Okafor"}
    }))
    .unwrap();
    assert_eq!(item.inspector_name.as_deref(), Some("K. Okafor"));

    let item: ScheduleItem =
        serde_json::from_value(json!({"id": 5, "assigned_inspector": "P. Lund"})).unwrap();
    assert_eq!(item.inspector_name.as_deref(), Some("P. Lund"));
}

#[test]
fn test_missing_id_is_rejected() {
    assert!(serde_json::from_value::<ScheduleItem>(json!({"source": "Routine"})).is_err());
}
