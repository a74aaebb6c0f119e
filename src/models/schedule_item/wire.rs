//! JSON shape of an inspection as returned by the backend.
//!
//! The backend is loose about where it puts address and assignee data, so
//! this layer accepts every known spelling and [`ScheduleItem`] only ever
//! sees the resolved values.

use serde::Deserialize;

use super::{AddressId, ItemId, ScheduleItem};

/// Ids arrive as either JSON numbers or strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum WireId {
    Number(i64),
    Text(String),
}

impl WireId {
    pub fn into_string(self) -> String {
        match self {
            WireId::Number(value) => value.to_string(),
            WireId::Text(value) => value,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct WireAddress {
    #[serde(default)]
    id: Option<AddressId>,
    #[serde(default)]
    combadd: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct WireNamed {
    #[serde(default)]
    name: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct WireInspection {
    id: ItemId,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    scheduled_datetime: Option<String>,
    #[serde(default)]
    status: Option<String>,
    #[serde(default)]
    address: Option<WireAddress>,
    #[serde(default)]
    combadd: Option<String>,
    #[serde(default)]
    address_label: Option<String>,
    #[serde(default)]
    address_id: Option<AddressId>,
    #[serde(default)]
    inspector: Option<WireNamed>,
    #[serde(default)]
    assigned_to: Option<WireNamed>,
    #[serde(default)]
    inspector_name: Option<String>,
    #[serde(default)]
    assigned_to_name: Option<String>,
    #[serde(default)]
    assigned_inspector: Option<String>,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|text| !text.trim().is_empty())
}

impl From<WireInspection> for ScheduleItem {
    fn from(wire: WireInspection) -> Self {
        let address = wire.address.unwrap_or_default();

        let address_label = non_blank(address.combadd)
            .or_else(|| non_blank(wire.combadd))
            .or_else(|| non_blank(wire.address_label));
        let address_id = address.id.or(wire.address_id);

        let inspector_name = non_blank(wire.inspector.and_then(|named| named.name))
            .or_else(|| non_blank(wire.assigned_to.and_then(|named| named.name)))
            .or_else(|| non_blank(wire.inspector_name))
            .or_else(|| non_blank(wire.assigned_to_name))
            .or_else(|| non_blank(wire.assigned_inspector));

        ScheduleItem {
            id: wire.id,
            title: non_blank(wire.source),
            scheduled_raw: non_blank(wire.scheduled_datetime),
            status: non_blank(wire.status),
            address_label,
            address_id,
            inspector_name,
        }
    }
}
