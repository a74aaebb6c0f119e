mod cards;
pub mod week_board;

use crate::models::schedule_item::{AddressId, ItemId};

/// Requests from the board view that the app carries out after layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardAction {
    OpenInspection(ItemId),
    OpenAddress(AddressId),
    Reload,
}
