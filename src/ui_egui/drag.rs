//! Feeds egui drag-and-drop gestures into the board's drag session.
//!
//! egui owns the pointer and carries a [`CardPayload`] while a card is in
//! flight; the board owns the session and highlight. [`DragBridge::sync`]
//! keeps the two in step once per frame and [`DragBridge::track_day`] turns
//! hover and release over a day column into enter/leave/drop transitions.

use chrono::NaiveDate;
use egui::{Context, DragAndDrop, Response};

use crate::models::schedule_item::ItemId;
use crate::services::board::ScheduleBoard;
use crate::services::drag::{DragSource, DropOutcome};

/// What a dragged card carries.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CardPayload {
    pub source: DragSource,
    pub item_id: ItemId,
}

impl CardPayload {
    pub fn new(source: DragSource, item_id: ItemId) -> Self {
        Self { source, item_id }
    }
}

pub struct DragBridge;

impl DragBridge {
    /// Starts or ends the board session to match egui's payload. Call once
    /// per frame before laying out the board.
    pub fn sync(ctx: &Context, board: &mut ScheduleBoard) {
        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && DragAndDrop::has_any_payload(ctx) {
            DragAndDrop::clear_payload(ctx);
        }

        match DragAndDrop::payload::<CardPayload>(ctx) {
            Some(payload) if !board.drag().is_dragging() => {
                board.drag_start(payload.source, payload.item_id.clone());
            }
            None if board.drag().is_dragging() => {
                log::debug!("Drag released outside the board");
                board.drag_end();
            }
            _ => {}
        }
    }

    /// Handles the pointer over one day column. Returns the drop outcome
    /// when the card was released here.
    pub fn track_day(
        board: &mut ScheduleBoard,
        response: &Response,
        day: NaiveDate,
        day_key: &str,
    ) -> Option<DropOutcome> {
        let released = response.dnd_release_payload::<CardPayload>();
        let hovering = response.dnd_hover_payload::<CardPayload>().is_some();
        Self::apply_day_pointer(board, released.as_deref(), hovering, day, day_key)
    }

    fn apply_day_pointer(
        board: &mut ScheduleBoard,
        released: Option<&CardPayload>,
        hovering: bool,
        day: NaiveDate,
        day_key: &str,
    ) -> Option<DropOutcome> {
        if let Some(payload) = released {
            if !board.drag().is_dragging() {
                // Pressed and released within one frame.
                board.drag_start(payload.source, payload.item_id.clone());
            }
            return Some(board.drop(Some(&payload.item_id), day));
        }

        if !board.drag().is_dragging() {
            return None;
        }

        if hovering && !board.drag().is_highlighted(day_key) {
            board.drag_enter(day_key);
        } else if !hovering {
            board.drag_leave(day_key);
        }
        None
    }
}
