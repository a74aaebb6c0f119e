//! Drag-session state machine for the schedule board.
//!
//! Transitions are named after the gesture phases (`drag_start`,
//! `drag_enter`, `drag_leave`, `drop`, `drag_end`) and know nothing about
//! the pointer API driving them, so mouse, touch and synthetic test events
//! go through the same code.

use chrono::NaiveDate;

use crate::models::schedule_item::{ItemId, ScheduleItem};

/// Which partition a drag started from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DragSource {
    Unscheduled,
    Scheduled,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DragSession {
    pub source: DragSource,
    pub item_id: ItemId,
}

/// Day cell currently under the pointer during a drag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DropHighlight {
    pub day_key: String,
}

/// Result of a drop gesture.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DropOutcome {
    /// The dropped id matched an item in the snapshot.
    Resolved {
        item: ScheduleItem,
        day: NaiveDate,
        source: DragSource,
    },
    /// The dropped id is no longer in the snapshot (list refreshed mid-drag).
    Stale { item_id: ItemId },
    /// The item resolved, but a schedule request was already in flight so no
    /// prompt opened.
    Busy { item_id: ItemId },
    /// No drag was active.
    Ignored,
}

#[derive(Debug, Default)]
pub struct DragMachine {
    session: Option<DragSession>,
    highlight: Option<DropHighlight>,
}

impl DragMachine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn highlight(&self) -> Option<&DropHighlight> {
        self.highlight.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    pub fn is_dragging_item(&self, source: DragSource, item_id: &ItemId) -> bool {
        self.session
            .as_ref()
            .is_some_and(|session| session.source == source && &session.item_id == item_id)
    }

    pub fn is_highlighted(&self, day_key: &str) -> bool {
        self.highlight
            .as_ref()
            .is_some_and(|highlight| highlight.day_key == day_key)
    }

    /// Idle -> Dragging. Returns false if a session is already active.
    pub fn drag_start(&mut self, source: DragSource, item_id: ItemId) -> bool {
        if let Some(active) = &self.session {
            log::warn!(
                "Ignoring drag start for {} while {} is still being dragged",
                item_id,
                active.item_id
            );
            return false;
        }

        log::debug!("Drag started for item {} from {:?}", item_id, source);
        self.session = Some(DragSession { source, item_id });
        true
    }

    pub fn drag_enter(&mut self, day_key: &str) {
        if self.session.is_none() {
            return;
        }
        self.highlight = Some(DropHighlight {
            day_key: day_key.to_string(),
        });
    }

    /// Clears the highlight only if it still points at `day_key`, so leaving
    /// one cell after entering its neighbour does not flicker.
    pub fn drag_leave(&mut self, day_key: &str) {
        if self.is_highlighted(day_key) {
            self.highlight = None;
        }
    }

    /// Drag abandoned or finished by the input device.
    pub fn drag_end(&mut self) {
        self.session = None;
        self.highlight = None;
    }

    /// Clears everything; used when the time prompt is dismissed.
    pub fn cancel(&mut self) {
        self.drag_end();
    }

    /// Resolves a drop on `day` against the current snapshot.
    ///
    /// The id carried by the gesture wins over the session's id. Either way
    /// the session and highlight are cleared.
    pub fn drop(
        &mut self,
        payload_id: Option<&ItemId>,
        day: NaiveDate,
        items: &[ScheduleItem],
    ) -> DropOutcome {
        self.highlight = None;
        let Some(session) = self.session.take() else {
            return DropOutcome::Ignored;
        };

        let item_id = payload_id
            .filter(|id| !id.as_str().is_empty())
            .cloned()
            .unwrap_or(session.item_id);

        match items.iter().find(|item| item.id == item_id) {
            Some(item) => DropOutcome::Resolved {
                item: item.clone(),
                day,
                source: session.source,
            },
            None => {
                log::debug!("Dropped item {} is not in the current list; ignoring", item_id);
                DropOutcome::Stale { item_id }
            }
        }
    }
}
