//! The schedule board: one week window, one drag session, one time prompt.
//!
//! `ScheduleBoard` owns the current item snapshot handed in by the host and
//! routes gestures through the drag machine into the commit workflow. It
//! never edits the snapshot itself; after a successful commit it calls the
//! host's refresh callback and waits for [`ScheduleBoard::replace_items`].

use std::sync::Arc;

use chrono::{NaiveDate, NaiveDateTime};

use crate::models::schedule_item::{ItemId, ScheduleItem};
use crate::services::api::SchedulingApi;
use crate::services::commit::{
    CommitError, CommitOutcome, CommitRequest, CommitWorkflow, PendingSchedule,
};
use crate::services::drag::{DragMachine, DragSource, DropOutcome};
use crate::services::due_status::{DueStatusProvider, RelativeDueStatus};
use crate::services::navigation::WeekNavigator;
use crate::services::projector::{project, WeekProjection};
use crate::utils::date::{Clock, WeekWindow};

type RefreshCallback = Box<dyn FnMut()>;

pub struct ScheduleBoard {
    navigator: WeekNavigator,
    drag: DragMachine,
    commit: CommitWorkflow,
    items: Vec<ScheduleItem>,
    due_status: Arc<dyn DueStatusProvider>,
    on_schedule_success: Option<RefreshCallback>,
}

impl ScheduleBoard {
    pub fn new(clock: Arc<dyn Clock>, default_time: impl Into<String>) -> Self {
        Self {
            navigator: WeekNavigator::new(Arc::clone(&clock)),
            drag: DragMachine::new(),
            commit: CommitWorkflow::new(default_time),
            items: Vec::new(),
            due_status: Arc::new(RelativeDueStatus::new(clock)),
            on_schedule_success: None,
        }
    }

    pub fn with_due_status(mut self, provider: Arc<dyn DueStatusProvider>) -> Self {
        self.due_status = provider;
        self
    }

    /// Callback run once after every successful commit so the host can
    /// re-fetch the authoritative list.
    pub fn on_schedule_success(mut self, callback: impl FnMut() + 'static) -> Self {
        self.on_schedule_success = Some(Box::new(callback));
        self
    }

    pub fn replace_items(&mut self, items: Vec<ScheduleItem>) {
        log::debug!("Board snapshot replaced with {} items", items.len());
        self.items = items;
    }

    pub fn items(&self) -> &[ScheduleItem] {
        &self.items
    }

    pub fn window(&self) -> WeekWindow {
        self.navigator.window()
    }

    pub fn navigator(&self) -> &WeekNavigator {
        &self.navigator
    }

    pub fn projection(&self) -> WeekProjection {
        project(&self.items, &self.navigator.window(), self.due_status.as_ref())
    }

    pub fn drag(&self) -> &DragMachine {
        &self.drag
    }

    pub fn pending(&self) -> Option<&PendingSchedule> {
        self.commit.pending()
    }

    // Navigation

    pub fn shift_week(&mut self, delta_weeks: i64) -> NaiveDateTime {
        self.navigator.shift_week(delta_weeks)
    }

    pub fn reset_to_current_week(&mut self) -> NaiveDateTime {
        self.navigator.reset_to_current_week()
    }

    // Drag session

    pub fn drag_start(&mut self, source: DragSource, item_id: ItemId) -> bool {
        self.drag.drag_start(source, item_id)
    }

    pub fn drag_enter(&mut self, day_key: &str) {
        self.drag.drag_enter(day_key);
    }

    pub fn drag_leave(&mut self, day_key: &str) {
        self.drag.drag_leave(day_key);
    }

    pub fn drag_end(&mut self) {
        self.drag.drag_end();
    }

    /// Drops the dragged item on `day`, opening the time prompt when the id
    /// still resolves. Stale drops change nothing beyond ending the drag, and
    /// a drop during a save leaves the saving prompt alone.
    pub fn drop(&mut self, payload_id: Option<&ItemId>, day: NaiveDate) -> DropOutcome {
        match self.drag.drop(payload_id, day, &self.items) {
            DropOutcome::Resolved { item, day, source } => {
                if self.commit.open(item.clone(), day, source) {
                    DropOutcome::Resolved { item, day, source }
                } else {
                    DropOutcome::Busy { item_id: item.id }
                }
            }
            other => other,
        }
    }

    // Time prompt

    pub fn change_time(&mut self, time: impl Into<String>) {
        self.commit.change_time(time);
    }

    pub fn can_confirm(&self) -> bool {
        self.commit.can_confirm()
    }

    /// Dismisses the prompt and any leftover drag state.
    pub fn cancel_pending(&mut self) -> bool {
        if !self.commit.cancel() {
            return false;
        }
        self.drag.cancel();
        true
    }

    pub fn begin_commit(&mut self) -> Result<CommitRequest, CommitError> {
        self.commit.begin_commit()
    }

    pub fn finish_commit(&mut self, result: Result<(), CommitError>) -> CommitOutcome {
        let outcome = self.commit.finish_commit(result);
        if matches!(outcome, CommitOutcome::Scheduled { .. }) {
            self.drag.cancel();
            if let Some(callback) = self.on_schedule_success.as_mut() {
                callback();
            }
        }
        outcome
    }

    /// Confirms the prompt against `api` on the calling thread.
    pub fn confirm_with(&mut self, api: &dyn SchedulingApi) -> Result<CommitOutcome, CommitError> {
        let request = self.begin_commit()?;
        let result = api.schedule(&request);
        Ok(self.finish_commit(result))
    }
}
