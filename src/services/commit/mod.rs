//! Two-phase schedule commit.
//!
//! A drop opens a [`PendingSchedule`] (the time prompt). Nothing touches the
//! network until the user confirms; then [`CommitWorkflow::begin_commit`]
//! hands out a [`CommitRequest`] and marks the prompt as saving, and
//! [`CommitWorkflow::finish_commit`] applies whichever outcome comes back.
//! The split keeps the workflow free of I/O so the host decides where the
//! request runs.

mod error;

pub use error::{CommitError, DEFAULT_COMMIT_ERROR};

use chrono::NaiveDate;

use crate::models::schedule_item::{ItemId, ScheduleItem};
use crate::services::api::SchedulingApi;
use crate::services::drag::DragSource;
use crate::utils::date::{composite_timestamp, parse_time_of_day, time_input_value};

/// Transient state between a drop and a committed schedule change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSchedule {
    pub item: ScheduleItem,
    pub day: NaiveDate,
    pub source: DragSource,
    /// Time-of-day input, `hh:mm`
    pub time: String,
    pub saving: bool,
    pub error: Option<String>,
}

/// Payload for the scheduling endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitRequest {
    pub item_id: ItemId,
    /// Local `YYYY-MM-DDThh:mm`
    pub scheduled_datetime: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Backend accepted the change; the prompt is closed.
    Scheduled {
        item_id: ItemId,
        scheduled_datetime: String,
    },
    /// Backend refused or was unreachable; the prompt stays open.
    Failed { message: String },
    /// A result arrived with no request in flight.
    Discarded,
}

pub struct CommitWorkflow {
    pending: Option<PendingSchedule>,
    in_flight: Option<CommitRequest>,
    default_time: String,
}

impl CommitWorkflow {
    pub fn new(default_time: impl Into<String>) -> Self {
        Self {
            pending: None,
            in_flight: None,
            default_time: default_time.into(),
        }
    }

    pub fn pending(&self) -> Option<&PendingSchedule> {
        self.pending.as_ref()
    }

    pub fn is_open(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_saving(&self) -> bool {
        self.pending.as_ref().is_some_and(|pending| pending.saving)
    }

    /// Opens the time prompt for `item` on `day`.
    ///
    /// Rescheduling an already placed item keeps its current time of day;
    /// everything else starts from the default time. Refused while a save
    /// is in flight.
    pub fn open(&mut self, item: ScheduleItem, day: NaiveDate, source: DragSource) -> bool {
        if self.is_saving() {
            log::warn!(
                "Ignoring drop of {} while another schedule request is in flight",
                item.id
            );
            return false;
        }

        let time = match source {
            DragSource::Scheduled => item
                .existing_time()
                .map(time_input_value)
                .unwrap_or_else(|| self.default_time.clone()),
            DragSource::Unscheduled => self.default_time.clone(),
        };

        log::debug!("Opening time prompt for {} on {}", item.id, day);
        self.pending = Some(PendingSchedule {
            item,
            day,
            source,
            time,
            saving: false,
            error: None,
        });
        true
    }

    /// Updates the time field. Ignored while saving.
    pub fn change_time(&mut self, time: impl Into<String>) {
        if let Some(pending) = self.pending.as_mut().filter(|pending| !pending.saving) {
            pending.time = time.into();
        }
    }

    pub fn can_confirm(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|pending| !pending.saving && !pending.time.trim().is_empty())
    }

    /// Closes the prompt without any network effect. Refused while saving,
    /// since a sent request is never cancelled.
    pub fn cancel(&mut self) -> bool {
        if self.is_saving() {
            return false;
        }
        self.pending = None;
        true
    }

    /// Validates the prompt, marks it as saving and returns the request to
    /// send.
    pub fn begin_commit(&mut self) -> Result<CommitRequest, CommitError> {
        let pending = self.pending.as_mut().ok_or(CommitError::NothingPending)?;
        if pending.saving {
            return Err(CommitError::AlreadySaving);
        }

        let raw_time = pending.time.trim();
        if raw_time.is_empty() {
            pending.error = Some(CommitError::MissingTime.to_string());
            return Err(CommitError::MissingTime);
        }
        let Some(time) = parse_time_of_day(raw_time) else {
            let err = CommitError::InvalidTime(raw_time.to_string());
            pending.error = Some(err.to_string());
            return Err(err);
        };

        let request = CommitRequest {
            item_id: pending.item.id.clone(),
            scheduled_datetime: composite_timestamp(pending.day, time),
        };

        pending.saving = true;
        pending.error = None;
        self.in_flight = Some(request.clone());

        log::info!(
            "Scheduling {} for {}",
            request.item_id,
            request.scheduled_datetime
        );
        Ok(request)
    }

    /// Applies the result of the request returned by `begin_commit`.
    pub fn finish_commit(&mut self, result: Result<(), CommitError>) -> CommitOutcome {
        let Some(request) = self.in_flight.take() else {
            log::warn!("Schedule result arrived with no request in flight; discarding");
            return CommitOutcome::Discarded;
        };

        match result {
            Ok(()) => {
                log::info!(
                    "Scheduled {} for {}",
                    request.item_id,
                    request.scheduled_datetime
                );
                self.pending = None;
                CommitOutcome::Scheduled {
                    item_id: request.item_id,
                    scheduled_datetime: request.scheduled_datetime,
                }
            }
            Err(err) => {
                let message = err.to_string();
                log::warn!("Scheduling {} failed: {}", request.item_id, message);
                if let Some(pending) = self.pending.as_mut() {
                    pending.saving = false;
                    pending.error = Some(message.clone());
                }
                CommitOutcome::Failed { message }
            }
        }
    }

    /// Runs both halves against `api` on the calling thread.
    pub fn confirm_with(&mut self, api: &dyn SchedulingApi) -> Result<CommitOutcome, CommitError> {
        let request = self.begin_commit()?;
        let result = api.schedule(&request);
        Ok(self.finish_commit(result))
    }
}
