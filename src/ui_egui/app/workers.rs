//! Background threads for network calls. Results come back over a channel
//! polled once per frame, so the board only ever changes on the UI thread.

use std::sync::mpsc::{self, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use super::ScheduleApp;
use crate::services::api::SchedulingApi;
use crate::services::commit::{CommitError, CommitOutcome};
use crate::utils::date::{parse_timestamp, time_label};

const POLL_INTERVAL: Duration = Duration::from_millis(100);

impl ScheduleApp {
    pub(super) fn start_load(&mut self) {
        let api = Arc::clone(&self.api);
        let (tx, rx) = mpsc::channel();
        self.load_rx = Some(rx);

        log::info!("Loading inspections from {}", api.items_url());
        thread::spawn(move || {
            let result = api.fetch_items().map_err(|err| format!("{:#}", err));
            let _ = tx.send(result);
        });
    }

    pub(super) fn poll_load(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.load_rx else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(POLL_INTERVAL);
                return;
            }
            Err(TryRecvError::Disconnected) => {
                Err("Inspection loader stopped unexpectedly".to_string())
            }
        };
        self.load_rx = None;

        match result {
            Ok(items) => {
                log::info!("Loaded {} inspections", items.len());
                self.board.replace_items(items);
                self.load_error = None;
            }
            Err(err) => {
                log::error!("Failed to load inspections: {}", err);
                self.load_error = Some(format!("Failed to load inspections: {}", err));
            }
        }
    }

    /// Validates the prompt and sends the request on a worker thread.
    /// Validation errors stay inline in the prompt.
    pub(super) fn start_commit(&mut self) {
        let request = match self.board.begin_commit() {
            Ok(request) => request,
            Err(err) => {
                log::debug!("Schedule request not sent: {}", err);
                return;
            }
        };

        let api = Arc::clone(&self.api);
        let (tx, rx) = mpsc::channel();
        self.commit_rx = Some(rx);

        thread::spawn(move || {
            let _ = tx.send(api.schedule(&request));
        });
    }

    pub(super) fn poll_commit(&mut self, ctx: &egui::Context) {
        let Some(rx) = &self.commit_rx else {
            return;
        };

        let result = match rx.try_recv() {
            Ok(result) => result,
            Err(TryRecvError::Empty) => {
                ctx.request_repaint_after(POLL_INTERVAL);
                return;
            }
            Err(TryRecvError::Disconnected) => Err(CommitError::Transport(
                "schedule worker stopped unexpectedly".to_string(),
            )),
        };
        self.commit_rx = None;

        if let CommitOutcome::Scheduled {
            scheduled_datetime, ..
        } = self.board.finish_commit(result)
        {
            let when = parse_timestamp(&scheduled_datetime)
                .map(|ts| format!("{} at {}", ts.format("%a %b %-d"), time_label(ts)))
                .unwrap_or(scheduled_datetime);
            self.toasts.scheduled(format!("Scheduled for {}", when));
        }
    }
}
