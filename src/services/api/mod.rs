//! Backend collaborators: the scheduling PATCH and the inspection list.

use std::time::Duration;

use anyhow::{anyhow, Context, Result};
use reqwest::blocking::{Client, Response};
use serde_json::Value;

use crate::models::schedule_item::{ItemId, ScheduleItem};
use crate::models::settings::ScheduleSettings;
use crate::services::commit::{CommitError, CommitRequest};

/// Form field carrying the new schedule.
pub const SCHEDULE_FIELD: &str = "scheduled_datetime";

/// Writes a schedule change to the backend.
#[cfg_attr(test, mockall::automock)]
pub trait SchedulingApi: Send + Sync {
    fn schedule(&self, request: &CommitRequest) -> Result<(), CommitError>;
}

pub struct HttpSchedulingApi {
    client: Client,
    base_url: String,
    items_path: String,
}

impl HttpSchedulingApi {
    pub fn new(base_url: &str, items_path: &str, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .context("Failed to build scheduling HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            items_path: items_path.to_string(),
        })
    }

    pub fn from_settings(settings: &ScheduleSettings) -> Result<Self> {
        Self::new(
            settings.api_base(),
            &settings.items_path,
            Duration::from_secs(settings.request_timeout_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// `{base}/inspections/{id}/schedule`, with the id percent-encoded.
    pub fn schedule_url(&self, item_id: &ItemId) -> String {
        format!(
            "{}/inspections/{}/schedule",
            self.base_url,
            urlencoding::encode(item_id.as_str())
        )
    }

    pub fn items_url(&self) -> String {
        format!("{}{}", self.base_url, self.items_path)
    }

    /// Loads the inspection list shown on the board.
    ///
    /// A body that is not a JSON array yields an empty list; entries that
    /// do not look like inspections are skipped.
    pub fn fetch_items(&self) -> Result<Vec<ScheduleItem>> {
        let url = self.items_url();
        let response = self
            .client
            .get(&url)
            .send()
            .with_context(|| format!("Network error while loading inspections from {}", url))?;

        let status = response.status();
        if !status.is_success() {
            return Err(anyhow!("Failed to load inspections: HTTP {}", status));
        }

        let body: Value = response
            .json()
            .context("Inspection list is not valid JSON")?;

        Ok(items_from_json(body))
    }
}

impl SchedulingApi for HttpSchedulingApi {
    fn schedule(&self, request: &CommitRequest) -> Result<(), CommitError> {
        let url = self.schedule_url(&request.item_id);
        let response = self
            .client
            .patch(&url)
            .form(&[(SCHEDULE_FIELD, request.scheduled_datetime.as_str())])
            .send()
            .map_err(|err| CommitError::Transport(err.to_string()))?;

        if response.status().is_success() {
            return Ok(());
        }

        Err(rejection_from_response(response))
    }
}

fn rejection_from_response(response: Response) -> CommitError {
    let status = response.status().as_u16();
    let detail = response
        .json::<Value>()
        .ok()
        .and_then(|body| detail_from_body(&body));

    CommitError::Rejected { status, detail }
}

/// The `detail` string of an error body, if there is one.
pub fn detail_from_body(body: &Value) -> Option<String> {
    body.get("detail")
        .and_then(Value::as_str)
        .filter(|detail| !detail.is_empty())
        .map(str::to_string)
}

fn items_from_json(body: Value) -> Vec<ScheduleItem> {
    let Value::Array(entries) = body else {
        log::warn!("Inspection list response was not an array; showing no items");
        return Vec::new();
    };

    entries
        .into_iter()
        .filter_map(|entry| match serde_json::from_value::<ScheduleItem>(entry) {
            Ok(item) => Some(item),
            Err(err) => {
                log::warn!("Skipping malformed inspection entry: {}", err);
                None
            }
        })
        .collect()
}
