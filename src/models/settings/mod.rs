// Settings module
// User-editable configuration persisted as settings.toml

use serde::{Deserialize, Serialize};

use crate::utils::date::parse_time_of_day;

/// Time offered in the prompt when an item has no existing time.
pub const DEFAULT_SCHEDULE_TIME: &str = "09:00";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScheduleSettings {
    /// Base URL of the case-management REST API
    pub api_base_url: String,
    /// Base URL of the web client, used for detail links
    pub web_base_url: String,
    /// Path (relative to the API base) that lists inspections for the board
    pub items_path: String,
    /// Prefill for the time prompt, `hh:mm`
    pub default_time: String,
    pub request_timeout_secs: u64,
    pub use_system_theme: bool,
}

impl Default for ScheduleSettings {
    fn default() -> Self {
        Self {
            api_base_url: "http://localhost:8000".to_string(),
            web_base_url: "http://localhost:3000".to_string(),
            items_path: "/inspections/".to_string(),
            default_time: DEFAULT_SCHEDULE_TIME.to_string(),
            request_timeout_secs: 20,
            use_system_theme: true,
        }
    }
}

impl ScheduleSettings {
    pub fn validate(&self) -> Result<(), String> {
        if self.api_base_url.trim().is_empty() {
            return Err("API base URL cannot be empty".to_string());
        }

        if !self.items_path.starts_with('/') {
            return Err("Items path must start with '/'".to_string());
        }

        if parse_time_of_day(&self.default_time).is_none() {
            return Err(format!(
                "Default time must be in hh:mm format, got '{}'",
                self.default_time
            ));
        }

        if self.request_timeout_secs == 0 {
            return Err("Request timeout must be at least one second".to_string());
        }

        Ok(())
    }

    /// API base without a trailing slash.
    pub fn api_base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    /// Web base without a trailing slash.
    pub fn web_base(&self) -> &str {
        self.web_base_url.trim_end_matches('/')
    }
}
