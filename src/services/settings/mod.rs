// Settings service
// Loads and saves ScheduleSettings as TOML in the per-user config directory

mod service;

pub use service::{SettingsError, SettingsService, ENV_API_URL, ENV_WEB_URL};
