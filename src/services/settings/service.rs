use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;

use crate::models::settings::ScheduleSettings;

/// Overrides `api_base_url` when set.
pub const ENV_API_URL: &str = "ONS_API_URL";
/// Overrides `web_base_url` when set.
pub const ENV_WEB_URL: &str = "ONS_WEB_URL";

const SETTINGS_FILE_NAME: &str = "settings.toml";

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("failed to read settings from {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write settings to {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("settings file {path} is not valid TOML: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
    #[error("failed to serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("invalid settings: {0}")]
    Invalid(String),
}

pub struct SettingsService {
    path: PathBuf,
}

impl SettingsService {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Service backed by `settings.toml` in the platform config directory.
    pub fn from_default_location() -> Self {
        Self::new(Self::default_path())
    }

    pub fn default_path() -> PathBuf {
        if let Some(dirs) = ProjectDirs::from("gov", "ONS", "WeekSchedule") {
            dirs.config_dir().join(SETTINGS_FILE_NAME)
        } else {
            log::warn!("Unable to resolve project directory; using current dir for settings");
            PathBuf::from(SETTINGS_FILE_NAME)
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load settings from disk, falling back to defaults when the file is
    /// missing, then apply environment overrides and validate.
    pub fn load(&self) -> Result<ScheduleSettings, SettingsError> {
        let mut settings = if self.path.exists() {
            let data = fs::read_to_string(&self.path).map_err(|source| SettingsError::Read {
                path: self.path.clone(),
                source,
            })?;
            toml::from_str(&data).map_err(|source| SettingsError::Parse {
                path: self.path.clone(),
                source,
            })?
        } else {
            log::info!(
                "No settings file at {}; using defaults",
                self.path.display()
            );
            ScheduleSettings::default()
        };

        apply_env_overrides(&mut settings);
        settings.validate().map_err(SettingsError::Invalid)?;

        Ok(settings)
    }

    pub fn save(&self, settings: &ScheduleSettings) -> Result<(), SettingsError> {
        settings.validate().map_err(SettingsError::Invalid)?;

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|source| SettingsError::Write {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let data = toml::to_string_pretty(settings)?;
        fs::write(&self.path, data).map_err(|source| SettingsError::Write {
            path: self.path.clone(),
            source,
        })?;

        log::info!("Saved settings to {}", self.path.display());
        Ok(())
    }
}

fn apply_env_overrides(settings: &mut ScheduleSettings) {
    if let Some(url) = env_value(ENV_API_URL) {
        log::debug!("{} overrides api_base_url", ENV_API_URL);
        settings.api_base_url = url;
    }
    if let Some(url) = env_value(ENV_WEB_URL) {
        log::debug!("{} overrides web_base_url", ENV_WEB_URL);
        settings.web_base_url = url;
    }
}

fn env_value(key: &str) -> Option<String> {
    std::env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
}
