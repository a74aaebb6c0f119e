use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use ons_week_schedule::services::api::HttpSchedulingApi;
use ons_week_schedule::services::settings::SettingsService;
use ons_week_schedule::ui_egui::ScheduleApp;

const APP_TITLE: &str = "ONS Week Schedule";

fn main() -> Result<()> {
    env_logger::init();

    log::info!("Starting {}", APP_TITLE);

    let settings_service = SettingsService::from_default_location();
    let settings = settings_service.load().with_context(|| {
        format!(
            "Failed to load settings from {}",
            settings_service.path().display()
        )
    })?;
    let api = Arc::new(HttpSchedulingApi::from_settings(&settings)?);

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([1200.0, 760.0])
            .with_min_inner_size([800.0, 500.0]),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(move |cc| Ok(Box::new(ScheduleApp::new(cc, settings, api)))),
    )
    .map_err(|err| anyhow!("Failed to start the schedule window: {}", err))
}
