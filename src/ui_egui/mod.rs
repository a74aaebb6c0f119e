mod app;
pub mod dialogs;
pub mod drag;
pub mod links;
pub mod theme;
mod views;

pub use app::ScheduleApp;
