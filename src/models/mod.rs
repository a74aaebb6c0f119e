// Module exports for models

pub mod schedule_item;
pub mod settings;
