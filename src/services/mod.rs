// Service module exports

pub mod api;
pub mod board;
pub mod commit;
pub mod drag;
pub mod due_status;
pub mod navigation;
pub mod projector;
pub mod settings;
