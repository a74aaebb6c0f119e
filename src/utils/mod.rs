// Shared helpers that do not belong to a single service

pub mod date;
