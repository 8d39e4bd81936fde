//! Per-session conversation handling.

pub mod log;
pub mod service;
