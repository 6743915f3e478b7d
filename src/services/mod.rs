//! Non-visual application logic: state transitions and image export.

pub mod app_state;
pub mod export;
