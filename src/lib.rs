//! zzt-cli library exports for testing

pub mod core;
pub mod tui;
