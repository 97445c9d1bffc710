//! CLI library components for the drift monitor.

pub mod commands;
pub mod logging;
