//! gpacalc application library
//!
//! This exposes the terminal front end (configuration, CLI, TUI) for testing
//! and external usage. The calculation itself lives in `gpacalc-core`.

pub mod adapters;
pub mod app;
pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;
