//! gpacalc Core - pure GPA projection logic with no I/O
//!
//! This crate contains the domain types (courses, letter grades, reports),
//! the grade-point conversion and GPA formula, text input parsing, and the
//! session that owns the course list. It has no dependency on a terminal or
//! filesystem - the presentation layer drives it through commands and
//! listens for events.

pub mod domain;
pub mod ports;
pub mod app;
pub mod error;

#[cfg(test)]
mod calculator_proptest;

// Re-exports for ergonomics
pub use domain::*;
pub use error::*;
