//! Stopwatch engine.
//!
//! A two-state machine (idle, running) over a reference instant and an
//! accumulated duration. It never runs a timer of its own; the displayed value
//! is derived from the clock whenever the dashboard is rendered.

mod format;
mod model;

pub use format::{ELAPSED_PLACEHOLDER, format_elapsed};
pub use model::StopwatchState;
