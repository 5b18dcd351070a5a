//! Domain layer of the Widgets dashboard.
//!
//! Holds the per-session store, the stopwatch engine, the note, counter and
//! shortcut models, and the traits the outer layers implement (clock, battery
//! probe, snapshot repository).

pub mod clock;
pub mod config;
pub mod counter;
pub mod device;
pub mod error;
pub mod note;
pub mod session;
pub mod shortcut;
pub mod stopwatch;

// Re-export common error type
pub use error::{Result, WidgetsError};
