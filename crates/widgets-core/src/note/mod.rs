//! Quick notes shown most-recent-first on the dashboard.

mod model;

pub use model::{NOTE_TIMESTAMP_FORMAT, Note};
