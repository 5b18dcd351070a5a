//! Link shortcuts.
//!
//! Every session starts with the seed shortcuts from the configuration; the
//! user may add and delete entries afterwards.

mod model;

pub use model::{Shortcut, ShortcutSeed, default_shortcut_seeds};
