//! Named tally counters.

mod model;

pub use model::Counters;
