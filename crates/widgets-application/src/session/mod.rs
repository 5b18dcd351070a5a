//! Session registry.
//!
//! Maps session ids to their live stores and opens new sessions on first use.

mod registry;

pub use registry::{SessionHandle, SessionRegistry};
