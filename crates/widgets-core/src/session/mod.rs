//! Session store and its export/import contract.
//!
//! Each session owns one [`SessionStore`] holding the four slots. A snapshot
//! export copies all slots; an import replaces only the slots present (and
//! well-formed) in the document.

mod repository;
mod snapshot;
mod store;

pub use repository::SnapshotRepository;
pub use snapshot::{ImportReport, RejectedSlot, SessionSnapshot, Slot, SnapshotPatch};
pub use store::{SessionDefaults, SessionStore};
