//! File storage primitives.

pub mod atomic_file;
pub mod atomic_toml;

pub use atomic_file::{FileLock, StorageError, write_atomically};
pub use atomic_toml::AtomicTomlFile;
