//! Snapshot repository trait.

use async_trait::async_trait;

use crate::error::Result;

/// Destination and source of export documents.
///
/// Implementations are bound to one location (for example a file path);
/// the session store never touches storage itself.
#[async_trait]
pub trait SnapshotRepository: Send + Sync {
    /// Writes an export document, replacing any previous one.
    async fn save(&self, document: &str) -> Result<()>;

    /// Reads a document to import.
    async fn load(&self) -> Result<String>;

    /// Human-readable location, used in notices.
    fn location(&self) -> String;
}
