//! Snapshot repository backed by a single JSON file.

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use widgets_core::session::SnapshotRepository;
use widgets_core::{Result, WidgetsError};

use crate::paths::WidgetsPaths;
use crate::storage::write_atomically;

/// Reads and writes export documents at one file path.
#[derive(Debug, Clone)]
pub struct JsonSnapshotFile {
    path: PathBuf,
}

impl JsonSnapshotFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// The default export target in the data directory.
    pub fn default_export(file_name: &str) -> Result<Self> {
        Ok(Self::new(WidgetsPaths::export_file(file_name)?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl SnapshotRepository for JsonSnapshotFile {
    async fn save(&self, document: &str) -> Result<()> {
        let path = self.path.clone();
        let bytes = document.as_bytes().to_vec();

        // The atomic write holds a blocking file lock
        tokio::task::spawn_blocking(move || write_atomically(&path, &bytes))
            .await
            .map_err(|e| WidgetsError::internal(format!("export task failed: {}", e)))??;

        tracing::info!(path = %self.path.display(), "Snapshot exported");
        Ok(())
    }

    async fn load(&self) -> Result<String> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(document) => Ok(document),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(WidgetsError::not_found(
                "snapshot file",
                self.path.display().to_string(),
            )),
            Err(e) => Err(e.into()),
        }
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
