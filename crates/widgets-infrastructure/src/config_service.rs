//! Configuration service implementation.
//!
//! Loads the widgets configuration from `config.toml` (by default
//! `~/.config/widgets/config.toml`) and caches it.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use widgets_core::Result;
use widgets_core::config::WidgetsConfig;

use crate::paths::WidgetsPaths;
use crate::storage::AtomicTomlFile;

/// Configuration service that loads and caches the configuration.
#[derive(Clone)]
pub struct ConfigService {
    file: Arc<AtomicTomlFile<WidgetsConfig>>,
    /// Cached configuration loaded from file.
    config: Arc<RwLock<Option<WidgetsConfig>>>,
}

impl ConfigService {
    /// Creates a service over the platform default config file.
    pub fn new() -> Result<Self> {
        Ok(Self::with_path(WidgetsPaths::config_file()?))
    }

    /// Creates a service over an explicit config file.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: Arc::new(AtomicTomlFile::new(path)),
            config: Arc::new(RwLock::new(None)),
        }
    }

    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Gets the configuration, loading from file if not cached.
    ///
    /// A missing or blank file yields the defaults. A malformed file, or one
    /// with an unusable value, is an error so a typo is not silently replaced
    /// by defaults.
    pub fn load(&self) -> Result<WidgetsConfig> {
        if let Ok(cached) = self.config.read()
            && let Some(config) = cached.as_ref()
        {
            return Ok(config.clone());
        }

        let loaded = self.file.load()?.unwrap_or_default();
        loaded.validate()?;
        tracing::debug!(path = %self.path().display(), "Loaded configuration");

        if let Ok(mut cache) = self.config.write() {
            *cache = Some(loaded.clone());
        }
        Ok(loaded)
    }

    /// Writes the default configuration if the file does not exist yet.
    ///
    /// Returns `true` when a file was created.
    pub fn init(&self) -> Result<bool> {
        if self.path().exists() {
            return Ok(false);
        }
        let config = WidgetsConfig::default();
        self.file.save(&config)?;
        tracing::info!(path = %self.path().display(), "Created default configuration");

        if let Ok(mut cache) = self.config.write() {
            *cache = Some(config);
        }
        Ok(true)
    }

}
