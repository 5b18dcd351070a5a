//! Unified path management for widgets files.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/widgets/           # Config directory
//! ├── config.toml              # Application configuration
//! └── logs/                    # Application logs
//!     └── widgets.log.YYYY-MM-DD
//!
//! ~/.local/share/widgets/      # Data directory
//! └── widgets_export.json      # Default export target
//! ```

use std::path::PathBuf;

const APP_DIR: &str = "widgets";

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

impl From<PathError> for widgets_core::WidgetsError {
    fn from(e: PathError) -> Self {
        widgets_core::WidgetsError::config(e.to_string())
    }
}

/// Unified path management for widgets.
pub struct WidgetsPaths;

impl WidgetsPaths {
    /// Returns the widgets configuration directory (e.g. `~/.config/widgets/`).
    pub fn config_dir() -> Result<PathBuf, PathError> {
        dirs::config_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the widgets data directory (e.g. `~/.local/share/widgets/`).
    pub fn data_dir() -> Result<PathBuf, PathError> {
        dirs::data_dir()
            .map(|dir| dir.join(APP_DIR))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the main configuration file.
    pub fn config_file() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir() -> Result<PathBuf, PathError> {
        Ok(Self::config_dir()?.join("logs"))
    }

    /// Returns the default export target for the given file name.
    pub fn export_file(file_name: &str) -> Result<PathBuf, PathError> {
        Ok(Self::data_dir()?.join(file_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = WidgetsPaths::config_dir().unwrap();
        assert!(config_dir.ends_with("widgets"));
    }

    #[test]
    fn test_config_file() {
        let config_file = WidgetsPaths::config_file().unwrap();
        assert!(config_file.ends_with("config.toml"));
        let config_dir = WidgetsPaths::config_dir().unwrap();
        assert!(config_file.starts_with(&config_dir));
    }

    #[test]
    fn test_logs_dir() {
        let logs_dir = WidgetsPaths::logs_dir().unwrap();
        assert!(logs_dir.ends_with("logs"));
        let config_dir = WidgetsPaths::config_dir().unwrap();
        assert!(logs_dir.starts_with(&config_dir));
    }

    #[test]
    fn test_export_file() {
        let export = WidgetsPaths::export_file("widgets_export.json").unwrap();
        assert!(export.ends_with("widgets_export.json"));
        let data_dir = WidgetsPaths::data_dir().unwrap();
        assert!(export.starts_with(&data_dir));
    }
}
