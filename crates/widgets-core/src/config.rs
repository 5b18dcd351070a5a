//! Configuration models.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every section and
//! field has a default so a missing or partial file is valid.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::error::{Result, WidgetsError};
use crate::session::SessionDefaults;
use crate::shortcut::{ShortcutSeed, default_shortcut_seeds};

/// Default wall clock format (12-hour with seconds).
pub const DEFAULT_CLOCK_FORMAT: &str = "%I:%M:%S %p";

/// Default file name of an export.
pub const DEFAULT_EXPORT_FILE: &str = "widgets_export.json";

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct DashboardConfig {
    /// How many notes the dashboard shows
    pub recent_notes: usize,
    /// chrono format string for the wall clock
    pub clock_format: String,
    /// File name used by `export` when no path is given
    pub export_file: String,
}

impl DashboardConfig {
    /// Rejects a `clock_format` that chrono cannot parse.
    pub fn validate(&self) -> Result<()> {
        if StrftimeItems::new(&self.clock_format).any(|item| matches!(item, Item::Error)) {
            return Err(WidgetsError::config(format!(
                "invalid dashboard.clock_format '{}'",
                self.clock_format
            )));
        }
        Ok(())
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            recent_notes: 6,
            clock_format: DEFAULT_CLOCK_FORMAT.to_string(),
            export_file: DEFAULT_EXPORT_FILE.to_string(),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive, overridden by `RUST_LOG`
    pub level: String,
    /// Log directory; the platform default is used when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<String>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            directory: None,
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct WidgetsConfig {
    pub dashboard: DashboardConfig,
    pub logging: LoggingConfig,
    /// Seed shortcuts for new sessions
    pub shortcuts: Vec<ShortcutSeed>,
}

impl Default for WidgetsConfig {
    fn default() -> Self {
        Self {
            dashboard: DashboardConfig::default(),
            logging: LoggingConfig::default(),
            shortcuts: default_shortcut_seeds(),
        }
    }
}

impl WidgetsConfig {
    pub fn validate(&self) -> Result<()> {
        self.dashboard.validate()
    }

    pub fn session_defaults(&self) -> SessionDefaults {
        SessionDefaults {
            shortcut_seeds: self.shortcuts.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_toml_gives_defaults() {
        let config: WidgetsConfig = toml::from_str("").unwrap();
        assert_eq!(config, WidgetsConfig::default());
        assert_eq!(config.dashboard.recent_notes, 6);
        assert_eq!(config.shortcuts.len(), 2);
    }

    #[test]
    fn test_partial_toml() {
        let config: WidgetsConfig = toml::from_str(
            r#"
            [dashboard]
            recent_notes = 3

            [[shortcuts]]
            label = "Docs"
            url = "https://docs.rs"
            "#,
        )
        .unwrap();

        assert_eq!(config.dashboard.recent_notes, 3);
        assert_eq!(config.dashboard.clock_format, DEFAULT_CLOCK_FORMAT);
        assert_eq!(config.logging.level, "info");
        assert_eq!(
            config.session_defaults().shortcut_seeds,
            vec![ShortcutSeed::new("Docs", "https://docs.rs")]
        );
    }

    #[test]
    fn test_clock_format_validation() {
        assert!(WidgetsConfig::default().validate().is_ok());

        let config: WidgetsConfig = toml::from_str("[dashboard]\nclock_format = \"%H:%M\"").unwrap();
        assert!(config.validate().is_ok());

        for bad in ["%Q", "%H:%"] {
            let dashboard = DashboardConfig {
                clock_format: bad.to_string(),
                ..DashboardConfig::default()
            };
            let err = dashboard.validate().unwrap_err();
            assert!(err.is_config(), "{}", bad);
        }
    }

    #[test]
    fn test_round_trip_toml() {
        let config = WidgetsConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let parsed: WidgetsConfig = toml::from_str(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
