//! Link shortcut domain models.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A labelled link shown on the dashboard.
///
/// Only `id` is unique; labels and URLs may repeat.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Unique shortcut identifier (UUID format)
    pub id: String,
    pub label: String,
    pub url: String,
}

impl Shortcut {
    /// Creates a shortcut from user input.
    ///
    /// Both fields are trimmed and must be non-empty.
    pub fn new(label: &str, url: &str) -> Option<Self> {
        let label = label.trim();
        let url = url.trim();
        if label.is_empty() || url.is_empty() {
            return None;
        }
        Some(Self {
            id: Uuid::new_v4().to_string(),
            label: label.to_string(),
            url: url.to_string(),
        })
    }
}

/// A shortcut a new session starts with.
///
/// Seeds carry no id; each session mints fresh ids when it is initialised.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutSeed {
    pub label: String,
    pub url: String,
}

impl ShortcutSeed {
    pub fn new(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            url: url.into(),
        }
    }

    /// Materialises the seed, skipping seeds with a blank label or URL.
    pub fn instantiate(&self) -> Option<Shortcut> {
        Shortcut::new(&self.label, &self.url)
    }
}

/// The built-in seed shortcuts.
pub fn default_shortcut_seeds() -> Vec<ShortcutSeed> {
    vec![
        ShortcutSeed::new("Gmail", "https://mail.google.com"),
        ShortcutSeed::new("Maps", "https://maps.google.com"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_requires_label_and_url() {
        assert!(Shortcut::new("", "https://x").is_none());
        assert!(Shortcut::new("X", "  ").is_none());

        let s = Shortcut::new(" Docs ", " https://docs.rs ").unwrap();
        assert_eq!(s.label, "Docs");
        assert_eq!(s.url, "https://docs.rs");
    }

    #[test]
    fn test_default_seeds() {
        let seeds = default_shortcut_seeds();
        assert_eq!(seeds.len(), 2);
        assert_eq!(seeds[0].label, "Gmail");
        assert_eq!(seeds[1].url, "https://maps.google.com");
    }

    #[test]
    fn test_instantiate_mints_distinct_ids() {
        let seed = ShortcutSeed::new("Gmail", "https://mail.google.com");
        let a = seed.instantiate().unwrap();
        let b = seed.instantiate().unwrap();
        assert_ne!(a.id, b.id);
        assert_eq!(a.label, b.label);
    }
}
