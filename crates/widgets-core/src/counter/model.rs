//! Counter domain model.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Named non-negative counters in creation order.
///
/// The name is the map key, so two counters can never share a name. Values
/// are unsigned; decrementing at zero leaves the counter at zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Counters(IndexMap<String, u64>);

impl Counters {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a counter at zero.
    ///
    /// The name is trimmed. Returns `false` for a blank name or a name that
    /// already exists, whose value is kept.
    pub fn create(&mut self, name: &str) -> bool {
        let name = name.trim();
        if name.is_empty() || self.0.contains_key(name) {
            return false;
        }
        self.0.insert(name.to_string(), 0);
        true
    }

    /// Adds one. Unknown names are ignored.
    ///
    /// Lookups trim the name the same way [`Counters::create`] does.
    pub fn increment(&mut self, name: &str) -> bool {
        match self.0.get_mut(name.trim()) {
            Some(value) => {
                *value = value.saturating_add(1);
                true
            }
            None => false,
        }
    }

    /// Subtracts one, stopping at zero.
    ///
    /// Returns `true` only when the value actually changed.
    pub fn decrement(&mut self, name: &str) -> bool {
        match self.0.get_mut(name.trim()) {
            Some(value) if *value > 0 => {
                *value -= 1;
                true
            }
            _ => false,
        }
    }

    /// Removes a counter, keeping the order of the others.
    pub fn delete(&mut self, name: &str) -> bool {
        self.0.shift_remove(name.trim()).is_some()
    }

    pub fn get(&self, name: &str) -> Option<u64> {
        self.0.get(name.trim()).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(name.trim())
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, u64)> {
        self.0.iter().map(|(name, value)| (name.as_str(), *value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Trims every name, keeping order and values.
    ///
    /// Fails on a blank name or on two names that are equal once trimmed.
    pub fn normalized(self) -> Result<Self, String> {
        let mut normalized = IndexMap::with_capacity(self.0.len());
        for (name, value) in self.0 {
            let trimmed = name.trim();
            if trimmed.is_empty() {
                return Err("counter name is blank".to_string());
            }
            if normalized.insert(trimmed.to_string(), value).is_some() {
                return Err(format!("duplicate counter name '{}'", trimmed));
            }
        }
        Ok(Self(normalized))
    }
}

impl<const N: usize> From<[(&str, u64); N]> for Counters {
    fn from(entries: [(&str, u64); N]) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(name, value)| (name.to_string(), value))
                .collect(),
        )
    }
}
