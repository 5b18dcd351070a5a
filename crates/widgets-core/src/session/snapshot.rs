//! Export/import document for a session's slots.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::HashSet;
use std::fmt;

use crate::counter::Counters;
use crate::error::{Result, WidgetsError};
use crate::note::Note;
use crate::shortcut::Shortcut;
use crate::stopwatch::StopwatchState;

/// One of the four named top-level collections of a session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Notes,
    Counters,
    Shortcuts,
    Stopwatch,
}

impl Slot {
    /// All slots, in export document order.
    pub const ALL: [Slot; 4] = [Slot::Notes, Slot::Counters, Slot::Shortcuts, Slot::Stopwatch];

    /// Key of this slot in the export document.
    pub fn key(self) -> &'static str {
        match self {
            Slot::Notes => "notes",
            Slot::Counters => "counters",
            Slot::Shortcuts => "shortcuts",
            Slot::Stopwatch => "stopwatch",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Serialized aggregate of all slots.
///
/// Always carries all four keys; this is what an export writes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionSnapshot {
    pub notes: Vec<Note>,
    pub counters: Counters,
    pub shortcuts: Vec<Shortcut>,
    pub stopwatch: StopwatchState,
}

impl SessionSnapshot {
    /// Renders the export document (pretty JSON, two-space indent).
    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

/// A slot value that was present in an import document but unusable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RejectedSlot {
    pub slot: Slot,
    pub reason: String,
}

/// The usable parts of an import document.
///
/// `None` means the key was absent or rejected; either way the current slot
/// value stays in place when the patch is applied.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SnapshotPatch {
    pub notes: Option<Vec<Note>>,
    pub counters: Option<Counters>,
    pub shortcuts: Option<Vec<Shortcut>>,
    pub stopwatch: Option<StopwatchState>,
    pub rejected: Vec<RejectedSlot>,
}

impl SnapshotPatch {
    /// Parses an import document.
    ///
    /// Fails as a whole only when the document is not a JSON object. Each
    /// recognised key is decoded and validated on its own; a bad key is
    /// recorded in `rejected` and parsing continues. Unrecognised keys are
    /// ignored.
    pub fn parse(document: &str) -> Result<Self> {
        let value: Value = serde_json::from_str(document)?;
        let Value::Object(object) = value else {
            return Err(WidgetsError::import(
                "snapshot document must be a JSON object",
            ));
        };

        let mut patch = SnapshotPatch::default();
        patch.notes = patch.take_slot(&object, Slot::Notes, validate_notes);
        patch.counters = patch.take_slot(&object, Slot::Counters, Counters::normalized);
        patch.shortcuts = patch.take_slot(&object, Slot::Shortcuts, validate_shortcuts);
        patch.stopwatch = patch.take_slot(&object, Slot::Stopwatch, |stopwatch: StopwatchState| {
            Ok(stopwatch.normalized())
        });
        Ok(patch)
    }

    fn take_slot<T, F>(&mut self, object: &Map<String, Value>, slot: Slot, validate: F) -> Option<T>
    where
        T: DeserializeOwned,
        F: FnOnce(T) -> std::result::Result<T, String>,
    {
        let raw = object.get(slot.key())?;
        let decoded = serde_json::from_value::<T>(raw.clone())
            .map_err(|e| e.to_string())
            .and_then(validate);

        match decoded {
            Ok(value) => Some(value),
            Err(reason) => {
                tracing::warn!(slot = %slot, %reason, "Rejected malformed snapshot slot");
                self.rejected.push(RejectedSlot { slot, reason });
                None
            }
        }
    }

    /// Slots this patch will replace.
    pub fn present_slots(&self) -> Vec<Slot> {
        Slot::ALL
            .into_iter()
            .filter(|slot| match slot {
                Slot::Notes => self.notes.is_some(),
                Slot::Counters => self.counters.is_some(),
                Slot::Shortcuts => self.shortcuts.is_some(),
                Slot::Stopwatch => self.stopwatch.is_some(),
            })
            .collect()
    }
}

fn validate_notes(notes: Vec<Note>) -> std::result::Result<Vec<Note>, String> {
    let mut seen = HashSet::new();
    for note in &notes {
        if note.text.trim().is_empty() {
            return Err(format!("note '{}' has empty text", note.id));
        }
        if !seen.insert(note.id.as_str()) {
            return Err(format!("duplicate note id '{}'", note.id));
        }
    }
    Ok(notes)
}

fn validate_shortcuts(shortcuts: Vec<Shortcut>) -> std::result::Result<Vec<Shortcut>, String> {
    let mut seen = HashSet::new();
    for shortcut in &shortcuts {
        if shortcut.label.trim().is_empty() || shortcut.url.trim().is_empty() {
            return Err(format!("shortcut '{}' has an empty label or url", shortcut.id));
        }
        if !seen.insert(shortcut.id.as_str()) {
            return Err(format!("duplicate shortcut id '{}'", shortcut.id));
        }
    }
    Ok(shortcuts)
}

/// Outcome of applying an import to a session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportReport {
    /// Slots whose value was replaced
    pub replaced: Vec<Slot>,
    /// Slots present in the document but kept at their current value
    pub rejected: Vec<RejectedSlot>,
}

impl ImportReport {
    pub fn is_clean(&self) -> bool {
        self.rejected.is_empty()
    }
}
