//! The per-session store of widget slots.

use serde::{Deserialize, Serialize};

use crate::clock::Clock;
use crate::counter::Counters;
use crate::error::Result;
use crate::note::Note;
use crate::session::snapshot::{ImportReport, SessionSnapshot, SnapshotPatch};
use crate::shortcut::{Shortcut, ShortcutSeed, default_shortcut_seeds};
use crate::stopwatch::StopwatchState;

/// Values a session's slots start with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionDefaults {
    /// Shortcuts every new session is seeded with
    pub shortcut_seeds: Vec<ShortcutSeed>,
}

impl Default for SessionDefaults {
    fn default() -> Self {
        Self {
            shortcut_seeds: default_shortcut_seeds(),
        }
    }
}

/// All widget state of one session.
///
/// The store exclusively owns its four slots. Every mutation goes through one
/// of the transition methods below, each of which reports whether anything
/// changed. Validation failures (blank names, unknown ids) are silent no-ops.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStore {
    notes: Vec<Note>,
    counters: Counters,
    stopwatch: StopwatchState,
    shortcuts: Vec<Shortcut>,
}

impl SessionStore {
    /// Creates a store with every slot at its default.
    pub fn initialize(defaults: &SessionDefaults) -> Self {
        Self {
            notes: Vec::new(),
            counters: Counters::new(),
            stopwatch: StopwatchState::new(),
            shortcuts: defaults
                .shortcut_seeds
                .iter()
                .filter_map(ShortcutSeed::instantiate)
                .collect(),
        }
    }

    pub fn notes(&self) -> &[Note] {
        &self.notes
    }

    /// The `limit` most recent notes.
    pub fn recent_notes(&self, limit: usize) -> &[Note] {
        &self.notes[..self.notes.len().min(limit)]
    }

    pub fn counters(&self) -> &Counters {
        &self.counters
    }

    pub fn stopwatch(&self) -> &StopwatchState {
        &self.stopwatch
    }

    pub fn shortcuts(&self) -> &[Shortcut] {
        &self.shortcuts
    }

    // ============================================================================
    // Stopwatch
    // ============================================================================

    pub fn start_stopwatch(&mut self, clock: &dyn Clock) -> bool {
        self.stopwatch.start(clock)
    }

    pub fn stop_stopwatch(&mut self, clock: &dyn Clock) -> bool {
        self.stopwatch.stop(clock)
    }

    pub fn reset_stopwatch(&mut self) -> bool {
        let changed = self.stopwatch != StopwatchState::default();
        self.stopwatch.reset();
        changed
    }

    // ============================================================================
    // Notes
    // ============================================================================

    /// Saves a note at the front of the list.
    ///
    /// Blank text, or a clock with no reading, creates nothing.
    pub fn save_note(&mut self, text: &str, clock: &dyn Clock) -> bool {
        let Some(created_at) = clock.now_local_naive() else {
            tracing::warn!("Clock unavailable, note not saved");
            return false;
        };
        match Note::new(text, created_at) {
            Some(note) => {
                self.notes.insert(0, note);
                true
            }
            None => false,
        }
    }

    pub fn clear_notes(&mut self) -> bool {
        let changed = !self.notes.is_empty();
        self.notes.clear();
        changed
    }

    // ============================================================================
    // Counters
    // ============================================================================

    pub fn create_counter(&mut self, name: &str) -> bool {
        self.counters.create(name)
    }

    pub fn increment_counter(&mut self, name: &str) -> bool {
        self.counters.increment(name)
    }

    pub fn decrement_counter(&mut self, name: &str) -> bool {
        self.counters.decrement(name)
    }

    pub fn delete_counter(&mut self, name: &str) -> bool {
        self.counters.delete(name)
    }

    // ============================================================================
    // Shortcuts
    // ============================================================================

    pub fn add_shortcut(&mut self, label: &str, url: &str) -> bool {
        match Shortcut::new(label, url) {
            Some(shortcut) => {
                self.shortcuts.push(shortcut);
                true
            }
            None => false,
        }
    }

    /// Removes the shortcut with `id`. Unknown ids leave the list untouched.
    pub fn delete_shortcut(&mut self, id: &str) -> bool {
        let before = self.shortcuts.len();
        self.shortcuts.retain(|shortcut| shortcut.id != id);
        self.shortcuts.len() != before
    }

    // ============================================================================
    // Export / import
    // ============================================================================

    /// Copies every slot verbatim into a snapshot.
    pub fn export(&self) -> SessionSnapshot {
        SessionSnapshot {
            notes: self.notes.clone(),
            counters: self.counters.clone(),
            shortcuts: self.shortcuts.clone(),
            stopwatch: self.stopwatch.clone(),
        }
    }

    /// Replaces each slot present in `patch` wholesale.
    pub fn apply(&mut self, patch: SnapshotPatch) -> ImportReport {
        let replaced = patch.present_slots();
        let SnapshotPatch {
            notes,
            counters,
            shortcuts,
            stopwatch,
            rejected,
        } = patch;

        if let Some(notes) = notes {
            self.notes = notes;
        }
        if let Some(counters) = counters {
            self.counters = counters;
        }
        if let Some(shortcuts) = shortcuts {
            self.shortcuts = shortcuts;
        }
        if let Some(stopwatch) = stopwatch {
            self.stopwatch = stopwatch.normalized();
        }

        ImportReport { replaced, rejected }
    }

    /// Parses and applies an import document.
    ///
    /// If the document cannot be parsed as an object the store is left
    /// untouched and the error is returned.
    pub fn import(&mut self, document: &str) -> Result<ImportReport> {
        let patch = SnapshotPatch::parse(document)?;
        Ok(self.apply(patch))
    }
}
