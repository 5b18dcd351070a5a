//! Render pass output.
//!
//! A [`DashboardView`] is computed from a store and the collaborators; building
//! it never mutates the store.

use std::fmt::Write;

use serde::Serialize;

use widgets_core::clock::Clock;
use widgets_core::config::{DEFAULT_CLOCK_FORMAT, DashboardConfig};
use widgets_core::device::BatteryReading;
use widgets_core::session::SessionStore;
use widgets_core::stopwatch::{ELAPSED_PLACEHOLDER, format_elapsed};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StopwatchView {
    pub running: bool,
    /// `H:MM:SS`, or a placeholder when no clock reading is available
    pub display: String,
    /// `Start` while idle, `Resume` while running
    pub start_label: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NoteView {
    pub id: String,
    pub text: String,
    pub timestamp: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CounterView {
    pub name: String,
    pub value: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ShortcutView {
    pub id: String,
    pub label: String,
    pub url: String,
}

/// Everything the dashboard shows for one session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardView {
    pub clock: Option<String>,
    pub stopwatch: StopwatchView,
    pub notes: Vec<NoteView>,
    pub total_notes: usize,
    pub counters: Vec<CounterView>,
    pub battery: String,
    pub shortcuts: Vec<ShortcutView>,
}

impl DashboardView {
    pub fn build(
        store: &SessionStore,
        clock: &dyn Clock,
        battery: &BatteryReading,
        config: &DashboardConfig,
    ) -> Self {
        // chrono reports some bad formats only while writing, so never
        // format straight into to_string()
        let wall_clock = clock.now_local_naive().map(|now| {
            let mut text = String::new();
            if write!(text, "{}", now.format(&config.clock_format)).is_err() {
                tracing::warn!(format = %config.clock_format, "Unusable clock format, using default");
                text = now.format(DEFAULT_CLOCK_FORMAT).to_string();
            }
            text
        });

        let stopwatch = store.stopwatch();
        let display = stopwatch
            .current_elapsed(clock)
            .map(format_elapsed)
            .unwrap_or_else(|| ELAPSED_PLACEHOLDER.to_string());

        Self {
            clock: wall_clock,
            stopwatch: StopwatchView {
                running: stopwatch.is_running(),
                display,
                start_label: if stopwatch.is_running() { "Resume" } else { "Start" },
            },
            notes: store
                .recent_notes(config.recent_notes)
                .iter()
                .map(|note| NoteView {
                    id: note.id.clone(),
                    text: note.text.clone(),
                    timestamp: note.display_timestamp(),
                })
                .collect(),
            total_notes: store.notes().len(),
            counters: store
                .counters()
                .iter()
                .map(|(name, value)| CounterView {
                    name: name.to_string(),
                    value,
                })
                .collect(),
            battery: battery.summary(),
            shortcuts: store
                .shortcuts()
                .iter()
                .map(|shortcut| ShortcutView {
                    id: shortcut.id.clone(),
                    label: shortcut.label.clone(),
                    url: shortcut.url.clone(),
                })
                .collect(),
        }
    }
}
