//! User actions and their outcomes.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One user interaction on the dashboard.
///
/// Each action maps to exactly one store transition; [`DashboardAction::Refresh`]
/// maps to none and only re-renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DashboardAction {
    Refresh,
    /// Start or Resume; both labels trigger this
    StartStopwatch,
    StopStopwatch,
    ResetStopwatch,
    SaveNote { text: String },
    ClearNotes,
    CreateCounter { name: String },
    IncrementCounter { name: String },
    DecrementCounter { name: String },
    DeleteCounter { name: String },
    AddShortcut { label: String, url: String },
    DeleteShortcut { id: String },
    /// Import an already loaded snapshot document
    Import { document: String },
}

impl DashboardAction {
    /// Short name used in logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Refresh => "refresh",
            Self::StartStopwatch => "start_stopwatch",
            Self::StopStopwatch => "stop_stopwatch",
            Self::ResetStopwatch => "reset_stopwatch",
            Self::SaveNote { .. } => "save_note",
            Self::ClearNotes => "clear_notes",
            Self::CreateCounter { .. } => "create_counter",
            Self::IncrementCounter { .. } => "increment_counter",
            Self::DecrementCounter { .. } => "decrement_counter",
            Self::DeleteCounter { .. } => "delete_counter",
            Self::AddShortcut { .. } => "add_shortcut",
            Self::DeleteShortcut { .. } => "delete_shortcut",
            Self::Import { .. } => "import",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// A user-visible message produced by an action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}

/// What an action did to the store.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ActionOutcome {
    /// Whether any slot changed
    pub changed: bool,
    pub notice: Option<Notice>,
}

impl ActionOutcome {
    pub fn changed(changed: bool) -> Self {
        Self {
            changed,
            notice: None,
        }
    }

    pub fn with_notice(mut self, notice: Notice) -> Self {
        self.notice = Some(notice);
        self
    }
}
