//! Host device information shown beside the widgets.
//!
//! The battery readout is purely cosmetic: nothing in the session store
//! depends on it, and a host without a readable battery shows a fixed message.

use serde::{Deserialize, Serialize};

/// Message shown when the host exposes no battery.
pub const BATTERY_UNAVAILABLE_MESSAGE: &str = "Battery information not available on this device.";

/// One battery observation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum BatteryReading {
    Available { percent: u8, charging: bool },
    Unavailable { reason: String },
}

impl BatteryReading {
    pub fn unavailable() -> Self {
        Self::Unavailable {
            reason: BATTERY_UNAVAILABLE_MESSAGE.to_string(),
        }
    }

    /// Text shown in the battery widget, e.g. `87% (charging)`.
    pub fn summary(&self) -> String {
        match self {
            Self::Available { percent, charging } => {
                let state = if *charging { "charging" } else { "not charging" };
                format!("{percent}% ({state})")
            }
            Self::Unavailable { reason } => reason.clone(),
        }
    }
}

/// Reads the host battery state.
pub trait BatteryProbe: Send + Sync {
    fn read(&self) -> BatteryReading;
}

/// Probe for hosts without a battery.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoBattery;

impl BatteryProbe for NoBattery {
    fn read(&self) -> BatteryReading {
        BatteryReading::unavailable()
    }
}
