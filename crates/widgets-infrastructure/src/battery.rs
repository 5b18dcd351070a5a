//! Battery probe reading the Linux power-supply class in sysfs.

use std::fs;
use std::path::{Path, PathBuf};

use widgets_core::device::{BatteryProbe, BatteryReading};

const DEFAULT_POWER_SUPPLY_ROOT: &str = "/sys/class/power_supply";

/// Reads the first `Battery` supply under a power-supply directory.
#[derive(Debug, Clone)]
pub struct SysfsBatteryProbe {
    root: PathBuf,
}

impl Default for SysfsBatteryProbe {
    fn default() -> Self {
        Self::new(DEFAULT_POWER_SUPPLY_ROOT)
    }
}

impl SysfsBatteryProbe {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn read_attr(supply: &Path, name: &str) -> Option<String> {
        fs::read_to_string(supply.join(name))
            .ok()
            .map(|value| value.trim().to_string())
    }

    fn read_supply(supply: &Path) -> Option<BatteryReading> {
        if Self::read_attr(supply, "type")?.as_str() != "Battery" {
            return None;
        }
        let capacity: u32 = Self::read_attr(supply, "capacity")?.parse().ok()?;
        let status = Self::read_attr(supply, "status").unwrap_or_default();

        // "Full" is reported while still on AC power
        let charging = matches!(status.as_str(), "Charging" | "Full");

        Some(BatteryReading::Available {
            percent: capacity.min(100) as u8,
            charging,
        })
    }
}

impl BatteryProbe for SysfsBatteryProbe {
    fn read(&self) -> BatteryReading {
        let entries = match fs::read_dir(&self.root) {
            Ok(entries) => entries,
            Err(e) => {
                tracing::debug!(root = %self.root.display(), "No power supply directory: {}", e);
                return BatteryReading::unavailable();
            }
        };

        let mut supplies: Vec<PathBuf> = entries.flatten().map(|entry| entry.path()).collect();
        supplies.sort();

        supplies
            .iter()
            .find_map(|supply| Self::read_supply(supply))
            .unwrap_or_else(BatteryReading::unavailable)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use widgets_core::device::BATTERY_UNAVAILABLE_MESSAGE;

    fn write_supply(root: &Path, name: &str, attrs: &[(&str, &str)]) {
        let dir = root.join(name);
        fs::create_dir_all(&dir).unwrap();
        for (attr, value) in attrs {
            fs::write(dir.join(attr), format!("{value}\n")).unwrap();
        }
    }

    #[test]
    fn test_reads_battery() {
        let temp_dir = TempDir::new().unwrap();
        write_supply(temp_dir.path(), "AC", &[("type", "Mains"), ("online", "1")]);
        write_supply(
            temp_dir.path(),
            "BAT0",
            &[("type", "Battery"), ("capacity", "87"), ("status", "Charging")],
        );

        let reading = SysfsBatteryProbe::new(temp_dir.path()).read();
        assert_eq!(
            reading,
            BatteryReading::Available {
                percent: 87,
                charging: true
            }
        );
    }

    #[test]
    fn test_discharging() {
        let temp_dir = TempDir::new().unwrap();
        write_supply(
            temp_dir.path(),
            "BAT1",
            &[("type", "Battery"), ("capacity", "42"), ("status", "Discharging")],
        );

        let reading = SysfsBatteryProbe::new(temp_dir.path()).read();
        assert_eq!(reading.summary(), "42% (not charging)");
    }

    #[test]
    fn test_no_battery_supply() {
        let temp_dir = TempDir::new().unwrap();
        write_supply(temp_dir.path(), "AC", &[("type", "Mains")]);

        let reading = SysfsBatteryProbe::new(temp_dir.path()).read();
        assert_eq!(reading.summary(), BATTERY_UNAVAILABLE_MESSAGE);
    }

    #[test]
    fn test_missing_root() {
        let temp_dir = TempDir::new().unwrap();
        let reading = SysfsBatteryProbe::new(temp_dir.path().join("absent")).read();
        assert_eq!(reading, BatteryReading::unavailable());
    }

    #[test]
    fn test_unparseable_capacity() {
        let temp_dir = TempDir::new().unwrap();
        write_supply(
            temp_dir.path(),
            "BAT0",
            &[("type", "Battery"), ("capacity", "n/a")],
        );

        let reading = SysfsBatteryProbe::new(temp_dir.path()).read();
        assert_eq!(reading, BatteryReading::unavailable());
    }
}
