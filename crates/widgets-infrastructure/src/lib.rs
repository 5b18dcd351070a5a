//! Infrastructure for the Widgets dashboard: config files, export files,
//! platform paths and the host battery probe.

pub mod battery;
pub mod config_service;
pub mod json_snapshot_repository;
pub mod paths;
pub mod storage;

pub use battery::SysfsBatteryProbe;
pub use config_service::ConfigService;
pub use json_snapshot_repository::JsonSnapshotFile;
pub use paths::WidgetsPaths;
