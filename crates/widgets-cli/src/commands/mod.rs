pub mod config;
pub mod render;
pub mod repl;

use std::sync::Arc;

use widgets_application::{SessionRegistry, WidgetsUseCase};
use widgets_core::clock::SystemClock;
use widgets_core::config::WidgetsConfig;
use widgets_infrastructure::SysfsBatteryProbe;

/// Wires the use case with the system clock and the host battery.
pub fn build_usecase(config: &WidgetsConfig) -> WidgetsUseCase {
    WidgetsUseCase::new(
        Arc::new(SessionRegistry::new(config.session_defaults())),
        Arc::new(SystemClock),
        Arc::new(SysfsBatteryProbe::default()),
        config.dashboard.clone(),
    )
}
