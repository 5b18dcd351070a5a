//! Dashboard use case.
//!
//! Every interaction runs one pass: open the session, apply exactly one
//! transition to its store, then render a fresh [`DashboardView`] from the
//! resulting state. The battery is read before the store lock is taken; the
//! lock is then held for the transition and the render.

use std::sync::Arc;

use widgets_core::clock::Clock;
use widgets_core::config::DashboardConfig;
use widgets_core::device::{BatteryProbe, BatteryReading};
use widgets_core::session::{ImportReport, SessionStore, SnapshotRepository};
use widgets_core::{Result, WidgetsError};

use crate::action::{ActionOutcome, DashboardAction, Notice};
use crate::session::SessionRegistry;
use crate::view::DashboardView;

/// Notice shown after a fully successful import.
pub const IMPORT_SUCCESS_MESSAGE: &str = "Imported successfully.";

/// Result of one interaction.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderPass {
    pub outcome: ActionOutcome,
    pub view: DashboardView,
}

/// Use case coordinating the session registry with the clock, battery probe
/// and snapshot repositories.
pub struct WidgetsUseCase {
    /// Live session stores
    registry: Arc<SessionRegistry>,
    /// Time source for the stopwatch, notes and wall clock
    clock: Arc<dyn Clock>,
    /// Host battery reader, consulted on every render
    battery: Arc<dyn BatteryProbe>,
    /// Display settings
    config: DashboardConfig,
}

impl WidgetsUseCase {
    pub fn new(
        registry: Arc<SessionRegistry>,
        clock: Arc<dyn Clock>,
        battery: Arc<dyn BatteryProbe>,
        config: DashboardConfig,
    ) -> Self {
        Self {
            registry,
            clock,
            battery,
            config,
        }
    }

    pub fn registry(&self) -> &Arc<SessionRegistry> {
        &self.registry
    }

    /// Runs one interaction against `session_id`.
    pub async fn dispatch(&self, session_id: &str, action: DashboardAction) -> RenderPass {
        let battery = self.read_battery().await;
        let handle = self.registry.open(session_id).await;
        let mut store = handle.lock().await;

        let action_name = action.name();
        let outcome = apply_action(&mut store, action, self.clock.as_ref());
        tracing::debug!(
            session_id,
            action = action_name,
            changed = outcome.changed,
            "Dispatched action"
        );

        let view = DashboardView::build(&store, self.clock.as_ref(), &battery, &self.config);
        RenderPass { outcome, view }
    }

    /// Renders without changing anything.
    pub async fn render(&self, session_id: &str) -> DashboardView {
        self.dispatch(session_id, DashboardAction::Refresh).await.view
    }

    /// The export document of `session_id`.
    pub async fn export(&self, session_id: &str) -> Result<String> {
        let handle = self.registry.open(session_id).await;
        let store = handle.lock().await;
        store.export().to_json_pretty()
    }

    /// Writes the export document of `session_id` to `repository`.
    pub async fn export_to(
        &self,
        session_id: &str,
        repository: &dyn SnapshotRepository,
    ) -> ActionOutcome {
        let written = match self.export(session_id).await {
            Ok(document) => repository.save(&document).await,
            Err(e) => Err(e),
        };

        let notice = match written {
            Ok(()) => Notice::success(format!("Exported to {}.", repository.location())),
            Err(e) => {
                tracing::error!(session_id, "Export failed: {}", e);
                Notice::error(format!("Failed to export: {}", e))
            }
        };
        ActionOutcome::changed(false).with_notice(notice)
    }

    /// Loads a document from `repository` and imports it into `session_id`.
    ///
    /// A document that cannot be read is reported like an unparseable one:
    /// the store stays untouched.
    pub async fn import_from(
        &self,
        session_id: &str,
        repository: &dyn SnapshotRepository,
    ) -> RenderPass {
        match repository.load().await {
            Ok(document) => {
                self.dispatch(session_id, DashboardAction::Import { document })
                    .await
            }
            Err(e) => {
                let view = self.render(session_id).await;
                RenderPass {
                    outcome: import_failed(&e),
                    view,
                }
            }
        }
    }

    /// Ends a session, dropping its store.
    ///
    /// The next interaction with the same id starts from a fresh store.
    pub async fn end_session(&self, session_id: &str) -> bool {
        let ended = self.registry.remove(session_id).await;
        if ended {
            tracing::info!(session_id, "Session ended");
        }
        ended
    }

    /// Reads the battery on the blocking pool; probes may touch the filesystem.
    async fn read_battery(&self) -> BatteryReading {
        let probe = Arc::clone(&self.battery);
        match tokio::task::spawn_blocking(move || probe.read()).await {
            Ok(reading) => reading,
            Err(e) => {
                tracing::warn!("Battery read failed: {}", e);
                BatteryReading::unavailable()
            }
        }
    }
}

/// Applies one action as a single store transition.
pub fn apply_action(
    store: &mut SessionStore,
    action: DashboardAction,
    clock: &dyn Clock,
) -> ActionOutcome {
    match action {
        DashboardAction::Refresh => ActionOutcome::changed(false),
        DashboardAction::StartStopwatch => ActionOutcome::changed(store.start_stopwatch(clock)),
        DashboardAction::StopStopwatch => ActionOutcome::changed(store.stop_stopwatch(clock)),
        DashboardAction::ResetStopwatch => ActionOutcome::changed(store.reset_stopwatch()),
        DashboardAction::SaveNote { text } => {
            ActionOutcome::changed(store.save_note(&text, clock))
        }
        DashboardAction::ClearNotes => ActionOutcome::changed(store.clear_notes()),
        DashboardAction::CreateCounter { name } => {
            ActionOutcome::changed(store.create_counter(&name))
        }
        DashboardAction::IncrementCounter { name } => {
            ActionOutcome::changed(store.increment_counter(&name))
        }
        DashboardAction::DecrementCounter { name } => {
            ActionOutcome::changed(store.decrement_counter(&name))
        }
        DashboardAction::DeleteCounter { name } => {
            ActionOutcome::changed(store.delete_counter(&name))
        }
        DashboardAction::AddShortcut { label, url } => {
            ActionOutcome::changed(store.add_shortcut(&label, &url))
        }
        DashboardAction::DeleteShortcut { id } => {
            ActionOutcome::changed(store.delete_shortcut(&id))
        }
        DashboardAction::Import { document } => match store.import(&document) {
            Ok(report) => import_succeeded(&report),
            Err(e) => import_failed(&e),
        },
    }
}

fn import_succeeded(report: &ImportReport) -> ActionOutcome {
    let outcome = ActionOutcome::changed(!report.replaced.is_empty());
    if report.is_clean() {
        tracing::info!(replaced = report.replaced.len(), "Import applied");
        return outcome.with_notice(Notice::success(IMPORT_SUCCESS_MESSAGE));
    }

    let skipped = report
        .rejected
        .iter()
        .map(|rejected| format!("{} ({})", rejected.slot, rejected.reason))
        .collect::<Vec<_>>()
        .join("; ");
    tracing::warn!(
        replaced = report.replaced.len(),
        rejected = report.rejected.len(),
        "Import applied with rejected keys"
    );
    outcome.with_notice(Notice::warning(format!(
        "{} Skipped malformed keys: {}",
        IMPORT_SUCCESS_MESSAGE, skipped
    )))
}

fn import_failed(error: &WidgetsError) -> ActionOutcome {
    tracing::warn!("Import failed: {}", error);
    ActionOutcome::changed(false).with_notice(Notice::error(format!("Failed to import: {}", error)))
}
