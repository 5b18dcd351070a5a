//! End-to-end dashboard scenarios through the use case.

use std::sync::Arc;

use tempfile::TempDir;
use widgets_application::{
    DashboardAction, IMPORT_SUCCESS_MESSAGE, NoticeLevel, SessionRegistry, WidgetsUseCase,
};
use widgets_core::clock::ManualClock;
use widgets_core::config::DashboardConfig;
use widgets_core::device::NoBattery;
use widgets_core::session::SessionDefaults;
use widgets_infrastructure::{JsonSnapshotFile, SysfsBatteryProbe};

fn usecase(clock: Arc<ManualClock>) -> WidgetsUseCase {
    WidgetsUseCase::new(
        Arc::new(SessionRegistry::new(SessionDefaults::default())),
        clock,
        Arc::new(NoBattery),
        DashboardConfig::default(),
    )
}

#[tokio::test]
async fn test_stopwatch_resume_accumulates() {
    let clock = Arc::new(ManualClock::at_epoch_secs(1_700_000_000));
    let usecase = usecase(clock.clone());

    usecase.dispatch("s", DashboardAction::StartStopwatch).await;
    clock.advance_secs(2);
    usecase.dispatch("s", DashboardAction::StopStopwatch).await;
    clock.advance_secs(100);
    usecase.dispatch("s", DashboardAction::StartStopwatch).await;
    clock.advance_secs(3);
    let pass = usecase.dispatch("s", DashboardAction::StopStopwatch).await;

    assert_eq!(pass.view.stopwatch.display, "0:00:05");
    assert_eq!(pass.view.stopwatch.start_label, "Start");

    // Idle display is stable across renders
    clock.advance_secs(30);
    assert_eq!(usecase.render("s").await.stopwatch.display, "0:00:05");

    let pass = usecase.dispatch("s", DashboardAction::ResetStopwatch).await;
    assert!(pass.outcome.changed);
    assert_eq!(pass.view.stopwatch.display, "0:00:00");
}

#[tokio::test]
async fn test_counter_lifecycle() {
    let clock = Arc::new(ManualClock::at_epoch_secs(1_700_000_000));
    let usecase = usecase(clock);
    let name = || "water".to_string();

    usecase
        .dispatch("s", DashboardAction::CreateCounter { name: "  water ".into() })
        .await;
    usecase
        .dispatch("s", DashboardAction::IncrementCounter { name: name() })
        .await;
    usecase
        .dispatch("s", DashboardAction::IncrementCounter { name: name() })
        .await;
    let pass = usecase
        .dispatch("s", DashboardAction::DecrementCounter { name: name() })
        .await;
    assert_eq!(pass.view.counters[0].name, "water");
    assert_eq!(pass.view.counters[0].value, 1);

    usecase
        .dispatch("s", DashboardAction::DecrementCounter { name: name() })
        .await;
    let pass = usecase
        .dispatch("s", DashboardAction::DecrementCounter { name: name() })
        .await;
    assert!(!pass.outcome.changed);
    assert_eq!(pass.view.counters[0].value, 0);

    let pass = usecase
        .dispatch("s", DashboardAction::DeleteCounter { name: name() })
        .await;
    assert!(pass.view.counters.is_empty());
}

#[tokio::test]
async fn test_notes_and_shortcuts() {
    let clock = Arc::new(ManualClock::at_epoch_secs(1_700_000_000));
    let usecase = usecase(clock);

    usecase
        .dispatch("s", DashboardAction::SaveNote { text: " first ".into() })
        .await;
    let pass = usecase
        .dispatch("s", DashboardAction::SaveNote { text: "second".into() })
        .await;
    let texts: Vec<&str> = pass.view.notes.iter().map(|n| n.text.as_str()).collect();
    assert_eq!(texts, vec!["second", "first"]);

    let pass = usecase.dispatch("s", DashboardAction::ClearNotes).await;
    assert!(pass.view.notes.is_empty());

    let pass = usecase
        .dispatch(
            "s",
            DashboardAction::AddShortcut {
                label: "Docs".into(),
                url: "https://docs.rs".into(),
            },
        )
        .await;
    assert_eq!(pass.view.shortcuts.len(), 3);

    let gmail_id = pass.view.shortcuts[0].id.clone();
    let pass = usecase
        .dispatch("s", DashboardAction::DeleteShortcut { id: gmail_id })
        .await;
    let labels: Vec<&str> = pass.view.shortcuts.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(labels, vec!["Maps", "Docs"]);
}

#[tokio::test]
async fn test_sessions_do_not_share_state() {
    let clock = Arc::new(ManualClock::at_epoch_secs(1_700_000_000));
    let usecase = usecase(clock);

    usecase
        .dispatch("alice", DashboardAction::CreateCounter { name: "a".into() })
        .await;
    usecase.dispatch("alice", DashboardAction::StartStopwatch).await;

    let bob = usecase.render("bob").await;
    assert!(bob.counters.is_empty());
    assert!(!bob.stopwatch.running);

    let alice = usecase.render("alice").await;
    assert_eq!(alice.counters.len(), 1);
    assert!(alice.stopwatch.running);

    assert!(usecase.end_session("alice").await);
    assert!(usecase.render("alice").await.counters.is_empty());
}

#[tokio::test]
async fn test_export_file_then_import_into_other_session() {
    let temp_dir = TempDir::new().unwrap();
    let repo = JsonSnapshotFile::new(temp_dir.path().join("widgets_export.json"));
    let clock = Arc::new(ManualClock::at_epoch_secs(1_700_000_000));
    let usecase = usecase(clock.clone());

    usecase
        .dispatch("a", DashboardAction::SaveNote { text: "hello".into() })
        .await;
    usecase
        .dispatch("a", DashboardAction::CreateCounter { name: "x".into() })
        .await;
    usecase.dispatch("a", DashboardAction::StartStopwatch).await;
    clock.advance_secs(7);
    usecase.dispatch("a", DashboardAction::StopStopwatch).await;

    let outcome = usecase.export_to("a", &repo).await;
    assert_eq!(outcome.notice.map(|n| n.level), Some(NoticeLevel::Success));

    let pass = usecase.import_from("b", &repo).await;
    let notice = pass.outcome.notice.unwrap();
    assert_eq!(notice.message, IMPORT_SUCCESS_MESSAGE);
    assert_eq!(
        usecase.export("a").await.unwrap(),
        usecase.export("b").await.unwrap()
    );
    assert_eq!(pass.view.stopwatch.display, "0:00:07");
}

#[tokio::test]
async fn test_import_of_unreadable_or_invalid_file_keeps_state() {
    let temp_dir = TempDir::new().unwrap();
    let clock = Arc::new(ManualClock::at_epoch_secs(1_700_000_000));
    let usecase = usecase(clock);
    usecase
        .dispatch("s", DashboardAction::CreateCounter { name: "keep".into() })
        .await;
    let before = usecase.export("s").await.unwrap();

    let missing = JsonSnapshotFile::new(temp_dir.path().join("missing.json"));
    let pass = usecase.import_from("s", &missing).await;
    assert_eq!(
        pass.outcome.notice.map(|n| n.level),
        Some(NoticeLevel::Error)
    );

    let path = temp_dir.path().join("broken.json");
    std::fs::write(&path, "{ not json").unwrap();
    let pass = usecase.import_from("s", &JsonSnapshotFile::new(path)).await;
    let notice = pass.outcome.notice.unwrap();
    assert!(notice.message.starts_with("Failed to import: "));

    assert_eq!(usecase.export("s").await.unwrap(), before);
}

#[tokio::test]
async fn test_counters_only_import_touches_only_counters() {
    let clock = Arc::new(ManualClock::at_epoch_secs(1_700_000_000));
    let usecase = usecase(clock);
    usecase
        .dispatch("s", DashboardAction::SaveNote { text: "stay".into() })
        .await;

    let pass = usecase
        .dispatch(
            "s",
            DashboardAction::Import {
                document: r#"{"counters": {"a": 5}}"#.into(),
            },
        )
        .await;

    assert_eq!(pass.view.notes.len(), 1);
    assert_eq!(pass.view.shortcuts.len(), 2);
    assert_eq!(pass.view.counters[0].value, 5);
}

#[tokio::test]
async fn test_battery_probe_feeds_view() {
    let temp_dir = TempDir::new().unwrap();
    let supply = temp_dir.path().join("BAT0");
    std::fs::create_dir_all(&supply).unwrap();
    std::fs::write(supply.join("type"), "Battery\n").unwrap();
    std::fs::write(supply.join("capacity"), "64\n").unwrap();
    std::fs::write(supply.join("status"), "Discharging\n").unwrap();

    let usecase = WidgetsUseCase::new(
        Arc::new(SessionRegistry::default()),
        Arc::new(ManualClock::at_epoch_secs(1_700_000_000)),
        Arc::new(SysfsBatteryProbe::new(temp_dir.path())),
        DashboardConfig::default(),
    );

    assert_eq!(usecase.render("s").await.battery, "64% (not charging)");
}
