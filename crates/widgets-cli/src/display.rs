//! Colored terminal rendering of the dashboard.

use colored::Colorize;

use widgets_application::{DashboardView, Notice, NoticeLevel};

/// Formats the whole dashboard for `session`.
pub fn format_dashboard(session: &str, view: &DashboardView) -> String {
    let mut lines = Vec::new();

    lines.push(
        format!("=== Widgets [{}] ===", session)
            .bright_magenta()
            .bold()
            .to_string(),
    );
    let clock = view.clock.as_deref().unwrap_or("--:--:--");
    lines.push(format!("{} {}", label("Clock"), clock.bright_white().bold()));
    lines.push(format!("{} {}", label("Battery"), view.battery));

    let stopwatch = &view.stopwatch;
    let state = if stopwatch.running {
        "running".green()
    } else {
        "idle".bright_black()
    };
    lines.push(format!(
        "{} {} ({})  {}",
        label("Stopwatch"),
        stopwatch.display.bright_white().bold(),
        state,
        format!("[{} | Stop | Reset]", stopwatch.start_label).bright_black()
    ));

    lines.push(String::new());
    lines.push(section(&format!("Notes ({} of {})", view.notes.len(), view.total_notes)));
    if view.notes.is_empty() {
        lines.push(format!("  {}", "No notes yet.".bright_black()));
    }
    for note in &view.notes {
        lines.push(format!("  {}  {}", note.timestamp.bright_black(), note.text));
    }

    lines.push(section("Counters"));
    if view.counters.is_empty() {
        lines.push(format!("  {}", "No counters yet.".bright_black()));
    }
    for counter in &view.counters {
        lines.push(format!("  {}  {}", counter.name, counter.value.to_string().yellow()));
    }

    lines.push(section("Shortcuts"));
    for shortcut in &view.shortcuts {
        lines.push(format!(
            "  {}  {}  {}",
            shortcut.label.bold(),
            shortcut.url.blue().underline(),
            format!("({})", shortcut.id).bright_black()
        ));
    }

    lines.join("\n")
}

/// Formats a notice in the color of its level.
pub fn format_notice(notice: &Notice) -> String {
    match notice.level {
        NoticeLevel::Success => notice.message.green().to_string(),
        NoticeLevel::Warning => notice.message.yellow().to_string(),
        NoticeLevel::Error => notice.message.red().to_string(),
    }
}

fn label(text: &str) -> String {
    format!("{:<10}", text).cyan().to_string()
}

fn section(title: &str) -> String {
    title.bright_cyan().bold().to_string()
}
