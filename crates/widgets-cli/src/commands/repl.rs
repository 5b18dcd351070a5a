use std::path::PathBuf;

use anyhow::Result;
use colored::Colorize;
use rustyline::Editor;
use rustyline::error::ReadlineError;
use rustyline::history::DefaultHistory;

use widgets_application::{DashboardAction, RenderPass, WidgetsUseCase};
use widgets_core::config::DashboardConfig;
use widgets_infrastructure::JsonSnapshotFile;

use crate::display::{format_dashboard, format_notice};
use crate::helper::ReplHelper;
use crate::input::{HELP, ReplCommand, parse_line};

/// Runs the interactive dashboard.
///
/// Each line is one interaction: it is dispatched to the current session and
/// the dashboard is printed again from the resulting state.
pub async fn run(
    usecase: &WidgetsUseCase,
    config: &DashboardConfig,
    session: String,
    import: Option<PathBuf>,
) -> Result<()> {
    let mut session = session;
    let helper = ReplHelper::new();
    let mut rl: Editor<ReplHelper, DefaultHistory> = Editor::new()?;
    rl.set_helper(Some(helper.clone()));

    println!("{}", "=== Widgets REPL ===".bright_magenta().bold());
    println!(
        "{}",
        "Press enter to refresh, 'help' for commands, 'quit' to exit.".bright_black()
    );
    println!();

    let first = match import {
        Some(path) => {
            usecase
                .import_from(&session, &JsonSnapshotFile::new(path))
                .await
        }
        None => usecase.dispatch(&session, DashboardAction::Refresh).await,
    };
    show(&helper, &session, &first);

    loop {
        let readline = rl.readline(&format!("{}> ", session));

        match readline {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = rl.add_history_entry(line.as_str());
                }

                let command = match parse_line(&line) {
                    Ok(command) => command,
                    Err(usage) => {
                        println!("{}", usage.yellow());
                        continue;
                    }
                };

                match command {
                    ReplCommand::Quit => {
                        println!("{}", "Goodbye!".bright_green());
                        break;
                    }
                    ReplCommand::Help => println!("{}", HELP),
                    ReplCommand::Action(action) => {
                        let pass = usecase.dispatch(&session, action).await;
                        show(&helper, &session, &pass);
                    }
                    ReplCommand::Export(path) => {
                        let repository = match path {
                            Some(path) => JsonSnapshotFile::new(path),
                            None => match JsonSnapshotFile::default_export(&config.export_file) {
                                Ok(repository) => repository,
                                Err(e) => {
                                    println!("{}", format!("Failed to export: {}", e).red());
                                    continue;
                                }
                            },
                        };
                        let outcome = usecase.export_to(&session, &repository).await;
                        if let Some(notice) = &outcome.notice {
                            println!("{}", format_notice(notice));
                        }
                    }
                    ReplCommand::Import(path) => {
                        let pass = usecase
                            .import_from(&session, &JsonSnapshotFile::new(path))
                            .await;
                        show(&helper, &session, &pass);
                    }
                    ReplCommand::SwitchSession(name) => {
                        tracing::info!(from = %session, to = %name, "Switching session");
                        session = name;
                        let pass = usecase.dispatch(&session, DashboardAction::Refresh).await;
                        show(&helper, &session, &pass);
                    }
                    ReplCommand::EndSession(name) => {
                        let target = name.unwrap_or_else(|| session.clone());
                        if !usecase.end_session(&target).await {
                            println!("{}", format!("No open session '{}'.", target).yellow());
                            continue;
                        }
                        println!("{}", format!("Session '{}' ended.", target).bright_green());
                        if target == session {
                            let pass = usecase.dispatch(&session, DashboardAction::Refresh).await;
                            show(&helper, &session, &pass);
                        }
                    }
                    ReplCommand::ListSessions => {
                        for id in usecase.registry().session_ids().await {
                            if id == session {
                                println!("* {}", id.bright_green());
                            } else {
                                println!("  {}", id);
                            }
                        }
                    }
                }
            }
            Err(ReadlineError::Interrupted) => {
                println!("{}", "CTRL-C detected. Type 'quit' to exit.".yellow());
            }
            Err(ReadlineError::Eof) => {
                println!("{}", "CTRL-D detected. Exiting...".bright_green());
                break;
            }
            Err(err) => {
                eprintln!("{}", format!("Error: {:?}", err).red());
                break;
            }
        }
    }

    Ok(())
}

fn show(helper: &ReplHelper, session: &str, pass: &RenderPass) {
    helper.observe(&pass.view);
    println!("{}", format_dashboard(session, &pass.view));
    if let Some(notice) = &pass.outcome.notice {
        println!("{}", format_notice(notice));
    }
    println!();
}
