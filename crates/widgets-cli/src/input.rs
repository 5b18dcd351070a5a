//! REPL line parsing.

use std::path::PathBuf;

use widgets_application::DashboardAction;

/// One parsed REPL line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// A dashboard interaction; an empty line is a plain refresh
    Action(DashboardAction),
    Export(Option<PathBuf>),
    Import(PathBuf),
    SwitchSession(String),
    /// Drops a session's state; `None` means the current session
    EndSession(Option<String>),
    ListSessions,
    Help,
    Quit,
}

/// Command words offered by completion and hints.
pub const COMMANDS: &[&str] = &[
    "start",
    "stop",
    "reset",
    "note ",
    "notes clear",
    "counter new ",
    "counter inc ",
    "counter dec ",
    "counter rm ",
    "shortcut add ",
    "shortcut rm ",
    "export",
    "import ",
    "session ",
    "sessions",
    "end",
    "help",
    "quit",
    "exit",
];

pub const HELP: &str = "\
Commands:
  <enter>                     refresh the dashboard
  start | stop | reset        stopwatch controls (start also resumes)
  note <text>                 save a note
  notes clear                 delete all notes
  counter new <name>          create a counter
  counter inc|dec <name>      increment or decrement a counter
  counter rm <name>           delete a counter
  shortcut add <label> <url>  add a shortcut
  shortcut rm <id>            delete a shortcut
  export [path]               write the session to a JSON file
  import <path>               load a JSON file into the session
  session <name>              switch to another session
  sessions                    list open sessions
  end [name]                  discard a session (default: the current one)
  help                        show this help
  quit | exit                 leave";

/// Parses one REPL line.
///
/// Returns a usage message for malformed commands.
pub fn parse_line(line: &str) -> Result<ReplCommand, String> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(ReplCommand::Action(DashboardAction::Refresh));
    }

    let (word, rest) = split_word(line);
    let command = match word {
        "start" | "resume" => ReplCommand::Action(DashboardAction::StartStopwatch),
        "stop" => ReplCommand::Action(DashboardAction::StopStopwatch),
        "reset" => ReplCommand::Action(DashboardAction::ResetStopwatch),
        "note" => ReplCommand::Action(DashboardAction::SaveNote {
            text: required(rest, "note <text>")?.to_string(),
        }),
        "notes" => match rest {
            "clear" => ReplCommand::Action(DashboardAction::ClearNotes),
            _ => return Err("usage: notes clear".to_string()),
        },
        "counter" => parse_counter(rest)?,
        "shortcut" => parse_shortcut(rest)?,
        "export" => ReplCommand::Export((!rest.is_empty()).then(|| PathBuf::from(rest))),
        "import" => ReplCommand::Import(PathBuf::from(required(rest, "import <path>")?)),
        "session" => ReplCommand::SwitchSession(required(rest, "session <name>")?.to_string()),
        "sessions" => ReplCommand::ListSessions,
        "end" => ReplCommand::EndSession((!rest.is_empty()).then(|| rest.to_string())),
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" => ReplCommand::Quit,
        other => return Err(format!("unknown command '{}', type 'help'", other)),
    };
    Ok(command)
}

fn parse_counter(args: &str) -> Result<ReplCommand, String> {
    let (sub, name) = split_word(args);
    let name = required(name, "counter new|inc|dec|rm <name>")?.to_string();
    let action = match sub {
        "new" => DashboardAction::CreateCounter { name },
        "inc" | "+" => DashboardAction::IncrementCounter { name },
        "dec" | "-" => DashboardAction::DecrementCounter { name },
        "rm" => DashboardAction::DeleteCounter { name },
        _ => return Err("usage: counter new|inc|dec|rm <name>".to_string()),
    };
    Ok(ReplCommand::Action(action))
}

fn parse_shortcut(args: &str) -> Result<ReplCommand, String> {
    let (sub, rest) = split_word(args);
    match sub {
        "add" => {
            // The url is the last word, the label everything before it
            let usage = "usage: shortcut add <label> <url>";
            let (label, url) = rest.rsplit_once(char::is_whitespace).ok_or(usage)?;
            let label = label.trim();
            if label.is_empty() {
                return Err(usage.to_string());
            }
            Ok(ReplCommand::Action(DashboardAction::AddShortcut {
                label: label.to_string(),
                url: url.to_string(),
            }))
        }
        "rm" => Ok(ReplCommand::Action(DashboardAction::DeleteShortcut {
            id: required(rest, "shortcut rm <id>")?.to_string(),
        })),
        _ => Err("usage: shortcut add <label> <url> | shortcut rm <id>".to_string()),
    }
}

fn split_word(line: &str) -> (&str, &str) {
    match line.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim()),
        None => (line, ""),
    }
}

fn required<'a>(value: &'a str, usage: &str) -> Result<&'a str, String> {
    if value.is_empty() {
        Err(format!("usage: {}", usage))
    } else {
        Ok(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn action(line: &str) -> DashboardAction {
        match parse_line(line) {
            Ok(ReplCommand::Action(action)) => action,
            other => panic!("expected action for {line:?}, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_line_refreshes() {
        assert_eq!(action(""), DashboardAction::Refresh);
        assert_eq!(action("   "), DashboardAction::Refresh);
    }

    #[test]
    fn test_stopwatch_words() {
        assert_eq!(action("start"), DashboardAction::StartStopwatch);
        assert_eq!(action("resume"), DashboardAction::StartStopwatch);
        assert_eq!(action("stop"), DashboardAction::StopStopwatch);
        assert_eq!(action("reset"), DashboardAction::ResetStopwatch);
    }

    #[test]
    fn test_note_keeps_inner_spacing() {
        assert_eq!(
            action("note  call  mom "),
            DashboardAction::SaveNote {
                text: "call  mom".to_string()
            }
        );
        assert!(parse_line("note").is_err());
        assert_eq!(action("notes clear"), DashboardAction::ClearNotes);
    }

    #[test]
    fn test_counter_commands() {
        assert_eq!(
            action("counter new glasses of water"),
            DashboardAction::CreateCounter {
                name: "glasses of water".to_string()
            }
        );
        assert_eq!(
            action("counter + cups"),
            DashboardAction::IncrementCounter {
                name: "cups".to_string()
            }
        );
        assert_eq!(
            action("counter rm cups"),
            DashboardAction::DeleteCounter {
                name: "cups".to_string()
            }
        );
        assert!(parse_line("counter new").is_err());
        assert!(parse_line("counter bump cups").is_err());
    }

    #[test]
    fn test_shortcut_label_may_contain_spaces() {
        assert_eq!(
            action("shortcut add Rust docs https://docs.rs"),
            DashboardAction::AddShortcut {
                label: "Rust docs".to_string(),
                url: "https://docs.rs".to_string()
            }
        );
        assert!(parse_line("shortcut add https://docs.rs").is_err());
        assert_eq!(
            action("shortcut rm 1234"),
            DashboardAction::DeleteShortcut {
                id: "1234".to_string()
            }
        );
    }

    #[test]
    fn test_other_commands() {
        assert_eq!(parse_line("export"), Ok(ReplCommand::Export(None)));
        assert_eq!(
            parse_line("export /tmp/out.json"),
            Ok(ReplCommand::Export(Some(PathBuf::from("/tmp/out.json"))))
        );
        assert_eq!(
            parse_line("import in.json"),
            Ok(ReplCommand::Import(PathBuf::from("in.json")))
        );
        assert!(parse_line("import").is_err());
        assert_eq!(
            parse_line("session work"),
            Ok(ReplCommand::SwitchSession("work".to_string()))
        );
        assert_eq!(parse_line("sessions"), Ok(ReplCommand::ListSessions));
        assert_eq!(parse_line("end"), Ok(ReplCommand::EndSession(None)));
        assert_eq!(
            parse_line("end  work "),
            Ok(ReplCommand::EndSession(Some("work".to_string())))
        );
        assert_eq!(parse_line("exit"), Ok(ReplCommand::Quit));
        assert!(parse_line("dance").unwrap_err().contains("unknown command"));
    }
}
