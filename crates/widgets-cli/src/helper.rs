use std::borrow::Cow::{self, Borrowed, Owned};
use std::sync::{Arc, RwLock};

use colored::Colorize;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use widgets_application::DashboardView;

use crate::input::COMMANDS;

/// Names from the last rendered view, used to complete arguments.
#[derive(Debug, Default)]
struct Known {
    counters: Vec<String>,
    shortcut_ids: Vec<String>,
}

/// REPL helper for rustyline that provides completion, highlighting, and hints.
#[derive(Clone, Default)]
pub struct ReplHelper {
    known: Arc<RwLock<Known>>,
}

impl ReplHelper {
    pub fn new() -> Self {
        Self::default()
    }

    /// Refreshes the argument candidates after a render.
    pub fn observe(&self, view: &DashboardView) {
        if let Ok(mut known) = self.known.write() {
            known.counters = view.counters.iter().map(|c| c.name.clone()).collect();
            known.shortcut_ids = view.shortcuts.iter().map(|s| s.id.clone()).collect();
        }
    }

    fn candidates(&self, line: &str) -> Vec<String> {
        const COUNTER_PREFIXES: [&str; 3] = ["counter inc ", "counter dec ", "counter rm "];

        let Ok(known) = self.known.read() else {
            return Vec::new();
        };

        if let Some(prefix) = COUNTER_PREFIXES.iter().find(|p| line.starts_with(*p)) {
            return known
                .counters
                .iter()
                .map(|name| format!("{prefix}{name}"))
                .filter(|full| full.starts_with(line))
                .collect();
        }
        if line.starts_with("shortcut rm ") {
            return known
                .shortcut_ids
                .iter()
                .map(|id| format!("shortcut rm {id}"))
                .filter(|full| full.starts_with(line))
                .collect();
        }

        COMMANDS
            .iter()
            .filter(|cmd| cmd.starts_with(line))
            .map(|cmd| cmd.to_string())
            .collect()
    }
}

impl Helper for ReplHelper {}

impl Completer for ReplHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let line = &line[..pos];
        if line.is_empty() {
            return Ok((0, vec![]));
        }

        let candidates = self
            .candidates(line)
            .into_iter()
            .map(|cmd| Pair {
                display: cmd.clone(),
                replacement: cmd,
            })
            .collect();
        Ok((0, candidates))
    }
}

impl Highlighter for ReplHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        let word = line.split_whitespace().next().unwrap_or_default();
        let known = COMMANDS.iter().any(|cmd| cmd.split_whitespace().next() == Some(word));
        if known {
            match line.split_once(word) {
                Some((lead, rest)) => Owned(format!("{}{}{}", lead, word.bright_cyan(), rest)),
                None => Borrowed(line),
            }
        } else {
            Borrowed(line)
        }
    }

    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Owned(hint.bright_black().to_string())
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for ReplHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        // Only hint at the end of the line
        if line.is_empty() || pos < line.len() {
            return None;
        }

        self.candidates(line)
            .into_iter()
            .find(|cmd| cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for ReplHelper {}
