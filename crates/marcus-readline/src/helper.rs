//! Rustyline helper: slash-command completion, hints and highlighting.

use std::borrow::Cow::{self, Borrowed, Owned};

use colored::Colorize;
use marcus_core::i18n::Language;
use rustyline::completion::{Completer, Pair};
use rustyline::highlight::Highlighter;
use rustyline::hint::Hinter;
use rustyline::validate::Validator;
use rustyline::{Context, Helper};

use crate::commands::COMMANDS;

const LANG_PREFIX: &str = "/lang ";

#[derive(Clone)]
pub struct CliHelper {
    commands: Vec<String>,
    language_codes: Vec<String>,
}

impl CliHelper {
    pub fn new() -> Self {
        Self {
            commands: COMMANDS.iter().map(|cmd| cmd.to_string()).collect(),
            language_codes: Language::all().map(|lang| lang.code().to_string()).collect(),
        }
    }

    fn candidates(&self, line: &str) -> (usize, Vec<&str>) {
        if let Some(partial) = line.strip_prefix(LANG_PREFIX) {
            let partial = partial.to_ascii_uppercase();
            let codes = self
                .language_codes
                .iter()
                .filter(|code| code.starts_with(&partial))
                .map(String::as_str)
                .collect();
            return (LANG_PREFIX.len(), codes);
        }

        if line.starts_with('/') && !line.contains(' ') {
            let commands = self
                .commands
                .iter()
                .filter(|cmd| cmd.starts_with(line))
                .map(String::as_str)
                .collect();
            return (0, commands);
        }

        (0, Vec::new())
    }
}

impl Default for CliHelper {
    fn default() -> Self {
        Self::new()
    }
}

impl Helper for CliHelper {}

impl Completer for CliHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &Context<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, candidates) = self.candidates(&line[..pos]);
        let pairs = candidates
            .into_iter()
            .map(|candidate| Pair {
                display: candidate.to_string(),
                replacement: candidate.to_string(),
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Highlighter for CliHelper {
    fn highlight<'l>(&self, line: &'l str, _pos: usize) -> Cow<'l, str> {
        if line.starts_with('/') {
            Owned(line.bright_cyan().to_string())
        } else {
            Borrowed(line)
        }
    }

    fn highlight_char(&self, _line: &str, _pos: usize, _forced: bool) -> bool {
        true
    }
}

impl Hinter for CliHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &Context<'_>) -> Option<String> {
        let line = &line[..pos];
        if !line.starts_with('/') || line.contains(' ') {
            return None;
        }

        self.commands
            .iter()
            .find(|cmd| cmd.starts_with(line) && cmd.len() > line.len())
            .map(|cmd| cmd[line.len()..].to_string())
    }
}

impl Validator for CliHelper {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_candidates() {
        let helper = CliHelper::new();
        let (start, candidates) = helper.candidates("/d");
        assert_eq!(start, 0);
        assert_eq!(candidates, vec!["/drop-image", "/debate", "/done"]);
    }

    #[test]
    fn test_language_code_candidates() {
        let helper = CliHelper::new();
        let (start, candidates) = helper.candidates("/lang e");
        assert_eq!(start, LANG_PREFIX.len());
        assert_eq!(candidates, vec!["EN", "ES"]);
    }

    #[test]
    fn test_plain_text_has_no_candidates() {
        let helper = CliHelper::new();
        assert!(helper.candidates("hello").1.is_empty());
        assert!(helper.candidates("/image some").1.is_empty());
    }
}
