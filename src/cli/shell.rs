use std::{
    borrow::Cow,
    fmt,
    io::{self, BufRead},
};

use colored::Colorize;
use rustyline::{
    completion::{Completer, Pair},
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::{ValidationContext, ValidationResult, Validator},
    Cmd, Context as ReadlineContext, Editor, Helper, KeyEvent,
};
use shell_words::split;

use crate::cli::core::{CliError, CliMode, CommandError, LoopControl, ShellContext};
use crate::cli::output;

/// Environment toggle that switches the shell to plain line-buffered stdin.
pub const SCRIPT_MODE_ENV: &str = "DEPOT_CLI_SCRIPT";

pub fn run_cli() -> Result<(), CliError> {
    let mode = if std::env::var_os(SCRIPT_MODE_ENV).is_some() {
        CliMode::Script
    } else {
        CliMode::Interactive
    };

    let mut context = ShellContext::new(mode)?;

    if mode == CliMode::Interactive {
        output::section("Depot");
        if let Some(user) = context.config.last_user.clone() {
            output::info(format!("Last session user: {user}. Use `login` to authenticate."));
        }
        output::hint("Type `help` to see available commands.");
    }

    let result = match mode {
        CliMode::Interactive => run_interactive(&mut context),
        CliMode::Script => run_script(&mut context),
    };

    context.persist_all()?;
    output::success("Data saved.");
    result
}

fn run_interactive(context: &mut ShellContext) -> Result<(), CliError> {
    let mut editor = Editor::<CommandHelper, DefaultHistory>::new()?;
    let helper = CommandHelper::new(context.command_names());
    editor.set_helper(Some(helper));
    editor.bind_sequence(KeyEvent::from('?'), Cmd::Complete);

    loop {
        if !context.running {
            break;
        }
        let prompt = context.prompt();
        let line = editor.readline(&prompt);

        match line {
            Ok(line) => {
                let trimmed = line.trim();
                if trimmed.is_empty() {
                    continue;
                }

                editor.add_history_entry(trimmed).ok();

                match handle_line(context, trimmed) {
                    Ok(LoopControl::Continue) => {}
                    Ok(LoopControl::Exit) => break,
                    Err(err) => context.report_error(err)?,
                }
            }
            Err(ReadlineError::Interrupted) => {
                if context.confirm_exit()? {
                    break;
                }
            }
            Err(ReadlineError::Eof) => {
                output::info("Exiting shell.");
                break;
            }
            Err(err) => return Err(err.into()),
        }
    }

    Ok(())
}

fn run_script(context: &mut ShellContext) -> Result<(), CliError> {
    let stdin = io::stdin();
    for line in stdin.lock().lines() {
        if !context.running {
            break;
        }
        let line = line?;
        match handle_line(context, &line) {
            Ok(LoopControl::Continue) => {}
            Ok(LoopControl::Exit) => break,
            Err(err) => context.report_error(err)?,
        }
    }
    Ok(())
}

fn handle_line(context: &mut ShellContext, line: &str) -> Result<LoopControl, CommandError> {
    let tokens = match parse_command_line(line) {
        Ok(tokens) => tokens,
        Err(err) => {
            context.print_warning(&err.message);
            return Ok(LoopControl::Continue);
        }
    };

    if tokens.is_empty() {
        return Ok(LoopControl::Continue);
    }

    let raw = &tokens[0];
    let command = raw.to_lowercase();
    let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();

    match context.dispatch(&command, raw, &args) {
        Ok(LoopControl::Exit) => {
            context.running = false;
            Ok(LoopControl::Exit)
        }
        other => other,
    }
}

/// Roster subcommand keywords offered after `add-person`.
const ROLE_KEYWORDS: [&str; 3] = ["student", "teacher", "head"];

struct CommandHelper {
    commands: Vec<String>,
}

impl CommandHelper {
    fn new(names: Vec<&'static str>) -> Self {
        let mut commands: Vec<String> = names
            .into_iter()
            .map(|name| name.to_ascii_lowercase())
            .collect();
        commands.sort();
        commands.dedup();
        Self { commands }
    }

    /// Candidates for the word ending at `pos`: command names for the first
    /// word, role keywords after `add-person`, nothing for free-form args.
    fn candidates(&self, line: &str, pos: usize) -> (usize, Vec<String>) {
        let before = &line[..pos];
        let start = before
            .rfind(char::is_whitespace)
            .map(|idx| idx + 1)
            .unwrap_or(0);
        let word = before[start..].to_ascii_lowercase();
        let preceding = before[..start].trim();

        let matches = if preceding.is_empty() {
            prefix_matches(self.commands.iter().map(String::as_str), &word)
        } else if preceding.eq_ignore_ascii_case("add-person") {
            prefix_matches(ROLE_KEYWORDS.iter().copied(), &word)
        } else {
            Vec::new()
        };
        (start, matches)
    }

    /// Inline hint: the unmatched tail of the single command the typed
    /// prefix could still become. Ambiguous prefixes hint nothing.
    fn unique_completion(&self, line: &str) -> Option<String> {
        if line.is_empty() || line.contains(char::is_whitespace) {
            return None;
        }
        let needle = line.to_ascii_lowercase();
        let mut matching = self.commands.iter().filter(|name| name.starts_with(&needle));
        let only = matching.next()?;
        if matching.next().is_some() || only.len() == needle.len() {
            return None;
        }
        Some(only[needle.len()..].to_string())
    }
}

fn prefix_matches<'a>(names: impl Iterator<Item = &'a str>, prefix: &str) -> Vec<String> {
    names
        .filter(|name| name.starts_with(prefix))
        .map(str::to_string)
        .collect()
}

impl Helper for CommandHelper {}

impl Completer for CommandHelper {
    type Candidate = Pair;

    fn complete(
        &self,
        line: &str,
        pos: usize,
        _ctx: &ReadlineContext<'_>,
    ) -> rustyline::Result<(usize, Vec<Pair>)> {
        let (start, matches) = self.candidates(line, pos);
        let pairs = matches
            .into_iter()
            .map(|name| Pair {
                display: name.clone(),
                replacement: name,
            })
            .collect();
        Ok((start, pairs))
    }
}

impl Hinter for CommandHelper {
    type Hint = String;

    fn hint(&self, line: &str, pos: usize, _ctx: &ReadlineContext<'_>) -> Option<String> {
        if pos < line.len() {
            return None;
        }
        self.unique_completion(line)
    }
}

impl Highlighter for CommandHelper {
    fn highlight_hint<'h>(&self, hint: &'h str) -> Cow<'h, str> {
        Cow::Owned(hint.dimmed().to_string())
    }
}

impl Validator for CommandHelper {
    fn validate(&self, ctx: &mut ValidationContext) -> rustyline::Result<ValidationResult> {
        let _ = ctx;
        Ok(ValidationResult::Valid(None))
    }
}

pub(crate) fn parse_command_line(input: &str) -> Result<Vec<String>, ParseError> {
    split(input).map_err(|err| ParseError {
        message: err.to_string(),
    })
}

#[derive(Debug)]
pub(crate) struct ParseError {
    message: String,
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn helper() -> CommandHelper {
        CommandHelper::new(vec!["show-park", "show-route", "add", "add-person", "exit"])
    }

    #[test]
    fn first_word_completes_command_names() {
        let helper = helper();
        let (start, matches) = helper.candidates("show-", 5);
        assert_eq!(start, 0);
        assert_eq!(matches, ["show-park", "show-route"]);
    }

    #[test]
    fn role_keywords_complete_after_add_person() {
        let helper = helper();
        let (start, matches) = helper.candidates("add-person st", 13);
        assert_eq!(start, 11);
        assert_eq!(matches, ["student"]);
    }

    #[test]
    fn free_form_arguments_get_no_candidates() {
        let helper = helper();
        let (_, matches) = helper.candidates("add Smith ", 10);
        assert!(matches.is_empty());
    }

    #[test]
    fn hint_appears_only_for_a_unique_prefix() {
        let helper = helper();
        assert_eq!(helper.unique_completion("ex"), Some("it".to_string()));
        assert_eq!(helper.unique_completion("show-"), None);
        assert_eq!(helper.unique_completion("exit"), None);
        assert_eq!(helper.unique_completion(""), None);
    }
}
