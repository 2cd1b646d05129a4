//! Shell context, dispatch, and CLI error types.

use std::io;

use dialoguer::theme::ColorfulTheme;
use strsim::levenshtein;
use thiserror::Error;

use crate::{
    auth::{AuthError, CredentialVault},
    config::{Config, ConfigManager},
    domain::ValidationError,
    errors::StoreError,
    storage::JsonStore,
    store::Depot,
};

use super::commands;
use super::io as cli_io;
use super::output::{self, OutputPreferences};
use super::registry::{CommandEntry, CommandRegistry};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CliMode {
    Interactive,
    Script,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LoopControl {
    Continue,
    Exit,
}

pub type CommandResult = Result<(), CommandError>;

/// Errors surfaced to the user by a single command. The loop continues on
/// all of them except `ExitRequested`.
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("{0}")]
    InvalidArguments(String),
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Auth(#[from] AuthError),
    #[error(transparent)]
    Dialoguer(#[from] dialoguer::Error),
    #[error("exit requested")]
    ExitRequested,
}

/// Fatal errors that abort the shell itself.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Store(#[from] StoreError),
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Readline(#[from] rustyline::error::ReadlineError),
}

pub struct ShellContext {
    pub mode: CliMode,
    pub registry: CommandRegistry,
    pub depot: Depot,
    pub vault: CredentialVault,
    pub store: JsonStore,
    pub config_manager: ConfigManager,
    pub config: Config,
    pub theme: ColorfulTheme,
    pub session_user: Option<String>,
    pub last_command: Option<String>,
    pub running: bool,
}

impl ShellContext {
    pub fn new(mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let store = JsonStore::new_default()?;
        let depot = store.load_depot()?;
        let vault = store.load_vault()?;
        let config_manager = ConfigManager::new(store.base());
        let config = config_manager.load()?;
        output::set_preferences(OutputPreferences {
            quiet: config.quiet,
        });
        tracing::info!(
            base = %store.base().display(),
            records = depot.total_records(),
            users = vault.len(),
            "depot loaded"
        );

        Ok(ShellContext {
            mode,
            registry,
            depot,
            vault,
            store,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            session_user: None,
            last_command: None,
            running: true,
        })
    }

    #[cfg(test)]
    pub(crate) fn with_store(store: JsonStore, mode: CliMode) -> Result<Self, CliError> {
        let mut registry = CommandRegistry::new();
        commands::register_all(&mut registry);

        let depot = store.load_depot()?;
        let vault = store.load_vault()?;
        let config_manager = ConfigManager::new(store.base());
        let config = config_manager.load()?;

        Ok(ShellContext {
            mode,
            registry,
            depot,
            vault,
            store,
            config_manager,
            config,
            theme: ColorfulTheme::default(),
            session_user: None,
            last_command: None,
            running: true,
        })
    }

    pub(crate) fn mode(&self) -> CliMode {
        self.mode
    }

    pub fn prompt(&self) -> String {
        match &self.session_user {
            Some(user) => format!("depot({user})> "),
            None => String::from("depot> "),
        }
    }

    pub fn command_names(&self) -> Vec<&'static str> {
        self.registry.names().collect()
    }

    pub fn command(&self, name: &str) -> Option<&CommandEntry> {
        self.registry.get(name)
    }

    pub(crate) fn dispatch(
        &mut self,
        command: &str,
        raw: &str,
        args: &[&str],
    ) -> Result<LoopControl, CommandError> {
        if let Some(handler) = self.registry.handler(command) {
            let outcome = handler(self, args);
            self.last_command = Some(command.to_string());
            match outcome {
                Ok(()) => Ok(LoopControl::Continue),
                Err(CommandError::ExitRequested) => Ok(LoopControl::Exit),
                Err(err) => Err(err),
            }
        } else {
            self.suggest_command(raw);
            Ok(LoopControl::Continue)
        }
    }

    #[cfg(test)]
    pub(crate) fn process_line(&mut self, line: &str) -> Result<LoopControl, CommandError> {
        let tokens = match crate::cli::shell::parse_command_line(line) {
            Ok(tokens) => tokens,
            Err(err) => {
                self.print_warning(&err.to_string());
                return Ok(LoopControl::Continue);
            }
        };

        if tokens.is_empty() {
            return Ok(LoopControl::Continue);
        }

        let command = tokens[0].to_lowercase();
        let args: Vec<&str> = tokens.iter().skip(1).map(String::as_str).collect();
        self.dispatch(&command, &tokens[0], &args)
    }

    pub(crate) fn suggest_command(&self, input: &str) {
        cli_io::print_warning(format!(
            "Unknown command `{}`. Type `help` to see available commands.",
            input
        ));

        let mut suggestions: Vec<_> = self
            .registry
            .names()
            .map(|key| (levenshtein(key, input), key))
            .collect();
        suggestions.sort_by_key(|(distance, _)| *distance);

        if let Some((distance, best)) = suggestions.first() {
            if *distance <= 3 {
                cli_io::print_info(format!("Suggestion: `{}`?", best));
            }
        }
    }

    pub(crate) fn confirm_exit(&self) -> Result<bool, CliError> {
        if self.mode == CliMode::Script {
            return Ok(true);
        }
        match cli_io::confirm_action(&self.theme, "Exit shell?", true) {
            Ok(choice) => Ok(choice),
            Err(_) => Ok(true),
        }
    }

    pub(crate) fn report_error(&self, err: CommandError) -> Result<(), CliError> {
        match err {
            CommandError::ExitRequested => Ok(()),
            CommandError::InvalidArguments(message) => {
                self.print_error(&message);
                self.print_hint("Use `help <command>` for usage details.");
                Ok(())
            }
            other => {
                self.print_error(&other.to_string());
                Ok(())
            }
        }
    }

    /// Writes depot, vault, and config back to disk.
    pub fn persist_all(&self) -> Result<(), StoreError> {
        self.store.save_depot(&self.depot)?;
        self.store.save_vault(&self.vault)?;
        self.config_manager.save(&self.config)
    }

    pub(crate) fn persist_config(&self) -> Result<(), CommandError> {
        self.config_manager.save(&self.config).map_err(CommandError::from)
    }

    pub(crate) fn print_error(&self, message: &str) {
        cli_io::print_error(message);
    }

    pub(crate) fn print_warning(&self, message: &str) {
        cli_io::print_warning(message);
    }

    pub(crate) fn print_hint(&self, message: &str) {
        cli_io::print_hint(message);
    }
}
