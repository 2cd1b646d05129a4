pub mod auth;
pub mod bus;
pub mod client;
pub mod credit;
pub mod roster;
pub mod system;

use chrono::NaiveDate;

use crate::cli::core::CommandError;
use crate::cli::registry::{CommandEntry, CommandRegistry};

pub(crate) fn register_all(registry: &mut CommandRegistry) {
    for entry in all_definitions() {
        registry.register(entry);
    }
}

pub(crate) fn all_definitions() -> Vec<CommandEntry> {
    let mut commands = Vec::new();
    commands.extend(bus::definitions());
    commands.extend(client::definitions());
    commands.extend(credit::definitions());
    commands.extend(roster::definitions());
    commands.extend(auth::definitions());
    commands.extend(system::definitions());
    commands
}

pub(crate) fn parse_id(raw: &str) -> Result<u32, CommandError> {
    raw.parse().map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a valid numeric id"))
    })
}

pub(crate) fn parse_u32(raw: &str, what: &str) -> Result<u32, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidArguments(format!("{what} must be a whole number, got `{raw}`")))
}

pub(crate) fn parse_amount(raw: &str, what: &str) -> Result<f64, CommandError> {
    raw.parse()
        .map_err(|_| CommandError::InvalidArguments(format!("{what} must be numeric, got `{raw}`")))
}

pub(crate) fn parse_date(raw: &str) -> Result<NaiveDate, CommandError> {
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| {
        CommandError::InvalidArguments(format!("`{raw}` is not a date in YYYY-MM-DD form"))
    })
}
