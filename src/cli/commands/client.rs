use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::domain::Client;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add-client",
            "Register a new client",
            "add-client <name> <phone>",
            cmd_add_client,
        ),
        CommandEntry::new(
            "show-clients",
            "Show all registered clients",
            "show-clients",
            cmd_show_clients,
        ),
    ]
}

fn cmd_add_client(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (name, phone) = match args {
        [] if context.mode() == CliMode::Interactive => {
            let name = io::prompt_text(&context.theme, "Client name")?;
            let phone = io::prompt_text(&context.theme, "Phone (digits only)")?;
            (name, phone)
        }
        [name, phone] => ((*name).to_string(), (*phone).to_string()),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: add-client <name> <phone> (quote names with spaces)".into(),
            ))
        }
    };

    let client = Client::new(name.trim(), phone.trim())?;
    let id = context.depot.clients.add(client);
    io::print_success(format!("Client {id} added."));
    Ok(())
}

fn cmd_show_clients(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Clients");
    if context.depot.clients.is_empty() {
        io::print_info("  (none)");
        return Ok(());
    }
    for client in context.depot.clients.iter() {
        io::print_info(format!("  {client}"));
    }
    Ok(())
}
