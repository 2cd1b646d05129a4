use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::help;
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::domain::BusStatus;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "status",
            "Show record counts and the data directory",
            "status",
            cmd_status,
        ),
        CommandEntry::new("version", "Show build metadata", "version", cmd_version),
        CommandEntry::new("help", "Show available commands", "help [command]", cmd_help),
        CommandEntry::new("exit", "Save data and exit the shell", "exit", cmd_exit),
    ]
}

fn cmd_status(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    let in_park = context
        .depot
        .buses
        .filtered(|bus| bus.status == BusStatus::InPark)
        .count();
    let on_route = context.depot.buses.len() - in_park;

    output_section("Depot status");
    io::print_info(format!(
        "  Buses        : {} ({} in park, {} on route)",
        context.depot.buses.len(),
        in_park,
        on_route
    ));
    io::print_info(format!("  Clients      : {}", context.depot.clients.len()));
    io::print_info(format!("  Credits      : {}", context.depot.credits.len()));
    io::print_info(format!("  Roster       : {}", context.depot.people.len()));
    io::print_info(format!("  Users        : {}", context.vault.len()));
    io::print_info(format!(
        "  Data dir     : {}",
        context.store.base().display()
    ));
    io::print_info(format!(
        "  Session user : {}",
        context.session_user.as_deref().unwrap_or("(none)")
    ));
    io::print_info(format!(
        "  Last command : {}",
        context.last_command.as_deref().unwrap_or("(none)")
    ));
    Ok(())
}

fn cmd_version(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section(format!("Depot Core {}", env!("CARGO_PKG_VERSION")));
    Ok(())
}

fn cmd_help(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    if let Some(command) = args.first().map(|name| name.to_lowercase()) {
        if let Some(command) = context.command(&command) {
            help::print_command(command);
        } else {
            context.suggest_command(args[0]);
        }
        return Ok(());
    }

    help::print_overview(&context.registry);
    Ok(())
}

fn cmd_exit(_context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    io::print_info("Exiting program...");
    Err(CommandError::ExitRequested)
}
