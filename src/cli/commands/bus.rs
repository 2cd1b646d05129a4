use crate::cli::commands::{parse_id, parse_u32};
use crate::cli::core::{CliMode, CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::domain::{Bus, BusStatus};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add",
            "Add a new bus to the park (route defaults to 0)",
            "add <driver> [route]",
            cmd_add,
        ),
        CommandEntry::new(
            "remove-bus",
            "Remove a bus from the fleet",
            "remove-bus <id>",
            cmd_remove,
        ),
        CommandEntry::new(
            "move-to-route",
            "Move a bus from the park to the route",
            "move-to-route <id>",
            cmd_move_to_route,
        ),
        CommandEntry::new(
            "move-to-park",
            "Move a bus from the route to the park",
            "move-to-park <id>",
            cmd_move_to_park,
        ),
        CommandEntry::new(
            "show-park",
            "Show all buses currently in the park",
            "show-park",
            cmd_show_park,
        ),
        CommandEntry::new(
            "show-route",
            "Show all buses currently on the route",
            "show-route",
            cmd_show_route,
        ),
    ]
}

fn cmd_add(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let (driver, route) = match args {
        [] if context.mode() == CliMode::Interactive => {
            let driver = io::prompt_text(&context.theme, "Driver name")?;
            let raw = io::prompt_text(&context.theme, "Route number (blank for 0)")?;
            let route = if raw.trim().is_empty() {
                0
            } else {
                parse_u32(raw.trim(), "route number")?
            };
            (driver, route)
        }
        [driver] => ((*driver).to_string(), 0),
        [driver, route] => ((*driver).to_string(), parse_u32(route, "route number")?),
        _ => {
            return Err(CommandError::InvalidArguments(
                "usage: add <driver> [route]".into(),
            ))
        }
    };

    if driver.trim().is_empty() {
        return Err(CommandError::InvalidArguments(
            "driver name must not be empty".into(),
        ));
    }

    let id = context.depot.buses.add(Bus::new(driver.trim(), route));
    io::print_success(format!("Bus {id} added to the park."));
    Ok(())
}

fn cmd_remove(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: remove-bus <id>".into(),
        ));
    };
    let id = parse_id(raw)?;
    match context.depot.buses.remove(id) {
        Some(bus) => {
            io::print_success(format!("Bus {id} (driver {}) removed.", bus.driver));
        }
        None => io::print_warning(format!("Bus {id} not found.")),
    }
    Ok(())
}

fn cmd_move_to_route(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: move-to-route <id>".into(),
        ));
    };
    let id = parse_id(raw)?;
    if context
        .depot
        .buses
        .transition(id, BusStatus::InPark, BusStatus::OnRoute)
    {
        io::print_success(format!("Bus {id} moved to route."));
    } else {
        io::print_warning(format!(
            "Bus {id} not found in the park (missing or already on route)."
        ));
    }
    Ok(())
}

fn cmd_move_to_park(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [raw] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: move-to-park <id>".into(),
        ));
    };
    let id = parse_id(raw)?;
    if context
        .depot
        .buses
        .transition(id, BusStatus::OnRoute, BusStatus::InPark)
    {
        io::print_success(format!("Bus {id} moved to park."));
    } else {
        io::print_warning(format!(
            "Bus {id} not found on the route (missing or already in park)."
        ));
    }
    Ok(())
}

fn cmd_show_park(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_buses(context, BusStatus::InPark, "Buses in the park")
}

fn cmd_show_route(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    show_buses(context, BusStatus::OnRoute, "Buses on the route")
}

fn show_buses(context: &ShellContext, status: BusStatus, title: &str) -> CommandResult {
    output_section(title);
    let mut shown = 0usize;
    for bus in context.depot.buses.filtered(|bus| bus.status == status) {
        io::print_info(format!("  {bus}"));
        shown += 1;
    }
    if shown == 0 {
        io::print_info("  (none)");
    }
    Ok(())
}
