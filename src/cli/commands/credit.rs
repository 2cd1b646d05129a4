use chrono::Local;

use crate::cli::commands::{parse_amount, parse_date};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::domain::Credit;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add-credit",
            "Issue a new credit",
            "add-credit <amount> <rate> <YYYY-MM-DD> [comment...]",
            cmd_add_credit,
        ),
        CommandEntry::new(
            "add-loan",
            "Alias for add-credit",
            "add-loan <amount> <rate> <YYYY-MM-DD> [comment...]",
            cmd_add_credit,
        ),
        CommandEntry::new(
            "show-loans",
            "Show all issued credits",
            "show-loans",
            cmd_show_loans,
        ),
    ]
}

fn cmd_add_credit(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [amount, rate, date, comment @ ..] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: add-credit <amount> <rate> <YYYY-MM-DD> [comment...]".into(),
        ));
    };

    let amount = parse_amount(amount, "amount")?;
    let rate = parse_amount(rate, "interest rate")?;
    let repayment_date = parse_date(date)?;
    let comments = comment.join(" ");
    let today = Local::now().date_naive();

    let credit = Credit::new(amount, rate, repayment_date, comments, today)?;
    let id = context.depot.credits.add(credit);
    io::print_success(format!("Credit {id} issued."));
    Ok(())
}

fn cmd_show_loans(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Credits");
    if context.depot.credits.is_empty() {
        io::print_info("  (none)");
        return Ok(());
    }
    for credit in context.depot.credits.iter() {
        io::print_info(format!("  {credit}"));
    }
    Ok(())
}
