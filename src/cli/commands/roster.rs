use crate::cli::commands::{parse_amount, parse_u32};
use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::output::section as output_section;
use crate::cli::registry::CommandEntry;
use crate::domain::{activity, describe, Person, Role};

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "add-person",
            "Add a roster member (student, teacher, or head)",
            "add-person student <name> <age> <group> <gpa> | teacher <name> <age> <subject> <years> | head <name> <age> <subject> <years> <department>",
            cmd_add_person,
        ),
        CommandEntry::new(
            "show-roster",
            "Show all roster members",
            "show-roster",
            cmd_show_roster,
        ),
    ]
}

fn cmd_add_person(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let Some((kind, rest)) = args.split_first() else {
        return Err(CommandError::InvalidArguments(
            "usage: add-person <student|teacher|head> <name> <age> ...".into(),
        ));
    };

    let (name, age, role) = match (kind.to_lowercase().as_str(), rest) {
        ("student", [name, age, group, gpa]) => (
            *name,
            parse_u32(age, "age")?,
            Role::Student {
                group: (*group).to_string(),
                gpa: parse_amount(gpa, "gpa")?,
            },
        ),
        ("teacher", [name, age, subject, years]) => (
            *name,
            parse_u32(age, "age")?,
            Role::Teacher {
                subject: (*subject).to_string(),
                years_experience: parse_u32(years, "years of experience")?,
            },
        ),
        ("head" | "department-head", [name, age, subject, years, department]) => (
            *name,
            parse_u32(age, "age")?,
            Role::DepartmentHead {
                subject: (*subject).to_string(),
                years_experience: parse_u32(years, "years of experience")?,
                department: (*department).to_string(),
            },
        ),
        _ => {
            return Err(CommandError::InvalidArguments(
                "expected: student <name> <age> <group> <gpa>, teacher <name> <age> <subject> <years>, or head <name> <age> <subject> <years> <department>".into(),
            ))
        }
    };

    if name.trim().is_empty() {
        return Err(CommandError::InvalidArguments(
            "person name must not be empty".into(),
        ));
    }

    let id = context.depot.people.add(Person::new(name.trim(), age, role));
    io::print_success(format!("Person {id} added to the roster."));
    Ok(())
}

fn cmd_show_roster(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    output_section("Roster");
    if context.depot.people.is_empty() {
        io::print_info("  (none)");
        return Ok(());
    }
    for person in context.depot.people.iter() {
        for line in describe(person) {
            io::print_info(format!("  {line}"));
        }
        io::print_info(format!("  {}", activity(person)));
    }
    Ok(())
}
