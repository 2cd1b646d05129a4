use crate::cli::core::{CommandError, CommandResult, ShellContext};
use crate::cli::io;
use crate::cli::registry::CommandEntry;

pub(crate) fn definitions() -> Vec<CommandEntry> {
    vec![
        CommandEntry::new(
            "register",
            "Register a new user",
            "register <username> <password>",
            cmd_register,
        ),
        CommandEntry::new(
            "login",
            "Authenticate as a registered user",
            "login <username> <password>",
            cmd_login,
        ),
        CommandEntry::new("logout", "End the current session", "logout", cmd_logout),
        CommandEntry::new("whoami", "Show the current session user", "whoami", cmd_whoami),
    ]
}

fn cmd_register(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [username, password] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: register <username> <password>".into(),
        ));
    };
    context.vault.register(username, password)?;
    context.store.save_vault(&context.vault)?;
    io::print_success(format!("User `{username}` registered."));
    Ok(())
}

fn cmd_login(context: &mut ShellContext, args: &[&str]) -> CommandResult {
    let [username, password] = args else {
        return Err(CommandError::InvalidArguments(
            "usage: login <username> <password>".into(),
        ));
    };
    if context.vault.verify(username, password) {
        context.session_user = Some((*username).to_string());
        context.config.last_user = Some((*username).to_string());
        context.persist_config()?;
        io::print_success("Login successful.");
    } else {
        io::print_warning("Invalid username or password.");
    }
    Ok(())
}

fn cmd_logout(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match context.session_user.take() {
        Some(user) => io::print_info(format!("Logged out `{user}`.")),
        None => io::print_warning("No active session."),
    }
    Ok(())
}

fn cmd_whoami(context: &mut ShellContext, _args: &[&str]) -> CommandResult {
    match &context.session_user {
        Some(user) => io::print_info(format!("Logged in as `{user}`.")),
        None => io::print_info("Not logged in."),
    }
    Ok(())
}
