//! ArgMatches → CliAction conversion.

use clap::ArgMatches;
use simple_chaincode::{EntryPoint, Invocation};

/// The result of parsing user input.
#[derive(Debug, PartialEq, Eq)]
pub enum CliAction {
    /// Call the contract through an entry point.
    Execute(EntryPoint, Invocation),
}

/// REPL meta-commands, checked before clap sees the line.
#[derive(Debug, PartialEq, Eq)]
pub enum MetaCommand {
    Help,
    Quit,
}

/// Check for REPL meta-commands before delegating to clap.
pub fn check_meta_command(line: &str) -> Option<MetaCommand> {
    match line.trim() {
        "quit" | "exit" => Some(MetaCommand::Quit),
        "help" => Some(MetaCommand::Help),
        _ => None,
    }
}

/// Convert clap ArgMatches into a CliAction.
pub fn matches_to_action(matches: &ArgMatches) -> Result<CliAction, String> {
    let (sub_name, sub_matches) = matches
        .subcommand()
        .ok_or_else(|| "No command provided".to_string())?;

    let entry_point = [EntryPoint::Init, EntryPoint::Invoke, EntryPoint::Query]
        .into_iter()
        .find(|entry_point| entry_point.as_str() == sub_name)
        .ok_or_else(|| format!("Unknown command: {}", sub_name))?;

    // Init takes no function name; label the call after the entry point
    let name = match entry_point {
        EntryPoint::Init => entry_point.as_str().to_string(),
        EntryPoint::Invoke | EntryPoint::Query => function(sub_matches)?,
    };
    Ok(CliAction::Execute(
        entry_point,
        Invocation::new(name, variadic(sub_matches)),
    ))
}

fn function(matches: &ArgMatches) -> Result<String, String> {
    matches
        .get_one::<String>("function")
        .cloned()
        .ok_or_else(|| "Missing FUNCTION".to_string())
}

fn variadic(matches: &ArgMatches) -> Vec<String> {
    matches
        .get_many::<String>("args")
        .map(|values| values.cloned().collect())
        .unwrap_or_default()
}
