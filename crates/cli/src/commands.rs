//! clap command tree.

use clap::{Arg, ArgAction, Command};
use simple_chaincode::EntryPoint;

use crate::config::{DEFAULT_LEDGER_PATH, LEDGER_ENV};

/// Top-level CLI: global flags plus the call subcommands.
pub fn build_cli() -> Command {
    with_calls(
        Command::new("chaincode")
            .about("Run the simple chaincode against a local ledger")
            .version(env!("CARGO_PKG_VERSION"))
            .arg(
                Arg::new("ledger")
                    .long("ledger")
                    .value_name("PATH")
                    .env(LEDGER_ENV)
                    .help(format!(
                        "Ledger snapshot file [default: {}]",
                        DEFAULT_LEDGER_PATH
                    )),
            )
            .arg(
                Arg::new("memory")
                    .long("memory")
                    .action(ArgAction::SetTrue)
                    .help("Use an in-memory ledger (takes precedence over --ledger)"),
            )
            .arg(
                Arg::new("json")
                    .long("json")
                    .action(ArgAction::SetTrue)
                    .conflicts_with("raw")
                    .help("JSON output"),
            )
            .arg(
                Arg::new("raw")
                    .long("raw")
                    .action(ArgAction::SetTrue)
                    .help("Raw value output, no decoration"),
            )
            .arg(
                Arg::new("log-level")
                    .long("log-level")
                    .value_name("FILTER")
                    .help("tracing filter, e.g. debug or chaincode_executor=info [default: RUST_LOG, else warn]"),
            ),
    )
}

/// Command tree for one REPL / pipe line (no binary name, no global flags).
pub fn build_line_cli() -> Command {
    with_calls(
        Command::new("chaincode")
            .no_binary_name(true)
            .disable_version_flag(true),
    )
}

fn with_calls(cmd: Command) -> Command {
    cmd.subcommand(
        Command::new(EntryPoint::Init.as_str())
            .about("Initialize the contract (stores ARG under hello_world)")
            .arg(variadic_args()),
    )
    .subcommand(
        Command::new(EntryPoint::Invoke.as_str())
            .about("Run a transaction: init | write")
            .arg(Arg::new("function").required(true).value_name("FUNCTION"))
            .arg(variadic_args()),
    )
    .subcommand(
        Command::new(EntryPoint::Query.as_str())
            .about("Run a read-only query: read")
            .arg(Arg::new("function").required(true).value_name("FUNCTION"))
            .arg(variadic_args()),
    )
}

// Arity is the contract's to check, so accept any number here.
fn variadic_args() -> Arg {
    Arg::new("args")
        .value_name("ARG")
        .num_args(0..)
        .allow_hyphen_values(true)
        .trailing_var_arg(true)
}
