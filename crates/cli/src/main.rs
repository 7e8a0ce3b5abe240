//! chaincode: run the simple chaincode against a local ledger.
//!
//! Three modes:
//! - **Shell mode**: `chaincode [flags] COMMAND`: single call, exit
//! - **REPL mode**: `chaincode [flags]`: interactive prompt (if stdin is TTY)
//! - **Pipe mode**: `echo "invoke write k v" | chaincode`: line-by-line from stdin

mod commands;
mod config;
mod format;
mod parse;
mod repl;
mod state;

use std::io::IsTerminal;
use std::process;

use commands::build_cli;
use config::{init_logging, Config};
use format::{format_error, format_output, OutputMode};
use parse::{matches_to_action, CliAction};
use state::SessionState;

fn main() {
    let matches = build_cli().get_matches();
    let config = Config::from_matches(&matches);
    if let Err(e) = init_logging(config.log_filter.as_deref()) {
        eprintln!("(warning) logging disabled: {}", e);
    }

    let mut state = match SessionState::open(&config.ledger) {
        Ok(state) => state,
        Err(e) => {
            eprintln!("{}", format_error(&e, config.output));
            process::exit(1);
        }
    };

    if matches.subcommand().is_some() {
        let exit_code = run_shell_mode(&matches, &mut state, config.output);
        process::exit(exit_code);
    } else if std::io::stdin().is_terminal() {
        repl::run_repl(&mut state, config.output);
    } else {
        let stdin = std::io::stdin();
        let exit_code = repl::run_pipe(&mut state, stdin.lock(), config.output);
        process::exit(exit_code);
    }
}

fn run_shell_mode(matches: &clap::ArgMatches, state: &mut SessionState, mode: OutputMode) -> i32 {
    match matches_to_action(matches) {
        Ok(CliAction::Execute(entry_point, invocation)) => {
            match state.execute(entry_point, &invocation) {
                Ok(payload) => {
                    let formatted = format_output(payload.as_deref(), mode);
                    if !formatted.is_empty() {
                        println!("{}", formatted);
                    }
                    0
                }
                Err(e) => {
                    eprintln!("{}", format_error(&e, mode));
                    1
                }
            }
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            1
        }
    }
}
