//! REPL and pipe modes.

use std::io::BufRead;

use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;
use simple_chaincode::dispatch;

use crate::commands::build_line_cli;
use crate::format::{format_error, format_output, OutputMode};
use crate::parse::{check_meta_command, matches_to_action, CliAction, MetaCommand};
use crate::state::SessionState;

const PROMPT: &str = "chaincode> ";
const HISTORY_FILE: &str = ".chaincode_history";

/// Outcome of one input line
#[derive(Debug, PartialEq, Eq)]
pub enum LineResult {
    /// Line handled; `false` if it failed
    Continue(bool),
    /// `quit` / `exit`
    Quit,
}

/// Interactive prompt with history.
pub fn run_repl(state: &mut SessionState, mode: OutputMode) {
    let mut editor = match DefaultEditor::new() {
        Ok(editor) => editor,
        Err(e) => {
            eprintln!("(error) Failed to start line editor: {}", e);
            return;
        }
    };
    let _ = editor.load_history(HISTORY_FILE);

    loop {
        match editor.readline(PROMPT) {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let _ = editor.add_history_entry(line.as_str());
                if execute_line(state, &line, mode) == LineResult::Quit {
                    break;
                }
            }
            Err(ReadlineError::Interrupted) | Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("(error) {}", e);
                break;
            }
        }
    }

    let _ = editor.save_history(HISTORY_FILE);
}

/// Read commands one per line. Returns the process exit code: 1 if any line
/// failed, else 0.
pub fn run_pipe<R: BufRead>(state: &mut SessionState, input: R, mode: OutputMode) -> i32 {
    let mut failed = false;
    for line in input.lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("(error) {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        match execute_line(state, trimmed, mode) {
            LineResult::Continue(ok) => failed |= !ok,
            LineResult::Quit => break,
        }
    }
    i32::from(failed)
}

/// Parse and run one line, printing its result.
pub fn execute_line(state: &mut SessionState, line: &str, mode: OutputMode) -> LineResult {
    if let Some(meta) = check_meta_command(line) {
        return match meta {
            MetaCommand::Quit => LineResult::Quit,
            MetaCommand::Help => {
                println!("{}", help_text());
                LineResult::Continue(true)
            }
        };
    }

    let tokens = match shlex::split(line) {
        Some(tokens) => tokens,
        None => {
            eprintln!("(error) Unbalanced quotes");
            return LineResult::Continue(false);
        }
    };

    let matches = match build_line_cli().try_get_matches_from(tokens) {
        Ok(matches) => matches,
        Err(e) => {
            eprintln!("{}", e);
            return LineResult::Continue(false);
        }
    };

    match matches_to_action(&matches) {
        Ok(CliAction::Execute(entry_point, invocation)) => {
            match state.execute(entry_point, &invocation) {
                Ok(payload) => {
                    let formatted = format_output(payload.as_deref(), mode);
                    if !formatted.is_empty() {
                        println!("{}", formatted);
                    }
                    LineResult::Continue(true)
                }
                Err(e) => {
                    eprintln!("{}", format_error(&e, mode));
                    LineResult::Continue(false)
                }
            }
        }
        Err(e) => {
            eprintln!("(error) {}", e);
            LineResult::Continue(false)
        }
    }
}

fn help_text() -> String {
    let invoke: Vec<_> = dispatch::invoke_names().collect();
    let query: Vec<_> = dispatch::query_names().collect();
    format!(
        "init ARG\ninvoke FUNCTION [ARG]...   ({})\nquery FUNCTION [ARG]...    ({})\nhelp | quit",
        invoke.join(" | "),
        query.join(" | ")
    )
}
