//! CLI configuration.
//!
//! Resolved once at startup from flags, then environment, then defaults.

use std::path::PathBuf;

use clap::ArgMatches;
use tracing_subscriber::util::{SubscriberInitExt, TryInitError};
use tracing_subscriber::EnvFilter;

use crate::format::OutputMode;

/// Ledger file used when neither `--ledger` nor the env var is set
pub const DEFAULT_LEDGER_PATH: &str = ".ledger.json";

/// Environment variable naming the ledger file
pub const LEDGER_ENV: &str = "CHAINCODE_LEDGER";

/// Filter used when neither `--log-level` nor `RUST_LOG` is set
pub const DEFAULT_LOG_FILTER: &str = "warn";

/// Where session state lives
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LedgerLocation {
    /// Gone when the process exits
    Memory,
    /// JSON snapshot file, committed after every successful init/invoke
    File(PathBuf),
}

/// Resolved CLI settings
#[derive(Debug, Clone)]
pub struct Config {
    pub ledger: LedgerLocation,
    pub output: OutputMode,
    pub log_filter: Option<String>,
}

impl Config {
    pub fn from_matches(matches: &ArgMatches) -> Self {
        let ledger = if matches.get_flag("memory") {
            LedgerLocation::Memory
        } else {
            let path = matches
                .get_one::<String>("ledger")
                .map(|s| s.as_str())
                .unwrap_or(DEFAULT_LEDGER_PATH);
            LedgerLocation::File(PathBuf::from(path))
        };

        let output = if matches.get_flag("json") {
            OutputMode::Json
        } else if matches.get_flag("raw") {
            OutputMode::Raw
        } else {
            OutputMode::Human
        };

        Self {
            ledger,
            output,
            log_filter: matches.get_one::<String>("log-level").cloned(),
        }
    }
}

/// Filter from `--log-level`, else `RUST_LOG`, else [`DEFAULT_LOG_FILTER`].
///
/// An unparsable filter also falls back to the default.
pub fn log_filter(filter: Option<&str>) -> EnvFilter {
    match filter {
        Some(directives) => EnvFilter::try_new(directives).ok(),
        None => EnvFilter::try_from_default_env().ok(),
    }
    .unwrap_or_else(|| EnvFilter::new(DEFAULT_LOG_FILTER))
}

/// Install the stderr tracing subscriber.
///
/// Fails only if a global subscriber is already installed.
pub fn init_logging(filter: Option<&str>) -> Result<(), TryInitError> {
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(filter))
        .with_writer(std::io::stderr)
        .finish()
        .try_init()
}
