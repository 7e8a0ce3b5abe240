//! Request types
//!
//! The host calls a contract through one of three entry points, passing a
//! function name and an ordered list of string arguments. These types carry
//! that request through the executor; nothing here outlives a single call.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Lifecycle entry point a call arrived through
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryPoint {
    /// First deployment (and explicit re-initialization)
    Init,
    /// State-mutating call, recorded as a transaction
    Invoke,
    /// Read-only call, not recorded
    Query,
}

impl EntryPoint {
    /// Name used in logs and on the command line
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryPoint::Init => "init",
            EntryPoint::Invoke => "invoke",
            EntryPoint::Query => "query",
        }
    }

    /// Whether calls through this entry point may write to the ledger
    pub fn is_mutating(&self) -> bool {
        !matches!(self, EntryPoint::Query)
    }
}

impl fmt::Display for EntryPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let noun = match self {
            EntryPoint::Init => "initialization",
            EntryPoint::Invoke => "invocation",
            EntryPoint::Query => "query",
        };
        f.write_str(noun)
    }
}

/// A single call from the host: function name plus ordered arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Invocation {
    /// Function name, matched exactly (case-sensitive)
    pub function: String,
    /// Positional arguments
    pub args: Vec<String>,
}

impl Invocation {
    /// Build an invocation from anything string-like
    ///
    /// # Examples
    ///
    /// ```
    /// use chaincode_core::Invocation;
    ///
    /// let call = Invocation::new("write", ["color", "blue"]);
    /// assert_eq!(call.function, "write");
    /// assert_eq!(call.args, vec!["color".to_string(), "blue".to_string()]);
    /// ```
    pub fn new<I, S>(function: impl Into<String>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            function: function.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }
}
