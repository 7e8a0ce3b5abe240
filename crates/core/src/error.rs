//! Contract error types
//!
//! Every failure is returned synchronously to the host. Nothing is retried
//! here; the host decides how to surface a failed transaction.

use thiserror::Error;

use crate::store::StoreError;
use crate::types::EntryPoint;
use crate::wire::WireError;

/// All contract errors.
#[derive(Debug, Error)]
pub enum Error {
    /// Wrong number of arguments for the called function
    #[error("incorrect number of arguments for {function}: expecting {expected}, got {actual}")]
    ArgumentCount {
        /// Function that was called
        function: &'static str,
        /// Arguments it requires
        expected: usize,
        /// Arguments it received
        actual: usize,
    },

    /// Function name not recognized by invoke or query dispatch
    #[error("received unknown function {entry_point}: {name}")]
    UnknownFunction {
        /// Entry point the call came through
        entry_point: EntryPoint,
        /// The unrecognized name
        name: String,
    },

    /// The store could not return a value for a key
    #[error("failed to get state for {key}")]
    KeyLookup {
        /// Key that was read
        key: String,
        /// What the store reported
        #[source]
        source: StoreError,
    },

    /// Store failure passed through unchanged
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Result type for contract operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Check argument count, producing [`Error::ArgumentCount`] on mismatch
    pub fn check_arity(function: &'static str, expected: usize, args: &[String]) -> Result<()> {
        if args.len() != expected {
            return Err(Error::ArgumentCount {
                function,
                expected,
                actual: args.len(),
            });
        }
        Ok(())
    }

    /// Get the canonical error code
    pub fn error_code(&self) -> &'static str {
        match self {
            Error::ArgumentCount { .. } => "ArgumentCount",
            Error::UnknownFunction { .. } => "UnknownFunction",
            Error::KeyLookup { .. } => "KeyLookup",
            Error::Store(_) => "StoreError",
        }
    }

    /// Message as the host sees it
    ///
    /// Key lookups are reported as a small JSON object rather than the raw
    /// store error, e.g. `{"Error":"Failed to get state for color"}`.
    pub fn message(&self) -> String {
        match self {
            Error::KeyLookup { key, .. } => {
                serde_json::json!({ "Error": format!("Failed to get state for {}", key) })
                    .to_string()
            }
            other => other.to_string(),
        }
    }

    /// Convert to wire error format
    pub fn to_wire(&self) -> WireError {
        let details = match self {
            Error::ArgumentCount {
                function,
                expected,
                actual,
            } => Some(serde_json::json!({
                "function": function,
                "expected": expected,
                "actual": actual,
            })),
            Error::UnknownFunction { entry_point, name } => Some(serde_json::json!({
                "entry_point": entry_point,
                "name": name,
            })),
            Error::KeyLookup { key, .. } => Some(serde_json::json!({ "key": key })),
            Error::Store(_) => None,
        };
        let mut wire = WireError::new(self.error_code(), self.message());
        wire.details = details;
        wire
    }

    /// Check if this is a key lookup failure
    pub fn is_key_lookup(&self) -> bool {
        matches!(self, Error::KeyLookup { .. })
    }
}
