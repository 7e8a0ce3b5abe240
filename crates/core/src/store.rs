//! Ledger store interface
//!
//! The host owns all persistent state. A contract only sees it through these
//! two traits, passed in explicitly on every call:
//!
//! - [`LedgerReader`]: `get_state`, the only capability a query receives
//! - [`LedgerStore`]: adds `put_state` for init and invoke
//!
//! Splitting the traits keeps queries read-only at the type level.

use thiserror::Error;

/// Failures reported by a ledger store
#[derive(Debug, Error)]
pub enum StoreError {
    /// No value has ever been written under the key
    #[error("key not found: {0}")]
    NotFound(String),

    /// The store refuses the key
    #[error("invalid key '{key}': {reason}")]
    InvalidKey {
        /// The rejected key
        key: String,
        /// Why it was rejected
        reason: String,
    },

    /// I/O failure in a file-backed store
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Snapshot could not be encoded or decoded
    #[error("serialization error: {0}")]
    Serialization(String),

    /// Snapshot decoded but is not a ledger this build understands
    #[error("corrupt ledger: {0}")]
    Corrupt(String),
}

impl StoreError {
    /// Check if this is a missing-key error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StoreError::NotFound(_))
    }
}

/// Read access to the ledger
pub trait LedgerReader {
    /// Fetch the current value stored under `key`
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError>;
}

/// Read/write access to the ledger
pub trait LedgerStore: LedgerReader {
    /// Store `value` under `key`, replacing any previous value
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError>;

    /// Remove `key`. Removing a missing key is not an error.
    ///
    /// Contracts never call this; hosts use it to undo a partially applied
    /// transaction.
    fn delete_state(&mut self, key: &str) -> Result<(), StoreError>;
}

/// Reject the empty key the same way for every bundled store
pub fn validate_key(key: &str) -> Result<(), StoreError> {
    if key.is_empty() {
        return Err(StoreError::InvalidKey {
            key: key.to_string(),
            reason: "key must not be an empty string".to_string(),
        });
    }
    Ok(())
}
