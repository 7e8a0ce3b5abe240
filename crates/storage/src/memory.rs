//! In-memory ledger
//!
//! Last write wins; there is no history.

use std::collections::BTreeMap;

use chaincode_core::store::validate_key;
use chaincode_core::{LedgerReader, LedgerStore, StoreError};

/// BTreeMap-backed ledger
///
/// Keys iterate in byte order, which keeps snapshots deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryLedger {
    entries: BTreeMap<String, Vec<u8>>,
}

impl MemoryLedger {
    /// Create an empty ledger
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from existing entries
    pub fn from_entries(entries: BTreeMap<String, Vec<u8>>) -> Self {
        Self { entries }
    }

    /// Number of keys with a value
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if nothing has been written
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Borrow all entries
    pub fn entries(&self) -> &BTreeMap<String, Vec<u8>> {
        &self.entries
    }
}

impl LedgerReader for MemoryLedger {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        validate_key(key)?;
        self.entries
            .get(key)
            .cloned()
            .ok_or_else(|| StoreError::NotFound(key.to_string()))
    }
}

impl LedgerStore for MemoryLedger {
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.insert(key.to_string(), value.to_vec());
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        validate_key(key)?;
        self.entries.remove(key);
        Ok(())
    }
}
