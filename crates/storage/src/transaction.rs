//! Transaction write set
//!
//! A [`Transaction`] buffers every write in memory and applies them to the
//! underlying store only on [`Transaction::commit`]. Reads see the
//! transaction's own writes first. Dropping an uncommitted transaction
//! discards its writes, so a failed invoke leaves the ledger untouched.
//!
//! Commit is all-or-nothing. The prior value of every buffered key is read
//! before anything is applied; if the store rejects a write part-way, the
//! keys already written are restored (or removed) in reverse order.
//!
//! Key rules belong to the inner store. A transaction buffers any key, and a
//! key the store rejects surfaces from `commit` with nothing applied.

use std::collections::BTreeMap;

use chaincode_core::{LedgerReader, LedgerStore, StoreError};
use tracing::{debug, warn};

/// Write-set overlay over a ledger store
pub struct Transaction<'a, S: LedgerStore + ?Sized> {
    inner: &'a mut S,
    // `None` marks a buffered delete
    writes: BTreeMap<String, Option<Vec<u8>>>,
}

impl<'a, S: LedgerStore + ?Sized> Transaction<'a, S> {
    /// Begin a transaction against `inner`
    pub fn begin(inner: &'a mut S) -> Self {
        Self {
            inner,
            writes: BTreeMap::new(),
        }
    }

    /// Number of buffered writes (one per distinct key)
    pub fn pending(&self) -> usize {
        self.writes.len()
    }

    /// Apply buffered writes to the underlying store in key order
    ///
    /// Returns the number of keys written. On failure the store is left as
    /// it was before the commit and the store's error is returned as-is.
    pub fn commit(self) -> Result<usize, StoreError> {
        let count = self.pending();

        let mut prior = Vec::with_capacity(count);
        for key in self.writes.keys() {
            match self.inner.get_state(key) {
                Ok(value) => prior.push(Some(value)),
                Err(e) if e.is_not_found() => prior.push(None),
                Err(e) => {
                    debug!(key = %key, "transaction aborted before apply");
                    return Err(e);
                }
            }
        }

        for (applied, (key, write)) in self.writes.iter().enumerate() {
            if let Err(e) = apply(&mut *self.inner, key, write.as_deref()) {
                let undo = self.writes.keys().zip(&prior).take(applied).rev();
                for (key, before) in undo {
                    if let Err(undo_err) = apply(&mut *self.inner, key, before.as_deref()) {
                        warn!(key = %key, error = %undo_err, "failed to restore key");
                    }
                }
                debug!(key = %key, restored = applied, "transaction commit undone");
                return Err(e);
            }
        }

        debug!(writes = count, "transaction committed");
        Ok(count)
    }

    /// Discard buffered writes
    pub fn rollback(self) {
        debug!(writes = self.pending(), "transaction rolled back");
    }
}

fn apply<S: LedgerStore + ?Sized>(
    store: &mut S,
    key: &str,
    value: Option<&[u8]>,
) -> Result<(), StoreError> {
    match value {
        Some(value) => store.put_state(key, value),
        None => store.delete_state(key),
    }
}

impl<S: LedgerStore + ?Sized> LedgerReader for Transaction<'_, S> {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        match self.writes.get(key) {
            Some(Some(value)) => Ok(value.clone()),
            Some(None) => Err(StoreError::NotFound(key.to_string())),
            None => self.inner.get_state(key),
        }
    }
}

impl<S: LedgerStore + ?Sized> LedgerStore for Transaction<'_, S> {
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.writes.insert(key.to_string(), Some(value.to_vec()));
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.writes.insert(key.to_string(), None);
        Ok(())
    }
}
