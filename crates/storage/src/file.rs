//! File-backed ledger
//!
//! State lives in memory between commits and is written out as one JSON
//! snapshot:
//!
//! ```json
//! {"version":1,"entries":{"hello_world":"aGk="}}
//! ```
//!
//! Values are base64 so arbitrary bytes survive. A commit writes to a
//! temporary file in the same directory and renames it over the target, so a
//! reader never observes a half-written snapshot.

use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use chaincode_core::{LedgerReader, LedgerStore, StoreError};
use serde::{Deserialize, Serialize};
use tempfile::NamedTempFile;
use tracing::debug;

use crate::MemoryLedger;

/// Snapshot format version written by this build
pub const SNAPSHOT_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct Snapshot {
    version: u32,
    entries: BTreeMap<String, String>,
}

/// Ledger persisted to a JSON snapshot file
#[derive(Debug)]
pub struct FileLedger {
    path: PathBuf,
    ledger: MemoryLedger,
    dirty: bool,
}

impl FileLedger {
    /// Open the ledger at `path`
    ///
    /// A missing file is an empty ledger; it is created on first commit.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let ledger = if path.exists() {
            let raw = fs::read_to_string(&path)?;
            decode_snapshot(&raw)?
        } else {
            debug!("No ledger file at {}, starting empty", path.display());
            MemoryLedger::new()
        };
        debug!(keys = ledger.len(), "Loaded ledger from {}", path.display());
        Ok(Self {
            path,
            ledger,
            dirty: false,
        })
    }

    /// Whether there are writes not yet committed to disk
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Write the current state to disk atomically
    pub fn commit(&mut self) -> Result<(), StoreError> {
        let encoded = encode_snapshot(&self.ledger)?;
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
            _ => PathBuf::from("."),
        };
        fs::create_dir_all(&dir)?;

        let mut tmp = NamedTempFile::new_in(&dir)?;
        tmp.write_all(encoded.as_bytes())?;
        tmp.as_file().sync_all()?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;

        self.dirty = false;
        debug!(keys = self.ledger.len(), "Committed ledger to {}", self.path.display());
        Ok(())
    }
}

impl LedgerReader for FileLedger {
    fn get_state(&self, key: &str) -> Result<Vec<u8>, StoreError> {
        self.ledger.get_state(key)
    }
}

impl LedgerStore for FileLedger {
    fn put_state(&mut self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        self.ledger.put_state(key, value)?;
        self.dirty = true;
        Ok(())
    }

    fn delete_state(&mut self, key: &str) -> Result<(), StoreError> {
        self.ledger.delete_state(key)?;
        self.dirty = true;
        Ok(())
    }
}

fn encode_snapshot(ledger: &MemoryLedger) -> Result<String, StoreError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_FORMAT_VERSION,
        entries: ledger
            .entries()
            .iter()
            .map(|(k, v)| (k.clone(), STANDARD.encode(v)))
            .collect(),
    };
    serde_json::to_string_pretty(&snapshot).map_err(|e| StoreError::Serialization(e.to_string()))
}

fn decode_snapshot(raw: &str) -> Result<MemoryLedger, StoreError> {
    let snapshot: Snapshot =
        serde_json::from_str(raw).map_err(|e| StoreError::Serialization(e.to_string()))?;
    if snapshot.version != SNAPSHOT_FORMAT_VERSION {
        return Err(StoreError::Corrupt(format!(
            "unsupported snapshot version {} (expected {})",
            snapshot.version, SNAPSHOT_FORMAT_VERSION
        )));
    }

    let mut entries = BTreeMap::new();
    for (key, encoded) in snapshot.entries {
        let value = STANDARD
            .decode(encoded.as_bytes())
            .map_err(|e| StoreError::Corrupt(format!("value for '{}' is not base64: {}", key, e)))?;
        entries.insert(key, value);
    }
    Ok(MemoryLedger::from_entries(entries))
}
