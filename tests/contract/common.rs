//! Shared helpers for contract tests.

#![allow(dead_code)]

pub use simple_chaincode::prelude::*;
pub use simple_chaincode::{EntryPoint, Invocation};
pub use tempfile::TempDir;

/// A file-backed contract living in its own temp directory
pub struct TestLedger {
    pub dir: TempDir,
}

impl TestLedger {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().unwrap(),
        }
    }

    pub fn path(&self) -> std::path::PathBuf {
        self.dir.path().join("ledger.json")
    }

    pub fn open(&self) -> Contract<FileLedger> {
        Contract::open(self.path()).unwrap()
    }
}

/// Unwrap a query result into a UTF-8 string
pub fn read_string(contract: &Contract<impl LedgerStore>, key: &str) -> String {
    let bytes = contract
        .query("read", [key])
        .unwrap()
        .expect("read returns a payload");
    String::from_utf8(bytes).unwrap()
}
