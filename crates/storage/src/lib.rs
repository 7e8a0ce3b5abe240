//! Ledger implementations for local development and tests
//!
//! A deployed contract talks to whatever store its host provides. This crate
//! supplies the stores used everywhere else:
//! - [`MemoryLedger`]: BTreeMap-backed, lives for the process
//! - [`FileLedger`]: a `MemoryLedger` loaded from and committed to a JSON snapshot
//! - [`Transaction`]: write-set overlay that applies all writes or none

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod file;
pub mod memory;
pub mod transaction;

pub use file::{FileLedger, SNAPSHOT_FORMAT_VERSION};
pub use memory::MemoryLedger;
pub use transaction::Transaction;
