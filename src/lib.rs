//! # simple-chaincode
//!
//! Minimal key/value chaincode plus a local host to run it against.
//!
//! A permissioned-ledger host loads a contract through three entry points:
//! `init` on deployment, `invoke` for transactions, `query` for reads. This
//! contract stores its init argument under `hello_world`, writes arbitrary
//! key/value pairs, and reads them back. All state lives in the ledger the
//! host passes in.
//!
//! ## Quick Start
//!
//! ```
//! use simple_chaincode::prelude::*;
//!
//! let mut contract = Contract::ephemeral();
//! contract.init(["hi"])?;
//! contract.invoke("write", ["color", "blue"])?;
//!
//! assert_eq!(contract.query("read", ["color"])?, Some(b"blue".to_vec()));
//! assert_eq!(contract.query("read", [INIT_KEY])?, Some(b"hi".to_vec()));
//! # Ok::<(), simple_chaincode::Error>(())
//! ```
//!
//! ## Crates
//!
//! - `chaincode-core`: errors, store traits, request types
//! - `chaincode-storage`: in-memory and file-backed ledgers, write sets
//! - `chaincode-executor`: entry points, dispatch, handlers

#![warn(missing_docs)]

mod contract;

pub mod prelude;

pub use contract::Contract;

pub use chaincode_core::{
    EntryPoint, Error, Invocation, LedgerReader, LedgerStore, Result, StoreError, WireError,
};
pub use chaincode_executor::{dispatch, Chaincode, Output, SimpleChaincode, INIT_KEY};
pub use chaincode_storage::{FileLedger, MemoryLedger, Transaction};
