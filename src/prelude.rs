//! Convenient imports for simple-chaincode.
//!
//! ```
//! use simple_chaincode::prelude::*;
//!
//! let mut contract = Contract::ephemeral();
//! contract.invoke("write", ["k", "v"]).unwrap();
//! ```

// Main entry point
pub use crate::contract::Contract;

// Error handling
pub use chaincode_core::{Error, Result, StoreError};

// Contract interface
pub use chaincode_executor::{Chaincode, SimpleChaincode, INIT_KEY};

// Ledgers
pub use chaincode_core::{LedgerReader, LedgerStore};
pub use chaincode_storage::{FileLedger, MemoryLedger};
