//! Execution layer for the simple chaincode.
//!
//! The host drives a contract through three entry points ([`Chaincode`]):
//! `init`, `invoke` and `query`. Invoke and query look the function name up
//! in a fixed table ([`dispatch`]) and hand the arguments to a handler
//! ([`handlers`]). The ledger is passed in on every call; nothing here keeps
//! state between calls.
//!
//! | Entry point | Function | Handler |
//! |-------------|----------|---------|
//! | init | | [`handlers::init::init`] |
//! | invoke | `init` | [`handlers::init::init`] |
//! | invoke | `write` | [`handlers::kv::write`] |
//! | query | `read` | [`handlers::kv::read`] |

#![warn(missing_docs)]
#![warn(clippy::all)]

mod chaincode;
pub mod dispatch;
pub mod handlers;
mod output;

#[cfg(test)]
mod tests;

pub use chaincode::{Chaincode, SimpleChaincode};
pub use handlers::init::INIT_KEY;
pub use output::Output;

pub use chaincode_core::{EntryPoint, Error, Invocation, LedgerReader, LedgerStore, Result};
