//! Contract entry points.

use chaincode_core::{EntryPoint, Error, LedgerReader, LedgerStore, Result};
use tracing::{info, warn};

use crate::{dispatch, handlers, Output};

/// The interface a host loads a contract through
///
/// The ledger is a parameter of every call, never a field: implementations
/// hold no state between calls. Queries only get a [`LedgerReader`], so they
/// cannot write.
pub trait Chaincode {
    /// Called on first deployment
    fn init(&self, stub: &mut dyn LedgerStore, args: &[String]) -> Result<Output>;

    /// State-mutating call, recorded as a transaction
    fn invoke(&self, stub: &mut dyn LedgerStore, function: &str, args: &[String])
        -> Result<Output>;

    /// Read-only call, not recorded
    fn query(&self, stub: &dyn LedgerReader, function: &str, args: &[String]) -> Result<Output>;
}

/// Key/value example contract: `init`, `write`, `read`
#[derive(Debug, Clone, Copy, Default)]
pub struct SimpleChaincode;

impl SimpleChaincode {
    /// Create the contract
    pub fn new() -> Self {
        Self
    }
}

impl Chaincode for SimpleChaincode {
    fn init(&self, stub: &mut dyn LedgerStore, args: &[String]) -> Result<Output> {
        info!(args = args.len(), "init is running");
        handlers::init::init(stub, args)
    }

    fn invoke(
        &self,
        stub: &mut dyn LedgerStore,
        function: &str,
        args: &[String],
    ) -> Result<Output> {
        info!(function, "invoke is running");
        match dispatch::invoke_handler(function) {
            Some(handler) => handler(stub, args),
            None => {
                warn!(function, "invoke did not find func");
                Err(Error::UnknownFunction {
                    entry_point: EntryPoint::Invoke,
                    name: function.to_string(),
                })
            }
        }
    }

    fn query(&self, stub: &dyn LedgerReader, function: &str, args: &[String]) -> Result<Output> {
        info!(function, "query is running");
        match dispatch::query_handler(function) {
            Some(handler) => handler(stub, args),
            None => {
                warn!(function, "query did not find func");
                Err(Error::UnknownFunction {
                    entry_point: EntryPoint::Query,
                    name: function.to_string(),
                })
            }
        }
    }
}
