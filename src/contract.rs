//! Local host for a contract.
//!
//! [`Contract`] plays the part of the peer: it owns a ledger, hands it to the
//! contract on every call, and runs each init/invoke inside a [`Transaction`]
//! so a failed call leaves no partial writes behind.

use std::path::Path;

use chaincode_core::{EntryPoint, Invocation, LedgerStore, Result};
use chaincode_executor::{Chaincode, Output, SimpleChaincode};
use chaincode_storage::{FileLedger, MemoryLedger, Transaction};
use tracing::debug;

/// A contract bound to a ledger.
///
/// # Example
///
/// ```
/// use simple_chaincode::prelude::*;
///
/// let mut contract = Contract::new(MemoryLedger::new());
/// contract.invoke("write", ["k", "v1"])?;
/// contract.invoke("write", ["k", "v2"])?;
/// assert_eq!(contract.query("read", ["k"])?, Some(b"v2".to_vec()));
/// # Ok::<(), simple_chaincode::Error>(())
/// ```
pub struct Contract<S, C = SimpleChaincode> {
    store: S,
    chaincode: C,
}

impl<S: LedgerStore> Contract<S, SimpleChaincode> {
    /// Bind [`SimpleChaincode`] to `store`
    pub fn new(store: S) -> Self {
        Self::with_chaincode(store, SimpleChaincode)
    }
}

impl Contract<MemoryLedger, SimpleChaincode> {
    /// Contract over an empty in-memory ledger; state is gone on drop
    pub fn ephemeral() -> Self {
        Self::new(MemoryLedger::new())
    }
}

impl Contract<FileLedger, SimpleChaincode> {
    /// Contract over the ledger snapshot at `path`
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Ok(Self::new(FileLedger::open(path)?))
    }
}

impl<C: Chaincode> Contract<FileLedger, C> {
    /// Write committed transactions to disk
    pub fn flush(&mut self) -> Result<()> {
        if self.store.is_dirty() {
            self.store.commit()?;
        }
        Ok(())
    }
}

impl<S: LedgerStore, C: Chaincode> Contract<S, C> {
    /// Bind any contract to `store`
    pub fn with_chaincode(store: S, chaincode: C) -> Self {
        Self { store, chaincode }
    }

    /// Deploy-time initialization
    pub fn init<I, T>(&mut self, args: I) -> Result<Option<Vec<u8>>>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args = collect(args);
        self.transact(|cc, stub| cc.init(stub, &args))
    }

    /// Run a transaction
    pub fn invoke<I, T>(&mut self, function: &str, args: I) -> Result<Option<Vec<u8>>>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args = collect(args);
        self.transact(|cc, stub| cc.invoke(stub, function, &args))
    }

    /// Run a read-only query
    pub fn query<I, T>(&self, function: &str, args: I) -> Result<Option<Vec<u8>>>
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let args = collect(args);
        let output = self.chaincode.query(&self.store, function, &args)?;
        Ok(output.into_payload())
    }

    /// Route a request through the given entry point
    ///
    /// The function name is ignored for [`EntryPoint::Init`].
    pub fn call(
        &mut self,
        entry_point: EntryPoint,
        invocation: &Invocation,
    ) -> Result<Option<Vec<u8>>> {
        debug!(
            entry_point = entry_point.as_str(),
            function = %invocation.function,
            "dispatching"
        );
        let args = &invocation.args;
        match entry_point {
            EntryPoint::Init => self.transact(|cc, stub| cc.init(stub, args)),
            EntryPoint::Invoke => {
                self.transact(|cc, stub| cc.invoke(stub, &invocation.function, args))
            }
            EntryPoint::Query => self.query(&invocation.function, args.iter().cloned()),
        }
    }

    /// Borrow the ledger
    pub fn store(&self) -> &S {
        &self.store
    }

    fn transact<F>(&mut self, f: F) -> Result<Option<Vec<u8>>>
    where
        F: FnOnce(&C, &mut dyn LedgerStore) -> Result<Output>,
    {
        let mut txn = Transaction::begin(&mut self.store);
        let stub: &mut dyn LedgerStore = &mut txn;
        match f(&self.chaincode, stub) {
            Ok(output) => {
                txn.commit()?;
                Ok(output.into_payload())
            }
            Err(e) => {
                txn.rollback();
                Err(e)
            }
        }
    }
}

fn collect<I, T>(args: I) -> Vec<String>
where
    I: IntoIterator<Item = T>,
    T: Into<String>,
{
    args.into_iter().map(Into::into).collect()
}
