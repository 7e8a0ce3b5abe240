//! Session state: the contract and the ledger it runs against.

use simple_chaincode::{
    Contract, EntryPoint, FileLedger, Invocation, MemoryLedger, Result,
};
use tracing::debug;

use crate::config::LedgerLocation;

enum Session {
    Memory(Contract<MemoryLedger>),
    File(Contract<FileLedger>),
}

/// One CLI session (a shell call, or a whole REPL / pipe run)
pub struct SessionState {
    session: Session,
}

impl SessionState {
    pub fn open(location: &LedgerLocation) -> Result<Self> {
        let session = match location {
            LedgerLocation::Memory => Session::Memory(Contract::ephemeral()),
            LedgerLocation::File(path) => {
                debug!("Opening ledger {}", path.display());
                Session::File(Contract::open(path)?)
            }
        };
        Ok(Self { session })
    }

    /// Call the contract. A successful init/invoke is committed to disk
    /// before returning.
    pub fn execute(
        &mut self,
        entry_point: EntryPoint,
        invocation: &Invocation,
    ) -> Result<Option<Vec<u8>>> {
        match &mut self.session {
            Session::Memory(contract) => contract.call(entry_point, invocation),
            Session::File(contract) => {
                let payload = contract.call(entry_point, invocation)?;
                if entry_point.is_mutating() {
                    contract.flush()?;
                }
                Ok(payload)
            }
        }
    }
}
