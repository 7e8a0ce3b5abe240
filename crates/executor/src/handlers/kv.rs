//! Key/value handlers (write, read).

use chaincode_core::{Error, LedgerReader, LedgerStore, Result};
use tracing::debug;

use crate::Output;

/// Handle write: `[key, value]`, store value bytes under key.
///
/// Store errors propagate unchanged.
pub fn write(stub: &mut dyn LedgerStore, args: &[String]) -> Result<Output> {
    Error::check_arity("write", 2, args)?;
    let (key, value) = (&args[0], &args[1]);
    debug!(key = %key, "running write()");
    stub.put_state(key, value.as_bytes())?;
    Ok(Output::Unit)
}

/// Handle read: `[key]`, return the stored bytes verbatim.
pub fn read(stub: &dyn LedgerReader, args: &[String]) -> Result<Output> {
    Error::check_arity("read", 1, args)?;
    let key = &args[0];
    debug!(key = %key, "running read()");
    let value = stub.get_state(key).map_err(|source| Error::KeyLookup {
        key: key.clone(),
        source,
    })?;
    Ok(Output::Bytes(value))
}
