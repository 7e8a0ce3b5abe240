//! Initialization handler.

use chaincode_core::{Error, LedgerStore, Result};
use tracing::debug;

use crate::Output;

/// Key the init argument is stored under
pub const INIT_KEY: &str = "hello_world";

/// Handle init: store the single argument under [`INIT_KEY`].
///
/// Also reachable as `invoke init`, which resets the key.
pub fn init(stub: &mut dyn LedgerStore, args: &[String]) -> Result<Output> {
    Error::check_arity("init", 1, args)?;
    debug!(key = INIT_KEY, "running init()");
    stub.put_state(INIT_KEY, args[0].as_bytes())?;
    Ok(Output::Unit)
}
