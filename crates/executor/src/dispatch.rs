//! Function name → handler tables.
//!
//! Names match exactly and case-sensitively. Anything not listed here is an
//! unknown function.

use chaincode_core::{LedgerReader, LedgerStore, Result};

use crate::handlers::{init, kv};
use crate::Output;

/// Handler reachable through invoke
pub type InvokeHandler = fn(&mut dyn LedgerStore, &[String]) -> Result<Output>;

/// Handler reachable through query
pub type QueryHandler = fn(&dyn LedgerReader, &[String]) -> Result<Output>;

/// Functions accepted by invoke
pub const INVOKE_FUNCTIONS: &[(&str, InvokeHandler)] = &[
    // re-runs first-time setup; used as reset
    ("init", init::init),
    ("write", kv::write),
];

/// Functions accepted by query
pub const QUERY_FUNCTIONS: &[(&str, QueryHandler)] = &[("read", kv::read)];

/// Look up an invoke handler by name
pub fn invoke_handler(name: &str) -> Option<InvokeHandler> {
    INVOKE_FUNCTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, handler)| *handler)
}

/// Look up a query handler by name
pub fn query_handler(name: &str) -> Option<QueryHandler> {
    QUERY_FUNCTIONS
        .iter()
        .find(|(known, _)| *known == name)
        .map(|(_, handler)| *handler)
}

/// Names accepted by invoke, in table order
pub fn invoke_names() -> impl Iterator<Item = &'static str> {
    INVOKE_FUNCTIONS.iter().map(|(name, _)| *name)
}

/// Names accepted by query, in table order
pub fn query_names() -> impl Iterator<Item = &'static str> {
    QUERY_FUNCTIONS.iter().map(|(name, _)| *name)
}
