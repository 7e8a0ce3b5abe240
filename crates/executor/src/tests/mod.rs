//! Executor tests: entry points driven against in-memory ledgers.


use chaincode_storage::MemoryLedger;

use crate::{Chaincode, Output, Result, SimpleChaincode};

fn args(values: &[&str]) -> Vec<String> {
    values.iter().map(|s| s.to_string()).collect()
}

fn invoke(ledger: &mut MemoryLedger, function: &str, values: &[&str]) -> Result<Output> {
    SimpleChaincode.invoke(ledger, function, &args(values))
}

fn query(ledger: &MemoryLedger, function: &str, values: &[&str]) -> Result<Output> {
    SimpleChaincode.query(ledger, function, &args(values))
}
