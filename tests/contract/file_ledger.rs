//! Contracts over a file-backed ledger.

use crate::common::*;

#[test]
fn state_survives_flush_and_reopen() {
    let ledger = TestLedger::new();

    let mut contract = ledger.open();
    contract.init(["hi"]).unwrap();
    contract.invoke("write", ["k", "v"]).unwrap();
    contract.flush().unwrap();
    drop(contract);

    let contract = ledger.open();
    assert_eq!(read_string(&contract, INIT_KEY), "hi");
    assert_eq!(read_string(&contract, "k"), "v");
}

#[test]
fn unflushed_writes_are_lost() {
    let ledger = TestLedger::new();

    let mut contract = ledger.open();
    contract.invoke("write", ["k", "v"]).unwrap();
    drop(contract);

    let contract = ledger.open();
    assert!(contract.query("read", ["k"]).unwrap_err().is_key_lookup());
}

#[test]
fn flush_without_writes_creates_no_file() {
    let ledger = TestLedger::new();
    let mut contract = ledger.open();
    contract.query("read", ["k"]).unwrap_err();
    contract.flush().unwrap();
    assert!(!ledger.path().exists());
}

#[test]
fn failed_invoke_does_not_dirty_the_ledger() {
    let ledger = TestLedger::new();
    let mut contract = ledger.open();
    contract.invoke("write", ["only-key"]).unwrap_err();
    assert!(!contract.store().is_dirty());
}
