//! Atomicity of init/invoke through the facade.

use crate::common::*;

/// Writes two keys, then fails
struct WriteThenFail;

impl Chaincode for WriteThenFail {
    fn init(&self, stub: &mut dyn LedgerStore, _args: &[String]) -> Result<simple_chaincode::Output> {
        stub.put_state("a", b"1")?;
        stub.put_state("b", b"2")?;
        Err(Error::ArgumentCount {
            function: "init",
            expected: 1,
            actual: 0,
        })
    }

    fn invoke(
        &self,
        stub: &mut dyn LedgerStore,
        _function: &str,
        _args: &[String],
    ) -> Result<simple_chaincode::Output> {
        stub.put_state("a", b"1")?;
        stub.put_state("", b"rejected")?;
        Ok(simple_chaincode::Output::Unit)
    }

    fn query(
        &self,
        stub: &dyn LedgerReader,
        _function: &str,
        args: &[String],
    ) -> Result<simple_chaincode::Output> {
        Ok(simple_chaincode::Output::Bytes(stub.get_state(&args[0])?))
    }
}

#[test]
fn failed_init_leaves_no_writes() {
    let mut contract = Contract::with_chaincode(MemoryLedger::new(), WriteThenFail);
    assert!(contract.init(["x"]).is_err());
    assert!(contract.store().is_empty());
}

#[test]
fn store_error_mid_invoke_rolls_back_earlier_writes() {
    let mut contract = Contract::with_chaincode(MemoryLedger::new(), WriteThenFail);
    match contract.invoke("anything", Vec::<String>::new()) {
        Err(Error::Store(StoreError::InvalidKey { .. })) => {}
        other => panic!("Expected Store(InvalidKey), got {:?}", other),
    }
    assert!(contract.store().is_empty());
}

#[test]
fn successful_invoke_commits() {
    let mut contract = Contract::ephemeral();
    contract.invoke("write", ["a", "1"]).unwrap();
    assert!(contract.store().get_state("a").is_ok());
}

// =============================================================================
// Store rejects a write during commit
// =============================================================================

/// Memory ledger that refuses writes to key `b`
#[derive(Default)]
struct RejectB {
    ledger: MemoryLedger,
}

impl LedgerReader for RejectB {
    fn get_state(&self, key: &str) -> std::result::Result<Vec<u8>, StoreError> {
        self.ledger.get_state(key)
    }
}

impl LedgerStore for RejectB {
    fn put_state(&mut self, key: &str, value: &[u8]) -> std::result::Result<(), StoreError> {
        if key == "b" {
            return Err(StoreError::InvalidKey {
                key: key.to_string(),
                reason: "read-only key".to_string(),
            });
        }
        self.ledger.put_state(key, value)
    }

    fn delete_state(&mut self, key: &str) -> std::result::Result<(), StoreError> {
        self.ledger.delete_state(key)
    }
}

/// Writes `a` then `b`, and succeeds
struct WriteAThenB;

impl Chaincode for WriteAThenB {
    fn init(&self, stub: &mut dyn LedgerStore, args: &[String]) -> Result<simple_chaincode::Output> {
        self.invoke(stub, "write", args)
    }

    fn invoke(
        &self,
        stub: &mut dyn LedgerStore,
        _function: &str,
        _args: &[String],
    ) -> Result<simple_chaincode::Output> {
        stub.put_state("a", b"new")?;
        stub.put_state("b", b"new")?;
        Ok(simple_chaincode::Output::Unit)
    }

    fn query(
        &self,
        stub: &dyn LedgerReader,
        _function: &str,
        args: &[String],
    ) -> Result<simple_chaincode::Output> {
        Ok(simple_chaincode::Output::Bytes(stub.get_state(&args[0])?))
    }
}

#[test]
fn rejected_commit_leaves_store_empty() {
    let mut contract = Contract::with_chaincode(RejectB::default(), WriteAThenB);
    match contract.invoke("anything", Vec::<String>::new()) {
        Err(Error::Store(StoreError::InvalidKey { key, .. })) => assert_eq!(key, "b"),
        other => panic!("Expected Store(InvalidKey), got {:?}", other),
    }
    assert!(contract.store().ledger.is_empty());
}

#[test]
fn rejected_commit_restores_prior_value() {
    let mut store = RejectB::default();
    store.ledger.put_state("a", b"old").unwrap();
    let mut contract = Contract::with_chaincode(store, WriteAThenB);

    assert!(contract.invoke("anything", Vec::<String>::new()).is_err());
    assert_eq!(contract.store().ledger.get_state("a").unwrap(), b"old");
    assert_eq!(contract.store().ledger.len(), 1);
}

#[test]
fn simple_chaincode_over_rejecting_store() {
    let mut contract = Contract::new(RejectB::default());
    contract.invoke("write", ["a", "1"]).unwrap();
    assert!(contract.invoke("write", ["b", "2"]).is_err());
    assert_eq!(read_string(&contract, "a"), "1");
    assert!(contract.query("read", ["b"]).unwrap_err().is_key_lookup());
}
