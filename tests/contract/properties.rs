//! Property tests through the facade.

use crate::common::*;
use proptest::collection::vec;
use proptest::prelude::*;

proptest! {
    #[test]
    fn last_write_wins_through_contract(
        key in "[a-z_]{1,12}",
        values in vec("[ -~]{0,16}", 1..8),
    ) {
        let mut contract = Contract::ephemeral();
        for value in &values {
            contract.invoke("write", [key.as_str(), value.as_str()]).unwrap();
        }
        prop_assert_eq!(&read_string(&contract, &key), values.last().unwrap());
        prop_assert_eq!(contract.store().len(), 1);
    }

    #[test]
    fn failed_write_leaves_store_unchanged(
        writes in vec(("[a-c]", "[a-z]{0,4}"), 0..6),
        arity in 0usize..5,
    ) {
        prop_assume!(arity != 2);
        let mut contract = Contract::ephemeral();
        for (key, value) in &writes {
            contract.invoke("write", [key.as_str(), value.as_str()]).unwrap();
        }
        let before = contract.store().clone();

        let args: Vec<String> = (0..arity).map(|i| format!("arg{}", i)).collect();
        prop_assert!(contract.invoke("write", args).is_err());
        prop_assert_eq!(contract.store(), &before);
    }
}
