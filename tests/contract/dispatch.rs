//! Entry point routing.

use crate::common::*;

#[test]
fn invoke_unknown_function_names_it() {
    let mut contract = Contract::ephemeral();
    match contract.invoke("delete", ["k"]) {
        Err(Error::UnknownFunction { entry_point, name }) => {
            assert_eq!(entry_point, EntryPoint::Invoke);
            assert_eq!(name, "delete");
        }
        other => panic!("Expected UnknownFunction, got {:?}", other),
    }
}

#[test]
fn query_unknown_function_names_it() {
    let contract = Contract::ephemeral();
    let err = contract.query("list", Vec::<String>::new()).unwrap_err();
    assert_eq!(err.to_string(), "received unknown function query: list");
}

#[test]
fn call_routes_by_entry_point() {
    let mut contract = Contract::ephemeral();

    contract
        .call(EntryPoint::Init, &Invocation::new("ignored", ["hi"]))
        .unwrap();
    contract
        .call(EntryPoint::Invoke, &Invocation::new("write", ["k", "v"]))
        .unwrap();

    let out = contract
        .call(EntryPoint::Query, &Invocation::new("read", ["k"]))
        .unwrap();
    assert_eq!(out, Some(b"v".to_vec()));

    let out = contract
        .call(EntryPoint::Query, &Invocation::new("read", [INIT_KEY]))
        .unwrap();
    assert_eq!(out, Some(b"hi".to_vec()));
}

#[test]
fn read_is_not_an_invoke_function() {
    let mut contract = Contract::ephemeral();
    contract.invoke("write", ["k", "v"]).unwrap();
    assert!(matches!(
        contract.call(EntryPoint::Invoke, &Invocation::new("read", ["k"])),
        Err(Error::UnknownFunction { .. })
    ));
}

#[test]
fn write_is_not_a_query_function() {
    let mut contract = Contract::ephemeral();
    assert!(matches!(
        contract.call(EntryPoint::Query, &Invocation::new("write", ["k", "v"])),
        Err(Error::UnknownFunction { .. })
    ));
    assert!(contract.store().is_empty());
}
