//! Tests for the contracts running over the durable RocksDB store.

use rand::Rng;
use regnet_core::{
    ContractConfig, RegistrarContract, RegistrationStatus, TxContext, UserContract,
};
use regnet_ledger::LedgerStore;
use tempfile::tempdir;

fn random_ssn() -> String {
    let mut rng = rand::thread_rng();
    format!("{:09}", rng.gen_range(0..1_000_000_000u32))
}

/// Tests the full lifecycle over the durable store: register, approve,
/// recharge, list, and purchase.
#[test]
fn test_full_flow_on_ledger() {
    let dir = tempdir().unwrap();
    let mut store = LedgerStore::open(dir.path()).unwrap();

    let user = UserContract::new(ContractConfig::default());
    let registrar = RegistrarContract::new();

    let buyer_ssn = random_ssn();
    let seller_ssn = random_ssn();

    for (name, ssn) in [("alice", &buyer_ssn), ("bob", &seller_ssn)] {
        let ctx = TxContext::new(1, name.to_string());
        user.request_new_user(&mut store, &ctx, name, "user@example.com", "555-0100", ssn)
            .unwrap();
        let ctx = TxContext::new(2, "registrar");
        registrar.approve_new_user(&mut store, &ctx, name, ssn).unwrap();
    }

    let ctx = TxContext::new(3, "alice");
    user.recharge_account(&mut store, &ctx, "alice", &buyer_ssn, "upg1000")
        .unwrap();

    let ctx = TxContext::new(4, "bob");
    user.property_registration_request(&mut store, &ctx, "P100", "bob", &seller_ssn, 600, "onSale")
        .unwrap();
    let ctx = TxContext::new(5, "registrar");
    registrar
        .approve_property_registration(&mut store, &ctx, "P100")
        .unwrap();

    let ctx = TxContext::new(6, "alice");
    let property = user
        .purchase_property(&mut store, &ctx, "P100", "alice", &buyer_ssn)
        .unwrap();

    assert_eq!(property.status, RegistrationStatus::Registered);
    assert_eq!(
        property.owner,
        regnet_core::keys::user_key("alice", &buyer_ssn).unwrap()
    );

    let alice = user.view_user(&store, "alice", &buyer_ssn).unwrap();
    let bob = user.view_user(&store, "bob", &seller_ssn).unwrap();
    assert_eq!(alice.upgrad_coins, 400);
    assert_eq!(bob.upgrad_coins, 600);
}

/// Tests that committed state survives a store reopen.
#[test]
fn test_state_survives_reopen() {
    let dir = tempdir().unwrap();
    let user = UserContract::new(ContractConfig::default());
    let registrar = RegistrarContract::new();
    let ssn = random_ssn();

    {
        let mut store = LedgerStore::open(dir.path()).unwrap();
        let ctx = TxContext::new(1, "alice");
        user.request_new_user(&mut store, &ctx, "alice", "alice@example.com", "555-0100", &ssn)
            .unwrap();
        registrar.approve_new_user(&mut store, &ctx, "alice", &ssn).unwrap();
        user.recharge_account(&mut store, &ctx, "alice", &ssn, "upg500")
            .unwrap();
    }

    let store = LedgerStore::open(dir.path()).unwrap();
    let alice = user.view_user(&store, "alice", &ssn).unwrap();
    assert_eq!(alice.upgrad_coins, 500);
}
