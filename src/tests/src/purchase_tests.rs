//! Tests for the purchase operation: balance conservation, ownership
//! transfer, and atomic rejection.

use regnet_core::{
    ContractConfig, MemoryStore, Property, RegistrarContract, RegnetError, RegistrationStatus,
    TxContext, User, UserContract,
};

struct Fixture {
    store: MemoryStore,
    user: UserContract,
    registrar: RegistrarContract,
}

impl Fixture {
    /// Sets up the worked example: alice holds 1000 coins, bob owns property
    /// P001 priced 600 with the given status.
    fn new(status: &str) -> Self {
        let mut fixture = Self {
            store: MemoryStore::new(),
            user: UserContract::new(ContractConfig::default()),
            registrar: RegistrarContract::new(),
        };

        fixture.register("alice", "111");
        fixture.register("bob", "222");

        let ctx = TxContext::new(2, "alice");
        fixture
            .user
            .recharge_account(&mut fixture.store, &ctx, "alice", "111", "upg1000")
            .unwrap();

        let ctx = TxContext::new(3, "bob");
        fixture
            .user
            .property_registration_request(
                &mut fixture.store,
                &ctx,
                "P001",
                "bob",
                "222",
                600,
                status,
            )
            .unwrap();
        let ctx = TxContext::new(4, "registrar");
        fixture
            .registrar
            .approve_property_registration(&mut fixture.store, &ctx, "P001")
            .unwrap();

        fixture
    }

    fn register(&mut self, name: &str, ssn: &str) {
        let ctx = TxContext::new(1, name.to_string());
        self.user
            .request_new_user(
                &mut self.store,
                &ctx,
                name,
                "user@example.com",
                "555-0100",
                ssn,
            )
            .unwrap();
        self.registrar
            .approve_new_user(&mut self.store, &ctx, name, ssn)
            .unwrap();
    }

    fn balance(&self, name: &str, ssn: &str) -> u64 {
        self.user.view_user(&self.store, name, ssn).unwrap().upgrad_coins
    }

    fn property(&self) -> Property {
        self.user.view_property(&self.store, "P001").unwrap()
    }

    fn snapshot(&self) -> (User, User, Property) {
        (
            self.user.view_user(&self.store, "alice", "111").unwrap(),
            self.user.view_user(&self.store, "bob", "222").unwrap(),
            self.property(),
        )
    }
}

/// Tests the worked example: a successful purchase moves the price, flips
/// ownership, and resets the status.
#[test]
fn test_purchase_transfers_price_and_ownership() {
    let mut fixture = Fixture::new("onSale");
    let total_before = fixture.balance("alice", "111") + fixture.balance("bob", "222");

    let ctx = TxContext::new(9, "alice");
    let property = fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P001", "alice", "111")
        .unwrap();

    assert_eq!(fixture.balance("alice", "111"), 400);
    assert_eq!(fixture.balance("bob", "222"), 600);
    assert_eq!(property.owner, regnet_core::keys::user_key("alice", "111").unwrap());
    assert_eq!(property.status, RegistrationStatus::Registered);
    assert_eq!(property.updated_at, 9);

    // Total coins across buyer and seller are conserved.
    let total_after = fixture.balance("alice", "111") + fixture.balance("bob", "222");
    assert_eq!(total_after, total_before);

    // A repeat purchase by the new owner is a self-purchase.
    let ctx = TxContext::new(10, "alice");
    let result = fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P001", "alice", "111");
    assert!(matches!(result, Err(RegnetError::SelfPurchase(_))));
}

/// Tests that the current owner cannot purchase their own property and that
/// the rejection mutates nothing.
#[test]
fn test_self_purchase_is_rejected_atomically() {
    let mut fixture = Fixture::new("onSale");
    let before = fixture.snapshot();

    let ctx = TxContext::new(9, "bob");
    let result = fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P001", "bob", "222");
    assert!(matches!(result, Err(RegnetError::SelfPurchase(_))));

    assert_eq!(fixture.snapshot(), before);
}

/// Tests that a property not listed for sale cannot be purchased.
#[test]
fn test_purchase_requires_on_sale_status() {
    let mut fixture = Fixture::new("registered");
    let before = fixture.snapshot();

    let ctx = TxContext::new(9, "alice");
    let result = fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P001", "alice", "111");
    assert!(matches!(result, Err(RegnetError::NotForSale(_))));

    assert_eq!(fixture.snapshot(), before);
}

/// Tests that an insufficient balance rejects the purchase with no asset
/// mutated.
#[test]
fn test_purchase_requires_sufficient_balance() {
    let mut fixture = Fixture::new("onSale");

    // carol has only 500 coins against a price of 600.
    fixture.register("carol", "333");
    let ctx = TxContext::new(5, "carol");
    fixture
        .user
        .recharge_account(&mut fixture.store, &ctx, "carol", "333", "upg500")
        .unwrap();

    let before = fixture.snapshot();
    let ctx = TxContext::new(9, "carol");
    let result = fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P001", "carol", "333");
    assert!(matches!(
        result,
        Err(RegnetError::InsufficientBalance {
            required: 600,
            available: 500
        })
    ));

    assert_eq!(fixture.snapshot(), before);
    assert_eq!(fixture.balance("carol", "333"), 500);
}

/// Tests that purchasing a property that does not exist fails before any
/// balance is touched.
#[test]
fn test_purchase_missing_property() {
    let mut fixture = Fixture::new("onSale");

    let ctx = TxContext::new(9, "alice");
    let result = fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P999", "alice", "111");
    assert!(matches!(result, Err(RegnetError::AssetNotFound { .. })));
    assert_eq!(fixture.balance("alice", "111"), 1000);
}

/// Tests that a property can be re-listed and sold back, conserving coins
/// across the whole cycle.
#[test]
fn test_resale_cycle() {
    let mut fixture = Fixture::new("onSale");

    let ctx = TxContext::new(9, "alice");
    fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P001", "alice", "111")
        .unwrap();

    // alice re-lists at the same price; bob buys it back.
    let ctx = TxContext::new(10, "alice");
    fixture
        .user
        .update_property(&mut fixture.store, &ctx, "P001", "alice", "111", "onSale")
        .unwrap();

    let ctx = TxContext::new(11, "bob");
    let property = fixture
        .user
        .purchase_property(&mut fixture.store, &ctx, "P001", "bob", "222")
        .unwrap();

    assert_eq!(property.owner, regnet_core::keys::user_key("bob", "222").unwrap());
    assert_eq!(fixture.balance("alice", "111"), 1000);
    assert_eq!(fixture.balance("bob", "222"), 0);
}
