use super::*;
use brickstack_common::ttl::BUMP_THRESHOLD;
use soroban_sdk::testutils::storage::{Instance as _, Persistent as _};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{vec, Address, Env};

fn setup(e: &Env) -> (AllowListClient<'_>, Address) {
    e.mock_all_auths();
    let contract_id = e.register(AllowList, ());
    let client = AllowListClient::new(e, &contract_id);
    let admin = Address::generate(e);
    client.initialize(&admin);
    (client, admin)
}

#[test]
fn test_unknown_holder_is_rejected() {
    let e = Env::default();
    let (client, _admin) = setup(&e);
    assert!(!client.check(&Address::generate(&e)));
}

#[test]
fn test_set_and_clear() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let holder = Address::generate(&e);

    client.set_allowed(&admin, &holder, &true);
    assert!(client.check(&holder));

    client.set_allowed(&admin, &holder, &false);
    assert!(!client.check(&holder));
}

#[test]
fn test_batch() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let a = Address::generate(&e);
    let b = Address::generate(&e);

    client.set_allowed_batch(&admin, &vec![&e, a.clone(), b.clone()], &true);
    assert!(client.check(&a));
    assert!(client.check(&b));
}

#[test]
fn test_large_batch_lives_in_persistent_storage() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    let mut holders = Vec::new(&e);
    for _ in 0..50 {
        holders.push_back(Address::generate(&e));
    }

    client.set_allowed_batch(&admin, &holders, &true);

    e.as_contract(&client.address, || {
        // Only the admin stays in the instance entry.
        assert_eq!(e.storage().instance().all().len(), 1);
        for holder in holders.iter() {
            let key = DataKey::Allowed(holder.clone());
            assert!(e.storage().persistent().has(&key));
            assert!(e.storage().persistent().get_ttl(&key) >= BUMP_THRESHOLD);
        }
    });
    for holder in holders.iter() {
        assert!(client.check(&holder));
    }

    client.set_allowed(&admin, &holders.get(0).unwrap(), &false);
    assert!(!client.check(&holders.get(0).unwrap()));
    e.as_contract(&client.address, || {
        let key = DataKey::Allowed(holders.get(0).unwrap());
        assert!(!e.storage().persistent().has(&key));
    });
}

#[test]
fn test_non_admin_cannot_allow() {
    let e = Env::default();
    let (client, _admin) = setup(&e);
    let intruder = Address::generate(&e);
    assert_eq!(
        client.try_set_allowed(&intruder, &intruder, &true),
        Err(Ok(ContractError::Unauthorized))
    );
    assert!(!client.check(&intruder));
}

#[test]
fn test_initialize_twice() {
    let e = Env::default();
    let (client, admin) = setup(&e);
    assert_eq!(
        client.try_initialize(&admin),
        Err(Ok(ContractError::AlreadyInitialized))
    );
}
