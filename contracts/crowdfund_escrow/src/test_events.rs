#![cfg(test)]

use crate::test_helpers::*;
use crate::Outcome;
use soroban_sdk::{testutils::Events, Address, Env, FromVal, Symbol, Val, Vec};

/// Last event published by `contract`, ignoring token and ledger events.
fn last_event_of(e: &Env, contract: &Address) -> (Vec<Val>, Val) {
    let events = e.events().all();
    let ev = events
        .into_iter()
        .rev()
        .find(|ev| ev.0 == *contract)
        .unwrap();
    (ev.1, ev.2)
}

#[test]
fn test_lock_and_success_event_emissions() {
    let e = Env::default();
    let s = setup(&e);
    let a = funded_investor(&s, &e);
    let b = funded_investor(&s, &e);

    // --- locked ---
    s.escrow.lock(&a, &ASSET_ID, &450);
    s.escrow.lock(&b, &ASSET_ID, &300);

    let (topics, data) = last_event_of(&e, &s.escrow.address);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    let topic_asset = u64::from_val(&e, &topics.get(1).unwrap());
    let topic_investor = Address::from_val(&e, &topics.get(2).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "locked"));
    assert_eq!(topic_asset, ASSET_ID);
    assert_eq!(topic_investor, b);
    assert_eq!(<(i128, i128)>::from_val(&e, &data), (300, 750));

    // --- campaign_succeeded ---
    s.escrow.finalize(&s.operator, &ASSET_ID, &Outcome::Success);

    let (topics, data) = last_event_of(&e, &s.escrow.address);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    let topic_asset = u64::from_val(&e, &topics.get(1).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "campaign_succeeded"));
    assert_eq!(topic_asset, ASSET_ID);

    // Seller gets all 750; 4 + 3 units are minted.
    let succeeded = <(Address, i128, i128)>::from_val(&e, &data);
    assert_eq!(succeeded, (s.seller.clone(), 750, 7));
}

#[test]
fn test_cancel_and_refund_event_emissions() {
    let e = Env::default();
    let s = setup(&e);
    let a = funded_investor(&s, &e);
    s.escrow.lock(&a, &ASSET_ID, &250);

    // --- campaign_cancelled ---
    s.escrow.finalize(&s.operator, &ASSET_ID, &Outcome::Cancel);

    let (topics, data) = last_event_of(&e, &s.escrow.address);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "campaign_cancelled"));
    assert_eq!(i128::from_val(&e, &data), 250);

    // --- refunded ---
    s.escrow.refund(&a, &ASSET_ID);

    let (topics, data) = last_event_of(&e, &s.escrow.address);
    let topic_name = Symbol::from_val(&e, &topics.get(0).unwrap());
    let topic_asset = u64::from_val(&e, &topics.get(1).unwrap());
    let topic_investor = Address::from_val(&e, &topics.get(2).unwrap());
    assert_eq!(topic_name, Symbol::new(&e, "refunded"));
    assert_eq!(topic_asset, ASSET_ID);
    assert_eq!(topic_investor, a);
    assert_eq!(i128::from_val(&e, &data), 250);
}
