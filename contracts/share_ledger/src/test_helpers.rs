//! Shared test helpers for share_ledger tests.

#![cfg(test)]

use crate::{ShareLedger, ShareLedgerClient};
use allow_list::{AllowList, AllowListClient};
use soroban_sdk::testutils::Address as _;
use soroban_sdk::{Address, Env, String};

pub const ASSET_ID: u64 = 1;
pub const MAX_SHARES: i128 = 1_000;
pub const UNIT_PRICE: i128 = 100;
pub const YIELD_BPS: u32 = 500;

pub struct Setup<'a> {
    pub ledger: ShareLedgerClient<'a>,
    pub policy: AllowListClient<'a>,
    pub admin: Address,
    pub escrow: Address,
}

/// Deploys the ledger behind an allow-list policy, registers `ASSET_ID` and
/// designates a generated escrow address.
pub fn setup(e: &Env) -> Setup<'_> {
    e.mock_all_auths();

    let admin = Address::generate(e);
    let escrow = Address::generate(e);

    let policy_id = e.register(AllowList, ());
    let policy = AllowListClient::new(e, &policy_id);
    policy.initialize(&admin);

    let ledger_id = e.register(ShareLedger, ());
    let ledger = ShareLedgerClient::new(e, &ledger_id);
    ledger.initialize(&admin, &Some(policy_id));
    ledger.create_asset(
        &admin,
        &ASSET_ID,
        &MAX_SHARES,
        &UNIT_PRICE,
        &YIELD_BPS,
        &String::from_str(e, "ipfs://asset-1"),
    );
    ledger.set_escrow(&admin, &escrow);

    Setup {
        ledger,
        policy,
        admin,
        escrow,
    }
}

/// Generate a holder that is already on the allow-list.
pub fn allowed_holder(s: &Setup, e: &Env) -> Address {
    let holder = Address::generate(e);
    s.policy.set_allowed(&s.admin, &holder, &true);
    holder
}
