//! Shared test helpers for crowdfund_escrow tests.

#![cfg(test)]

use crate::{CrowdfundEscrow, CrowdfundEscrowClient, EscrowConfig};
use share_ledger::{ShareLedger, ShareLedgerClient};
use soroban_sdk::testutils::{Address as _, Ledger};
use soroban_sdk::token::{StellarAssetClient, TokenClient};
use soroban_sdk::{Address, Env, String};

pub const ASSET_ID: u64 = 1;
pub const MAX_SHARES: i128 = 1_000;
pub const UNIT_PRICE: i128 = 100;
pub const TARGET: i128 = 1_000;

/// Ledger timestamp at setup.
pub const START: u64 = 1_000;
/// One week in seconds.
pub const ONE_WEEK: u64 = 604_800;
pub const DEADLINE: u64 = START + ONE_WEEK;

/// Default mint: large enough for all test scenarios.
pub const DEFAULT_MINT: i128 = 1_000_000;

pub struct Setup<'a> {
    pub escrow: CrowdfundEscrowClient<'a>,
    pub ledger: ShareLedgerClient<'a>,
    pub token: TokenClient<'a>,
    pub token_admin: StellarAssetClient<'a>,
    pub admin: Address,
    pub operator: Address,
    pub seller: Address,
}

pub fn setup(e: &Env) -> Setup<'_> {
    setup_with_config(
        e,
        EscrowConfig {
            gate: None,
            require_target: false,
        },
    )
}

/// Deploys ledger, funding token and escrow, wires the escrow in as the
/// ledger's mint authority and opens a campaign for `ASSET_ID`.
pub fn setup_with_config(e: &Env, config: EscrowConfig) -> Setup<'_> {
    e.mock_all_auths();
    e.ledger().with_mut(|li| li.timestamp = START);

    let admin = Address::generate(e);
    let operator = Address::generate(e);
    let seller = Address::generate(e);

    let ledger_id = e.register(ShareLedger, ());
    let ledger = ShareLedgerClient::new(e, &ledger_id);
    ledger.initialize(&admin, &None);
    ledger.create_asset(
        &admin,
        &ASSET_ID,
        &MAX_SHARES,
        &UNIT_PRICE,
        &500,
        &String::from_str(e, "ipfs://asset-1"),
    );

    let stellar_asset = e
        .register_stellar_asset_contract_v2(admin.clone())
        .address();
    let token_admin = StellarAssetClient::new(e, &stellar_asset);
    let token = TokenClient::new(e, &stellar_asset);

    let escrow_id = e.register(CrowdfundEscrow, ());
    let escrow = CrowdfundEscrowClient::new(e, &escrow_id);
    escrow.initialize(&admin, &ledger_id, &stellar_asset, &config);
    escrow.set_operator(&admin, &operator, &true);
    ledger.set_escrow(&admin, &escrow_id);

    escrow.propose(
        &operator,
        &ASSET_ID,
        &seller,
        &TARGET,
        &DEADLINE,
        &String::from_str(e, "Harbour Street duplex"),
    );

    Setup {
        escrow,
        ledger,
        token,
        token_admin,
        admin,
        operator,
        seller,
    }
}

/// Generate an investor holding `DEFAULT_MINT` funding tokens, with the
/// escrow approved to pull all of them.
pub fn funded_investor(s: &Setup, e: &Env) -> Address {
    let investor = Address::generate(e);
    s.token_admin.mint(&investor, &DEFAULT_MINT);
    let expiry_ledger = e.ledger().sequence().saturating_add(10_000);
    s.token
        .approve(&investor, &s.escrow.address, &DEFAULT_MINT, &expiry_ledger);
    investor
}
