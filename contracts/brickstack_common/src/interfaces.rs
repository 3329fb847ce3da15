//! Client-side views of the contracts that call into each other.
//!
//! Each trait mirrors the exported signature of the contract that implements
//! it; `#[contractclient]` generates the matching `*Client` used for the
//! cross-contract call. Contracts only depend on these traits, never on each
//! other's crates, so any contract exposing the same functions can be wired in.

use crate::types::AssetConfig;
use brickstack_errors::ContractError;
use soroban_sdk::{contractclient, Address, Env};

/// The share ledger as seen by the escrow, the vault and the exchange.
#[contractclient(name = "ShareLedgerClient")]
pub trait ShareLedgerInterface {
    fn balance_of(env: Env, asset_id: u64, holder: Address) -> i128;

    fn total_supply(env: Env, asset_id: u64) -> i128;

    fn asset_config(env: Env, asset_id: u64) -> Result<AssetConfig, ContractError>;

    /// Whether the transfer policy lets `holder` receive shares.
    fn can_receive(env: Env, holder: Address) -> bool;

    /// True for the escrow authority and every authorized minter.
    fn is_minter(env: Env, account: Address) -> bool;

    fn mint(
        env: Env,
        minter: Address,
        asset_id: u64,
        to: Address,
        units: i128,
    ) -> Result<(), ContractError>;

    fn transfer(
        env: Env,
        asset_id: u64,
        from: Address,
        to: Address,
        units: i128,
    ) -> Result<(), ContractError>;
}

/// Binary eligibility check. Implemented by the allow-list used for ledger
/// transfers and by the balance gate used for campaign contributions.
#[contractclient(name = "EligibilityPolicyClient")]
pub trait EligibilityPolicy {
    fn check(env: Env, holder: Address) -> bool;
}

/// Receives a holder's balance just before the ledger changes it.
///
/// The yield vault implements this to checkpoint entitlement so units that
/// arrive after a deposit never earn from it.
#[contractclient(name = "DistributionHookClient")]
pub trait DistributionHook {
    fn on_balance_change(
        env: Env,
        asset_id: u64,
        holder: Address,
        prior_balance: i128,
    ) -> Result<(), ContractError>;
}

/// Read an asset config through the ledger, surfacing the ledger's error code.
pub fn read_asset(ledger: &ShareLedgerClient, asset_id: u64) -> Result<AssetConfig, ContractError> {
    match ledger.try_asset_config(&asset_id) {
        Ok(Ok(config)) => Ok(config),
        Err(Ok(err)) => Err(err),
        _ => Err(ContractError::AssetNotFound),
    }
}

/// Evaluate an optional policy. No policy configured means everyone passes.
pub fn policy_allows(env: &Env, policy: &Option<Address>, holder: &Address) -> bool {
    match policy {
        Some(policy) => EligibilityPolicyClient::new(env, policy).check(holder),
        None => true,
    }
}
