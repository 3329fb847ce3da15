//! Share Ledger Contract
//!
//! Authoritative record of how many fractional units of each asset every
//! account holds. Every other BrickStack contract re-reads balances from here;
//! none of them keeps a copy.
//!
//! ## Key design decisions
//!
//! - **Capped, gated minting**: only the escrow authority or an explicitly
//!   authorized minter may mint, and never past `max_shares`.
//! - **Pluggable transfer policy**: recipients are checked through the shared
//!   `check(holder)` interface. No policy configured means unrestricted.
//! - **Burn is the sentinel path**: destroying units is never policy-gated.
//! - **Validate, notify, then write**: all checks run before any storage write;
//!   the distribution hook sees each holder's prior balance before it changes.
//! - **Supply conservation**: the sum of balances equals `total_supply` for
//!   every asset; all arithmetic is checked and fails closed.

#![no_std]

mod events;
mod storage;

use brickstack_common::interfaces::policy_allows;
use brickstack_common::validation::{require_bps, require_positive};
use brickstack_common::{math, AssetConfig, ContractError, DistributionHookClient};
use soroban_sdk::{contract, contractimpl, Address, Env, String, Vec};
use storage::DataKey;

#[cfg(test)]
mod test_helpers;


// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if storage::read_admin(e)? != *caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn has_mint_right(e: &Env, caller: &Address) -> bool {
    if storage::read_optional_address(e, &DataKey::Escrow).as_ref() == Some(caller) {
        return true;
    }
    e.storage()
        .instance()
        .get(&DataKey::Minter(caller.clone()))
        .unwrap_or(false)
}

fn notify_hook(e: &Env, asset_id: u64, holder: &Address, prior_balance: i128) {
    if let Some(hook) = storage::read_optional_address(e, &DataKey::DistributionHook) {
        DistributionHookClient::new(e, &hook).on_balance_change(&asset_id, holder, &prior_balance);
    }
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct ShareLedger;

#[contractimpl]
impl ShareLedger {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. `transfer_policy` may be `None` for an
    /// unrestricted ledger.
    pub fn initialize(
        e: Env,
        admin: Address,
        transfer_policy: Option<Address>,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &admin);
        storage::write_optional_address(&e, &DataKey::TransferPolicy, &transfer_policy);
        Ok(())
    }

    /// Register a new asset. Issuance terms are immutable afterwards except
    /// for the metadata pointer.
    pub fn create_asset(
        e: Env,
        admin: Address,
        asset_id: u64,
        max_shares: i128,
        unit_price: i128,
        yield_bps: u32,
        metadata_uri: String,
    ) -> Result<AssetConfig, ContractError> {
        require_admin(&e, &admin)?;
        if storage::has_asset(&e, asset_id) {
            return Err(ContractError::AlreadyExists);
        }
        require_positive(max_shares)?;
        require_positive(unit_price)?;
        require_bps(yield_bps)?;

        let config = AssetConfig {
            asset_id,
            max_shares,
            unit_price,
            yield_bps,
            metadata_uri,
            created_at: e.ledger().timestamp(),
        };
        storage::save_asset(&e, &config);

        let mut ids = storage::read_asset_ids(&e);
        ids.push_back(asset_id);
        e.storage().instance().set(&DataKey::AssetIds, &ids);

        events::emit_asset_created(&e, asset_id, max_shares, unit_price);
        Ok(config)
    }

    pub fn set_metadata_uri(
        e: Env,
        admin: Address,
        asset_id: u64,
        uri: String,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        let mut config = storage::load_asset(&e, asset_id)?;
        config.metadata_uri = uri.clone();
        storage::save_asset(&e, &config);
        events::emit_metadata_set(&e, asset_id, &uri);
        Ok(())
    }

    /// Designate the escrow authority. Replaces any previous escrow.
    pub fn set_escrow(e: Env, admin: Address, escrow: Address) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        e.storage().instance().set(&DataKey::Escrow, &escrow);
        events::emit_escrow_set(&e, &escrow);
        Ok(())
    }

    /// Grant or revoke an auxiliary mint right.
    pub fn set_minter(
        e: Env,
        admin: Address,
        minter: Address,
        enabled: bool,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        let key = DataKey::Minter(minter.clone());
        if enabled {
            e.storage().instance().set(&key, &true);
        } else {
            e.storage().instance().remove(&key);
        }
        events::emit_minter_set(&e, &minter, enabled);
        Ok(())
    }

    pub fn set_transfer_policy(
        e: Env,
        admin: Address,
        policy: Option<Address>,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        storage::write_optional_address(&e, &DataKey::TransferPolicy, &policy);
        Ok(())
    }

    /// Set the contract notified of prior balances (normally the yield vault).
    pub fn set_distribution_hook(
        e: Env,
        admin: Address,
        hook: Option<Address>,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        storage::write_optional_address(&e, &DataKey::DistributionHook, &hook);
        Ok(())
    }

    // ── Balance mutations ──────────────────────────────────────────────────

    /// Mint `units` of `asset_id` to `to`.
    ///
    /// Errors: `Unauthorized` unless `minter` is the escrow or an authorized
    /// minter; `InvalidAmount`; `AssetNotFound`; `SupplyCapExceeded`;
    /// `Overflow`.
    pub fn mint(
        e: Env,
        minter: Address,
        asset_id: u64,
        to: Address,
        units: i128,
    ) -> Result<(), ContractError> {
        minter.require_auth();
        if !has_mint_right(&e, &minter) {
            return Err(ContractError::Unauthorized);
        }
        require_positive(units)?;
        let config = storage::load_asset(&e, asset_id)?;

        let new_supply = math::add(storage::read_supply(&e, asset_id), units)?;
        if new_supply > config.max_shares {
            return Err(ContractError::SupplyCapExceeded);
        }
        let balance = storage::read_balance(&e, asset_id, &to);
        let new_balance = math::add(balance, units)?;

        notify_hook(&e, asset_id, &to, balance);

        storage::write_balance(&e, asset_id, &to, new_balance);
        storage::write_supply(&e, asset_id, new_supply);

        events::emit_shares_minted(&e, asset_id, &minter, &to, units, new_supply);
        Ok(())
    }

    /// Move `units` from `from` to `to`.
    ///
    /// Errors: `InvalidAmount`; `AssetNotFound`; `InsufficientBalance`;
    /// `NotAllowed` when the transfer policy rejects `to`.
    pub fn transfer(
        e: Env,
        asset_id: u64,
        from: Address,
        to: Address,
        units: i128,
    ) -> Result<(), ContractError> {
        from.require_auth();
        require_positive(units)?;
        storage::load_asset(&e, asset_id)?;

        let from_balance = storage::read_balance(&e, asset_id, &from);
        if from_balance < units {
            return Err(ContractError::InsufficientBalance);
        }
        let policy = storage::read_optional_address(&e, &DataKey::TransferPolicy);
        if !policy_allows(&e, &policy, &to) {
            return Err(ContractError::NotAllowed);
        }
        if from == to {
            events::emit_shares_transferred(&e, asset_id, &from, &to, units);
            return Ok(());
        }
        let to_balance = storage::read_balance(&e, asset_id, &to);
        let new_to_balance = math::add(to_balance, units)?;
        let new_from_balance = math::sub(from_balance, units)?;

        notify_hook(&e, asset_id, &from, from_balance);
        notify_hook(&e, asset_id, &to, to_balance);

        storage::write_balance(&e, asset_id, &from, new_from_balance);
        storage::write_balance(&e, asset_id, &to, new_to_balance);

        events::emit_shares_transferred(&e, asset_id, &from, &to, units);
        Ok(())
    }

    /// Destroy `units` held by `from`, reducing total supply.
    pub fn burn(e: Env, asset_id: u64, from: Address, units: i128) -> Result<(), ContractError> {
        from.require_auth();
        require_positive(units)?;
        storage::load_asset(&e, asset_id)?;

        let balance = storage::read_balance(&e, asset_id, &from);
        if balance < units {
            return Err(ContractError::InsufficientBalance);
        }
        let new_balance = math::sub(balance, units)?;
        let new_supply = math::sub(storage::read_supply(&e, asset_id), units)?;

        notify_hook(&e, asset_id, &from, balance);

        storage::write_balance(&e, asset_id, &from, new_balance);
        storage::write_supply(&e, asset_id, new_supply);

        events::emit_shares_burned(&e, asset_id, &from, units, new_supply);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn balance_of(e: Env, asset_id: u64, holder: Address) -> i128 {
        storage::read_balance(&e, asset_id, &holder)
    }

    pub fn total_supply(e: Env, asset_id: u64) -> i128 {
        storage::read_supply(&e, asset_id)
    }

    pub fn asset_config(e: Env, asset_id: u64) -> Result<AssetConfig, ContractError> {
        storage::load_asset(&e, asset_id)
    }

    pub fn asset_exists(e: Env, asset_id: u64) -> bool {
        storage::has_asset(&e, asset_id)
    }

    pub fn max_shares(e: Env, asset_id: u64) -> Result<i128, ContractError> {
        Ok(storage::load_asset(&e, asset_id)?.max_shares)
    }

    pub fn unit_price(e: Env, asset_id: u64) -> Result<i128, ContractError> {
        Ok(storage::load_asset(&e, asset_id)?.unit_price)
    }

    /// All asset ids in creation order.
    pub fn asset_ids(e: Env) -> Vec<u64> {
        storage::read_asset_ids(&e)
    }

    /// True for the escrow authority and every authorized minter.
    pub fn is_minter(e: Env, account: Address) -> bool {
        has_mint_right(&e, &account)
    }

    pub fn can_receive(e: Env, holder: Address) -> bool {
        let policy = storage::read_optional_address(&e, &DataKey::TransferPolicy);
        policy_allows(&e, &policy, &holder)
    }

    pub fn get_escrow(e: Env) -> Option<Address> {
        storage::read_optional_address(&e, &DataKey::Escrow)
    }

    pub fn get_transfer_policy(e: Env) -> Option<Address> {
        storage::read_optional_address(&e, &DataKey::TransferPolicy)
    }

    pub fn get_distribution_hook(e: Env) -> Option<Address> {
        storage::read_optional_address(&e, &DataKey::DistributionHook)
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        storage::read_admin(&e)
    }
}
