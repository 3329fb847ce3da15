//! Share Exchange Contract
//!
//! One constant-product pool per asset, pairing the asset's shares (held on
//! the share ledger) with a stable settlement token. See [`amm`] for the
//! pricing rule.
//!
//! ## Key design decisions
//!
//! - **Single-sided custody**: the exchange holds both reserves itself, so it
//!   must be eligible to hold shares under the ledger's transfer policy.
//! - **Pre-validated transfers**: every condition the ledger or token would
//!   reject (recipient eligibility, balances, allowances) is checked here
//!   first, so callers see this contract's error codes.
//! - **Read once, write once**: each swap loads the pool, computes the new
//!   reserves, and saves them before any value moves.
//! - **Pool-held shares accrue yield** like any other holder's. Nothing
//!   claims it, so it stays in the vault.

#![no_std]

mod amm;
mod events;
mod types;

pub use types::Pool;

use brickstack_common::interfaces::read_asset;
use brickstack_common::ttl::{BUMP_TARGET, BUMP_THRESHOLD};
use brickstack_common::validation::require_positive;
use brickstack_common::{math, token, ContractError, ShareLedgerClient};
use soroban_sdk::{contract, contractimpl, Address, Env, Vec};
use types::DataKey;

#[cfg(test)]
mod test_amm;


// ─── Helpers ───────────────────────────────────────────────────────────────

fn read_instance(e: &Env, key: &DataKey) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

fn ledger_client(e: &Env) -> Result<ShareLedgerClient<'_>, ContractError> {
    Ok(ShareLedgerClient::new(e, &read_instance(e, &DataKey::Ledger)?))
}

fn load_pool(e: &Env, asset_id: u64) -> Result<Pool, ContractError> {
    let key = DataKey::Pool(asset_id);
    let storage = e.storage().persistent();
    let pool: Pool = storage.get(&key).ok_or(ContractError::PoolNotFound)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(pool)
}

fn save_pool(e: &Env, pool: &Pool) {
    let key = DataKey::Pool(pool.asset_id);
    e.storage().persistent().set(&key, pool);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn read_pool_ids(e: &Env) -> Vec<u64> {
    e.storage()
        .instance()
        .get(&DataKey::PoolIds)
        .unwrap_or_else(|| Vec::new(e))
}

fn require_output(amount_out: i128, min_out: i128) -> Result<(), ContractError> {
    if amount_out <= 0 {
        return Err(ContractError::InsufficientOutput);
    }
    if amount_out < min_out {
        return Err(ContractError::SlippageExceeded);
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct ShareExchange;

#[contractimpl]
impl ShareExchange {
    pub fn initialize(
        e: Env,
        admin: Address,
        ledger: Address,
        stable_token: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        e.storage()
            .instance()
            .set(&DataKey::StableToken, &stable_token);
        Ok(())
    }

    /// Seed the pool for `asset_id` with `share_units` shares and
    /// `stable_units` of the stable token, both taken from `provider`.
    ///
    /// Errors: `AlreadyExists`, `InvalidAmount`, `InvalidFee`
    /// (`fee_bps >= 10_000`), `AssetNotFound`, `InsufficientBalance`,
    /// `NotAllowed`, `InsufficientAllowance`.
    pub fn create_pool(
        e: Env,
        provider: Address,
        asset_id: u64,
        share_units: i128,
        stable_units: i128,
        fee_bps: u32,
    ) -> Result<Pool, ContractError> {
        provider.require_auth();
        if e.storage().persistent().has(&DataKey::Pool(asset_id)) {
            return Err(ContractError::AlreadyExists);
        }
        require_positive(share_units)?;
        require_positive(stable_units)?;
        if i128::from(fee_bps) >= math::BPS_DENOMINATOR {
            return Err(ContractError::InvalidFee);
        }

        let ledger = ledger_client(&e)?;
        read_asset(&ledger, asset_id)?;
        if ledger.balance_of(&asset_id, &provider) < share_units {
            return Err(ContractError::InsufficientBalance);
        }
        let exchange = e.current_contract_address();
        if !ledger.can_receive(&exchange) {
            return Err(ContractError::NotAllowed);
        }
        let stable = read_instance(&e, &DataKey::StableToken)?;
        token::require_allowance(&e, &stable, &provider, stable_units)?;

        let pool = Pool {
            asset_id,
            share_reserve: share_units,
            stable_reserve: stable_units,
            fee_bps,
            creator: provider.clone(),
            created_at: e.ledger().timestamp(),
        };
        save_pool(&e, &pool);
        let mut ids = read_pool_ids(&e);
        ids.push_back(asset_id);
        e.storage().instance().set(&DataKey::PoolIds, &ids);

        ledger.transfer(&asset_id, &provider, &exchange, &share_units);
        token::pull(&e, &stable, &provider, stable_units)?;

        events::emit_pool_created(&e, asset_id, &provider, share_units, stable_units, fee_bps);
        Ok(pool)
    }

    /// Buy shares with `stable_in` of the stable token. Returns the shares
    /// received.
    ///
    /// Errors: `InvalidAmount`, `PoolNotFound`, `InsufficientOutput`,
    /// `SlippageExceeded`, `NotAllowed`, `InsufficientAllowance`.
    pub fn swap_stable_for_shares(
        e: Env,
        trader: Address,
        asset_id: u64,
        stable_in: i128,
        min_shares_out: i128,
    ) -> Result<i128, ContractError> {
        trader.require_auth();
        require_positive(stable_in)?;
        let mut pool = load_pool(&e, asset_id)?;

        let shares_out =
            amm::amount_out(pool.stable_reserve, pool.share_reserve, stable_in, pool.fee_bps)?;
        require_output(shares_out, min_shares_out)?;

        let ledger = ledger_client(&e)?;
        if !ledger.can_receive(&trader) {
            return Err(ContractError::NotAllowed);
        }
        let stable = read_instance(&e, &DataKey::StableToken)?;
        token::require_allowance(&e, &stable, &trader, stable_in)?;

        let (stable_reserve, share_reserve) =
            amm::apply(pool.stable_reserve, pool.share_reserve, stable_in, shares_out)?;
        pool.stable_reserve = stable_reserve;
        pool.share_reserve = share_reserve;
        save_pool(&e, &pool);

        token::pull(&e, &stable, &trader, stable_in)?;
        ledger.transfer(&asset_id, &e.current_contract_address(), &trader, &shares_out);

        events::emit_swap(&e, "swap_stable_for_shares", &trader, stable_in, shares_out, &pool);
        Ok(shares_out)
    }

    /// Sell `shares_in` shares for the stable token. Returns the stable
    /// amount received.
    ///
    /// Errors: `InvalidAmount`, `PoolNotFound`, `InsufficientOutput`,
    /// `SlippageExceeded`, `InsufficientBalance`, `NotAllowed`.
    pub fn swap_shares_for_stable(
        e: Env,
        trader: Address,
        asset_id: u64,
        shares_in: i128,
        min_stable_out: i128,
    ) -> Result<i128, ContractError> {
        trader.require_auth();
        require_positive(shares_in)?;
        let mut pool = load_pool(&e, asset_id)?;

        let stable_out =
            amm::amount_out(pool.share_reserve, pool.stable_reserve, shares_in, pool.fee_bps)?;
        require_output(stable_out, min_stable_out)?;

        let ledger = ledger_client(&e)?;
        if ledger.balance_of(&asset_id, &trader) < shares_in {
            return Err(ContractError::InsufficientBalance);
        }
        let exchange = e.current_contract_address();
        if !ledger.can_receive(&exchange) {
            return Err(ContractError::NotAllowed);
        }

        let (share_reserve, stable_reserve) =
            amm::apply(pool.share_reserve, pool.stable_reserve, shares_in, stable_out)?;
        pool.share_reserve = share_reserve;
        pool.stable_reserve = stable_reserve;
        save_pool(&e, &pool);

        ledger.transfer(&asset_id, &trader, &exchange, &shares_in);
        let stable = read_instance(&e, &DataKey::StableToken)?;
        token::pay(&e, &stable, &trader, stable_out)?;

        events::emit_swap(&e, "swap_shares_for_stable", &trader, shares_in, stable_out, &pool);
        Ok(stable_out)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_pool(e: Env, asset_id: u64) -> Result<Pool, ContractError> {
        load_pool(&e, asset_id)
    }

    /// Shares a swap of `stable_in` would return right now.
    pub fn quote_stable_for_shares(
        e: Env,
        asset_id: u64,
        stable_in: i128,
    ) -> Result<i128, ContractError> {
        require_positive(stable_in)?;
        let pool = load_pool(&e, asset_id)?;
        amm::amount_out(pool.stable_reserve, pool.share_reserve, stable_in, pool.fee_bps)
    }

    /// Stable token a swap of `shares_in` would return right now.
    pub fn quote_shares_for_stable(
        e: Env,
        asset_id: u64,
        shares_in: i128,
    ) -> Result<i128, ContractError> {
        require_positive(shares_in)?;
        let pool = load_pool(&e, asset_id)?;
        amm::amount_out(pool.share_reserve, pool.stable_reserve, shares_in, pool.fee_bps)
    }

    pub fn pool_ids(e: Env) -> Vec<u64> {
        read_pool_ids(&e)
    }

    pub fn get_ledger(e: Env) -> Result<Address, ContractError> {
        read_instance(&e, &DataKey::Ledger)
    }

    pub fn get_stable_token(e: Env) -> Result<Address, ContractError> {
        read_instance(&e, &DataKey::StableToken)
    }
}
