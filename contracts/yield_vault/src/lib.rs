//! Yield Vault Contract
//!
//! Distributes rental income for an asset to its shareholders in proportion
//! to their ledger balances, using a reward-per-share accumulator:
//!
//! ```text
//! deposit:  acc_per_unit += amount * SCALE / total_supply
//! pending:  carry + (acc_per_unit - last_acc) * balance / SCALE
//! ```
//!
//! The vault must be installed as the share ledger's distribution hook. The
//! ledger then reports each holder's balance just before it changes, and the
//! vault folds what that balance earned into `carry`. Units acquired after a
//! deposit therefore never earn from it.
//!
//! Every division rounds down, so the vault never pays out more than was
//! deposited. The remainder stays in the vault as dust.

#![no_std]

mod events;
mod types;

pub use types::{Distribution, HolderCheckpoint, SCALE};

use brickstack_common::ttl::{BUMP_TARGET, BUMP_THRESHOLD};
use brickstack_common::validation::require_positive;
use brickstack_common::{math, token, ContractError, ShareLedgerClient};
use soroban_sdk::{contract, contractimpl, log, Address, Env};
use types::DataKey;


// ─── Storage ───────────────────────────────────────────────────────────────

fn read_instance(e: &Env, key: &DataKey) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(key)
        .ok_or(ContractError::NotInitialized)
}

fn load_distribution(e: &Env, asset_id: u64) -> Distribution {
    let key = DataKey::Distribution(asset_id);
    let storage = e.storage().persistent();
    match storage.get::<_, Distribution>(&key) {
        Some(dist) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            dist
        }
        None => Distribution::default(),
    }
}

fn save_distribution(e: &Env, asset_id: u64, dist: &Distribution) {
    let key = DataKey::Distribution(asset_id);
    e.storage().persistent().set(&key, dist);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

fn load_checkpoint(e: &Env, asset_id: u64, holder: &Address) -> HolderCheckpoint {
    let key = DataKey::Checkpoint(asset_id, holder.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, HolderCheckpoint>(&key) {
        Some(cp) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            cp
        }
        None => HolderCheckpoint::default(),
    }
}

fn save_checkpoint(e: &Env, asset_id: u64, holder: &Address, cp: &HolderCheckpoint) {
    let key = DataKey::Checkpoint(asset_id, holder.clone());
    e.storage().persistent().set(&key, cp);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

// ─── Accumulator math ──────────────────────────────────────────────────────

/// Entitlement accrued by `balance` units since `cp` was last settled.
fn accrued(dist: &Distribution, cp: &HolderCheckpoint, balance: i128) -> Result<i128, ContractError> {
    let delta = math::sub(dist.acc_per_unit, cp.last_acc)?;
    math::mul_div_floor(delta, balance, SCALE)
}

fn pending(dist: &Distribution, cp: &HolderCheckpoint, balance: i128) -> Result<i128, ContractError> {
    math::add(cp.carry, accrued(dist, cp, balance)?)
}

fn ledger_client(e: &Env) -> Result<ShareLedgerClient<'_>, ContractError> {
    Ok(ShareLedgerClient::new(e, &read_instance(e, &DataKey::Ledger)?))
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct YieldVault;

#[contractimpl]
impl YieldVault {
    pub fn initialize(
        e: Env,
        admin: Address,
        ledger: Address,
        settlement_token: Address,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        e.storage()
            .instance()
            .set(&DataKey::SettlementToken, &settlement_token);
        Ok(())
    }

    /// Deposit `amount` of the settlement token as income for `asset_id`,
    /// split across the current supply.
    ///
    /// Errors: `InvalidAmount`, `NoSupply`, `InsufficientAllowance`.
    pub fn deposit_yield(
        e: Env,
        depositor: Address,
        asset_id: u64,
        amount: i128,
    ) -> Result<(), ContractError> {
        depositor.require_auth();
        require_positive(amount)?;
        let supply = ledger_client(&e)?.total_supply(&asset_id);
        if supply == 0 {
            return Err(ContractError::NoSupply);
        }
        let settlement = read_instance(&e, &DataKey::SettlementToken)?;
        token::require_allowance(&e, &settlement, &depositor, amount)?;

        let increment = math::mul_div_floor(amount, SCALE, supply)?;
        if math::mul(amount, SCALE)? % supply != 0 {
            log!(&e, "deposit leaves rounding dust", asset_id, amount, supply);
        }

        let mut dist = load_distribution(&e, asset_id);
        dist.acc_per_unit = math::add(dist.acc_per_unit, increment)?;
        dist.total_deposited = math::add(dist.total_deposited, amount)?;
        save_distribution(&e, asset_id, &dist);

        token::pull(&e, &settlement, &depositor, amount)?;

        events::emit_yield_deposited(&e, asset_id, &depositor, amount, dist.acc_per_unit);
        Ok(())
    }

    pub fn pending_yield(e: Env, asset_id: u64, holder: Address) -> Result<i128, ContractError> {
        let balance = ledger_client(&e)?.balance_of(&asset_id, &holder);
        pending(
            &load_distribution(&e, asset_id),
            &load_checkpoint(&e, asset_id, &holder),
            balance,
        )
    }

    /// Pay out everything `holder` is owed for `asset_id`. Returns the amount
    /// paid; zero when nothing is pending, in which case nothing changes.
    ///
    /// Errors: `ClaimExceedsDeposits` when paying would take the asset's
    /// claimed total past what was deposited for it.
    pub fn claim_yield(e: Env, holder: Address, asset_id: u64) -> Result<i128, ContractError> {
        holder.require_auth();
        let balance = ledger_client(&e)?.balance_of(&asset_id, &holder);
        let mut dist = load_distribution(&e, asset_id);
        let cp = load_checkpoint(&e, asset_id, &holder);
        let amount = pending(&dist, &cp, balance)?;
        if amount == 0 {
            return Ok(0);
        }
        // Balances that changed while the vault was not the ledger's hook can
        // over-state an entitlement. Never pay out another asset's yield.
        let total_claimed = math::add(dist.total_claimed, amount)?;
        if total_claimed > dist.total_deposited {
            log!(&e, "claim exceeds deposited yield", asset_id, holder, amount);
            return Err(ContractError::ClaimExceedsDeposits);
        }

        // CEI: checkpoint before paying.
        let settled = HolderCheckpoint {
            last_acc: dist.acc_per_unit,
            carry: 0,
        };
        save_checkpoint(&e, asset_id, &holder, &settled);
        dist.total_claimed = total_claimed;
        save_distribution(&e, asset_id, &dist);

        let settlement = read_instance(&e, &DataKey::SettlementToken)?;
        token::pay(&e, &settlement, &holder, amount)?;

        events::emit_yield_claimed(&e, asset_id, &holder, amount);
        Ok(amount)
    }

    /// Ledger callback: `holder`'s balance is about to change from
    /// `prior_balance`. Settles what that balance earned into `carry`.
    pub fn on_balance_change(
        e: Env,
        asset_id: u64,
        holder: Address,
        prior_balance: i128,
    ) -> Result<(), ContractError> {
        let ledger = read_instance(&e, &DataKey::Ledger)?;
        ledger.require_auth();

        let dist = load_distribution(&e, asset_id);
        let mut cp = load_checkpoint(&e, asset_id, &holder);
        cp.carry = pending(&dist, &cp, prior_balance)?;
        cp.last_acc = dist.acc_per_unit;
        save_checkpoint(&e, asset_id, &holder, &cp);
        Ok(())
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_distribution(e: Env, asset_id: u64) -> Distribution {
        load_distribution(&e, asset_id)
    }

    pub fn get_holder_checkpoint(e: Env, asset_id: u64, holder: Address) -> HolderCheckpoint {
        load_checkpoint(&e, asset_id, &holder)
    }

    pub fn get_ledger(e: Env) -> Result<Address, ContractError> {
        read_instance(&e, &DataKey::Ledger)
    }

    pub fn get_settlement_token(e: Env) -> Result<Address, ContractError> {
        read_instance(&e, &DataKey::SettlementToken)
    }
}
