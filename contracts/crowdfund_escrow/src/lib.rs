//! Crowdfunding Escrow Contract
//!
//! Runs one campaign per asset: investors lock the funding token until an
//! operator resolves the campaign. On success the seller is paid everything
//! locked and every investor receives `floor(lock / unit_price)` shares from
//! the share ledger. On cancellation each investor reclaims their own lock.
//!
//! ## Key design decisions
//!
//! - **Funding → Succeeded | Cancelled**: `finalized` is set exactly once;
//!   nothing but `refund` touches a finalized campaign.
//! - **Checks-Effects-Interactions**: state is written before tokens move and
//!   before shares are minted.
//! - **Early cap rejection**: a lock that would push the campaign's share
//!   allocation past `max_shares` is refused up front instead of failing the
//!   whole resolution later.
//! - **Gated contributions**: an optional eligibility policy decides who may
//!   lock funds; the ledger's own transfer policy is not consulted for mints.
//! - **Rounding dust**: `lock % unit_price` is paid to the seller with the
//!   rest and buys no shares.

#![no_std]

mod events;
mod storage;
mod types;

pub use types::{Campaign, EscrowConfig, Outcome};

use brickstack_common::interfaces::{policy_allows, read_asset};
use brickstack_common::validation::require_positive;
use brickstack_common::{math, token, ContractError, ShareLedgerClient};
use soroban_sdk::{contract, contractimpl, log, Address, Env, String, Vec};
use types::DataKey;

#[cfg(test)]
mod test_helpers;


#[cfg(test)]
mod test_events;

// ─── Helpers ───────────────────────────────────────────────────────────────

fn require_admin(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if storage::read_admin(e)? != *caller {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn has_operator_right(e: &Env, account: &Address) -> Result<bool, ContractError> {
    if storage::read_admin(e)? == *account {
        return Ok(true);
    }
    Ok(e.storage()
        .instance()
        .get(&DataKey::Operator(account.clone()))
        .unwrap_or(false))
}

fn require_operator(e: &Env, caller: &Address) -> Result<(), ContractError> {
    caller.require_auth();
    if !has_operator_right(e, caller)? {
        return Err(ContractError::Unauthorized);
    }
    Ok(())
}

fn ledger_client(e: &Env) -> Result<ShareLedgerClient<'_>, ContractError> {
    Ok(ShareLedgerClient::new(e, &storage::read_ledger(e)?))
}

/// Units owed to every investor if the campaign succeeded now, in
/// first-lock order, plus their total.
fn allocations(
    e: &Env,
    asset_id: u64,
    unit_price: i128,
) -> Result<(Vec<(Address, i128)>, i128), ContractError> {
    let mut out = Vec::new(e);
    let mut total = 0_i128;
    for investor in storage::read_investors(e, asset_id).iter() {
        let units = math::div(storage::read_lock(e, asset_id, &investor), unit_price)?;
        total = math::add(total, units)?;
        out.push_back((investor, units));
    }
    Ok((out, total))
}

fn require_within_cap(
    ledger: &ShareLedgerClient,
    asset_id: u64,
    max_shares: i128,
    units: i128,
) -> Result<(), ContractError> {
    if math::add(ledger.total_supply(&asset_id), units)? > max_shares {
        return Err(ContractError::SupplyCapExceeded);
    }
    Ok(())
}

// ─── Contract ──────────────────────────────────────────────────────────────

#[contract]
pub struct CrowdfundEscrow;

#[contractimpl]
impl CrowdfundEscrow {
    // ── Admin setup ────────────────────────────────────────────────────────

    /// One-time initialization. The escrow must also be designated as the
    /// ledger's escrow authority before any campaign can succeed.
    pub fn initialize(
        e: Env,
        admin: Address,
        ledger: Address,
        funding_token: Address,
        config: EscrowConfig,
    ) -> Result<(), ContractError> {
        if e.storage().instance().has(&DataKey::Admin) {
            return Err(ContractError::AlreadyInitialized);
        }
        admin.require_auth();
        e.storage().instance().set(&DataKey::Admin, &admin);
        e.storage().instance().set(&DataKey::Ledger, &ledger);
        e.storage()
            .instance()
            .set(&DataKey::FundingToken, &funding_token);
        e.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    pub fn set_operator(
        e: Env,
        admin: Address,
        operator: Address,
        enabled: bool,
    ) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        let key = DataKey::Operator(operator.clone());
        if enabled {
            e.storage().instance().set(&key, &true);
        } else {
            e.storage().instance().remove(&key);
        }
        events::emit_operator_set(&e, &operator, enabled);
        Ok(())
    }

    /// Replace the gate and target policy. Applies to open campaigns too.
    pub fn set_config(e: Env, admin: Address, config: EscrowConfig) -> Result<(), ContractError> {
        require_admin(&e, &admin)?;
        e.storage().instance().set(&DataKey::Config, &config);
        Ok(())
    }

    // ── Campaign lifecycle ─────────────────────────────────────────────────

    /// Open a campaign for an asset registered on the ledger. Contributions
    /// are accepted immediately.
    pub fn propose(
        e: Env,
        operator: Address,
        asset_id: u64,
        seller: Address,
        target_amount: i128,
        deadline: u64,
        description: String,
    ) -> Result<Campaign, ContractError> {
        require_operator(&e, &operator)?;
        if storage::has_campaign(&e, asset_id) {
            return Err(ContractError::AlreadyExists);
        }
        read_asset(&ledger_client(&e)?, asset_id)?;
        require_positive(target_amount)?;
        let now = e.ledger().timestamp();
        if deadline <= now {
            return Err(ContractError::InvalidDeadline);
        }

        let campaign = Campaign {
            asset_id,
            seller: seller.clone(),
            target_amount,
            description,
            total_locked: 0,
            total_raised: 0,
            allocated_units: 0,
            deadline,
            created_at: now,
            finalized: false,
            successful: false,
        };
        storage::save_campaign(&e, &campaign);

        let mut ids = storage::read_asset_ids(&e);
        ids.push_back(asset_id);
        e.storage().instance().set(&DataKey::AssetIds, &ids);

        events::emit_campaign_proposed(&e, asset_id, &seller, target_amount, deadline);
        Ok(campaign)
    }

    /// Lock `amount` of the funding token toward `asset_id`'s campaign.
    ///
    /// The investor must have approved this contract for `amount` beforehand.
    ///
    /// Errors: `CampaignNotFound`, `NotFunding`, `DeadlinePassed`,
    /// `InvalidAmount`, `GateFailed`, `SupplyCapExceeded`,
    /// `InsufficientAllowance`.
    pub fn lock(e: Env, investor: Address, asset_id: u64, amount: i128) -> Result<(), ContractError> {
        investor.require_auth();
        let mut campaign = storage::load_campaign(&e, asset_id)?;
        if campaign.finalized {
            return Err(ContractError::NotFunding);
        }
        if e.ledger().timestamp() > campaign.deadline {
            return Err(ContractError::DeadlinePassed);
        }
        require_positive(amount)?;

        let config = storage::read_config(&e)?;
        if !policy_allows(&e, &config.gate, &investor) {
            log!(&e, "contribution gate rejected investor", investor, asset_id);
            return Err(ContractError::GateFailed);
        }

        let ledger = ledger_client(&e)?;
        let asset = read_asset(&ledger, asset_id)?;
        let prior_lock = storage::read_lock(&e, asset_id, &investor);
        let new_lock = math::add(prior_lock, amount)?;
        let added_units = math::sub(
            math::div(new_lock, asset.unit_price)?,
            math::div(prior_lock, asset.unit_price)?,
        )?;
        let allocated_units = math::add(campaign.allocated_units, added_units)?;
        require_within_cap(&ledger, asset_id, asset.max_shares, allocated_units)?;

        let funding_token = storage::read_funding_token(&e)?;
        token::require_allowance(&e, &funding_token, &investor, amount)?;

        // CEI: record the lock before pulling funds.
        campaign.total_locked = math::add(campaign.total_locked, amount)?;
        campaign.allocated_units = allocated_units;
        storage::save_campaign(&e, &campaign);
        storage::write_lock(&e, asset_id, &investor, new_lock);
        let mut investors = storage::read_investors(&e, asset_id);
        if !investors.contains(&investor) {
            investors.push_back(investor.clone());
            storage::write_investors(&e, asset_id, &investors);
        }

        token::pull(&e, &funding_token, &investor, amount)?;

        events::emit_locked(&e, asset_id, &investor, amount, campaign.total_locked);
        Ok(())
    }

    /// Resolve an open campaign.
    ///
    /// `Success` pays the seller every locked unit of funding and mints each
    /// investor `floor(lock / unit_price)` shares. `Cancel` moves nothing;
    /// investors then call `refund`.
    ///
    /// Errors: `Unauthorized` (also when this escrow has lost its mint
    /// authority on the ledger), `CampaignNotFound`, `NotFunding`,
    /// `TargetNotReached` (only when the target is enforced),
    /// `SupplyCapExceeded`.
    pub fn finalize(
        e: Env,
        operator: Address,
        asset_id: u64,
        outcome: Outcome,
    ) -> Result<(), ContractError> {
        require_operator(&e, &operator)?;
        let mut campaign = storage::load_campaign(&e, asset_id)?;
        if campaign.finalized {
            return Err(ContractError::NotFunding);
        }

        if outcome == Outcome::Cancel {
            campaign.finalized = true;
            campaign.successful = false;
            storage::save_campaign(&e, &campaign);
            events::emit_campaign_cancelled(&e, asset_id, campaign.total_locked);
            return Ok(());
        }

        let config = storage::read_config(&e)?;
        if config.require_target && campaign.total_locked < campaign.target_amount {
            return Err(ContractError::TargetNotReached);
        }

        let ledger = ledger_client(&e)?;
        let escrow = e.current_contract_address();
        if !ledger.is_minter(&escrow) {
            log!(&e, "escrow lacks mint authority on the ledger", asset_id);
            return Err(ContractError::Unauthorized);
        }
        let asset = read_asset(&ledger, asset_id)?;
        let (allocation, units_total) = allocations(&e, asset_id, asset.unit_price)?;
        require_within_cap(&ledger, asset_id, asset.max_shares, units_total)?;

        let raised = campaign.total_locked;
        let dust = math::sub(raised, math::mul(units_total, asset.unit_price)?)?;
        if dust > 0 {
            log!(&e, "campaign rounding dust paid to seller", asset_id, dust);
        }

        // CEI: resolve the campaign before paying out and minting.
        campaign.finalized = true;
        campaign.successful = true;
        campaign.total_raised = raised;
        campaign.total_locked = 0;
        storage::save_campaign(&e, &campaign);

        let funding_token = storage::read_funding_token(&e)?;
        token::pay(&e, &funding_token, &campaign.seller, raised)?;

        for (investor, units) in allocation.iter() {
            if units > 0 {
                ledger.mint(&escrow, &asset_id, &investor, &units);
            }
        }

        events::emit_campaign_succeeded(&e, asset_id, &campaign.seller, raised, units_total);
        Ok(())
    }

    /// Return the caller's full lock from a cancelled campaign.
    ///
    /// Errors: `CampaignNotFound`, `RefundNotAvailable` unless cancelled,
    /// `NothingToRefund` when nothing (or nothing more) is locked.
    pub fn refund(e: Env, investor: Address, asset_id: u64) -> Result<i128, ContractError> {
        investor.require_auth();
        let mut campaign = storage::load_campaign(&e, asset_id)?;
        if !campaign.finalized || campaign.successful {
            return Err(ContractError::RefundNotAvailable);
        }
        let locked = storage::read_lock(&e, asset_id, &investor);
        if locked == 0 {
            return Err(ContractError::NothingToRefund);
        }

        // CEI: zero the lock before paying back.
        storage::write_lock(&e, asset_id, &investor, 0);
        campaign.total_locked = math::sub(campaign.total_locked, locked)?;
        storage::save_campaign(&e, &campaign);

        let funding_token = storage::read_funding_token(&e)?;
        token::pay(&e, &funding_token, &investor, locked)?;

        events::emit_refunded(&e, asset_id, &investor, locked);
        Ok(locked)
    }

    // ── Queries ────────────────────────────────────────────────────────────

    pub fn get_campaign(e: Env, asset_id: u64) -> Result<Campaign, ContractError> {
        storage::load_campaign(&e, asset_id)
    }

    pub fn locked_amount(e: Env, asset_id: u64, investor: Address) -> i128 {
        storage::read_lock(&e, asset_id, &investor)
    }

    /// Investors in first-lock order. Refunded investors stay listed.
    pub fn get_investors(e: Env, asset_id: u64) -> Vec<Address> {
        storage::read_investors(&e, asset_id)
    }

    pub fn all_asset_ids(e: Env) -> Vec<u64> {
        storage::read_asset_ids(&e)
    }

    /// Asset ids whose campaign is still accepting contributions or awaiting
    /// resolution.
    pub fn active_asset_ids(e: Env) -> Vec<u64> {
        let mut active = Vec::new(&e);
        for asset_id in storage::read_asset_ids(&e).iter() {
            if let Ok(campaign) = storage::load_campaign(&e, asset_id) {
                if !campaign.finalized {
                    active.push_back(asset_id);
                }
            }
        }
        active
    }

    pub fn is_operator(e: Env, account: Address) -> bool {
        has_operator_right(&e, &account).unwrap_or(false)
    }

    pub fn get_config(e: Env) -> Result<EscrowConfig, ContractError> {
        storage::read_config(&e)
    }

    pub fn get_admin(e: Env) -> Result<Address, ContractError> {
        storage::read_admin(&e)
    }

    pub fn get_ledger(e: Env) -> Result<Address, ContractError> {
        storage::read_ledger(&e)
    }

    pub fn get_funding_token(e: Env) -> Result<Address, ContractError> {
        storage::read_funding_token(&e)
    }
}
