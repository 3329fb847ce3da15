use crate::types::{Campaign, DataKey, EscrowConfig};
use brickstack_common::ttl::{BUMP_TARGET, BUMP_THRESHOLD};
use brickstack_common::ContractError;
use soroban_sdk::{Address, Env, Vec};

pub fn read_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_ledger(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Ledger)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_funding_token(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::FundingToken)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_config(e: &Env) -> Result<EscrowConfig, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Config)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_asset_ids(e: &Env) -> Vec<u64> {
    e.storage()
        .instance()
        .get(&DataKey::AssetIds)
        .unwrap_or_else(|| Vec::new(e))
}

// ─── Per-asset records ─────────────────────────────────────────────────────

pub fn has_campaign(e: &Env, asset_id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Campaign(asset_id))
}

/// Load a campaign and bump its TTL, or `CampaignNotFound`.
pub fn load_campaign(e: &Env, asset_id: u64) -> Result<Campaign, ContractError> {
    let key = DataKey::Campaign(asset_id);
    let storage = e.storage().persistent();
    let campaign: Campaign = storage.get(&key).ok_or(ContractError::CampaignNotFound)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(campaign)
}

pub fn save_campaign(e: &Env, campaign: &Campaign) {
    let key = DataKey::Campaign(campaign.asset_id);
    e.storage().persistent().set(&key, campaign);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn read_lock(e: &Env, asset_id: u64, investor: &Address) -> i128 {
    let key = DataKey::Lock(asset_id, investor.clone());
    let storage = e.storage().persistent();
    match storage.get::<_, i128>(&key) {
        Some(amount) => {
            storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
            amount
        }
        None => 0,
    }
}

pub fn write_lock(e: &Env, asset_id: u64, investor: &Address, amount: i128) {
    let key = DataKey::Lock(asset_id, investor.clone());
    let storage = e.storage().persistent();
    storage.set(&key, &amount);
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn read_investors(e: &Env, asset_id: u64) -> Vec<Address> {
    e.storage()
        .persistent()
        .get(&DataKey::Investors(asset_id))
        .unwrap_or_else(|| Vec::new(e))
}

pub fn write_investors(e: &Env, asset_id: u64, investors: &Vec<Address>) {
    let key = DataKey::Investors(asset_id);
    e.storage().persistent().set(&key, investors);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}
