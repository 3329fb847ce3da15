use brickstack_common::ttl::{BUMP_TARGET, BUMP_THRESHOLD};
use brickstack_common::{AssetConfig, ContractError};
use soroban_sdk::{contracttype, Address, Env, Vec};

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Ledger admin. Creates assets and manages mint rights.
    Admin,
    /// The single escrow authority allowed to mint.
    Escrow,
    /// Auxiliary minter flag.
    Minter(Address),
    /// Optional eligibility policy consulted for transfer recipients.
    TransferPolicy,
    /// Optional contract notified before balances change.
    DistributionHook,
    /// Every asset id ever created, in creation order.
    AssetIds,
    /// Per-asset issuance terms. `persistent()`.
    Asset(u64),
    /// Per-asset circulating supply. `persistent()`.
    Supply(u64),
    /// Per-(asset, holder) unit balance. `persistent()`.
    Balance(u64, Address),
}

// ─── Instance config ───────────────────────────────────────────────────────

pub fn read_admin(e: &Env) -> Result<Address, ContractError> {
    e.storage()
        .instance()
        .get(&DataKey::Admin)
        .ok_or(ContractError::NotInitialized)
}

pub fn read_optional_address(e: &Env, key: &DataKey) -> Option<Address> {
    e.storage().instance().get(key)
}

pub fn write_optional_address(e: &Env, key: &DataKey, value: &Option<Address>) {
    match value {
        Some(address) => e.storage().instance().set(key, address),
        None => e.storage().instance().remove(key),
    }
}

pub fn read_asset_ids(e: &Env) -> Vec<u64> {
    e.storage()
        .instance()
        .get(&DataKey::AssetIds)
        .unwrap_or_else(|| Vec::new(e))
}

// ─── Per-asset records ─────────────────────────────────────────────────────

pub fn has_asset(e: &Env, asset_id: u64) -> bool {
    e.storage().persistent().has(&DataKey::Asset(asset_id))
}

/// Load an asset config and bump its TTL, or `AssetNotFound`.
pub fn load_asset(e: &Env, asset_id: u64) -> Result<AssetConfig, ContractError> {
    let key = DataKey::Asset(asset_id);
    let storage = e.storage().persistent();
    let config: AssetConfig = storage.get(&key).ok_or(ContractError::AssetNotFound)?;
    storage.extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
    Ok(config)
}

pub fn save_asset(e: &Env, config: &AssetConfig) {
    let key = DataKey::Asset(config.asset_id);
    e.storage().persistent().set(&key, config);
    e.storage()
        .persistent()
        .extend_ttl(&key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn read_supply(e: &Env, asset_id: u64) -> i128 {
    read_amount(e, &DataKey::Supply(asset_id))
}

pub fn write_supply(e: &Env, asset_id: u64, supply: i128) {
    write_amount(e, &DataKey::Supply(asset_id), supply);
}

pub fn read_balance(e: &Env, asset_id: u64, holder: &Address) -> i128 {
    read_amount(e, &DataKey::Balance(asset_id, holder.clone()))
}

pub fn write_balance(e: &Env, asset_id: u64, holder: &Address, balance: i128) {
    write_amount(e, &DataKey::Balance(asset_id, holder.clone()), balance);
}

fn read_amount(e: &Env, key: &DataKey) -> i128 {
    let storage = e.storage().persistent();
    match storage.get::<_, i128>(key) {
        Some(amount) => {
            storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
            amount
        }
        None => 0,
    }
}

/// Zero amounts are removed rather than stored.
fn write_amount(e: &Env, key: &DataKey, amount: i128) {
    let storage = e.storage().persistent();
    if amount == 0 {
        storage.remove(key);
    } else {
        storage.set(key, &amount);
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }
}
