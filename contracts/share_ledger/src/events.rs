use soroban_sdk::{Address, Env, String, Symbol};

/// Emitted when an asset is registered.
///
/// # Topics
/// * `Symbol` - "asset_created"
/// * `u64` - The asset id
///
/// # Data
/// * `i128` - Maximum issuable units
/// * `i128` - Unit price in the funding currency
pub fn emit_asset_created(e: &Env, asset_id: u64, max_shares: i128, unit_price: i128) {
    let topics = (Symbol::new(e, "asset_created"), asset_id);
    e.events().publish(topics, (max_shares, unit_price));
}

/// Emitted when units are minted.
///
/// # Topics
/// * `Symbol` - "shares_minted"
/// * `u64` - The asset id
/// * `Address` - The recipient
///
/// # Data
/// * `Address` - The minter
/// * `i128` - Units minted
/// * `i128` - Total supply after the mint
pub fn emit_shares_minted(
    e: &Env,
    asset_id: u64,
    minter: &Address,
    to: &Address,
    units: i128,
    new_supply: i128,
) {
    let topics = (Symbol::new(e, "shares_minted"), asset_id, to.clone());
    e.events().publish(topics, (minter.clone(), units, new_supply));
}

/// Emitted when units move between holders.
///
/// # Topics
/// * `Symbol` - "shares_transferred"
/// * `u64` - The asset id
/// * `Address` - Sender
/// * `Address` - Recipient
///
/// # Data
/// * `i128` - Units moved
pub fn emit_shares_transferred(e: &Env, asset_id: u64, from: &Address, to: &Address, units: i128) {
    let topics = (
        Symbol::new(e, "shares_transferred"),
        asset_id,
        from.clone(),
        to.clone(),
    );
    e.events().publish(topics, units);
}

/// Emitted when units are destroyed.
///
/// # Topics
/// * `Symbol` - "shares_burned"
/// * `u64` - The asset id
/// * `Address` - The holder
///
/// # Data
/// * `i128` - Units burned
/// * `i128` - Total supply after the burn
pub fn emit_shares_burned(e: &Env, asset_id: u64, from: &Address, units: i128, new_supply: i128) {
    let topics = (Symbol::new(e, "shares_burned"), asset_id, from.clone());
    e.events().publish(topics, (units, new_supply));
}

pub fn emit_escrow_set(e: &Env, escrow: &Address) {
    e.events()
        .publish((Symbol::new(e, "escrow_set"),), escrow.clone());
}

pub fn emit_minter_set(e: &Env, minter: &Address, enabled: bool) {
    e.events()
        .publish((Symbol::new(e, "minter_set"), minter.clone()), enabled);
}

pub fn emit_metadata_set(e: &Env, asset_id: u64, uri: &String) {
    e.events()
        .publish((Symbol::new(e, "metadata_set"), asset_id), uri.clone());
}
