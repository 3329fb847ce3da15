use soroban_sdk::{Address, Env, Symbol};

/// Emitted when an operator opens a campaign.
///
/// # Topics
/// * `Symbol` - "campaign_proposed"
/// * `u64` - The asset id
///
/// # Data
/// * `Address` - The seller
/// * `i128` - Funding target
/// * `u64` - Deadline timestamp
pub fn emit_campaign_proposed(
    e: &Env,
    asset_id: u64,
    seller: &Address,
    target_amount: i128,
    deadline: u64,
) {
    let topics = (Symbol::new(e, "campaign_proposed"), asset_id);
    e.events()
        .publish(topics, (seller.clone(), target_amount, deadline));
}

/// Emitted when an investor locks funds.
///
/// # Topics
/// * `Symbol` - "locked"
/// * `u64` - The asset id
/// * `Address` - The investor
///
/// # Data
/// * `i128` - Amount locked by this call
/// * `i128` - Campaign total locked afterwards
pub fn emit_locked(e: &Env, asset_id: u64, investor: &Address, amount: i128, total_locked: i128) {
    let topics = (Symbol::new(e, "locked"), asset_id, investor.clone());
    e.events().publish(topics, (amount, total_locked));
}

/// Emitted when a campaign succeeds and shares are distributed.
pub fn emit_campaign_succeeded(
    e: &Env,
    asset_id: u64,
    seller: &Address,
    total_raised: i128,
    units_minted: i128,
) {
    let topics = (Symbol::new(e, "campaign_succeeded"), asset_id);
    e.events()
        .publish(topics, (seller.clone(), total_raised, units_minted));
}

/// Emitted when a campaign is cancelled. Data is the amount left to refund.
pub fn emit_campaign_cancelled(e: &Env, asset_id: u64, total_locked: i128) {
    let topics = (Symbol::new(e, "campaign_cancelled"), asset_id);
    e.events().publish(topics, total_locked);
}

pub fn emit_refunded(e: &Env, asset_id: u64, investor: &Address, amount: i128) {
    let topics = (Symbol::new(e, "refunded"), asset_id, investor.clone());
    e.events().publish(topics, amount);
}

pub fn emit_operator_set(e: &Env, operator: &Address, enabled: bool) {
    let topics = (Symbol::new(e, "operator_set"), operator.clone());
    e.events().publish(topics, enabled);
}
