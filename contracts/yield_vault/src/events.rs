use soroban_sdk::{Address, Env, Symbol};

/// Emitted when income is deposited for an asset.
///
/// # Topics
/// * `Symbol` - "yield_deposited"
/// * `u64` - The asset id
///
/// # Data
/// * `Address` - The depositor
/// * `i128` - Amount deposited
/// * `i128` - Accumulator after the deposit
pub fn emit_yield_deposited(
    e: &Env,
    asset_id: u64,
    depositor: &Address,
    amount: i128,
    acc_per_unit: i128,
) {
    let topics = (Symbol::new(e, "yield_deposited"), asset_id);
    e.events()
        .publish(topics, (depositor.clone(), amount, acc_per_unit));
}

pub fn emit_yield_claimed(e: &Env, asset_id: u64, holder: &Address, amount: i128) {
    let topics = (Symbol::new(e, "yield_claimed"), asset_id, holder.clone());
    e.events().publish(topics, amount);
}
