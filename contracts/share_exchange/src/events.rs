use crate::types::Pool;
use soroban_sdk::{Address, Env, Symbol};

/// Emitted when a pool is seeded.
///
/// # Topics
/// * `Symbol` - "pool_created"
/// * `u64` - The asset id
///
/// # Data
/// * `Address` - The liquidity provider
/// * `i128` - Initial share reserve
/// * `i128` - Initial stable reserve
/// * `u32` - Fee in basis points
pub fn emit_pool_created(
    e: &Env,
    asset_id: u64,
    provider: &Address,
    share_units: i128,
    stable_units: i128,
    fee_bps: u32,
) {
    let topics = (Symbol::new(e, "pool_created"), asset_id);
    e.events()
        .publish(topics, (provider.clone(), share_units, stable_units, fee_bps));
}

/// Emitted on every swap. `name` selects the direction topic.
///
/// # Data
/// * `i128` - Amount in
/// * `i128` - Amount out
/// * `i128` - Share reserve after the swap
/// * `i128` - Stable reserve after the swap
pub fn emit_swap(
    e: &Env,
    name: &str,
    trader: &Address,
    amount_in: i128,
    amount_out: i128,
    pool: &Pool,
) {
    let topics = (Symbol::new(e, name), pool.asset_id, trader.clone());
    e.events().publish(
        topics,
        (amount_in, amount_out, pool.share_reserve, pool.stable_reserve),
    );
}
