//! Constant-product pricing.
//!
//! With `k = in_reserve * out_reserve`, a swap of `amount_in` credits
//! `in_eff = amount_in * (10_000 - fee_bps) / 10_000` to the price curve and
//! returns `out_reserve - ceil(k / (in_reserve + in_eff))`. The full
//! `amount_in` (fee included) is added to the input reserve.
//!
//! Both roundings go against the trader, so
//! `(in_reserve + amount_in) * (out_reserve - out) >= k` always holds.

use brickstack_common::{math, ContractError};

/// Output of swapping `amount_in` against the given reserves.
pub fn amount_out(
    in_reserve: i128,
    out_reserve: i128,
    amount_in: i128,
    fee_bps: u32,
) -> Result<i128, ContractError> {
    let in_eff = math::after_fee(amount_in, fee_bps)?;
    let k = math::mul(in_reserve, out_reserve)?;
    let new_in_reserve = math::add(in_reserve, in_eff)?;
    let new_out_reserve = math::mul_div_ceil(k, 1, new_in_reserve)?;
    math::sub(out_reserve, new_out_reserve)
}

/// Reserves after the swap: `(in_reserve + amount_in, out_reserve - out)`.
pub fn apply(
    in_reserve: i128,
    out_reserve: i128,
    amount_in: i128,
    amount_out: i128,
) -> Result<(i128, i128), ContractError> {
    Ok((
        math::add(in_reserve, amount_in)?,
        math::sub(out_reserve, amount_out)?,
    ))
}
