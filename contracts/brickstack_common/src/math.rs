//! Overflow-safe arithmetic helpers for share and settlement amounts.
//!
//! Every helper returns `Err(ContractError)` instead of wrapping or panicking,
//! so an overflowing operation is rejected before any state is written.
//! Division rounds toward zero unless the name says `ceil`; callers pick the
//! direction that never overpays the recipient.

use brickstack_errors::ContractError;

/// 100% in basis points.
pub const BPS_DENOMINATOR: i128 = 10_000;

#[inline]
pub fn add(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_add(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn sub(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_sub(b).ok_or(ContractError::Underflow)
}

#[inline]
pub fn mul(a: i128, b: i128) -> Result<i128, ContractError> {
    a.checked_mul(b).ok_or(ContractError::Overflow)
}

#[inline]
pub fn div(a: i128, b: i128) -> Result<i128, ContractError> {
    if b == 0 {
        return Err(ContractError::DivisionByZero);
    }
    a.checked_div(b).ok_or(ContractError::Overflow)
}

/// `floor(a * b / d)` for non-negative operands.
#[inline]
pub fn mul_div_floor(a: i128, b: i128, d: i128) -> Result<i128, ContractError> {
    div(mul(a, b)?, d)
}

/// `ceil(a * b / d)` for non-negative operands.
pub fn mul_div_ceil(a: i128, b: i128, d: i128) -> Result<i128, ContractError> {
    let product = mul(a, b)?;
    let quotient = div(product, d)?;
    if product % d == 0 {
        Ok(quotient)
    } else {
        add(quotient, 1)
    }
}

/// `amount` with `fee_bps` removed, rounded down: `amount * (10_000 - fee_bps) / 10_000`.
pub fn after_fee(amount: i128, fee_bps: u32) -> Result<i128, ContractError> {
    let keep = sub(BPS_DENOMINATOR, i128::from(fee_bps))?;
    mul_div_floor(amount, keep, BPS_DENOMINATOR)
}
