use crate::math::BPS_DENOMINATOR;
use brickstack_errors::ContractError;

/// Reject zero and negative amounts.
#[inline]
pub fn require_positive(amount: i128) -> Result<(), ContractError> {
    if amount <= 0 {
        return Err(ContractError::InvalidAmount);
    }
    Ok(())
}

/// Reject basis-point values above 100%.
#[inline]
pub fn require_bps(bps: u32) -> Result<(), ContractError> {
    if i128::from(bps) > BPS_DENOMINATOR {
        return Err(ContractError::InvalidFee);
    }
    Ok(())
}
