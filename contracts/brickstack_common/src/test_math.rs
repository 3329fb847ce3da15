//! Tests for the fail-closed arithmetic helpers.

#![cfg(test)]

use crate::math;
use brickstack_errors::ContractError;

#[test]
fn test_after_fee_rounds_down() {
    assert_eq!(math::after_fee(1_000, 30), Ok(997));
    assert_eq!(math::after_fee(1, 30), Ok(0));
    assert_eq!(math::after_fee(1_000, 0), Ok(1_000));
}

#[test]
fn test_after_fee_overflow_fails_closed() {
    assert_eq!(math::after_fee(i128::MAX, 0), Err(ContractError::Overflow));
}

#[test]
fn test_add_overflow() {
    assert_eq!(math::add(i128::MAX, 1), Err(ContractError::Overflow));
}

#[test]
fn test_sub_underflow() {
    assert_eq!(math::sub(i128::MIN, 1), Err(ContractError::Underflow));
}

#[test]
fn test_mul_overflow() {
    assert_eq!(math::mul(i128::MAX, 2), Err(ContractError::Overflow));
}

#[test]
fn test_div_by_zero() {
    assert_eq!(math::div(10, 0), Err(ContractError::DivisionByZero));
}

#[test]
fn test_mul_div_directions() {
    // 10 * 10 / 3 = 33.33..
    assert_eq!(math::mul_div_floor(10, 10, 3), Ok(33));
    assert_eq!(math::mul_div_ceil(10, 10, 3), Ok(34));
    // Exact results agree.
    assert_eq!(math::mul_div_floor(10, 9, 3), Ok(30));
    assert_eq!(math::mul_div_ceil(10, 9, 3), Ok(30));
}
