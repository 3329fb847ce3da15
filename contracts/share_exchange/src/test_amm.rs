#![cfg(test)]

use crate::amm;
use brickstack_common::ContractError;

#[test]
fn test_fee_reduces_output() {
    // 10_000 stable / 1_000 shares, 30 bps, 1_000 stable in.
    let out = amm::amount_out(10_000, 1_000, 1_000, 30).unwrap();
    assert_eq!(out, 90);
    // Fee-free, floor-rounded reference: 1_000 - 10_000_000 / 11_000.
    assert!(out < 1_000 - 10_000_000 / 11_000);
}

#[test]
fn test_product_never_decreases() {
    let cases: [(i128, i128, i128, u32); 6] = [
        (10_000, 1_000, 1_000, 30),
        (1_000, 10_000, 7, 0),
        (3, 7, 1, 0),
        (999_983, 17, 1_234, 100),
        (17, 999_983, 5, 9_999),
        (1_000_000_007, 1_000_000_009, 333_333_333, 25),
    ];
    for (rin, rout, amount, fee) in cases {
        let out = amm::amount_out(rin, rout, amount, fee).unwrap();
        let (new_in, new_out) = amm::apply(rin, rout, amount, out).unwrap();
        assert!(out >= 0);
        assert!(new_out > 0);
        assert!(new_in * new_out >= rin * rout);
    }
}

#[test]
fn test_tiny_input_rounds_to_zero() {
    assert_eq!(amm::amount_out(10_000, 1_000, 1, 30), Ok(0));
    assert_eq!(amm::amount_out(10_000, 1_000, 9, 0), Ok(0));
}

#[test]
fn test_overflowing_reserves_fail_closed() {
    assert_eq!(
        amm::amount_out(i128::MAX, 2, 1, 0),
        Err(ContractError::Overflow)
    );
}
