//! Pieces shared by every BrickStack contract.
//!
//! - [`interfaces`]: client traits for the share ledger, eligibility policies
//!   and the distribution hook. Contracts depend on these instead of on each
//!   other's crates.
//! - [`types`]: contract types that cross contract boundaries.
//! - [`math`]: checked `i128` arithmetic that fails closed with a
//!   [`ContractError`] instead of wrapping.
//! - [`validation`]: argument guards used at the top of entry points.
//! - [`token`]: pulling value in against an allowance and paying it out.
//! - [`ttl`]: persistent-storage TTL constants.

#![no_std]

pub mod interfaces;
pub mod math;
pub mod token;
pub mod ttl;
pub mod types;
pub mod validation;

pub use brickstack_errors::{ContractError, ErrorCategory, ErrorExt};
pub use interfaces::{
    DistributionHook, DistributionHookClient, EligibilityPolicy, EligibilityPolicyClient,
    ShareLedgerClient, ShareLedgerInterface,
};
pub use types::AssetConfig;

#[cfg(test)]
mod test_math;
