//! TTL constants for `persistent()` entries.
//!
//! Contract-wide configuration lives in `instance()` storage and shares the
//! contract's TTL. Per-asset and per-holder records live in `persistent()`
//! storage and are bumped on every read and write.

/// Minimum ledger sequence TTL before a bump is requested (~1 day at 5 s/ledger).
pub const BUMP_THRESHOLD: u32 = 17_280;
/// Target TTL after a bump (~30 days).
pub const BUMP_TARGET: u32 = 518_400;
