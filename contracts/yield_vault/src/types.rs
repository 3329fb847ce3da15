use soroban_sdk::{contracttype, Address};

/// Fixed-point scale of `acc_per_unit`.
pub const SCALE: i128 = 1_000_000_000_000;

/// Per-asset accumulator state.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Distribution {
    /// Settlement units earned per share since the first deposit, times `SCALE`.
    pub acc_per_unit: i128,
    pub total_deposited: i128,
    pub total_claimed: i128,
}

/// Per-(asset, holder) position in the accumulator.
#[contracttype]
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HolderCheckpoint {
    /// `acc_per_unit` at the holder's last settlement.
    pub last_acc: i128,
    /// Entitlement settled at a balance change but not yet claimed.
    pub carry: i128,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    /// Share ledger whose balances weight the distribution.
    Ledger,
    /// Token deposits and claims are paid in.
    SettlementToken,
    /// `persistent()`.
    Distribution(u64),
    /// `persistent()`.
    Checkpoint(u64, Address),
}
