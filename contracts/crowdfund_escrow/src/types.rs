use soroban_sdk::{contracttype, Address, String};

// ─── Campaign state ────────────────────────────────────────────────────────

/// One crowdfunding campaign, keyed by the asset it funds.
///
/// `Funding` while `finalized == false`; afterwards `successful` tells
/// `Succeeded` from `Cancelled`.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Campaign {
    pub asset_id: u64,
    /// Receives the raised funds on success.
    pub seller: Address,
    /// Funding goal in the funding token.
    pub target_amount: i128,
    pub description: String,
    /// Sum of outstanding investor locks.
    pub total_locked: i128,
    /// Amount paid to the seller. Zero unless successful.
    pub total_raised: i128,
    /// Sum of `floor(lock / unit_price)` over all outstanding locks.
    pub allocated_units: i128,
    /// Last timestamp at which contributions are accepted.
    pub deadline: u64,
    pub created_at: u64,
    pub finalized: bool,
    pub successful: bool,
}

/// Resolution chosen by an operator in `finalize`.
#[contracttype]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Success,
    Cancel,
}

// ─── Escrow configuration ──────────────────────────────────────────────────

#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct EscrowConfig {
    /// Optional eligibility policy every investor must pass to lock funds.
    pub gate: Option<Address>,
    /// When set, `Outcome::Success` is rejected below the funding target.
    pub require_target: bool,
}

// ─── Storage keys ──────────────────────────────────────────────────────────

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    /// Contract admin address. Always an operator.
    Admin,
    /// Share ledger the escrow mints through.
    Ledger,
    /// Token investors contribute in.
    FundingToken,
    /// EscrowConfig.
    Config,
    /// Operator flag.
    Operator(Address),
    /// Every asset id that ever had a campaign, in creation order.
    AssetIds,
    /// Per-asset campaign. `persistent()`.
    Campaign(u64),
    /// Per-(asset, investor) locked amount. `persistent()`.
    Lock(u64, Address),
    /// Per-asset investor list in first-lock order. `persistent()`.
    Investors(u64),
}
