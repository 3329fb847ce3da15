use soroban_sdk::{contracttype, Address};

/// Constant-product pool pairing one asset's shares with the stable token.
#[contracttype]
#[derive(Clone, Debug, PartialEq)]
pub struct Pool {
    pub asset_id: u64,
    /// Shares held by the exchange for this pool.
    pub share_reserve: i128,
    /// Stable token held by the exchange for this pool.
    pub stable_reserve: i128,
    /// Swap fee in basis points, retained in the input reserve.
    pub fee_bps: u32,
    pub creator: Address,
    pub created_at: u64,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Admin,
    Ledger,
    StableToken,
    /// Every asset id with a pool, in creation order.
    PoolIds,
    /// `persistent()`.
    Pool(u64),
}
