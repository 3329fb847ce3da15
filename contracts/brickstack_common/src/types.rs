use soroban_sdk::{contracttype, String};

/// Immutable issuance terms of one fractionalized asset, owned by the share
/// ledger and read by the escrow when pricing a campaign.
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct AssetConfig {
    pub asset_id: u64,
    /// Hard cap on units that may ever be minted.
    pub max_shares: i128,
    /// Price of one unit in the funding currency.
    pub unit_price: i128,
    /// Advisory yield rate in basis points. Informational only.
    pub yield_bps: u32,
    /// Off-chain metadata pointer. The only mutable field.
    pub metadata_uri: String,
    pub created_at: u64,
}
