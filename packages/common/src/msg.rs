//! Query responses shared by both bridge contracts

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Uint128};

use crate::fees::TokenFee;

/// Response for Owner query
#[cw_serde]
pub struct OwnerResponse {
    pub owner: Addr,
}

/// Response for a single-token fee query
#[cw_serde]
pub struct FeeResponse {
    pub token: Addr,
    /// Fee in basis points (0 when never configured)
    pub fee_bps: u64,
}

/// Response for a paginated fee listing
#[cw_serde]
pub struct FeesResponse {
    pub fees: Vec<TokenFee>,
}

/// Fee preview for a start-side call
#[cw_serde]
pub struct SimulationResponse {
    pub fee_bps: u64,
    /// Amount forwarded to the owner
    pub fee: Uint128,
    /// Amount reported to the relay for completion on the other chain
    pub net: Uint128,
}

/// Response for IsProcessed query
#[cw_serde]
pub struct IsProcessedResponse {
    pub processed: bool,
}
