//! Message types for the native bridge contract

use bridge_common::msg::{
    FeeResponse, FeesResponse, IsProcessedResponse, OwnerResponse, SimulationResponse,
};
use bridge_common::TokenFee;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Uint128};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner (relay) address; defaults to the instantiating sender
    pub owner: Option<String>,
    /// Initial per-token withdrawal fees
    #[serde(default)]
    pub withdrawal_fees: Vec<TokenFee>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Mint wrapped tokens for a deposit started on the external chain
    ///
    /// Authorization: Owner only
    EndDeposit {
        /// Wrapped CW20 token; this contract must be its minter
        token: String,
        /// Net amount, already fee-adjusted on the external chain
        amount: Uint128,
        recipient: String,
        /// 32-byte id of the originating transaction
        origin_tx_id: Binary,
    },

    /// Burn wrapped tokens to withdraw on the external chain
    ///
    /// Authorization: Anyone
    ///
    /// Burns `amount` with the allowance the sender granted this contract.
    StartWithdrawal {
        token: String,
        /// Gross amount, fee included
        amount: Uint128,
        /// Recipient on the external chain
        recipient: String,
    },

    /// Burn wrapped tokens sent with CW20 `Send` (implements the CW20 Receiver interface)
    Receive(cw20::Cw20ReceiveMsg),

    /// Set the withdrawal fee for a token (0-10000 bps)
    ///
    /// Authorization: Owner only
    ChangeWithdrawalFee { token: String, fee_bps: u64 },

    /// Replace the owner
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },
}

/// Hook messages carried by CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    StartWithdrawal { recipient: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    #[returns(OwnerResponse)]
    Owner {},

    #[returns(FeeResponse)]
    WithdrawalFee { token: String },

    /// Every configured withdrawal fee, ordered by token address
    #[returns(FeesResponse)]
    WithdrawalFees {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Preview the fee split StartWithdrawal would apply right now
    #[returns(SimulationResponse)]
    SimulateWithdrawal { token: String, amount: Uint128 },

    #[returns(IsProcessedResponse)]
    IsProcessed { token: String, origin_tx_id: Binary },

    /// Circulating supply of a wrapped token
    #[returns(SupplyResponse)]
    Supply { token: String },

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct SupplyResponse {
    pub token: Addr,
    pub total_supply: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub deposits_completed: u64,
    pub withdrawals_started: u64,
}
