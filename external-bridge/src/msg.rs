//! Message types for the external bridge contract

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
    /// Initial per-token deposit fees
    #[serde(default)]
    pub deposit_fees: Vec<TokenFee>,
}

// ============================================================================
// Execute Messages
// ============================================================================

#[cw_serde]
pub enum ExecuteMsg {
    /// Lock tokens for bridging to the native chain
    ///
    /// Authorization: Anyone
    ///
    /// Pulls `amount` with the allowance the sender granted this contract.
    StartDeposit {
        /// CW20 token contract
        token: String,
        /// Gross amount, fee included
        amount: Uint128,
        /// Recipient on the native chain
        recipient: String,
    },

    /// Lock tokens sent with CW20 `Send` (implements the CW20 Receiver interface)
    Receive(cw20::Cw20ReceiveMsg),

    /// Release tokens from custody for a withdrawal started on the native chain
    ///
    /// Authorization: Owner only
    EndWithdrawal {
        token: String,
        /// Net amount, already fee-adjusted on the native chain
        amount: Uint128,
        recipient: String,
        /// 32-byte id of the originating transaction
        origin_tx_id: Binary,
    },

    /// Set the deposit fee for a token (0-10000 bps)
    ///
    /// Authorization: Owner only
    ChangeDepositFee { token: String, fee_bps: u64 },

    /// Replace the owner
    ///
    /// Authorization: Owner only
    TransferOwnership { new_owner: String },
}

/// Hook messages carried by CW20 `Send`
#[cw_serde]
pub enum ReceiveMsg {
    StartDeposit { recipient: String },
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
    DepositFee { token: String },

    /// Every configured deposit fee, ordered by token address
    #[returns(FeesResponse)]
    DepositFees {
        start_after: Option<String>,
        limit: Option<u32>,
    },

    /// Preview the fee split StartDeposit would apply right now
    #[returns(SimulationResponse)]
    SimulateDeposit { token: String, amount: Uint128 },

    #[returns(IsProcessedResponse)]
    IsProcessed { token: String, origin_tx_id: Binary },

    /// Tokens currently held by the bridge
    #[returns(CustodyResponse)]
    Custody { token: String },

    #[returns(StatsResponse)]
    Stats {},
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct CustodyResponse {
    pub token: Addr,
    pub amount: Uint128,
}

#[cw_serde]
pub struct StatsResponse {
    pub deposits_started: u64,
    pub withdrawals_completed: u64,
}
