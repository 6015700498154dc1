//! Error types shared by both bridge contracts

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum BridgeError {
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    // ========================================================================
    // Replay Errors
    // ========================================================================

    #[error("Transfer already processed: token {token}, origin tx {origin_tx_id}")]
    AlreadyProcessed { token: String, origin_tx_id: String },

    // ========================================================================
    // Parameter Errors
    // ========================================================================

    #[error("Invalid amount: {reason}")]
    InvalidAmount { reason: String },

    #[error("Invalid address: {reason}")]
    InvalidAddress { reason: String },

    #[error("Invalid fee: {fee_bps} bps exceeds max {max_fee_bps}")]
    InvalidFee { fee_bps: u64, max_fee_bps: u64 },

    #[error("Invalid hash length: expected 32 bytes, got {got}")]
    InvalidHashLength { got: usize },

    #[error("Invalid token {token}: {reason}")]
    InvalidToken { token: String, reason: String },
}
