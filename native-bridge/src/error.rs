//! Error types for the native bridge contract

use bridge_common::BridgeError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Bridge(#[from] BridgeError),
}
