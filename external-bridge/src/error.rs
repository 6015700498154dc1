//! Error types for the external bridge contract

use bridge_common::BridgeError;
use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("{0}")]
    Bridge(#[from] BridgeError),

    #[error("Insufficient custody: bridge holds {available}, requested {requested}")]
    InsufficientCustody {
        available: Uint128,
        requested: Uint128,
    },
}
