//! External Bridge Contract - Lock/Release Side
//!
//! Holds CW20 tokens in custody while a wrapped representation circulates on
//! the native chain.
//!
//! # Deposit Flow (Lock)
//! 1. User calls `StartDeposit` (allowance pull) or sends tokens with a
//!    `StartDeposit` receive hook
//! 2. Fee is forwarded to the owner, net amount stays in custody
//! 3. The relay observes `deposit_started` and mints on the native bridge
//!
//! # Withdrawal Flow (Release)
//! 1. User burns wrapped tokens on the native bridge
//! 2. The relay (owner) calls `EndWithdrawal` with the net amount and the
//!    origin transaction id
//! 3. Tokens are released from custody to the recipient
//!
//! # Security
//! - Single owner gates completion calls and fee changes
//! - Each (token, origin tx id) completes at most once

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
