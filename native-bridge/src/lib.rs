//! Native Bridge Contract - Mint/Burn Side
//!
//! Issues wrapped CW20 tokens representing assets held in custody by the
//! external bridge. The bridge must be the minter of every wrapped token it
//! serves.
//!
//! # Deposit Flow (Mint)
//! 1. The relay observes `deposit_started` on the external bridge
//! 2. The relay (owner) calls `EndDeposit` with the net amount and the origin
//!    transaction id
//! 3. Wrapped tokens are minted to the recipient
//!
//! # Withdrawal Flow (Burn)
//! 1. User calls `StartWithdrawal` (burn with allowance) or sends wrapped
//!    tokens with a `StartWithdrawal` receive hook
//! 2. Fee goes to the owner, the net amount is burned
//! 3. The relay observes `withdrawal_started` and releases on the external
//!    bridge

pub mod contract;
pub mod error;
mod execute;
pub mod msg;
mod query;
pub mod state;

pub use crate::error::ContractError;
