//! Execute handlers for the native bridge contract.
//!
//! - `deposit` - EndDeposit, replay-guarded mint
//! - `withdrawal` - StartWithdrawal via burn allowance or CW20 receive hook
//! - `admin` - withdrawal fee changes and ownership transfer

mod admin;
mod deposit;
mod withdrawal;

pub use admin::*;
pub use deposit::*;
pub use withdrawal::*;
