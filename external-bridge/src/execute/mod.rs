//! Execute handlers for the external bridge contract.
//!
//! - `deposit` - StartDeposit via allowance pull or CW20 receive hook
//! - `withdrawal` - EndWithdrawal, replay-guarded release from custody
//! - `admin` - deposit fee changes and ownership transfer

mod admin;
mod deposit;
mod withdrawal;

pub use admin::*;
pub use deposit::*;
pub use withdrawal::*;
