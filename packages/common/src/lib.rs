//! Common - Shared Primitives for the Lock/Mint Bridge Contracts
//!
//! Both bridge contracts are mirror images built on the same leaf components:
//! - `fees` - per-token fee basis points and the floor fee split
//! - `replay` - at-most-once completion marker per (token, origin tx id)
//! - `ownership` - single transferable owner behind the `Authority` trait
//! - `token` - CW20 message and query helpers
//! - `msg` - query responses both bridges return

pub mod error;
pub mod fees;
pub mod msg;
pub mod ownership;
pub mod replay;
pub mod token;

pub use error::BridgeError;
pub use fees::{FeeRegistry, FeeSplit, TokenFee, BPS_DENOMINATOR, MAX_FEE_BPS};
pub use ownership::{Authority, Owner, OWNER};
pub use replay::{OriginTxId, ReplayGuard, PROCESSED_TRANSFERS};
