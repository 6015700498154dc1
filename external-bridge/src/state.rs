//! State definitions for the external bridge contract
//!
//! Owner and the processed-transfer set live in `bridge_common`; this module
//! adds the deposit fee registry and bridge statistics.

use bridge_common::FeeRegistry;
use cosmwasm_schema::cw_serde;
use cw_storage_plus::Item;

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Number of successful StartDeposit calls (allowance and receive hook)
    pub deposits_started: u64,
    /// Number of successful EndWithdrawal calls
    pub withdrawals_completed: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:external-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fee charged by StartDeposit, per token
pub const DEPOSIT_FEES: FeeRegistry = FeeRegistry::new("deposit_fees");

pub const STATS: Item<Stats> = Item::new("stats");
