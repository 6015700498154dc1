//! State definitions for the native bridge contract

use bridge_common::FeeRegistry;
use cosmwasm_schema::cw_serde;
use cw_storage_plus::Item;

/// Bridge statistics
#[cw_serde]
#[derive(Default)]
pub struct Stats {
    /// Number of successful EndDeposit calls
    pub deposits_completed: u64,
    /// Number of successful StartWithdrawal calls (allowance and receive hook)
    pub withdrawals_started: u64,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:native-bridge";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Fee charged by StartWithdrawal, per wrapped token
pub const WITHDRAWAL_FEES: FeeRegistry = FeeRegistry::new("withdrawal_fees");

pub const STATS: Item<Stats> = Item::new("stats");
