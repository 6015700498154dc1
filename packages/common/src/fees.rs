//! Fee Registry
//!
//! Per-token fee rates in basis points, set by the owner and read by the
//! start-side operation of each bridge. Each bridge direction keeps its own
//! registry under its own storage namespace.
//!
//! The fee is always rounded down at the token's native decimal scale:
//!
//! | Value | Formula |
//! |-------|---------|
//! | fee   | ⌊amount · fee_bps / 10000⌋ |
//! | net   | amount − fee |
//!
//! so `fee + net == amount` holds exactly for every valid rate.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Order, StdResult, Storage, Uint128};
use cw_storage_plus::{Bound, Map};

use crate::error::BridgeError;

// ============================================================================
// Constants
// ============================================================================

/// Maximum fee in basis points (100%)
pub const MAX_FEE_BPS: u64 = 10_000;

/// Basis points denominator (10000 = 100%)
pub const BPS_DENOMINATOR: u128 = 10_000;

const DEFAULT_LIMIT: u32 = 10;
const MAX_LIMIT: u32 = 30;

// ============================================================================
// Data Structures
// ============================================================================

/// A configured fee rate for one token
#[cw_serde]
pub struct TokenFee {
    /// CW20 token contract address
    pub token: String,
    /// Fee in basis points
    pub fee_bps: u64,
}

/// Result of splitting a gross amount into fee and net parts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeeSplit {
    pub fee: Uint128,
    pub net: Uint128,
}

impl FeeSplit {
    pub fn from_bps(amount: Uint128, fee_bps: u64) -> Result<Self, BridgeError> {
        validate_fee_bps(fee_bps)?;
        let fee = calculate_fee_from_bps(amount, fee_bps);
        Ok(Self {
            fee,
            net: amount.checked_sub(fee).map_err(cosmwasm_std::StdError::from)?,
        })
    }
}

// ============================================================================
// Registry
// ============================================================================

/// Token -> fee basis points. Tokens without an entry are charged nothing.
pub struct FeeRegistry<'a>(Map<'a, &'a Addr, u64>);

impl<'a> FeeRegistry<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        FeeRegistry(Map::new(namespace))
    }

    /// Current fee rate for `token`, zero when never configured.
    pub fn fee_bps(&self, storage: &dyn Storage, token: &Addr) -> StdResult<u64> {
        Ok(self.0.may_load(storage, token)?.unwrap_or_default())
    }

    /// Replace the fee rate for `token`, returning the previous rate.
    pub fn set_fee_bps(
        &self,
        storage: &mut dyn Storage,
        token: &Addr,
        fee_bps: u64,
    ) -> Result<u64, BridgeError> {
        validate_fee_bps(fee_bps)?;
        let previous = self.fee_bps(storage, token)?;
        self.0.save(storage, token, &fee_bps)?;
        Ok(previous)
    }

    /// Split `amount` using the rate currently configured for `token`.
    pub fn split(
        &self,
        storage: &dyn Storage,
        token: &Addr,
        amount: Uint128,
    ) -> Result<FeeSplit, BridgeError> {
        let fee_bps = self.fee_bps(storage, token)?;
        FeeSplit::from_bps(amount, fee_bps)
    }

    /// Paginated listing of every configured token, ordered by address.
    pub fn list(
        &self,
        storage: &dyn Storage,
        start_after: Option<&Addr>,
        limit: Option<u32>,
    ) -> StdResult<Vec<TokenFee>> {
        let limit = limit.unwrap_or(DEFAULT_LIMIT).min(MAX_LIMIT) as usize;
        let start = start_after.map(Bound::exclusive);

        self.0
            .range(storage, start, None, Order::Ascending)
            .take(limit)
            .map(|item| {
                let (token, fee_bps) = item?;
                Ok(TokenFee {
                    token: token.to_string(),
                    fee_bps,
                })
            })
            .collect()
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Calculate fee amount from amount and bps (floor division)
pub fn calculate_fee_from_bps(amount: Uint128, fee_bps: u64) -> Uint128 {
    amount.multiply_ratio(fee_bps as u128, BPS_DENOMINATOR)
}

/// Validate a fee rate is within [0, MAX_FEE_BPS]
pub fn validate_fee_bps(fee_bps: u64) -> Result<(), BridgeError> {
    if fee_bps > MAX_FEE_BPS {
        return Err(BridgeError::InvalidFee {
            fee_bps,
            max_fee_bps: MAX_FEE_BPS,
        });
    }
    Ok(())
}
