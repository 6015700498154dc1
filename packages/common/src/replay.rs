//! Replay Guard
//!
//! Completion calls are keyed by `(token, origin_tx_id)`. A key moves from
//! unprocessed to processed exactly once and never back, so a relay retry or
//! a duplicate submission after a reorg fails instead of paying out twice.
//!
//! The marker is written in the same transaction that dispatches the funds
//! message; if that message fails the whole call, marker included, is rolled
//! back.

use std::fmt;

use cosmwasm_std::{Addr, Binary, StdResult, Storage};
use cw_storage_plus::Map;

use crate::error::BridgeError;

/// Processed completions.
/// Key: (token address, 32-byte origin tx id), Value: always true
pub const PROCESSED_TRANSFERS: ReplayGuard = ReplayGuard::new("processed_transfers");

/// Identifier of the originating transaction on the other chain
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct OriginTxId([u8; 32]);

impl OriginTxId {
    pub fn new(bytes: [u8; 32]) -> Self {
        OriginTxId(bytes)
    }

    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    pub fn to_hex(&self) -> String {
        format!("0x{}", hex::encode(self.0))
    }
}

impl TryFrom<&Binary> for OriginTxId {
    type Error = BridgeError;

    fn try_from(value: &Binary) -> Result<Self, Self::Error> {
        let bytes: [u8; 32] = value
            .as_slice()
            .try_into()
            .map_err(|_| BridgeError::InvalidHashLength { got: value.len() })?;
        Ok(OriginTxId(bytes))
    }
}

impl fmt::Display for OriginTxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

/// At-most-once marker set keyed by (token, origin tx id).
pub struct ReplayGuard<'a>(Map<'a, (&'a Addr, &'a [u8]), bool>);

impl<'a> ReplayGuard<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        ReplayGuard(Map::new(namespace))
    }

    pub fn is_processed(
        &self,
        storage: &dyn Storage,
        token: &Addr,
        origin_tx_id: &OriginTxId,
    ) -> StdResult<bool> {
        Ok(self
            .0
            .may_load(storage, (token, origin_tx_id.as_bytes().as_slice()))?
            .unwrap_or(false))
    }

    /// Fails with `AlreadyProcessed` if the key is set, otherwise sets it.
    pub fn check_and_mark(
        &self,
        storage: &mut dyn Storage,
        token: &Addr,
        origin_tx_id: &OriginTxId,
    ) -> Result<(), BridgeError> {
        if self.is_processed(storage, token, origin_tx_id)? {
            return Err(BridgeError::AlreadyProcessed {
                token: token.to_string(),
                origin_tx_id: origin_tx_id.to_hex(),
            });
        }
        self.0
            .save(storage, (token, origin_tx_id.as_bytes().as_slice()), &true)?;
        Ok(())
    }
}
