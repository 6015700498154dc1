//! Deposit completion (mint).

use bridge_common::token::mint_msg;
use bridge_common::{Authority, BridgeError, OriginTxId, OWNER, PROCESSED_TRANSFERS};
use cosmwasm_std::{Binary, DepsMut, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::STATS;

/// Mint `amount` wrapped tokens to `recipient` for a deposit locked on the
/// external chain. `amount` is the net value reported by the relay.
///
/// Minting fails in the token contract if this bridge is not its minter; the
/// whole call, replay mark included, is then reverted.
pub fn execute_end_deposit(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    recipient: String,
    origin_tx_id: Binary,
) -> Result<Response, ContractError> {
    OWNER.assert_authorized(deps.as_ref(), &info.sender)?;

    if amount.is_zero() {
        return Err(BridgeError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        }
        .into());
    }

    let token = deps.api.addr_validate(&token)?;
    let recipient = deps.api.addr_validate(&recipient)?;
    let origin_tx_id = OriginTxId::try_from(&origin_tx_id)?;

    PROCESSED_TRANSFERS.check_and_mark(deps.storage, &token, &origin_tx_id)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.deposits_completed += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(mint_msg(&token, &recipient, amount)?)
        .add_attribute("method", "end_deposit")
        .add_event(
            Event::new("deposit_completed")
                .add_attribute("token", token)
                .add_attribute("recipient", recipient)
                .add_attribute("amount", amount.to_string())
                .add_attribute("origin_tx_id", origin_tx_id.to_hex()),
        ))
}
