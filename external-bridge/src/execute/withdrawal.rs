//! Withdrawal completion (release).

use bridge_common::token::{query_balance, transfer_msg};
use bridge_common::{Authority, BridgeError, OriginTxId, OWNER, PROCESSED_TRANSFERS};
use cosmwasm_std::{Binary, DepsMut, Env, Event, MessageInfo, Response, Uint128};

use crate::error::ContractError;
use crate::state::STATS;

/// Release `amount` from custody to `recipient` for a withdrawal started on
/// the native chain. `amount` is the net value reported by the relay; no fee
/// is charged here.
pub fn execute_end_withdrawal(
    deps: DepsMut,
    env: Env,
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

    let available = query_balance(&deps.querier, &token, &env.contract.address)?;
    if available < amount {
        return Err(ContractError::InsufficientCustody {
            available,
            requested: amount,
        });
    }

    let mut stats = STATS.load(deps.storage)?;
    stats.withdrawals_completed += 1;
    STATS.save(deps.storage, &stats)?;

    Ok(Response::new()
        .add_message(transfer_msg(&token, &recipient, amount)?)
        .add_attribute("method", "end_withdrawal")
        .add_event(
            Event::new("withdrawal_completed")
                .add_attribute("token", token)
                .add_attribute("recipient", recipient)
                .add_attribute("amount", amount.to_string())
                .add_attribute("origin_tx_id", origin_tx_id.to_hex()),
        ))
}
