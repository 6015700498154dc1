//! Withdrawal handlers (burn).
//!
//! Like deposits on the external bridge, withdrawals are not replay-guarded:
//! each call burns its own tokens.

use bridge_common::token::{assert_minter, burn_from_msg, burn_msg, mint_msg, transfer_msg};
use bridge_common::{BridgeError, FeeSplit, OWNER};
use cosmwasm_std::{
    from_json, Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128,
};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{STATS, WITHDRAWAL_FEES};

/// Burn wrapped tokens from the sender with a CW20 allowance.
///
/// The full amount is burned and the fee is minted back to the owner, so the
/// supply drops by the net amount.
pub fn execute_start_withdrawal(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&token)?;
    let sender = info.sender;

    let (split, owner) = start(deps, &token, amount, &recipient)?;

    let mut messages = vec![burn_from_msg(&token, &sender, amount)?];
    if !split.fee.is_zero() {
        messages.push(mint_msg(&token, &owner, split.fee)?);
    }

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "start_withdrawal")
        .add_event(withdrawal_started(&token, &sender, &recipient, &split)))
}

/// Burn wrapped tokens delivered by CW20 `Send`. The sender of this message
/// is the token contract; the funds are already held by the bridge. Only
/// tokens this bridge mints are accepted.
pub fn execute_receive(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let token = info.sender;
    assert_minter(&deps.querier, &token, &env.contract.address)?;
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;

    match from_json::<ReceiveMsg>(&cw20_msg.msg)? {
        ReceiveMsg::StartWithdrawal { recipient } => {
            let (split, owner) = start(deps, &token, cw20_msg.amount, &recipient)?;

            let mut messages: Vec<CosmosMsg> = vec![];
            if !split.fee.is_zero() {
                messages.push(transfer_msg(&token, &owner, split.fee)?);
            }
            // cw20-base rejects zero burns; a 100% fee leaves nothing to burn
            if !split.net.is_zero() {
                messages.push(burn_msg(&token, split.net)?);
            }

            Ok(Response::new()
                .add_messages(messages)
                .add_attribute("method", "start_withdrawal_cw20")
                .add_event(withdrawal_started(&token, &sender, &recipient, &split)))
        }
    }
}

/// Shared validation and bookkeeping. Returns the fee split and the fee
/// receiver.
fn start(
    deps: DepsMut,
    token: &Addr,
    amount: Uint128,
    recipient: &str,
) -> Result<(FeeSplit, Addr), ContractError> {
    if amount.is_zero() {
        return Err(BridgeError::InvalidAmount {
            reason: "Amount must be greater than zero".to_string(),
        }
        .into());
    }
    if recipient.trim().is_empty() {
        return Err(BridgeError::InvalidAddress {
            reason: "Recipient must not be empty".to_string(),
        }
        .into());
    }

    let split = WITHDRAWAL_FEES.split(deps.storage, token, amount)?;
    let owner = OWNER.load(deps.storage)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.withdrawals_started += 1;
    STATS.save(deps.storage, &stats)?;

    Ok((split, owner))
}

fn withdrawal_started(token: &Addr, sender: &Addr, recipient: &str, split: &FeeSplit) -> Event {
    Event::new("withdrawal_started")
        .add_attribute("token", token)
        .add_attribute("sender", sender)
        .add_attribute("recipient", recipient)
        .add_attribute("amount", split.net.to_string())
        .add_attribute("fee", split.fee.to_string())
}
