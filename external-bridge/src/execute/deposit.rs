//! Deposit handlers (lock).
//!
//! Deposits are not replay-guarded: every call is a distinct transfer of
//! funds into custody, so two identical calls lock twice.

use bridge_common::token::{assert_cw20, transfer_from_msg, transfer_msg};
use bridge_common::{BridgeError, OWNER};
use cosmwasm_std::{
    from_json, Addr, CosmosMsg, DepsMut, Env, Event, MessageInfo, Response, Uint128,
};
use cw20::Cw20ReceiveMsg;

use crate::error::ContractError;
use crate::msg::ReceiveMsg;
use crate::state::{DEPOSIT_FEES, STATS};

/// Lock tokens pulled from the sender with a CW20 allowance.
pub fn execute_start_deposit(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    token: String,
    amount: Uint128,
    recipient: String,
) -> Result<Response, ContractError> {
    let token = deps.api.addr_validate(&token)?;
    let pull = transfer_from_msg(&token, &info.sender, &env.contract.address, amount)?;

    lock(deps, token, info.sender, amount, recipient, Some(pull))
        .map(|res| res.add_attribute("method", "start_deposit"))
}

/// Lock tokens delivered by CW20 `Send`. The sender of this message is the
/// token contract; the funds are already in custody. Direct calls from
/// anything that is not a CW20 contract are rejected.
pub fn execute_receive(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let token = info.sender;
    assert_cw20(&deps.querier, &token)?;
    let sender = deps.api.addr_validate(&cw20_msg.sender)?;

    match from_json::<ReceiveMsg>(&cw20_msg.msg)? {
        ReceiveMsg::StartDeposit { recipient } => {
            lock(deps, token, sender, cw20_msg.amount, recipient, None)
                .map(|res| res.add_attribute("method", "start_deposit_cw20"))
        }
    }
}

fn lock(
    deps: DepsMut,
    token: Addr,
    sender: Addr,
    amount: Uint128,
    recipient: String,
    pull: Option<CosmosMsg>,
) -> Result<Response, ContractError> {
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

    // Fee rate is fixed at start time
    let split = DEPOSIT_FEES.split(deps.storage, &token, amount)?;
    let owner = OWNER.load(deps.storage)?;

    let mut stats = STATS.load(deps.storage)?;
    stats.deposits_started += 1;
    STATS.save(deps.storage, &stats)?;

    // Pull first so the fee can be paid out of custody
    let mut messages: Vec<CosmosMsg> = pull.into_iter().collect();
    if !split.fee.is_zero() {
        messages.push(transfer_msg(&token, &owner, split.fee)?);
    }

    Ok(Response::new().add_messages(messages).add_event(
        Event::new("deposit_started")
            .add_attribute("token", token)
            .add_attribute("sender", sender)
            .add_attribute("recipient", recipient)
            .add_attribute("amount", split.net.to_string())
            .add_attribute("fee", split.fee.to_string()),
    ))
}
