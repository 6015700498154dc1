//! CW20 collaborator helpers.
//!
//! The bridges never touch balances directly: every custody or supply change
//! is a CW20 execute message dispatched after the bridge state is saved.

use cosmwasm_std::{
    to_json_binary, Addr, CosmosMsg, QuerierWrapper, StdResult, Uint128, WasmMsg,
};
use cw20::{BalanceResponse, Cw20ExecuteMsg, Cw20QueryMsg, MinterResponse, TokenInfoResponse};

use crate::error::BridgeError;

/// Wrap a CW20 execute message addressed to `token`.
pub fn cw20_execute(token: &Addr, msg: &Cw20ExecuteMsg) -> StdResult<CosmosMsg> {
    Ok(CosmosMsg::Wasm(WasmMsg::Execute {
        contract_addr: token.to_string(),
        msg: to_json_binary(msg)?,
        funds: vec![],
    }))
}

pub fn transfer_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_execute(
        token,
        &Cw20ExecuteMsg::Transfer {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Pull `amount` from `owner` using the allowance granted to the bridge.
pub fn transfer_from_msg(
    token: &Addr,
    owner: &Addr,
    recipient: &Addr,
    amount: Uint128,
) -> StdResult<CosmosMsg> {
    cw20_execute(
        token,
        &Cw20ExecuteMsg::TransferFrom {
            owner: owner.to_string(),
            recipient: recipient.to_string(),
            amount,
        },
    )
}

pub fn mint_msg(token: &Addr, recipient: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_execute(
        token,
        &Cw20ExecuteMsg::Mint {
            recipient: recipient.to_string(),
            amount,
        },
    )
}

/// Burn from the bridge's own balance.
pub fn burn_msg(token: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_execute(token, &Cw20ExecuteMsg::Burn { amount })
}

/// Burn from `owner` using the allowance granted to the bridge.
pub fn burn_from_msg(token: &Addr, owner: &Addr, amount: Uint128) -> StdResult<CosmosMsg> {
    cw20_execute(
        token,
        &Cw20ExecuteMsg::BurnFrom {
            owner: owner.to_string(),
            amount,
        },
    )
}

/// Query CW20 token balance
pub fn query_balance(querier: &QuerierWrapper, token: &Addr, account: &Addr) -> StdResult<Uint128> {
    let response: BalanceResponse = querier.query_wasm_smart(
        token,
        &Cw20QueryMsg::Balance {
            address: account.to_string(),
        },
    )?;
    Ok(response.balance)
}

/// Query CW20 total supply
pub fn query_total_supply(querier: &QuerierWrapper, token: &Addr) -> StdResult<Uint128> {
    let response: TokenInfoResponse = querier.query_wasm_smart(token, &Cw20QueryMsg::TokenInfo {})?;
    Ok(response.total_supply)
}

/// Fail unless `token` answers the CW20 `TokenInfo` query.
///
/// A `Receive` hook carries the amount as reported by its sender, so the
/// sender has to be a token contract for the amount to mean anything.
pub fn assert_cw20(querier: &QuerierWrapper, token: &Addr) -> Result<(), BridgeError> {
    querier
        .query_wasm_smart::<TokenInfoResponse>(token, &Cw20QueryMsg::TokenInfo {})
        .map(|_| ())
        .map_err(|_| BridgeError::InvalidToken {
            token: token.to_string(),
            reason: "not a CW20 contract".to_string(),
        })
}

/// Fail unless `minter` is the registered minter of `token`.
pub fn assert_minter(
    querier: &QuerierWrapper,
    token: &Addr,
    minter: &Addr,
) -> Result<(), BridgeError> {
    let response: Option<MinterResponse> = querier
        .query_wasm_smart(token, &Cw20QueryMsg::Minter {})
        .map_err(|_| BridgeError::InvalidToken {
            token: token.to_string(),
            reason: "not a CW20 contract".to_string(),
        })?;

    match response {
        Some(info) if info.minter == minter.as_str() => Ok(()),
        _ => Err(BridgeError::InvalidToken {
            token: token.to_string(),
            reason: format!("{} is not the minter", minter),
        }),
    }
}
