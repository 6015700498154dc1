//! Native Bridge Contract - Entry Points

use bridge_common::OWNER;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_change_withdrawal_fee, execute_end_deposit, execute_receive, execute_start_withdrawal,
    execute_transfer_ownership,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_is_processed, query_owner, query_simulate_withdrawal, query_stats, query_supply,
    query_withdrawal_fee, query_withdrawal_fees,
};
use crate::state::{Stats, CONTRACT_NAME, CONTRACT_VERSION, STATS, WITHDRAWAL_FEES};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = match msg.owner {
        Some(owner) => deps.api.addr_validate(&owner)?,
        None => info.sender,
    };
    OWNER.save(deps.storage, &owner)?;

    for fee in &msg.withdrawal_fees {
        let token = deps.api.addr_validate(&fee.token)?;
        WITHDRAWAL_FEES.set_fee_bps(deps.storage, &token, fee.fee_bps)?;
    }

    STATS.save(deps.storage, &Stats::default())?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("withdrawal_fee_count", msg.withdrawal_fees.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Deposits (mint)
        ExecuteMsg::EndDeposit {
            token,
            amount,
            recipient,
            origin_tx_id,
        } => execute_end_deposit(deps, info, token, amount, recipient, origin_tx_id),

        // Withdrawals (burn)
        ExecuteMsg::StartWithdrawal {
            token,
            amount,
            recipient,
        } => execute_start_withdrawal(deps, info, token, amount, recipient),
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, env, info, cw20_msg),

        // Admin operations
        ExecuteMsg::ChangeWithdrawalFee { token, fee_bps } => {
            execute_change_withdrawal_fee(deps, info, token, fee_bps)
        }
        ExecuteMsg::TransferOwnership { new_owner } => {
            execute_transfer_ownership(deps, info, new_owner)
        }
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Owner {} => to_json_binary(&query_owner(deps)?),
        QueryMsg::WithdrawalFee { token } => to_json_binary(&query_withdrawal_fee(deps, token)?),
        QueryMsg::WithdrawalFees { start_after, limit } => {
            to_json_binary(&query_withdrawal_fees(deps, start_after, limit)?)
        }
        QueryMsg::SimulateWithdrawal { token, amount } => {
            to_json_binary(&query_simulate_withdrawal(deps, token, amount)?)
        }
        QueryMsg::IsProcessed {
            token,
            origin_tx_id,
        } => to_json_binary(&query_is_processed(deps, token, origin_tx_id)?),
        QueryMsg::Supply { token } => to_json_binary(&query_supply(deps, token)?),
        QueryMsg::Stats {} => to_json_binary(&query_stats(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if STATS.may_load(deps.storage)?.is_none() {
        STATS.save(deps.storage, &Stats::default())?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
