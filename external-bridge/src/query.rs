//! Query handlers for the external bridge contract.

use bridge_common::msg::{
    FeeResponse, FeesResponse, IsProcessedResponse, OwnerResponse, SimulationResponse,
};
use bridge_common::token::query_balance;
use bridge_common::{FeeSplit, OriginTxId, OWNER, PROCESSED_TRANSFERS};
use cosmwasm_std::{Binary, Deps, Env, StdError, StdResult, Uint128};

use crate::msg::{CustodyResponse, StatsResponse};
use crate::state::{DEPOSIT_FEES, STATS};

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNER.load(deps.storage)?,
    })
}

pub fn query_deposit_fee(deps: Deps, token: String) -> StdResult<FeeResponse> {
    let token = deps.api.addr_validate(&token)?;
    let fee_bps = DEPOSIT_FEES.fee_bps(deps.storage, &token)?;
    Ok(FeeResponse { token, fee_bps })
}

pub fn query_deposit_fees(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<FeesResponse> {
    let start_after = start_after
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;
    let fees = DEPOSIT_FEES.list(deps.storage, start_after.as_ref(), limit)?;
    Ok(FeesResponse { fees })
}

/// Preview the fee split a deposit of `amount` would get at the current rate.
pub fn query_simulate_deposit(
    deps: Deps,
    token: String,
    amount: Uint128,
) -> StdResult<SimulationResponse> {
    let token = deps.api.addr_validate(&token)?;
    let fee_bps = DEPOSIT_FEES.fee_bps(deps.storage, &token)?;
    let split =
        FeeSplit::from_bps(amount, fee_bps).map_err(|e| StdError::generic_err(e.to_string()))?;

    Ok(SimulationResponse {
        fee_bps,
        fee: split.fee,
        net: split.net,
    })
}

pub fn query_is_processed(
    deps: Deps,
    token: String,
    origin_tx_id: Binary,
) -> StdResult<IsProcessedResponse> {
    let token = deps.api.addr_validate(&token)?;
    let origin_tx_id =
        OriginTxId::try_from(&origin_tx_id).map_err(|e| StdError::generic_err(e.to_string()))?;
    let processed = PROCESSED_TRANSFERS.is_processed(deps.storage, &token, &origin_tx_id)?;
    Ok(IsProcessedResponse { processed })
}

pub fn query_custody(deps: Deps, env: Env, token: String) -> StdResult<CustodyResponse> {
    let token = deps.api.addr_validate(&token)?;
    let amount = query_balance(&deps.querier, &token, &env.contract.address)?;
    Ok(CustodyResponse { token, amount })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        deposits_started: stats.deposits_started,
        withdrawals_completed: stats.withdrawals_completed,
    })
}
