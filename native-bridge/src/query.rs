//! Query handlers for the native bridge contract.

use bridge_common::msg::{
    FeeResponse, FeesResponse, IsProcessedResponse, OwnerResponse, SimulationResponse,
};
use bridge_common::token::query_total_supply;
use bridge_common::{FeeSplit, OriginTxId, OWNER, PROCESSED_TRANSFERS};
use cosmwasm_std::{Binary, Deps, StdError, StdResult, Uint128};

use crate::msg::{StatsResponse, SupplyResponse};
use crate::state::{STATS, WITHDRAWAL_FEES};

pub fn query_owner(deps: Deps) -> StdResult<OwnerResponse> {
    Ok(OwnerResponse {
        owner: OWNER.load(deps.storage)?,
    })
}

pub fn query_withdrawal_fee(deps: Deps, token: String) -> StdResult<FeeResponse> {
    let token = deps.api.addr_validate(&token)?;
    let fee_bps = WITHDRAWAL_FEES.fee_bps(deps.storage, &token)?;
    Ok(FeeResponse { token, fee_bps })
}

pub fn query_withdrawal_fees(
    deps: Deps,
    start_after: Option<String>,
    limit: Option<u32>,
) -> StdResult<FeesResponse> {
    let start_after = start_after
        .map(|token| deps.api.addr_validate(&token))
        .transpose()?;
    let fees = WITHDRAWAL_FEES.list(deps.storage, start_after.as_ref(), limit)?;
    Ok(FeesResponse { fees })
}

pub fn query_simulate_withdrawal(
    deps: Deps,
    token: String,
    amount: Uint128,
) -> StdResult<SimulationResponse> {
    let token = deps.api.addr_validate(&token)?;
    let fee_bps = WITHDRAWAL_FEES.fee_bps(deps.storage, &token)?;
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
    Ok(IsProcessedResponse {
        processed: PROCESSED_TRANSFERS.is_processed(deps.storage, &token, &origin_tx_id)?,
    })
}

pub fn query_supply(deps: Deps, token: String) -> StdResult<SupplyResponse> {
    let token = deps.api.addr_validate(&token)?;
    let total_supply = query_total_supply(&deps.querier, &token)?;
    Ok(SupplyResponse {
        token,
        total_supply,
    })
}

pub fn query_stats(deps: Deps) -> StdResult<StatsResponse> {
    let stats = STATS.load(deps.storage)?;
    Ok(StatsResponse {
        deposits_completed: stats.deposits_completed,
        withdrawals_started: stats.withdrawals_started,
    })
}
