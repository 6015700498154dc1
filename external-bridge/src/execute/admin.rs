//! Admin operations handlers.
//!
//! This module handles:
//! - Deposit fee changes
//! - Ownership transfer

use bridge_common::{Authority, OWNER};
use cosmwasm_std::{DepsMut, Event, MessageInfo, Response};

use crate::error::ContractError;
use crate::state::DEPOSIT_FEES;

/// Set the deposit fee for a token. Applies to deposits started afterwards.
pub fn execute_change_deposit_fee(
    deps: DepsMut,
    info: MessageInfo,
    token: String,
    fee_bps: u64,
) -> Result<Response, ContractError> {
    OWNER.assert_authorized(deps.as_ref(), &info.sender)?;

    let token = deps.api.addr_validate(&token)?;
    let old_fee_bps = DEPOSIT_FEES.set_fee_bps(deps.storage, &token, fee_bps)?;

    Ok(Response::new()
        .add_attribute("method", "change_deposit_fee")
        .add_event(
            Event::new("fee_changed")
                .add_attribute("direction", "deposit")
                .add_attribute("token", token)
                .add_attribute("old_fee_bps", old_fee_bps.to_string())
                .add_attribute("fee_bps", fee_bps.to_string()),
        ))
}

/// Hand the owner role to `new_owner` in one step.
pub fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_owner: String,
) -> Result<Response, ContractError> {
    Ok(OWNER.transfer(deps, &info.sender, &new_owner)?)
}
