//! Access control.
//!
//! A single owner gates every privileged call. The bridges only talk to the
//! `Authority` trait, so the trust model behind it can change without
//! touching the transfer state machine.

use cosmwasm_std::{Addr, Deps, DepsMut, Event, Response, StdResult, Storage};
use cw_storage_plus::Item;

use crate::error::BridgeError;

/// The owner of a bridge instance
pub const OWNER: Owner = Owner::new("owner");

/// Decides whether a sender may perform a privileged operation.
pub trait Authority {
    fn assert_authorized(&self, deps: Deps, sender: &Addr) -> Result<(), BridgeError>;
}

/// Single transferable owner address.
pub struct Owner<'a>(Item<'a, Addr>);

impl<'a> Owner<'a> {
    pub const fn new(namespace: &'a str) -> Self {
        Owner(Item::new(namespace))
    }

    pub fn load(&self, storage: &dyn Storage) -> StdResult<Addr> {
        self.0.load(storage)
    }

    pub fn save(&self, storage: &mut dyn Storage, owner: &Addr) -> StdResult<()> {
        self.0.save(storage, owner)
    }

    /// Replace the owner in one step. Only the current owner may call this.
    pub fn transfer(
        &self,
        deps: DepsMut,
        sender: &Addr,
        new_owner: &str,
    ) -> Result<Response, BridgeError> {
        self.assert_authorized(deps.as_ref(), sender)?;

        let new_owner = deps.api.addr_validate(new_owner)?;
        self.save(deps.storage, &new_owner)?;

        Ok(Response::new()
            .add_attribute("method", "transfer_ownership")
            .add_event(
                Event::new("ownership_transferred")
                    .add_attribute("previous_owner", sender)
                    .add_attribute("new_owner", new_owner),
            ))
    }
}

impl<'a> Authority for Owner<'a> {
    fn assert_authorized(&self, deps: Deps, sender: &Addr) -> Result<(), BridgeError> {
        if *sender != self.load(deps.storage)? {
            return Err(BridgeError::Unauthorized);
        }
        Ok(())
    }
}
