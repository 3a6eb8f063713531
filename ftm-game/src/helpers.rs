use cosmwasm_std::{Addr, Deps, Event, MessageInfo};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Event type the registry's `achievement_registered` event carries once emitted by the chain.
pub const REGISTERED_EVENT: &str = "wasm-achievement_registered";

pub fn assert_dev(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if *sender != config.dev {
        return Err(ContractError::Unauthorized {
            role: "dev".to_string(),
        });
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// Pull the assigned id out of the registry's registration event.
pub fn registered_metadata_id(events: &[Event]) -> Result<u64, ContractError> {
    events
        .iter()
        .filter(|e| e.ty == REGISTERED_EVENT)
        .flat_map(|e| e.attributes.iter())
        .find(|attr| attr.key == "metadata_id")
        .and_then(|attr| attr.value.parse::<u64>().ok())
        .ok_or(ContractError::MissingMetadataId)
}
