use cosmwasm_std::{Addr, Api, MessageInfo, StdResult};

use crate::error::ContractError;
use crate::msg::MetadataRequest;
use crate::state::Rarity;

/// Check a registration payload and resolve its rarity.
/// Field checks run before the rarity check so the first empty field is the one reported.
pub fn validate_metadata(metadata: &MetadataRequest) -> Result<Rarity, ContractError> {
    if metadata.source_name.is_empty() {
        return Err(ContractError::EmptySourceName);
    }
    if metadata.title.is_empty() {
        return Err(ContractError::EmptyTitle);
    }
    if metadata.description.is_empty() {
        return Err(ContractError::EmptyDescription);
    }
    if metadata.points == 0 {
        return Err(ContractError::ZeroPoints);
    }
    Rarity::try_from(metadata.rarity)
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}

/// Validate a source whitelist. An empty list stays empty and means "no filter".
pub fn validate_sources(api: &dyn Api, sources: &[String]) -> StdResult<Vec<Addr>> {
    sources.iter().map(|s| api.addr_validate(s)).collect()
}

pub fn source_allowed(sources: &[Addr], source: &Addr) -> bool {
    sources.is_empty() || sources.contains(source)
}
