use cosmwasm_std::{Addr, Deps, MessageInfo};
use ftm_achievement_nft::msg::{HasAchievementResponse, QueryMsg as RegistryQueryMsg};

use crate::error::ContractError;
use crate::state::CONFIG;

/// Ask the registry whether `sender` holds the configured achievement.
pub fn assert_has_required_achievement(deps: Deps, sender: &Addr) -> Result<(), ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let res: HasAchievementResponse = deps.querier.query_wasm_smart(
        &config.registry,
        &RegistryQueryMsg::HasAchievement {
            user: sender.to_string(),
            metadata_id: config.required_achievement_id,
        },
    )?;
    if !res.has_achievement {
        return Err(ContractError::MissingAchievement);
    }
    Ok(())
}

pub fn reject_funds(info: &MessageInfo) -> Result<(), ContractError> {
    if !info.funds.is_empty() {
        return Err(ContractError::UnexpectedFunds);
    }
    Ok(())
}
