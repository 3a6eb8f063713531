use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, Event, MessageInfo, Order, Response,
    StdError, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{reject_funds, source_allowed, validate_metadata, validate_sources};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:ftm-achievement-nft";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");
const DEFAULT_QUERY_LIMIT: u32 = 30;
const MAX_QUERY_LIMIT: u32 = 100;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        name: msg.name,
        symbol: msg.symbol,
    };
    CONFIG.save(deps.storage, &config)?;
    METADATA_COUNT.save(deps.storage, &0u64)?;
    TOKEN_COUNT.save(deps.storage, &0u64)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("name", config.name)
        .add_attribute("symbol", config.symbol))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::RegisterAchievement { metadata } => {
            execute_register_achievement(deps, env, info, metadata)
        }
        ExecuteMsg::AwardAchievement { user, metadata_id } => {
            execute_award_achievement(deps, env, info, user, metadata_id)
        }
        ExecuteMsg::TransferNft {
            recipient,
            token_id,
        } => execute_transfer_nft(deps, env, info, recipient, token_id),
        ExecuteMsg::SendNft {
            contract,
            token_id,
            msg,
        } => execute_send_nft(deps, env, info, contract, token_id, msg),
    }
}

// ─── Execute: Registration ──────────────────────────────────────────────────

pub fn execute_register_achievement(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    metadata: MetadataRequest,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    let rarity = validate_metadata(&metadata)?;

    let id = METADATA_COUNT.load(deps.storage)? + 1;
    let record = AchievementMetadata {
        id,
        source: info.sender,
        source_name: metadata.source_name,
        rarity,
        title: metadata.title,
        description: metadata.description,
        points: metadata.points,
    };
    METADATA.save(deps.storage, id, &record)?;
    METADATA_COUNT.save(deps.storage, &id)?;

    let event = Event::new("achievement_registered")
        .add_attribute("metadata_id", id.to_string())
        .add_attribute("source", record.source.as_str());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "register_achievement")
        .add_attribute("metadata_id", id.to_string())
        .add_attribute("source", record.source.as_str())
        .add_attribute("points", record.points.to_string()))
}

// ─── Execute: Awarding ──────────────────────────────────────────────────────

pub fn execute_award_achievement(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    user: String,
    metadata_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let metadata = METADATA
        .may_load(deps.storage, metadata_id)?
        .ok_or(ContractError::MetadataNotFound { metadata_id })?;
    if metadata.source != info.sender {
        return Err(ContractError::NotMetadataOwner);
    }

    let user = deps.api.addr_validate(&user)?;
    if user == info.sender {
        return Err(ContractError::SelfAward);
    }

    // Same metadata cannot be awarded twice to the same address
    if ACHIEVEMENT_INDEX
        .may_load(deps.storage, (&user, metadata_id))?
        .is_some()
    {
        return Err(ContractError::DuplicateAchievement {
            metadata_id,
            user: user.to_string(),
        });
    }

    let token_id = TOKEN_COUNT.load(deps.storage)?;
    let achievement = Achievement {
        token_id,
        user: user.clone(),
        metadata,
        timestamp: env.block.time,
    };

    TOKENS.save(deps.storage, token_id, &achievement)?;
    ACHIEVEMENT_INDEX.save(deps.storage, (&user, metadata_id), &token_id)?;
    OWNER_TOKENS.save(deps.storage, (&user, token_id), &true)?;
    TOKEN_COUNT.save(deps.storage, &(token_id + 1))?;

    let event = Event::new("achievement_awarded")
        .add_attribute("user", user.as_str())
        .add_attribute("metadata_id", metadata_id.to_string())
        .add_attribute("token_id", token_id.to_string());

    Ok(Response::new()
        .add_event(event)
        .add_attribute("action", "award_achievement")
        .add_attribute("token_id", token_id.to_string())
        .add_attribute("user", user.as_str())
        .add_attribute("metadata_id", metadata_id.to_string()))
}

// ─── Execute: Transfers (soul-bound) ────────────────────────────────────────

/// Achievements never move; rejected before any lookup or authorization.
pub fn execute_transfer_nft(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _recipient: String,
    _token_id: u64,
) -> Result<Response, ContractError> {
    Err(ContractError::Soulbound)
}

pub fn execute_send_nft(
    _deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    _contract: String,
    _token_id: u64,
    _msg: Binary,
) -> Result<Response, ContractError> {
    Err(ContractError::Soulbound)
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> Result<Binary, ContractError> {
    match msg {
        QueryMsg::Config {} => Ok(query_config(deps)?),
        QueryMsg::Metadata { id } => query_metadata(deps, id),
        QueryMsg::NumMetadata {} => Ok(query_num_metadata(deps)?),
        QueryMsg::HasAchievement { user, metadata_id } => {
            Ok(query_has_achievement(deps, user, metadata_id)?)
        }
        QueryMsg::Points { user, sources } => Ok(query_points(deps, user, sources)?),
        QueryMsg::Achievements {
            user,
            sources,
            offset,
            limit,
        } => query_achievements(deps, user, sources, offset, limit),
        QueryMsg::NftInfo { token_id } => query_nft_info(deps, token_id),
        QueryMsg::OwnerOf { token_id } => query_owner_of(deps, token_id),
        QueryMsg::Tokens {
            owner,
            start_after,
            limit,
        } => Ok(query_tokens(deps, owner, start_after, limit)?),
        QueryMsg::NumTokens {} => Ok(query_num_tokens(deps)?),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_metadata(deps: Deps, id: u64) -> Result<Binary, ContractError> {
    let metadata = METADATA
        .may_load(deps.storage, id)?
        .ok_or(ContractError::MetadataNotFound { metadata_id: id })?;
    Ok(to_json_binary(&metadata)?)
}

pub fn query_num_metadata(deps: Deps) -> StdResult<Binary> {
    let count = METADATA_COUNT.load(deps.storage)?;
    to_json_binary(&NumMetadataResponse { count })
}

pub fn query_has_achievement(deps: Deps, user: String, metadata_id: u64) -> StdResult<Binary> {
    let user_addr = deps.api.addr_validate(&user)?;
    let token_id = ACHIEVEMENT_INDEX.may_load(deps.storage, (&user_addr, metadata_id))?;

    to_json_binary(&HasAchievementResponse {
        has_achievement: token_id.is_some(),
        token_id,
    })
}

pub fn query_points(deps: Deps, user: String, sources: Vec<String>) -> StdResult<Binary> {
    let user_addr = deps.api.addr_validate(&user)?;
    let sources = validate_sources(deps.api, &sources)?;

    let points = load_achievements(deps, &user_addr, &sources)?
        .iter()
        .try_fold(0u64, |total, a| total.checked_add(a.metadata.points))
        .ok_or_else(|| StdError::generic_err("points overflow"))?;

    to_json_binary(&PointsResponse { points })
}

pub fn query_achievements(
    deps: Deps,
    user: String,
    sources: Vec<String>,
    offset: u32,
    limit: u32,
) -> Result<Binary, ContractError> {
    let user_addr = deps.api.addr_validate(&user)?;
    let sources = validate_sources(deps.api, &sources)?;

    let matching = load_achievements(deps, &user_addr, &sources)?;
    if !matching.is_empty() && offset as usize > matching.len() {
        return Err(ContractError::OffsetOutOfRange {
            offset,
            available: matching.len() as u64,
        });
    }

    let limit = if limit == 0 {
        usize::MAX
    } else {
        limit as usize
    };
    let achievements: Vec<Achievement> = matching
        .into_iter()
        .skip(offset as usize)
        .take(limit)
        .collect();

    Ok(to_json_binary(&AchievementsResponse { achievements })?)
}

pub fn query_nft_info(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    Ok(to_json_binary(&token)?)
}

pub fn query_owner_of(deps: Deps, token_id: u64) -> Result<Binary, ContractError> {
    let token = TOKENS
        .may_load(deps.storage, token_id)?
        .ok_or(ContractError::TokenNotFound { token_id })?;
    Ok(to_json_binary(&OwnerOfResponse {
        owner: token.user.to_string(),
    })?)
}

pub fn query_tokens(
    deps: Deps,
    owner: String,
    start_after: Option<u64>,
    limit: Option<u32>,
) -> StdResult<Binary> {
    let owner_addr = deps.api.addr_validate(&owner)?;
    let limit = limit.unwrap_or(DEFAULT_QUERY_LIMIT).min(MAX_QUERY_LIMIT) as usize;
    let start = start_after.map(cw_storage_plus::Bound::exclusive);

    let tokens: Vec<u64> = OWNER_TOKENS
        .prefix(&owner_addr)
        .keys(deps.storage, start, None, Order::Ascending)
        .take(limit)
        .collect::<StdResult<_>>()?;

    to_json_binary(&TokensResponse { tokens })
}

pub fn query_num_tokens(deps: Deps) -> StdResult<Binary> {
    let count = TOKEN_COUNT.load(deps.storage)?;
    to_json_binary(&NumTokensResponse { count })
}

/// All awards of `user` in award order, restricted to `sources` when non-empty.
fn load_achievements(deps: Deps, user: &Addr, sources: &[Addr]) -> StdResult<Vec<Achievement>> {
    let mut achievements = Vec::new();
    for token_id in OWNER_TOKENS
        .prefix(user)
        .keys(deps.storage, None, None, Order::Ascending)
    {
        let achievement = TOKENS.load(deps.storage, token_id?)?;
        if source_allowed(sources, &achievement.metadata.source) {
            achievements.push(achievement);
        }
    }
    Ok(achievements)
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
