use cosmwasm_std::{
    to_json_binary, Addr, Binary, Deps, DepsMut, Env, MessageInfo, Reply, Response, StdError,
    StdResult, SubMsg, WasmMsg,
};
use cw2::set_contract_version;
use ftm_achievement_nft::msg::{
    ExecuteMsg as RegistryExecuteMsg, HasAchievementResponse, QueryMsg as RegistryQueryMsg,
};

use crate::catalog::dungeon_catalog;
use crate::error::ContractError;
use crate::helpers::{assert_dev, registered_metadata_id, reject_funds};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:ftm-game";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

pub const REGISTER_REPLY_ID: u64 = 1;

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let registry = deps.api.addr_validate(&msg.registry)?;
    let config = Config {
        dev: info.sender,
        registry,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("dev", config.dev.as_str())
        .add_attribute("registry", config.registry.as_str()))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetupAchievementsMetadata {} => {
            execute_setup_achievements_metadata(deps, env, info)
        }
        ExecuteMsg::AwardAchievementOnlyDev { user, metadata_id } => {
            execute_award_achievement_only_dev(deps, env, info, user, metadata_id)
        }
        ExecuteMsg::Adventure {} => execute_adventure(deps, env, info),
        ExecuteMsg::SupplyFunds {} => execute_supply_funds(deps, env, info),
    }
}

// ─── Execute: Catalog ───────────────────────────────────────────────────────

pub fn execute_setup_achievements_metadata(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_dev(deps.as_ref(), &info.sender)?;

    if GAME_ACHIEVEMENTS.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadySetUp);
    }
    GAME_ACHIEVEMENTS.save(deps.storage, &Vec::new())?;

    let config = CONFIG.load(deps.storage)?;
    let catalog = dungeon_catalog();
    let count = catalog.len();

    // The registry records this contract as the source of every entry
    let messages = catalog
        .into_iter()
        .map(|metadata| {
            let msg = WasmMsg::Execute {
                contract_addr: config.registry.to_string(),
                msg: to_json_binary(&RegistryExecuteMsg::RegisterAchievement { metadata })?,
                funds: vec![],
            };
            Ok(SubMsg::reply_on_success(msg, REGISTER_REPLY_ID))
        })
        .collect::<StdResult<Vec<_>>>()?;

    Ok(Response::new()
        .add_submessages(messages)
        .add_attribute("action", "setup_achievements_metadata")
        .add_attribute("count", count.to_string()))
}

// ─── Execute: Awarding ──────────────────────────────────────────────────────

pub fn execute_award_achievement_only_dev(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    user: String,
    metadata_id: u64,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_dev(deps.as_ref(), &info.sender)?;

    let config = CONFIG.load(deps.storage)?;
    let user = deps.api.addr_validate(&user)?;

    Ok(Response::new()
        .add_message(award_msg(&config.registry, &user, metadata_id)?)
        .add_attribute("action", "award_achievement_only_dev")
        .add_attribute("user", user.as_str())
        .add_attribute("metadata_id", metadata_id.to_string()))
}

pub fn execute_adventure(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;

    let metadata_ids = GAME_ACHIEVEMENTS
        .may_load(deps.storage)?
        .filter(|ids| !ids.is_empty())
        .ok_or(ContractError::NotSetUp)?;
    let config = CONFIG.load(deps.storage)?;

    let mut messages = Vec::with_capacity(metadata_ids.len());
    for metadata_id in metadata_ids {
        let held: HasAchievementResponse = deps.querier.query_wasm_smart(
            &config.registry,
            &RegistryQueryMsg::HasAchievement {
                user: info.sender.to_string(),
                metadata_id,
            },
        )?;
        if !held.has_achievement {
            messages.push(award_msg(&config.registry, &info.sender, metadata_id)?);
        }
    }

    let awarded = messages.len();
    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("action", "adventure")
        .add_attribute("player", info.sender.as_str())
        .add_attribute("awarded", awarded.to_string()))
}

fn award_msg(registry: &Addr, user: &Addr, metadata_id: u64) -> StdResult<WasmMsg> {
    Ok(WasmMsg::Execute {
        contract_addr: registry.to_string(),
        msg: to_json_binary(&RegistryExecuteMsg::AwardAchievement {
            user: user.to_string(),
            metadata_id,
        })?,
        funds: vec![],
    })
}

// ─── Execute: Funds ─────────────────────────────────────────────────────────

pub fn execute_supply_funds(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
) -> Result<Response, ContractError> {
    let sent = info.funds.first().ok_or(ContractError::NoFundsSent)?;

    let balance = deps
        .querier
        .query_balance(&env.contract.address, &sent.denom)?;

    Ok(Response::new()
        .add_attribute("action", "supply_funds")
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("amount", sent.to_string())
        .add_attribute("new_balance", balance.to_string()))
}

// ─── Reply ──────────────────────────────────────────────────────────────────

pub fn reply(deps: DepsMut, _env: Env, msg: Reply) -> Result<Response, ContractError> {
    match msg.id {
        REGISTER_REPLY_ID => reply_register(deps, msg),
        id => Err(ContractError::UnknownReplyId { id }),
    }
}

fn reply_register(deps: DepsMut, msg: Reply) -> Result<Response, ContractError> {
    let response = msg.result.into_result().map_err(StdError::generic_err)?;
    let metadata_id = registered_metadata_id(&response.events)?;

    GAME_ACHIEVEMENTS.update(deps.storage, |mut ids| -> StdResult<_> {
        ids.push(metadata_id);
        Ok(ids)
    })?;

    Ok(Response::new()
        .add_attribute("action", "achievement_registered")
        .add_attribute("metadata_id", metadata_id.to_string()))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Achievements {} => query_achievements(deps),
        QueryMsg::Balance { denom } => query_balance(deps, env, denom),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_achievements(deps: Deps) -> StdResult<Binary> {
    let metadata_ids = GAME_ACHIEVEMENTS.may_load(deps.storage)?.unwrap_or_default();
    to_json_binary(&GameAchievementsResponse { metadata_ids })
}

pub fn query_balance(deps: Deps, env: Env, denom: String) -> StdResult<Binary> {
    let amount = deps.querier.query_balance(&env.contract.address, denom)?;
    to_json_binary(&BalanceResponse { amount })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
