use cosmwasm_std::{to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::helpers::{assert_has_required_achievement, reject_funds};
use crate::msg::*;
use crate::state::*;

const CONTRACT_NAME: &str = "crates.io:ftm-greeting";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

// ─── Instantiate ────────────────────────────────────────────────────────────

pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        registry: deps.api.addr_validate(&msg.registry)?,
        required_achievement_id: msg.required_achievement_id,
    };
    CONFIG.save(deps.storage, &config)?;
    GREETING.save(deps.storage, &msg.greeting)?;

    Ok(Response::new()
        .add_attribute("action", "instantiate")
        .add_attribute("contract", CONTRACT_NAME)
        .add_attribute("registry", config.registry.as_str())
        .add_attribute(
            "required_achievement_id",
            config.required_achievement_id.to_string(),
        ))
}

pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetGreeting { greeting } => execute_set_greeting(deps, env, info, greeting),
    }
}

pub fn execute_set_greeting(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    greeting: String,
) -> Result<Response, ContractError> {
    reject_funds(&info)?;
    assert_has_required_achievement(deps.as_ref(), &info.sender)?;

    GREETING.save(deps.storage, &greeting)?;

    Ok(Response::new()
        .add_attribute("action", "set_greeting")
        .add_attribute("sender", info.sender.as_str())
        .add_attribute("greeting", greeting))
}

// ─── Queries ────────────────────────────────────────────────────────────────

pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => query_config(deps),
        QueryMsg::Greeting {} => query_greeting(deps),
    }
}

pub fn query_config(deps: Deps) -> StdResult<Binary> {
    let config = CONFIG.load(deps.storage)?;
    to_json_binary(&config)
}

pub fn query_greeting(deps: Deps) -> StdResult<Binary> {
    let greeting = GREETING.load(deps.storage)?;
    to_json_binary(&GreetingResponse { greeting })
}

// ─── Migrate ────────────────────────────────────────────────────────────────

pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
