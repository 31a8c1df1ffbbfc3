//! Hello Contract Implementation

use common::handler::CrossChainMsg;
use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
    WasmMsg,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::msg::{
    ConfigResponse, ExecuteMsg, InstantiateMsg, LastHeardResponse, MigrateMsg, QueryMsg,
    RemoteHelloResponse,
};
use crate::state::{
    Config, Heard, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, LAST_HEARD, REMOTE_HELLOS,
};

/// Cross-chain method this contract answers to
const HEAR_METHOD: &str = "hear";

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let config = Config {
        operator: deps.api.addr_validate(&msg.operator)?,
        manager: deps.api.addr_validate(&msg.manager)?,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("operator", config.operator)
        .add_attribute("manager", config.manager))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::Say {
            to_chain_id,
            message,
        } => execute_say(deps, info, to_chain_id, message),
        ExecuteMsg::HandleCrossChain(call) => execute_hear(deps, info, call),
        ExecuteMsg::BindRemoteHello { chain_id, hash } => {
            execute_bind_remote_hello(deps, info, chain_id, hash)
        }
    }
}

/// Send `message` to the hello contract bound for the destination chain.
fn execute_say(
    deps: DepsMut,
    _info: MessageInfo,
    to_chain_id: u64,
    message: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    let remote = REMOTE_HELLOS
        .may_load(deps.storage, to_chain_id)?
        .ok_or(ContractError::RemoteNotBound {
            chain_id: to_chain_id,
        })?;

    let cross_chain = WasmMsg::Execute {
        contract_addr: config.manager.to_string(),
        msg: to_json_binary(&manager::msg::ExecuteMsg::CrossChain {
            to_chain_id,
            to_contract: remote,
            method: HEAR_METHOD.to_string(),
            args: message.clone(),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(cross_chain)
        .add_attribute("method", "say")
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("message", hex::encode(message.as_slice())))
}

/// Record a message delivered by the manager's verified dispatch.
fn execute_hear(
    deps: DepsMut,
    info: MessageInfo,
    call: CrossChainMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.manager {
        return Err(ContractError::OnlyManager);
    }
    if call.method != HEAR_METHOD {
        return Err(ContractError::UnknownMethod {
            method: call.method,
        });
    }

    LAST_HEARD.save(
        deps.storage,
        &Heard {
            from_chain_id: call.from_chain_id,
            message: call.args.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "hear")
        .add_attribute("from_chain_id", call.from_chain_id.to_string())
        .add_attribute("message", hex::encode(call.args.as_slice())))
}

fn execute_bind_remote_hello(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.operator {
        return Err(ContractError::Unauthorized);
    }

    REMOTE_HELLOS.save(deps.storage, chain_id, &hash)?;

    Ok(Response::new()
        .add_attribute("method", "bind_remote_hello")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("hash", hex::encode(hash.as_slice())))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::LastHeard {} => to_json_binary(&query_last_heard(deps)?),
        QueryMsg::RemoteHello { chain_id } => to_json_binary(&query_remote_hello(deps, chain_id)?),
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        operator: config.operator,
        manager: config.manager,
    })
}

fn query_last_heard(deps: Deps) -> StdResult<LastHeardResponse> {
    let heard = LAST_HEARD.may_load(deps.storage)?;
    Ok(LastHeardResponse {
        from_chain_id: heard.as_ref().map(|h| h.from_chain_id),
        message: heard.map(|h| h.message),
    })
}

fn query_remote_hello(deps: Deps, chain_id: u64) -> StdResult<RemoteHelloResponse> {
    Ok(RemoteHelloResponse {
        hash: REMOTE_HELLOS.may_load(deps.storage, chain_id)?,
    })
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
