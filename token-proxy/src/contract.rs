//! Token Proxy Contract Implementation

use common::codec;
use common::handler::CrossChainMsg;
use cosmwasm_std::{
    entry_point, from_json, to_json_binary, Binary, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, StdResult, Uint128, WasmMsg,
};
use cw2::set_contract_version;
use cw20::{Cw20ExecuteMsg, Cw20ReceiveMsg};

use crate::error::ContractError;
use crate::msg::{
    AssetHashResponse, ConfigResponse, ExecuteMsg, InstantiateMsg, MigrateMsg, ProxyHashResponse,
    QueryMsg, ReceiveMsg,
};
use crate::state::{Config, ASSET_HASHES, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, PROXY_HASHES};

/// Cross-chain method this proxy answers to
const UNLOCK_METHOD: &str = "unlock";

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
        chain_id: msg.chain_id,
        paused: false,
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
        ExecuteMsg::Receive(cw20_msg) => execute_receive(deps, info, cw20_msg),
        ExecuteMsg::HandleCrossChain(call) => execute_handle_cross_chain(deps, info, call),
        ExecuteMsg::BindProxyHash { chain_id, hash } => {
            execute_bind_proxy_hash(deps, info, chain_id, hash)
        }
        ExecuteMsg::BindAssetHash {
            asset,
            chain_id,
            hash,
        } => execute_bind_asset_hash(deps, info, asset, chain_id, hash),
        ExecuteMsg::Pause {} => execute_set_paused(deps, info, true),
        ExecuteMsg::Unpause {} => execute_set_paused(deps, info, false),
        ExecuteMsg::TransferOwnership { new_operator } => {
            execute_transfer_ownership(deps, info, new_operator)
        }
    }
}

/// Lock received CW20 tokens and originate the cross-chain unlock on the
/// destination chain through the manager.
fn execute_receive(
    deps: DepsMut,
    info: MessageInfo,
    cw20_msg: Cw20ReceiveMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::ProxyPaused);
    }

    // the CW20 contract invoking the hook is the locked asset
    let asset = info.sender.to_string();
    let amount = cw20_msg.amount;
    if amount.is_zero() {
        return Err(ContractError::ZeroAmount);
    }

    let ReceiveMsg::Lock {
        to_chain_id,
        to_address,
    } = from_json(&cw20_msg.msg)?;

    if to_chain_id == config.chain_id {
        return Err(ContractError::InvalidChainId {
            chain_id: to_chain_id,
        });
    }
    if to_address.is_empty() {
        return Err(ContractError::EmptyBinding);
    }

    let to_proxy = PROXY_HASHES
        .may_load(deps.storage, to_chain_id)?
        .ok_or(ContractError::ProxyNotBound {
            chain_id: to_chain_id,
        })?;
    let to_asset = ASSET_HASHES
        .may_load(deps.storage, (asset.as_str(), to_chain_id))?
        .ok_or(ContractError::AssetNotBound {
            asset: asset.clone(),
            chain_id: to_chain_id,
        })?;

    // arguments the counterpart proxy decodes in its unlock handler
    let mut args = Vec::new();
    codec::write_var_bytes(&mut args, &to_asset);
    codec::write_var_bytes(&mut args, &to_address);
    codec::write_u256(&mut args, amount.u128());

    let cross_chain = WasmMsg::Execute {
        contract_addr: config.manager.to_string(),
        msg: to_json_binary(&manager::msg::ExecuteMsg::CrossChain {
            to_chain_id,
            to_contract: to_proxy,
            method: UNLOCK_METHOD.to_string(),
            args: Binary::from(args),
        })?,
        funds: vec![],
    };

    Ok(Response::new()
        .add_message(cross_chain)
        .add_attribute("method", "lock")
        .add_attribute("asset", asset)
        .add_attribute("sender", cw20_msg.sender)
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("to_address", hex::encode(to_address.as_slice()))
        .add_attribute("amount", amount.to_string()))
}

/// Release locked tokens for a verified cross-chain unlock.
fn execute_handle_cross_chain(
    deps: DepsMut,
    info: MessageInfo,
    call: CrossChainMsg,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;

    // only the manager's verified dispatch is trusted
    if info.sender != config.manager {
        return Err(ContractError::OnlyManager);
    }
    if config.paused {
        return Err(ContractError::ProxyPaused);
    }
    if call.method != UNLOCK_METHOD {
        return Err(ContractError::UnknownMethod {
            method: call.method,
        });
    }

    let bound = PROXY_HASHES
        .may_load(deps.storage, call.from_chain_id)?
        .ok_or(ContractError::UnknownSourceProxy {
            from_chain_id: call.from_chain_id,
        })?;
    if bound != call.from_contract {
        return Err(ContractError::UnknownSourceProxy {
            from_chain_id: call.from_chain_id,
        });
    }

    let args = call.args.as_slice();
    let (to_asset, offset) = codec::read_var_bytes(args, 0)?;
    let (to_address, offset) = codec::read_var_bytes(args, offset)?;
    let (amount, _) = codec::read_u256(args, offset)?;

    let to_asset = deps
        .api
        .addr_validate(std::str::from_utf8(to_asset).map_err(|_| {
            ContractError::InvalidArgs {
                reason: "asset address is not valid UTF-8".to_string(),
            }
        })?)?;
    let to_address = deps
        .api
        .addr_validate(std::str::from_utf8(to_address).map_err(|_| {
            ContractError::InvalidArgs {
                reason: "recipient address is not valid UTF-8".to_string(),
            }
        })?)?;

    let transfer: CosmosMsg = WasmMsg::Execute {
        contract_addr: to_asset.to_string(),
        msg: to_json_binary(&Cw20ExecuteMsg::Transfer {
            recipient: to_address.to_string(),
            amount: Uint128::new(amount),
        })?,
        funds: vec![],
    }
    .into();

    Ok(Response::new()
        .add_message(transfer)
        .add_attribute("method", "unlock")
        .add_attribute("from_chain_id", call.from_chain_id.to_string())
        .add_attribute("asset", to_asset)
        .add_attribute("recipient", to_address)
        .add_attribute("amount", amount.to_string()))
}

fn execute_bind_proxy_hash(
    deps: DepsMut,
    info: MessageInfo,
    chain_id: u64,
    hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.operator {
        return Err(ContractError::Unauthorized);
    }
    if chain_id == config.chain_id {
        return Err(ContractError::InvalidChainId { chain_id });
    }
    if hash.is_empty() {
        return Err(ContractError::EmptyBinding);
    }

    PROXY_HASHES.save(deps.storage, chain_id, &hash)?;

    Ok(Response::new()
        .add_attribute("method", "bind_proxy_hash")
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("hash", hex::encode(hash.as_slice())))
}

fn execute_bind_asset_hash(
    deps: DepsMut,
    info: MessageInfo,
    asset: String,
    chain_id: u64,
    hash: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if info.sender != config.operator {
        return Err(ContractError::Unauthorized);
    }
    if chain_id == config.chain_id {
        return Err(ContractError::InvalidChainId { chain_id });
    }
    if hash.is_empty() {
        return Err(ContractError::EmptyBinding);
    }

    let asset = deps.api.addr_validate(&asset)?;
    ASSET_HASHES.save(deps.storage, (asset.as_str(), chain_id), &hash)?;

    Ok(Response::new()
        .add_attribute("method", "bind_asset_hash")
        .add_attribute("asset", asset)
        .add_attribute("chain_id", chain_id.to_string())
        .add_attribute("hash", hex::encode(hash.as_slice())))
}

fn execute_set_paused(
    deps: DepsMut,
    info: MessageInfo,
    paused: bool,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.operator {
        return Err(ContractError::Unauthorized);
    }

    config.paused = paused;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new().add_attribute("method", if paused { "pause" } else { "unpause" }))
}

fn execute_transfer_ownership(
    deps: DepsMut,
    info: MessageInfo,
    new_operator: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    if info.sender != config.operator {
        return Err(ContractError::Unauthorized);
    }

    config.operator = deps.api.addr_validate(&new_operator)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "transfer_ownership")
        .add_attribute("new_operator", config.operator))
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::ProxyHash { chain_id } => to_json_binary(&query_proxy_hash(deps, chain_id)?),
        QueryMsg::AssetHash { asset, chain_id } => {
            to_json_binary(&query_asset_hash(deps, asset, chain_id)?)
        }
    }
}

fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        operator: config.operator,
        manager: config.manager,
        chain_id: config.chain_id,
        paused: config.paused,
    })
}

fn query_proxy_hash(deps: Deps, chain_id: u64) -> StdResult<ProxyHashResponse> {
    Ok(ProxyHashResponse {
        hash: PROXY_HASHES.may_load(deps.storage, chain_id)?,
    })
}

fn query_asset_hash(deps: Deps, asset: String, chain_id: u64) -> StdResult<AssetHashResponse> {
    Ok(AssetHashResponse {
        hash: ASSET_HASHES.may_load(deps.storage, (asset.as_str(), chain_id))?,
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
