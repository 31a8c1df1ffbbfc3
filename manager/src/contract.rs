//! Relay Manager Contract - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_accept_admin, execute_bind_handler, execute_cancel_admin_proposal,
    execute_change_book_keeper, execute_cross_chain, execute_init_genesis_block, execute_pause,
    execute_propose_admin, execute_unpause, execute_verify_and_execute_tx,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::query::{
    query_book_keepers, query_config, query_current_request_id, query_current_sync_height,
    query_handler_binding, query_pending_admin, query_request, query_tx_executed,
};
use crate::state::{Config, CONFIG, CONTRACT_NAME, CONTRACT_VERSION};

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

    let admin = deps.api.addr_validate(&msg.admin)?;
    let config = Config {
        admin,
        chain_id: msg.chain_id,
        paused: false,
    };
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("admin", config.admin)
        .add_attribute("chain_id", msg.chain_id.to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Book-keeper synchronization
        ExecuteMsg::InitGenesisBlock {
            raw_header,
            pub_key_list,
        } => execute_init_genesis_block(deps, raw_header, pub_key_list),
        ExecuteMsg::ChangeBookKeeper {
            raw_header,
            pub_key_list,
            sign_list,
        } => execute_change_book_keeper(deps, raw_header, pub_key_list, sign_list),

        // Cross-chain traffic
        ExecuteMsg::CrossChain {
            to_chain_id,
            to_contract,
            method,
            args,
        } => execute_cross_chain(deps, env, info, to_chain_id, to_contract, method, args),
        ExecuteMsg::VerifyAndExecuteTx {
            proof,
            raw_header,
            header_proof,
            cur_raw_header,
            sign_list,
        } => execute_verify_and_execute_tx(
            deps,
            proof,
            raw_header,
            header_proof,
            cur_raw_header,
            sign_list,
        ),

        // Handler bindings
        ExecuteMsg::BindHandler { path, addr } => execute_bind_handler(deps, info, path, addr),

        // Admin operations
        ExecuteMsg::Pause {} => execute_pause(deps, info),
        ExecuteMsg::Unpause {} => execute_unpause(deps, info),
        ExecuteMsg::ProposeAdmin { new_admin } => execute_propose_admin(deps, env, info, new_admin),
        ExecuteMsg::AcceptAdmin {} => execute_accept_admin(deps, env, info),
        ExecuteMsg::CancelAdminProposal {} => execute_cancel_admin_proposal(deps, info),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::CurrentSyncHeight {} => to_json_binary(&query_current_sync_height(deps)?),
        QueryMsg::BookKeepers {} => to_json_binary(&query_book_keepers(deps)?),
        QueryMsg::TxExecuted {
            from_chain_id,
            tx_hash,
        } => to_json_binary(&query_tx_executed(deps, from_chain_id, tx_hash)?),
        QueryMsg::CurrentRequestId { to_chain_id } => {
            to_json_binary(&query_current_request_id(deps, to_chain_id)?)
        }
        QueryMsg::Request {
            to_chain_id,
            request_id,
        } => to_json_binary(&query_request(deps, to_chain_id, request_id)?),
        QueryMsg::HandlerBinding { path } => to_json_binary(&query_handler_binding(deps, path)?),
        QueryMsg::PendingAdmin {} => to_json_binary(&query_pending_admin(deps)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    Ok(Response::new().add_attribute("method", "migrate"))
}
