//! Query handlers for the relay manager contract.

use cosmwasm_std::{Binary, Deps, StdResult};

use crate::keepers::quorum;
use crate::msg::{
    BookKeepersResponse, ConfigResponse, HandlerBindingResponse, PendingAdminResponse,
    RequestIdResponse, RequestResponse, SyncHeightResponse, TxExecutedResponse,
};
use crate::state::{BOOK_KEEPERS, CONFIG, EXECUTED_TXS, HANDLERS, PENDING_ADMIN, REQUESTS, REQUEST_IDS};

/// Query contract configuration.
pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        admin: config.admin,
        chain_id: config.chain_id,
        paused: config.paused,
    })
}

/// Query the current epoch height (0 before genesis).
pub fn query_current_sync_height(deps: Deps) -> StdResult<SyncHeightResponse> {
    let height = BOOK_KEEPERS
        .may_load(deps.storage)?
        .map(|set| set.epoch_height)
        .unwrap_or(0);
    Ok(SyncHeightResponse { height })
}

/// Query the active book-keeper identity hashes (empty before genesis).
pub fn query_book_keepers(deps: Deps) -> StdResult<BookKeepersResponse> {
    match BOOK_KEEPERS.may_load(deps.storage)? {
        Some(set) => Ok(BookKeepersResponse {
            epoch_height: set.epoch_height,
            quorum: quorum(set.keepers.len()) as u32,
            keepers: set
                .keepers
                .into_iter()
                .map(|k| Binary::from(k.to_vec()))
                .collect(),
        }),
        None => Ok(BookKeepersResponse {
            epoch_height: 0,
            keepers: vec![],
            quorum: 0,
        }),
    }
}

/// Query whether an inbound transaction was already executed.
pub fn query_tx_executed(
    deps: Deps,
    from_chain_id: u64,
    tx_hash: Binary,
) -> StdResult<TxExecutedResponse> {
    let executed = EXECUTED_TXS
        .may_load(deps.storage, (from_chain_id, tx_hash.as_slice()))?
        .unwrap_or(false);
    Ok(TxExecutedResponse { executed })
}

/// Query the latest outbound request id for a destination chain.
pub fn query_current_request_id(deps: Deps, to_chain_id: u64) -> StdResult<RequestIdResponse> {
    let request_id = REQUEST_IDS.may_load(deps.storage, to_chain_id)?.unwrap_or(0);
    Ok(RequestIdResponse { request_id })
}

/// Query a persisted outbound request.
pub fn query_request(deps: Deps, to_chain_id: u64, request_id: u64) -> StdResult<RequestResponse> {
    let request = REQUESTS.may_load(deps.storage, (to_chain_id, request_id))?;
    Ok(RequestResponse { request })
}

/// Query the handler bound to a target contract path.
pub fn query_handler_binding(deps: Deps, path: Binary) -> StdResult<HandlerBindingResponse> {
    let handler = HANDLERS.may_load(deps.storage, path.as_slice())?;
    Ok(HandlerBindingResponse { handler })
}

/// Query pending admin proposal details.
pub fn query_pending_admin(deps: Deps) -> StdResult<Option<PendingAdminResponse>> {
    let pending = PENDING_ADMIN.may_load(deps.storage)?;
    Ok(pending.map(|p| PendingAdminResponse {
        new_address: p.new_address,
        execute_after: p.execute_after,
    }))
}
