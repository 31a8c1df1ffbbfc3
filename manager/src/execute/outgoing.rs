//! Outbound cross-chain request origination.

use cosmwasm_std::{Binary, DepsMut, Env, MessageInfo, Response};

use crate::ccm::{encode_request, CrossChainRequest};
use crate::error::ContractError;
use crate::hash::sha256;
use crate::state::{CONFIG, REQUESTS, REQUEST_IDS};

/// Originate a cross-chain call.
///
/// Allocates the next request id for the destination chain and persists the
/// wire-encoded request for off-chain relayers. The host exposes no
/// transaction hash, so the request's transaction identity is derived from
/// the block height, transaction index, destination, and request id — unique
/// per request under the host's serialized execution.
pub fn execute_cross_chain(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    to_chain_id: u64,
    to_contract: Binary,
    method: String,
    args: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::RelayPaused);
    }

    let request_id = REQUEST_IDS
        .may_load(deps.storage, to_chain_id)?
        .unwrap_or(0)
        + 1;

    let mut seed = Vec::with_capacity(28);
    seed.extend_from_slice(&env.block.height.to_le_bytes());
    let tx_index = env.transaction.as_ref().map(|t| t.index).unwrap_or(0);
    seed.extend_from_slice(&tx_index.to_le_bytes());
    seed.extend_from_slice(&to_chain_id.to_le_bytes());
    seed.extend_from_slice(&request_id.to_le_bytes());
    let tx_hash = sha256(&seed).to_vec();

    let mut id_input = env.contract.address.as_bytes().to_vec();
    id_input.extend_from_slice(&tx_hash);
    let cross_chain_id = sha256(&id_input).to_vec();

    let request = CrossChainRequest {
        to_chain_id,
        to_contract: to_contract.to_vec(),
        method: method.into_bytes(),
        args: args.to_vec(),
        tx_hash: tx_hash.clone(),
        cross_chain_id,
        from_contract: info.sender.as_bytes().to_vec(),
    };

    REQUESTS.save(
        deps.storage,
        (to_chain_id, request_id),
        &Binary::from(encode_request(&request)),
    )?;
    REQUEST_IDS.save(deps.storage, to_chain_id, &request_id)?;

    Ok(Response::new()
        .add_attribute("method", "cross_chain")
        .add_attribute("from_contract", info.sender)
        .add_attribute("to_chain_id", to_chain_id.to_string())
        .add_attribute("request_id", request_id.to_string())
        .add_attribute("tx_hash", hex::encode(&tx_hash)))
}
