//! Inbound relay dispatch: verify a cross-chain transaction end to end and
//! invoke the bound handler exactly once.

use common::handler::CrossChainMsg;
use cosmwasm_std::{Binary, DepsMut, Response};

use crate::ccm::decode_value;
use crate::error::ContractError;
use crate::header::{decode_header, header_hash};
use crate::keepers::quorum;
use crate::merkle;
use crate::sig::verify_quorum;
use crate::state::{BOOK_KEEPERS, CONFIG, EXECUTED_TXS, HANDLERS};

/// Verify a relayed transaction and dispatch it.
///
/// Stages, each of which rejects the whole invocation on failure:
/// header quorum (directly, or linked under a current-epoch header when the
/// transaction header predates the active set), Merkle proof against the
/// header's cross-states root, payload decode, replay and destination
/// checks, then handler dispatch. The replay record is written in the same
/// invocation that emits the handler call; a failing handler aborts the
/// invocation and releases the record for a later retry.
pub fn execute_verify_and_execute_tx(
    deps: DepsMut,
    proof: Binary,
    raw_header: Binary,
    header_proof: Binary,
    cur_raw_header: Binary,
    sign_list: Binary,
) -> Result<Response, ContractError> {
    let config = CONFIG.load(deps.storage)?;
    if config.paused {
        return Err(ContractError::RelayPaused);
    }

    let current = BOOK_KEEPERS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized)?;
    let m = quorum(current.keepers.len());

    let tx_header = decode_header(&raw_header)?;
    if tx_header.height >= current.epoch_height {
        // header belongs to the active epoch: its signatures must satisfy
        // the current quorum directly
        if !verify_quorum(deps.api, &raw_header, &sign_list, &current.keepers, m)? {
            return Err(ContractError::QuorumNotReached);
        }
    } else {
        // historical header: quorum is checked on a current-epoch header,
        // and the old header must be proven under its block root
        if !verify_quorum(deps.api, &cur_raw_header, &sign_list, &current.keepers, m)? {
            return Err(ContractError::QuorumNotReached);
        }
        let cur_header = decode_header(&cur_raw_header)?;
        let linked = merkle::verify(&header_proof, &cur_header.block_root)?
            .ok_or(ContractError::HeaderLinkInvalid)?;
        if linked != header_hash(&raw_header) {
            return Err(ContractError::HeaderLinkInvalid);
        }
    }

    let value_bytes = merkle::verify(&proof, &tx_header.cross_states_root)?
        .ok_or(ContractError::ProofInvalid)?;
    let value = decode_value(&value_bytes)?;

    if EXECUTED_TXS
        .may_load(deps.storage, (value.from_chain_id, value.tx_hash.as_slice()))?
        .unwrap_or(false)
    {
        return Err(ContractError::AlreadyExecuted {
            from_chain_id: value.from_chain_id,
        });
    }

    if value.request.to_chain_id != config.chain_id {
        return Err(ContractError::WrongDestination {
            expected: config.chain_id,
            got: value.request.to_chain_id,
        });
    }

    let handler = HANDLERS
        .may_load(deps.storage, &value.request.to_contract)?
        .ok_or(ContractError::HandlerNotBound)?;

    EXECUTED_TXS.save(deps.storage, (value.from_chain_id, value.tx_hash.as_slice()), &true)?;

    let method =
        String::from_utf8(value.request.method).map_err(|_| ContractError::InvalidMethodName)?;
    let call = CrossChainMsg {
        method,
        args: Binary::from(value.request.args),
        from_contract: Binary::from(value.request.from_contract),
        from_chain_id: value.from_chain_id,
    };

    Ok(Response::new()
        .add_message(call.into_cosmos_msg(handler.clone())?)
        .add_attribute("method", "verify_and_execute_tx")
        .add_attribute("from_chain_id", value.from_chain_id.to_string())
        .add_attribute("tx_hash", hex::encode(&value.tx_hash))
        .add_attribute("handler", handler))
}
