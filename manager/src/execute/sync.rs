//! Genesis initialization and book-keeper rotation handlers.

use cosmwasm_std::{Binary, DepsMut, Response};

use crate::error::ContractError;
use crate::header::decode_header;
use crate::keepers::{derive_book_keeper, quorum};
use crate::sig::verify_quorum;
use crate::state::{BookKeeperSet, BOOK_KEEPERS};

/// Install the genesis book-keeper set. Callable once; the derived
/// commitment must match the genesis header.
pub fn execute_init_genesis_block(
    deps: DepsMut,
    raw_header: Binary,
    pub_key_list: Binary,
) -> Result<Response, ContractError> {
    if BOOK_KEEPERS.may_load(deps.storage)?.is_some() {
        return Err(ContractError::AlreadyInitialized);
    }

    let header = decode_header(&raw_header)?;
    let book_keeper = derive_book_keeper(&pub_key_list)?;
    if book_keeper.next_book_keeper != header.next_book_keeper {
        return Err(ContractError::CommitmentMismatch);
    }

    let keeper_count = book_keeper.keepers.len();
    BOOK_KEEPERS.save(
        deps.storage,
        &BookKeeperSet {
            epoch_height: header.height,
            keepers: book_keeper.keepers,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "init_genesis_block")
        .add_attribute("height", header.height.to_string())
        .add_attribute("keepers", keeper_count.to_string()))
}

/// Rotate to the book-keeper set committed in the header.
///
/// The rotation header must be signed by a quorum of the *current* set and
/// its height must not regress below the current epoch. A height-zero header
/// performs genesis initialization instead.
pub fn execute_change_book_keeper(
    deps: DepsMut,
    raw_header: Binary,
    pub_key_list: Binary,
    sign_list: Binary,
) -> Result<Response, ContractError> {
    let header = decode_header(&raw_header)?;
    if header.height == 0 {
        return execute_init_genesis_block(deps, raw_header, pub_key_list);
    }

    let current = BOOK_KEEPERS
        .may_load(deps.storage)?
        .ok_or(ContractError::NotInitialized)?;

    if header.height < current.epoch_height {
        return Err(ContractError::StaleRotation {
            current: current.epoch_height,
            got: header.height,
        });
    }

    let m = quorum(current.keepers.len());
    if !verify_quorum(deps.api, &raw_header, &sign_list, &current.keepers, m)? {
        return Err(ContractError::QuorumNotReached);
    }

    let book_keeper = derive_book_keeper(&pub_key_list)?;
    if book_keeper.next_book_keeper != header.next_book_keeper {
        return Err(ContractError::CommitmentMismatch);
    }

    let keeper_count = book_keeper.keepers.len();
    BOOK_KEEPERS.save(
        deps.storage,
        &BookKeeperSet {
            epoch_height: header.height,
            keepers: book_keeper.keepers,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "change_book_keeper")
        .add_attribute("height", header.height.to_string())
        .add_attribute("keepers", keeper_count.to_string()))
}
