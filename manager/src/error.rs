//! Error types for the relay manager contract.

use common::codec::CodecError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("malformed input: {0}")]
    Codec(#[from] CodecError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only admin can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only pending admin can accept")]
    UnauthorizedPendingAdmin,

    #[error("No pending admin change")]
    NoPendingAdmin,

    #[error("Timelock not expired: {remaining_seconds} seconds remaining")]
    TimelockNotExpired { remaining_seconds: u64 },

    // ========================================================================
    // Relay State Errors
    // ========================================================================

    #[error("Relay is paused")]
    RelayPaused,

    #[error("Genesis book keepers already initialized")]
    AlreadyInitialized,

    #[error("Genesis book keepers not initialized")]
    NotInitialized,

    // ========================================================================
    // Book-Keeper Errors
    // ========================================================================

    #[error("Public key list length {len} is not a non-empty multiple of 67")]
    InvalidKeyList { len: usize },

    #[error("Rotation header height {got} is below current epoch height {current}")]
    StaleRotation { current: u32, got: u32 },

    #[error("Derived book-keeper commitment does not match the header")]
    CommitmentMismatch,

    // ========================================================================
    // Verification Errors
    // ========================================================================

    #[error("Signature list length {len} is not a non-empty multiple of 65")]
    InvalidSignatureList { len: usize },

    #[error("Header signature quorum not reached")]
    QuorumNotReached,

    #[error("Historical header is not linked under the current header's block root")]
    HeaderLinkInvalid,

    #[error("Cross-chain proof does not match the header's cross-states root")]
    ProofInvalid,

    #[error("Cross-chain method name is not valid UTF-8")]
    InvalidMethodName,

    // ========================================================================
    // Dispatch Errors
    // ========================================================================

    #[error("Transaction from chain {from_chain_id} already executed")]
    AlreadyExecuted { from_chain_id: u64 },

    #[error("Transaction targets chain {got}, this chain is {expected}")]
    WrongDestination { expected: u64, got: u64 },

    #[error("No handler bound for the target contract path")]
    HandlerNotBound,
}
