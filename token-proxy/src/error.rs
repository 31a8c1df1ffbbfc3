//! Error types for the token proxy contract.

use common::codec::CodecError;
use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("malformed unlock arguments: {0}")]
    Codec(#[from] CodecError),

    #[error("Unauthorized: only operator can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the manager can dispatch cross-chain calls")]
    OnlyManager,

    #[error("Proxy is paused")]
    ProxyPaused,

    #[error("Chain id {chain_id} cannot be bound")]
    InvalidChainId { chain_id: u64 },

    #[error("Binding must not be empty")]
    EmptyBinding,

    #[error("No counterpart proxy bound for chain {chain_id}")]
    ProxyNotBound { chain_id: u64 },

    #[error("No asset binding for {asset} on chain {chain_id}")]
    AssetNotBound { asset: String, chain_id: u64 },

    #[error("Source contract is not the bound proxy for chain {from_chain_id}")]
    UnknownSourceProxy { from_chain_id: u64 },

    #[error("Unknown cross-chain method: {method}")]
    UnknownMethod { method: String },

    #[error("Lock amount must be greater than zero")]
    ZeroAmount,

    #[error("Invalid unlock arguments: {reason}")]
    InvalidArgs { reason: String },
}
