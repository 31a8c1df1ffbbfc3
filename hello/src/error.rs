//! Error types for the hello contract.

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Unauthorized: only operator can perform this action")]
    Unauthorized,

    #[error("Unauthorized: only the manager can dispatch cross-chain calls")]
    OnlyManager,

    #[error("No remote hello contract bound for chain {chain_id}")]
    RemoteNotBound { chain_id: u64 },

    #[error("Unknown cross-chain method: {method}")]
    UnknownMethod { method: String },
}
