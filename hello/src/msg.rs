//! Message types for the hello contract.

use common::handler::CrossChainMsg;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Operator address for bindings
    pub operator: String,
    /// The relay manager contract address
    pub manager: String,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Send a message to the bound hello contract on another chain
    Say {
        to_chain_id: u64,
        message: Binary,
    },

    /// Verified cross-chain call dispatched by the manager
    HandleCrossChain(CrossChainMsg),

    /// Bind the remote hello contract path on a chain
    ///
    /// Authorization: Operator only
    BindRemoteHello { chain_id: u64, hash: Binary },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the most recently heard message
    #[returns(LastHeardResponse)]
    LastHeard {},

    /// Returns the bound remote hello path for a chain
    #[returns(RemoteHelloResponse)]
    RemoteHello { chain_id: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub operator: Addr,
    pub manager: Addr,
}

#[cw_serde]
pub struct LastHeardResponse {
    pub from_chain_id: Option<u64>,
    pub message: Option<Binary>,
}

#[cw_serde]
pub struct RemoteHelloResponse {
    pub hash: Option<Binary>,
}
