//! Message types for the token proxy contract.

use common::handler::CrossChainMsg;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Operator address for bindings and pause control
    pub operator: String,
    /// The relay manager contract address
    pub manager: String,
    /// This chain's id in the relay network
    pub chain_id: u64,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    /// Lock CW20 tokens for bridging (called via CW20 send)
    Receive(cw20::Cw20ReceiveMsg),

    /// Verified cross-chain call dispatched by the manager
    HandleCrossChain(CrossChainMsg),

    /// Bind the counterpart proxy path on a destination chain
    ///
    /// Authorization: Operator only
    BindProxyHash { chain_id: u64, hash: Binary },

    /// Bind the remote asset path for a local CW20 on a destination chain
    ///
    /// Authorization: Operator only
    BindAssetHash {
        /// Local CW20 contract address
        asset: String,
        chain_id: u64,
        hash: Binary,
    },

    /// Pause the proxy (operator only)
    Pause {},

    /// Unpause the proxy (operator only)
    Unpause {},

    /// Hand the operator role to a new address (operator only)
    TransferOwnership { new_operator: String },
}

/// CW20 receive hook message
#[cw_serde]
pub enum ReceiveMsg {
    /// Lock the received tokens for bridging
    Lock {
        /// Destination chain id
        to_chain_id: u64,
        /// Recipient address bytes on the destination chain
        to_address: Binary,
    },
}

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the bound counterpart proxy path for a chain
    #[returns(ProxyHashResponse)]
    ProxyHash { chain_id: u64 },

    /// Returns the bound remote asset path for a local CW20 and chain
    #[returns(AssetHashResponse)]
    AssetHash { asset: String, chain_id: u64 },
}

#[cw_serde]
pub struct ConfigResponse {
    pub operator: Addr,
    pub manager: Addr,
    pub chain_id: u64,
    pub paused: bool,
}

#[cw_serde]
pub struct ProxyHashResponse {
    pub hash: Option<Binary>,
}

#[cw_serde]
pub struct AssetHashResponse {
    pub hash: Option<Binary>,
}
