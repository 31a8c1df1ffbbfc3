//! State definitions for the token proxy contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Operator address for bindings and pause control
    pub operator: Addr,
    /// The relay manager contract; the only trusted dispatcher
    pub manager: Addr,
    /// This chain's id in the relay network
    pub chain_id: u64,
    /// Whether the proxy is currently paused
    pub paused: bool,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:relay-token-proxy";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Counterpart proxy path per destination chain
pub const PROXY_HASHES: Map<u64, Binary> = Map::new("proxy_hashes");

/// Remote asset path per (local CW20 address, destination chain)
pub const ASSET_HASHES: Map<(&str, u64), Binary> = Map::new("asset_hashes");
