//! State definitions for the hello contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Operator address for bindings
    pub operator: Addr,
    /// The relay manager contract
    pub manager: Addr,
}

/// The most recent message delivered by the manager
#[cw_serde]
pub struct Heard {
    pub from_chain_id: u64,
    pub message: Binary,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:relay-hello";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Remote hello contract path per destination chain
pub const REMOTE_HELLOS: Map<u64, Binary> = Map::new("remote_hellos");

/// Latest delivered message (if any)
pub const LAST_HEARD: Item<Heard> = Item::new("last_heard");
