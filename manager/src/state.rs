//! State definitions for the relay manager contract.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary, Timestamp};
use cw_storage_plus::{Item, Map};

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Admin address for handler bindings and pause control
    pub admin: Addr,
    /// This chain's id in the relay network; inbound transactions must
    /// target it
    pub chain_id: u64,
    /// Whether relay traffic is currently paused
    pub paused: bool,
}

/// Pending admin change proposal
#[cw_serde]
pub struct PendingAdmin {
    /// Proposed new admin address
    pub new_address: Addr,
    /// Block time when the change can be executed
    pub execute_after: Timestamp,
}

/// The active book-keeper set, replaced wholesale on rotation
#[cw_serde]
pub struct BookKeeperSet {
    /// Height of the header that installed this set
    pub epoch_height: u32,
    /// SHA-256 identity hash of each signer's 64-byte curve point
    pub keepers: Vec<[u8; 32]>,
}

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:relay-manager";
/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 7 days in seconds for admin change timelock
pub const ADMIN_TIMELOCK_DURATION: u64 = 604_800;

/// Primary config storage
pub const CONFIG: Item<Config> = Item::new("config");

/// Pending admin proposal (if any)
pub const PENDING_ADMIN: Item<PendingAdmin> = Item::new("pending_admin");

/// Active book-keeper set; presence marks genesis as initialized
pub const BOOK_KEEPERS: Item<BookKeeperSet> = Item::new("book_keepers");

/// Executed inbound transactions (replay protection)
/// Key: (source chain id, tx hash), Value: true once consumed
pub const EXECUTED_TXS: Map<(u64, &[u8]), bool> = Map::new("executed_txs");

/// Latest outbound request id per destination chain
pub const REQUEST_IDS: Map<u64, u64> = Map::new("request_ids");

/// Persisted outbound requests, wire-encoded
/// Key: (destination chain id, request id)
pub const REQUESTS: Map<(u64, u64), Binary> = Map::new("requests");

/// Local handler contracts, keyed by the target contract path bytes
/// carried in inbound requests
pub const HANDLERS: Map<&[u8], Addr> = Map::new("handlers");
