//! Message types for the relay manager contract.

use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary, Timestamp};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Admin address for handler bindings and pause control
    pub admin: String,
    /// This chain's id in the relay network
    pub chain_id: u64,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Book-Keeper Synchronization
    // ========================================================================
    /// Install the genesis book-keeper set from the genesis header and the
    /// flat 67-byte public key list. Callable once.
    InitGenesisBlock {
        raw_header: Binary,
        pub_key_list: Binary,
    },

    /// Rotate to the book-keeper set committed in `raw_header`. The header
    /// must carry a quorum of signatures from the *current* set and its
    /// height must not regress below the current epoch. A height-zero
    /// header performs genesis initialization instead.
    ChangeBookKeeper {
        raw_header: Binary,
        pub_key_list: Binary,
        sign_list: Binary,
    },

    // ========================================================================
    // Cross-Chain Traffic
    // ========================================================================
    /// Originate a cross-chain call. The caller becomes the request's source
    /// contract; the encoded request is persisted under the next request id
    /// for the destination chain and picked up by off-chain relayers.
    CrossChain {
        to_chain_id: u64,
        /// Target contract path on the destination chain
        to_contract: Binary,
        /// Method name the target contract should execute
        method: String,
        /// Opaque argument bytes for the target contract
        args: Binary,
    },

    /// Verify a relayed cross-chain transaction and dispatch it to the
    /// bound local handler. `header_proof` and `cur_raw_header` are only
    /// consulted when `raw_header` predates the current epoch; pass them
    /// empty otherwise.
    VerifyAndExecuteTx {
        /// Merkle proof of the transaction under the header's
        /// cross-states root
        proof: Binary,
        /// Header whose cross-states root covers the transaction
        raw_header: Binary,
        /// Proof linking `raw_header` under `cur_raw_header`'s block root
        header_proof: Binary,
        /// A current-epoch header carrying the quorum signatures
        cur_raw_header: Binary,
        /// Concatenated 65-byte signature entries
        sign_list: Binary,
    },

    // ========================================================================
    // Handler Bindings
    // ========================================================================
    /// Bind a local handler contract to a target contract path
    ///
    /// Authorization: Admin only
    BindHandler {
        /// Path bytes inbound requests address
        path: Binary,
        /// Local contract receiving the dispatched calls
        addr: String,
    },

    // ========================================================================
    // Admin Operations
    // ========================================================================
    /// Pause relay traffic (admin only)
    Pause {},

    /// Unpause relay traffic (admin only)
    Unpause {},

    /// Initiate 7-day timelock for admin transfer
    ProposeAdmin { new_admin: String },

    /// Complete admin transfer after timelock
    AcceptAdmin {},

    /// Cancel pending admin change
    CancelAdminProposal {},
}

// ============================================================================
// Query Messages
// ============================================================================

/// Query messages
#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Returns contract configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Returns the current epoch height
    #[returns(SyncHeightResponse)]
    CurrentSyncHeight {},

    /// Returns the active book-keeper identity hashes
    #[returns(BookKeepersResponse)]
    BookKeepers {},

    /// Check whether an inbound transaction was already executed
    #[returns(TxExecutedResponse)]
    TxExecuted {
        from_chain_id: u64,
        tx_hash: Binary,
    },

    /// Returns the latest outbound request id for a destination chain
    #[returns(RequestIdResponse)]
    CurrentRequestId { to_chain_id: u64 },

    /// Returns a persisted outbound request in wire form
    #[returns(RequestResponse)]
    Request { to_chain_id: u64, request_id: u64 },

    /// Returns the handler bound to a target contract path
    #[returns(HandlerBindingResponse)]
    HandlerBinding { path: Binary },

    /// Returns pending admin proposal details
    #[returns(Option<PendingAdminResponse>)]
    PendingAdmin {},
}

// ============================================================================
// Response Types
// ============================================================================

#[cw_serde]
pub struct ConfigResponse {
    pub admin: Addr,
    pub chain_id: u64,
    pub paused: bool,
}

#[cw_serde]
pub struct SyncHeightResponse {
    pub height: u32,
}

#[cw_serde]
pub struct BookKeepersResponse {
    pub epoch_height: u32,
    /// SHA-256 identity hash per signer
    pub keepers: Vec<Binary>,
    /// Signatures required for quorum
    pub quorum: u32,
}

#[cw_serde]
pub struct TxExecutedResponse {
    pub executed: bool,
}

#[cw_serde]
pub struct RequestIdResponse {
    pub request_id: u64,
}

#[cw_serde]
pub struct RequestResponse {
    /// Wire-encoded request, if present
    pub request: Option<Binary>,
}

#[cw_serde]
pub struct HandlerBindingResponse {
    pub handler: Option<Addr>,
}

#[cw_serde]
pub struct PendingAdminResponse {
    pub new_address: Addr,
    pub execute_after: Timestamp,
}
