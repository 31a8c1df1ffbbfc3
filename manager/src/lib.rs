//! Relay Manager Contract - Cross-Chain Message Verification and Dispatch
//!
//! This contract is the receiving end of a cross-chain message relay. It
//! tracks the relay chain's rotating signer set (the book keepers), verifies
//! relayed block headers against that set, proves cross-chain transactions
//! out of a header's cross-states root, and dispatches each verified
//! transaction to a bound local handler contract exactly once.
//!
//! # Inbound Flow
//! 1. A relayer submits a header, a signature list, and a Merkle proof
//! 2. The header is verified against the current book-keeper quorum
//!    (or linked to a newer header when it predates the current epoch)
//! 3. The proof is checked against the header's cross-states root
//! 4. The proven payload is decoded, replay-checked, and dispatched to the
//!    handler bound for its target path
//!
//! # Outbound Flow
//! 1. A local contract calls `CrossChain` with a destination chain, target
//!    contract path, method, and argument bytes
//! 2. The manager assigns the next per-destination request id and persists
//!    the encoded request for off-chain relayers to pick up
//!
//! # Security
//! - Byzantine-fault-tolerant quorum (m = n - (n - 1) / 3) over recovered
//!   signer identities
//! - Book-keeper rotation gated by quorum of the outgoing set and a
//!   commitment hash carried in the header
//! - Replay protection keyed by (source chain id, transaction hash)

pub mod ccm;
pub mod contract;
pub mod error;
mod execute;
pub mod hash;
pub mod header;
pub mod keepers;
pub mod merkle;
pub mod msg;
mod query;
pub mod sig;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{hash160, sha256, sha256d};
