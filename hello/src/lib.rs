//! Hello Contract - Arbitrary Cross-Chain Message Passing
//!
//! Minimal consumer of the relay manager: `Say` sends opaque bytes to the
//! bound hello contract on another chain, and the `hear` handler records the
//! latest message delivered by the manager's verified dispatch.

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
