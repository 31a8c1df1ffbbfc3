//! Token Proxy Contract - Cross-Chain CW20 Lock/Unlock
//!
//! This contract locks CW20 tokens on the local chain and releases them when
//! the relay manager delivers a verified `unlock` from the counterpart proxy
//! on another chain.
//!
//! # Lock Flow
//! 1. User sends CW20 tokens to this contract via the receive hook with a
//!    destination chain and recipient
//! 2. The proxy encodes the unlock arguments and originates a cross-chain
//!    call through the manager addressed to the bound counterpart proxy
//!
//! # Unlock Flow
//! 1. The manager verifies an inbound cross-chain transaction and dispatches
//!    `HandleCrossChain` here
//! 2. The proxy checks the caller is the manager and the source contract is
//!    the bound counterpart for the source chain, then transfers the tokens
//!
//! # Security
//! - Only the manager's verified dispatch can trigger an unlock
//! - Per-chain proxy and per-asset bindings are operator controlled
//! - Emergency pause functionality

pub mod contract;
pub mod error;
pub mod msg;
pub mod state;

pub use crate::error::ContractError;
