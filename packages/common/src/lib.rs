//! Common - Shared Types and Utilities for the Relay Gateway Contracts
//!
//! This package provides the binary wire codec used by the relay-chain data
//! formats and the handler call interface that consumer contracts implement
//! to receive verified cross-chain calls from the manager.

pub mod codec;
pub mod handler;

pub use codec::CodecError;
pub use handler::{CrossChainMsg, HandlerExecuteMsg};
