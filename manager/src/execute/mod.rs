//! Execute handlers for the relay manager contract.
//!
//! This module contains all execute message handlers, organized by category:
//! - `sync` - genesis initialization and book-keeper rotation
//! - `relay` - inbound verify-and-execute dispatch
//! - `outgoing` - outbound cross-chain request origination
//! - `admin` - handler bindings, pause, and admin transfer

mod admin;
mod outgoing;
mod relay;
mod sync;

pub use admin::*;
pub use outgoing::*;
pub use relay::*;
pub use sync::*;
