//! Handler call interface between the manager and consumer contracts.
//!
//! After the manager has verified a cross-chain transaction it dispatches the
//! embedded call to the bound local contract as a `HandleCrossChain` execute
//! message. Consumer contracts embed [`CrossChainMsg`] in their own
//! `ExecuteMsg` the same way CW20 receivers embed `Cw20ReceiveMsg`, and must
//! check that the message sender is the manager before trusting it.

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{to_json_binary, Binary, CosmosMsg, StdResult, WasmMsg};

/// A verified cross-chain call, forwarded by the manager.
#[cw_serde]
pub struct CrossChainMsg {
    /// Method name requested by the originating contract (e.g. "unlock")
    pub method: String,
    /// Opaque argument bytes, encoded by the originating contract
    pub args: Binary,
    /// Identity bytes of the originating contract on the source chain
    pub from_contract: Binary,
    /// Source chain id
    pub from_chain_id: u64,
}

impl CrossChainMsg {
    /// Wrap this call into a `WasmMsg::Execute` addressed to the handler.
    pub fn into_cosmos_msg(self, contract_addr: impl Into<String>) -> StdResult<CosmosMsg> {
        let msg = HandlerExecuteMsg::HandleCrossChain(self);
        Ok(WasmMsg::Execute {
            contract_addr: contract_addr.into(),
            msg: to_json_binary(&msg)?,
            funds: vec![],
        }
        .into())
    }
}

/// Serialization shim matching the `HandleCrossChain` variant consumer
/// contracts declare in their `ExecuteMsg`.
#[cw_serde]
pub enum HandlerExecuteMsg {
    HandleCrossChain(CrossChainMsg),
}
