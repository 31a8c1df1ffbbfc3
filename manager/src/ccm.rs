//! Cross-chain request and Merkle-value codecs.
//!
//! An outgoing request is persisted in the wire form the destination chain
//! decodes; an incoming Merkle leaf decodes to a [`CrossChainValue`] wrapping
//! the request together with its source-chain provenance. Integer fields are
//! fixed 8-byte right-padded little-endian so field offsets stay predictable
//! for the receiver; byte strings are varint length-prefixed.

use common::codec::{self, CodecError};

/// Parameters of one cross-chain call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossChainRequest {
    pub to_chain_id: u64,
    pub to_contract: Vec<u8>,
    pub method: Vec<u8>,
    pub args: Vec<u8>,
    /// Source-chain transaction hash
    pub tx_hash: Vec<u8>,
    /// `sha256(source_contract_id ‖ tx_hash)`
    pub cross_chain_id: Vec<u8>,
    pub from_contract: Vec<u8>,
}

/// A proven cross-states leaf: the request plus its provenance.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrossChainValue {
    pub tx_hash: Vec<u8>,
    pub from_chain_id: u64,
    pub request: CrossChainRequest,
}

/// Encode a request:
/// `varbytes(tx_hash) ‖ varbytes(cross_chain_id) ‖ varbytes(from_contract) ‖
///  u64(to_chain_id) ‖ varbytes(to_contract) ‖ varbytes(method) ‖
///  varbytes(args)`.
pub fn encode_request(request: &CrossChainRequest) -> Vec<u8> {
    let mut out = Vec::new();
    codec::write_var_bytes(&mut out, &request.tx_hash);
    codec::write_var_bytes(&mut out, &request.cross_chain_id);
    codec::write_var_bytes(&mut out, &request.from_contract);
    codec::write_u64(&mut out, request.to_chain_id);
    codec::write_var_bytes(&mut out, &request.to_contract);
    codec::write_var_bytes(&mut out, &request.method);
    codec::write_var_bytes(&mut out, &request.args);
    out
}

/// Decode a request starting at `offset`.
pub fn decode_request(buf: &[u8], offset: usize) -> Result<(CrossChainRequest, usize), CodecError> {
    let (tx_hash, offset) = codec::read_var_bytes(buf, offset)?;
    let tx_hash = tx_hash.to_vec();
    let (cross_chain_id, offset) = codec::read_var_bytes(buf, offset)?;
    let cross_chain_id = cross_chain_id.to_vec();
    let (from_contract, offset) = codec::read_var_bytes(buf, offset)?;
    let from_contract = from_contract.to_vec();
    let (to_chain_id, offset) = codec::read_u64(buf, offset)?;
    let (to_contract, offset) = codec::read_var_bytes(buf, offset)?;
    let to_contract = to_contract.to_vec();
    let (method, offset) = codec::read_var_bytes(buf, offset)?;
    let method = method.to_vec();
    let (args, offset) = codec::read_var_bytes(buf, offset)?;

    Ok((
        CrossChainRequest {
            to_chain_id,
            to_contract,
            method,
            args: args.to_vec(),
            tx_hash,
            cross_chain_id,
            from_contract,
        },
        offset,
    ))
}

/// Encode a Merkle-leaf value:
/// `varbytes(tx_hash) ‖ u64(from_chain_id) ‖ <encoded request>`.
pub fn encode_value(value: &CrossChainValue) -> Vec<u8> {
    let mut out = Vec::new();
    codec::write_var_bytes(&mut out, &value.tx_hash);
    codec::write_u64(&mut out, value.from_chain_id);
    out.extend_from_slice(&encode_request(&value.request));
    out
}

/// Decode a proven Merkle-leaf value.
pub fn decode_value(buf: &[u8]) -> Result<CrossChainValue, CodecError> {
    let (tx_hash, offset) = codec::read_var_bytes(buf, 0)?;
    let tx_hash = tx_hash.to_vec();
    let (from_chain_id, offset) = codec::read_u64(buf, offset)?;
    let (request, _) = decode_request(buf, offset)?;

    Ok(CrossChainValue {
        tx_hash,
        from_chain_id,
        request,
    })
}
