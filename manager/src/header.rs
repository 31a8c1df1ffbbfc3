//! Relay-chain block header model and decoder.
//!
//! The header layout is fixed-offset little-endian except for the
//! variable-length consensus payload, which is varint length-prefixed:
//!
//! | offset | width | field |
//! |--------|-------|-------|
//! | 0      | 4     | version (u32) |
//! | 4      | 8     | chain_id (u64) |
//! | 12     | 32    | prev_block_hash |
//! | 44     | 32    | transaction_root (unused by verification) |
//! | 76     | 32    | cross_states_root |
//! | 108    | 32    | block_root |
//! | 140    | 4     | timestamp (u32) |
//! | 144    | 4     | height (u32) |
//! | 148    | 8     | consensus_data (u64) |
//! | 156    | var   | consensus_payload (varbytes) |
//! | ...    | 20    | next_book_keeper commitment |
//!
//! Bytes after the commitment are ignored. A header's identity — and the
//! message its signers sign — is the double-SHA-256 of the raw bytes.

use common::codec::{self, CodecError};

use crate::hash::sha256d;

/// Width of the `next_book_keeper` commitment field.
pub const NEXT_BOOK_KEEPER_LEN: usize = 20;

/// Decoded relay-chain block header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    pub version: u32,
    pub chain_id: u64,
    pub prev_block_hash: [u8; 32],
    pub transaction_root: [u8; 32],
    pub cross_states_root: [u8; 32],
    pub block_root: [u8; 32],
    pub timestamp: u32,
    pub height: u32,
    pub consensus_data: u64,
    pub consensus_payload: Vec<u8>,
    /// HASH160 commitment to the next signer set, not a raw key
    pub next_book_keeper: [u8; 20],
}

/// Decode a header from raw bytes.
pub fn decode_header(raw: &[u8]) -> Result<Header, CodecError> {
    let (version, offset) = codec::read_u32(raw, 0)?;
    let (chain_id, offset) = codec::read_u64(raw, offset)?;
    let (prev_block_hash, offset) = codec::read_fixed::<32>(raw, offset)?;
    let (transaction_root, offset) = codec::read_fixed::<32>(raw, offset)?;
    let (cross_states_root, offset) = codec::read_fixed::<32>(raw, offset)?;
    let (block_root, offset) = codec::read_fixed::<32>(raw, offset)?;
    let (timestamp, offset) = codec::read_u32(raw, offset)?;
    let (height, offset) = codec::read_u32(raw, offset)?;
    let (consensus_data, offset) = codec::read_u64(raw, offset)?;
    let (consensus_payload, offset) = codec::read_var_bytes(raw, offset)?;
    let (next_book_keeper, _) = codec::read_fixed::<NEXT_BOOK_KEEPER_LEN>(raw, offset)?;

    Ok(Header {
        version,
        chain_id,
        prev_block_hash,
        transaction_root,
        cross_states_root,
        block_root,
        timestamp,
        height,
        consensus_data,
        consensus_payload: consensus_payload.to_vec(),
        next_book_keeper,
    })
}

/// Encode a header back to its wire form.
pub fn encode_header(header: &Header) -> Vec<u8> {
    let mut out = Vec::with_capacity(176 + header.consensus_payload.len());
    codec::write_u32(&mut out, header.version);
    codec::write_u64(&mut out, header.chain_id);
    out.extend_from_slice(&header.prev_block_hash);
    out.extend_from_slice(&header.transaction_root);
    out.extend_from_slice(&header.cross_states_root);
    out.extend_from_slice(&header.block_root);
    codec::write_u32(&mut out, header.timestamp);
    codec::write_u32(&mut out, header.height);
    codec::write_u64(&mut out, header.consensus_data);
    codec::write_var_bytes(&mut out, &header.consensus_payload);
    out.extend_from_slice(&header.next_book_keeper);
    out
}

/// Header identity: double SHA-256 of the raw bytes.
pub fn header_hash(raw: &[u8]) -> [u8; 32] {
    sha256d(raw)
}
