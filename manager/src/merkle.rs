//! Merkle inclusion-proof verification for the cross-states tree.
//!
//! A proof is `varbytes(leaf_value)` followed by a sequence of 33-byte steps:
//! one direction byte and a 32-byte sibling hash. Direction `0x00` means the
//! sibling is the left child. Hashes are domain-separated: leaves hash as
//! `sha256(0x00 ‖ value)`, interior nodes as `sha256(0x01 ‖ left ‖ right)`.

use common::codec::{self, CodecError};

use crate::hash::sha256;

/// Hash a leaf value.
pub fn hash_leaf(value: &[u8]) -> [u8; 32] {
    let mut data = Vec::with_capacity(1 + value.len());
    data.push(0x00);
    data.extend_from_slice(value);
    sha256(&data)
}

/// Hash an interior node from its ordered children.
pub fn hash_children(left: &[u8; 32], right: &[u8; 32]) -> [u8; 32] {
    let mut data = [0u8; 65];
    data[0] = 0x01;
    data[1..33].copy_from_slice(left);
    data[33..].copy_from_slice(right);
    sha256(&data)
}

/// Verify an inclusion proof against `root`.
///
/// Returns the proven leaf value on success and `None` when the recomputed
/// root differs — a non-matching proof is an expected adversarial input, not
/// an error. A structurally malformed proof (truncated varbytes, ragged step
/// section) is a codec error.
pub fn verify(proof: &[u8], root: &[u8; 32]) -> Result<Option<Vec<u8>>, CodecError> {
    let (value, mut offset) = codec::read_var_bytes(proof, 0)?;
    let mut hash = hash_leaf(value);

    while offset < proof.len() {
        let (direction, next) = codec::read_bytes(proof, offset, 1)?;
        let (sibling, next) = codec::read_fixed::<32>(proof, next)?;
        if direction[0] == 0 {
            hash = hash_children(&sibling, &hash);
        } else {
            hash = hash_children(&hash, &sibling);
        }
        offset = next;
    }

    if hash == *root {
        Ok(Some(value.to_vec()))
    } else {
        Ok(None)
    }
}
