//! Hash primitives used by the relay chain's data formats.
//!
//! Headers are identified (and signed) by their double-SHA-256 hash;
//! book-keeper commitments use HASH160 (RIPEMD-160 over SHA-256); leaf and
//! node hashes of the cross-states tree are plain SHA-256 with a domain
//! prefix (see `merkle`).

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// SHA-256 of arbitrary data.
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// Double SHA-256: `sha256(sha256(data))`.
pub fn sha256d(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// HASH160: `ripemd160(sha256(data))`, 20 bytes.
pub fn hash160(data: &[u8]) -> [u8; 20] {
    let mut output = [0u8; 20];
    output.copy_from_slice(&Ripemd160::digest(sha256(data)));
    output
}
