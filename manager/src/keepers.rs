//! Book-keeper (signer set) derivation.
//!
//! The relay chain serializes its consensus public keys as 67-byte entries:
//! a 3-byte algorithm prefix followed by the uncompressed 64-byte curve
//! point (X ‖ Y). A signer's identity is the SHA-256 of the 64-byte point,
//! which is also what signature recovery yields during verification.
//!
//! The rotation commitment carried in a header's `next_book_keeper` field is
//! `hash160(varint(n) ‖ varbytes(compressed_key_1) ‖ … ‖ varint(m))`, where
//! the compressed form is the standard 33-byte SEC1 encoding with the tag
//! chosen by the parity of the final y-coordinate byte, and `m` is the
//! Byzantine-fault-tolerant quorum for `n` keys.

use common::codec;

use crate::error::ContractError;
use crate::hash::{hash160, sha256};

/// Wire width of one uncompressed public key entry.
pub const PUBKEY_LEN: usize = 67;

/// Derived book-keeper set: the commitment and the signer identities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookKeeper {
    /// HASH160 commitment over the compressed-key encoding
    pub next_book_keeper: [u8; 20],
    /// SHA-256 identity hash of each signer's 64-byte curve point
    pub keepers: Vec<[u8; 32]>,
}

/// Quorum threshold for `n` signers: tolerates `(n - 1) / 3` faults.
pub fn quorum(n: usize) -> usize {
    n - (n - 1) / 3
}

/// Compress a 67-byte wire key to its 33-byte SEC1 form.
fn compress_pubkey(key: &[u8]) -> [u8; 33] {
    let mut compressed = [0u8; 33];
    compressed[0] = if key[PUBKEY_LEN - 1] % 2 == 0 {
        0x02
    } else {
        0x03
    };
    compressed[1..].copy_from_slice(&key[3..35]);
    compressed
}

/// Derive the book-keeper set from a flat list of 67-byte public keys.
pub fn derive_book_keeper(pub_key_list: &[u8]) -> Result<BookKeeper, ContractError> {
    if pub_key_list.is_empty() || pub_key_list.len() % PUBKEY_LEN != 0 {
        return Err(ContractError::InvalidKeyList {
            len: pub_key_list.len(),
        });
    }
    let n = pub_key_list.len() / PUBKEY_LEN;
    let m = quorum(n);

    let mut buf = Vec::new();
    codec::write_var_int(&mut buf, n as u64);

    let mut keepers = Vec::with_capacity(n);
    for key in pub_key_list.chunks_exact(PUBKEY_LEN) {
        codec::write_var_bytes(&mut buf, &compress_pubkey(key));
        keepers.push(sha256(&key[3..]));
    }
    codec::write_var_int(&mut buf, m as u64);

    Ok(BookKeeper {
        next_book_keeper: hash160(&buf),
        keepers,
    })
}
