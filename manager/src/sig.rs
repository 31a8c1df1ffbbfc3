//! Quorum signature verification over recovered signer identities.
//!
//! Header signers do not transmit their public keys. Each 65-byte signature
//! entry (`r ‖ s ‖ v`) is run through secp256k1 public-key recovery against
//! the double-SHA-256 header hash; the recovered key hashes to a signer
//! identity which must be a member of the current book-keeper set. Quorum is
//! reached when at least `m` distinct members have signed.

use cosmwasm_std::Api;

use crate::error::ContractError;
use crate::hash::{sha256, sha256d};

/// Wire width of one signature entry: 32-byte r, 32-byte s, 1-byte v.
pub const SIGNATURE_LEN: usize = 65;

/// Verify an m-of-n signature list over `message` against the keeper
/// identities.
///
/// Entries that fail to recover, or recover to a key outside the set, simply
/// do not count — a partially bad list is expected relay input. Repeated
/// signatures by the same signer count once. Only a structurally invalid
/// list (empty, or not a multiple of 65 bytes) is an error.
pub fn verify_quorum(
    api: &dyn Api,
    message: &[u8],
    sign_list: &[u8],
    keepers: &[[u8; 32]],
    m: usize,
) -> Result<bool, ContractError> {
    if sign_list.is_empty() || sign_list.len() % SIGNATURE_LEN != 0 {
        return Err(ContractError::InvalidSignatureList {
            len: sign_list.len(),
        });
    }

    let digest = sha256d(message);
    let mut counted: Vec<[u8; 32]> = Vec::new();

    for entry in sign_list.chunks_exact(SIGNATURE_LEN) {
        let recovery_param = if entry[64] == 1 { 0 } else { 1 };
        let recovered = match api.secp256k1_recover_pubkey(&digest, &entry[..64], recovery_param) {
            Ok(key) => key,
            Err(_) => continue,
        };
        // recovered key is 65 bytes: SEC1 tag 0x04 then the 64-byte point
        let identity = sha256(&recovered[1..]);
        if keepers.contains(&identity) && !counted.contains(&identity) {
            counted.push(identity);
            if counted.len() >= m {
                return Ok(true);
            }
        }
    }

    Ok(counted.len() >= m)
}
