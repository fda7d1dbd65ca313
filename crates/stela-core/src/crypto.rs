//! Crypto wrapper interfaces.
//!
//! Important: this crate intentionally does NOT implement novel cryptography,
//! and it does not verify block signatures. It defines the deterministic
//! derivations consumed by the scoring layer.

use crate::constants::*;
use crate::serialization::hash32;
use crate::types::{GenerationHash, SignerPublicKey};

/// Derive the generation hash for the next block.
///
/// `gh(n+1) = BLAKE3(DS_GENERATION_HASH || gh(n) || signer_public_key)`
///
/// Each block's pseudo-randomness is committed by the parent's generation
/// hash and the signer identity, so a signer cannot grind timestamps or
/// transactions to improve its draw.
pub fn derive_generation_hash(prev: &GenerationHash, signer: &SignerPublicKey) -> GenerationHash {
    let mut input = Vec::with_capacity(prev.as_bytes().len() + signer.as_bytes().len());
    input.extend_from_slice(prev.as_bytes());
    input.extend_from_slice(signer.as_bytes());
    hash32(DS_GENERATION_HASH, &input)
}
