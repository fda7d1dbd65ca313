//! Protocol-wide constants for Stela v0.

/// Protocol semantic version (v0).
pub const PROTOCOL_VERSION: u16 = 0;

/// Length in bytes of a 32-byte hash.
pub const HASH32_LEN: usize = 32;

/// Length in bytes of a signer public key.
pub const SIGNER_KEY_LEN: usize = 32;

/// Domain separator used when hashing block headers.
///
/// Prevents cross-domain hash collisions.
pub const DS_BLOCK_HEADER: &[u8] = b"STELA::BLOCK_HEADER::V0";

/// Domain separator used when deriving per-block generation hashes.
///
/// Prevents cross-domain hash collisions.
pub const DS_GENERATION_HASH: &[u8] = b"STELA::GENERATION_HASH::V0";
