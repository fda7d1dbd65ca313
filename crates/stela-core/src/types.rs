// Consensus-critical. Changes require spec update + tests.
//! Canonical protocol types for Stela v0.
//!
//! This module defines all consensus-visible data structures and primitive
//! value types used across the protocol. All types here must remain
//! backward-compatible once released.

use crate::constants::*;
use borsh::{BorshDeserialize, BorshSerialize};
use core::fmt;
use core::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Errors related to parsing, validation, or construction of core protocol types.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// Hex string had an unexpected byte length.
    #[error("invalid hex length: expected {expected} bytes, got {got} bytes")]
    InvalidHexLength {
        /// Expected number of bytes.
        expected: usize,
        /// Actual number of bytes provided.
        got: usize,
    },

    /// Hex decoding failed.
    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),

    /// Arithmetic overflow or underflow occurred.
    #[error("arithmetic overflow or underflow")]
    ArithmeticOverflow,

    /// A value violated protocol constraints.
    #[error("invalid value: {0}")]
    InvalidValue(&'static str),
}

/// Fixed-size 32-byte hash used throughout the protocol.
#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Hash32(pub [u8; HASH32_LEN]);

impl Hash32 {
    /// Returns an all-zero hash.
    pub const fn zero() -> Self {
        Self([0u8; HASH32_LEN])
    }

    /// Returns the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; HASH32_LEN] {
        &self.0
    }
}

impl fmt::Debug for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash32({})", hex::encode(self.0))
    }
}

impl fmt::Display for Hash32 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl From<[u8; HASH32_LEN]> for Hash32 {
    fn from(value: [u8; HASH32_LEN]) -> Self {
        Self(value)
    }
}

impl From<Hash32> for [u8; HASH32_LEN] {
    fn from(value: Hash32) -> Self {
        value.0
    }
}

impl FromStr for Hash32 {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        if bytes.len() != HASH32_LEN {
            return Err(CoreError::InvalidHexLength {
                expected: HASH32_LEN,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; HASH32_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

/// Block hash type.
pub type BlockHash = Hash32;

/// Per-block generation hash, the source of block-scoring pseudo-randomness.
///
/// Interpreted by the scoring rules as a big-endian unsigned 256-bit integer.
pub type GenerationHash = Hash32;

/// Public key identifying a block signer.
#[derive(Clone, Copy, PartialEq, Eq, Hash, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SignerPublicKey(pub [u8; SIGNER_KEY_LEN]);

impl SignerPublicKey {
    /// Returns an all-zero key.
    pub const fn zero() -> Self {
        Self([0u8; SIGNER_KEY_LEN])
    }

    /// Returns the underlying byte array.
    pub const fn as_bytes(&self) -> &[u8; SIGNER_KEY_LEN] {
        &self.0
    }
}

impl fmt::Debug for SignerPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SignerPublicKey({})", hex::encode(self.0))
    }
}

impl fmt::Display for SignerPublicKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&hex::encode(self.0))
    }
}

impl FromStr for SignerPublicKey {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        let bytes = hex::decode(s)?;
        if bytes.len() != SIGNER_KEY_LEN {
            return Err(CoreError::InvalidHexLength {
                expected: SIGNER_KEY_LEN,
                got: bytes.len(),
            });
        }
        let mut arr = [0u8; SIGNER_KEY_LEN];
        arr.copy_from_slice(&bytes);
        Ok(Self(arr))
    }
}

/// Network-wide difficulty scalar carried by a block header.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Difficulty(pub u64);

impl Difficulty {
    /// Returns the raw difficulty value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// A signer's stake-weight at a specific height.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Importance(pub u64);

impl Importance {
    /// Returns a zero importance.
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Returns the raw importance value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Block height.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Height(pub u64);

impl Height {
    /// Returns the raw height value.
    pub const fn value(self) -> u64 {
        self.0
    }
}

/// Block timestamp in whole Unix seconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Timestamp(pub u64);

impl Timestamp {
    /// Returns the timestamp in whole seconds.
    pub const fn secs(self) -> u64 {
        self.0
    }
}

/// Non-negative duration in whole seconds.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TimeSpan(pub u64);

impl TimeSpan {
    /// Constructs a span from whole seconds.
    pub const fn from_secs(secs: u64) -> Self {
        Self(secs)
    }

    /// Returns the span in whole seconds.
    pub const fn secs(self) -> u64 {
        self.0
    }

    /// Elapsed time from `earlier` to `later`, saturating to zero when
    /// `later` does not follow `earlier`.
    pub const fn between(earlier: Timestamp, later: Timestamp) -> Self {
        Self(later.0.saturating_sub(earlier.0))
    }
}

impl fmt::Display for TimeSpan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}s", self.0)
    }
}

/// Block header containing the consensus-visible scoring inputs.
#[derive(Clone, Copy, PartialEq, Eq, Debug, BorshSerialize, BorshDeserialize)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockHeader {
    /// Protocol version.
    pub version: u16,
    /// Hash of the previous block.
    pub prev: BlockHash,
    /// Height of this block.
    pub height: Height,
    /// Block timestamp (Unix seconds).
    pub timestamp: Timestamp,
    /// Network difficulty at this block.
    pub difficulty: Difficulty,
    /// Public key of the block signer.
    pub signer: SignerPublicKey,
}

impl BlockHeader {
    /// Performs basic structural validation.
    pub fn validate_sanity(&self) -> Result<(), CoreError> {
        if self.version != PROTOCOL_VERSION {
            return Err(CoreError::InvalidValue("unsupported header version"));
        }
        Ok(())
    }
}
