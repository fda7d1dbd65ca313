//! Consensus error types.

use thiserror::Error;

/// Errors returned by configuration and header validation code.
#[derive(Debug, Error)]
pub enum ConsensusError {
    /// Total chain importance is a target divisor and must be non-zero.
    #[error("total chain importance must be non-zero")]
    ZeroTotalChainImportance,

    /// Block generation target time divides the smoothing exponent and must
    /// be non-zero.
    #[error("block generation target time must be non-zero")]
    ZeroTargetBlockTime,

    /// Block difficulty is a target divisor and must be non-zero.
    #[error("zero block difficulty")]
    ZeroDifficulty,

    /// Header fields violated basic consensus constraints.
    #[error("invalid header: {0}")]
    InvalidHeader(&'static str),
}
