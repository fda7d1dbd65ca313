// Consensus-critical. Changes require spec update + tests.
//! Header sanity checks for the scoring rules.
//!
//! Divisor misconfiguration is unrecoverable and must be caught before
//! scoring: [`crate::ChainConfig::validate`] covers the chain configuration,
//! this module covers the per-header fields.

use crate::error::ConsensusError;
use stela_core::{BlockHeader, PROTOCOL_VERSION};

/// Validates the header fields the scoring rules depend on.
pub fn validate_header_sanity(header: &BlockHeader) -> Result<(), ConsensusError> {
    if header.version != PROTOCOL_VERSION {
        return Err(ConsensusError::InvalidHeader("unsupported header version"));
    }
    if header.timestamp.secs() == 0 {
        return Err(ConsensusError::InvalidHeader("timestamp must be non-zero"));
    }
    if header.difficulty.value() == 0 {
        return Err(ConsensusError::ZeroDifficulty);
    }
    Ok(())
}
