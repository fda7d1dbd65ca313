// Consensus-critical. Changes require spec update + tests.
//! Chain-wide scoring configuration.

use crate::error::ConsensusError;
use stela_core::{Importance, TimeSpan};

/// Immutable chain-wide configuration consumed by the scoring rules.
///
/// Supplied once by the hosting node at startup and shared read-only with
/// every scoring call.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct ChainConfig {
    /// Desired time between consecutive blocks.
    pub block_generation_target_time: TimeSpan,
    /// Exponential time-smoothing factor, scaled by 1000. Zero disables
    /// smoothing.
    pub block_time_smoothing_factor: u64,
    /// Total importance across all accounts on the chain.
    pub total_chain_importance: Importance,
}

impl ChainConfig {
    /// Validates the divisor fields that would otherwise cause a division by
    /// zero inside the scoring functions.
    ///
    /// Hosts must call this once at configuration load time; the scoring
    /// functions assume a validated configuration.
    pub fn validate(&self) -> Result<(), ConsensusError> {
        if self.total_chain_importance.value() == 0 {
            return Err(ConsensusError::ZeroTotalChainImportance);
        }
        if self.block_generation_target_time.secs() == 0 {
            return Err(ConsensusError::ZeroTargetBlockTime);
        }
        Ok(())
    }
}
