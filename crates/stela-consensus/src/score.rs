// Consensus-critical. Changes require spec update + tests.
//! Per-block score (heaviest-chain accumulation input).

use stela_core::{BlockHeader, TimeSpan};

/// Calculates the score `current` contributes on top of `parent`.
///
/// Returns zero when `current` does not strictly follow its parent in time.
/// Otherwise the score is `difficulty - elapsed_seconds` with unsigned
/// wraparound preserved bit-for-bit: chain-score accumulation elsewhere
/// depends on the wrapped representation, so the subtraction is intentionally
/// unguarded.
pub fn calculate_score(parent: &BlockHeader, current: &BlockHeader) -> u64 {
    if current.timestamp <= parent.timestamp {
        return 0;
    }

    let elapsed = TimeSpan::between(parent.timestamp, current.timestamp);
    current.difficulty.value().wrapping_sub(elapsed.secs())
}
