// Consensus-critical. Changes require spec update + tests.
//! Block target derivation.
//!
//! The target is the threshold a block's hit must stay strictly below. It
//! grows with elapsed time and signer importance and shrinks with network
//! difficulty, so well-staked signers produce blocks sooner and the chain
//! self-paces toward the configured block time.

use crate::config::ChainConfig;
use num_bigint::BigUint;
use num_traits::Zero;
use stela_core::{BlockHeader, Difficulty, Importance, TimeSpan};

/// Fixed-point scale shared with the hit calculation (2^54).
const TWO_TO_54: u64 = 1 << 54;

/// Wide unsigned integer holding a block target.
///
/// The multiply chain below exceeds 192 bits for realistic magnitudes; all
/// target arithmetic stays in this type, never in native 64-bit integers.
pub type BlockTarget = BigUint;

/// Rescales raw importance to the historical total-chain-importance baseline.
const IMPORTANCE_SCALE: u64 = 8_999_999_998;

/// Headroom bits reserved above the 2^54 fixed point for the multiply chain.
const MULTIPLIER_HEADROOM_BITS: u32 = 10;

/// Upper clamp on the exponential time smoother.
const MAX_SMOOTHING: f64 = 100.0;

/// Fixed-point time-smoothing multiplier, `round-toward-zero(2^54 * smoother) << 10`.
///
/// This is the only floating-point computation in the workspace. It uses
/// double precision throughout and clamps the smoother at 100.0; with
/// smoothing disabled the result is exactly `2^54 << 10`.
fn smoothing_multiplier(elapsed: TimeSpan, config: &ChainConfig) -> BlockTarget {
    let target_secs = config.block_generation_target_time.secs();
    let mut smoother = 1.0f64;
    if config.block_time_smoothing_factor != 0 {
        let factor = config.block_time_smoothing_factor as f64 / 1000.0;
        // Signed deviation from the target time, via wrapping subtraction of
        // the unsigned second counts (reference behavior).
        let deviation = elapsed.secs().wrapping_sub(target_secs) as i64;
        smoother = (factor * deviation as f64 / target_secs as f64)
            .exp()
            .min(MAX_SMOOTHING);
    }

    BlockTarget::from((TWO_TO_54 as f64 * smoother) as u64) << MULTIPLIER_HEADROOM_BITS
}

/// Calculates the importance-, difficulty-, and time-weighted block target.
///
/// All multiplications happen before either division so no precision is lost
/// to premature truncation.
///
/// Preconditions, validated by the host at configuration load (see
/// [`ChainConfig::validate`]) and per header (see
/// [`crate::validate_header_sanity`]): `config.total_chain_importance` and
/// `difficulty` are non-zero. A zero divisor panics.
pub fn calculate_target(
    elapsed: TimeSpan,
    difficulty: Difficulty,
    signer_importance: Importance,
    config: &ChainConfig,
) -> BlockTarget {
    let mut target = BlockTarget::from(elapsed.secs());
    target *= signer_importance.value();
    target *= smoothing_multiplier(elapsed, config);
    target *= IMPORTANCE_SCALE;
    target /= config.total_chain_importance.value();
    target /= difficulty.value();
    target
}

/// Calculates the target for a parent/current header pair.
///
/// Returns zero when `current` does not strictly follow its parent in time;
/// non-causal ordering is rejected, not merely scored low.
pub fn calculate_target_between(
    parent: &BlockHeader,
    current: &BlockHeader,
    signer_importance: Importance,
    config: &ChainConfig,
) -> BlockTarget {
    if current.timestamp <= parent.timestamp {
        return BlockTarget::zero();
    }

    let elapsed = TimeSpan::between(parent.timestamp, current.timestamp);
    calculate_target(elapsed, current.difficulty, signer_importance, config)
}
