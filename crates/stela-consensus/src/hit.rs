// Consensus-critical. Changes require spec update + tests.
//! Block "hit" derivation.
//!
//! The hit approximates `2^54 * ln(2^256 / h)` where `h` is the generation
//! hash read as a 256-bit integer: an exponentially distributed draw that
//! models a Poisson block-arrival process. Only the 32 bits starting at the
//! first set bit of the hash enter the calculation; the resulting error is
//! below one part per million. Smaller hash, larger hit.

use crate::generation::extract_generation_hash_info;
use stela_core::GenerationHash;

/// Fractional bits of the scaled logarithm (the 2^54 fixed point).
const LOG_FRACTIONAL_BITS: u32 = 54;

/// Working fraction bits for the logarithm mantissa. At 62 bits the
/// accumulated truncation stays below one unit of the 2^54 result scale.
const MANTISSA_BITS: u32 = 62;

/// Rational approximation of `ln(2) = 1 / log2(e)` with 16-digit precision.
const LN2_NUMERATOR: u64 = 10_000_000_000_000_000;
/// Denominator of the `ln(2)` approximation (`log2(e) * 10^16`).
const LN2_DENOMINATOR: u64 = 14_426_950_408_889_634;

/// Binary fixed-point base-2 logarithm of a 32-bit value, scaled by 2^54.
///
/// Digit-by-digit method: square the mantissa once per output bit; a square
/// reaching 2 emits a one and renormalizes. `value` must be non-zero.
pub(crate) fn log2_scaled(value: u32) -> u64 {
    debug_assert!(value != 0, "log2 of zero is undefined");

    let integer_bits = 31 - value.leading_zeros();
    let mut result = u64::from(integer_bits) << LOG_FRACTIONAL_BITS;

    let mut mantissa = u128::from(value) << (MANTISSA_BITS - integer_bits);
    for bit in (0..LOG_FRACTIONAL_BITS).rev() {
        mantissa = (mantissa * mantissa) >> MANTISSA_BITS;
        if mantissa >= 2u128 << MANTISSA_BITS {
            mantissa >>= 1;
            result |= 1u64 << bit;
        }
    }
    result
}

/// Calculates the hit value of a generation hash.
///
/// Edge cases: an extracted mantissa of zero (near-zero hash) yields
/// `u64::MAX`; a saturated mantissa of `0xFFFFFFFF` yields `0`.
pub fn calculate_hit(generation_hash: &GenerationHash) -> u64 {
    let info = extract_generation_hash_info(generation_hash);

    if info.value == 0 {
        return u64::MAX;
    }
    if info.value == u32::MAX {
        return 0;
    }

    let log_value = log2_scaled(info.value);

    // 256 * 2^54 - log_value - (256 - 32 - num_leading_zeros) * 2^54,
    // simplified. The difference fits in 64 bits but the ln(2) rescale below
    // needs the full 128-bit width.
    let magnitude =
        (u128::from(32 + info.num_leading_zeros) << LOG_FRACTIONAL_BITS) - u128::from(log_value);

    // Convert base-2 to natural log. Multiply before dividing.
    let hit = magnitude * u128::from(LN2_NUMERATOR) / u128::from(LN2_DENOMINATOR);
    hit as u64
}
