//! Radix parameters and dispatch cutoffs.
//!
//! These are part of the public contract: callers computing expected
//! shift magnitudes or forcing a particular multiplication tier size
//! their operands against them.

use crate::natural::Limb;

/// Decimal digits packed into one limb.
pub const SECTION: usize = 4;

/// The limb radix. Chosen so a limb product fits in 32 bits and many limb
/// products fit in a 64-bit accumulator; raising it invalidates
/// [`U64_BOUND`] and the FFT precision envelope.
pub const BASE: Limb = 10_000;

/// Limbs of numerator and denominator sampled by the quotient estimator.
pub const DOUBLE_DIV_SECTIONS: usize = 5;

/// Combined limb count above which multiplication may go to the FFT.
pub const FFT_CUTOFF: usize = 1500;

/// Limb count of the smaller operand above which multiplication leaves
/// the schoolbook tier.
pub const KARATSUBA_CUTOFF: usize = 150;

/// Accumulator ceiling for the schoolbook column loop: one more limb
/// product may always be added without overflowing `u64`.
pub const U64_BOUND: u64 = u64::MAX - (BASE as u64) * (BASE as u64);

/// Scalars at or above this lose a whole limb product to overflow;
/// scalar operations fall back to the general path there.
pub const BASE_OVERFLOW_CUTOFF: u64 = u64::MAX / (BASE as u64);
