//! Long division driven by a double-precision quotient estimator.
//!
//! Each quotient limb is seeded from the top limbs of the running
//! remainder and divisor read as descending-base fractions, then nudged
//! into place by a bounded correction loop. The estimator is accurate
//! enough that the loop moves at most a couple of steps in practice; the
//! invariant it establishes is `scalar <= chunk < scalar + divisor`.

use std::ops::{Div, DivAssign, Rem, RemAssign};

use num_traits::Zero;

use crate::constants::{BASE, BASE_OVERFLOW_CUTOFF, DOUBLE_DIV_SECTIONS};
use crate::natural::Natural;

/// Top limbs of `chunk` over top limbs of `divisor`, scaled by
/// `BASE^(|chunk| - |divisor|)`.
#[allow(clippy::cast_possible_truncation, clippy::cast_possible_wrap)]
fn estimate_div(chunk: &Natural, divisor: &Natural) -> f64 {
    let n = chunk.values.len();
    let m = divisor.values.len();

    let mut estimate = 0.0;
    let mut p_base = 1.0;
    for &limb in chunk.values.iter().rev().take(DOUBLE_DIV_SECTIONS) {
        estimate += p_base * f64::from(limb);
        p_base /= f64::from(BASE);
    }

    let mut divisor_estimate = 0.0;
    p_base = 1.0;
    for &limb in divisor.values.iter().rev().take(DOUBLE_DIV_SECTIONS) {
        divisor_estimate += p_base * f64::from(limb);
        p_base /= f64::from(BASE);
    }

    estimate / divisor_estimate * f64::from(BASE).powi(n as i32 - m as i32)
}

impl Natural {
    /// Quotient and remainder in one pass: `self = q * divisor + r` with
    /// `0 <= r < divisor`. Panics if `divisor` is zero.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn div_rem(&self, divisor: &Natural) -> (Natural, Natural) {
        assert!(!divisor.is_zero(), "division by zero");

        let n = self.values.len();
        let m = divisor.values.len();
        let mut quotient = Natural::zero();
        let mut remainder = self.clone();

        if n >= m {
            for i in (0..=n - m).rev() {
                // Quotient limbs past the current remainder are zero.
                if i >= remainder.values.len() {
                    continue;
                }

                let chunk = remainder.range(i, remainder.values.len());
                let mut digit = (estimate_div(&chunk, divisor) + 1e-7) as u64;
                let mut scalar = divisor * digit;

                while digit > 0 && scalar > chunk {
                    scalar -= divisor;
                    digit -= 1;
                }
                while digit < u64::from(BASE) - 1 && &scalar + divisor <= chunk {
                    scalar += divisor;
                    digit += 1;
                }

                remainder -= &(&scalar << i);
                if digit > 0 {
                    quotient.checked_add(i, digit);
                }
            }
        }

        quotient.trim();
        remainder.trim();
        (quotient, remainder)
    }

    /// Scalar form of [`div_rem`](Natural::div_rem): single pass from the
    /// most significant limb with a running 64-bit remainder. Divisors at
    /// or above [`BASE_OVERFLOW_CUTOFF`] fall back to the general path.
    #[must_use]
    pub fn div_rem_u64(&self, denominator: u64) -> (Natural, u64) {
        assert!(denominator > 0, "division by zero");

        if denominator >= BASE_OVERFLOW_CUTOFF {
            let (quotient, remainder) = self.div_rem(&Natural::from(denominator));
            return (quotient, remainder.to_u64_wrapping());
        }

        let mut quotient = Natural::zero();
        let mut remainder = 0u64;

        for i in (0..self.values.len()).rev() {
            remainder = u64::from(BASE) * remainder + u64::from(self.values[i]);

            if remainder >= denominator {
                quotient.checked_add(i, remainder / denominator);
                remainder %= denominator;
            }
        }

        quotient.trim();
        (quotient, remainder)
    }

    /// Scalar remainder with two shortcuts: divisors of the radix read
    /// the lowest limb only, and the running remainder is reduced lazily,
    /// just before it could overflow.
    #[must_use]
    pub fn rem_u64(&self, denominator: u64) -> u64 {
        assert!(denominator > 0, "division by zero");

        if u64::from(BASE) % denominator == 0 {
            return u64::from(self.values[0]) % denominator;
        }

        if denominator >= BASE_OVERFLOW_CUTOFF {
            return self.div_rem(&Natural::from(denominator)).1.to_u64_wrapping();
        }

        let mut remainder = 0u64;
        for &limb in self.values.iter().rev() {
            remainder = u64::from(BASE) * remainder + u64::from(limb);

            if remainder >= BASE_OVERFLOW_CUTOFF {
                remainder %= denominator;
            }
        }

        remainder % denominator
    }
}

impl Div<&Natural> for &Natural {
    type Output = Natural;

    fn div(self, divisor: &Natural) -> Natural {
        self.div_rem(divisor).0
    }
}

impl Div for Natural {
    type Output = Natural;

    fn div(self, divisor: Natural) -> Natural {
        self.div_rem(&divisor).0
    }
}

impl Rem<&Natural> for &Natural {
    type Output = Natural;

    fn rem(self, divisor: &Natural) -> Natural {
        self.div_rem(divisor).1
    }
}

impl Rem for Natural {
    type Output = Natural;

    fn rem(self, divisor: Natural) -> Natural {
        self.div_rem(&divisor).1
    }
}

impl DivAssign<&Natural> for Natural {
    fn div_assign(&mut self, divisor: &Natural) {
        *self = self.div_rem(divisor).0;
    }
}

impl DivAssign for Natural {
    fn div_assign(&mut self, divisor: Natural) {
        *self = self.div_rem(&divisor).0;
    }
}

impl RemAssign<&Natural> for Natural {
    fn rem_assign(&mut self, divisor: &Natural) {
        *self = self.div_rem(divisor).1;
    }
}

impl RemAssign for Natural {
    fn rem_assign(&mut self, divisor: Natural) {
        *self = self.div_rem(&divisor).1;
    }
}

impl Div<u64> for &Natural {
    type Output = Natural;

    fn div(self, denominator: u64) -> Natural {
        self.div_rem_u64(denominator).0
    }
}

impl Div<u64> for Natural {
    type Output = Natural;

    fn div(self, denominator: u64) -> Natural {
        self.div_rem_u64(denominator).0
    }
}

impl Rem<u64> for &Natural {
    type Output = u64;

    fn rem(self, denominator: u64) -> u64 {
        self.rem_u64(denominator)
    }
}

impl Rem<u64> for Natural {
    type Output = u64;

    fn rem(self, denominator: u64) -> u64 {
        self.rem_u64(denominator)
    }
}

impl DivAssign<u64> for Natural {
    fn div_assign(&mut self, denominator: u64) {
        *self = self.div_rem_u64(denominator).0;
    }
}

impl RemAssign<u64> for Natural {
    fn rem_assign(&mut self, denominator: u64) {
        *self = Natural::from(self.rem_u64(denominator));
    }
}
