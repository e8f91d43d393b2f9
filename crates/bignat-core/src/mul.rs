//! Integer multiplication: schoolbook, Karatsuba, and FFT tiers.
//!
//! Dispatch is by limb count with the smaller operand first: above
//! [`KARATSUBA_CUTOFF`] the schoolbook column loop is abandoned, and once
//! the combined size also clears [`FFT_CUTOFF`] the operands go to the
//! convolution backend, whose output is carry-normalized back into
//! base-[`BASE`] limbs.

use std::ops::{Mul, MulAssign};

use num_traits::Zero;

use crate::constants::{BASE, BASE_OVERFLOW_CUTOFF, FFT_CUTOFF, KARATSUBA_CUTOFF, U64_BOUND};
use crate::natural::Natural;

impl Natural {
    /// Square `self`.
    ///
    /// Above the FFT cutoffs this goes straight to the half-size
    /// convolution specialization without the content-equality probe the
    /// general product performs; below them it is an ordinary product.
    #[must_use]
    pub fn square(&self) -> Natural {
        let n = self.values.len();
        if n > KARATSUBA_CUTOFF && 2 * n > FFT_CUTOFF {
            return from_convolution(&bignat_fft::square(&self.values));
        }
        self * self
    }
}

/// Push convolution coefficients back into limb form, propagating the
/// radix carry past the end of the sequence.
fn from_convolution(coefficients: &[u64]) -> Natural {
    let mut product = Natural::zero();
    let mut carry = 0u64;
    let mut i = 0;

    while i < coefficients.len() || carry > 0 {
        let value = coefficients.get(i).copied().unwrap_or(0) + carry;
        carry = value / u64::from(BASE);
        product.checked_add(i, value % u64::from(BASE));
        i += 1;
    }

    product.trim();
    product
}

fn karatsuba(a: &Natural, b: &Natural) -> Natural {
    let n = a.values.len();
    let m = b.values.len();
    let mid = n / 2;

    let a1 = a.range(0, mid);
    let a2 = a.range(mid, n);
    let b1 = b.range(0, mid);
    let b2 = b.range(mid, m);

    let x = mul_naturals(&a2, &b2);
    let z = mul_naturals(&a1, &b1);
    // (a1 + a2)(b1 + b2) >= x + z holds component-wise, so the
    // subtractions below never underflow.
    let mut y = mul_naturals(&(&a1 + &a2), &(&b1 + &b2));
    y -= &x;
    y -= &z;

    (&x << (2 * mid)) + (&y << mid) + z
}

/// Column-sum schoolbook product. The accumulator is partially reduced
/// whenever it exceeds [`U64_BOUND`], so one more limb product always
/// fits.
fn schoolbook(a: &Natural, b: &Natural) -> Natural {
    let n = a.values.len();
    let m = b.values.len();
    let mut product = Natural {
        values: vec![0; n + m - 1],
    };
    let mut carry = 0u64;
    let mut index_sum = 0;

    while index_sum < n + m - 1 || carry > 0 {
        let mut value = carry % u64::from(BASE);
        carry /= u64::from(BASE);

        let low = index_sum.saturating_sub(m - 1);
        let high = index_sum.min(n - 1);
        for i in low..=high {
            value += u64::from(a.values[i]) * u64::from(b.values[index_sum - i]);

            if value > U64_BOUND {
                carry += value / u64::from(BASE);
                value %= u64::from(BASE);
            }
        }

        carry += value / u64::from(BASE);
        value %= u64::from(BASE);
        product.checked_add(index_sum, value);
        index_sum += 1;
    }

    product.trim();
    product
}

pub(crate) fn mul_naturals(a: &Natural, b: &Natural) -> Natural {
    let n = a.values.len();
    let m = b.values.len();

    if n > m {
        return mul_naturals(b, a);
    }

    if n > KARATSUBA_CUTOFF && n + m > FFT_CUTOFF {
        return from_convolution(&bignat_fft::multiply(&a.values, &b.values));
    }

    if n > KARATSUBA_CUTOFF {
        return karatsuba(a, b);
    }

    schoolbook(a, b)
}

fn mul_scalar(a: &Natural, scalar: u64) -> Natural {
    if scalar == 0 {
        return Natural::zero();
    }
    if scalar >= BASE_OVERFLOW_CUTOFF {
        return mul_naturals(a, &Natural::from(scalar));
    }

    let n = a.values.len();
    let mut product = Natural {
        values: vec![0; n + 1],
    };
    let mut carry = 0u64;
    let mut i = 0;

    while i < n || carry > 0 {
        let value = scalar * if i < n { u64::from(a.values[i]) } else { 0 } + carry;
        carry = value / u64::from(BASE);
        product.checked_add(i, value % u64::from(BASE));
        i += 1;
    }

    product.trim();
    product
}

impl Mul<&Natural> for &Natural {
    type Output = Natural;

    fn mul(self, other: &Natural) -> Natural {
        mul_naturals(self, other)
    }
}

impl Mul for Natural {
    type Output = Natural;

    fn mul(self, other: Natural) -> Natural {
        mul_naturals(&self, &other)
    }
}

impl MulAssign<&Natural> for Natural {
    fn mul_assign(&mut self, other: &Natural) {
        *self = mul_naturals(self, other);
    }
}

impl MulAssign for Natural {
    fn mul_assign(&mut self, other: Natural) {
        *self = mul_naturals(self, &other);
    }
}

impl Mul<u64> for &Natural {
    type Output = Natural;

    fn mul(self, scalar: u64) -> Natural {
        mul_scalar(self, scalar)
    }
}

impl Mul<u64> for Natural {
    type Output = Natural;

    fn mul(self, scalar: u64) -> Natural {
        mul_scalar(&self, scalar)
    }
}

impl MulAssign<u64> for Natural {
    fn mul_assign(&mut self, scalar: u64) {
        *self = mul_scalar(self, scalar);
    }
}
