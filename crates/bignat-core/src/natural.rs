//! The `Natural` value type: limb storage, normalization, comparison,
//! and the additive operations.
//!
//! Limbs are base-[`BASE`](crate::constants::BASE) digits stored
//! least-significant first. Every public operation returns (or leaves
//! behind) a normalized value: at least one limb, no trailing zero limbs,
//! every limb below the radix.

use std::cmp::Ordering;
use std::ops::{Add, AddAssign, Shl, Sub, SubAssign};

use num_traits::{One, Zero};

use crate::constants::BASE;

/// A single base-10000 digit.
pub type Limb = u16;

/// An arbitrary-precision non-negative integer.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Natural {
    pub(crate) values: Vec<Limb>,
}

impl Natural {
    /// The limbs, least-significant first.
    #[must_use]
    pub fn limbs(&self) -> &[Limb] {
        &self.values
    }

    /// Number of limbs; `ceil(log_BASE(value + 1))`, or 1 for zero.
    #[must_use]
    pub fn limb_count(&self) -> usize {
        self.values.len()
    }

    /// Number of decimal digits in the canonical representation.
    #[must_use]
    pub fn decimal_len(&self) -> usize {
        let top = self.values[self.values.len() - 1];
        let top_digits = match top {
            0..=9 => 1,
            10..=99 => 2,
            100..=999 => 3,
            _ => 4,
        };
        (self.values.len() - 1) * crate::constants::SECTION + top_digits
    }

    /// Drop trailing zero limbs, keeping at least one.
    pub(crate) fn trim(&mut self) {
        while self.values.len() > 1 && self.values.ends_with(&[0]) {
            self.values.pop();
        }
        if self.values.is_empty() {
            self.values.push(0);
        }
    }

    /// Add `amount` into the limb at `position`, growing with zero-fill
    /// if needed. Carry propagation is the caller's responsibility; the
    /// caller also guarantees the limb stays within `u16` — debug builds
    /// assert this, release builds wrap silently.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn checked_add(&mut self, position: usize, amount: u64) {
        if position >= self.values.len() {
            self.values.resize(position + 1, 0);
        }
        debug_assert!(u64::from(self.values[position]) + amount < u64::from(Limb::MAX));
        self.values[position] += amount as Limb;
    }

    /// The limbs in the half-open window `[start, end)`, as a fresh
    /// normalized value. An empty window yields zero.
    #[must_use]
    pub fn range(&self, start: usize, end: usize) -> Natural {
        assert!(start <= end && end <= self.values.len());
        let mut result = Natural {
            values: self.values[start..end].to_vec(),
        };
        result.trim();
        result
    }

    /// Add one in place (prefix form).
    pub fn increment(&mut self) {
        *self += &Natural::one();
    }

    /// Add one in place, returning the prior value (postfix form).
    #[must_use = "use increment() if the prior value is not needed"]
    pub fn increment_post(&mut self) -> Natural {
        let previous = self.clone();
        self.increment();
        previous
    }

    /// Subtract one in place (prefix form). Panics on zero.
    pub fn decrement(&mut self) {
        *self -= &Natural::one();
    }

    /// Subtract one in place, returning the prior value (postfix form).
    /// Panics on zero.
    #[must_use = "use decrement() if the prior value is not needed"]
    pub fn decrement_post(&mut self) -> Natural {
        let previous = self.clone();
        self.decrement();
        previous
    }

    /// Horner evaluation into a `u64`, wrapping modulo 2^64 when the
    /// value does not fit.
    #[must_use]
    pub fn to_u64_wrapping(&self) -> u64 {
        self.values.iter().rev().fold(0u64, |acc, &limb| {
            acc.wrapping_mul(u64::from(BASE)).wrapping_add(u64::from(limb))
        })
    }
}

impl Default for Natural {
    fn default() -> Self {
        Self::zero()
    }
}

impl Zero for Natural {
    fn zero() -> Self {
        Natural { values: vec![0] }
    }

    fn is_zero(&self) -> bool {
        self.values.len() == 1 && self.values[0] == 0
    }
}

impl One for Natural {
    fn one() -> Self {
        Natural { values: vec![1] }
    }
}

impl Ord for Natural {
    /// Shorter values are smaller; equal lengths compare limbs from the
    /// most significant end. Both operands must be normalized, which
    /// every public operation guarantees.
    fn cmp(&self, other: &Self) -> Ordering {
        match self.values.len().cmp(&other.values.len()) {
            Ordering::Equal => {}
            unequal => return unequal,
        }
        for (a, b) in self.values.iter().rev().zip(other.values.iter().rev()) {
            match a.cmp(b) {
                Ordering::Equal => {}
                unequal => return unequal,
            }
        }
        Ordering::Equal
    }
}

impl PartialOrd for Natural {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl AddAssign<&Natural> for Natural {
    fn add_assign(&mut self, other: &Natural) {
        let n = other.values.len();
        let mut carry = 0u64;
        let mut i = 0;

        while i < n || carry > 0 {
            let add = if i < n { u64::from(other.values[i]) } else { 0 } + carry;
            self.checked_add(i, add);

            if self.values[i] >= BASE {
                self.values[i] -= BASE;
                carry = 1;
            } else {
                carry = 0;
            }
            i += 1;
        }

        self.trim();
    }
}

impl AddAssign for Natural {
    fn add_assign(&mut self, other: Natural) {
        *self += &other;
    }
}

impl SubAssign<&Natural> for Natural {
    /// Requires `self >= other`; the violation is a programmer error and
    /// asserts rather than wrapping.
    #[allow(clippy::cast_possible_truncation)]
    fn sub_assign(&mut self, other: &Natural) {
        assert!(*self >= *other, "subtraction underflow: lhs < rhs");
        let n = other.values.len();
        let mut carry = 0u64;
        let mut i = 0;

        while i < n || carry > 0 {
            let subtract = if i < n { u64::from(other.values[i]) } else { 0 } + carry;
            let current = u64::from(self.values[i]);

            if current < subtract {
                self.values[i] = (current + u64::from(BASE) - subtract) as Limb;
                carry = 1;
            } else {
                self.values[i] = (current - subtract) as Limb;
                carry = 0;
            }
            i += 1;
        }

        self.trim();
    }
}

impl SubAssign for Natural {
    fn sub_assign(&mut self, other: Natural) {
        *self -= &other;
    }
}

impl Add<&Natural> for &Natural {
    type Output = Natural;

    fn add(self, other: &Natural) -> Natural {
        let mut result = self.clone();
        result += other;
        result
    }
}

impl Add for Natural {
    type Output = Natural;

    fn add(mut self, other: Natural) -> Natural {
        self += &other;
        self
    }
}

impl Sub<&Natural> for &Natural {
    type Output = Natural;

    fn sub(self, other: &Natural) -> Natural {
        let mut result = self.clone();
        result -= other;
        result
    }
}

impl Sub for Natural {
    type Output = Natural;

    fn sub(mut self, other: Natural) -> Natural {
        self -= &other;
        self
    }
}

impl Shl<usize> for &Natural {
    type Output = Natural;

    /// Limb shift: prepends `shift` zero limbs, multiplying by
    /// `BASE^shift`.
    fn shl(self, shift: usize) -> Natural {
        let n = self.values.len();
        let mut values = vec![0; n + shift];
        values[shift..].copy_from_slice(&self.values);

        let mut result = Natural { values };
        result.trim();
        result
    }
}

impl Shl<usize> for Natural {
    type Output = Natural;

    fn shl(self, shift: usize) -> Natural {
        &self << shift
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nat(s: &str) -> Natural {
        s.parse().unwrap()
    }

    #[test]
    fn trim_preserves_zero() {
        let mut value = Natural {
            values: vec![0, 0, 0],
        };
        value.trim();
        assert_eq!(value.values, vec![0]);
        assert!(value.is_zero());
    }

    #[test]
    fn checked_add_grows_with_zero_fill() {
        let mut value = Natural::zero();
        value.checked_add(3, 7);
        assert_eq!(value.values, vec![0, 0, 0, 7]);
    }

    #[test]
    fn compare_orders_by_length_then_limbs() {
        assert!(nat("10000") > nat("9999"));
        assert!(nat("123456781234") < nat("123456791234"));
        assert_eq!(nat("42").cmp(&nat("42")), Ordering::Equal);
    }

    #[test]
    fn addition_carries_across_limbs() {
        assert_eq!((&nat("9999") + &nat("1")).to_string(), "10000");
        assert_eq!((&nat("99999999") + &nat("1")).to_string(), "100000000");
    }

    #[test]
    fn subtraction_borrows_across_limbs() {
        assert_eq!((&nat("10000") - &nat("1")).to_string(), "9999");
        assert_eq!((&nat("100000000") - &nat("1")).to_string(), "99999999");
        assert!((&nat("42") - &nat("42")).is_zero());
    }

    #[test]
    #[should_panic(expected = "subtraction underflow")]
    fn subtraction_underflow_panics() {
        let _ = &nat("1") - &nat("2");
    }

    #[test]
    fn shift_appends_section_zeros_per_limb() {
        assert_eq!((&nat("123456789") << 3).to_string(), "123456789000000000000");
        assert!((&Natural::zero() << 5).is_zero());
        assert_eq!((&nat("7") << 0).to_string(), "7");
    }

    #[test]
    fn range_renormalizes_window() {
        let value = nat("123456789");
        // limbs: [6789, 2345, 1]
        assert_eq!(value.range(0, 2).to_string(), "23456789");
        assert_eq!(value.range(1, 3).to_string(), "12345");
        assert!(value.range(1, 1).is_zero());
    }

    #[test]
    fn increment_and_decrement() {
        let mut value = nat("99");
        value.increment();
        assert_eq!(value.to_string(), "100");
        let before = value.increment_post();
        assert_eq!(before.to_string(), "100");
        assert_eq!(value.to_string(), "101");

        let mut value = nat("1000");
        value.decrement();
        assert_eq!(value.to_string(), "999");
        let before = value.decrement_post();
        assert_eq!(before.to_string(), "999");
        assert_eq!(value.to_string(), "998");
    }

    #[test]
    #[should_panic(expected = "subtraction underflow")]
    fn decrement_of_zero_panics() {
        Natural::zero().decrement();
    }

    #[test]
    fn limb_count_matches_radix_length() {
        assert_eq!(Natural::zero().limb_count(), 1);
        assert_eq!(nat("9999").limb_count(), 1);
        assert_eq!(nat("10000").limb_count(), 2);
        assert_eq!(nat("123456789").limb_count(), 3);
        assert_eq!(nat("123456789").limb_count(), nat("123456789").limbs().len());
    }

    #[test]
    fn decimal_len_counts_digits() {
        assert_eq!(Natural::zero().decimal_len(), 1);
        assert_eq!(nat("9999").decimal_len(), 4);
        assert_eq!(nat("10000").decimal_len(), 5);
        assert_eq!(nat("123456789").decimal_len(), 9);
    }

    #[test]
    fn zero_and_one_identities() {
        assert!(Natural::zero().is_zero());
        assert_eq!(Natural::one().to_string(), "1");
        assert_eq!((&nat("123") + &Natural::zero()).to_string(), "123");
    }
}
