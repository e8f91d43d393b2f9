//! Process-wide twiddle-root and bit-reversal caches.
//!
//! Both tables only ever grow. Access is serialized through
//! `parking_lot` mutexes: a transform locks the root table once and holds
//! the guard until it finishes, while bit-reversal permutations are looked
//! up per size and released immediately.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use num_complex::Complex64;
use parking_lot::{Mutex, MutexGuard};

/// Twiddle roots in butterfly layout: for `len` a power of two and
/// `0 <= i < len`, `roots[len + i]` is `exp(i * PI * i / len)`, the i-th
/// among the first half of the `2*len`-th roots of unity.
static ROOTS: Mutex<Vec<Complex64>> = Mutex::new(Vec::new());

/// Bit-reversal permutations keyed by transform size.
static PERMUTATIONS: Mutex<BTreeMap<usize, Vec<u32>>> = Mutex::new(BTreeMap::new());

/// Lock the root table, grown to hold at least `n` entries.
///
/// The returned guard keeps the table borrowed for the duration of a
/// transform; growth while another transform is running is therefore
/// impossible.
pub(crate) fn roots(n: usize) -> MutexGuard<'static, Vec<Complex64>> {
    let mut roots = ROOTS.lock();
    grow_roots(&mut roots, n);
    roots
}

/// Grow the root table layer by layer until it holds `n` entries.
///
/// Each doubling copies the previous layer into the even slots and fills
/// the newly revealed odd slots by direct polar evaluation, so entries at
/// already-published indices never change value.
fn grow_roots(roots: &mut Vec<Complex64>, n: usize) {
    if roots.is_empty() {
        roots.push(Complex64::new(0.0, 0.0));
        roots.push(Complex64::new(1.0, 0.0));
    }
    if roots.len() >= n {
        return;
    }

    let mut length = roots.len().trailing_zeros() as usize;
    roots.resize(n.next_power_of_two(), Complex64::new(0.0, 0.0));

    while 1usize << length < n {
        let min_angle = 2.0 * PI / (1usize << (length + 1)) as f64;

        for i in 0..1usize << (length - 1) {
            let index = (1usize << (length - 1)) + i;
            roots[2 * index] = roots[index];
            roots[2 * index + 1] = Complex64::from_polar(1.0, min_angle * (2 * i + 1) as f64);
        }

        length += 1;
    }
}

/// Compute (or fetch) the bit-reversal permutation for size `n`.
fn permutation(permutations: &mut BTreeMap<usize, Vec<u32>>, n: usize) -> &[u32] {
    permutations.entry(n).or_insert_with(|| {
        let length = n.trailing_zeros();
        let mut reverse = vec![0u32; n];
        for i in 1..n {
            reverse[i] = reverse[i >> 1] >> 1 | ((i as u32 & 1) << (length - 1));
        }
        reverse
    })
}

/// Apply the bit-reversal permutation for size `n` (a power of two),
/// swapping only when `i < rev(i)`.
pub(crate) fn bit_reorder(n: usize, values: &mut [Complex64]) {
    debug_assert!(n.is_power_of_two());
    debug_assert!(values.len() >= n);

    let mut permutations = PERMUTATIONS.lock();
    let reverse = permutation(&mut permutations, n);

    for i in 0..n {
        let j = reverse[i] as usize;
        if i < j {
            values.swap(i, j);
        }
    }
}

/// Pre-grow both caches for transforms up to size `n`.
///
/// Useful before handing the engine to multiple threads: afterwards the
/// grow path is never taken and lock hold times stay short.
pub fn warm_tables(n: usize) {
    let n = n.next_power_of_two();
    drop(roots(2 * n));

    let mut permutations = PERMUTATIONS.lock();
    let mut size = 1;
    while size <= n {
        permutation(&mut permutations, size);
        size *= 2;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roots_seed_layout() {
        let roots = roots(2);
        assert_eq!(roots[1], Complex64::new(1.0, 0.0));
    }

    #[test]
    fn roots_are_half_roots_of_unity() {
        let roots = roots(16);
        for len in [2usize, 4, 8] {
            for i in 0..len {
                let expected = Complex64::from_polar(1.0, PI * i as f64 / len as f64);
                let got = roots[len + i];
                assert!(
                    (got - expected).norm() < 1e-12,
                    "roots[{} + {}] = {got}, expected {expected}",
                    len,
                    i
                );
            }
        }
    }

    #[test]
    fn roots_growth_preserves_existing_entries() {
        let before: Vec<_> = roots(8).iter().copied().take(8).collect();
        let after = roots(64);
        for (i, &entry) in before.iter().enumerate() {
            assert_eq!(after[i], entry, "entry {i} changed during growth");
        }
    }

    #[test]
    fn bit_reorder_size_8() {
        let mut values: Vec<Complex64> = (0..8).map(|i| Complex64::new(f64::from(i), 0.0)).collect();
        bit_reorder(8, &mut values);
        let order: Vec<i32> = values.iter().map(|v| v.re as i32).collect();
        assert_eq!(order, vec![0, 4, 2, 6, 1, 5, 3, 7]);
    }

    #[test]
    fn bit_reorder_is_an_involution() {
        let original: Vec<Complex64> = (0..16).map(|i| Complex64::new(f64::from(i), 0.0)).collect();
        let mut values = original.clone();
        bit_reorder(16, &mut values);
        bit_reorder(16, &mut values);
        assert_eq!(values, original);
    }

    #[test]
    fn warm_tables_grows_caches() {
        warm_tables(32);
        assert!(roots(2).len() >= 64);
    }
}
