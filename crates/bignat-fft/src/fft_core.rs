//! Core transform: iterative radix-2 decimation-in-time FFT and its
//! real-output inverse.
//!
//! Callers lock the twiddle table once (see [`crate::tables::roots`]) and
//! thread the borrowed slice through, so the butterflies never touch a
//! mutex.

use num_complex::Complex64;

use crate::tables::bit_reorder;

/// In-place forward transform of the first `n` values (`n` a power of two).
///
/// `roots` must hold at least `n` entries in the butterfly layout of
/// [`crate::tables::roots`].
pub fn fft_iterative(n: usize, values: &mut [Complex64], roots: &[Complex64]) {
    if n <= 1 {
        return;
    }
    debug_assert!(n.is_power_of_two());
    debug_assert!(roots.len() >= n);

    bit_reorder(n, values);

    let mut len = 1;
    while len < n {
        for start in (0..n).step_by(2 * len) {
            for i in 0..len {
                let even = values[start + i];
                let odd = values[start + len + i] * roots[len + i];
                values[start + len + i] = even - odd;
                values[start + i] = even + odd;
            }
        }
        len *= 2;
    }
}

/// In-place inverse transform of a spectrum whose inverse is real.
///
/// Conjugates and scales by `1/n`, folds the buffer in half so a single
/// half-size forward transform produces two real outputs per complex
/// value, then de-interleaves: even indices from real parts, odd indices
/// from imaginary parts. The imaginary components of the result are zero.
pub fn invert_fft(n: usize, values: &mut [Complex64], roots: &[Complex64]) {
    let scale = 1.0 / n as f64;
    for value in values.iter_mut().take(n) {
        *value = value.conj() * scale;
    }

    for i in 0..n / 2 {
        let first = values[i] + values[n / 2 + i];
        let second = (values[i] - values[n / 2 + i]) * roots[n / 2 + i];
        values[i] = first + second * Complex64::new(0.0, 1.0);
    }

    fft_iterative(n / 2, values, roots);

    for i in (0..n).rev() {
        let source = values[i / 2];
        values[i] = if i % 2 == 0 {
            Complex64::new(source.re, 0.0)
        } else {
            Complex64::new(source.im, 0.0)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tables;

    fn transform(mut values: Vec<Complex64>) -> Vec<Complex64> {
        let n = values.len();
        let roots = tables::roots(n);
        fft_iterative(n, &mut values, &roots);
        values
    }

    #[test]
    fn delta_transforms_to_constant() {
        let mut input = vec![Complex64::new(0.0, 0.0); 8];
        input[0] = Complex64::new(1.0, 0.0);
        let output = transform(input);
        for (i, value) in output.iter().enumerate() {
            assert!(
                (value - Complex64::new(1.0, 0.0)).norm() < 1e-12,
                "index {i}: {value}"
            );
        }
    }

    #[test]
    fn constant_transforms_to_scaled_delta() {
        let input = vec![Complex64::new(1.0, 0.0); 8];
        let output = transform(input);
        assert!((output[0] - Complex64::new(8.0, 0.0)).norm() < 1e-12);
        for value in &output[1..] {
            assert!(value.norm() < 1e-12);
        }
    }

    #[test]
    fn forward_then_inverse_recovers_real_input() {
        let n = 16;
        let original: Vec<f64> = (0..n).map(|i| (i * i % 37) as f64).collect();
        let mut values: Vec<Complex64> =
            original.iter().map(|&x| Complex64::new(x, 0.0)).collect();

        let roots = tables::roots(n);
        fft_iterative(n, &mut values, &roots);
        invert_fft(n, &mut values, &roots);

        for (i, (&expected, got)) in original.iter().zip(values.iter()).enumerate() {
            assert!(
                (got.re - expected).abs() < 1e-9,
                "index {i}: got {}, expected {expected}",
                got.re
            );
        }
    }

    #[test]
    fn single_element_is_untouched() {
        let mut values = vec![Complex64::new(42.0, 0.0)];
        let roots = tables::roots(2);
        fft_iterative(1, &mut values, &roots);
        assert_eq!(values[0], Complex64::new(42.0, 0.0));
    }
}
