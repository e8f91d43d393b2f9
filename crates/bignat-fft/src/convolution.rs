//! Convolution of small-integer sequences.
//!
//! The public entry points dispatch between a schoolbook loop and the FFT
//! pipeline on an empirical cost model. The FFT pipeline packs both inputs
//! into one complex buffer (left in the real lane, right in the imaginary
//! lane) so a product costs one forward and one inverse transform;
//! squaring packs even/odd coefficients into a half-length buffer instead.

use num_complex::Complex64;
use num_traits::Zero;

use crate::fft_core::{fft_iterative, invert_fft};
use crate::tables;

/// Cost-model weight of one schoolbook multiply-accumulate.
pub const SCHOOLBOOK_MUL_COST: f64 = 0.55;
/// Cost-model weight of one FFT butterfly during a product.
pub const FFT_MUL_COST: f64 = 1.5;
/// Cost-model weight of one schoolbook step while squaring.
pub const SCHOOLBOOK_SQR_COST: f64 = 0.4;
/// Cost-model weight of one FFT butterfly while squaring.
pub const FFT_SQR_COST: f64 = 2.0;

/// Which component to recover from the packed transform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Component {
    /// Transform of the sequence packed into the real lane.
    Left,
    /// Transform of the sequence packed into the imaginary lane.
    Right,
    /// Transform of the pointwise product, collapsed algebraically.
    Product,
}

/// Recover one component of the packed transform at `index`.
///
/// `values` is the forward transform of `left[i] + i*right[i]`; the
/// reflection `(n - index) mod n` supplies the conjugate-symmetric half.
fn extract(n: usize, values: &[Complex64], index: usize, side: Component) -> Complex64 {
    let other = (n - index) & (n - 1);

    if side == Component::Product {
        return ((values[other] * values[other]).conj() - values[index] * values[index])
            * Complex64::new(0.0, 0.25);
    }

    let sign = if side == Component::Left { 1.0 } else { -1.0 };
    let multiplier = if side == Component::Left {
        Complex64::new(0.5, 0.0)
    } else {
        Complex64::new(0.0, -0.5)
    };
    multiplier
        * Complex64::new(
            values[index].re + values[other].re * sign,
            values[index].im - values[other].im * sign,
        )
}

/// Linear convolution of two sequences of values below 2^16.
///
/// Returns the `n + m - 1` convolution coefficients, exact as long as they
/// stay inside the crate-level precision envelope. Equal inputs take the
/// half-size squaring path.
#[must_use]
pub fn multiply(left: &[u16], right: &[u16]) -> Vec<u64> {
    convolve(left, right, false)
}

/// Circular convolution: indices wrap at the next power of two above the
/// longer input.
#[must_use]
pub fn multiply_circular(left: &[u16], right: &[u16]) -> Vec<u64> {
    convolve(left, right, true)
}

fn convolve(left: &[u16], right: &[u16], circular: bool) -> Vec<u64> {
    if left.is_empty() || right.is_empty() {
        return Vec::new();
    }

    if !circular && (std::ptr::eq(left, right) || left == right) {
        return square(left);
    }

    let n = left.len();
    let m = right.len();
    let output_size = if circular {
        n.max(m).next_power_of_two()
    } else {
        n + m - 1
    };
    let transform_size = output_size.next_power_of_two();

    let schoolbook_cost = SCHOOLBOOK_MUL_COST * n as f64 * m as f64;
    let fft_cost =
        FFT_MUL_COST * transform_size as f64 * (transform_size.trailing_zeros() + 3) as f64;

    if schoolbook_cost < fft_cost {
        schoolbook_convolve(left, right, output_size)
    } else {
        fft_convolve(left, right, output_size, transform_size)
    }
}

fn schoolbook_convolve(left: &[u16], right: &[u16], output_size: usize) -> Vec<u64> {
    let mut result = vec![0u64; output_size];

    for (i, &a) in left.iter().enumerate() {
        for (j, &b) in right.iter().enumerate() {
            let k = if i + j >= output_size {
                i + j - output_size
            } else {
                i + j
            };
            result[k] += u64::from(a) * u64::from(b);
        }
    }

    result
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fft_convolve(left: &[u16], right: &[u16], output_size: usize, n: usize) -> Vec<u64> {
    let roots = tables::roots(n);
    let mut values = vec![Complex64::zero(); n];

    for (value, &a) in values.iter_mut().zip(left) {
        value.re = f64::from(a);
    }
    for (value, &b) in values.iter_mut().zip(right) {
        value.im = f64::from(b);
    }

    fft_iterative(n, &mut values, &roots);

    for i in 0..=n / 2 {
        let j = (n - i) & (n - 1);
        let product = extract(n, &values, i, Component::Product);
        values[i] = product;
        values[j] = product.conj();
    }

    invert_fft(n, &mut values, &roots);

    values[..output_size]
        .iter()
        .map(|value| value.re.round() as u64)
        .collect()
}

/// Self-convolution, exploiting the even/odd half-length packing so the
/// forward transform runs at half the size a product would need.
#[must_use]
pub fn square(input: &[u16]) -> Vec<u64> {
    if input.is_empty() {
        return Vec::new();
    }

    let n = input.len();
    let output_size = 2 * n - 1;
    let transform_size = n.next_power_of_two();

    let schoolbook_cost = SCHOOLBOOK_SQR_COST * n as f64 * n as f64;
    let fft_cost =
        FFT_SQR_COST * transform_size as f64 * (transform_size.trailing_zeros() + 3) as f64;

    if schoolbook_cost < fft_cost {
        schoolbook_square(input, output_size)
    } else {
        fft_square(input, output_size, transform_size)
    }
}

fn schoolbook_square(input: &[u16], output_size: usize) -> Vec<u64> {
    let mut result = vec![0u64; output_size];

    for (i, &a) in input.iter().enumerate() {
        result[2 * i] += u64::from(a) * u64::from(a);
        for (j, &b) in input.iter().enumerate().skip(i + 1) {
            result[i + j] += 2 * u64::from(a) * u64::from(b);
        }
    }

    result
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn fft_square(input: &[u16], output_size: usize, n: usize) -> Vec<u64> {
    // The squaring algebra reads roots[n + i], one layer past the
    // transform itself.
    let roots = tables::roots(2 * n);
    let mut values = vec![Complex64::zero(); n];

    let mut i = 0;
    while i < input.len() {
        let re = f64::from(input[i]);
        let im = input.get(i + 1).copied().map_or(0.0, f64::from);
        values[i / 2] = Complex64::new(re, im);
        i += 2;
    }

    fft_iterative(n, &mut values, &roots);

    for i in 0..=n / 2 {
        let j = (n - i) & (n - 1);
        let even = extract(n, &values, i, Component::Left);
        let odd = extract(n, &values, i, Component::Right);
        let aux = even * even + odd * odd * roots[n + i] * roots[n + i];
        let cross = even * odd;
        values[i] = aux - Complex64::new(0.0, 2.0) * cross;
        values[j] = aux.conj() - Complex64::new(0.0, 2.0) * cross.conj();
    }

    let scale = 1.0 / n as f64;
    for value in values.iter_mut() {
        *value = value.conj() * scale;
    }

    fft_iterative(n, &mut values, &roots);

    (0..output_size)
        .map(|i| {
            let source = values[i / 2];
            let value = if i % 2 == 0 { source.re } else { source.im };
            value.round() as u64
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn multiply_small_known_values() {
        assert_eq!(multiply(&[1, 2, 3], &[4, 5]), vec![4, 13, 22, 15]);
        assert_eq!(multiply(&[7], &[9]), vec![63]);
    }

    #[test]
    fn multiply_empty_is_empty() {
        assert!(multiply(&[], &[1, 2]).is_empty());
        assert!(multiply(&[1, 2], &[]).is_empty());
    }

    #[test]
    fn square_small_known_values() {
        assert_eq!(square(&[1, 2, 3]), vec![1, 4, 10, 12, 9]);
        assert_eq!(multiply(&[1, 2, 3], &[1, 2, 3]), square(&[1, 2, 3]));
    }

    #[test]
    fn circular_identity_and_rotation() {
        assert_eq!(multiply_circular(&[1, 2, 3, 4], &[1]), vec![1, 2, 3, 4]);
        // Multiplying by x rotates the coefficients by one position.
        assert_eq!(multiply_circular(&[1, 2, 3, 4], &[0, 1]), vec![4, 1, 2, 3]);
    }

    fn deterministic_input(len: usize, seed: u64) -> Vec<u16> {
        let mut state = seed | 1;
        (0..len)
            .map(|_| {
                state = state.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                (state >> 33) as u16 % 10_000
            })
            .collect()
    }

    #[test]
    fn fft_path_matches_schoolbook_for_products() {
        for (n, m) in [(64, 64), (100, 120), (255, 1), (128, 300)] {
            let left = deterministic_input(n, 11);
            let right = deterministic_input(m, 23);
            let output_size = n + m - 1;
            let transform_size = output_size.next_power_of_two();

            let expected = schoolbook_convolve(&left, &right, output_size);
            let got = fft_convolve(&left, &right, output_size, transform_size);
            assert_eq!(got, expected, "sizes ({n}, {m})");
        }
    }

    #[test]
    fn fft_path_matches_schoolbook_for_squares() {
        for n in [17, 64, 200, 333] {
            let input = deterministic_input(n, 47);
            let output_size = 2 * n - 1;
            let transform_size = n.next_power_of_two();

            let expected = schoolbook_square(&input, output_size);
            let got = fft_square(&input, output_size, transform_size);
            assert_eq!(got, expected, "size {n}");
        }
    }

    #[test]
    fn circular_fft_matches_schoolbook() {
        let left = deterministic_input(96, 5);
        let right = deterministic_input(96, 9);
        let output_size = 128;

        let expected = schoolbook_convolve(&left, &right, output_size);
        let got = fft_convolve(&left, &right, output_size, output_size);
        assert_eq!(got, expected);
    }

    proptest! {
        #[test]
        fn dispatch_agrees_with_schoolbook(
            left in proptest::collection::vec(0u16..10_000, 1..80),
            right in proptest::collection::vec(0u16..10_000, 1..80),
        ) {
            let expected = schoolbook_convolve(&left, &right, left.len() + right.len() - 1);
            prop_assert_eq!(multiply(&left, &right), expected);
        }

        #[test]
        fn square_agrees_with_self_product(
            input in proptest::collection::vec(0u16..10_000, 1..80),
        ) {
            let expected = schoolbook_convolve(&input, &input, 2 * input.len() - 1);
            prop_assert_eq!(square(&input), expected);
        }
    }
}
