//! # bignat-core
//!
//! Arbitrary-precision non-negative integer arithmetic over
//! base-10000 limbs. Multiplication picks between schoolbook, Karatsuba,
//! and complex-FFT convolution by operand size; division runs a
//! double-precision quotient estimator with bounded correction.
//!
//! Values are plain owned data: every operation produces a fresh,
//! normalized [`Natural`]. Preconditions (subtraction underflow, division
//! by zero) are programmer errors and panic; only decimal parsing returns
//! a recoverable error.

pub mod codec;
pub mod constants;
pub mod natural;

mod div;
mod mul;

pub use codec::ParseNaturalError;
pub use natural::{Limb, Natural};

/// Multiply two decimal strings and render the product.
///
/// A convenience for one-shot use; construct [`Natural`] values directly
/// to chain operations.
///
/// # Errors
///
/// Returns [`ParseNaturalError`] if either input contains a non-digit.
///
/// # Example
/// ```
/// let product = bignat_core::multiply_decimal("12345", "6789").unwrap();
/// assert_eq!(product, "83810205");
/// assert_eq!(bignat_core::multiply_decimal("0", "999").unwrap(), "0");
/// ```
pub fn multiply_decimal(left: &str, right: &str) -> Result<String, ParseNaturalError> {
    let left: Natural = left.parse()?;
    let right: Natural = right.parse()?;
    Ok((left * right).to_string())
}
