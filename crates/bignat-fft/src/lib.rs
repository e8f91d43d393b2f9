//! # bignat-fft
//!
//! Iterative radix-2 complex FFT kernel and convolution of small-integer
//! sequences, used by `bignat-core` as the large-operand multiplication
//! backend.
//!
//! Both inputs of a product are packed into a single complex sequence
//! (real = left, imaginary = right), so one forward transform and one
//! inverse transform suffice. Squaring packs even/odd coefficients into a
//! half-length buffer instead.
//!
//! # Precision envelope
//!
//! The kernel runs over `f64`. Round-to-nearest of the output recovers the
//! exact integer convolution as long as coefficients stay below roughly
//! `2^52 / (N * max_value^2)`. With values below 10 000 and the transform
//! sizes the integer layer dispatches here, that bound holds with wide
//! margin; callers feeding larger values must re-derive it.
//!
//! # Thread safety
//!
//! The twiddle-root and bit-reversal tables are process-wide and guarded
//! by mutexes; a transform holds the root-table lock for its full
//! duration, so concurrent transforms serialize. Call
//! [`warm_tables`] before fanning out if that matters.

pub mod convolution;
pub mod fft_core;
pub mod tables;

pub use convolution::{multiply, multiply_circular, square};
pub use tables::warm_tables;
