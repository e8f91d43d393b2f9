//! Driver entry point: fingerprint regression and benchmark loop.

use std::time::Instant;

use tracing::{debug, info};

use bignat_core::Natural;

use crate::config::AppConfig;
use crate::errors::DriverError;
use crate::generator::cycling_digits;

/// Known MD5 digests of `A * A` rendered as decimal, where `A` is the
/// generator output at the given digit count.
pub const FINGERPRINTS: [(usize, &str); 2] = [
    (1000, "2c5fbee9a0152dca11d49124c6c6a4a3"),
    (100_000, "4be25a92edc5284959fcc44dcf4ddcde"),
];

/// Run the driver.
pub fn run(config: &AppConfig) -> Result<(), DriverError> {
    if config.digits == 0 {
        return Err(DriverError::Config("--digits must be positive".into()));
    }
    if config.iterations == 0 {
        return Err(DriverError::Config("--iterations must be positive".into()));
    }

    let run_all = !config.check && !config.bench;

    if config.check || run_all {
        run_checks(config)?;
    }
    if config.bench || run_all {
        run_benchmark(config);
    }

    Ok(())
}

fn parse_operand(digits: &str) -> Natural {
    digits.parse().expect("generator emits decimal digits only")
}

fn run_checks(config: &AppConfig) -> Result<(), DriverError> {
    for (digits, expected) in FINGERPRINTS {
        info!(digits, "running fingerprint regression");
        let operand = parse_operand(&cycling_digits(digits));
        let product = operand.square();
        let got = format!("{:x}", md5::compute(product.to_string()));

        if got != expected {
            return Err(DriverError::Mismatch {
                digits,
                got,
                expected: expected.to_string(),
            });
        }

        if !config.quiet {
            println!("{digits} digits: {got} ok");
        }
    }

    if !config.quiet {
        println!("All fingerprints match.");
    }
    Ok(())
}

fn run_benchmark(config: &AppConfig) {
    if !config.quiet {
        println!(
            "Benchmarking multiplication of two {}-digit numbers...",
            config.digits
        );
    }

    // Warm the transform caches so the first iteration is not charged
    // for table growth.
    bignat_fft::warm_tables(config.digits.div_ceil(bignat_core::constants::SECTION) * 2);

    let mut total_micros = 0u128;
    for iteration in 0..config.iterations {
        let left = parse_operand(&cycling_digits(config.digits));
        let right = parse_operand(&cycling_digits(config.digits));

        let start = Instant::now();
        let product = &left * &right;
        let elapsed = start.elapsed();

        debug!(
            iteration,
            ?elapsed,
            product_digits = product.decimal_len(),
            product_limbs = product.limb_count(),
            "iteration done"
        );
        total_micros += elapsed.as_micros();
    }

    let average = total_micros / config.iterations as u128;
    println!("Average time: {average} microseconds");
}
