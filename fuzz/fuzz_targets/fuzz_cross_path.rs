//! Cross-checks arithmetic against num-bigint on fuzzed digit strings.

#![no_main]

use libfuzzer_sys::fuzz_target;
use num_bigint::BigUint;

use bignat_core::Natural;

fn digits_from(data: &[u8], limit: usize) -> String {
    data.iter().take(limit).map(|b| char::from(b'0' + b % 10)).collect()
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let split = data.len() / 2;
    let a_digits = digits_from(&data[..split], 600);
    let b_digits = digits_from(&data[split..], 600);

    let a: Natural = a_digits.parse().unwrap();
    let b: Natural = b_digits.parse().unwrap();

    let oracle_a: BigUint = if a_digits.is_empty() {
        BigUint::ZERO
    } else {
        a_digits.parse().unwrap()
    };
    let oracle_b: BigUint = if b_digits.is_empty() {
        BigUint::ZERO
    } else {
        b_digits.parse().unwrap()
    };

    assert_eq!((&a + &b).to_string(), (&oracle_a + &oracle_b).to_string());
    assert_eq!((&a * &b).to_string(), (&oracle_a * &oracle_b).to_string());

    if b > Natural::from(0u64) {
        let (quotient, remainder) = a.div_rem(&b);
        assert_eq!(quotient.to_string(), (&oracle_a / &oracle_b).to_string());
        assert_eq!(remainder.to_string(), (&oracle_a % &oracle_b).to_string());
    }
});
