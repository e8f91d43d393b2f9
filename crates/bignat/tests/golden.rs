//! Golden file regression tests.
//!
//! Verifies the MD5 fingerprints and known products recorded in
//! tests/testdata/regression.json.

use serde::Deserialize;

use bignat_core::Natural;

#[derive(Deserialize)]
struct GoldenData {
    fingerprints: Vec<FingerprintEntry>,
    products: Vec<ProductEntry>,
}

#[derive(Deserialize)]
struct FingerprintEntry {
    digits: usize,
    md5: String,
}

#[derive(Deserialize)]
struct ProductEntry {
    left: String,
    right: String,
    product: String,
}

fn load_golden() -> GoldenData {
    let data = std::fs::read_to_string("tests/testdata/regression.json")
        .expect("failed to read golden file");
    serde_json::from_str(&data).expect("failed to parse golden file")
}

fn cycling_digits(count: usize) -> String {
    (0..count).map(|i| char::from(b'0' + (i % 10) as u8)).collect()
}

#[test]
fn golden_fingerprints_match() {
    let golden = load_golden();

    for entry in &golden.fingerprints {
        let operand: Natural = cycling_digits(entry.digits).parse().unwrap();
        let product = operand.square();
        let digest = format!("{:x}", md5::compute(product.to_string()));
        assert_eq!(digest, entry.md5, "fingerprint at {} digits", entry.digits);
    }
}

#[test]
fn golden_fingerprints_via_general_multiply() {
    let golden = load_golden();

    // The square and general-product paths must agree on the contract
    // inputs; only the smaller size is worth the duplicated work.
    let entry = &golden.fingerprints[0];
    let left: Natural = cycling_digits(entry.digits).parse().unwrap();
    let right = left.clone();
    let digest = format!("{:x}", md5::compute((&left * &right).to_string()));
    assert_eq!(digest, entry.md5);
}

#[test]
fn golden_products_match() {
    let golden = load_golden();

    for entry in &golden.products {
        let left: Natural = entry.left.parse().unwrap();
        let right: Natural = entry.right.parse().unwrap();
        assert_eq!(
            (&left * &right).to_string(),
            entry.product,
            "{} * {}",
            entry.left,
            entry.right
        );
    }
}
