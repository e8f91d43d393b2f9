//! Parsing arbitrary bytes must never panic, and valid digit strings
//! must round-trip canonically.

#![no_main]

use libfuzzer_sys::fuzz_target;

use bignat_core::Natural;

fuzz_target!(|data: &[u8]| {
    let Ok(input) = std::str::from_utf8(data) else {
        return;
    };

    match input.parse::<Natural>() {
        Ok(value) => {
            // Round-trip: re-rendering and re-parsing is the identity.
            let rendered = value.to_string();
            let reparsed: Natural = rendered.parse().unwrap();
            assert_eq!(reparsed, value);
            assert_eq!(reparsed.to_string(), rendered);
        }
        Err(error) => {
            assert!(!input.is_empty());
            assert!(error.offset < input.len());
        }
    }
});
