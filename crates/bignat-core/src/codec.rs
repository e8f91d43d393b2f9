//! Decimal and machine-integer conversions for [`Natural`].
//!
//! Parsing accepts decimal digits only: no sign, no leading `+`, no
//! whitespace. Leading zeros are accepted and normalized away. The empty
//! string parses to zero, matching the limb-count formula
//! `max(ceil(len / SECTION), 1)`.

use std::fmt;
use std::str::FromStr;

use crate::constants::{BASE, SECTION};
use crate::natural::{Limb, Natural};

/// Rejection of a non-digit character while parsing a decimal string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid decimal digit {character:?} at offset {offset}")]
pub struct ParseNaturalError {
    /// The offending character.
    pub character: char,
    /// Byte offset of the character in the input.
    pub offset: usize,
}

impl FromStr for Natural {
    type Err = ParseNaturalError;

    /// Consume characters right-to-left in groups of [`SECTION`], scaling
    /// each digit by its power of ten within the group.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(offset) = s.bytes().position(|b| !b.is_ascii_digit()) {
            let character = s[offset..].chars().next().unwrap_or('\u{fffd}');
            return Err(ParseNaturalError { character, offset });
        }

        let bytes = s.as_bytes();
        let num_values = bytes.len().div_ceil(SECTION).max(1);
        let mut values = vec![0 as Limb; num_values];

        let mut counter = 0;
        let mut index = 0;
        let mut p10: Limb = 1;

        for &byte in bytes.iter().rev() {
            values[index] += p10 * Limb::from(byte - b'0');

            counter += 1;
            if counter >= SECTION {
                counter = 0;
                index += 1;
                p10 = 1;
            } else {
                p10 *= 10;
            }
        }

        let mut result = Natural { values };
        result.trim();
        Ok(result)
    }
}

impl fmt::Display for Natural {
    /// Canonical decimal form: no leading zeros, `"0"` for zero.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut digits = String::with_capacity(self.values.len() * SECTION);

        for &limb in &self.values {
            let mut value = limb;
            for _ in 0..SECTION {
                digits.push(char::from(b'0' + (value % 10) as u8));
                value /= 10;
            }
        }

        while digits.len() > 1 && digits.ends_with('0') {
            digits.pop();
        }

        f.write_str(&digits.chars().rev().collect::<String>())
    }
}

impl From<u64> for Natural {
    /// Repeated division by the radix, least-significant limb first.
    #[allow(clippy::cast_possible_truncation)]
    fn from(mut value: u64) -> Self {
        let mut values = Vec::with_capacity(5);
        loop {
            values.push((value % u64::from(BASE)) as Limb);
            value /= u64::from(BASE);
            if value == 0 {
                break;
            }
        }
        Natural { values }
    }
}
