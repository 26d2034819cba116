// ============================================================================
// Radix Converter Library
// Exact conversion of numerals between positional systems (radix 2-36)
// ============================================================================

//! # Radix Converter
//!
//! Converts signed, fractional numerals between any two radices from 2 to 36
//! using exact decimal arithmetic as the intermediate representation.
//!
//! ## Features
//!
//! - **Exact intermediates** via `rust_decimal` (no binary floating point)
//! - **Truncating output** with a bounded number of fractional digits
//! - **Fail-fast errors** naming the offending character and radix
//! - **Converter façade** producing decimal, target and alternate renderings
//!
//! ## Example
//!
//! ```rust
//! use radix_converter::prelude::*;
//! use std::sync::Arc;
//!
//! // Core functions
//! let value = decode("-3.5", 10).unwrap();
//! assert_eq!(encode(value, 2, 3).unwrap(), "-11.1");
//! assert!(is_valid("FF", 16));
//! assert_eq!(base_name(16), "hexadecimal");
//!
//! // Full conversion with a report
//! let converter = RadixConverter::new(ConverterConfig::default(), Arc::new(NoOpEventHandler));
//! let report = converter.convert("ff", 16, 3).unwrap();
//! assert_eq!(report.decimal, "255");
//! assert_eq!(report.target, "100110");
//! ```

pub mod domain;
pub mod engine;
pub mod interfaces;
pub mod numeric;
pub mod radix;
pub mod utils;

// Re-exports for convenience
pub mod prelude {
    pub use crate::domain::{ConversionReport, ConverterConfig, OutputPrecision};
    pub use crate::engine::{create_from_config, RadixConverter, RadixConverterBuilder};
    pub use crate::interfaces::{
        ConversionEvent, EventHandler, LoggingEventHandler, NoOpEventHandler,
    };
    pub use crate::numeric::{ConversionError, ConversionResult, ToExactDecimal};
    pub use crate::radix::{base_name, decode, encode, is_valid, Radix, DEFAULT_PRECISION};
}


#[cfg(test)]
mod property_tests {
    use super::prelude::*;
    use crate::radix::DIGITS;
    use proptest::prelude::*;
    use quickcheck::quickcheck;
    use rust_decimal::Decimal;

    /// Radices whose fractional digits terminate in decimal
    const TERMINATING: [u32; 7] = [2, 4, 8, 10, 16, 20, 32];

    fn canonical_literal(radix: u32) -> impl Strategy<Value = String> {
        let symbols = &DIGITS[..radix as usize];
        let digit = (0..radix as usize).prop_map(move |i| symbols[i] as char);
        (
            any::<bool>(),
            prop::collection::vec(digit.clone(), 1..=4),
            prop::collection::vec(digit, 0..=4),
        )
            .prop_map(|(negative, int_digits, frac_digits)| {
                let integer: String = int_digits.into_iter().collect();
                let integer = integer.trim_start_matches('0');
                let integer = if integer.is_empty() { "0" } else { integer };

                let fraction: String = frac_digits.into_iter().collect();
                let fraction = fraction.trim_end_matches('0');

                let body = if fraction.is_empty() {
                    integer.to_string()
                } else {
                    format!("{}.{}", integer, fraction)
                };
                if negative && body != "0" {
                    format!("-{}", body)
                } else {
                    body
                }
            })
    }

    fn literal_in_terminating_radix() -> impl Strategy<Value = (String, u32)> {
        prop::sample::select(TERMINATING.to_vec())
            .prop_flat_map(|radix| (canonical_literal(radix), Just(radix)))
    }

    proptest! {
        #[test]
        fn prop_round_trip_reproduces_canonical_form((literal, radix) in literal_in_terminating_radix()) {
            let value = decode(&literal, radix).unwrap();
            prop_assert_eq!(encode(value, radix, DEFAULT_PRECISION).unwrap(), literal);
        }

        #[test]
        fn prop_lowercase_and_padding_ignored((literal, radix) in literal_in_terminating_radix()) {
            let noisy = format!("  {}\t", literal.to_lowercase());
            prop_assert_eq!(decode(&noisy, radix).unwrap(), decode(&literal, radix).unwrap());
        }

        #[test]
        fn prop_integers_agree_with_std(n in any::<i64>(), radix in 2u32..=36) {
            let rendered = encode(n, radix, 0).unwrap();
            prop_assert_eq!(i64::from_str_radix(&rendered, radix).unwrap(), n);
            prop_assert_eq!(decode(&rendered, radix).unwrap(), Decimal::from(n));
        }

        #[test]
        fn prop_zero_always_renders_as_zero(radix in 2u32..=36, precision in 0u32..64) {
            prop_assert_eq!(encode(Decimal::ZERO, radix, precision).unwrap(), "0");
        }

        #[test]
        fn prop_output_respects_precision(
            mantissa in any::<i64>(),
            scale in 0u32..=18,
            radix in 2u32..=36,
            precision in 0u32..=23,
        ) {
            let value = Decimal::new(mantissa, scale);
            let rendered = encode(value, radix, precision).unwrap();
            let fraction_len = rendered.split_once('.').map_or(0, |(_, f)| f.len());
            prop_assert!(fraction_len <= precision as usize);
            prop_assert!(!rendered.ends_with('0') || !rendered.contains('.'));
            prop_assert!(is_valid(&rendered, radix));
        }

        #[test]
        fn prop_truncation_never_exceeds_magnitude(
            mantissa in any::<i64>(),
            scale in 0u32..=18,
            radix in 2u32..=36,
            precision in 0u32..=10,
        ) {
            let value = Decimal::new(mantissa, scale);
            let rendered = encode(value, radix, precision).unwrap();
            let back = decode(&rendered, radix).unwrap();
            // repeating fractions are re-read within the working precision
            let tolerance = Decimal::new(1, 25);
            prop_assert!(back.abs() <= value.abs() + tolerance);
        }
    }

    quickcheck! {
        fn qc_rejection_implies_decode_failure(literal: String, radix: u8) -> bool {
            let radix = u32::from(radix);
            is_valid(&literal, radix) || decode(&literal, radix).is_err()
        }

        fn qc_acceptance_decodes_short_literals(digits: Vec<u8>, radix: u8) -> bool {
            let radix = u32::from(radix % 35) + 2;
            let literal: String = digits
                .iter()
                .take(12)
                .map(|d| DIGITS[usize::from(*d) % radix as usize] as char)
                .collect();
            !is_valid(&literal, radix) || decode(&literal, radix).is_ok()
        }
    }
}
