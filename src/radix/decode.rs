// ============================================================================
// Decoder
// Source-radix literal -> exact decimal value
// ============================================================================

use super::alphabet::Radix;
use super::literal::{normalize, Literal};
use crate::numeric::{ConversionError, ConversionResult};
use rust_decimal::Decimal;

/// Parse a literal written in `radix` into an exact decimal value.
///
/// Leading/trailing whitespace and letter case are ignored. The integer
/// part is accumulated with Horner's rule; the fractional part as
/// `sum(digit / radix^k)` using decimal division.
///
/// # Errors
/// - `InvalidRadix` if `radix` is outside 2..=36 (checked first)
/// - `EmptyInput` / `MalformedLiteral` for lexical problems
/// - `InvalidDigit` for the first character that is not a digit of `radix`
/// - `Overflow` if the integer part exceeds the decimal range
///
/// # Example
/// ```
/// use radix_converter::radix::decode;
/// use rust_decimal::Decimal;
///
/// assert_eq!(decode("FF", 16).unwrap(), Decimal::from(255));
/// assert_eq!(decode("-3.5", 10).unwrap(), Decimal::new(-35, 1));
/// ```
pub fn decode(literal: &str, radix: u32) -> ConversionResult<Decimal> {
    let radix = Radix::new(radix)?;
    let normalized = normalize(literal);
    let parts = Literal::split(&normalized)?;

    let integer = decode_integer(parts.integer, radix)?;
    let fraction = decode_fraction(parts.fraction, radix)?;

    let magnitude = integer
        .checked_add(fraction)
        .ok_or(ConversionError::Overflow)?;

    if parts.negative && !magnitude.is_zero() {
        Ok(-magnitude)
    } else {
        Ok(magnitude)
    }
}

fn decode_integer(digits: &str, radix: Radix) -> ConversionResult<Decimal> {
    let base = Decimal::from(radix.get());
    let mut acc = Decimal::ZERO;

    for c in digits.chars() {
        let value = radix.digit_value(c)?;
        acc = acc
            .checked_mul(base)
            .and_then(|shifted| shifted.checked_add(Decimal::from(value)))
            .ok_or(ConversionError::Overflow)?;
    }

    Ok(acc)
}

fn decode_fraction(digits: &str, radix: Radix) -> ConversionResult<Decimal> {
    let base = Decimal::from(radix.get());
    let mut sum = Decimal::ZERO;
    // None once radix^k leaves the decimal range; the remaining digits are
    // below the working precision but are still validated.
    let mut denominator = Some(base);

    for c in digits.chars() {
        let value = radix.digit_value(c)?;
        if let Some(denom) = denominator {
            if value != 0 {
                let term = Decimal::from(value)
                    .checked_div(denom)
                    .ok_or(ConversionError::Overflow)?;
                sum = sum.checked_add(term).ok_or(ConversionError::Overflow)?;
            }
            denominator = denom.checked_mul(base);
        }
    }

    Ok(sum)
}
