// ============================================================================
// Encoder
// Exact decimal value -> target-radix literal with bounded precision
// ============================================================================

use super::alphabet::{value_to_char, Radix};
use crate::numeric::{ConversionError, ConversionResult, ToExactDecimal};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use smallvec::SmallVec;

/// Fractional digits produced when the caller has no preference.
pub const DEFAULT_PRECISION: u32 = 15;

type DigitBuf = SmallVec<[char; 32]>;

/// Render `value` in `radix` with at most `precision` fractional digits.
///
/// Fractional digits beyond `precision` are truncated, never rounded, and
/// trailing zero digits are removed. Zero renders as `"0"` and a value
/// that truncates to zero loses its sign.
///
/// # Errors
/// - `InvalidRadix` if `radix` is outside 2..=36 (checked before the value)
/// - `NonFinite` / `Overflow` if a native number cannot be represented exactly
///
/// # Example
/// ```
/// use radix_converter::radix::encode;
/// use rust_decimal::Decimal;
///
/// assert_eq!(encode(Decimal::new(-35, 1), 2, 3).unwrap(), "-11.1");
/// assert_eq!(encode(255, 16, 0).unwrap(), "FF");
/// ```
pub fn encode<V: ToExactDecimal>(
    value: V,
    radix: u32,
    precision: u32,
) -> ConversionResult<String> {
    let radix = Radix::new(radix)?;
    let value = value.to_exact()?;

    if value.is_zero() {
        return Ok("0".to_string());
    }

    let negative = value.is_sign_negative();
    let magnitude = value.abs();

    let whole = magnitude.trunc();
    let integer_digits = encode_integer(whole, radix)?;
    let fraction_digits = encode_fraction(magnitude - whole, radix, precision)?;

    let mut result: String = integer_digits.into_iter().collect();
    if !fraction_digits.is_empty() {
        result.push('.');
        result.extend(fraction_digits);
    }

    if negative && result != "0" {
        result.insert(0, '-');
    }

    Ok(result)
}

fn encode_integer(whole: Decimal, radix: Radix) -> ConversionResult<DigitBuf> {
    let mut n = whole.to_u128().ok_or(ConversionError::Overflow)?;
    let base = u128::from(radix.get());

    let mut digits = DigitBuf::new();
    if n == 0 {
        digits.push('0');
        return Ok(digits);
    }

    while n > 0 {
        digits.push(value_to_char((n % base) as u32)?);
        n /= base;
    }
    digits.reverse();

    Ok(digits)
}

fn encode_fraction(fraction: Decimal, radix: Radix, precision: u32) -> ConversionResult<DigitBuf> {
    // fraction = numerator / 10^scale with numerator < 10^scale <= 10^28, so
    // numerator * 36 stays far below u128::MAX and every step is exact.
    let scale = 10u128.pow(fraction.scale());
    let mut numerator = u128::try_from(fraction.mantissa()).map_err(|_| ConversionError::Overflow)?;
    let base = u128::from(radix.get());
    let mut digits = DigitBuf::new();

    for _ in 0..precision {
        if numerator == 0 {
            break;
        }
        numerator *= base;
        digits.push(value_to_char((numerator / scale) as u32)?);
        numerator %= scale;
    }

    while digits.last() == Some(&'0') {
        digits.pop();
    }

    Ok(digits)
}
