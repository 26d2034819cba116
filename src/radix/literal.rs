// ============================================================================
// Numeral Literal
// Lexical structure shared by decoding and validation
// ============================================================================

use crate::numeric::{ConversionError, ConversionResult};

/// Trim surrounding whitespace and fold letters to uppercase.
pub fn normalize(input: &str) -> String {
    input.trim().to_uppercase()
}

/// A sign-stripped literal split at its radix point.
///
/// Borrows from an already normalised string. Either part may be empty,
/// but never both.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Literal<'a> {
    pub negative: bool,
    pub integer: &'a str,
    pub fraction: &'a str,
}

impl<'a> Literal<'a> {
    /// Split a normalised literal into sign, integer part and fractional part.
    ///
    /// # Errors
    /// - `EmptyInput` if nothing remains (before or after the sign, or around the point)
    /// - `MalformedLiteral` if there is more than one `.`
    pub fn split(normalized: &'a str) -> ConversionResult<Self> {
        if normalized.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        let (negative, body) = match normalized.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, normalized),
        };

        if body.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        if body.matches('.').count() > 1 {
            return Err(ConversionError::MalformedLiteral);
        }

        let (integer, fraction) = body.split_once('.').unwrap_or((body, ""));

        if integer.is_empty() && fraction.is_empty() {
            return Err(ConversionError::EmptyInput);
        }

        Ok(Self {
            negative,
            integer,
            fraction,
        })
    }

    /// Whether a radix point with at least one digit after it is present.
    #[inline]
    pub fn has_fraction(&self) -> bool {
        !self.fraction.is_empty()
    }
}
