// ============================================================================
// Conversion Errors
// Error types for radix parsing and rendering
// ============================================================================

use std::fmt;

/// Errors that can occur while decoding or encoding a numeral.
///
/// Every variant is a local validation failure: the operation that
/// produced it did no partial work.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConversionError {
    /// Radix outside the supported 2..=36 range
    InvalidRadix(u32),
    /// Literal is empty after trimming or after removing the sign
    EmptyInput,
    /// Literal contains more than one radix point
    MalformedLiteral,
    /// Character is not a digit of the given radix
    InvalidDigit { digit: char, radix: u32 },
    /// Digit value has no symbol in the alphabet
    InvalidValue(u32),
    /// Magnitude exceeds the range of the exact decimal representation
    Overflow,
    /// Native float is NaN or infinite
    NonFinite,
    /// Requested fractional precision exceeds the working precision budget
    InvalidPrecision { requested: u32, max: u32 },
}

impl fmt::Display for ConversionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConversionError::InvalidRadix(radix) => {
                write!(f, "invalid radix {}: must be between 2 and 36", radix)
            },
            ConversionError::EmptyInput => write!(f, "number cannot be empty"),
            ConversionError::MalformedLiteral => {
                write!(f, "malformed number: more than one radix point")
            },
            ConversionError::InvalidDigit { digit, radix } => {
                write!(f, "character '{}' is not valid for radix {}", digit, radix)
            },
            ConversionError::InvalidValue(value) => {
                write!(f, "value {} cannot be mapped to a digit", value)
            },
            ConversionError::Overflow => {
                write!(f, "arithmetic overflow: magnitude exceeds decimal range")
            },
            ConversionError::NonFinite => write!(f, "value is not a finite number"),
            ConversionError::InvalidPrecision { requested, max } => write!(
                f,
                "precision {} exceeds the maximum of {} fractional digits",
                requested, max
            ),
        }
    }
}

impl std::error::Error for ConversionError {}

/// Result type alias for conversion operations
pub type ConversionResult<T> = Result<T, ConversionError>;
