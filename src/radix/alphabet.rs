// ============================================================================
// Digit Alphabet
// Fixed 0-9A-Z symbol table and the validated radix type
// ============================================================================

use crate::numeric::{ConversionError, ConversionResult};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Digit symbols in value order; index = digit value.
pub const DIGITS: &[u8; 36] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// A positional radix in the supported 2..=36 range.
///
/// Can only be built through [`Radix::new`], so every `Radix` in hand
/// is already valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "u32", into = "u32"))]
pub struct Radix(u32);

impl Radix {
    pub const MIN: Self = Self(2);
    pub const MAX: Self = Self(36);

    pub const BINARY: Self = Self(2);
    pub const OCTAL: Self = Self(8);
    pub const DECIMAL: Self = Self(10);
    pub const HEXADECIMAL: Self = Self(16);

    /// Validate a raw radix.
    ///
    /// # Errors
    /// Returns `InvalidRadix` if `radix` is outside 2..=36.
    #[inline]
    pub fn new(radix: u32) -> ConversionResult<Self> {
        if (Self::MIN.0..=Self::MAX.0).contains(&radix) {
            Ok(Self(radix))
        } else {
            Err(ConversionError::InvalidRadix(radix))
        }
    }

    #[inline]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The digit symbols that belong to this radix.
    #[inline]
    pub fn symbols(self) -> &'static [u8] {
        &DIGITS[..self.0 as usize]
    }

    /// Value of `c` as a digit of this radix.
    ///
    /// # Errors
    /// Returns `InvalidDigit` naming `c` and this radix when `c` is outside
    /// the alphabet or its value is not below the radix.
    #[inline]
    pub fn digit_value(self, c: char) -> ConversionResult<u32> {
        match char_to_value(c) {
            Ok(value) if value < self.0 => Ok(value),
            _ => Err(ConversionError::InvalidDigit {
                digit: c,
                radix: self.0,
            }),
        }
    }
}

impl TryFrom<u32> for Radix {
    type Error = ConversionError;

    fn try_from(radix: u32) -> Result<Self, Self::Error> {
        Self::new(radix)
    }
}

impl From<Radix> for u32 {
    fn from(radix: Radix) -> Self {
        radix.0
    }
}

impl fmt::Display for Radix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Map an uppercase alphanumeric character to its digit value (0-35).
///
/// Case is not folded here; callers normalise first.
///
/// # Errors
/// Returns `InvalidDigit` with radix 36 when `c` is not in the alphabet.
#[inline]
pub fn char_to_value(c: char) -> ConversionResult<u32> {
    match c {
        '0'..='9' => Ok(c as u32 - '0' as u32),
        'A'..='Z' => Ok(c as u32 - 'A' as u32 + 10),
        _ => Err(ConversionError::InvalidDigit {
            digit: c,
            radix: Radix::MAX.0,
        }),
    }
}

/// Map a digit value (0-35) back to its symbol.
///
/// # Errors
/// Returns `InvalidValue` when `value` has no symbol.
#[inline]
pub fn value_to_char(value: u32) -> ConversionResult<char> {
    DIGITS
        .get(value as usize)
        .map(|&b| b as char)
        .ok_or(ConversionError::InvalidValue(value))
}
