// ============================================================================
// Converter Configuration
// Output precision and presentation options for a converter
// ============================================================================

use crate::numeric::{ConversionError, ConversionResult, MAX_FRACTION_DIGITS};
use crate::radix::DEFAULT_PRECISION;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// ============================================================================
// Output Precision
// ============================================================================

/// How many fractional digits converted values carry
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum OutputPrecision {
    /// Whole numbers only; any fractional part is dropped
    Integer,

    /// About as many digits as an IEEE single-precision float (7)
    Single,

    /// About as many digits as an IEEE double-precision float (15)
    #[default]
    Double,

    /// Explicit number of fractional digits
    Custom(u32),
}

impl OutputPrecision {
    /// Number of fractional digits this preset produces
    pub const fn digits(self) -> u32 {
        match self {
            OutputPrecision::Integer => 0,
            OutputPrecision::Single => 7,
            OutputPrecision::Double => DEFAULT_PRECISION,
            OutputPrecision::Custom(digits) => digits,
        }
    }
}

// ============================================================================
// Complete Converter Configuration
// ============================================================================

/// Configuration for a [`RadixConverter`](crate::engine::RadixConverter)
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConverterConfig {
    /// Fractional precision of every rendered value
    pub precision: OutputPrecision,

    /// Also render binary, octal and hexadecimal forms of the value
    pub include_alternates: bool,
}

impl ConverterConfig {
    /// Create a new configuration with the given precision
    pub fn new(precision: OutputPrecision) -> Self {
        Self {
            precision,
            include_alternates: true,
        }
    }

    /// Builder method: Set output precision
    pub fn with_output_precision(mut self, precision: OutputPrecision) -> Self {
        self.precision = precision;
        self
    }

    /// Builder method: Set an explicit number of fractional digits
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.precision = OutputPrecision::Custom(digits);
        self
    }

    /// Builder method: Enable or disable alternate representations
    pub fn with_alternates(mut self, enabled: bool) -> Self {
        self.include_alternates = enabled;
        self
    }

    /// Fractional digits to produce
    #[inline]
    pub fn fraction_digits(&self) -> u32 {
        self.precision.digits()
    }

    /// Validate the configuration
    ///
    /// The requested precision plus the safety margin must fit within the
    /// working precision of the decimal intermediate.
    pub fn validate(&self) -> ConversionResult<()> {
        let requested = self.fraction_digits();
        if requested > MAX_FRACTION_DIGITS {
            return Err(ConversionError::InvalidPrecision {
                requested,
                max: MAX_FRACTION_DIGITS,
            });
        }
        Ok(())
    }

    // ========================================================================
    // Preset Configurations
    // ========================================================================

    /// Whole-number output, like converting into an integer type
    pub fn integer() -> Self {
        Self::new(OutputPrecision::Integer)
    }

    /// Single-precision float style output (7 fractional digits)
    pub fn single() -> Self {
        Self::new(OutputPrecision::Single)
    }

    /// Double-precision float style output (15 fractional digits)
    pub fn double() -> Self {
        Self::new(OutputPrecision::Double)
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self::double()
    }
}
