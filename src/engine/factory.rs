// ============================================================================
// Converter Factory
// Creates radix converters with validated configuration
// ============================================================================

use crate::domain::{ConverterConfig, OutputPrecision};
use crate::engine::RadixConverter;
use crate::interfaces::EventHandler;
use crate::numeric::ConversionResult;
use std::sync::Arc;

// ============================================================================
// Factory Functions
// ============================================================================

/// Creates a radix converter from configuration
///
/// # Arguments
/// * `config` - Converter configuration
/// * `event_handler` - Event handler for conversion events
///
/// # Errors
/// Returns `InvalidPrecision` if the configured precision does not fit the
/// working precision of the decimal intermediate.
///
/// # Example
/// ```
/// use radix_converter::prelude::*;
/// use std::sync::Arc;
///
/// let converter = create_from_config(ConverterConfig::single(), Arc::new(NoOpEventHandler)).unwrap();
/// assert_eq!(converter.precision(), 7);
/// ```
pub fn create_from_config(
    config: ConverterConfig,
    event_handler: Arc<dyn EventHandler>,
) -> ConversionResult<RadixConverter> {
    config.validate()?;

    tracing::debug!(
        precision = config.fraction_digits(),
        alternates = config.include_alternates,
        "Creating radix converter"
    );

    Ok(RadixConverter::new(config, event_handler))
}

// ============================================================================
// Builder Pattern
// ============================================================================

/// Fluent builder for radix converters
///
/// # Example
/// ```
/// use radix_converter::prelude::*;
/// use std::sync::Arc;
///
/// let converter = RadixConverterBuilder::new()
///     .integer_output()
///     .without_alternates()
///     .build(Arc::new(NoOpEventHandler))
///     .unwrap();
///
/// assert_eq!(converter.convert("FF.8", 16, 10).unwrap().target, "255");
/// ```
#[derive(Debug, Clone, Default)]
pub struct RadixConverterBuilder {
    config: ConverterConfig,
}

impl RadixConverterBuilder {
    /// Create a new builder with default configuration (double precision)
    pub fn new() -> Self {
        Self::default()
    }

    // ========================================================================
    // Precision Configuration
    // ========================================================================

    /// Whole-number output
    pub fn integer_output(mut self) -> Self {
        self.config.precision = OutputPrecision::Integer;
        self
    }

    /// Seven fractional digits
    pub fn single_output(mut self) -> Self {
        self.config.precision = OutputPrecision::Single;
        self
    }

    /// Fifteen fractional digits
    pub fn double_output(mut self) -> Self {
        self.config.precision = OutputPrecision::Double;
        self
    }

    /// Explicit number of fractional digits
    pub fn with_precision(mut self, digits: u32) -> Self {
        self.config.precision = OutputPrecision::Custom(digits);
        self
    }

    // ========================================================================
    // Additional Configuration
    // ========================================================================

    /// Skip binary/octal/hexadecimal alternates in reports
    pub fn without_alternates(mut self) -> Self {
        self.config.include_alternates = false;
        self
    }

    // ========================================================================
    // Build
    // ========================================================================

    /// Build the converter
    pub fn build(self, event_handler: Arc<dyn EventHandler>) -> ConversionResult<RadixConverter> {
        create_from_config(self.config, event_handler)
    }

    /// Get the configuration without building (for inspection)
    pub fn get_config(&self) -> &ConverterConfig {
        &self.config
    }
}
