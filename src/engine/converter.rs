// ============================================================================
// Radix Converter
// Composes decode/encode into a full conversion with reporting
// ============================================================================

use crate::domain::{ConversionReport, ConverterConfig};
use crate::interfaces::{ConversionEvent, EventHandler};
use crate::numeric::{ConversionResult, ToExactDecimal};
use crate::radix::{decode, encode, normalize, Radix};
use std::sync::Arc;

/// Alternate radices reported next to the requested target
const ALTERNATE_RADICES: [Radix; 3] = [Radix::BINARY, Radix::OCTAL, Radix::HEXADECIMAL];

/// Converter with a fixed output precision and an event sink
pub struct RadixConverter {
    /// Output configuration
    config: ConverterConfig,

    /// Event handler for processing events
    event_handler: Arc<dyn EventHandler>,
}

impl RadixConverter {
    /// Create a new converter
    ///
    /// The configuration is taken as-is; use
    /// [`create_from_config`](super::create_from_config) to validate it first.
    pub fn new(config: ConverterConfig, event_handler: Arc<dyn EventHandler>) -> Self {
        Self {
            config,
            event_handler,
        }
    }

    /// Get the configuration
    pub fn config(&self) -> &ConverterConfig {
        &self.config
    }

    /// Fractional digits used for every rendering
    #[inline]
    pub fn precision(&self) -> u32 {
        self.config.fraction_digits()
    }

    /// Convert `literal` from `source_radix` to `target_radix`
    ///
    /// The value is also rendered in base 10 (the same routine used when the
    /// target is 10) and, unless disabled, in binary, octal and hexadecimal
    /// when the value is non-zero and the radices differ.
    ///
    /// # Errors
    /// Any error from [`decode`] or [`encode`]; a `Rejected` event is emitted
    /// before the error is returned.
    pub fn convert(
        &self,
        literal: &str,
        source_radix: u32,
        target_radix: u32,
    ) -> ConversionResult<ConversionReport> {
        let source = normalize(literal);

        match self.try_convert(&source, source_radix, target_radix) {
            Ok((report, events)) => {
                self.event_handler.on_events(events);
                Ok(report)
            }
            Err(error) => {
                self.event_handler.on_event(ConversionEvent::Rejected {
                    source,
                    error,
                    reason: error.to_string(),
                });
                Err(error)
            }
        }
    }

    /// Render a value in base 10 with the configured precision
    pub fn decimal_display<V: ToExactDecimal>(&self, value: V) -> ConversionResult<String> {
        encode(value, Radix::DECIMAL.get(), self.precision())
    }

    fn try_convert(
        &self,
        source: &str,
        source_radix: u32,
        target_radix: u32,
    ) -> ConversionResult<(ConversionReport, Vec<ConversionEvent>)> {
        let source_radix = Radix::new(source_radix)?;
        let target_radix = Radix::new(target_radix)?;
        let precision = self.precision();

        let value = decode(source, source_radix.get())?;
        let mut events = vec![ConversionEvent::Decoded {
            source: source.to_string(),
            radix: source_radix,
            value,
        }];

        // a written radix point counts, even with no digits after it
        let fraction_discarded = precision == 0 && source.contains('.');
        if fraction_discarded {
            tracing::warn!(
                source = %source,
                "Integer output selected, fractional part will be discarded"
            );
        }

        let decimal = self.decimal_display(value)?;
        let target = if target_radix == Radix::DECIMAL {
            decimal.clone()
        } else {
            encode(value, target_radix.get(), precision)?
        };

        let mut alternates = Vec::new();
        if self.config.include_alternates && source_radix != target_radix && !value.is_zero() {
            for radix in ALTERNATE_RADICES {
                if radix != target_radix {
                    alternates.push((radix, encode(value, radix.get(), precision)?));
                }
            }
        }

        events.push(ConversionEvent::Converted {
            source: source.to_string(),
            source_radix,
            target_radix,
            target: target.clone(),
        });

        let report = ConversionReport {
            source: source.to_string(),
            source_radix,
            decimal,
            target_radix,
            target,
            precision,
            alternates,
            fraction_discarded,
        };

        Ok((report, events))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::OutputPrecision;
    use crate::interfaces::NoOpEventHandler;
    use crate::numeric::ConversionError;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<ConversionEvent>>);

    impl EventHandler for Recorder {
        fn on_event(&self, event: ConversionEvent) {
            self.0.lock().unwrap().push(event);
        }
    }

    fn converter(precision: OutputPrecision) -> RadixConverter {
        RadixConverter::new(ConverterConfig::new(precision), Arc::new(NoOpEventHandler))
    }

    #[test]
    fn test_convert_hex_to_ternary() {
        let report = converter(OutputPrecision::Double)
            .convert(" ff ", 16, 3)
            .unwrap();

        assert_eq!(report.source, "FF");
        assert_eq!(report.decimal, "255");
        assert_eq!(report.target, "100110");
        assert_eq!(
            report.alternates,
            vec![
                (Radix::BINARY, "11111111".to_string()),
                (Radix::OCTAL, "377".to_string()),
                (Radix::HEXADECIMAL, "FF".to_string()),
            ]
        );
        assert!(!report.fraction_discarded);
    }

    #[test]
    fn test_target_decimal_uses_decimal_display() {
        let report = converter(OutputPrecision::Custom(3))
            .convert("0.1", 3, 10)
            .unwrap();
        assert_eq!(report.decimal, "0.333");
        assert_eq!(report.target, report.decimal);
    }

    #[test]
    fn test_alternates_skip_target() {
        let report = converter(OutputPrecision::Double)
            .convert("-3.5", 10, 2)
            .unwrap();
        assert_eq!(report.target, "-11.1");
        assert_eq!(report.alternate(Radix::BINARY), None);
        assert_eq!(report.alternate(Radix::OCTAL), Some("-3.4"));
        assert_eq!(report.alternate(Radix::HEXADECIMAL), Some("-3.8"));
    }

    #[test]
    fn test_no_alternates_for_zero_or_same_radix() {
        let c = converter(OutputPrecision::Double);
        assert!(c.convert("0", 16, 2).unwrap().alternates.is_empty());
        assert!(c.convert("A", 16, 16).unwrap().alternates.is_empty());

        let quiet = RadixConverter::new(
            ConverterConfig::default().with_alternates(false),
            Arc::new(NoOpEventHandler),
        );
        assert!(quiet.convert("A", 16, 2).unwrap().alternates.is_empty());
    }

    #[test]
    fn test_integer_output_discards_fraction() {
        let report = converter(OutputPrecision::Integer)
            .convert("-3.5", 10, 2)
            .unwrap();
        assert!(report.fraction_discarded);
        assert_eq!(report.decimal, "-3");
        assert_eq!(report.target, "-11");
        assert_eq!(report.precision, 0);
    }

    #[test]
    fn test_trailing_point_counts_as_fraction() {
        let c = converter(OutputPrecision::Integer);

        let report = c.convert("7.", 10, 2).unwrap();
        assert!(report.fraction_discarded);
        assert_eq!(report.target, "111");

        let report = c.convert("7", 10, 2).unwrap();
        assert!(!report.fraction_discarded);

        let report = converter(OutputPrecision::Single).convert("7.", 10, 2).unwrap();
        assert!(!report.fraction_discarded);
    }

    #[test]
    fn test_decimal_display() {
        let c = converter(OutputPrecision::Single);
        assert_eq!(c.decimal_display(0.125_f64).unwrap(), "0.125");
        let third = rust_decimal::Decimal::ONE / rust_decimal::Decimal::from(3);
        assert_eq!(c.decimal_display(third).unwrap(), "0.3333333");
    }

    #[test]
    fn test_errors_propagate() {
        let c = converter(OutputPrecision::Double);
        assert_eq!(c.convert("1", 1, 10), Err(ConversionError::InvalidRadix(1)));
        assert_eq!(c.convert("1", 10, 37), Err(ConversionError::InvalidRadix(37)));
        assert_eq!(c.convert("", 10, 2), Err(ConversionError::EmptyInput));
        assert_eq!(
            c.convert("1.2.3", 10, 2),
            Err(ConversionError::MalformedLiteral)
        );
        assert_eq!(
            c.convert("g", 16, 2),
            Err(ConversionError::InvalidDigit {
                digit: 'G',
                radix: 16
            })
        );
    }

    #[test]
    fn test_events_emitted() {
        let recorder = Arc::new(Recorder::default());
        let c = RadixConverter::new(ConverterConfig::default(), recorder.clone());

        c.convert("z", 36, 10).unwrap();
        let _ = c.convert("z", 16, 10);

        let events = recorder.0.lock().unwrap();
        assert_eq!(events.len(), 3);
        assert!(matches!(
            &events[0],
            ConversionEvent::Decoded { source, .. } if source == "Z"
        ));
        assert!(matches!(
            &events[1],
            ConversionEvent::Converted { target, .. } if target == "35"
        ));
        assert!(matches!(
            &events[2],
            ConversionEvent::Rejected {
                error: ConversionError::InvalidDigit { digit: 'Z', radix: 16 },
                ..
            }
        ));
    }
}
