// ============================================================================
// Event Handler Interface
// Defines the contract for observing conversions
// ============================================================================

use crate::numeric::ConversionError;
use crate::radix::Radix;
use rust_decimal::Decimal;

#[cfg(feature = "serde")]
use serde::Serialize;

/// Events emitted by the radix converter
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum ConversionEvent {
    /// Literal parsed into an exact value
    Decoded {
        source: String,
        radix: Radix,
        value: Decimal,
    },

    /// Value rendered in the target radix
    Converted {
        source: String,
        source_radix: Radix,
        target_radix: Radix,
        target: String,
    },

    /// Input refused before any value was produced
    Rejected {
        source: String,
        #[cfg_attr(feature = "serde", serde(skip))]
        error: ConversionError,
        reason: String,
    },
}

/// Event handler trait for processing converter events
/// Implementations can handle logging, metrics, auditing, etc.
pub trait EventHandler: Send + Sync {
    /// Handle a conversion event
    fn on_event(&self, event: ConversionEvent);

    /// Batch event handler (optional optimization)
    fn on_events(&self, events: Vec<ConversionEvent>) {
        for event in events {
            self.on_event(event);
        }
    }
}

/// No-op event handler for testing
pub struct NoOpEventHandler;

impl EventHandler for NoOpEventHandler {
    fn on_event(&self, _event: ConversionEvent) {
        // Do nothing
    }
}

/// Logging event handler
pub struct LoggingEventHandler;

impl EventHandler for LoggingEventHandler {
    fn on_event(&self, event: ConversionEvent) {
        match &event {
            ConversionEvent::Rejected { source, reason, .. } => {
                tracing::warn!(source = %source, "Conversion rejected: {}", reason);
            }
            _ => tracing::debug!("Radix converter event: {:?}", event),
        }
    }
}
