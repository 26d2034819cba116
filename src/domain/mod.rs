// ============================================================================
// Domain Models Module
// Configuration and result types for conversions
// ============================================================================

pub mod config;
pub mod report;

pub use config::{ConverterConfig, OutputPrecision};
pub use report::ConversionReport;
