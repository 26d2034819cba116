// ============================================================================
// Numeric Module
// Error types and exact-decimal plumbing for radix conversion
// ============================================================================
//
// This module provides:
// - ConversionError: Error taxonomy for decode/encode
// - ToExactDecimal: Lossless conversion of native numbers into Decimal
// - Working precision constants
//
// Design principles:
// - No binary floating-point on the conversion path
// - All operations return Result (no panics)

mod errors;
mod exact;

pub use errors::{ConversionError, ConversionResult};
pub use exact::{ToExactDecimal, MAX_FRACTION_DIGITS, SAFETY_MARGIN, WORKING_PRECISION};
