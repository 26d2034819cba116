// ============================================================================
// Utilities Module
// Helper functions for embedding the converter
// ============================================================================

#[cfg(feature = "logging")]
mod logging;

#[cfg(feature = "logging")]
pub use logging::init_logging;
