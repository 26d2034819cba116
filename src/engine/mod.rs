// ============================================================================
// Engine Module
// Contains the converter that composes the radix core
// ============================================================================

mod converter;

pub mod factory;

pub use converter::RadixConverter;
pub use factory::{create_from_config, RadixConverterBuilder};
