// ============================================================================
// Radix Module
// Conversion core: digit alphabet, decoding, encoding, validation, labels
// ============================================================================
//
// All functions here are pure: no I/O, no shared state. Radices arrive as
// plain integers and are range-checked before the operand is looked at.

mod alphabet;
mod decode;
mod encode;
mod literal;
mod names;
mod validate;

pub use alphabet::{char_to_value, value_to_char, Radix, DIGITS};
pub use decode::decode;
pub use encode::{encode, DEFAULT_PRECISION};
pub use literal::{normalize, Literal};
pub use names::base_name;
pub use validate::is_valid;
