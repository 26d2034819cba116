// ============================================================================
// Validation
// Lexical pre-screen mirroring the decoder's rules
// ============================================================================

use super::alphabet::Radix;
use super::literal::{normalize, Literal};

/// Check whether `literal` is a well-formed numeral in `radix`.
///
/// Applies the same lexical rules as [`decode`](super::decode) without
/// doing any arithmetic, and never fails: an unsupported radix is simply
/// `false`. A `false` here always means `decode` would fail too.
pub fn is_valid(literal: &str, radix: u32) -> bool {
    let Ok(radix) = Radix::new(radix) else {
        return false;
    };

    let normalized = normalize(literal);
    let Ok(parts) = Literal::split(&normalized) else {
        return false;
    };

    let symbols = radix.symbols();
    let allowed = |c: char| c.is_ascii() && symbols.contains(&(c as u8));

    parts.integer.chars().all(allowed) && parts.fraction.chars().all(allowed)
}
