// ============================================================================
// Radix Names
// Display labels for well-known radices
// ============================================================================

use std::borrow::Cow;

/// Human-readable label for a radix.
///
/// Bases 2, 8, 10 and 16 have fixed names; anything else (including
/// unsupported values) gets a generic `"radix N"` label.
pub fn base_name(radix: u32) -> Cow<'static, str> {
    match radix {
        2 => Cow::Borrowed("binary"),
        8 => Cow::Borrowed("octal"),
        10 => Cow::Borrowed("decimal"),
        16 => Cow::Borrowed("hexadecimal"),
        other => Cow::Owned(format!("radix {}", other)),
    }
}
