// ============================================================================
// Conversion Report
// ============================================================================

use crate::radix::{base_name, Radix};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Everything produced by converting one literal between two radices
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ConversionReport {
    /// Source literal, trimmed and uppercased
    pub source: String,

    /// Radix the source is written in
    pub source_radix: Radix,

    /// Value rendered in base 10
    pub decimal: String,

    /// Radix requested by the caller
    pub target_radix: Radix,

    /// Value rendered in the target radix
    pub target: String,

    /// Fractional digits used for every rendering
    pub precision: u32,

    /// Binary/octal/hexadecimal forms other than the target
    pub alternates: Vec<(Radix, String)>,

    /// The source had a fractional part that integer output dropped
    pub fraction_discarded: bool,
}

impl ConversionReport {
    /// Label of the source radix (e.g. "hexadecimal")
    pub fn source_label(&self) -> String {
        base_name(self.source_radix.get()).into_owned()
    }

    /// Label of the target radix
    pub fn target_label(&self) -> String {
        base_name(self.target_radix.get()).into_owned()
    }

    /// Look up an alternate rendering by radix
    pub fn alternate(&self, radix: Radix) -> Option<&str> {
        self.alternates
            .iter()
            .find(|(r, _)| *r == radix)
            .map(|(_, s)| s.as_str())
    }

    /// Serialize the report as JSON
    #[cfg(feature = "serde")]
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}
