//! Decoder configuration and wire layouts.

use fuel_tx_buffers::WORD_SIZE;
use serde::{Deserialize, Serialize};

/// Largest integer a JavaScript number represents exactly (`2^53 - 1`).
pub const MAX_SAFE_INTEGER: u64 = (1 << 53) - 1;

/// Byte layout of the encoded transaction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Layout {
    /// Fuel canonical encoding: every discriminant and integer takes one
    /// 8-byte word, byte arrays are zero-padded to a word boundary, and the
    /// section counts sit in the transaction header.
    #[default]
    Canonical,
    /// Packed encoding with the logical field widths, 1-byte discriminants,
    /// no padding, each count directly followed by its elements and the
    /// type-specific payload after the witnesses.
    Compact,
}

impl Layout {
    pub fn discriminant_width(self) -> usize {
        match self {
            Layout::Canonical => WORD_SIZE,
            Layout::Compact => 1,
        }
    }

    /// Encoded width of an integer whose logical width is `logical` bytes.
    pub fn uint_width(self, logical: usize) -> usize {
        match self {
            Layout::Canonical => WORD_SIZE,
            Layout::Compact => logical,
        }
    }

    /// Alignment padding following a byte array of `len` bytes.
    pub fn padding(self, len: usize) -> usize {
        match self {
            Layout::Canonical => fuel_tx_buffers::padding(len),
            Layout::Compact => 0,
        }
    }

    /// Whether policy types and the section counts precede the type payload.
    pub fn counts_up_front(self) -> bool {
        matches!(self, Layout::Canonical)
    }
}

/// Logical field widths in bytes.
pub(crate) mod width {
    pub const BYTES32: usize = 32;
    pub const COUNT: usize = 8;
    pub const POLICY_TYPES: usize = 8;

    pub const GAS_LIMIT: usize = 8;
    pub const SCRIPT_LENGTH: usize = 8;
    pub const SCRIPT_DATA_LENGTH: usize = 8;

    pub const BYTECODE_WITNESS_INDEX: usize = 2;
    pub const STORAGE_SLOTS_COUNT: usize = 8;
    pub const STORAGE_SLOT: usize = 64;

    pub const MINT_AMOUNT: usize = 8;
    pub const GAS_PRICE: usize = 8;

    pub const WITNESS_INDEX: usize = 2;
    pub const SUBSECTION_INDEX: usize = 2;
    pub const SUBSECTIONS_NUMBER: usize = 2;
    pub const PROOF_SET_COUNT: usize = 2;

    pub const OUTPUT_INDEX: usize = 1;
    pub const AMOUNT: usize = 8;
    pub const BLOCK_HEIGHT: usize = 4;
    pub const TX_INDEX: usize = 2;
    pub const INPUT_WITNESS_INDEX: usize = 1;
    pub const PREDICATE_GAS_USED: usize = 8;
    pub const PREDICATE_LENGTH: usize = 4;
    pub const PREDICATE_DATA_LENGTH: usize = 4;
    pub const DATA_LENGTH: usize = 4;

    pub const INPUT_INDEX: usize = 1;

    pub const WITNESS_DATA_LENGTH: usize = 4;

    pub const TIP: usize = 8;
    pub const WITNESS_LIMIT: usize = 4;
    pub const MATURITY: usize = 4;
    pub const MAX_FEE: usize = 8;
}

/// Options for a decode pass.
///
/// Deserializes from a partial object (missing keys take their defaults), so
/// `{"layout": "compact"}` is a valid configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DecoderConfig {
    pub layout: Layout,
    /// Integers above this value are clamped to it.
    pub uint_ceiling: u64,
    /// Turn short reads of fixed-width fields into errors instead of
    /// clamping them.
    pub strict: bool,
}

impl Default for DecoderConfig {
    fn default() -> Self {
        Self {
            layout: Layout::Canonical,
            uint_ceiling: MAX_SAFE_INTEGER,
            strict: false,
        }
    }
}

impl DecoderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_uint_ceiling(mut self, ceiling: u64) -> Self {
        self.uint_ceiling = ceiling;
        self
    }

    pub fn with_strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layout_widths() {
        assert_eq!(Layout::Canonical.uint_width(width::OUTPUT_INDEX), 8);
        assert_eq!(Layout::Compact.uint_width(width::OUTPUT_INDEX), 1);
        assert_eq!(Layout::Canonical.discriminant_width(), 8);
        assert_eq!(Layout::Compact.discriminant_width(), 1);
        assert_eq!(Layout::Canonical.padding(141), 3);
        assert_eq!(Layout::Compact.padding(141), 0);
    }

    #[test]
    fn config_from_partial_json() {
        let config: DecoderConfig = serde_json::from_str(r#"{"layout":"compact"}"#).unwrap();
        assert_eq!(config.layout, Layout::Compact);
        assert_eq!(config.uint_ceiling, MAX_SAFE_INTEGER);
        assert!(!config.strict);

        let config: DecoderConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, DecoderConfig::default());
    }
}
