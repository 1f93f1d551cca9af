use serde::{Serialize, Serializer};
use std::fmt;

/// Raw bytes lifted out of a transaction, displayed and serialized as a
/// `0x`-prefixed lowercase hex string.
///
/// Fixed-width fields (ids, roots) normally hold 32 bytes but may be shorter
/// when the input ended early and the read was clamped.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HexBytes(pub Vec<u8>);

impl HexBytes {
    pub fn as_slice(&self) -> &[u8] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Hex digits without the `0x` prefix.
    pub fn to_hex(&self) -> String {
        hex::encode(&self.0)
    }
}

impl From<&[u8]> for HexBytes {
    fn from(bytes: &[u8]) -> Self {
        HexBytes(bytes.to_vec())
    }
}

impl From<Vec<u8>> for HexBytes {
    fn from(bytes: Vec<u8>) -> Self {
        HexBytes(bytes)
    }
}

impl fmt::Display for HexBytes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "0x{}", self.to_hex())
    }
}

impl Serialize for HexBytes {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Serializes a variant body with a numeric `type` tag in front of its fields.
#[derive(Serialize)]
pub(crate) struct Tagged<'a, T: ?Sized> {
    #[serde(rename = "type")]
    pub tag: u64,
    #[serde(flatten)]
    pub body: &'a T,
}

/// Body of a variant whose discriminant was not recognized.
#[derive(Serialize)]
pub(crate) struct UnknownVariant {
    #[serde(rename = "type")]
    pub tag: u64,
    pub unknown: bool,
}

impl UnknownVariant {
    pub fn new(tag: u64) -> Self {
        Self { tag, unknown: true }
    }
}
