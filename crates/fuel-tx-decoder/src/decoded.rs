use crate::field::DecodedField;
use crate::transaction::Transaction;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::ops::Range;

/// Result of a successful decode.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedTransaction {
    pub transaction: Transaction,
    /// Every decoded field in read order, group headers included.
    pub fields: Vec<DecodedField>,
    /// Byte ranges consumed without producing a field (alignment padding).
    pub skips: Vec<Range<usize>>,
    /// Input hex digits without the `0x` prefix.
    pub raw_hex: String,
    /// Some fixed-width read ran past the end of the input and was clamped.
    pub truncated: bool,
}

impl DecodedTransaction {
    /// Fields that cover bytes, sorted by position. This is the view a byte
    /// highlighter consumes.
    pub fn data_fields(&self) -> Vec<&DecodedField> {
        let mut fields: Vec<_> = self.fields.iter().filter(|f| !f.is_group_header).collect();
        fields.sort_by_key(|f| (f.start, f.end));
        fields
    }

    /// Length of the decoded input in bytes.
    pub fn byte_len(&self) -> usize {
        self.raw_hex.len() / 2
    }

    /// First field with the given name.
    pub fn field(&self, name: &str) -> Option<&DecodedField> {
        self.fields.iter().find(|f| f.name == name)
    }
}

impl Serialize for DecodedTransaction {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let skips: Vec<[usize; 2]> = self.skips.iter().map(|r| [r.start * 2, r.end * 2]).collect();
        let mut s = serializer.serialize_struct("DecodedTransaction", 5)?;
        s.serialize_field("transaction", &self.transaction)?;
        s.serialize_field("fields", &self.fields)?;
        s.serialize_field("skips", &skips)?;
        s.serialize_field("rawHex", &format!("0x{}", self.raw_hex))?;
        s.serialize_field("truncated", &self.truncated)?;
        s.end()
    }
}
