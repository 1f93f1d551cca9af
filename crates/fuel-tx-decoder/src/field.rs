//! Provenance-annotated field list.
//!
//! Every value the decoder reads is also appended to a flat list of
//! [`DecodedField`]s that remembers where in the input it came from. Nested
//! structures (the inputs section, one input, its transaction pointer) are
//! expressed as groups: a zero-width header field followed by children that
//! share the header's [`GroupId`] and sit one level deeper.

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};
use std::fmt;
use std::ops::Range;

/// Value shown for a field: integers stay numbers, everything else is text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Number(u64),
    Text(String),
}

impl FieldValue {
    pub fn as_number(&self) -> Option<u64> {
        match self {
            FieldValue::Number(n) => Some(*n),
            FieldValue::Text(_) => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Number(_) => None,
            FieldValue::Text(s) => Some(s),
        }
    }
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Number(n) => write!(f, "{n}"),
            FieldValue::Text(s) => f.write_str(s),
        }
    }
}

/// Identifier of a field group, unique within one decode pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(u32);

impl GroupId {
    pub fn get(self) -> u32 {
        self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "group-{}", self.0)
    }
}

impl Serialize for GroupId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One decoded field and the byte range it was read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedField {
    pub name: String,
    pub value: FieldValue,
    /// Byte offset of the first byte.
    pub start: usize,
    /// Byte offset one past the last byte.
    pub end: usize,
    /// Lowercase hex of the bytes in `start..end`. Empty for group headers.
    pub hex: String,
    /// Group the field belongs to; `None` at the root.
    pub group_id: Option<GroupId>,
    pub level: usize,
    pub is_group_header: bool,
}

impl DecodedField {
    /// Size in bytes.
    pub fn size(&self) -> usize {
        self.end - self.start
    }

    /// Start as an offset into the hex string.
    pub fn start_pos(&self) -> usize {
        self.start * 2
    }

    pub fn end_pos(&self) -> usize {
        self.end * 2
    }
}

impl Serialize for DecodedField {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("DecodedField", 9)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("value", &self.value)?;
        s.serialize_field("startPos", &self.start_pos())?;
        s.serialize_field("endPos", &self.end_pos())?;
        s.serialize_field("size", &self.size())?;
        s.serialize_field("hexValue", &self.hex)?;
        match self.group_id {
            Some(id) => s.serialize_field("groupId", &id)?,
            None => s.serialize_field("groupId", "")?,
        }
        s.serialize_field("level", &self.level)?;
        s.serialize_field("isGroupHeader", &self.is_group_header)?;
        s.end()
    }
}

/// An open group, as returned by [`FieldRecorder::start_group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupHandle {
    pub id: GroupId,
    /// Level of the group's children.
    pub level: usize,
}

/// Accumulates the field list of one decode pass.
#[derive(Debug, Default)]
pub struct FieldRecorder {
    fields: Vec<DecodedField>,
    skips: Vec<Range<usize>>,
    open: Vec<GroupHandle>,
    next_group: u32,
}

impl FieldRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clears all recorded state.
    pub fn reset(&mut self) {
        self.fields.clear();
        self.skips.clear();
        self.open.clear();
        self.next_group = 0;
    }

    /// Current nesting level.
    pub fn level(&self) -> usize {
        self.open.len()
    }

    pub fn current_group(&self) -> Option<GroupId> {
        self.open.last().map(|group| group.id)
    }

    /// Appends a field to the innermost open group.
    pub fn record(
        &mut self,
        name: impl Into<String>,
        value: FieldValue,
        span: Range<usize>,
        hex: String,
    ) -> &DecodedField {
        let field = DecodedField {
            name: name.into(),
            value,
            start: span.start,
            end: span.end,
            hex,
            group_id: self.current_group(),
            level: self.level(),
            is_group_header: false,
        };
        self.push(field)
    }

    /// Emits a zero-width header at byte offset `at` and opens a group under
    /// it. Fields recorded until the matching [`end_group`] belong to it.
    ///
    /// [`end_group`]: FieldRecorder::end_group
    pub fn start_group(&mut self, name: impl Into<String>, at: usize) -> GroupHandle {
        let name = name.into();
        self.next_group += 1;
        let id = GroupId(self.next_group);
        let header = DecodedField {
            value: FieldValue::Text(format!("Group: {name}")),
            name,
            start: at,
            end: at,
            hex: String::new(),
            group_id: Some(id),
            level: self.level(),
            is_group_header: true,
        };
        self.push(header);
        let handle = GroupHandle {
            id,
            level: self.level() + 1,
        };
        self.open.push(handle);
        handle
    }

    /// Closes the innermost group. Does nothing at the root.
    pub fn end_group(&mut self) -> Option<GroupHandle> {
        self.open.pop()
    }

    /// Notes bytes consumed without producing a field.
    pub fn skip(&mut self, span: Range<usize>) {
        if !span.is_empty() {
            self.skips.push(span);
        }
    }

    pub fn fields(&self) -> &[DecodedField] {
        &self.fields
    }

    pub fn skips(&self) -> &[Range<usize>] {
        &self.skips
    }

    pub fn into_parts(self) -> (Vec<DecodedField>, Vec<Range<usize>>) {
        (self.fields, self.skips)
    }

    fn push(&mut self, field: DecodedField) -> &DecodedField {
        self.fields.push(field);
        &self.fields[self.fields.len() - 1]
    }
}
