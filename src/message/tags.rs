//! IRCv3 message tags: the `@key=value;key2` segment.
//!
//! Tags are an ordered mapping from key to value. A key may carry a text
//! value (`key=value`, where the value may be empty) or appear bare as a
//! presence flag (`key`). Values pass through verbatim; this layer does not
//! apply the IRCv3 escaping table.

use indexmap::IndexMap;

/// Ordered tag mapping of a message.
///
/// Insertion order is preserved for re-serialization; equality is
/// order-insensitive, matching the grammar (tag order carries no meaning).
/// Duplicate keys keep the first occurrence's position and the last
/// occurrence's value.
pub type Tags = IndexMap<String, TagValue>;

/// The value side of one message tag.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TagValue {
    /// The tag appeared as `key=value`; the text may be empty (`key=`).
    Text(String),
    /// The tag appeared bare, with no `=`.
    Flag,
}

impl TagValue {
    /// Returns the text value, or `None` for a presence flag.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            TagValue::Flag => None,
        }
    }

    /// Returns `true` for a presence flag.
    pub fn is_flag(&self) -> bool {
        matches!(self, TagValue::Flag)
    }
}

/// Parses the decoded text of a tag segment (leading `@` already stripped).
pub(crate) fn parse_segment(segment: &str) -> Tags {
    let mut tags = Tags::new();
    for item in segment.split(';') {
        match item.split_once('=') {
            Some((key, value)) => tags.insert(key.to_string(), TagValue::Text(value.to_string())),
            None => tags.insert(item.to_string(), TagValue::Flag),
        };
    }
    tags
}

/// Renders a tag mapping back into segment text (without the `@`).
pub(crate) fn render_segment(tags: &Tags) -> String {
    let mut out = String::new();
    for (i, (key, value)) in tags.iter().enumerate() {
        if i > 0 {
            out.push(';');
        }
        out.push_str(key);
        if let TagValue::Text(text) = value {
            out.push('=');
            out.push_str(text);
        }
    }
    out
}
