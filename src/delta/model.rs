//! Data model for Quill Delta documents.
//!
//! A Delta is an ordered sequence of insert operations; the wire shape is the
//! editor's own `{"ops":[...]}` JSON, so these types round-trip through
//! serde without any custom framing.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::BridgeResult;

// =============================================================================
// DELTA DOCUMENT
// =============================================================================

/// An ordered sequence of insert operations. The empty sequence is the empty
/// document.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Delta {
    /// Operations in document order.
    pub ops: Vec<DeltaOp>,
}

impl Delta {
    /// Creates a new empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of operations.
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if the document has no operations.
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Builder: Append an operation.
    pub fn with_op(mut self, op: DeltaOp) -> Self {
        self.ops.push(op);
        self
    }

    /// Appends an operation.
    pub fn push(&mut self, op: DeltaOp) {
        self.ops.push(op);
    }

    /// Document length in editor index units: one unit per character of
    /// inserted text, one unit per embed.
    pub fn length(&self) -> usize {
        self.ops.iter().map(DeltaOp::len).sum()
    }

    /// Concatenated text content, with each embed contributing nothing.
    pub fn plain_text(&self) -> String {
        let mut text = String::new();
        for op in &self.ops {
            if let Insert::Text(t) = &op.insert {
                text.push_str(t);
            }
        }
        text
    }

    /// Inserts an embed at the given editor index, splitting a text operation
    /// when the index falls inside it. Indexes past the end append.
    pub fn insert_embed_at(&mut self, index: usize, embed: Embed) {
        let mut offset = index;
        let mut at = self.ops.len();
        for (i, op) in self.ops.iter().enumerate() {
            let len = op.len();
            if offset < len {
                at = i;
                break;
            }
            offset -= len;
        }

        let new_op = DeltaOp::from_embed(embed);
        if at == self.ops.len() {
            self.ops.push(new_op);
            return;
        }
        if offset == 0 {
            self.ops.insert(at, new_op);
            return;
        }

        // Inside a text op (embeds have length 1, so offset > 0 implies text).
        if let Insert::Text(text) = &self.ops[at].insert {
            let byte = text
                .char_indices()
                .nth(offset)
                .map(|(b, _)| b)
                .unwrap_or(text.len());
            let head = text[..byte].to_string();
            let tail = text[byte..].to_string();
            let attributes = self.ops[at].attributes.clone();
            self.ops[at].insert = Insert::Text(head);
            self.ops.insert(at + 1, new_op);
            self.ops.insert(
                at + 2,
                DeltaOp {
                    insert: Insert::Text(tail),
                    attributes,
                },
            );
        } else {
            self.ops.insert(at, new_op);
        }
    }

    /// Decodes a document from its JSON encoding.
    pub fn from_json(json: &str) -> BridgeResult<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Encodes the document to its JSON encoding.
    pub fn to_json(&self) -> BridgeResult<String> {
        Ok(serde_json::to_string(self)?)
    }
}

// =============================================================================
// OPERATIONS
// =============================================================================

/// A single insert operation: literal text or an embedded object, plus an
/// optional map of formatting attributes. Absent attributes mean no
/// formatting.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DeltaOp {
    /// The inserted payload.
    pub insert: Insert,

    /// Formatting attributes (bold, italic, link, ...).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attributes: Option<BTreeMap<String, serde_json::Value>>,
}

impl DeltaOp {
    /// Creates a text insert with no attributes.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            insert: Insert::Text(text.into()),
            attributes: None,
        }
    }

    /// Creates an image embed insert.
    pub fn image(url: impl Into<String>) -> Self {
        Self::from_embed(Embed::Image(url.into()))
    }

    /// Creates a video embed insert.
    pub fn video(url: impl Into<String>) -> Self {
        Self::from_embed(Embed::Video(url.into()))
    }

    /// Creates an embed insert with no attributes.
    pub fn from_embed(embed: Embed) -> Self {
        Self {
            insert: Insert::Embed(embed),
            attributes: None,
        }
    }

    /// Builder: Set a formatting attribute.
    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.attributes
            .get_or_insert_with(BTreeMap::new)
            .insert(name.into(), value.into());
        self
    }

    /// Operation length in editor index units.
    pub fn len(&self) -> usize {
        match &self.insert {
            Insert::Text(text) => text.chars().count(),
            Insert::Embed(_) => 1,
        }
    }

    /// Returns true if the operation inserts nothing.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An insert payload: literal text, or an embedded object.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Insert {
    /// Literal text.
    Text(String),
    /// An embedded object, encoded as a single-key map (`{"image": url}`).
    Embed(Embed),
}

/// An embedded object referenced by URL.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub enum Embed {
    /// An image, `{"image": url}` on the wire.
    #[serde(rename = "image")]
    Image(String),
    /// A video, `{"video": url}` on the wire.
    #[serde(rename = "video")]
    Video(String),
}

impl Embed {
    /// The embed's URL.
    pub fn url(&self) -> &str {
        match self {
            Embed::Image(url) | Embed::Video(url) => url,
        }
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_document() {
        let delta = Delta::new();
        assert!(delta.is_empty());
        assert_eq!(delta.length(), 0);
        assert_eq!(delta.to_json().unwrap(), r#"{"ops":[]}"#);
    }

    #[test]
    fn test_json_round_trip() {
        let delta = Delta::new()
            .with_op(DeltaOp::text("hello "))
            .with_op(DeltaOp::text("world").with_attribute("bold", true))
            .with_op(DeltaOp::image("https://example.com/a.png"))
            .with_op(DeltaOp::text("link").with_attribute("link", "https://example.com"));

        let json = delta.to_json().unwrap();
        let decoded = Delta::from_json(&json).unwrap();
        assert_eq!(decoded, delta);
    }

    #[test]
    fn test_decodes_quill_wire_shape() {
        let json = r#"{"ops":[{"insert":"hi"},{"insert":{"image":"u"},"attributes":{"width":100}},{"insert":{"video":"v"}}]}"#;
        let delta = Delta::from_json(json).unwrap();
        assert_eq!(delta.len(), 3);
        assert_eq!(delta.ops[0].insert, Insert::Text("hi".into()));
        assert_eq!(delta.ops[1].insert, Insert::Embed(Embed::Image("u".into())));
        assert_eq!(delta.ops[2].insert, Insert::Embed(Embed::Video("v".into())));
    }

    #[test]
    fn test_attributes_omitted_when_absent() {
        let json = Delta::new().with_op(DeltaOp::text("plain")).to_json().unwrap();
        assert!(!json.contains("attributes"));
    }

    #[test]
    fn test_malformed_json_is_an_error() {
        assert!(Delta::from_json("not a delta").is_err());
        assert!(Delta::from_json(r#"{"ops":[{"bogus":1}]}"#).is_err());
    }

    #[test]
    fn test_length_counts_chars_and_embeds() {
        let delta = Delta::new()
            .with_op(DeltaOp::text("héllo"))
            .with_op(DeltaOp::image("u"));
        assert_eq!(delta.length(), 6);
    }

    #[test]
    fn test_insert_embed_splits_text_op() {
        let mut delta = Delta::new().with_op(DeltaOp::text("hello").with_attribute("bold", true));
        delta.insert_embed_at(2, Embed::Image("u".into()));

        assert_eq!(delta.len(), 3);
        assert_eq!(delta.ops[0].insert, Insert::Text("he".into()));
        assert_eq!(delta.ops[1].insert, Insert::Embed(Embed::Image("u".into())));
        assert_eq!(delta.ops[2].insert, Insert::Text("llo".into()));
        // Both halves keep the original attributes.
        assert!(delta.ops[0].attributes.is_some());
        assert_eq!(delta.ops[0].attributes, delta.ops[2].attributes);
    }

    #[test]
    fn test_insert_embed_at_boundary_and_past_end() {
        let mut delta = Delta::new().with_op(DeltaOp::text("ab"));
        delta.insert_embed_at(0, Embed::Image("first".into()));
        assert_eq!(delta.ops[0].insert, Insert::Embed(Embed::Image("first".into())));

        delta.insert_embed_at(99, Embed::Video("last".into()));
        assert_eq!(
            delta.ops.last().unwrap().insert,
            Insert::Embed(Embed::Video("last".into()))
        );
    }
}
