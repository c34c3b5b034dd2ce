//! Structured rich-text content
//!
//! Content is a delta: an ordered list of insert operations, each carrying
//! the text it inserts and its formatting. Inline formats (bold, links, ...)
//! apply to the text of the op. Block formats (headers, lists, alignment)
//! are carried by the op that inserts the paragraph's terminating newline.

use crate::{DocModelError, Result};
use serde::{Deserialize, Serialize};

/// Maximum supported header level
pub const MAX_HEADER_LEVEL: u8 = 6;

/// Rich-text document content as held by the editing widget
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredContent {
    /// Insert operations in document order
    pub ops: Vec<DeltaOp>,
}

/// A single insert operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeltaOp {
    /// The inserted text
    pub insert: String,
    /// Formatting applied to the inserted text
    #[serde(default, skip_serializing_if = "Attributes::is_plain")]
    pub attributes: Attributes,
}

impl DeltaOp {
    /// Create an unformatted insert
    pub fn text(insert: impl Into<String>) -> Self {
        Self {
            insert: insert.into(),
            attributes: Attributes::default(),
        }
    }

    /// Create a formatted insert
    pub fn formatted(insert: impl Into<String>, attributes: Attributes) -> Self {
        Self {
            insert: insert.into(),
            attributes,
        }
    }
}

/// Formatting attributes of an insert
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attributes {
    #[serde(default, skip_serializing_if = "is_false")]
    pub bold: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub italic: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub underline: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub strike: bool,
    /// Hyperlink target
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    /// Header level (1-6), block format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub header: Option<u8>,
    /// List kind, block format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub list: Option<ListKind>,
    /// Paragraph alignment, block format
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub align: Option<Align>,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Attributes {
    /// True when no formatting is set
    pub fn is_plain(&self) -> bool {
        *self == Self::default()
    }

    /// True when any block-level format is set
    pub fn has_block_format(&self) -> bool {
        self.header.is_some() || self.list.is_some() || self.align.is_some()
    }

    pub fn bold() -> Self {
        Self {
            bold: true,
            ..Default::default()
        }
    }

    pub fn italic() -> Self {
        Self {
            italic: true,
            ..Default::default()
        }
    }

    pub fn header(level: u8) -> Self {
        Self {
            header: Some(level),
            ..Default::default()
        }
    }

    pub fn list(kind: ListKind) -> Self {
        Self {
            list: Some(kind),
            ..Default::default()
        }
    }

    pub fn link(href: impl Into<String>) -> Self {
        Self {
            link: Some(href.into()),
            ..Default::default()
        }
    }
}

/// List kind for list paragraphs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Ordered,
    Bullet,
}

/// Paragraph alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Align {
    Center,
    Right,
    Justify,
}

impl Align {
    pub fn as_css(&self) -> &'static str {
        match self {
            Align::Center => "center",
            Align::Right => "right",
            Align::Justify => "justify",
        }
    }
}

impl StructuredContent {
    /// Create empty content
    pub fn new() -> Self {
        Self::default()
    }

    /// Create content holding a single unformatted paragraph
    pub fn from_text(text: impl Into<String>) -> Self {
        let mut text = text.into();
        if !text.ends_with('\n') {
            text.push('\n');
        }
        Self {
            ops: vec![DeltaOp::text(text)],
        }
    }

    /// Append an insert, returning the content (builder style)
    pub fn with(mut self, op: DeltaOp) -> Self {
        self.ops.push(op);
        self
    }

    /// True when the content holds no text beyond paragraph breaks
    pub fn is_empty(&self) -> bool {
        self.ops.iter().all(|op| op.insert.chars().all(|c| c == '\n'))
    }

    /// Concatenated text of all inserts
    pub fn plain_text(&self) -> String {
        self.ops.iter().map(|op| op.insert.as_str()).collect()
    }

    /// Check attribute values that the type system does not constrain
    pub fn validate(&self) -> Result<()> {
        for op in &self.ops {
            if let Some(level) = op.attributes.header {
                if level == 0 || level > MAX_HEADER_LEVEL {
                    return Err(DocModelError::InvalidAttribute {
                        name: "header".to_string(),
                        value: level.to_string(),
                    });
                }
            }
        }
        Ok(())
    }

    /// Parse content from its JSON form
    pub fn from_json(json: &str) -> Result<Self> {
        let content: Self = serde_json::from_str(json)?;
        content.validate()?;
        Ok(content)
    }

    /// Serialize content to its JSON form
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}
