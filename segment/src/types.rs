//! Core types for the segmentation engine.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::BTreeMap;

/// Key/value metadata attached to output chunks.
///
/// Values are mixed (`String` for names, `bool` for flags), matching what
/// downstream indexing consumers inspect on the wire.
pub type Metadata = BTreeMap<String, Value>;

/// Name of the upstream layout parser, reported in every chunk's metadata.
pub const PARSER_NAME: &str = "upstage";

/// Wire-level content type; every chunk is text, structured or not.
pub const CONTENT_TYPE_TEXT: &str = "TEXT";

/// Kind of structured element announced by an inline marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementType {
    /// Tabular data.
    Table,
    /// A chart rendering.
    Chart,
    /// A diagram rendering.
    Diagram,
    /// An embedded image.
    Image,
}

impl ElementType {
    /// All recognized element types, in scan order.
    pub const ALL: [Self; 4] = [Self::Table, Self::Chart, Self::Diagram, Self::Image];

    /// Lower-cased name used in chunk metadata.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Table => "table",
            Self::Chart => "chart",
            Self::Diagram => "diagram",
            Self::Image => "image",
        }
    }

    /// The inline marker literal announcing this element.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Table => "**[TABLE]**",
            Self::Chart => "**[CHART]**",
            Self::Diagram => "**[DIAGRAM]**",
            Self::Image => "**[IMAGE]**",
        }
    }
}

/// A maximal contiguous region of raw content.
///
/// Segments are produced left to right, never overlap, and together cover the
/// input up to whitespace trimmed at their edges.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Segment {
    /// A structured element starting at a marker; kept whole downstream.
    Visual {
        /// Element type scanned from the leading marker.
        element: ElementType,
        /// Segment text, marker included.
        body: String,
    },
    /// Running text between markers.
    Prose {
        /// Segment text.
        body: String,
    },
}

impl Segment {
    /// The text carried by this segment.
    #[must_use]
    pub fn body(&self) -> &str {
        match self {
            Self::Visual { body, .. } | Self::Prose { body } => body,
        }
    }
}

/// Output unit handed to a downstream indexer.
///
/// Serializes with the wire field names the indexing side expects:
/// `contentBody`, `contentType`, `contentMetadata`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Chunk {
    /// Text content of the chunk.
    #[serde(rename = "contentBody")]
    pub body: String,
    /// Wire-level content type, always [`CONTENT_TYPE_TEXT`].
    #[serde(rename = "contentType")]
    pub content_type: String,
    /// Metadata inspected by downstream consumers; exact keys and value
    /// types are part of the stable contract.
    #[serde(rename = "contentMetadata")]
    pub metadata: Metadata,
}

impl Chunk {
    /// Creates the single chunk carrying a visual segment.
    #[must_use]
    pub fn visual(element: ElementType, body: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert("content_type".into(), element.as_str().into());
        metadata.insert(format!("has_{}", element.as_str()), true.into());
        metadata.insert("is_visual_element".into(), true.into());
        metadata.insert("parser".into(), PARSER_NAME.into());
        Self {
            body: body.into(),
            content_type: CONTENT_TYPE_TEXT.into(),
            metadata,
        }
    }

    /// Creates a prose chunk.
    #[must_use]
    pub fn prose(body: impl Into<String>) -> Self {
        let mut metadata = Metadata::new();
        metadata.insert("content_type".into(), "text".into());
        metadata.insert("is_visual_element".into(), false.into());
        metadata.insert("parser".into(), PARSER_NAME.into());
        Self {
            body: body.into(),
            content_type: CONTENT_TYPE_TEXT.into(),
            metadata,
        }
    }

    /// Whether this chunk carries a structured element.
    #[must_use]
    pub fn is_visual(&self) -> bool {
        self.metadata.get("is_visual_element") == Some(&Value::Bool(true))
    }
}
