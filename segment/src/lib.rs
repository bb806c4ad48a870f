//! Marker-aware content segmentation for retrieval pipelines.
//!
//! Raw document text arrives with structured elements announced by inline
//! markers (`**[TABLE]**`, `**[CHART]**`, `**[DIAGRAM]**`, `**[IMAGE]**`),
//! the format emitted by an upstream layout parser. This crate turns that
//! text into retrieval-ready chunks:
//!
//! - marker-delimited elements survive as single, unbroken chunks tagged
//!   with their element type;
//! - running prose is windowed into overlapping, sentence-aligned chunks
//!   bounded by an approximate token budget.
//!
//! The engine is a pure function of its input and configuration: no I/O, no
//! shared state, deterministic output. Invoke it concurrently across
//! documents without coordination.
//!
//! # Example
//!
//! ```rust
//! use strata_segment::{SegmenterConfig, partition_and_chunk};
//!
//! let content = "Quarterly summary. **[TABLE]** | q | revenue |\n| 1 | 10 |";
//! let chunks = partition_and_chunk(content, &SegmenterConfig::default())?;
//!
//! assert_eq!(chunks.len(), 2);
//! assert_eq!(chunks[0].metadata["is_visual_element"], false);
//! assert_eq!(chunks[1].metadata["content_type"], "table");
//! # Ok::<(), strata_segment::SegmentError>(())
//! ```
//!
//! The token budget is approximate by design: `max_tokens` converts to a
//! character bound through the fixed `chars_per_token` ratio, and the overlap
//! between adjacent prose chunks is counted in trailing words. See
//! [`SegmenterConfig`] to tune both.

pub mod assemble;
pub mod config;
pub mod error;
pub mod partition;
pub mod types;
pub mod window;

pub use assemble::{assemble, partition_and_chunk};
pub use config::{SegmenterConfig, SegmenterConfigBuilder};
pub use error::{Result, SegmentError};
pub use partition::{find_markers, partition};
pub use types::{CONTENT_TYPE_TEXT, Chunk, ElementType, Metadata, PARSER_NAME, Segment};
pub use window::{segment_prose, split_sentences};
