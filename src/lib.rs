//! # strata
//!
//! Facade crate for layout-aware document segmentation. Re-exports the
//! [`strata_segment`] engine and, behind the `ingest` feature, the
//! storage-backed transformation driver from [`strata_ingest`].
//!
//! ## What's inside?
//!
//! - [`partition_and_chunk`] — split raw document text into retrieval-ready
//!   chunks, keeping marker-delimited tables, charts, diagrams, and images
//!   whole while windowing prose to an approximate token budget.
//! - [`SegmenterConfig`] — token budget, overlap, and the character-per-token
//!   approximation ratio.
//! - `ingest` (feature) — the [`ingest`] module: an [`ObjectStore`]
//!   capability trait plus a per-file driver that reads parsed content
//!   batches, segments them, and writes chunk batches back.
//!
//! ## Example
//!
//! ```rust
//! use strata::{SegmenterConfig, partition_and_chunk};
//!
//! let content = "Overview paragraph. **[CHART]** monthly active users";
//! let chunks = partition_and_chunk(content, &SegmenterConfig::default())?;
//!
//! assert_eq!(chunks.len(), 2);
//! assert!(chunks[1].is_visual());
//! # Ok::<(), strata::SegmentError>(())
//! ```
//!
//! [`ObjectStore`]: strata_ingest::ObjectStore

pub use strata_segment::*;

#[cfg(feature = "ingest")]
pub use strata_ingest as ingest;
