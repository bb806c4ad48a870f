//! Storage-backed transformation driver for strata segmentation.
//!
//! An ingestion job hands this crate a [`TransformationEvent`] naming a
//! bucket and a list of parsed files. For each file the driver reads the
//! referenced content batches through an injected [`ObjectStore`] capability,
//! reassembles the document text, runs
//! [`partition_and_chunk`](strata_segment::partition_and_chunk), and writes
//! the resulting chunk batch back under a deterministic `transformed/` key.
//!
//! There is no global client and no ambient configuration: storage always
//! arrives as an explicit trait object seam, so the same driver runs against
//! a production object store or the bundled [`MemoryObjectStore`].
//!
//! # Example
//!
//! ```rust,no_run
//! use strata_ingest::{MemoryObjectStore, process_event, TransformationEvent};
//! use strata_segment::SegmenterConfig;
//!
//! async fn handle(event: TransformationEvent) -> strata_ingest::Result<()> {
//!     let store = MemoryObjectStore::new();
//!     let response = process_event(&store, &event, &SegmenterConfig::default()).await?;
//!     for file in &response.output_files {
//!         println!("wrote {}", file.content_batches[0].key);
//!     }
//!     Ok(())
//! }
//! ```

pub mod batch;
pub mod driver;
pub mod error;
pub mod store;

pub use batch::{
    BatchRef, ChunkBatch, ContentBatch, ContentItem, FileLocation, InputFile, ObjectLocation,
    OutputFile, TransformationEvent, TransformationResponse,
};
pub use driver::{gather_content, output_key, process_event, process_file};
pub use error::{IngestError, Result};
pub use store::{MemoryObjectStore, ObjectStore};
