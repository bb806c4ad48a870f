//! Error types for the ingest driver.

use thiserror::Error;

/// Errors surfaced to the orchestrating job as job-level failures.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Requested object does not exist in the store.
    #[error("object not found: {bucket}/{key}")]
    ObjectNotFound {
        /// Bucket that was searched.
        bucket: String,
        /// Key that was requested.
        key: String,
    },

    /// Storage backend failure.
    #[error("storage error: {0}")]
    Storage(String),

    /// A batch payload was not valid JSON.
    #[error("malformed batch payload: {0}")]
    Json(#[from] serde_json::Error),

    /// Segmentation aborted the document.
    #[error(transparent)]
    Segment(#[from] strata_segment::SegmentError),
}

/// Result type alias for ingest operations.
pub type Result<T> = core::result::Result<T, IngestError>;
