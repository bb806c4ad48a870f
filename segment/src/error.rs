//! Error types for the segmentation engine.

use thiserror::Error;

/// Errors that can occur while segmenting content.
#[derive(Debug, Error)]
pub enum SegmentError {
    /// A visual segment no longer starts with the marker it was scanned at.
    ///
    /// This indicates a bug in the partitioner, never bad input. The document
    /// is aborted rather than emitted with mistagged chunks.
    #[error("visual segment at byte {offset} lost its {element} marker")]
    MarkerContract {
        /// Byte offset of the scanned marker in the original content.
        offset: usize,
        /// Element type scanned at that offset.
        element: &'static str,
    },
}

/// Result type alias for segmentation operations.
pub type Result<T> = std::result::Result<T, SegmentError>;
