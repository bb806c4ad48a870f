//! Composition of partitioning and windowing into the final chunk list.

use crate::config::SegmenterConfig;
use crate::error::Result;
use crate::partition::partition;
use crate::types::{Chunk, Segment};
use crate::window::segment_prose;

/// Maps an ordered segment list to the final ordered chunk list.
///
/// Each visual segment becomes exactly one metadata-tagged chunk; each prose
/// segment becomes the ordered windows from
/// [`segment_prose`](crate::window::segment_prose). Order across segments and
/// within a segment is preserved.
#[must_use]
pub fn assemble(segments: Vec<Segment>, config: &SegmenterConfig) -> Vec<Chunk> {
    let mut chunks = Vec::with_capacity(segments.len());
    for segment in segments {
        match segment {
            Segment::Visual { element, body } => chunks.push(Chunk::visual(element, body)),
            Segment::Prose { body } => {
                chunks.extend(segment_prose(&body, config).into_iter().map(Chunk::prose));
            }
        }
    }
    chunks
}

/// Partitions `content` at element markers and chunks the result.
///
/// Marker-delimited elements survive as single, unbroken chunks; prose is
/// windowed to the token budget in `config`. The whole pipeline is a pure
/// function of its arguments and is safe to call concurrently for
/// independent documents.
///
/// # Errors
///
/// Propagates [`SegmentError::MarkerContract`](crate::SegmentError) from
/// [`partition`], which is unreachable for any input and aborts the document
/// instead of emitting mistagged chunks.
pub fn partition_and_chunk(content: &str, config: &SegmenterConfig) -> Result<Vec<Chunk>> {
    Ok(assemble(partition(content)?, config))
}
