//! Marker partitioning: splitting raw content into visual and prose segments.

use crate::error::{Result, SegmentError};
use crate::types::{ElementType, Segment};

/// Locates every recognized marker in `content`.
///
/// Returns `(byte_offset, element_type)` pairs ordered by offset. The scan is
/// a plain substring search per marker literal, so partition boundaries never
/// depend on regex backtracking semantics and can be tested directly.
#[must_use]
pub fn find_markers(content: &str) -> Vec<(usize, ElementType)> {
    let mut markers: Vec<(usize, ElementType)> = ElementType::ALL
        .iter()
        .flat_map(|&element| {
            content
                .match_indices(element.marker())
                .map(move |(offset, _)| (offset, element))
        })
        .collect();
    // Distinct literals cannot start at the same offset.
    markers.sort_unstable_by_key(|&(offset, _)| offset);
    markers
}

/// Splits `content` into an ordered sequence of trimmed segments.
///
/// A visual segment starts at a marker and runs to the next marker or the end
/// of input, marker text included. Everything before the first marker (or the
/// whole input, with no markers present) is prose. Segments that are empty
/// after trimming are dropped.
///
/// The element type is taken from the scanned marker, never re-matched
/// against the trimmed body, so trimming cannot silently mistag a segment.
///
/// # Errors
///
/// Returns [`SegmentError::MarkerContract`] if a sliced visual segment does
/// not start with the marker scanned at its offset. This is unreachable for
/// any input; it guards the slicing logic itself.
pub fn partition(content: &str) -> Result<Vec<Segment>> {
    let markers = find_markers(content);
    let mut segments = Vec::with_capacity(markers.len() + 1);

    let lead = markers
        .first()
        .map_or(content, |&(first, _)| &content[..first]);
    let lead = lead.trim();
    if !lead.is_empty() {
        segments.push(Segment::Prose {
            body: lead.to_string(),
        });
    }

    for (i, &(offset, element)) in markers.iter().enumerate() {
        let end = markers
            .get(i + 1)
            .map_or(content.len(), |&(next, _)| next);
        let body = content[offset..end].trim();
        if body.is_empty() {
            continue;
        }
        // The slice begins at the marker, so trimming only touches the tail.
        if !body.starts_with(element.marker()) {
            return Err(SegmentError::MarkerContract {
                offset,
                element: element.as_str(),
            });
        }
        segments.push(Segment::Visual {
            element,
            body: body.to_string(),
        });
    }

    Ok(segments)
}
