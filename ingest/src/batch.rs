//! Wire types for the ingestion event and chunk-batch contracts.
//!
//! Field names follow the upstream job contract exactly (camelCase envelope,
//! snake_case chunk metadata); they are part of the external interface and
//! must not drift.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strata_segment::Chunk;

/// Event handed to the transformation by the ingestion job.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationEvent {
    /// Contract version string.
    pub version: String,
    /// Knowledge base being ingested into, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub knowledge_base_id: Option<String>,
    /// Data source the files came from, passed through untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data_source_id: Option<String>,
    /// Identifier of the running ingestion job.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ingestion_job_id: Option<String>,
    /// Bucket holding both input batches and transformed output.
    pub bucket_name: String,
    /// Files to transform.
    pub input_files: Vec<InputFile>,
}

/// One file to transform, with its parsed content batch references.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InputFile {
    /// Where the original document lives.
    pub original_file_location: FileLocation,
    /// Caller-owned metadata, echoed back in the output.
    #[serde(default)]
    pub file_metadata: Map<String, Value>,
    /// Batches produced by the upstream parsing stage, in order.
    pub content_batches: Vec<BatchRef>,
}

/// Location wrapper carried through from the ingestion event.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct FileLocation {
    /// Location type discriminator, passed through untouched.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    /// Bucket-addressed location of the original object.
    #[serde(rename = "s3_location")]
    pub object_location: ObjectLocation,
}

/// A bucket-addressed URI.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ObjectLocation {
    /// Full URI of the object.
    pub uri: String,
}

/// Reference to a stored content batch.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct BatchRef {
    /// Object key of the batch.
    pub key: String,
}

/// Read side of a content batch: only the text bodies matter here.
#[derive(Clone, Debug, Deserialize)]
pub struct ContentBatch {
    /// Extracted content items, in document order.
    #[serde(rename = "fileContents", default)]
    pub file_contents: Vec<ContentItem>,
}

/// One extracted item inside a content batch.
#[derive(Clone, Debug, Deserialize)]
pub struct ContentItem {
    /// Extracted text; other upstream fields are ignored.
    #[serde(rename = "contentBody", default)]
    pub content_body: String,
}

/// Write side of a content batch: the chunk list produced by segmentation.
#[derive(Clone, Debug, Serialize)]
pub struct ChunkBatch {
    /// Ordered chunks for one document.
    #[serde(rename = "fileContents")]
    pub file_contents: Vec<Chunk>,
}

/// Per-file output returned to the ingestion job.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutputFile {
    /// Original location, echoed from the input.
    pub original_file_location: FileLocation,
    /// Caller metadata, echoed from the input.
    pub file_metadata: Map<String, Value>,
    /// References to the written chunk batches.
    pub content_batches: Vec<BatchRef>,
}

/// Overall result for one ingestion event.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TransformationResponse {
    /// One entry per input file, in input order.
    pub output_files: Vec<OutputFile>,
}
