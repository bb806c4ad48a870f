//! Per-file transformation driver: read batches, segment, write chunks.

use strata_segment::{SegmenterConfig, partition_and_chunk};
use tracing::{debug, info};

use crate::batch::{
    BatchRef, ChunkBatch, ContentBatch, InputFile, OutputFile, TransformationEvent,
    TransformationResponse,
};
use crate::error::Result;
use crate::store::ObjectStore;

/// Derives the output object key for `input`.
///
/// The final path component of the original URI, with dots replaced by
/// underscores so the `_chunks.json` suffix stays unambiguous, under the
/// `transformed/` prefix. Deterministic: the same input file always maps to
/// the same output key.
#[must_use]
pub fn output_key(input: &InputFile) -> String {
    let uri = input.original_file_location.object_location.uri.as_str();
    let file_id = uri.rsplit('/').next().unwrap_or(uri).replace('.', "_");
    format!("transformed/{file_id}_chunks.json")
}

/// Reads every referenced batch and reassembles the document text.
///
/// Bodies are concatenated in listed order, each followed by a blank line,
/// matching the order emitted by the upstream parsing stage.
pub async fn gather_content<S: ObjectStore>(
    store: &S,
    bucket: &str,
    input: &InputFile,
) -> Result<String> {
    let mut content = String::new();
    for batch in &input.content_batches {
        let body = store.get(bucket, &batch.key).await?;
        let parsed: ContentBatch = serde_json::from_slice(&body)?;
        for item in parsed.file_contents {
            content.push_str(&item.content_body);
            content.push_str("\n\n");
        }
    }
    Ok(content)
}

/// Transforms one input file: gather, segment, write the chunk batch.
///
/// Returns the file's identity and metadata together with a reference to the
/// written batch, for the orchestrating job to collect.
pub async fn process_file<S: ObjectStore>(
    store: &S,
    bucket: &str,
    input: &InputFile,
    config: &SegmenterConfig,
) -> Result<OutputFile> {
    debug!(
        uri = %input.original_file_location.object_location.uri,
        batches = input.content_batches.len(),
        "processing file"
    );

    let content = gather_content(store, bucket, input).await?;
    let chunks = partition_and_chunk(&content, config)?;
    debug!(chunks = chunks.len(), "segmented document");

    let key = output_key(input);
    let payload = serde_json::to_vec(&ChunkBatch {
        file_contents: chunks,
    })?;
    store.put(bucket, &key, payload).await?;

    Ok(OutputFile {
        original_file_location: input.original_file_location.clone(),
        file_metadata: input.file_metadata.clone(),
        content_batches: vec![BatchRef { key }],
    })
}

/// Processes every file in an ingestion event.
///
/// Files are handled sequentially here; nothing is shared between them, so a
/// caller wanting fan-out can invoke [`process_file`] per file concurrently
/// instead. Any per-file failure aborts the whole event and surfaces as a
/// job-level error.
pub async fn process_event<S: ObjectStore>(
    store: &S,
    event: &TransformationEvent,
    config: &SegmenterConfig,
) -> Result<TransformationResponse> {
    info!(
        job = event.ingestion_job_id.as_deref().unwrap_or("unknown"),
        files = event.input_files.len(),
        "processing ingestion job"
    );

    let mut output_files = Vec::with_capacity(event.input_files.len());
    for input in &event.input_files {
        output_files.push(process_file(store, &event.bucket_name, input, config).await?);
    }
    Ok(TransformationResponse { output_files })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::batch::{FileLocation, ObjectLocation};
    use crate::error::IngestError;
    use crate::store::MemoryObjectStore;
    use serde_json::{Map, json};

    fn input_file(uri: &str, batch_keys: &[&str]) -> InputFile {
        InputFile {
            original_file_location: FileLocation {
                kind: Some("S3".into()),
                object_location: ObjectLocation { uri: uri.into() },
            },
            file_metadata: Map::new(),
            content_batches: batch_keys
                .iter()
                .map(|&key| BatchRef { key: key.into() })
                .collect(),
        }
    }

    fn seed_batch(store: &MemoryObjectStore, bucket: &str, key: &str, bodies: &[&str]) {
        let items: Vec<_> = bodies.iter().map(|b| json!({ "contentBody": b })).collect();
        let payload = json!({ "fileContents": items }).to_string();
        store.seed(bucket, key, payload.into_bytes());
    }

    #[test]
    fn output_key_sanitizes_file_name() {
        let input = input_file("s3://docs/reports/q1 summary.pdf", &[]);
        assert_eq!(output_key(&input), "transformed/q1 summary_pdf_chunks.json");
    }

    #[test]
    fn output_key_without_path_separator() {
        let input = input_file("report.docx", &[]);
        assert_eq!(output_key(&input), "transformed/report_docx_chunks.json");
    }

    #[tokio::test]
    async fn gather_joins_batches_with_blank_lines() {
        let store = MemoryObjectStore::new();
        seed_batch(&store, "docs", "parsed/a.json", &["First part.", "Second part."]);
        seed_batch(&store, "docs", "parsed/b.json", &["Third part."]);
        let input = input_file("s3://docs/a.pdf", &["parsed/a.json", "parsed/b.json"]);

        let content = gather_content(&store, "docs", &input).await.unwrap();
        assert_eq!(content, "First part.\n\nSecond part.\n\nThird part.\n\n");
    }

    #[tokio::test]
    async fn process_file_writes_chunk_batch() {
        let store = MemoryObjectStore::new();
        seed_batch(
            &store,
            "docs",
            "parsed/q1.json",
            &["Intro text.", "**[TABLE]** | a | b |"],
        );
        let input = input_file("s3://docs/reports/q1.pdf", &["parsed/q1.json"]);

        let output = process_file(&store, "docs", &input, &SegmenterConfig::default())
            .await
            .unwrap();

        assert_eq!(output.content_batches.len(), 1);
        let key = &output.content_batches[0].key;
        assert_eq!(key, "transformed/q1_pdf_chunks.json");

        let written = store.get("docs", key).await.unwrap();
        let parsed: serde_json::Value = serde_json::from_slice(&written).unwrap();
        let chunks = parsed["fileContents"].as_array().unwrap();
        assert_eq!(chunks.len(), 2);
        assert_eq!(chunks[0]["contentMetadata"]["is_visual_element"], false);
        assert_eq!(chunks[1]["contentMetadata"]["content_type"], "table");
        assert_eq!(chunks[1]["contentMetadata"]["has_table"], true);
    }

    #[tokio::test]
    async fn process_event_covers_all_files_in_order() {
        let store = MemoryObjectStore::new();
        seed_batch(&store, "docs", "parsed/one.json", &["Document one."]);
        seed_batch(&store, "docs", "parsed/two.json", &["Document two."]);
        let event = TransformationEvent {
            version: "1.0".into(),
            knowledge_base_id: None,
            data_source_id: None,
            ingestion_job_id: Some("job-42".into()),
            bucket_name: "docs".into(),
            input_files: vec![
                input_file("s3://docs/one.pdf", &["parsed/one.json"]),
                input_file("s3://docs/two.pdf", &["parsed/two.json"]),
            ],
        };

        let response = process_event(&store, &event, &SegmenterConfig::default())
            .await
            .unwrap();

        assert_eq!(response.output_files.len(), 2);
        assert_eq!(
            response.output_files[0].content_batches[0].key,
            "transformed/one_pdf_chunks.json"
        );
        assert_eq!(
            response.output_files[1].content_batches[0].key,
            "transformed/two_pdf_chunks.json"
        );
    }

    #[tokio::test]
    async fn missing_batch_fails_the_event() {
        let store = MemoryObjectStore::new();
        let event = TransformationEvent {
            version: "1.0".into(),
            knowledge_base_id: None,
            data_source_id: None,
            ingestion_job_id: None,
            bucket_name: "docs".into(),
            input_files: vec![input_file("s3://docs/gone.pdf", &["parsed/gone.json"])],
        };

        let err = process_event(&store, &event, &SegmenterConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::ObjectNotFound { .. }));
    }

    #[tokio::test]
    async fn malformed_batch_payload_fails_the_event() {
        let store = MemoryObjectStore::new();
        store.seed("docs", "parsed/bad.json", b"not json".to_vec());
        let input = input_file("s3://docs/bad.pdf", &["parsed/bad.json"]);

        let err = process_file(&store, "docs", &input, &SegmenterConfig::default())
            .await
            .unwrap_err();
        assert!(matches!(err, IngestError::Json(_)));
    }
}
