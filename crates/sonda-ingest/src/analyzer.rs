//! The per-file analysis pipeline.

use crate::chunker::chunk_text;
use crate::error::IngestResult;
use crate::pdf::extract_pdf_text;
use sonda_core::{ExtractedRecord, MachineId};
use sonda_db::Database;
use sonda_llm::{aggregate, build_prompt, extract_record, GenerateText};
use std::path::Path;
use tracing::{info, warn};

/// Result of one file's analysis run.
#[derive(Debug)]
pub struct AnalysisOutcome {
    /// Id assigned to the persisted machine.
    pub machine_id: MachineId,
    /// The aggregated extraction result that was persisted.
    pub record: ExtractedRecord,
    /// Number of chunks the manual was split into.
    pub chunks_total: usize,
    /// Chunks that produced a parseable result (the rest were skipped).
    pub chunks_used: usize,
}

/// Orchestrates one manual's pipeline run: text, chunks, one model call per
/// chunk, JSON scraping, aggregation, persistence.
///
/// Processing is strictly sequential: one model call at a time, in chunk
/// order. A chunk whose call fails or whose response yields no JSON is
/// logged and skipped; it never aborts the run.
pub struct Analyzer<G> {
    db: Database,
    invoker: G,
    chunk_size: usize,
}

impl<G: GenerateText> Analyzer<G> {
    /// Create a new analyzer. `chunk_size` is in characters per model call.
    pub fn new(db: Database, invoker: G, chunk_size: usize) -> Self {
        Self {
            db,
            invoker,
            chunk_size,
        }
    }

    /// Analyze one PDF manual and persist the result under `machine_name`.
    pub async fn analyze_file(
        &self,
        path: &Path,
        machine_name: &str,
    ) -> IngestResult<AnalysisOutcome> {
        let text = extract_pdf_text(path)?;
        self.analyze_text(&text, machine_name).await
    }

    /// Analyze already-extracted manual text and persist the result.
    pub async fn analyze_text(
        &self,
        text: &str,
        machine_name: &str,
    ) -> IngestResult<AnalysisOutcome> {
        let chunks = chunk_text(text, self.chunk_size);
        info!(
            "Manual split into {} blocks of {} characters",
            chunks.len(),
            self.chunk_size
        );

        let mut records = Vec::new();
        for (idx, chunk) in chunks.iter().enumerate() {
            if let Some(record) = self.analyze_chunk(idx, chunk, machine_name).await {
                records.push(record);
            }
        }

        let chunks_used = records.len();
        let record = aggregate(&records);
        let machine_id = self.db.save_machine(machine_name, &record)?;

        info!(
            "Machine '{}' saved as id {} ({} variables from {}/{} chunks)",
            machine_name,
            machine_id,
            record.variables.len(),
            chunks_used,
            chunks.len()
        );

        Ok(AnalysisOutcome {
            machine_id,
            record,
            chunks_total: chunks.len(),
            chunks_used,
        })
    }

    /// One chunk's model call. Returns None on any failure; errors are
    /// logged and absorbed here, never retried.
    async fn analyze_chunk(
        &self,
        idx: usize,
        chunk: &str,
        machine_name: &str,
    ) -> Option<ExtractedRecord> {
        let prompt = build_prompt(chunk, Some(machine_name), self.chunk_size);

        match self.invoker.generate(&prompt).await {
            Ok(response) => match extract_record(&response) {
                Some(record) => Some(record),
                None => {
                    warn!("Chunk {}: no parseable JSON in model response", idx + 1);
                    None
                }
            },
            Err(e) => {
                warn!("Chunk {}: model call failed: {}", idx + 1, e);
                None
            }
        }
    }
}
