// file: src/pipeline/orchestrator.rs
// description: feeds input lines through the line processor and saves the document
// reference: sequential per-line enrichment followed by a single save

use crate::error::Result;
use crate::exporter::DocxWriter;
use crate::models::OutputDocument;
use crate::pipeline::{LineProcessor, PipelineStats};
use crate::search::SearchProvider;
use std::path::Path;
use std::time::Instant;
use tracing::info;

pub struct LinkPipeline<S: SearchProvider> {
    search: S,
}

impl<S: SearchProvider> LinkPipeline<S> {
    pub fn new(search: S) -> Self {
        Self { search }
    }

    /// Processes lines strictly in order; a failing line never stops the run.
    pub async fn build_document<L: AsRef<str>>(&self, lines: &[L]) -> (OutputDocument, PipelineStats) {
        let start_time = Instant::now();
        let processor = LineProcessor::new(&self.search);
        let mut document = OutputDocument::new();
        let mut stats = PipelineStats::new();

        info!("Processing {} input lines", lines.len());

        for line in lines {
            let outcome = processor.process(line.as_ref(), &mut document).await;
            stats.record(outcome);
        }

        stats.duration = start_time.elapsed();
        (document, stats)
    }

    pub async fn write_document<L: AsRef<str>>(
        &self,
        lines: &[L],
        output_path: &Path,
    ) -> Result<PipelineStats> {
        let (document, stats) = self.build_document(lines).await;

        DocxWriter::save(&document, output_path)?;
        stats.log_summary();

        Ok(stats)
    }
}
