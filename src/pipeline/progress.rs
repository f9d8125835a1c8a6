// file: src/pipeline/progress.rs
// description: per-run statistics for line processing
// reference: tracks appended entries and skips by reason

use crate::pipeline::{LineOutcome, SkipReason};
use std::time::Duration;
use tracing::info;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct PipelineStats {
    pub lines_read: usize,
    pub entries_written: usize,
    pub blank_lines: usize,
    pub no_search_result: usize,
    pub no_video_id: usize,
    pub link_failures: usize,
    pub duration: Duration,
}

impl PipelineStats {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, outcome: LineOutcome) {
        self.lines_read += 1;
        match outcome {
            LineOutcome::Appended => self.entries_written += 1,
            LineOutcome::Skipped(SkipReason::BlankLine) => self.blank_lines += 1,
            LineOutcome::Skipped(SkipReason::NoSearchResult) => self.no_search_result += 1,
            LineOutcome::Skipped(SkipReason::NoVideoId) => self.no_video_id += 1,
            LineOutcome::Skipped(SkipReason::LinkGenerationFailed) => self.link_failures += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.lines_read - self.entries_written
    }

    /// Share of non-blank lines that produced an entry, in percent.
    pub fn success_rate(&self) -> f64 {
        let attempted = self.lines_read - self.blank_lines;
        if attempted == 0 {
            return 0.0;
        }
        (self.entries_written as f64 / attempted as f64) * 100.0
    }

    pub fn log_summary(&self) {
        info!(
            "Processed {} lines in {:.2}s: {} entries written ({:.1}% of non-blank lines), {} skipped ({} blank, {} without search result, {} without video ID, {} link failures)",
            self.lines_read,
            self.duration.as_secs_f64(),
            self.entries_written,
            self.success_rate(),
            self.skipped(),
            self.blank_lines,
            self.no_search_result,
            self.no_video_id,
            self.link_failures
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_outcomes() {
        let mut stats = PipelineStats::new();
        stats.record(LineOutcome::Appended);
        stats.record(LineOutcome::Appended);
        stats.record(LineOutcome::Skipped(SkipReason::NoSearchResult));
        stats.record(LineOutcome::Skipped(SkipReason::BlankLine));

        assert_eq!(stats.lines_read, 4);
        assert_eq!(stats.entries_written, 2);
        assert_eq!(stats.no_search_result, 1);
        assert_eq!(stats.skipped(), 2);
        assert!((stats.success_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn test_success_rate_without_lines() {
        assert_eq!(PipelineStats::new().success_rate(), 0.0);
    }
}
