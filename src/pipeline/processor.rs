// file: src/pipeline/processor.rs
// description: turns one input line into a document entry of download links
// reference: search, identifier extraction, link synthesis, append

use crate::extractor::extract_video_id;
use crate::models::{DocumentEntry, DownloadLinks, OutputDocument};
use crate::search::SearchProvider;
use tracing::{debug, error, info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    BlankLine,
    NoSearchResult,
    NoVideoId,
    LinkGenerationFailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    Appended,
    Skipped(SkipReason),
}

pub struct LineProcessor<'a, S: SearchProvider + ?Sized> {
    search: &'a S,
}

impl<'a, S: SearchProvider + ?Sized> LineProcessor<'a, S> {
    pub fn new(search: &'a S) -> Self {
        Self { search }
    }

    /// Appends at most one entry to `document`. Failures are logged and
    /// reported as a skip, never returned as errors.
    pub async fn process(&self, raw_line: &str, document: &mut OutputDocument) -> LineOutcome {
        let line = raw_line.trim();
        if line.is_empty() {
            info!("Skipping blank input line");
            return LineOutcome::Skipped(SkipReason::BlankLine);
        }

        let outcome = self.search.first_video_url(line).await;
        debug!("Search outcome for '{}': {:?}", line, outcome);

        let Some(youtube_link) = outcome.into_url() else {
            info!("No YouTube link found for '{}'", line);
            return LineOutcome::Skipped(SkipReason::NoSearchResult);
        };

        let Some(video_id) = extract_video_id(&youtube_link) else {
            warn!("No video ID extracted from YouTube link for '{}'", line);
            return LineOutcome::Skipped(SkipReason::NoVideoId);
        };

        let Some(links) = DownloadLinks::synthesize(Some(&video_id)) else {
            error!("Failed to generate download links for '{}'", line);
            return LineOutcome::Skipped(SkipReason::LinkGenerationFailed);
        };

        info!("Found YouTube link for '{}': {}", line, youtube_link);
        info!("Download audio link: {}", links.audio);
        info!("Download video link: {}", links.video);

        document.append(DocumentEntry::new(line, links));
        LineOutcome::Appended
    }
}
