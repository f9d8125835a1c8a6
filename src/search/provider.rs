// file: src/search/provider.rs
// description: search provider abstraction used by the line processor
// reference: https://docs.rs/async-trait

use crate::models::SearchOutcome;
use async_trait::async_trait;

/// Resolves a free-text query to the canonical URL of its top video result.
///
/// Implementations make a single attempt and never fail outright: transport
/// or parsing problems are reported as [`SearchOutcome::Error`].
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn first_video_url(&self, query: &str) -> SearchOutcome;
}
