// file: src/search/mod.rs
// description: search provider module exports
// reference: internal module structure

mod provider;
mod youtube;

pub use provider::SearchProvider;
pub use youtube::{YouTubeSearchClient, first_video_id, watch_url};
