// file: src/extractor/mod.rs
// description: identifier extraction module exports
// reference: internal module structure

pub mod patterns;
pub mod video_id;

pub use video_id::{extract_video_id, is_recognized_host, try_extract_video_id};
