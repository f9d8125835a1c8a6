// file: src/models/mod.rs
// description: data models module exports
// reference: internal module structure

pub mod document;
pub mod links;
pub mod search_result;

pub use document::{DocumentEntry, OutputDocument, Paragraph, ParagraphStyle, Run};
pub use links::DownloadLinks;
pub use search_result::SearchOutcome;
