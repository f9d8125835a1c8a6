// file: src/lib.rs
// description: library entry point and public api exports
// reference: rust library patterns
#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/readme.md"))]

pub mod config;
pub mod error;
pub mod exporter;
pub mod extractor;
pub mod links;
pub mod models;
pub mod parser;
pub mod pipeline;
pub mod search;
pub mod utils;

pub use config::{Config, LoggingConfig, PdfConfig, SearchConfig};
pub use error::{PipelineError, Result};
pub use exporter::{DocxWriter, PdfConverter};
pub use extractor::{extract_video_id, try_extract_video_id};
pub use links::{audio_download_link, video_download_link};
pub use models::{DocumentEntry, DownloadLinks, OutputDocument, SearchOutcome};
pub use parser::{DocxParagraphReader, InputFormat, InputReader};
pub use pipeline::{LineOutcome, LineProcessor, LinkPipeline, PipelineStats, SkipReason};
pub use search::{SearchProvider, YouTubeSearchClient};
pub use utils::{ConvertChoice, Prompter, Validator};
