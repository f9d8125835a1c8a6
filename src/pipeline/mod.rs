// file: src/pipeline/mod.rs
// description: pipeline module exports and public api
// reference: pipeline orchestration

mod orchestrator;
mod processor;
mod progress;

pub use orchestrator::LinkPipeline;
pub use processor::{LineOutcome, LineProcessor, SkipReason};
pub use progress::PipelineStats;
