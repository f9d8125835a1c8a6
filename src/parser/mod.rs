// file: src/parser/mod.rs
// description: input parsing module exports
// reference: internal module structure

pub mod docx;
pub mod input;

pub use docx::DocxParagraphReader;
pub use input::{InputFormat, InputReader};
