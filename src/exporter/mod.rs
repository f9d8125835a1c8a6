// file: src/exporter/mod.rs
// description: output document exporters
// reference: internal module structure

pub mod docx;
pub mod pdf;

pub use docx::DocxWriter;
pub use pdf::PdfConverter;
