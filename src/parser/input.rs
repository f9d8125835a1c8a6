// file: src/parser/input.rs
// description: reads ordered input lines from plain text or docx files
// reference: dispatches on file extension

use crate::error::{PipelineError, Result};
use crate::parser::DocxParagraphReader;
use std::fs;
use std::path::Path;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    PlainText,
    Docx,
}

impl InputFormat {
    /// Detects the format from the extension, case-insensitively.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("txt") => Ok(Self::PlainText),
            Some("docx") => Ok(Self::Docx),
            _ => Err(PipelineError::UnsupportedFormat {
                path: path.to_path_buf(),
            }),
        }
    }
}

pub struct InputReader;

impl InputReader {
    pub fn read(path: &Path) -> Result<Vec<String>> {
        let format = InputFormat::from_path(path)?;
        let lines = match format {
            InputFormat::PlainText => Self::read_text(path)?,
            InputFormat::Docx => DocxParagraphReader::read(path)?,
        };

        debug!("Read {} lines from {}", lines.len(), path.display());
        Ok(lines)
    }

    /// Raw physical lines, line terminators included.
    pub fn read_text(path: &Path) -> Result<Vec<String>> {
        let content =
            fs::read_to_string(path).map_err(|source| PipelineError::file(path, source))?;

        Ok(content.split_inclusive('\n').map(str::to_string).collect())
    }
}
