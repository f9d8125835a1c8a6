// file: src/utils/validation.rs
// description: run input validation performed before any file access
// reference: input validation patterns

use crate::error::{PipelineError, Result};
use crate::parser::InputFormat;
use std::path::{Path, PathBuf};

/// Paths accepted for one run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunPaths {
    pub input: PathBuf,
    pub output: PathBuf,
    pub format: InputFormat,
}

pub struct Validator;

impl Validator {
    pub fn validate_path_not_empty(path: &str) -> Result<()> {
        if path.trim().is_empty() {
            return Err(PipelineError::Validation(
                "File path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Both paths must be non-empty and the input extension supported.
    pub fn validate_run_paths(input: &str, output: &str) -> Result<RunPaths> {
        Self::validate_path_not_empty(input)?;
        Self::validate_path_not_empty(output)?;

        let input = PathBuf::from(input.trim());
        let format = InputFormat::from_path(&input)?;

        Ok(RunPaths {
            input,
            output: PathBuf::from(output.trim()),
            format,
        })
    }

    pub fn validate_output_differs(paths: &RunPaths) -> Result<()> {
        if Self::same_path(&paths.input, &paths.output) {
            return Err(PipelineError::Validation(format!(
                "Output path must differ from input path: {}",
                paths.output.display()
            )));
        }
        Ok(())
    }

    fn same_path(a: &Path, b: &Path) -> bool {
        match (a.canonicalize(), b.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => a == b,
        }
    }
}
