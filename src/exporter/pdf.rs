// file: src/exporter/pdf.rs
// description: renders a docx file to a sibling pdf through a headless office suite
// reference: https://docs.rs/tokio/latest/tokio/process

use crate::config::PdfConfig;
use crate::error::{PipelineError, Result};
use crate::utils::logging::format_success;
use std::io;
use std::path::{Path, PathBuf};
use tokio::process::Command;
use tracing::{debug, info};

pub struct PdfConverter {
    converter: String,
}

impl PdfConverter {
    pub fn new(config: PdfConfig) -> Self {
        Self {
            converter: config.converter,
        }
    }

    /// Same base name as `docx`, with the extension replaced by `.pdf`.
    pub fn pdf_path(docx: &Path) -> PathBuf {
        docx.with_extension("pdf")
    }

    pub async fn convert(&self, docx: &Path) -> Result<PathBuf> {
        if !docx.is_file() {
            return Err(PipelineError::file(
                docx,
                io::Error::new(io::ErrorKind::NotFound, "document to convert does not exist"),
            ));
        }

        let out_dir = docx
            .parent()
            .filter(|dir| !dir.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));

        debug!(
            "Running {} to convert {} into {}",
            self.converter,
            docx.display(),
            out_dir.display()
        );

        let output = Command::new(&self.converter)
            .arg("--headless")
            .arg("--convert-to")
            .arg("pdf")
            .arg("--outdir")
            .arg(out_dir)
            .arg(docx)
            .output()
            .await
            .map_err(|e| {
                PipelineError::Conversion(format!("failed to launch {}: {}", self.converter, e))
            })?;

        if !output.status.success() {
            return Err(PipelineError::Conversion(format!(
                "{} exited with {}: {}",
                self.converter,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        let pdf = Self::pdf_path(docx);
        if !pdf.is_file() {
            return Err(PipelineError::Conversion(format!(
                "{} did not produce {}",
                self.converter,
                pdf.display()
            )));
        }

        info!("Converted {} to {}", docx.display(), pdf.display());
        println!(
            "{}",
            format_success(&format!("Converted {} to {}", docx.display(), pdf.display()))
        );

        Ok(pdf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn converter(binary: &str) -> PdfConverter {
        PdfConverter::new(PdfConfig {
            converter: binary.to_string(),
        })
    }

    #[test]
    fn test_pdf_path() {
        assert_eq!(
            PdfConverter::pdf_path(Path::new("out/links.docx")),
            PathBuf::from("out/links.pdf")
        );
        assert_eq!(
            PdfConverter::pdf_path(Path::new("links")),
            PathBuf::from("links.pdf")
        );
    }

    #[tokio::test]
    async fn test_missing_document() {
        let temp = TempDir::new().unwrap();
        let err = converter("soffice")
            .convert(&temp.path().join("absent.docx"))
            .await
            .unwrap_err();
        assert_eq!(err.io_kind(), Some(io::ErrorKind::NotFound));
    }

    #[tokio::test]
    async fn test_missing_converter_binary() {
        let temp = TempDir::new().unwrap();
        let docx = temp.path().join("links.docx");
        fs::write(&docx, "stub").unwrap();

        let err = converter("linksync-no-such-office-binary")
            .convert(&docx)
            .await
            .unwrap_err();
        assert!(matches!(err, PipelineError::Conversion(_)));
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_converter_failure_status() {
        let temp = TempDir::new().unwrap();
        let docx = temp.path().join("links.docx");
        fs::write(&docx, "stub").unwrap();

        let err = converter("false").convert(&docx).await.unwrap_err();
        assert!(matches!(err, PipelineError::Conversion(_)));
        assert!(!PdfConverter::pdf_path(&docx).exists());
    }

    #[cfg(unix)]
    #[tokio::test]
    async fn test_converter_writes_sibling_pdf() {
        use std::os::unix::fs::PermissionsExt;

        let temp = TempDir::new().unwrap();
        let script = temp.path().join("fake-soffice");
        fs::write(
            &script,
            "#!/bin/sh\nbase=$(basename \"$6\" .docx)\nprintf '%%PDF-1.4' > \"$5/$base.pdf\"\n",
        )
        .unwrap();
        fs::set_permissions(&script, fs::Permissions::from_mode(0o755)).unwrap();

        let docx = temp.path().join("links.docx");
        fs::write(&docx, "stub").unwrap();

        let pdf = converter(script.to_str().unwrap())
            .convert(&docx)
            .await
            .unwrap();
        assert_eq!(pdf, temp.path().join("links.pdf"));
        assert!(fs::read_to_string(&pdf).unwrap().starts_with("%PDF"));
    }
}
