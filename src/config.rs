// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{PipelineError, Result};
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    pub search: SearchConfig,
    pub logging: LoggingConfig,
    pub pdf: PdfConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct SearchConfig {
    pub base_url: String,
    pub timeout_secs: u64,
    pub user_agent: String,
    pub language: String,
    pub region: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub file: PathBuf,
    pub level: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PdfConfig {
    /// LibreOffice (or compatible) binary used for headless rendering
    pub converter: String,
}

impl Config {
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let defaults = config::Config::try_from(&Self::default_config())
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let mut builder = config::Config::builder().add_source(defaults);

        if let Some(path) = path {
            builder = builder.add_source(config::File::from(path));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("LINKSYNC")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        let config: Config = settings
            .try_deserialize()
            .map_err(|e| PipelineError::Config(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self {
            search: SearchConfig {
                base_url: "https://www.youtube.com/results".to_string(),
                timeout_secs: 15,
                user_agent: "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/124.0 Safari/537.36".to_string(),
                language: "en".to_string(),
                region: "US".to_string(),
            },
            logging: LoggingConfig {
                file: PathBuf::from("youtube_search.log"),
                level: "info".to_string(),
            },
            pdf: PdfConfig {
                converter: "soffice".to_string(),
            },
        }
    }

    fn validate(&self) -> Result<()> {
        if self.search.timeout_secs == 0 {
            return Err(PipelineError::Config(
                "search.timeout_secs must be greater than 0".to_string(),
            ));
        }

        if !self.search.base_url.starts_with("http://")
            && !self.search.base_url.starts_with("https://")
        {
            return Err(PipelineError::Config(format!(
                "search.base_url must be an http(s) URL: {}",
                self.search.base_url
            )));
        }

        if self.logging.file.as_os_str().is_empty() {
            return Err(PipelineError::Config(
                "logging.file cannot be empty".to_string(),
            ));
        }

        if self.pdf.converter.trim().is_empty() {
            return Err(PipelineError::Config(
                "pdf.converter cannot be empty".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default_config();
        assert!(config.validate().is_ok());
        assert_eq!(config.logging.file, PathBuf::from("youtube_search.log"));
    }

    #[test]
    fn test_load_overrides_from_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("linksync.toml");
        fs::write(
            &path,
            "[search]\ntimeout_secs = 3\n\n[pdf]\nconverter = \"libreoffice\"\n",
        )
        .unwrap();

        let config = Config::load(Some(path.as_path())).unwrap();
        assert_eq!(config.search.timeout_secs, 3);
        assert_eq!(config.pdf.converter, "libreoffice");
        assert_eq!(config.search.region, "US");
    }

    #[test]
    fn test_rejects_zero_timeout() {
        let mut config = Config::default_config();
        config.search.timeout_secs = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_rejects_non_http_base_url() {
        let mut config = Config::default_config();
        config.search.base_url = "ftp://example.com".to_string();
        assert!(config.validate().is_err());
    }
}
