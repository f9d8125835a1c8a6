// file: src/utils/logging.rs
// description: file-backed tracing subscriber construction and console formatting
// reference: https://docs.rs/tracing-subscriber

use crate::config::LoggingConfig;
use crate::error::{PipelineError, Result};
use chrono::Local;
use colored::*;
use std::fmt;
use std::io;
use std::path::Path;
use tracing::subscriber::DefaultGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing::{Event, Level, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::{EnvFilter, prelude::*};

/// `2024-05-01 12:00:00,123 - INFO - message`
pub struct LogLineFormat;

impl<S, N> FormatEvent<S, N> for LogLineFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S,%3f");
        write!(
            writer,
            "{} - {} - ",
            timestamp,
            level_name(event.metadata().level())
        )?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

fn level_name(level: &Level) -> &'static str {
    match *level {
        Level::ERROR => "ERROR",
        Level::WARN => "WARNING",
        Level::INFO => "INFO",
        Level::DEBUG => "DEBUG",
        _ => "TRACE",
    }
}

/// Builds a subscriber that appends to the configured log file.
pub fn build_subscriber(
    config: &LoggingConfig,
    verbose: bool,
) -> Result<impl Subscriber + Send + Sync + 'static> {
    let level = if verbose { "debug" } else { config.level.as_str() };
    let filter = EnvFilter::try_new(format!(
        "{},hyper=warn,hyper_util=warn,reqwest=warn,rustls=warn",
        level
    ))
    .map_err(|e| PipelineError::Config(format!("Invalid log level '{}': {}", level, e)))?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .event_format(LogLineFormat)
        .with_writer(log_file_appender(&config.file)?);

    Ok(tracing_subscriber::registry().with(filter).with(fmt_layer))
}

/// Append-only appender for exactly `path`; the file is never rotated.
fn log_file_appender(path: &Path) -> Result<RollingFileAppender> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| {
            PipelineError::Config(format!("logging.file has no file name: {}", path.display()))
        })?;
    let directory = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    RollingFileAppender::builder()
        .rotation(Rotation::NEVER)
        .filename_prefix(file_name)
        .build(directory)
        .map_err(|e| PipelineError::file(path, io::Error::other(e)))
}

/// Installs the subscriber for the current thread until the guard is dropped.
pub fn init_logger(config: &LoggingConfig, verbose: bool) -> Result<DefaultGuard> {
    let subscriber = build_subscriber(config, verbose)?;
    Ok(tracing::subscriber::set_default(subscriber))
}

pub fn format_success(msg: &str) -> String {
    format!("{} {}", "✓".green().bold(), msg.green())
}

pub fn format_error(msg: &str) -> String {
    format!("{} {}", "✗".red().bold(), msg.red())
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;
    use tracing::{debug, info, warn};

    fn logging_config(dir: &TempDir) -> LoggingConfig {
        LoggingConfig {
            file: dir.path().join("youtube_search.log"),
            level: "info".to_string(),
        }
    }

    #[test]
    fn test_log_line_format() {
        let temp = TempDir::new().unwrap();
        let config = logging_config(&temp);
        let subscriber = build_subscriber(&config, false).unwrap();

        tracing::subscriber::with_default(subscriber, || {
            info!("Found YouTube link");
            warn!("No video ID extracted");
            debug!("not written at info level");
        });

        let content = fs::read_to_string(&config.file).unwrap();
        let lines: Vec<_> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let pattern =
            Regex::new(r"^\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2},\d{3} - (INFO|WARNING) - .+$")
                .unwrap();
        assert!(lines.iter().all(|line| pattern.is_match(line)));
        assert!(lines[0].ends_with(" - INFO - Found YouTube link"));
        assert!(lines[1].ends_with(" - WARNING - No video ID extracted"));
    }

    #[test]
    fn test_log_file_is_appended() {
        let temp = TempDir::new().unwrap();
        let config = logging_config(&temp);

        for run in 0..2 {
            let subscriber = build_subscriber(&config, false).unwrap();
            tracing::subscriber::with_default(subscriber, || info!("run {}", run));
        }

        let content = fs::read_to_string(&config.file).unwrap();
        assert_eq!(content.lines().count(), 2);
    }

    #[test]
    fn test_log_file_in_missing_subdirectory() {
        let temp = TempDir::new().unwrap();
        let config = LoggingConfig {
            file: temp.path().join("logs").join("linksync.log"),
            level: "info".to_string(),
        };

        let subscriber = build_subscriber(&config, false).unwrap();
        tracing::subscriber::with_default(subscriber, || info!("nested"));

        let content = fs::read_to_string(&config.file).unwrap();
        assert!(content.ends_with(" - INFO - nested\n"));
        assert_eq!(fs::read_dir(temp.path().join("logs")).unwrap().count(), 1);
    }

    #[test]
    fn test_unwritable_log_path() {
        let temp = TempDir::new().unwrap();
        let blocker = temp.path().join("not-a-dir");
        fs::write(&blocker, "").unwrap();

        let config = LoggingConfig {
            file: blocker.join("linksync.log"),
            level: "info".to_string(),
        };
        assert!(build_subscriber(&config, false).is_err());
    }

    #[test]
    fn test_log_path_without_file_name() {
        let config = LoggingConfig {
            file: PathBuf::from("/"),
            level: "info".to_string(),
        };
        assert!(matches!(
            build_subscriber(&config, false),
            Err(PipelineError::Config(_))
        ));
    }

    #[test]
    fn test_console_formatting() {
        assert!(format_success("Converted").contains("Converted"));
        assert!(format_error("Invalid choice").contains("Invalid choice"));
    }
}
