// file: src/main.rs
// description: commandline application entry point with interactive fallbacks
// reference: application bootstrap and orchestration

use anyhow::{Context, Result};
use clap::{ArgAction, Parser};
use linksync::utils::logging::{format_error, init_logger};
use linksync::utils::prompt::{CONVERT_PROMPT, INPUT_PROMPT, OUTPUT_PROMPT};
use linksync::{
    Config, ConvertChoice, InputReader, LinkPipeline, PdfConverter, PipelineError, Prompter,
    Validator, YouTubeSearchClient,
};
use std::io::ErrorKind;
use std::path::PathBuf;
use tracing::{error, info, warn};

#[derive(Parser)]
#[command(name = "linksync")]
#[command(author = "cipher")]
#[command(version = "0.1.0")]
#[command(about = "Build a document of YouTube download links from a list of titles", long_about = None)]
struct Cli {
    /// Configuration file; built-in defaults are used when it does not exist
    #[arg(
        short,
        long,
        value_name = "FILE",
        default_value = "config/default.toml"
    )]
    config: PathBuf,

    /// Input file (.txt or .docx); prompted for when omitted
    #[arg(short, long, value_name = "PATH")]
    input: Option<String>,

    /// Output .docx file; prompted for when omitted
    #[arg(short, long, value_name = "PATH")]
    output: Option<String>,

    /// Convert the output to PDF (yes/no); prompted for when omitted
    #[arg(long, value_name = "yes|no")]
    convert: Option<String>,

    /// Write debug-level entries to the log file
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config_found = cli.config.exists();
    let config = if config_found {
        Config::load(Some(cli.config.as_path())).context("Failed to load configuration")?
    } else {
        Config::load(None).context("Failed to load configuration")?
    };

    let _log_guard = init_logger(&config.logging, cli.verbose).with_context(|| {
        format!("Failed to open log file {}", config.logging.file.display())
    })?;

    if config_found {
        info!("Loaded configuration from: {}", cli.config.display());
    } else {
        warn!(
            "Config file {} not found, using default configuration",
            cli.config.display()
        );
    }

    if let Err(e) = run(cli, &config).await {
        error!("{}", failure_message(&e));
    }

    Ok(())
}

async fn run(cli: Cli, config: &Config) -> linksync::Result<()> {
    let mut prompter = Prompter::stdio();

    let input = prompter.value_or_ask(cli.input, INPUT_PROMPT)?;
    let output = prompter.value_or_ask(cli.output, OUTPUT_PROMPT)?;

    let paths = Validator::validate_run_paths(&input, &output)?;
    Validator::validate_output_differs(&paths)?;

    let lines = InputReader::read(&paths.input)?;
    info!(
        "Read {} lines from {} ({:?})",
        lines.len(),
        paths.input.display(),
        paths.format
    );

    let search = YouTubeSearchClient::new(config.search.clone())?;
    LinkPipeline::new(search)
        .write_document(&lines, &paths.output)
        .await?;

    let answer = prompter.value_or_ask(cli.convert, CONVERT_PROMPT)?;
    match ConvertChoice::parse(&answer) {
        ConvertChoice::Yes => {
            PdfConverter::new(config.pdf.clone())
                .convert(&paths.output)
                .await?;
        }
        ConvertChoice::No => {
            info!("PDF conversion skipped");
        }
        ConvertChoice::Invalid(choice) => {
            println!("{}", format_error("Invalid choice. Program terminated."));
            error!(
                "Invalid choice for conversion ('{}'). Program terminated.",
                choice
            );
        }
    }

    Ok(())
}

fn failure_message(err: &PipelineError) -> String {
    match err.io_kind() {
        Some(ErrorKind::NotFound) => format!("Input file not found: {}", err),
        Some(ErrorKind::PermissionDenied) => {
            format!("Permission denied to access files: {}", err)
        }
        _ if err.is_invalid_input() => format!("Invalid input: {}", err),
        _ => format!("An unexpected error occurred: {}", err),
    }
}
