//! CLI entry point for custodylint.
//!
//! This module is intentionally thin: it handles argument parsing, I/O, and
//! exit codes. All business logic lives in the `custodylint-app` crate.

use anyhow::Context;
use camino::Utf8PathBuf;
use clap::{Parser, Subcommand, ValueEnum};
use custodylint_app::{run_analyze, AnalyzeInput};
use custodylint_render::render_text;

#[derive(Parser, Debug)]
#[command(
    name = "custodylint",
    version,
    about = "Diagnose custody configs, policies, and signing requests"
)]
struct Cli {
    #[command(subcommand)]
    cmd: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Analyze one JSON document and print issues with suggested fixes.
    Analyze {
        /// Path to the document (JSON; comments and trailing commas are tolerated).
        file: Utf8PathBuf,

        /// Explain each issue using the configured language model.
        #[arg(long, short)]
        verbose: bool,

        /// Output format.
        #[arg(long, value_enum, default_value_t = Format::Text)]
        format: Format,
    },
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Format {
    Text,
    Json,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Analyze {
            file,
            verbose,
            format,
        } => cmd_analyze(&file, verbose, format),
    }
}

fn cmd_analyze(file: &Utf8PathBuf, verbose: bool, format: Format) -> anyhow::Result<()> {
    let document_text =
        std::fs::read_to_string(file).with_context(|| format!("read document: {file}"))?;

    let enricher = verbose.then(custodylint_enrich::from_env);
    if verbose {
        log::info!("enrichment enabled; one explanation per issue");
    }

    let output = run_analyze(AnalyzeInput {
        document_text: &document_text,
        enricher: enricher.as_deref(),
    })
    .with_context(|| format!("analyze document: {file}"))?;

    match format {
        Format::Text => print!("{}", render_text(&output.report)),
        Format::Json => {
            let json = serde_json::to_string_pretty(&output.report)
                .context("serialize report as JSON")?;
            println!("{json}");
        }
    }

    Ok(())
}
