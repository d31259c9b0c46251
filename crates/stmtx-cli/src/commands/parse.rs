//! Parse command - extract fields from a single statement file.

use std::fs;
use std::path::PathBuf;
use std::time::{Duration, Instant};

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::{debug, info};

use stmtx_core::{source, ParseResult, StatementParser};

use super::output::{self, OutputFormat};

/// Arguments for the parse command.
#[derive(Args)]
pub struct ParseArgs {
    /// Input statement (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Pretty-print JSON
    #[arg(long)]
    pretty: bool,

    /// Show extraction confidence and missing fields
    #[arg(long)]
    show_confidence: bool,
}

pub async fn run(args: ParseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    info!("Parsing file: {}", args.input.display());

    let spinner = ProgressBar::new_spinner();
    spinner.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    spinner.enable_steady_tick(Duration::from_millis(100));
    spinner.set_message("Reading statement...");

    let source = source::open(&args.input, &config.input)?;

    spinner.set_message("Extracting fields...");
    let result = StatementParser::new().parse_source(&*source);
    spinner.finish_and_clear();

    let pretty = args.pretty || config.output.pretty;

    if let ParseResult::Failure { error } = &result {
        println!("{}", output::format_json(&result, pretty)?);
        anyhow::bail!("Parsing failed: {}", error);
    }

    let rendered = output::render(&result, args.format, pretty)?;

    if let Some(output_path) = &args.output {
        fs::write(output_path, &rendered)?;
        println!(
            "{} Output written to {}",
            style("✓").green(),
            output_path.display()
        );
    } else {
        println!("{}", rendered);
    }

    if let (true, Some(statement)) = (args.show_confidence, result.statement()) {
        eprintln!();
        eprintln!(
            "{} Extraction confidence: {}%",
            style("ℹ").blue(),
            statement.confidence
        );
        let missing = statement.data.fields.missing();
        if !missing.is_empty() {
            eprintln!("{} Not found: {}", style("ℹ").blue(), missing.join(", "));
        }
    }

    debug!("Total processing time: {:?}", start.elapsed());

    Ok(())
}
