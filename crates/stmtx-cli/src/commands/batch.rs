//! Batch command - parse many statement files concurrently.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Instant;

use clap::Args;
use console::style;
use glob::glob;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::Semaphore;
use tracing::{debug, error, warn};

use stmtx_core::models::config::InputConfig;
use stmtx_core::{source, ParseResult, ParsedStatement, StatementParser};

use super::output::{self, OutputFormat};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Glob pattern matching the input files
    #[arg(required = true)]
    input: String,

    /// Output directory
    #[arg(short = 'd', long)]
    output_dir: Option<PathBuf>,

    /// Output format for each file
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,

    /// Also generate a summary CSV
    #[arg(long)]
    summary: bool,

    /// Number of parallel workers
    #[arg(short = 'j', long, default_value = "4")]
    jobs: usize,

    /// Continue on error
    #[arg(long)]
    continue_on_error: bool,
}

/// Outcome of one file.
struct FileOutcome {
    path: PathBuf,
    result: Result<ParsedStatement, String>,
    processing_time_ms: u64,
}

pub async fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let start = Instant::now();
    let config = super::load_config(config_path)?;

    let files: Vec<PathBuf> = glob(&args.input)?
        .filter_map(|r| r.ok())
        .filter(|p| {
            p.extension()
                .and_then(|e| e.to_str())
                .is_some_and(|ext| config.input.allows_extension(ext))
        })
        .collect();

    if files.is_empty() {
        anyhow::bail!("No matching files found for pattern: {}", args.input);
    }

    println!(
        "{} Found {} files to process",
        style("ℹ").blue(),
        files.len()
    );

    if let Some(ref output_dir) = args.output_dir {
        fs::create_dir_all(output_dir)?;
    }

    let progress = ProgressBar::new(files.len() as u64);
    progress.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} files")?
            .progress_chars("=>-"),
    );

    let parser = StatementParser::new();
    let input_config = Arc::new(config.input.clone());
    let semaphore = Arc::new(Semaphore::new(args.jobs.max(1)));
    let mut handles = Vec::with_capacity(files.len());

    for path in files {
        let permit = Arc::clone(&semaphore).acquire_owned().await?;
        let parser = parser.clone();
        let input_config = Arc::clone(&input_config);
        let progress = progress.clone();

        handles.push(tokio::task::spawn_blocking(move || {
            let _permit = permit;
            let file_start = Instant::now();
            let result = parse_file(&path, &parser, &input_config);
            progress.inc(1);
            FileOutcome {
                path,
                result,
                processing_time_ms: file_start.elapsed().as_millis() as u64,
            }
        }));
    }

    // Handles are awaited in input order, so outcomes keep that order.
    let mut outcomes = Vec::with_capacity(handles.len());
    for handle in handles {
        let outcome = handle.await?;
        if let Err(e) = &outcome.result {
            if args.continue_on_error {
                warn!("Failed to process {}: {}", outcome.path.display(), e);
            } else {
                error!("Failed to process {}: {}", outcome.path.display(), e);
                progress.abandon();
                anyhow::bail!("Processing failed for {}: {}", outcome.path.display(), e);
            }
        }
        outcomes.push(outcome);
    }

    progress.finish_with_message("Complete");

    if let Some(output_dir) = &args.output_dir {
        write_outputs(output_dir, &outcomes, args.format, config.output.pretty)?;
    }

    if args.summary {
        let summary_path = args
            .output_dir
            .as_ref()
            .map(|d| d.join("summary.csv"))
            .unwrap_or_else(|| PathBuf::from("summary.csv"));

        write_summary(&summary_path, &outcomes)?;
        println!(
            "{} Summary written to {}",
            style("✓").green(),
            summary_path.display()
        );
    }

    let failed: Vec<&FileOutcome> = outcomes.iter().filter(|o| o.result.is_err()).collect();

    println!();
    println!(
        "{} Processed {} files in {:?}",
        style("✓").green(),
        outcomes.len(),
        start.elapsed()
    );
    println!(
        "   {} successful, {} failed",
        style(outcomes.len() - failed.len()).green(),
        style(failed.len()).red()
    );

    if !failed.is_empty() {
        println!();
        println!("{}", style("Failed files:").red());
        for outcome in &failed {
            if let Err(e) = &outcome.result {
                println!("  - {}: {}", outcome.path.display(), e);
            }
        }
    }

    Ok(())
}

fn parse_file(
    path: &Path,
    parser: &StatementParser,
    config: &InputConfig,
) -> Result<ParsedStatement, String> {
    let source = source::open(path, config).map_err(|e| e.to_string())?;
    match parser.parse_source(&*source) {
        ParseResult::Success(statement) => Ok(statement),
        ParseResult::Failure { error } => Err(error),
    }
}

fn write_outputs(
    output_dir: &Path,
    outcomes: &[FileOutcome],
    format: OutputFormat,
    pretty: bool,
) -> anyhow::Result<()> {
    for outcome in outcomes {
        let Ok(statement) = &outcome.result else {
            continue;
        };

        let stem = outcome
            .path
            .file_stem()
            .and_then(|s| s.to_str())
            .unwrap_or("statement");
        let output_path = output_dir.join(format!("{}.{}", stem, format.extension()));

        let result = ParseResult::Success(statement.clone());
        fs::write(&output_path, output::render(&result, format, pretty)?)?;
        debug!("Wrote output to {}", output_path.display());
    }
    Ok(())
}

fn write_summary(path: &Path, outcomes: &[FileOutcome]) -> anyhow::Result<()> {
    let mut wtr = csv::Writer::from_path(path)?;

    wtr.write_record([
        "filename",
        "status",
        "provider",
        "cardholder_name",
        "total_amount_due",
        "payment_due_date",
        "confidence",
        "transactions",
        "processing_time_ms",
        "error",
    ])?;

    for outcome in outcomes {
        let filename = outcome
            .path
            .file_name()
            .and_then(|s| s.to_str())
            .unwrap_or("");
        let time = outcome.processing_time_ms.to_string();

        match &outcome.result {
            Ok(statement) => {
                let fields = &statement.data.fields;
                wtr.write_record([
                    filename,
                    "success",
                    statement.provider.as_str(),
                    fields.cardholder_name.as_str(),
                    fields.total_amount_due.as_str(),
                    fields.payment_due_date.as_str(),
                    &statement.confidence.to_string(),
                    &statement.data.transactions.len().to_string(),
                    &time,
                    "",
                ])?;
            }
            Err(e) => {
                wtr.write_record([filename, "error", "", "", "", "", "", "", &time, e])?;
            }
        }
    }

    wtr.flush()?;
    Ok(())
}
