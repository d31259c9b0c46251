//! Detect command - report which provider layout a statement follows.

use std::path::PathBuf;

use clap::Args;

use stmtx_core::{source, StatementParser};

/// Arguments for the detect command.
#[derive(Args)]
pub struct DetectArgs {
    /// Input statement (PDF or plain text)
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: DetectArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = super::load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let text = source::open(&args.input, &config.input)?.extract_text()?;
    println!("{}", StatementParser::new().detect(&text));

    Ok(())
}
