//! Scan command - extract tip data from a single slip image.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use super::{build_analyzer, load_config};

/// Arguments for the scan command.
#[derive(Args)]
pub struct ScanArgs {
    /// Input image
    #[arg(required = true)]
    input: PathBuf,

    /// Projection to produce
    #[arg(short, long, value_enum, default_value = "slip")]
    mode: ScanMode,

    /// Output file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ScanMode {
    /// Match identification only
    MatchData,
    /// Raw slip recognition; absent fields allowed
    Slip,
    /// Fully-populated auto-fill payload
    AutoFill,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output
    Json,
    /// Plain text summary
    Text,
}

pub fn run(args: ScanArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    if !args.input.exists() {
        anyhow::bail!("Input file not found: {}", args.input.display());
    }

    let analyzer = build_analyzer(&config);

    info!("scanning {}", args.input.display());

    let rendered = match args.mode {
        ScanMode::MatchData => render(&analyzer.extract_match_data(&args.input)?, args.format)?,
        ScanMode::Slip => render(&analyzer.recognize_betting_slip(&args.input)?, args.format)?,
        ScanMode::AutoFill => render(&analyzer.auto_fill_tip(&args.input)?, args.format)?,
    };

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            eprintln!("{} {}", style("Wrote").green().bold(), path.display());
        }
        None => println!("{rendered}"),
    }

    Ok(())
}

fn render<T: serde::Serialize>(data: &T, format: OutputFormat) -> anyhow::Result<String> {
    match format {
        OutputFormat::Json => Ok(serde_json::to_string_pretty(data)?),
        OutputFormat::Text => {
            let value = serde_json::to_value(data)?;
            let mut out = String::new();
            if let serde_json::Value::Object(map) = value {
                for (key, value) in map {
                    let value = match value {
                        serde_json::Value::String(s) => s,
                        other => other.to_string(),
                    };
                    out.push_str(&format!("{:<16} {}\n", format!("{key}:"), value));
                }
            }
            Ok(out)
        }
    }
}
