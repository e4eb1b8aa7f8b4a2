//! Batch command - scan many slip images into JSON Lines.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use clap::Args;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use tracing::warn;

use super::{build_analyzer, load_config};

/// Arguments for the batch command.
#[derive(Args)]
pub struct BatchArgs {
    /// Input glob pattern, e.g. "slips/*.png"
    #[arg(required = true)]
    pattern: String,

    /// Output JSON Lines file (default: stdout)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

pub fn run(args: BatchArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    let inputs: Vec<PathBuf> = glob::glob(&args.pattern)?
        .filter_map(std::result::Result::ok)
        .collect();

    if inputs.is_empty() {
        anyhow::bail!("No files match pattern: {}", args.pattern);
    }

    let analyzer = build_analyzer(&config);

    let progress = ProgressBar::new(inputs.len() as u64);
    progress.set_style(ProgressStyle::default_bar().template("{bar:40} {pos}/{len} {msg}")?);

    let mut writer: Box<dyn Write> = match &args.output {
        Some(path) => Box::new(BufWriter::new(File::create(path)?)),
        None => Box::new(std::io::stdout().lock()),
    };

    let mut failed = 0usize;
    for input in &inputs {
        progress.set_message(input.display().to_string());

        // A failed slip is reported and skipped; the run continues.
        match analyzer.recognize_betting_slip(input) {
            Ok(data) => {
                let mut line = serde_json::to_value(&data)?;
                if let serde_json::Value::Object(ref mut map) = line {
                    map.insert(
                        "file".to_string(),
                        serde_json::Value::String(input.display().to_string()),
                    );
                }
                writeln!(writer, "{line}")?;
            }
            Err(e) => {
                failed += 1;
                warn!("{}: {}", input.display(), e);
            }
        }
        progress.inc(1);
    }
    progress.finish_and_clear();
    writer.flush()?;

    eprintln!(
        "{} {} scanned, {} failed",
        style("Done:").green().bold(),
        inputs.len() - failed,
        failed
    );

    Ok(())
}
