use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use subfilter::config::Settings;
use subfilter::utils::logger::init_logger;
use subfilter::ToolKind;

/// Filter subdomains and URLs from different enumeration tools.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Input file containing subdomains (from an external tool)
    input_file: PathBuf,

    /// Tool used to generate the subdomain list
    /// [possible values: amass, subfinder, sublist3r, aquatone, knockpy]
    #[arg(long, value_parser = ToolKind::from_str)]
    tool: ToolKind,

    /// Output file to save filtered results [default: filtered_subdomains.txt]
    #[arg(long)]
    output: Option<PathBuf>,

    /// Configuration file (defaults to ./subfilter.toml when present)
    #[arg(long)]
    config: Option<String>,

    /// Write logs to a timestamped file in this directory instead of stderr
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let settings = Settings::load(cli.config.as_deref())?;
    let log_dir = cli.log_dir.or(settings.log_dir);
    init_logger(log_dir.as_deref()).context("Failed to initialize logger")?;

    let output = cli.output.unwrap_or(settings.output);
    debug!("Filtering {} results from {}", cli.tool, cli.input_file.display());

    let summary = subfilter::run(&cli.input_file, cli.tool, &output)
        .with_context(|| format!("Failed to filter {} results from {}", cli.tool, cli.input_file.display()))?;

    println!("Filtered URLs saved to {}", summary.output.display());
    Ok(())
}
