//! collections-samples: run one (or every) map/set sample.
//!
//! Run with: cargo run -- tree-set-with-comparator

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use collections_samples::config::Settings;
use collections_samples::transcript::{self, Transcript};
use collections_samples::{OutputFormat, Sample};

#[derive(Parser)]
#[command(name = "collections-samples")]
#[command(version)]
#[command(about = "Runnable samples of hash and sorted maps and sets")]
struct Cli {
    /// Sample to run (defaults to the settings file, then favourite-films)
    #[arg(value_enum)]
    sample: Option<Sample>,

    /// Run every sample in order
    #[arg(long, conflicts_with = "sample")]
    all: bool,

    /// List the sample names and exit
    #[arg(long)]
    list: bool,

    /// TOML settings file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(long, value_enum)]
    format: Option<OutputFormat>,

    /// Longest title kept by the passing-map sample
    #[arg(long)]
    max_title_length: Option<usize>,

    /// Disable coloured output
    #[arg(long)]
    no_color: bool,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(verbose: bool, ansi: bool) {
    let filter = if verbose {
        "collections_samples=debug,warn"
    } else {
        "warn"
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| filter.into()),
        )
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .init();
}

fn resolve_settings(cli: &Cli) -> Result<Settings> {
    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)
            .with_context(|| format!("loading settings from {}", path.display()))?,
        None => Settings::default(),
    };

    if let Some(format) = cli.format {
        settings.format = format;
    }
    if let Some(max) = cli.max_title_length {
        settings.max_title_length = max;
    }
    if cli.no_color {
        settings.color = false;
    }
    settings.validate().context("invalid command-line settings")?;
    Ok(settings)
}

/// `--all` runs everything, then a named sample, then the settings file's.
fn selected_samples(cli: &Cli, settings: &Settings) -> Vec<Sample> {
    if cli.all {
        Sample::ALL.to_vec()
    } else {
        vec![cli.sample.unwrap_or_else(|| settings.default_sample())]
    }
}

fn write_list<W: Write>(out: &mut W) -> io::Result<()> {
    for sample in Sample::ALL {
        writeln!(out, "{:<26} {}", sample.name(), sample.title())?;
    }
    Ok(())
}

fn render(transcripts: &[Transcript], settings: &Settings) -> Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match settings.format {
        OutputFormat::Text => {
            for t in transcripts {
                t.write_text(&mut out)?;
            }
        }
        OutputFormat::Json => {
            writeln!(out, "{}", transcript::to_json(transcripts)?)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if cli.list {
        let stdout = io::stdout();
        write_list(&mut stdout.lock())?;
        return Ok(());
    }

    let settings = resolve_settings(&cli)?;
    init_logging(cli.verbose, settings.color);
    if !settings.color {
        colored::control::set_override(false);
    }

    let transcripts = selected_samples(&cli, &settings)
        .into_iter()
        .map(|sample| {
            sample
                .run(&settings)
                .with_context(|| format!("running sample {}", sample))
        })
        .collect::<Result<Vec<_>>>()?;

    render(&transcripts, &settings)
}
