#![allow(clippy::doc_markdown)]
//! `roadgraph` - load a place/road file and print its adjacency report.

use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, ValueEnum};
use colored::Colorize;
use figment::providers::Serialized;
use roadgraph_core::{render, BackendKind, GraphLoader, GraphSummary, Preset, RoadgraphConfig};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Load a place/road graph file and print it as an aligned report
#[derive(Parser, Debug)]
#[command(name = "roadgraph")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input file, one place per line
    input: PathBuf,

    /// Backend to load into (list or matrix)
    #[arg(short, long)]
    backend: Option<BackendKind>,

    /// Delimiter preset (a: `|` `:` `:`, b: `:` `/` `/`)
    #[arg(short, long)]
    preset: Option<Preset>,

    /// Configuration file (defaults to ./roadgraph.toml when present)
    #[arg(short, long, env = "ROADGRAPH_CONFIG")]
    config: Option<PathBuf>,

    /// Print counts per category instead of the report
    #[arg(short, long)]
    summary: bool,

    /// Summary output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, requires = "summary")]
    format: OutputFormat,

    /// Log loader progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| default.into()),
        ))
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Resolves configuration with command-line flags on top of file and env.
fn resolve_config(args: &Args) -> anyhow::Result<RoadgraphConfig> {
    let mut figment = RoadgraphConfig::figment(args.config.as_deref())?;
    if let Some(backend) = args.backend {
        figment = figment.merge(Serialized::default("backend", backend));
    }
    let mut config = RoadgraphConfig::extract(&figment)?;
    // An explicit preset beats custom delimiters from lower layers, so it
    // applies before the profile is checked.
    if let Some(preset) = args.preset {
        config = config.with_preset(preset);
    }
    Ok(config.validated()?)
}

/// Builds the full stdout text so nothing is written on failure.
fn run(args: &Args) -> anyhow::Result<String> {
    let config = resolve_config(args).context("invalid configuration")?;
    let loader = GraphLoader::new(config.profile())?;
    let graph = loader
        .load_path(&args.input, config.backend)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;

    let mut output = if args.summary {
        let summary = GraphSummary::of(&graph);
        match args.format {
            OutputFormat::Text => summary.to_string(),
            OutputFormat::Json => serde_json::to_string_pretty(&summary)?,
        }
    } else {
        render(&graph)
    };
    if !output.ends_with('\n') {
        output.push('\n');
    }
    Ok(output)
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing(args.verbose);

    match run(&args) {
        Ok(output) => {
            let mut stdout = io::stdout().lock();
            if let Err(err) = stdout.write_all(output.as_bytes()).and_then(|()| stdout.flush()) {
                // Closed pipe on the reader side.
                if err.kind() != io::ErrorKind::BrokenPipe {
                    eprintln!("{} {err}", "error:".red().bold());
                    return ExitCode::FAILURE;
                }
            }
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{} {err:#}", "error:".red().bold());
            ExitCode::FAILURE
        }
    }
}
