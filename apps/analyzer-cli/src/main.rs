//! Agreement Analyzer CLI
//!
//! Analyzes an agreement and prints the result as JSON on stdout, or trains
//! the risk model from a labeled CSV. Logs go to stderr.

use agreement_analyzer::{AnalysisEngine, AnalyzerConfig};
use anyhow::Context;
use clap::{Parser, Subcommand};
use shared_types::StartupType;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "agreement-analyzer")]
#[command(version, about = "Risk analysis for startup financing agreements")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Analyze a PDF or DOCX agreement
    Analyze {
        file: PathBuf,

        /// Industry of the company (SaaS, fintech, healthtech, ...)
        #[arg(short, long)]
        startup_type: Option<String>,

        /// TOML configuration file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },
    /// Train the risk model from a clause_text,clause_type,risk_level CSV
    Train {
        csv: PathBuf,

        /// Where to write risk_classifier.json
        #[arg(long, default_value = "./trained_models")]
        model_dir: PathBuf,
    },
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    // stdout carries the JSON result, so all logging goes to stderr
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    match args.command {
        Command::Analyze {
            file,
            startup_type,
            config,
            pretty,
        } => analyze(file, startup_type, config, pretty),
        Command::Train { csv, model_dir } => train(csv, model_dir),
    }
}

fn analyze(
    file: PathBuf,
    startup_type: Option<String>,
    config: Option<PathBuf>,
    pretty: bool,
) -> anyhow::Result<()> {
    let config = match config {
        Some(path) => AnalyzerConfig::from_file(path)?,
        None => AnalyzerConfig::default(),
    }
    .with_env_overrides()?;

    let startup_type = startup_type
        .map(StartupType::from)
        .unwrap_or_else(|| config.default_startup_type.clone());

    tracing::info!("Starting Agreement Analyzer v{}", env!("CARGO_PKG_VERSION"));
    let engine = AnalysisEngine::new(config);
    let result = engine
        .analyze_file(&file, &startup_type)
        .with_context(|| format!("Failed to analyze {}", file.display()))?;

    let json = if pretty {
        serde_json::to_string_pretty(&result)?
    } else {
        serde_json::to_string(&result)?
    };
    println!("{}", json);
    Ok(())
}

fn train(csv: PathBuf, model_dir: PathBuf) -> anyhow::Result<()> {
    let (model, report) = risk_engine::model::train_from_csv(&csv)
        .with_context(|| format!("Failed to train from {}", csv.display()))?;
    model
        .save(&model_dir)
        .with_context(|| format!("Failed to save model to {}", model_dir.display()))?;

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}
