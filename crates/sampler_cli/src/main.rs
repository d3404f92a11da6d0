//! dist-sampler - draw and summarise samples from named distributions
//!
//! # Commands
//!
//! - `dist-sampler draw` - Draw a sample and print its summary
//! - `dist-sampler check` - Validate a request without drawing

use std::io;
use std::path::Path;

use anyhow::Context;
use clap::{Parser, Subcommand};
use sampler_cli::commands::{self, check::CheckArgs, draw::DrawArgs};
use sampler_cli::config::SamplerConfig;
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Distribution sampler CLI
#[derive(Parser)]
#[command(name = "dist-sampler")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Configuration file path
    #[arg(short, long, global = true, default_value = "sampler.toml")]
    config: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Draw a sample and print its summary
    Draw(DrawArgs),

    /// Validate a request without drawing
    Check(CheckArgs),
}

fn init_tracing(verbose: bool, log_level: &str) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level))
    };

    // stderr only; stdout carries command output
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = SamplerConfig::load_with_env_and_validate(Path::new(&cli.config))
        .with_context(|| format!("Failed to load configuration from '{}'", cli.config))?;

    init_tracing(cli.verbose, &config.log_level);

    if cli.verbose {
        info!("Verbose mode enabled");
    }
    debug!(?config, "Configuration loaded");

    let stdout = io::stdout();
    let mut out = stdout.lock();

    match cli.command {
        Commands::Draw(args) => commands::draw::run(&args, &config, &mut out)?,
        Commands::Check(args) => commands::check::run(&args, &config, &mut out)?,
    }

    Ok(())
}
