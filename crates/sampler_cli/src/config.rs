//! Sampler configuration management.
//!
//! Loads `sampler.toml` (or the path given with `--config`), falls back to
//! defaults when the file is absent, then applies `SAMPLER_*` environment
//! overrides. Command line flags are applied last by the commands
//! themselves.

use std::path::Path;

use sampler_core::chart::DEFAULT_BINS;
use serde::Deserialize;
use thiserror::Error;

/// Largest accepted histogram bin count.
pub const MAX_BINS: usize = 500;

/// Largest accepted text chart width.
pub const MAX_CHART_WIDTH: usize = 200;

const VALID_LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Output format for draw results
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable summary block
    #[default]
    Table,
    /// Single JSON document
    Json,
}

/// Chart produced alongside the summary
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ChartKind {
    /// No chart
    #[default]
    None,
    /// Terminal bar chart
    Text,
    /// Chart.js bar chart JSON
    Chartjs,
}

/// Sampler configuration
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SamplerConfig {
    /// Seed for reproducible draws; entropy when absent
    #[serde(default)]
    pub seed: Option<u64>,

    /// Log level used when `RUST_LOG` is not set
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Output format
    #[serde(default)]
    pub format: OutputFormat,

    /// Chart kind
    #[serde(default)]
    pub chart: ChartKind,

    /// Histogram bin count
    #[serde(default = "default_bins")]
    pub bins: usize,

    /// Width of the longest text chart bar
    #[serde(default = "default_chart_width")]
    pub chart_width: usize,

    /// Print the raw sample values
    #[serde(default)]
    pub print_sample: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_bins() -> usize {
    DEFAULT_BINS
}

fn default_chart_width() -> usize {
    50
}

impl Default for SamplerConfig {
    fn default() -> Self {
        Self {
            seed: None,
            log_level: default_log_level(),
            format: OutputFormat::default(),
            chart: ChartKind::default(),
            bins: default_bins(),
            chart_width: default_chart_width(),
            print_sample: false,
        }
    }
}

impl SamplerConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io(e.to_string()))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or the defaults if the file does not
    /// exist. A file that exists but cannot be parsed is still an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    pub fn with_env_override(mut self) -> Self {
        if let Ok(seed) = std::env::var("SAMPLER_SEED") {
            self.seed = seed.trim().parse().ok();
        }

        if let Ok(log_level) = std::env::var("SAMPLER_LOG_LEVEL") {
            self.log_level = log_level;
        }

        if let Ok(bins) = std::env::var("SAMPLER_BINS") {
            self.bins = bins.trim().parse().unwrap_or(self.bins);
        }

        if let Ok(format) = std::env::var("SAMPLER_FORMAT") {
            self.format = match format.to_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => self.format,
            };
        }

        if let Ok(chart) = std::env::var("SAMPLER_CHART") {
            self.chart = match chart.to_lowercase().as_str() {
                "none" => ChartKind::None,
                "text" => ChartKind::Text,
                "chartjs" => ChartKind::Chartjs,
                _ => self.chart,
            };
        }

        self
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if !VALID_LOG_LEVELS.contains(&self.log_level.to_lowercase().as_str()) {
            errors.push(format!(
                "Invalid log_level '{}'. Valid values: {:?}",
                self.log_level, VALID_LOG_LEVELS
            ));
        }

        if self.bins == 0 {
            errors.push("bins must be greater than 0".to_string());
        }
        if self.bins > MAX_BINS {
            errors.push(format!(
                "bins {} exceeds maximum allowed ({})",
                self.bins, MAX_BINS
            ));
        }

        if self.chart_width == 0 || self.chart_width > MAX_CHART_WIDTH {
            errors.push(format!(
                "chart_width {} must be between 1 and {}",
                self.chart_width, MAX_CHART_WIDTH
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }

    /// Load from `path` (or defaults), apply environment overrides and
    /// validate
    pub fn load_with_env_and_validate(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::load_or_default(path)?.with_env_override();
        config.validate()?;
        Ok(config)
    }
}

/// Configuration error type
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation error
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}
