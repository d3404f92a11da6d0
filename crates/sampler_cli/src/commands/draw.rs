//! Draw command implementation
//!
//! Validates a request, draws a sample and prints its summary, optionally
//! followed by the raw values and a histogram.

use std::io::Write;

use clap::Args;
use sampler_core::chart::{
    ChartError, ChartJsRenderer, ChartRenderer, Histogram, TextHistogramRenderer,
};
use sampler_core::report::{write_sample, write_summary};
use sampler_core::{
    DistributionSampler, Sample, SampleRequest, SampleSummary, SamplerError, SamplerRng,
};
use serde::Serialize;
use tracing::{info, warn};

use super::RequestArgs;
use crate::config::{ChartKind, OutputFormat, SamplerConfig};
use crate::Result;

/// Arguments of the `draw` command
#[derive(Debug, Clone, Default, Args)]
pub struct DrawArgs {
    #[command(flatten)]
    pub request: RequestArgs,

    /// Seed for a reproducible draw
    #[arg(long)]
    pub seed: Option<u64>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Chart to produce
    #[arg(long, value_enum)]
    pub chart: Option<ChartKind>,

    /// Histogram bin count
    #[arg(long)]
    pub bins: Option<usize>,

    /// Print the raw sample values
    #[arg(long)]
    pub print_sample: bool,
}

impl DrawArgs {
    /// Applies the flags on top of `config` and validates the result.
    pub fn settings(&self, config: &SamplerConfig) -> Result<SamplerConfig> {
        let mut settings = config.clone();
        if let Some(seed) = self.seed {
            settings.seed = Some(seed);
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(chart) = self.chart {
            settings.chart = chart;
        }
        if let Some(bins) = self.bins {
            settings.bins = bins;
        }
        settings.print_sample |= self.print_sample;

        settings.validate()?;
        Ok(settings)
    }
}

/// JSON document written by `draw --format json`
#[derive(Debug, Serialize)]
struct DrawReport<'a> {
    request: &'a SampleRequest,
    #[serde(skip_serializing_if = "Option::is_none")]
    seed: Option<u64>,
    warnings: Vec<String>,
    summary: Option<&'a SampleSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    sample: Option<&'a Sample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    chart: Option<serde_json::Value>,
}

/// Run the draw command
pub fn run<W: Write>(args: &DrawArgs, config: &SamplerConfig, out: &mut W) -> Result<()> {
    let settings = args.settings(config)?;
    let request = args.request.to_request()?;

    let rng = SamplerRng::from_optional_seed(settings.seed);
    let mut sampler = DistributionSampler::with_rng(rng);
    sampler.set_request(request);
    sampler.draw()?;

    let summary = match sampler.summary() {
        Ok(summary) => Some(summary),
        Err(SamplerError::EmptySample) => None,
        Err(e) => return Err(e.into()),
    };
    let sample = sampler.sample();

    info!(
        size = sample.map_or(0, Sample::len),
        format = ?settings.format,
        chart = ?settings.chart,
        "Draw complete"
    );

    match settings.format {
        OutputFormat::Table => write_table(out, &sampler, summary, &settings),
        OutputFormat::Json => write_json(out, &sampler, summary, &settings),
    }
}

fn write_table<W: Write>(
    out: &mut W,
    sampler: &DistributionSampler,
    summary: Option<&SampleSummary>,
    settings: &SamplerConfig,
) -> Result<()> {
    for warning in sampler.warnings() {
        writeln!(out, "Warning: {}", warning)?;
    }
    if let Some(seed) = sampler.seed() {
        writeln!(out, "Seed: {}", seed)?;
    }

    match summary {
        Some(summary) => write_summary(out, summary)?,
        None => writeln!(out, "Sample is empty: nothing to summarise")?,
    }

    if settings.print_sample {
        writeln!(out)?;
        write_sample(out, sampler.sample())?;
    }

    if let (Some(sample), Some(summary)) = (sampler.sample(), summary) {
        if let Some(chart) = render_chart(sample, summary.label(), settings)? {
            writeln!(out)?;
            write!(out, "{}", chart)?;
            if !chart.ends_with('\n') {
                writeln!(out)?;
            }
        }
    }

    Ok(())
}

fn write_json<W: Write>(
    out: &mut W,
    sampler: &DistributionSampler,
    summary: Option<&SampleSummary>,
    settings: &SamplerConfig,
) -> Result<()> {
    let chart = match (sampler.sample(), summary) {
        (Some(sample), Some(summary)) => match render_chart(sample, summary.label(), settings)? {
            Some(text) if settings.chart == ChartKind::Chartjs => {
                Some(serde_json::from_str::<serde_json::Value>(&text)?)
            }
            Some(text) => Some(serde_json::Value::String(text)),
            None => None,
        },
        _ => None,
    };

    let report = DrawReport {
        request: sampler.request(),
        seed: sampler.seed(),
        warnings: sampler.warnings().iter().map(ToString::to_string).collect(),
        summary,
        sample: if settings.print_sample {
            sampler.sample()
        } else {
            None
        },
        chart,
    };

    serde_json::to_writer_pretty(&mut *out, &report)?;
    writeln!(out)?;
    Ok(())
}

/// Renders the configured chart, or `None` when no chart is wanted.
///
/// An empty sample is skipped with a warning; other chart failures are
/// returned.
fn render_chart(sample: &Sample, title: &str, settings: &SamplerConfig) -> Result<Option<String>> {
    let renderer: Box<dyn ChartRenderer> = match settings.chart {
        ChartKind::None => return Ok(None),
        ChartKind::Text => Box::new(TextHistogramRenderer {
            width: settings.chart_width,
        }),
        ChartKind::Chartjs => Box::new(ChartJsRenderer),
    };

    let histogram = match Histogram::from_sample(sample, settings.bins) {
        Ok(histogram) => histogram,
        Err(ChartError::EmptySample) => {
            warn!("Chart skipped: sample is empty");
            return Ok(None);
        }
        Err(e) => return Err(e.into()),
    };

    Ok(Some(renderer.render(&histogram, title)?))
}
