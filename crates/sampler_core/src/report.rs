//! Console reporting.
//!
//! Plain-text renderings of the current parameters, a sample and its
//! summary. Output goes to any [`std::io::Write`]; nothing here is meant to
//! be parsed back.

use std::fmt::Display;
use std::io::{self, Write};

use crate::request::SampleRequest;
use crate::sample::Sample;
use crate::summary::SampleSummary;

/// Message printed when there is no sample to show.
pub const NO_SAMPLE_MESSAGE: &str = "No sample to print. Set the parameters and draw a sample first.";

fn optional<T: Display>(value: Option<T>) -> String {
    value.map_or_else(|| "None".to_string(), |v| v.to_string())
}

/// Writes every request field, `None` for absent ones.
///
/// # Examples
///
/// ```rust
/// use sampler_core::report::write_parameters;
/// use sampler_core::SampleRequest;
///
/// let mut out = Vec::new();
/// write_parameters(&mut out, &SampleRequest::new("Poisson", 10).lam(2.0)).unwrap();
/// let text = String::from_utf8(out).unwrap();
/// assert!(text.contains("lam: 2"));
/// assert!(text.contains("mean: None"));
/// ```
pub fn write_parameters<W: Write>(out: &mut W, request: &SampleRequest) -> io::Result<()> {
    writeln!(out, "Parameters")?;
    writeln!(out, "----------")?;
    writeln!(out, "size: {}", optional(request.size))?;
    writeln!(out, "kind: {}", request.kind)?;
    writeln!(out, "mean: {}", optional(request.mean))?;
    writeln!(out, "sd: {}", optional(request.sd))?;
    writeln!(out, "lam: {}", optional(request.lam))?;
    writeln!(out, "trials: {}", optional(request.trials))?;
    writeln!(out, "prob: {}", optional(request.prob))?;
    Ok(())
}

/// Writes the summary block: distribution, size, input parameters and the
/// realised statistics.
pub fn write_summary<W: Write>(out: &mut W, summary: &SampleSummary) -> io::Result<()> {
    writeln!(out, "Summary")?;
    writeln!(out, "-------")?;
    writeln!(out, "Distribution: {}", summary.kind())?;
    writeln!(out, "Sample Size: {}", summary.size())?;
    for (name, value) in summary.distribution().parameters() {
        writeln!(out, "{} (input): {}", name, value)?;
    }
    writeln!(out, "Mean: {:.6}", summary.mean())?;
    writeln!(out, "Standard Deviation: {:.6}", summary.std_dev())?;
    writeln!(out, "Minimum Value: {}", summary.min())?;
    writeln!(out, "Maximum Value: {}", summary.max())?;
    Ok(())
}

/// Writes the sample values, or [`NO_SAMPLE_MESSAGE`] when there is none.
pub fn write_sample<W: Write>(out: &mut W, sample: Option<&Sample>) -> io::Result<()> {
    match sample {
        None => writeln!(out, "{}", NO_SAMPLE_MESSAGE),
        Some(Sample::Continuous(values)) => writeln!(out, "{:?}", values),
        Some(Sample::Discrete(values)) => writeln!(out, "{:?}", values),
    }
}
