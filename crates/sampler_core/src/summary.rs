//! Descriptive statistics for a drawn sample.
//!
//! The standard deviation is the population form (divide by `n`). The label
//! uses the configured mean and sd for Normal draws and the realised sample
//! statistics for Poisson and Binomial draws.

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::distribution::{Distribution, DistributionKind};
use crate::error::{Result, SamplerError};
use crate::sample::Sample;

/// Summary of one drawn sample.
///
/// Built by [`summarise`]; a new draw produces a new summary rather than
/// updating an existing one.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SampleSummary {
    kind: DistributionKind,
    size: usize,
    distribution: Distribution,
    mean: f64,
    std_dev: f64,
    min: f64,
    max: f64,
    label: String,
}

impl SampleSummary {
    /// Distribution family.
    pub fn kind(&self) -> DistributionKind {
        self.kind
    }

    /// Number of values summarised.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Parameters the sample was drawn with.
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Arithmetic mean of the sample.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Population standard deviation of the sample.
    pub fn std_dev(&self) -> f64 {
        self.std_dev
    }

    /// Smallest value.
    pub fn min(&self) -> f64 {
        self.min
    }

    /// Largest value.
    pub fn max(&self) -> f64 {
        self.max
    }

    /// Human-readable title, e.g. for a chart.
    pub fn label(&self) -> &str {
        &self.label
    }
}

/// Computes summary statistics for `sample` drawn from `distribution`.
///
/// # Errors
///
/// Returns [`SamplerError::EmptySample`] for a zero-length sample.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{summarise, Distribution, Sample};
///
/// let sample = Sample::Discrete(vec![1, 2, 3]);
/// let summary = summarise(&sample, &Distribution::Poisson { lam: 2.0 }).unwrap();
/// assert_eq!(summary.mean(), 2.0);
/// assert_eq!(summary.min(), 1.0);
/// assert_eq!(summary.max(), 3.0);
/// ```
pub fn summarise(sample: &Sample, distribution: &Distribution) -> Result<SampleSummary> {
    if sample.is_empty() {
        return Err(SamplerError::EmptySample);
    }

    let n = sample.len() as f64;
    let mean = sample.iter_f64().sum::<f64>() / n;
    let variance = sample.iter_f64().map(|x| (x - mean).powi(2)).sum::<f64>() / n;
    let std_dev = variance.sqrt();

    let (min, max) = sample
        .iter_f64()
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
            (lo.min(x), hi.max(x))
        });

    let kind = distribution.kind();
    let label = match *distribution {
        Distribution::Normal { mean: mu, sd } => format_label(kind, mu, sd),
        Distribution::Poisson { .. } | Distribution::Binomial { .. } => {
            format_label(kind, mean, std_dev)
        }
    };

    Ok(SampleSummary {
        kind,
        size: sample.len(),
        distribution: *distribution,
        mean,
        std_dev,
        min,
        max,
        label,
    })
}

fn format_label(kind: DistributionKind, mean: f64, sd: f64) -> String {
    format!(
        "{} Distribution, Mean: {}, Standard Deviation: {}",
        kind, mean, sd
    )
}
