//! Distribution charts.
//!
//! A [`Histogram`] bins a drawn sample; a [`ChartRenderer`] turns it into
//! something displayable. Two renderers are provided:
//!
//! - [`TextHistogramRenderer`]: horizontal bar chart for the terminal
//! - [`ChartJsRenderer`]: Chart.js compatible bar-chart JSON (`serde` feature)
//!
//! Rendering is independent of sampling: a chart failure never affects the
//! sample it was built from.

use thiserror::Error;

#[cfg(feature = "serde")]
use serde::Serialize;

use crate::sample::Sample;

/// Default number of histogram bins.
pub const DEFAULT_BINS: usize = 20;

/// Chart construction and rendering errors.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ChartError {
    /// Nothing to plot.
    #[error("Cannot chart an empty sample")]
    EmptySample,

    /// A histogram needs at least one bin.
    #[error("Invalid bin count {0}: must be at least 1")]
    InvalidBinCount(usize),

    /// The sample contains NaN or infinite values.
    #[error("Cannot chart non-finite values")]
    NonFinite,

    /// Output could not be serialised.
    #[error("Chart serialisation failed: {0}")]
    Serialisation(String),
}

// =============================================================================
// Histogram
// =============================================================================

/// One histogram bar covering `[lower, upper)`; the last bin is closed.
#[derive(Clone, Debug, PartialEq)]
pub struct Bin {
    /// Inclusive lower edge
    pub lower: f64,
    /// Upper edge
    pub upper: f64,
    /// Number of values in the bin
    pub count: usize,
}

impl Bin {
    /// Axis label for the bin: the value itself for unit-width integer
    /// bins, otherwise the lower edge.
    pub fn label(&self, discrete: bool) -> String {
        if discrete && self.upper - self.lower <= 1.0 {
            format!("{}", self.lower)
        } else {
            format!("{:.3}", self.lower)
        }
    }
}

/// Frequency histogram of a sample.
#[derive(Clone, Debug, PartialEq)]
pub struct Histogram {
    bins: Vec<Bin>,
    discrete: bool,
}

impl Histogram {
    /// Bins `sample` into at most `bins` equal-width buckets spanning
    /// `[min, max]`.
    ///
    /// Integer samples whose range fits in `bins` get one bucket per value.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use sampler_core::chart::Histogram;
    /// use sampler_core::Sample;
    ///
    /// let hist = Histogram::from_sample(&Sample::Discrete(vec![0, 1, 1, 3]), 10).unwrap();
    /// let counts: Vec<usize> = hist.bins().iter().map(|b| b.count).collect();
    /// assert_eq!(counts, vec![1, 2, 0, 1]);
    /// ```
    pub fn from_sample(sample: &Sample, bins: usize) -> Result<Self, ChartError> {
        if bins == 0 {
            return Err(ChartError::InvalidBinCount(bins));
        }
        if sample.is_empty() {
            return Err(ChartError::EmptySample);
        }
        if sample.iter_f64().any(|x| !x.is_finite()) {
            return Err(ChartError::NonFinite);
        }

        let (min, max) = sample
            .iter_f64()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), x| {
                (lo.min(x), hi.max(x))
            });

        let discrete = sample.is_discrete();
        let (start, width, count) = if discrete && (max - min + 1.0) <= bins as f64 {
            (min, 1.0, (max - min) as usize + 1)
        } else if max == min {
            (min, 1.0, 1)
        } else {
            (min, (max - min) / bins as f64, bins)
        };
        // max - min overflows for values near f64::MAX
        if !width.is_finite() {
            return Err(ChartError::NonFinite);
        }

        let mut out: Vec<Bin> = (0..count)
            .map(|i| Bin {
                lower: start + i as f64 * width,
                upper: start + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for x in sample.iter_f64() {
            let idx = (((x - start) / width) as usize).min(count - 1);
            out[idx].count += 1;
        }

        Ok(Self {
            bins: out,
            discrete,
        })
    }

    /// Bins in ascending order.
    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    /// Whether the underlying sample was integer valued.
    pub fn is_discrete(&self) -> bool {
        self.discrete
    }

    /// Largest bin count.
    pub fn max_count(&self) -> usize {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Total number of binned values.
    pub fn total(&self) -> usize {
        self.bins.iter().map(|b| b.count).sum()
    }
}

// =============================================================================
// Renderers
// =============================================================================

/// Turns a histogram into displayable output.
pub trait ChartRenderer {
    /// Renders `histogram` under `title`.
    fn render(&self, histogram: &Histogram, title: &str) -> Result<String, ChartError>;
}

/// Horizontal text bar chart.
#[derive(Clone, Debug)]
pub struct TextHistogramRenderer {
    /// Width of the longest bar in characters
    pub width: usize,
}

impl Default for TextHistogramRenderer {
    fn default() -> Self {
        Self { width: 50 }
    }
}

impl ChartRenderer for TextHistogramRenderer {
    fn render(&self, histogram: &Histogram, title: &str) -> Result<String, ChartError> {
        let max_count = histogram.max_count().max(1);
        let labels: Vec<String> = histogram
            .bins()
            .iter()
            .map(|b| b.label(histogram.is_discrete()))
            .collect();
        let label_width = labels.iter().map(|l| l.len()).max().unwrap_or(0);

        let mut out = String::new();
        out.push_str(title);
        out.push('\n');
        out.push_str(&"=".repeat(title.chars().count()));
        out.push('\n');

        for (bin, label) in histogram.bins().iter().zip(&labels) {
            let bar_len = bin.count * self.width / max_count;
            out.push_str(&format!(
                "{:>lw$} | {} {}\n",
                label,
                "█".repeat(bar_len),
                bin.count,
                lw = label_width
            ));
        }

        Ok(out)
    }
}

/// Chart.js dataset.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartJsDataset {
    /// Dataset label
    pub label: String,
    /// Bar heights
    pub data: Vec<usize>,
    /// Bar colour
    pub background_color: String,
}

/// Chart.js data block.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsData {
    /// X axis labels
    pub labels: Vec<String>,
    /// Datasets
    pub datasets: Vec<ChartJsDataset>,
}

/// Chart.js title options.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsTitleOptions {
    /// Whether the title is shown
    pub display: bool,
    /// Title text
    pub text: String,
}

/// Chart.js options.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsOptions {
    /// Title settings
    pub title: ChartJsTitleOptions,
}

/// Chart.js compatible bar chart.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Serialize)]
pub struct ChartJsBarChart {
    /// Chart type, always "bar"
    #[serde(rename = "type")]
    pub chart_type: String,
    /// Chart data
    pub data: ChartJsData,
    /// Chart options
    pub options: ChartJsOptions,
}

/// Renders Chart.js compatible JSON.
#[cfg(feature = "serde")]
#[derive(Clone, Debug, Default)]
pub struct ChartJsRenderer;

#[cfg(feature = "serde")]
impl ChartJsRenderer {
    /// Builds the Chart.js structure for `histogram`.
    pub fn to_chartjs(&self, histogram: &Histogram, title: &str) -> ChartJsBarChart {
        let discrete = histogram.is_discrete();
        ChartJsBarChart {
            chart_type: "bar".to_string(),
            data: ChartJsData {
                labels: histogram.bins().iter().map(|b| b.label(discrete)).collect(),
                datasets: vec![ChartJsDataset {
                    label: "Frequency".to_string(),
                    data: histogram.bins().iter().map(|b| b.count).collect(),
                    background_color: "#4CAF50".to_string(),
                }],
            },
            options: ChartJsOptions {
                title: ChartJsTitleOptions {
                    display: true,
                    text: title.to_string(),
                },
            },
        }
    }
}

#[cfg(feature = "serde")]
impl ChartRenderer for ChartJsRenderer {
    fn render(&self, histogram: &Histogram, title: &str) -> Result<String, ChartError> {
        serde_json::to_string_pretty(&self.to_chartjs(histogram, title))
            .map_err(|e| ChartError::Serialisation(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn counts(h: &Histogram) -> Vec<usize> {
        h.bins().iter().map(|b| b.count).collect()
    }

    #[test]
    fn test_discrete_one_bin_per_value() {
        let h = Histogram::from_sample(&Sample::Discrete(vec![2, 2, 3, 5]), 20).unwrap();
        assert_eq!(counts(&h), vec![2, 1, 0, 1]);
        assert_eq!(h.bins()[0].lower, 2.0);
        assert_eq!(h.total(), 4);
    }

    #[test]
    fn test_discrete_wide_range_uses_equal_width() {
        let values: Vec<u64> = (0..100).collect();
        let h = Histogram::from_sample(&Sample::Discrete(values), 10).unwrap();
        assert_eq!(h.bins().len(), 10);
        assert_eq!(h.total(), 100);
    }

    #[test]
    fn test_continuous_max_lands_in_last_bin() {
        let h = Histogram::from_sample(&Sample::Continuous(vec![0.0, 0.5, 1.0]), 2).unwrap();
        assert_eq!(counts(&h), vec![1, 2]);
    }

    #[test]
    fn test_constant_sample_single_bin() {
        let h = Histogram::from_sample(&Sample::Continuous(vec![3.0; 5]), 10).unwrap();
        assert_eq!(counts(&h), vec![5]);
    }

    #[test]
    fn test_errors() {
        assert_eq!(
            Histogram::from_sample(&Sample::Discrete(vec![1]), 0),
            Err(ChartError::InvalidBinCount(0))
        );
        assert_eq!(
            Histogram::from_sample(&Sample::Discrete(Vec::new()), 5),
            Err(ChartError::EmptySample)
        );
        assert_eq!(
            Histogram::from_sample(&Sample::Continuous(vec![1.0, f64::NAN]), 5),
            Err(ChartError::NonFinite)
        );
    }

    #[test]
    fn test_overflowing_range_rejected() {
        let sample = Sample::Continuous(vec![-1e308, 0.0, 1e308]);
        assert_eq!(Histogram::from_sample(&sample, 10), Err(ChartError::NonFinite));
    }

    #[test]
    fn test_text_renderer() {
        let h = Histogram::from_sample(&Sample::Discrete(vec![0, 1, 1]), 10).unwrap();
        let text = TextHistogramRenderer { width: 10 }
            .render(&h, "Poisson Distribution")
            .unwrap();

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Poisson Distribution");
        assert_eq!(lines[1], "=".repeat("Poisson Distribution".len()));
        assert_eq!(lines[2], "0 | █████ 1");
        assert_eq!(lines[3], "1 | ██████████ 2");
    }

    #[cfg(feature = "serde")]
    #[test]
    fn test_chartjs_renderer() {
        let h = Histogram::from_sample(&Sample::Discrete(vec![4, 5, 5]), 10).unwrap();
        let json = ChartJsRenderer.render(&h, "Binomial").unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["type"], "bar");
        assert_eq!(value["data"]["labels"][0], "4");
        assert_eq!(value["data"]["datasets"][0]["data"][1], 2);
        assert_eq!(value["data"]["datasets"][0]["backgroundColor"], "#4CAF50");
        assert_eq!(value["options"]["title"]["text"], "Binomial");
    }
}
