//! Caller-facing sample request.
//!
//! A [`SampleRequest`] mirrors what a caller can type: a distribution label,
//! a size and any combination of optional parameters. Nothing is checked
//! here; [`validate`](crate::validate::validate) turns a request into a
//! [`ValidatedRequest`](crate::validate::ValidatedRequest).

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Result, SamplerError};

/// Unvalidated sampling request.
///
/// # Examples
///
/// ```rust
/// use sampler_core::SampleRequest;
///
/// let request = SampleRequest::new("Binomial", 1000).trials(10).prob(0.5);
/// assert_eq!(request.size, Some(1000));
/// assert_eq!(request.trials, Some(10));
/// assert!(request.mean.is_none());
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default, deny_unknown_fields))]
pub struct SampleRequest {
    /// Distribution label: "Normal", "Poisson" or "Binomial"
    pub kind: String,
    /// Number of values to draw; mandatory
    pub size: Option<i64>,
    /// Normal location
    pub mean: Option<f64>,
    /// Normal scale
    pub sd: Option<f64>,
    /// Poisson rate
    pub lam: Option<f64>,
    /// Binomial trial count
    pub trials: Option<u64>,
    /// Binomial success probability
    pub prob: Option<f64>,
}

impl SampleRequest {
    /// Creates a request with no distribution parameters set.
    pub fn new(kind: impl Into<String>, size: i64) -> Self {
        Self {
            kind: kind.into(),
            size: Some(size),
            ..Self::default()
        }
    }

    /// Sets the Normal location.
    #[inline]
    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Sets the Normal scale.
    #[inline]
    pub fn sd(mut self, sd: f64) -> Self {
        self.sd = Some(sd);
        self
    }

    /// Sets the Poisson rate.
    #[inline]
    pub fn lam(mut self, lam: f64) -> Self {
        self.lam = Some(lam);
        self
    }

    /// Sets the Binomial trial count.
    #[inline]
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Sets the Binomial success probability.
    #[inline]
    pub fn prob(mut self, prob: f64) -> Self {
        self.prob = Some(prob);
        self
    }

    /// Returns `true` when the label, the size and the parameters of at
    /// least one distribution are present, i.e. when a draw is worth
    /// attempting.
    pub fn is_complete(&self) -> bool {
        !self.kind.is_empty()
            && self.size.is_some()
            && ((self.mean.is_some() && self.sd.is_some())
                || self.lam.is_some()
                || (self.trials.is_some() && self.prob.is_some()))
    }

    /// Applies every field present in `update`, leaving the rest unchanged.
    pub fn apply(&mut self, update: ParameterUpdate) {
        if let Some(kind) = update.kind {
            self.kind = kind;
        }
        if update.size.is_some() {
            self.size = update.size;
        }
        if update.mean.is_some() {
            self.mean = update.mean;
        }
        if update.sd.is_some() {
            self.sd = update.sd;
        }
        if update.lam.is_some() {
            self.lam = update.lam;
        }
        if update.trials.is_some() {
            self.trials = update.trials;
        }
        if update.prob.is_some() {
            self.prob = update.prob;
        }
    }
}

/// Partial update for a stored request.
///
/// `None` means "leave unchanged". Use [`ParameterUpdate::default`] and the
/// setters to change individual fields.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ParameterUpdate {
    kind: Option<String>,
    size: Option<i64>,
    mean: Option<f64>,
    sd: Option<f64>,
    lam: Option<f64>,
    trials: Option<u64>,
    prob: Option<f64>,
}

impl ParameterUpdate {
    /// Replaces the distribution label.
    pub fn kind(mut self, kind: impl Into<String>) -> Self {
        self.kind = Some(kind.into());
        self
    }

    /// Replaces the sample size.
    pub fn size(mut self, size: i64) -> Self {
        self.size = Some(size);
        self
    }

    /// Replaces the Normal location.
    pub fn mean(mut self, mean: f64) -> Self {
        self.mean = Some(mean);
        self
    }

    /// Replaces the Normal scale.
    pub fn sd(mut self, sd: f64) -> Self {
        self.sd = Some(sd);
        self
    }

    /// Replaces the Poisson rate.
    pub fn lam(mut self, lam: f64) -> Self {
        self.lam = Some(lam);
        self
    }

    /// Replaces the Binomial trial count.
    pub fn trials(mut self, trials: u64) -> Self {
        self.trials = Some(trials);
        self
    }

    /// Replaces the Binomial success probability.
    pub fn prob(mut self, prob: f64) -> Self {
        self.prob = Some(prob);
        self
    }
}

/// Parses a textual sample size.
///
/// Only integer literals are accepted: `"10.5"`, `"1e3"` and `"ten"` all
/// fail with [`SamplerError::InvalidSize`].
///
/// # Examples
///
/// ```rust
/// use sampler_core::parse_size;
///
/// assert_eq!(parse_size("500").unwrap(), 500);
/// assert!(parse_size("10.5").is_err());
/// ```
pub fn parse_size(text: &str) -> Result<i64> {
    text.trim()
        .parse::<i64>()
        .map_err(|_| SamplerError::InvalidSize {
            value: text.to_string(),
        })
}
