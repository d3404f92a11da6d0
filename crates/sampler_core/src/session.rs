//! Stateful sampling session.
//!
//! [`DistributionSampler`] keeps the current parameters together with the
//! last sample and its summary, for callers that prefer to set parameters
//! incrementally and draw repeatedly. Each session owns its generator;
//! concurrent callers should use one session per thread, each with its own
//! seed.

use tracing::info;

use crate::error::{Result, SamplerError};
use crate::generate::generate;
use crate::request::{ParameterUpdate, SampleRequest};
use crate::rng::SamplerRng;
use crate::sample::Sample;
use crate::summary::{summarise, SampleSummary};
use crate::validate::{validate, IrrelevantParameterWarning};

/// Result of the most recent successful draw.
#[derive(Clone, Debug)]
struct Draw {
    sample: Sample,
    summary: Option<SampleSummary>,
    warnings: Vec<IrrelevantParameterWarning>,
}

/// Caller-held sampler holding the last request, sample and summary.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{DistributionSampler, ParameterUpdate};
///
/// let mut sampler = DistributionSampler::with_seed(42);
/// sampler.set_parameters(
///     ParameterUpdate::default().kind("Poisson").size(1000).lam(5.0),
/// );
/// let sample = sampler.draw().unwrap();
/// assert_eq!(sample.len(), 1000);
///
/// let summary = sampler.summary().unwrap();
/// assert!((summary.mean() - 5.0).abs() < 0.5);
/// ```
#[derive(Debug)]
pub struct DistributionSampler {
    request: SampleRequest,
    rng: SamplerRng,
    last: Option<Draw>,
}

impl DistributionSampler {
    /// Creates an empty session with an entropy-seeded generator.
    pub fn new() -> Self {
        Self::with_rng(SamplerRng::from_entropy())
    }

    /// Creates an empty session with a seeded generator.
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(SamplerRng::from_seed(seed))
    }

    /// Creates an empty session using the given generator.
    pub fn with_rng(rng: SamplerRng) -> Self {
        Self {
            request: SampleRequest::default(),
            rng,
            last: None,
        }
    }

    /// Creates a session from a request, drawing immediately when the
    /// request is complete.
    ///
    /// An incomplete request is stored without drawing. A complete but
    /// invalid one fails here.
    pub fn with_request(request: SampleRequest, rng: SamplerRng) -> Result<Self> {
        let mut sampler = Self::with_rng(rng);
        let draw_now = request.is_complete();
        sampler.request = request;
        if draw_now {
            sampler.draw()?;
        }
        Ok(sampler)
    }

    /// Current parameters.
    pub fn request(&self) -> &SampleRequest {
        &self.request
    }

    /// Seed of the session generator, if it was seeded explicitly.
    pub fn seed(&self) -> Option<u64> {
        self.rng.seed()
    }

    /// Overwrites the parameters present in `update`.
    ///
    /// The last sample and summary are kept until the next successful draw.
    pub fn set_parameters(&mut self, update: ParameterUpdate) {
        self.request.apply(update);
    }

    /// Replaces the whole request.
    pub fn set_request(&mut self, request: SampleRequest) {
        self.request = request;
    }

    /// Validates the current parameters, draws a new sample and summarises it.
    ///
    /// On failure the previous sample and summary are left untouched. A
    /// zero-size draw succeeds with an empty sample and no summary.
    pub fn draw(&mut self) -> Result<&Sample> {
        let validated = validate(&self.request)?;
        let sample = generate(&validated, &mut self.rng)?;

        let summary = match summarise(&sample, validated.distribution()) {
            Ok(summary) => Some(summary),
            Err(SamplerError::EmptySample) => None,
            Err(e) => return Err(e),
        };

        info!(kind = %validated.kind(), size = sample.len(), "{} distribution created", validated.kind());

        let draw = self.last.insert(Draw {
            sample,
            summary,
            warnings: validated.warnings().to_vec(),
        });
        Ok(&draw.sample)
    }

    /// Draws with `update` applied first.
    pub fn draw_with(&mut self, update: ParameterUpdate) -> Result<&Sample> {
        self.set_parameters(update);
        self.draw()
    }

    /// Last drawn sample, if any.
    pub fn sample(&self) -> Option<&Sample> {
        self.last.as_ref().map(|draw| &draw.sample)
    }

    /// Summary of the last drawn sample.
    ///
    /// # Errors
    ///
    /// - [`SamplerError::NoSample`] if nothing has been drawn yet
    /// - [`SamplerError::EmptySample`] if the last draw had size zero
    pub fn summary(&self) -> Result<&SampleSummary> {
        let draw = self.last.as_ref().ok_or(SamplerError::NoSample)?;
        draw.summary.as_ref().ok_or(SamplerError::EmptySample)
    }

    /// Warnings raised while validating the last successful draw.
    pub fn warnings(&self) -> &[IrrelevantParameterWarning] {
        self.last
            .as_ref()
            .map(|draw| draw.warnings.as_slice())
            .unwrap_or(&[])
    }
}

impl Default for DistributionSampler {
    fn default() -> Self {
        Self::new()
    }
}
