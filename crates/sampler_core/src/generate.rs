//! Sample generation.
//!
//! Dispatches a [`ValidatedRequest`] to the matching `rand_distr`
//! distribution and draws exactly `size` values. Parameter values rejected
//! by `rand_distr` fail immediately with
//! [`SamplerError::GenerationFailed`]; nothing is retried.

use rand::Rng;
use rand_distr::{Binomial, Distribution as _, Normal, NormalError, Poisson};
use tracing::debug;

use crate::distribution::{Distribution, DistributionKind};
use crate::error::{Result, SamplerError};
use crate::request::SampleRequest;
use crate::rng::SamplerRng;
use crate::sample::Sample;
use crate::validate::{validate, ValidatedRequest};

/// Validates `request` and draws a sample from an entropy-seeded generator.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{sample, SampleRequest};
///
/// let s = sample(&SampleRequest::new("Binomial", 1000).trials(10).prob(0.5)).unwrap();
/// assert_eq!(s.len(), 1000);
/// assert!(s.as_discrete().unwrap().iter().all(|&k| k <= 10));
/// ```
pub fn sample(request: &SampleRequest) -> Result<Sample> {
    sample_with_rng(request, &mut SamplerRng::from_entropy())
}

/// Validates `request` and draws a sample from the given generator.
///
/// # Examples
///
/// ```rust
/// use sampler_core::{sample_with_rng, SampleRequest, SamplerRng};
///
/// let request = SampleRequest::new("Normal", 100).mean(0.0).sd(1.0);
/// let a = sample_with_rng(&request, &mut SamplerRng::from_seed(42)).unwrap();
/// let b = sample_with_rng(&request, &mut SamplerRng::from_seed(42)).unwrap();
/// assert_eq!(a, b);
/// ```
pub fn sample_with_rng<R: Rng + ?Sized>(request: &SampleRequest, rng: &mut R) -> Result<Sample> {
    let validated = validate(request)?;
    generate(&validated, rng)
}

/// Draws `validated.size()` values from the validated distribution.
///
/// # Errors
///
/// Returns [`SamplerError::GenerationFailed`] for an out-of-range
/// parameter: a negative or NaN `sd`, a negative `lam` or a `prob` outside
/// [0, 1].
pub fn generate<R: Rng + ?Sized>(validated: &ValidatedRequest, rng: &mut R) -> Result<Sample> {
    let size = validated.size();

    let sample = match *validated.distribution() {
        Distribution::Normal { mean, sd } => generate_normal(size, mean, sd, rng)?,
        Distribution::Poisson { lam } => generate_poisson(size, lam, rng)?,
        Distribution::Binomial { trials, prob } => generate_binomial(size, trials, prob, rng)?,
    };

    debug!(kind = %validated.kind(), size, "Sample generated");
    Ok(sample)
}

fn generate_normal<R: Rng + ?Sized>(size: usize, mean: f64, sd: f64, rng: &mut R) -> Result<Sample> {
    // rand_distr accepts a negative scale and mirrors the draws
    if sd.is_nan() || sd < 0.0 {
        return Err(SamplerError::generation(
            DistributionKind::Normal,
            NormalError::BadVariance,
        ));
    }

    let normal = Normal::new(mean, sd)
        .map_err(|e| SamplerError::generation(DistributionKind::Normal, e))?;

    Ok(Sample::Continuous(
        (0..size).map(|_| normal.sample(rng)).collect(),
    ))
}

fn generate_poisson<R: Rng + ?Sized>(size: usize, lam: f64, rng: &mut R) -> Result<Sample> {
    // Degenerate at zero; rand_distr only accepts a strictly positive rate
    if lam == 0.0 {
        return Ok(Sample::Discrete(vec![0; size]));
    }

    let poisson = Poisson::new(lam)
        .map_err(|e| SamplerError::generation(DistributionKind::Poisson, e))?;

    Ok(Sample::Discrete(
        (0..size)
            .map(|_| {
                let k: f64 = poisson.sample(rng);
                k as u64
            })
            .collect(),
    ))
}

fn generate_binomial<R: Rng + ?Sized>(
    size: usize,
    trials: u64,
    prob: f64,
    rng: &mut R,
) -> Result<Sample> {
    let binomial = Binomial::new(trials, prob)
        .map_err(|e| SamplerError::generation(DistributionKind::Binomial, e))?;

    Ok(Sample::Discrete(
        (0..size).map(|_| binomial.sample(rng)).collect(),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn rng() -> SamplerRng {
        SamplerRng::from_seed(42)
    }

    #[test]
    fn test_normal_length() {
        let s = sample_with_rng(&SampleRequest::new("Normal", 1000).mean(0.0).sd(5.0), &mut rng())
            .unwrap();
        assert_eq!(s.len(), 1000);
        assert!(!s.is_discrete());
    }

    #[test]
    fn test_normal_zero_sd_is_degenerate() {
        let s = sample_with_rng(&SampleRequest::new("Normal", 50).mean(3.5).sd(0.0), &mut rng())
            .unwrap();
        for v in s.as_continuous().unwrap() {
            assert_relative_eq!(*v, 3.5);
        }
    }

    #[test]
    fn test_normal_negative_sd_fails() {
        for sd in [-1.0, -1e-12, f64::NAN] {
            let err =
                sample_with_rng(&SampleRequest::new("Normal", 10).mean(0.0).sd(sd), &mut rng())
                    .unwrap_err();
            assert!(
                matches!(
                    err,
                    SamplerError::GenerationFailed {
                        kind: DistributionKind::Normal,
                        ..
                    }
                ),
                "sd = {} should be rejected",
                sd
            );
        }
    }

    #[test]
    fn test_poisson_zero_rate() {
        let s = sample_with_rng(&SampleRequest::new("Poisson", 20).lam(0.0), &mut rng()).unwrap();
        assert_eq!(s, Sample::Discrete(vec![0; 20]));
    }

    #[test]
    fn test_poisson_negative_rate_fails() {
        let err = sample_with_rng(&SampleRequest::new("Poisson", 20).lam(-2.0), &mut rng())
            .unwrap_err();
        assert!(matches!(
            err,
            SamplerError::GenerationFailed {
                kind: DistributionKind::Poisson,
                ..
            }
        ));
    }

    #[test]
    fn test_binomial_probability_out_of_range_fails() {
        for prob in [-0.1, 1.5] {
            let err = sample_with_rng(
                &SampleRequest::new("Binomial", 5).trials(10).prob(prob),
                &mut rng(),
            )
            .unwrap_err();
            assert!(matches!(
                err,
                SamplerError::GenerationFailed {
                    kind: DistributionKind::Binomial,
                    ..
                }
            ));
        }
    }

    #[test]
    fn test_binomial_edge_probabilities() {
        let zero = sample_with_rng(&SampleRequest::new("Binomial", 30).trials(8).prob(0.0), &mut rng())
            .unwrap();
        assert!(zero.as_discrete().unwrap().iter().all(|&k| k == 0));

        let one = sample_with_rng(&SampleRequest::new("Binomial", 30).trials(8).prob(1.0), &mut rng())
            .unwrap();
        assert!(one.as_discrete().unwrap().iter().all(|&k| k == 8));
    }

    #[test]
    fn test_zero_size_yields_empty_sample() {
        let s = sample_with_rng(&SampleRequest::new("Normal", 0).mean(0.0).sd(1.0), &mut rng())
            .unwrap();
        assert!(s.is_empty());
    }

    #[test]
    fn test_validation_runs_before_generation() {
        let err = sample_with_rng(&SampleRequest::new("Normal", 10).sd(-1.0), &mut rng())
            .unwrap_err();
        // Missing mean wins over the invalid scale
        assert!(matches!(err, SamplerError::MissingRequiredParameter { .. }));
    }

    #[test]
    fn test_generate_from_validated_request() {
        let validated = validate(&SampleRequest::new("Poisson", 500).lam(3.0)).unwrap();
        let s = generate(&validated, &mut rng()).unwrap();
        assert_eq!(s.as_discrete().unwrap().len(), 500);
    }

    #[test]
    fn test_entropy_sample() {
        let s = sample(&SampleRequest::new("Poisson", 50).lam(2.0)).unwrap();
        assert_eq!(s.len(), 50);
    }
}
