//! Error types for sampling operations.
//!
//! This module provides:
//! - `SamplerError`: Fatal errors from validation, generation and summary
//! - `Result`: Convenience alias used throughout the crate
//!
//! Irrelevant parameters are not errors; see
//! [`IrrelevantParameterWarning`](crate::validate::IrrelevantParameterWarning).

use thiserror::Error;

use crate::distribution::DistributionKind;

/// Boxed cause reported by the underlying random generator.
pub type GeneratorCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Categorised sampling errors.
///
/// Every variant is fatal: the current call is aborted and no partial
/// sample is returned.
///
/// # Examples
/// ```
/// use sampler_core::SamplerError;
///
/// let err = SamplerError::InvalidDistributionKind { kind: "Gaussian".to_string() };
/// assert!(err.to_string().contains("Gaussian"));
/// ```
#[derive(Debug, Error)]
pub enum SamplerError {
    /// The distribution label is not one of Normal, Poisson or Binomial.
    #[error("Invalid distribution kind '{kind}': must be one of 'Normal', 'Poisson' or 'Binomial'")]
    InvalidDistributionKind {
        /// The rejected label
        kind: String,
    },

    /// The sample size is not a non-negative integer.
    #[error("Invalid sample size '{value}': must be a non-negative integer")]
    InvalidSize {
        /// The rejected value as supplied
        value: String,
    },

    /// A parameter mandatory for the selected distribution is absent.
    #[error("Missing required parameter(s) for {kind} distribution: {}", missing.join(", "))]
    MissingRequiredParameter {
        /// Distribution being requested
        kind: DistributionKind,
        /// Names of the absent parameters
        missing: Vec<&'static str>,
    },

    /// The underlying generator rejected a parameter value.
    #[error("Failed to generate {kind} sample: {source}")]
    GenerationFailed {
        /// Distribution being generated
        kind: DistributionKind,
        /// Error reported by `rand_distr`
        #[source]
        source: GeneratorCause,
    },

    /// Summary statistics requested for a zero-length sample.
    #[error("Cannot summarise an empty sample: mean and standard deviation are undefined")]
    EmptySample,

    /// Summary requested from a session that has not drawn a sample yet.
    #[error("No sample has been drawn yet: set the parameters and call draw() first")]
    NoSample,
}

impl SamplerError {
    /// Wraps a generator error for the given distribution.
    pub(crate) fn generation<E>(kind: DistributionKind, source: E) -> Self
    where
        E: std::error::Error + Send + Sync + 'static,
    {
        Self::GenerationFailed {
            kind,
            source: Box::new(source),
        }
    }
}

/// Result alias for sampling operations.
pub type Result<T> = std::result::Result<T, SamplerError>;
