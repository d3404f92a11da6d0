//! # sampler_core: Validated Sampling from Named Distributions
//!
//! Draws random samples from a Normal, Poisson or Binomial distribution
//! after checking the caller's parameters for the selected kind, and
//! derives summary statistics from the result.
//!
//! ## Pipeline
//!
//! 1. [`validate()`]: label, size and per-kind required parameters; unused
//!    parameters raise a non-fatal [`IrrelevantParameterWarning`]
//! 2. [`generate()`]: dispatch to `rand_distr` (`Normal`, `Poisson`, `Binomial`)
//! 3. [`summarise`]: size, mean, population standard deviation, min, max
//!    and a chart label
//!
//! [`sample()`] and [`sample_with_rng`] run steps 1 and 2 in one call.
//! [`DistributionSampler`] keeps the last request, sample and summary for
//! callers that draw repeatedly.
//!
//! ## Usage Examples
//!
//! ```rust
//! use sampler_core::{sample_with_rng, summarise, validate, SampleRequest, SamplerRng};
//!
//! let request = SampleRequest::new("Poisson", 500).lam(3.0);
//! let validated = validate(&request).unwrap();
//!
//! let mut rng = SamplerRng::from_seed(42);
//! let sample = sampler_core::generate(&validated, &mut rng).unwrap();
//! assert_eq!(sample.len(), 500);
//!
//! let summary = summarise(&sample, validated.distribution()).unwrap();
//! assert!((summary.mean() - 3.0).abs() < 0.5);
//!
//! // Or in one step
//! let again = sample_with_rng(&request, &mut SamplerRng::from_seed(42)).unwrap();
//! assert_eq!(again, sample);
//! ```
//!
//! ## Collaborators
//!
//! - [`report`]: plain-text parameter, sample and summary blocks
//! - [`chart`]: histograms rendered as text or Chart.js JSON
//!
//! ## Feature Flags
//!
//! - `serde` (default): request deserialisation, JSON summaries and the
//!   Chart.js renderer

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod chart;
pub mod distribution;
pub mod error;
pub mod generate;
pub mod report;
pub mod request;
pub mod rng;
pub mod sample;
pub mod session;
pub mod summary;
pub mod validate;

pub use distribution::{Distribution, DistributionKind};
pub use error::{Result, SamplerError};
pub use generate::{generate, sample, sample_with_rng};
pub use request::{parse_size, ParameterUpdate, SampleRequest};
pub use rng::SamplerRng;
pub use sample::Sample;
pub use session::DistributionSampler;
pub use summary::{summarise, SampleSummary};
pub use validate::{validate, IrrelevantParameterWarning, ValidatedRequest};
