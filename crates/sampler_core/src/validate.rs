//! Parameter validation.
//!
//! Checks run in a fixed order:
//!
//! 1. The distribution label must name a supported kind.
//! 2. The size must be present and a non-negative integer.
//! 3. Every parameter the kind requires must be present.
//! 4. Parameters the kind does not use produce a warning and are ignored.
//!
//! Only step 4 is non-fatal. Value ranges (e.g. `prob` in [0, 1]) are the
//! generator's concern.

use std::fmt;

use tracing::{debug, warn};

use crate::distribution::{Distribution, DistributionKind};
use crate::error::{Result, SamplerError};
use crate::request::SampleRequest;

/// Parameters supplied for a distribution that does not use them.
///
/// Emitted through `tracing` at warn level and kept on the
/// [`ValidatedRequest`] so callers can surface it themselves.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IrrelevantParameterWarning {
    /// Distribution that was requested
    pub kind: DistributionKind,
    /// Names of the ignored parameters
    pub ignored: Vec<&'static str>,
}

impl fmt::Display for IrrelevantParameterWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "The {} parameter(s) are not used in the selection of a {} distribution and will be ignored",
            self.ignored.join(", "),
            self.kind
        )
    }
}

/// A request that passed validation.
///
/// Can only be built by [`validate`], so holding one guarantees the
/// distribution parameters are all present.
#[derive(Clone, Debug, PartialEq)]
pub struct ValidatedRequest {
    size: usize,
    distribution: Distribution,
    warnings: Vec<IrrelevantParameterWarning>,
}

impl ValidatedRequest {
    /// Number of values to draw.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Distribution and its parameters.
    #[inline]
    pub fn distribution(&self) -> &Distribution {
        &self.distribution
    }

    /// Distribution family.
    #[inline]
    pub fn kind(&self) -> DistributionKind {
        self.distribution.kind()
    }

    /// Non-fatal warnings raised during validation.
    #[inline]
    pub fn warnings(&self) -> &[IrrelevantParameterWarning] {
        &self.warnings
    }
}

/// Validates a request for its selected distribution.
///
/// # Errors
///
/// - [`SamplerError::InvalidDistributionKind`] for an unsupported label
/// - [`SamplerError::InvalidSize`] for a missing or negative size
/// - [`SamplerError::MissingRequiredParameter`] when a required field is absent
///
/// # Examples
///
/// ```rust
/// use sampler_core::{validate, SampleRequest, SamplerError};
///
/// let ok = validate(&SampleRequest::new("Poisson", 500).lam(3.0)).unwrap();
/// assert_eq!(ok.size(), 500);
/// assert!(ok.warnings().is_empty());
///
/// let err = validate(&SampleRequest::new("Normal", 10).mean(0.0)).unwrap_err();
/// assert!(matches!(err, SamplerError::MissingRequiredParameter { .. }));
/// ```
pub fn validate(request: &SampleRequest) -> Result<ValidatedRequest> {
    let kind: DistributionKind = request.kind.parse()?;

    let size = match request.size {
        Some(size) => usize::try_from(size).map_err(|_| SamplerError::InvalidSize {
            value: size.to_string(),
        })?,
        None => {
            return Err(SamplerError::InvalidSize {
                value: "None".to_string(),
            })
        }
    };

    let distribution = required_parameters(kind, request)?;

    let mut warnings = Vec::new();
    let ignored = irrelevant_parameters(kind, request);
    if !ignored.is_empty() {
        let warning = IrrelevantParameterWarning { kind, ignored };
        warn!("{}", warning);
        warnings.push(warning);
    }

    debug!(%kind, size, "Request validated");

    Ok(ValidatedRequest {
        size,
        distribution,
        warnings,
    })
}

fn required_parameters(kind: DistributionKind, request: &SampleRequest) -> Result<Distribution> {
    let missing = |names: &[(&'static str, bool)]| -> Vec<&'static str> {
        names
            .iter()
            .filter(|(_, present)| !present)
            .map(|(name, _)| *name)
            .collect()
    };

    match kind {
        DistributionKind::Normal => match (request.mean, request.sd) {
            (Some(mean), Some(sd)) => Ok(Distribution::Normal { mean, sd }),
            (mean, sd) => Err(SamplerError::MissingRequiredParameter {
                kind,
                missing: missing(&[("mean", mean.is_some()), ("sd", sd.is_some())]),
            }),
        },
        DistributionKind::Poisson => match request.lam {
            Some(lam) => Ok(Distribution::Poisson { lam }),
            None => Err(SamplerError::MissingRequiredParameter {
                kind,
                missing: vec!["lam"],
            }),
        },
        DistributionKind::Binomial => match (request.trials, request.prob) {
            (Some(trials), Some(prob)) => Ok(Distribution::Binomial { trials, prob }),
            (trials, prob) => Err(SamplerError::MissingRequiredParameter {
                kind,
                missing: missing(&[("trials", trials.is_some()), ("prob", prob.is_some())]),
            }),
        },
    }
}

fn irrelevant_parameters(kind: DistributionKind, request: &SampleRequest) -> Vec<&'static str> {
    let supplied = [
        ("mean", request.mean.is_some()),
        ("sd", request.sd.is_some()),
        ("lam", request.lam.is_some()),
        ("trials", request.trials.is_some()),
        ("prob", request.prob.is_some()),
    ];

    let relevant: &[&str] = match kind {
        DistributionKind::Normal => &["mean", "sd"],
        DistributionKind::Poisson => &["lam"],
        DistributionKind::Binomial => &["trials", "prob"],
    };

    supplied
        .iter()
        .filter(|(name, present)| *present && !relevant.contains(name))
        .map(|(name, _)| *name)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_normal() {
        let v = validate(&SampleRequest::new("Normal", 1000).mean(0.0).sd(5.0)).unwrap();
        assert_eq!(v.size(), 1000);
        assert_eq!(v.kind(), DistributionKind::Normal);
        assert_eq!(*v.distribution(), Distribution::Normal { mean: 0.0, sd: 5.0 });
        assert!(v.warnings().is_empty());
    }

    #[test]
    fn test_valid_binomial() {
        let v = validate(&SampleRequest::new("Binomial", 10).trials(5).prob(0.5)).unwrap();
        assert_eq!(
            *v.distribution(),
            Distribution::Binomial {
                trials: 5,
                prob: 0.5
            }
        );
    }

    #[test]
    fn test_unsupported_kind() {
        let err = validate(&SampleRequest::new("Gaussian", 10).mean(0.0).sd(1.0)).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidDistributionKind { .. }));
    }

    #[test]
    fn test_kind_checked_before_size() {
        let err = validate(&SampleRequest::new("Uniform", -1)).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidDistributionKind { .. }));
    }

    #[test]
    fn test_negative_size() {
        let err = validate(&SampleRequest::new("Poisson", -5).lam(1.0)).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidSize { ref value } if value == "-5"));
    }

    #[test]
    fn test_missing_size() {
        let request = SampleRequest {
            kind: "Poisson".to_string(),
            lam: Some(3.0),
            ..SampleRequest::default()
        };
        let err = validate(&request).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidSize { ref value } if value == "None"));
    }

    #[test]
    fn test_zero_size_is_accepted() {
        let v = validate(&SampleRequest::new("Poisson", 0).lam(1.0)).unwrap();
        assert_eq!(v.size(), 0);
    }

    #[test]
    fn test_size_checked_before_parameters() {
        let err = validate(&SampleRequest::new("Normal", -1)).unwrap_err();
        assert!(matches!(err, SamplerError::InvalidSize { .. }));
    }

    #[test]
    fn test_normal_missing_sd() {
        let err = validate(&SampleRequest::new("Normal", 10).mean(0.0)).unwrap_err();
        match err {
            SamplerError::MissingRequiredParameter { kind, missing } => {
                assert_eq!(kind, DistributionKind::Normal);
                assert_eq!(missing, vec!["sd"]);
            }
            other => panic!("Expected MissingRequiredParameter, got {:?}", other),
        }
    }

    #[test]
    fn test_normal_missing_both() {
        let err = validate(&SampleRequest::new("Normal", 10)).unwrap_err();
        assert!(matches!(
            err,
            SamplerError::MissingRequiredParameter { ref missing, .. } if missing == &["mean", "sd"]
        ));
    }

    #[test]
    fn test_poisson_missing_lam() {
        let err = validate(&SampleRequest::new("Poisson", 10).mean(3.0)).unwrap_err();
        assert!(matches!(
            err,
            SamplerError::MissingRequiredParameter { ref missing, .. } if missing == &["lam"]
        ));
    }

    #[test]
    fn test_binomial_missing_prob() {
        let err = validate(&SampleRequest::new("Binomial", 10).trials(3)).unwrap_err();
        assert!(matches!(
            err,
            SamplerError::MissingRequiredParameter { ref missing, .. } if missing == &["prob"]
        ));
    }

    #[test]
    fn test_normal_with_lam_warns() {
        let v = validate(&SampleRequest::new("Normal", 10).mean(0.0).sd(1.0).lam(3.0)).unwrap();
        assert_eq!(
            v.warnings(),
            &[IrrelevantParameterWarning {
                kind: DistributionKind::Normal,
                ignored: vec!["lam"],
            }]
        );
    }

    #[test]
    fn test_poisson_irrelevant_parameters() {
        let request = SampleRequest::new("Poisson", 10)
            .lam(2.0)
            .mean(1.0)
            .sd(1.0)
            .trials(4)
            .prob(0.2);
        let v = validate(&request).unwrap();
        assert_eq!(v.warnings()[0].ignored, vec!["mean", "sd", "trials", "prob"]);
    }

    #[test]
    fn test_binomial_irrelevant_parameters() {
        let request = SampleRequest::new("Binomial", 10).trials(4).prob(0.2).lam(1.0);
        let v = validate(&request).unwrap();
        assert_eq!(v.warnings().len(), 1);
        assert_eq!(v.warnings()[0].ignored, vec!["lam"]);
    }

    #[test]
    fn test_ranges_are_not_checked_here() {
        // Negative scale is the generator's call
        let v = validate(&SampleRequest::new("Normal", 10).mean(0.0).sd(-1.0)).unwrap();
        assert_eq!(*v.distribution(), Distribution::Normal { mean: 0.0, sd: -1.0 });
    }

    #[test]
    fn test_warning_display() {
        let warning = IrrelevantParameterWarning {
            kind: DistributionKind::Binomial,
            ignored: vec!["mean", "sd"],
        };
        let msg = warning.to_string();
        assert!(msg.contains("mean, sd"));
        assert!(msg.contains("Binomial"));
    }
}
