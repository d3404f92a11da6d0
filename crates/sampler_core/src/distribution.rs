//! Supported distributions and their parameters.
//!
//! [`DistributionKind`] is the bare label a caller selects; [`Distribution`]
//! is the validated form, where each variant carries only the parameters
//! its generator needs.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::SamplerError;

/// Distribution family selected by a request.
///
/// # Examples
/// ```
/// use sampler_core::DistributionKind;
///
/// let kind: DistributionKind = "Poisson".parse().unwrap();
/// assert_eq!(kind, DistributionKind::Poisson);
/// assert!("Gaussian".parse::<DistributionKind>().is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DistributionKind {
    /// Gaussian with location `mean` and scale `sd`.
    Normal,
    /// Counts with rate `lam`.
    Poisson,
    /// Successes in `trials` trials with probability `prob`.
    Binomial,
}

impl DistributionKind {
    /// All supported kinds, in declaration order.
    pub const ALL: [DistributionKind; 3] = [Self::Normal, Self::Poisson, Self::Binomial];

    /// Canonical label, as accepted by [`FromStr`].
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "Normal",
            Self::Poisson => "Poisson",
            Self::Binomial => "Binomial",
        }
    }

    /// Returns `true` for kinds that produce integer samples.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Poisson | Self::Binomial)
    }
}

impl fmt::Display for DistributionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DistributionKind {
    type Err = SamplerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "poisson" => Ok(Self::Poisson),
            "binomial" => Ok(Self::Binomial),
            _ => Err(SamplerError::InvalidDistributionKind {
                kind: s.to_string(),
            }),
        }
    }
}

/// Validated distribution parameters.
///
/// Values are passed to the generator as given; range checks such as a
/// negative `sd` are left to `rand_distr` and surface as
/// [`SamplerError::GenerationFailed`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind"))]
pub enum Distribution {
    /// Normal distribution.
    Normal {
        /// Location of the distribution
        mean: f64,
        /// Scale (standard deviation)
        sd: f64,
    },
    /// Poisson distribution.
    Poisson {
        /// Expected number of events
        lam: f64,
    },
    /// Binomial distribution.
    Binomial {
        /// Number of trials per draw
        trials: u64,
        /// Success probability of each trial
        prob: f64,
    },
}

impl Distribution {
    /// Returns the family of this distribution.
    pub fn kind(&self) -> DistributionKind {
        match self {
            Self::Normal { .. } => DistributionKind::Normal,
            Self::Poisson { .. } => DistributionKind::Poisson,
            Self::Binomial { .. } => DistributionKind::Binomial,
        }
    }

    /// Named parameter values, in display order.
    pub fn parameters(&self) -> Vec<(&'static str, f64)> {
        match *self {
            Self::Normal { mean, sd } => vec![("Mean", mean), ("Standard Deviation", sd)],
            Self::Poisson { lam } => vec![("Lambda", lam)],
            Self::Binomial { trials, prob } => {
                vec![("Trial Size", trials as f64), ("Probability", prob)]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_parse_canonical() {
        for kind in DistributionKind::ALL {
            assert_eq!(kind.as_str().parse::<DistributionKind>().unwrap(), kind);
        }
    }

    #[test]
    fn test_kind_parse_case_insensitive() {
        assert_eq!(
            "binomial".parse::<DistributionKind>().unwrap(),
            DistributionKind::Binomial
        );
        assert_eq!(
            " NORMAL ".parse::<DistributionKind>().unwrap(),
            DistributionKind::Normal
        );
    }

    #[test]
    fn test_kind_parse_rejects_unknown_label() {
        let err = "Gaussian".parse::<DistributionKind>().unwrap_err();
        assert!(matches!(
            err,
            SamplerError::InvalidDistributionKind { ref kind } if kind == "Gaussian"
        ));
    }

    #[test]
    fn test_kind_is_discrete() {
        assert!(!DistributionKind::Normal.is_discrete());
        assert!(DistributionKind::Poisson.is_discrete());
        assert!(DistributionKind::Binomial.is_discrete());
    }

    #[test]
    fn test_distribution_kind_and_parameters() {
        let d = Distribution::Binomial {
            trials: 10,
            prob: 0.25,
        };
        assert_eq!(d.kind(), DistributionKind::Binomial);
        assert_eq!(
            d.parameters(),
            vec![("Trial Size", 10.0), ("Probability", 0.25)]
        );

        let d = Distribution::Poisson { lam: 3.0 };
        assert_eq!(d.parameters(), vec![("Lambda", 3.0)]);
    }
}
