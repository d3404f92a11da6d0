//! Drawn sample values.

#[cfg(feature = "serde")]
use serde::Serialize;

/// An immutable sequence of drawn values.
///
/// Normal draws are continuous; Poisson and Binomial draws are counts.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Sample {
    /// Floating-point values (Normal).
    Continuous(Vec<f64>),
    /// Non-negative integer values (Poisson, Binomial).
    Discrete(Vec<u64>),
}

impl Sample {
    /// Number of values.
    pub fn len(&self) -> usize {
        match self {
            Self::Continuous(values) => values.len(),
            Self::Discrete(values) => values.len(),
        }
    }

    /// Returns `true` if the sample holds no values.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Continuous values, or `None` for a discrete sample.
    pub fn as_continuous(&self) -> Option<&[f64]> {
        match self {
            Self::Continuous(values) => Some(values),
            Self::Discrete(_) => None,
        }
    }

    /// Integer values, or `None` for a continuous sample.
    pub fn as_discrete(&self) -> Option<&[u64]> {
        match self {
            Self::Continuous(_) => None,
            Self::Discrete(values) => Some(values),
        }
    }

    /// Returns `true` for integer-valued samples.
    pub fn is_discrete(&self) -> bool {
        matches!(self, Self::Discrete(_))
    }

    /// Iterates over the values as `f64`.
    pub fn iter_f64(&self) -> Box<dyn Iterator<Item = f64> + '_> {
        match self {
            Self::Continuous(values) => Box::new(values.iter().copied()),
            Self::Discrete(values) => Box::new(values.iter().map(|&v| v as f64)),
        }
    }

    /// Copies the values into a `Vec<f64>`.
    pub fn to_f64_vec(&self) -> Vec<f64> {
        self.iter_f64().collect()
    }
}
