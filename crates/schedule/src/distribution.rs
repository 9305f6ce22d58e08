use std::fmt;

use crate::error::{ScheduleError, ScheduleResult};
use crate::gaussian::HalfNormal;

/// Validated base of an exponential progression.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Exponent(f64);

impl Exponent {
    /// Accepts any finite base greater than zero.
    pub fn new(base: f64) -> ScheduleResult<Self> {
        if base.is_finite() && base > 0.0 {
            Ok(Self(base))
        } else {
            Err(ScheduleError::InvalidBase(base))
        }
    }

    /// The base as a float.
    #[must_use]
    pub const fn get(self) -> f64 {
        self.0
    }
}

/// Statistical shape that spaces the retention buckets.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Distribution {
    /// One bucket per day, starting at day 0.
    #[default]
    Uniform,
    /// Bucket thresholds follow the Fibonacci numbers `1, 1, 2, 3, 5, ...`.
    Fibonacci,
    /// Bucket thresholds follow powers of a base.
    Exponential(Exponent),
    /// Buckets hold equal mass under a half-normal curve.
    Gaussian(HalfNormal),
}

impl Distribution {
    /// Exponential distribution with the given base.
    pub fn exponential(base: f64) -> ScheduleResult<Self> {
        Exponent::new(base).map(Self::Exponential)
    }

    /// Gaussian distribution with the given standard deviation in days.
    pub fn gaussian(sd: f64) -> ScheduleResult<Self> {
        HalfNormal::new(sd).map(Self::Gaussian)
    }

    /// Short lowercase name used in diagnostics.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Uniform => "uniform",
            Self::Fibonacci => "fibonacci",
            Self::Exponential(_) => "exponential",
            Self::Gaussian(_) => "gaussian",
        }
    }

    /// Returns the half-normal curve for Gaussian distributions.
    #[must_use]
    pub const fn as_gaussian(&self) -> Option<&HalfNormal> {
        match self {
            Self::Gaussian(curve) => Some(curve),
            _ => None,
        }
    }
}

impl fmt::Display for Distribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Uniform | Self::Fibonacci => f.write_str(self.name()),
            Self::Exponential(base) => write!(f, "exponential(base={})", base.get()),
            Self::Gaussian(curve) => write!(f, "gaussian(sd={})", curve.deviation()),
        }
    }
}
