//! Unbounded threshold sequences for the closed-form distributions.

/// Exponential thresholds are capped here before the one-day increment rule
/// applies, so huge bases keep producing strictly increasing values.
pub const EXPONENTIAL_CEILING: u64 = u32::MAX as u64;

/// Infinite iterator over the thresholds of a closed-form distribution.
#[derive(Clone, Debug)]
pub(crate) enum Progression {
    Uniform { next: u64 },
    Fibonacci { current: u64, following: u64 },
    Exponential { base: f64, order: u32, last: Option<u64> },
}

impl Progression {
    pub(crate) const fn uniform() -> Self {
        Self::Uniform { next: 0 }
    }

    pub(crate) const fn fibonacci() -> Self {
        Self::Fibonacci {
            current: 1,
            following: 1,
        }
    }

    pub(crate) const fn exponential(base: f64) -> Self {
        Self::Exponential {
            base,
            order: 1,
            last: None,
        }
    }
}

impl Iterator for Progression {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        match self {
            Self::Uniform { next } => {
                let value = *next;
                *next = next.saturating_add(1);
                Some(value)
            }
            Self::Fibonacci { current, following } => {
                let value = *current;
                let sum = current.saturating_add(*following);
                *current = *following;
                *following = sum;
                Some(value)
            }
            Self::Exponential { base, order, last } => {
                let value = match *last {
                    None => 1,
                    Some(previous) => {
                        let power = base.powf(f64::from(*order)).floor();
                        *order = order.saturating_add(1);
                        let capped = if power >= EXPONENTIAL_CEILING as f64 {
                            EXPONENTIAL_CEILING
                        } else {
                            power as u64
                        };
                        capped.max(previous.saturating_add(1))
                    }
                };
                *last = Some(value);
                Some(value)
            }
        }
    }
}
