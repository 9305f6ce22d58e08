//! Half-normal bucket placement.
//!
//! The retention density is modelled as the positive half of a normal
//! distribution centred on day zero. Each bucket receives the same share of
//! probability mass, so buckets are narrow for recent days and widen as the
//! density thins out.

use std::f64::consts::SQRT_2;

use crate::error::{ScheduleError, ScheduleResult};
use crate::schedule::Schedule;

/// Thresholds past this many days close a bucket unconditionally.
pub const GAUSSIAN_DAY_LIMIT: u64 = 365_000;

/// Half-normal curve with a validated standard deviation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfNormal {
    sd: f64,
}

impl HalfNormal {
    /// Creates a curve with standard deviation `sd` (in days).
    pub fn new(sd: f64) -> ScheduleResult<Self> {
        if sd.is_finite() && sd > 0.0 {
            Ok(Self { sd })
        } else {
            Err(ScheduleError::InvalidDeviation(sd))
        }
    }

    /// Standard deviation in days.
    #[must_use]
    pub const fn deviation(&self) -> f64 {
        self.sd
    }

    /// Cumulative distribution of the zero-mean normal curve at `days`.
    ///
    /// `cdf(0)` is one half; the mass between day 0 and day `x` is therefore
    /// `cdf(x) - 0.5`.
    #[must_use]
    pub fn cdf(&self, days: f64) -> f64 {
        (1.0 + libm::erf(days / self.sd / SQRT_2)).abs() / 2.0
    }

    /// Number of one-day-mass buckets needed to cover `days`.
    ///
    /// Computed as the mass up to `days` over the mass of the first day and
    /// truncated. The result never exceeds `days`, which also covers curves
    /// so flat that the first day's mass rounds to zero.
    #[must_use]
    pub fn depth_for_age(&self, days: u64) -> usize {
        let unit = self.cdf(1.0) - 0.5;
        let horizon = days as f64;
        if unit <= 0.0 {
            return usize::try_from(days).unwrap_or(usize::MAX);
        }
        ((self.cdf(horizon) - 0.5) / unit).min(horizon) as usize
    }

    /// Places `depth` buckets of equal probability mass.
    ///
    /// A bucket grows one day at a time from the previous boundary until its
    /// mass exceeds `0.5 / (depth + 0.5)`. Growth is also cut short when the
    /// final bucket becomes twice as wide as its predecessor, when any bucket
    /// becomes ten times as wide as its predecessor, or once the boundary
    /// passes [`GAUSSIAN_DAY_LIMIT`]. Closing a bucket records the day after
    /// its start and seeds the next search one previous width further on.
    ///
    /// With a `cutoff`, placement stops after the first threshold of at least
    /// that many days; the result is a prefix of the uncut schedule. Without
    /// one, room for all `depth` thresholds is reserved up front.
    pub fn place(&self, depth: usize, cutoff: Option<u64>) -> ScheduleResult<Schedule> {
        let mut schedule = match cutoff {
            Some(_) => Schedule::new(),
            None => Schedule::try_with_capacity(depth)?,
        };
        let area = 0.5 / (depth as f64 + 0.5);
        let mut start = 0u64;
        let mut current = 1u64;
        let mut previous_width: Option<u64> = None;

        while schedule.len() < depth {
            let width = current - start;
            let final_bucket = schedule.len() + 1 == depth;
            let close = self.cdf(current as f64) - self.cdf(start as f64) > area
                || previous_width.is_some_and(|prev| final_bucket && width > 2 * prev)
                || previous_width.is_some_and(|prev| width > 10 * prev)
                || current > GAUSSIAN_DAY_LIMIT;

            if close {
                let threshold = start + 1;
                schedule.push(threshold);
                if cutoff.is_some_and(|days| threshold >= days) {
                    break;
                }
                previous_width = Some(width);
                start = current;
                current += width;
            } else {
                current += 1;
            }
        }

        Ok(schedule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn curve(sd: f64) -> HalfNormal {
        HalfNormal::new(sd).expect("valid deviation")
    }

    fn place(curve: HalfNormal, depth: usize) -> Schedule {
        curve.place(depth, None).expect("reservation")
    }

    #[test]
    fn rejects_degenerate_deviations() {
        for sd in [0.0, -3.0, f64::NAN, f64::INFINITY] {
            assert!(HalfNormal::new(sd).is_err(), "sd {sd} accepted");
        }
    }

    #[test]
    fn cdf_is_one_half_at_origin() {
        assert!((curve(180.0).cdf(0.0) - 0.5).abs() < 1e-12);
        assert!((curve(1.0).cdf(1.0) - 0.841_344_746).abs() < 1e-6);
    }

    #[test]
    fn depth_for_one_day_is_one() {
        assert_eq!(curve(180.0).depth_for_age(1), 1);
    }

    #[test]
    fn depth_for_age_truncates() {
        // Slightly below ten because the curve already bends over ten days.
        assert_eq!(curve(180.0).depth_for_age(10), 9);
        assert_eq!(curve(1.0).depth_for_age(100), 1);
    }

    #[test]
    fn depth_for_age_on_flat_curve_is_bounded_by_days() {
        assert_eq!(curve(1e300).depth_for_age(42), 42);
    }

    #[test]
    fn first_bucket_starts_at_day_one() {
        let schedule = place(curve(180.0), 20);
        assert_eq!(schedule.len(), 20);
        assert_eq!(schedule[0], 1);
    }

    #[test]
    fn zero_depth_places_nothing() {
        assert!(place(curve(180.0), 0).is_empty());
    }

    #[test]
    fn narrow_curve_hits_width_guards() {
        // With sd = 1 almost all mass lies in the first days, so later buckets
        // only close through the width guards and the day limit.
        let schedule = place(curve(1.0), 12);
        assert_eq!(schedule.len(), 12);
        for pair in schedule.as_slice().windows(2) {
            assert!(pair[0] < pair[1]);
        }
    }

    #[test]
    fn cutoff_yields_a_prefix_of_the_full_placement() {
        let full = place(curve(30.0), 40);
        let cut = curve(30.0).place(40, Some(20)).expect("placement");
        let end = full
            .iter()
            .position(|days| days >= 20)
            .expect("full schedule reaches day 20");
        assert_eq!(cut.as_slice(), &full.as_slice()[..=end]);
    }

    #[test]
    fn cutoff_bounds_an_enormous_depth() {
        let cut = curve(180.0).place(1 << 40, Some(5)).expect("placement");
        assert_eq!(cut.as_slice(), &[1, 2, 3, 4, 5]);
    }
}
