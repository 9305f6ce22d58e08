use crate::distribution::Distribution;
use crate::error::ScheduleResult;
use crate::extent::Extent;
use crate::progression::Progression;
use crate::schedule::Schedule;

/// Builds retention schedules for one distribution.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScheduleGenerator {
    distribution: Distribution,
    cutoff: Option<u64>,
}

impl ScheduleGenerator {
    /// Creates a generator for `distribution`.
    #[must_use]
    pub const fn new(distribution: Distribution) -> Self {
        Self {
            distribution,
            cutoff: None,
        }
    }

    /// Ends depth-bounded schedules at the first threshold of at least
    /// `horizon_days`.
    ///
    /// Buckets beyond that threshold cannot hold a record aged
    /// `horizon_days` or less, so matching against the shortened schedule
    /// gives the same result while the buckets stay bounded by the input.
    #[must_use]
    pub const fn covering(mut self, horizon_days: u64) -> Self {
        self.cutoff = Some(horizon_days);
        self
    }

    /// Generates the thresholds for `extent`.
    ///
    /// With [`Extent::Depth`] that many buckets are produced, or fewer when
    /// [`covering`](Self::covering) set a horizon. With [`Extent::Horizon`]
    /// thresholds are appended until the last one is at least the horizon;
    /// at least one bucket is always produced. Gaussian generators convert a
    /// horizon into a depth with
    /// [`HalfNormal::depth_for_age`](crate::HalfNormal::depth_for_age).
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError::OutOfMemory`](crate::ScheduleError::OutOfMemory)
    /// when an uncut depth cannot be reserved.
    pub fn generate(&self, extent: Extent) -> ScheduleResult<Schedule> {
        let schedule = match self.distribution {
            Distribution::Gaussian(curve) => {
                let depth = match extent {
                    Extent::Depth(depth) => depth,
                    Extent::Horizon(days) => curve.depth_for_age(days),
                };
                curve.place(depth, self.cutoff)?
            }
            Distribution::Uniform => self.closed_form(Progression::uniform(), extent)?,
            Distribution::Fibonacci => self.closed_form(Progression::fibonacci(), extent)?,
            Distribution::Exponential(base) => {
                self.closed_form(Progression::exponential(base.get()), extent)?
            }
        };

        tracing::info!(
            target: "fileprune::schedule",
            distribution = %self.distribution,
            extent = ?extent,
            cutoff = ?self.cutoff,
            depth = schedule.len(),
            last = ?schedule.last(),
            "generated retention schedule"
        );
        Ok(schedule)
    }

    fn closed_form(&self, progression: Progression, extent: Extent) -> ScheduleResult<Schedule> {
        match (extent, self.cutoff) {
            (Extent::Horizon(days), _) => Ok(grow_to_horizon(progression, days)),
            (Extent::Depth(depth), Some(cutoff)) => {
                Ok(grow_to_horizon(progression.take(depth), cutoff))
            }
            (Extent::Depth(depth), None) => {
                let mut schedule = Schedule::try_with_capacity(depth)?;
                schedule.extend(progression.take(depth));
                Ok(schedule)
            }
        }
    }
}

fn grow_to_horizon<I>(thresholds: I, horizon_days: u64) -> Schedule
where
    I: IntoIterator<Item = u64>,
{
    let mut schedule = Schedule::new();
    for days in thresholds {
        schedule.push(days);
        if days >= horizon_days {
            break;
        }
    }
    schedule
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(distribution: Distribution, extent: Extent) -> Vec<u64> {
        ScheduleGenerator::new(distribution)
            .generate(extent)
            .expect("schedule")
            .as_slice()
            .to_vec()
    }

    #[test]
    fn uniform_depth_counts_days_from_zero() {
        assert_eq!(generate(Distribution::Uniform, Extent::Depth(3)), [0, 1, 2]);
    }

    #[test]
    fn uniform_horizon_reaches_the_oldest_day() {
        assert_eq!(
            generate(Distribution::Uniform, Extent::Horizon(5)),
            [0, 1, 2, 3, 4, 5]
        );
    }

    #[test]
    fn horizon_always_yields_one_bucket() {
        assert_eq!(generate(Distribution::Uniform, Extent::Horizon(0)), [0]);
        assert_eq!(generate(Distribution::Fibonacci, Extent::Horizon(0)), [1]);
    }

    #[test]
    fn fibonacci_horizon_stops_at_first_covering_threshold() {
        assert_eq!(
            generate(Distribution::Fibonacci, Extent::Horizon(4)),
            [1, 1, 2, 3, 5]
        );
    }

    #[test]
    fn exponential_horizon_overshoots_once() {
        let exp = Distribution::exponential(3.0).expect("valid");
        assert_eq!(generate(exp, Extent::Horizon(10)), [1, 3, 9, 27]);
    }

    #[test]
    fn gaussian_horizon_converts_to_depth() {
        let gauss = Distribution::gaussian(180.0).expect("valid");
        assert_eq!(generate(gauss, Extent::Horizon(10)).len(), 9);
    }

    #[test]
    fn zero_depth_is_empty() {
        assert!(generate(Distribution::Fibonacci, Extent::Depth(0)).is_empty());
    }

    #[test]
    fn covering_stops_an_enormous_depth_at_the_horizon() {
        let schedule = ScheduleGenerator::new(Distribution::Uniform)
            .covering(3)
            .generate(Extent::Depth(100_000_000_000_000))
            .expect("bounded by the horizon");
        assert_eq!(schedule.as_slice(), &[0, 1, 2, 3]);
    }

    #[test]
    fn covering_keeps_shorter_depths_intact() {
        let schedule = ScheduleGenerator::new(Distribution::Fibonacci)
            .covering(100)
            .generate(Extent::Depth(5))
            .expect("schedule");
        assert_eq!(schedule.as_slice(), &[1, 1, 2, 3, 5]);
    }

    #[test]
    fn uncut_enormous_depth_reports_out_of_memory() {
        let depth = usize::MAX / 8;
        let error = ScheduleGenerator::new(Distribution::Uniform)
            .generate(Extent::Depth(depth))
            .unwrap_err();
        assert_eq!(error, crate::ScheduleError::OutOfMemory(depth));
    }
}
