use crate::distribution::Distribution;

/// How far a generated schedule reaches.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Extent {
    /// Exactly this many buckets.
    Depth(usize),
    /// Grow until the last threshold covers this many days.
    Horizon(u64),
}

/// Which budget argument, if any, determines the schedule depth.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DepthSource {
    /// An explicit file count.
    Count(u64),
    /// A total-size budget in bytes.
    Size(u64),
    /// A maximum age in days.
    Age(u64),
    /// No budget contributes a depth.
    Unspecified,
}

/// Summary of the input set used to size a schedule.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Inventory {
    /// Number of records.
    pub file_count: usize,
    /// Sum of record sizes in bytes.
    pub total_size: u64,
    /// Age in days of the oldest record.
    pub horizon_days: u64,
}

/// Chooses the schedule extent for `distribution`.
///
/// Gaussian schedules always have an explicit depth: the requested count
/// (at least one bucket per file), the number of average-sized files that
/// fit the size budget, or the one-day-mass bucket count for the age
/// budget. The closed-form distributions take a depth from a count or size
/// budget and otherwise grow until they cover the oldest record.
#[must_use]
pub fn resolve_extent(
    distribution: &Distribution,
    source: DepthSource,
    inventory: &Inventory,
) -> Extent {
    let files = inventory.file_count;

    let Some(curve) = distribution.as_gaussian() else {
        return match source {
            DepthSource::Count(count) => Extent::Depth(saturating_usize(count).max(files)),
            DepthSource::Size(_) => Extent::Depth(files),
            DepthSource::Age(_) | DepthSource::Unspecified => {
                Extent::Horizon(inventory.horizon_days)
            }
        };
    };

    let depth = match source {
        DepthSource::Count(count) => saturating_usize(count).max(files),
        DepthSource::Size(size) => {
            let average = u64::try_from(files)
                .ok()
                .and_then(|n| inventory.total_size.checked_div(n))
                .unwrap_or(0);
            match size.checked_div(average) {
                Some(depth) => saturating_usize(depth),
                None => files,
            }
        }
        DepthSource::Age(days) => curve.depth_for_age(days),
        DepthSource::Unspecified => files,
    };

    tracing::trace!(
        target: "fileprune::schedule",
        source = ?source,
        depth,
        "resolved gaussian depth"
    );
    Extent::Depth(depth)
}

fn saturating_usize(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INVENTORY: Inventory = Inventory {
        file_count: 10,
        total_size: 1000,
        horizon_days: 45,
    };

    fn gaussian() -> Distribution {
        Distribution::gaussian(180.0).expect("valid")
    }

    #[test]
    fn closed_form_count_takes_the_larger_of_count_and_files() {
        let fib = Distribution::Fibonacci;
        assert_eq!(
            resolve_extent(&fib, DepthSource::Count(4), &INVENTORY),
            Extent::Depth(10)
        );
        assert_eq!(
            resolve_extent(&fib, DepthSource::Count(25), &INVENTORY),
            Extent::Depth(25)
        );
    }

    #[test]
    fn closed_form_size_uses_file_count() {
        assert_eq!(
            resolve_extent(&Distribution::Uniform, DepthSource::Size(1), &INVENTORY),
            Extent::Depth(10)
        );
    }

    #[test]
    fn closed_form_without_count_is_open_ended() {
        for source in [DepthSource::Age(30), DepthSource::Unspecified] {
            assert_eq!(
                resolve_extent(&Distribution::Uniform, source, &INVENTORY),
                Extent::Horizon(45)
            );
        }
    }

    #[test]
    fn gaussian_size_divides_by_average_file_size() {
        assert_eq!(
            resolve_extent(&gaussian(), DepthSource::Size(300), &INVENTORY),
            Extent::Depth(3)
        );
    }

    #[test]
    fn gaussian_size_with_empty_files_falls_back_to_file_count() {
        let empty = Inventory {
            total_size: 0,
            ..INVENTORY
        };
        assert_eq!(
            resolve_extent(&gaussian(), DepthSource::Size(300), &empty),
            Extent::Depth(10)
        );
    }

    #[test]
    fn gaussian_age_uses_mass_ratio() {
        assert_eq!(
            resolve_extent(&gaussian(), DepthSource::Age(10), &INVENTORY),
            Extent::Depth(9)
        );
    }

    #[test]
    fn gaussian_defaults_to_file_count() {
        assert_eq!(
            resolve_extent(&gaussian(), DepthSource::Unspecified, &INVENTORY),
            Extent::Depth(10)
        );
        assert_eq!(
            resolve_extent(&gaussian(), DepthSource::Count(3), &INVENTORY),
            Extent::Depth(10)
        );
    }
}
