use std::ops::Index;
use std::slice;

use crate::error::{ScheduleError, ScheduleResult};

/// Ascending sequence of day thresholds, one per retention bucket.
///
/// Index 0 holds the shortest horizon. The backing storage is a `Vec`, so
/// appending is amortised constant time; callers only get shared access to
/// the thresholds once they have been pushed.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Schedule {
    thresholds: Vec<u64>,
}

impl Schedule {
    /// Creates an empty schedule.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            thresholds: Vec::new(),
        }
    }

    /// Creates an empty schedule with room for `depth` thresholds.
    ///
    /// Fails with [`ScheduleError::OutOfMemory`] instead of aborting when the
    /// allocator cannot provide the space.
    pub fn try_with_capacity(depth: usize) -> ScheduleResult<Self> {
        let mut thresholds = Vec::new();
        thresholds
            .try_reserve_exact(depth)
            .map_err(|_| ScheduleError::OutOfMemory(depth))?;
        Ok(Self { thresholds })
    }

    /// Appends a threshold.
    pub fn push(&mut self, days: u64) {
        self.thresholds.push(days);
    }

    /// Returns the threshold of bucket `index`, if present.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<u64> {
        self.thresholds.get(index).copied()
    }

    /// Returns the largest (last) threshold.
    #[must_use]
    pub fn last(&self) -> Option<u64> {
        self.thresholds.last().copied()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.thresholds.len()
    }

    /// Returns `true` when the schedule has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.thresholds.is_empty()
    }

    /// Iterates over the thresholds in ascending order.
    pub fn iter(&self) -> std::iter::Copied<slice::Iter<'_, u64>> {
        self.thresholds.iter().copied()
    }

    /// Borrows the thresholds as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[u64] {
        &self.thresholds
    }
}

impl Index<usize> for Schedule {
    type Output = u64;

    fn index(&self, index: usize) -> &u64 {
        &self.thresholds[index]
    }
}

impl From<Vec<u64>> for Schedule {
    fn from(thresholds: Vec<u64>) -> Self {
        Self { thresholds }
    }
}

impl FromIterator<u64> for Schedule {
    fn from_iter<I: IntoIterator<Item = u64>>(iter: I) -> Self {
        Self {
            thresholds: iter.into_iter().collect(),
        }
    }
}

impl Extend<u64> for Schedule {
    fn extend<I: IntoIterator<Item = u64>>(&mut self, iter: I) {
        self.thresholds.extend(iter);
    }
}

impl<'a> IntoIterator for &'a Schedule {
    type Item = u64;
    type IntoIter = std::iter::Copied<slice::Iter<'a, u64>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_read_back() {
        let mut schedule = Schedule::try_with_capacity(2).expect("small reservation");
        assert!(schedule.is_empty());
        schedule.push(1);
        schedule.push(4);
        assert_eq!(schedule.len(), 2);
        assert_eq!(schedule[1], 4);
        assert_eq!(schedule.get(0), Some(1));
        assert_eq!(schedule.get(2), None);
        assert_eq!(schedule.last(), Some(4));
        assert_eq!(schedule.as_slice(), &[1, 4]);
    }

    #[test]
    fn collects_from_iterator() {
        let schedule: Schedule = (1..=3).collect();
        assert_eq!(schedule.iter().sum::<u64>(), 6);
        assert_eq!(schedule, Schedule::from(vec![1, 2, 3]));
    }

    #[test]
    fn unsatisfiable_reservation_is_an_error() {
        let depth = usize::MAX / 8;
        assert_eq!(
            Schedule::try_with_capacity(depth),
            Err(ScheduleError::OutOfMemory(depth))
        );
    }
}
