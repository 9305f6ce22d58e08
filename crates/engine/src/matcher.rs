use std::time::SystemTime;

use schedule::Schedule;

use crate::record::FileRecord;

/// Outcome counts of one matching pass.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct MatchSummary {
    /// Records chosen as a bucket representative.
    pub kept: usize,
    /// Records marked as delete candidates.
    pub candidates: usize,
    /// Buckets passed over without a representative.
    pub empty_buckets: usize,
}

/// Assigns records to schedule buckets.
///
/// Walking from the oldest record and the largest bucket, each bucket keeps
/// the oldest record whose age lies in `(schedule[i-1], schedule[i]]`
/// (`[.., schedule[0]]` for the first bucket). Every other record becomes a
/// delete candidate.
#[derive(Clone, Copy, Debug)]
pub struct RetentionMatcher<'a> {
    schedule: &'a Schedule,
    now: SystemTime,
}

impl<'a> RetentionMatcher<'a> {
    /// Creates a matcher that measures ages relative to `now`.
    #[must_use]
    pub const fn new(schedule: &'a Schedule, now: SystemTime) -> Self {
        Self { schedule, now }
    }

    /// Marks delete candidates in `records`, which must be sorted newest
    /// first.
    pub fn mark(&self, records: &mut [FileRecord]) -> MatchSummary {
        debug_assert!(
            records
                .windows(2)
                .all(|pair| pair[0].age_time() >= pair[1].age_time()),
            "records must be sorted newest first"
        );

        let mut summary = MatchSummary::default();
        // Buckets not yet consumed; the current bucket is `remaining - 1`.
        let mut remaining = self.schedule.len();

        for record in records.iter_mut().rev() {
            let age = record.age_in_days(self.now);
            loop {
                let Some(bucket) = remaining.checked_sub(1) else {
                    self.reject(record, age, &mut summary);
                    break;
                };

                let upper = self.schedule[bucket];
                if age > upper {
                    self.reject(record, age, &mut summary);
                    break;
                }

                remaining = bucket;
                let lower = bucket.checked_sub(1).map(|below| self.schedule[below]);
                if lower.is_none_or(|lower| age > lower) {
                    summary.kept += 1;
                    tracing::debug!(
                        target: "fileprune::match",
                        name = %record.name().display(),
                        age,
                        bucket,
                        upper,
                        "kept as bucket representative"
                    );
                    break;
                }

                summary.empty_buckets += 1;
                tracing::trace!(
                    target: "fileprune::match",
                    bucket,
                    upper,
                    age,
                    "bucket has no representative"
                );
            }
        }

        summary
    }

    fn reject(&self, record: &mut FileRecord, age: u64, summary: &mut MatchSummary) {
        record.mark_delete_candidate();
        summary.candidates += 1;
        tracing::debug!(
            target: "fileprune::match",
            name = %record.name().display(),
            age,
            deepest = ?self.schedule.last(),
            "delete candidate"
        );
    }
}
