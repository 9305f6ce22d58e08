use std::time::{Duration, SystemTime};

use crate::collaborators::{Deleter, SpaceProbe};
use crate::error::{EngineError, EngineResult};
use crate::policy::{Budget, RetentionPolicy};
use crate::record::{FileRecord, SECONDS_PER_DAY};

/// Totals reported after enforcement.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct EnforcementSummary {
    /// Records deleted (or marked for deletion in print modes).
    pub deleted: usize,
    /// Bytes held by the deleted records.
    pub deleted_bytes: u64,
    /// Records left in place.
    pub retained: usize,
}

/// Running state of the count and size budgets.
#[derive(Debug)]
struct BudgetTracker {
    surviving_count: u64,
    surviving_bytes: u64,
    released_bytes: u64,
}

impl BudgetTracker {
    fn new(records: &[FileRecord]) -> Self {
        let survivors = records.iter().filter(|record| !record.is_deleted());
        let (count, bytes) = survivors.fold((0u64, 0u64), |(count, bytes), record| {
            (count + 1, bytes.saturating_add(record.size()))
        });
        Self {
            surviving_count: count,
            surviving_bytes: bytes,
            released_bytes: 0,
        }
    }

    fn release(&mut self, size: u64) {
        self.surviving_count = self.surviving_count.saturating_sub(1);
        self.surviving_bytes = self.surviving_bytes.saturating_sub(size);
        self.released_bytes = self.released_bytes.saturating_add(size);
    }
}

/// Which pass is deleting a record.
#[derive(Clone, Copy, Debug)]
enum Pass {
    Candidates,
    Scheduled,
    MaxAge,
}

impl Pass {
    const fn name(self) -> &'static str {
        match self {
            Self::Candidates => "candidates",
            Self::Scheduled => "scheduled",
            Self::MaxAge => "max-age",
        }
    }
}

/// Applies a [`RetentionPolicy`] to matched records.
///
/// Records must be sorted newest first; deletion proceeds from the oldest.
/// Phase 1 deletes delete candidates while the budget is unmet (all of them
/// when `force` is set, or when there is no gating budget). Phase 2 deletes
/// scheduled records while the budget is still unmet, unless `keep_files`
/// is set. A max-age budget then removes every survivor older than the
/// limit.
pub struct BudgetEnforcer<'a> {
    policy: &'a RetentionPolicy,
    deleter: &'a mut dyn Deleter,
    probe: &'a mut dyn SpaceProbe,
    now: SystemTime,
    dry_run: bool,
}

impl<'a> BudgetEnforcer<'a> {
    /// Creates an enforcer that deletes through `deleter` and measures free
    /// space through `probe`.
    pub fn new(
        policy: &'a RetentionPolicy,
        deleter: &'a mut dyn Deleter,
        probe: &'a mut dyn SpaceProbe,
        now: SystemTime,
    ) -> Self {
        Self {
            policy,
            deleter,
            probe,
            now,
            dry_run: false,
        }
    }

    /// In a dry run records are only flagged as deleted; the deleter is
    /// never called and released bytes are credited to the free-space
    /// budget.
    #[must_use]
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Runs both phases and the max-age pass over `records`.
    pub fn enforce(&mut self, records: &mut [FileRecord]) -> EngineResult<EnforcementSummary> {
        let budget = self.policy.budget();
        let mut tracker = BudgetTracker::new(records);
        let mut summary = EnforcementSummary::default();

        let gating = budget.is_gating();
        for record in records.iter_mut().rev() {
            if !record.is_delete_candidate() || record.is_deleted() {
                continue;
            }
            if gating && !self.policy.forced() && self.is_satisfied(&tracker)? {
                break;
            }
            self.prune(record, Pass::Candidates, &mut tracker, &mut summary)?;
        }

        if gating && !self.policy.keeps_files() {
            for record in records.iter_mut().rev() {
                if record.is_delete_candidate() || record.is_deleted() {
                    continue;
                }
                if self.is_satisfied(&tracker)? {
                    break;
                }
                self.prune(record, Pass::Scheduled, &mut tracker, &mut summary)?;
            }
        }

        if let Budget::MaxAge(days) = budget {
            let limit = days
                .checked_mul(SECONDS_PER_DAY)
                .and_then(|secs| self.now.checked_sub(Duration::from_secs(secs)));
            if let Some(limit) = limit {
                for record in records.iter_mut().rev() {
                    if !record.is_deleted() && record.age_time() < limit {
                        self.prune(record, Pass::MaxAge, &mut tracker, &mut summary)?;
                    }
                }
            }
        }

        for record in records.iter().filter(|record| !record.is_deleted()) {
            summary.retained += 1;
            tracing::info!(
                target: "fileprune::keep",
                name = %record.name().display(),
                candidate = record.is_delete_candidate(),
                "retained"
            );
        }

        tracing::info!(
            target: "fileprune::stats",
            deleted = summary.deleted,
            deleted_bytes = summary.deleted_bytes,
            retained = summary.retained,
            "enforcement complete"
        );
        Ok(summary)
    }

    fn is_satisfied(&mut self, tracker: &BudgetTracker) -> EngineResult<bool> {
        let satisfied = match self.policy.budget() {
            Budget::Count(max) => tracker.surviving_count <= max,
            Budget::TotalSize(max) => tracker.surviving_bytes <= max,
            Budget::FreeSpace(min) => {
                let queried = self.probe.available_bytes().map_err(|source| {
                    EngineError::io("statvfs", self.probe.location(), source)
                })?;
                let available = if self.dry_run {
                    queried.saturating_add(tracker.released_bytes)
                } else {
                    queried
                };
                tracing::debug!(
                    target: "fileprune::space",
                    available,
                    required = min,
                    "queried free space"
                );
                available > min
            }
            Budget::Unlimited | Budget::MaxAge(_) => true,
        };

        tracing::debug!(
            target: "fileprune::budget",
            surviving_count = tracker.surviving_count,
            surviving_bytes = tracker.surviving_bytes,
            satisfied,
            "budget check"
        );
        Ok(satisfied)
    }

    fn prune(
        &mut self,
        record: &mut FileRecord,
        pass: Pass,
        tracker: &mut BudgetTracker,
        summary: &mut EnforcementSummary,
    ) -> EngineResult<()> {
        if !self.dry_run {
            self.deleter
                .delete(record)
                .map_err(|source| EngineError::io("unlink", record.name(), source))?;
        }
        record.mark_deleted();
        tracker.release(record.size());
        summary.deleted += 1;
        summary.deleted_bytes = summary.deleted_bytes.saturating_add(record.size());

        tracing::info!(
            target: "fileprune::del",
            name = %record.name().display(),
            size = record.size(),
            pass = pass.name(),
            dry_run = self.dry_run,
            "deleted"
        );
        Ok(())
    }
}
