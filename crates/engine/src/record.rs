use std::path::{Path, PathBuf};
use std::time::SystemTime;

use schedule::Inventory;

/// Length of one age unit.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// Age of `age_time` in whole days as seen from `now`, counting from one.
///
/// A record stamped at `now` is one day old; so is any record stamped in
/// the future.
#[must_use]
pub fn age_in_days(age_time: SystemTime, now: SystemTime) -> u64 {
    match now.duration_since(age_time) {
        Ok(elapsed) => elapsed.as_secs() / SECONDS_PER_DAY + 1,
        Err(_) => 1,
    }
}

/// One input item: a file, a directory, or a parsed date label.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct FileRecord {
    name: PathBuf,
    size: u64,
    age_time: SystemTime,
    ordinal: usize,
    delete_candidate: bool,
    deleted: bool,
}

impl FileRecord {
    /// Creates a record with both flags cleared.
    pub fn new(name: impl Into<PathBuf>, size: u64, age_time: SystemTime) -> Self {
        Self {
            name: name.into(),
            size,
            age_time,
            ordinal: 0,
            delete_candidate: false,
            deleted: false,
        }
    }

    /// Name as given on the command line.
    #[must_use]
    pub fn name(&self) -> &Path {
        &self.name
    }

    /// Size in bytes (zero for date labels).
    #[must_use]
    pub const fn size(&self) -> u64 {
        self.size
    }

    /// Timestamp used for age computation.
    #[must_use]
    pub const fn age_time(&self) -> SystemTime {
        self.age_time
    }

    /// Position of the record in the input.
    #[must_use]
    pub const fn ordinal(&self) -> usize {
        self.ordinal
    }

    /// Age in days relative to `now`. See [`age_in_days`].
    #[must_use]
    pub fn age_in_days(&self, now: SystemTime) -> u64 {
        age_in_days(self.age_time, now)
    }

    /// Whether the matcher left this record outside every bucket.
    #[must_use]
    pub const fn is_delete_candidate(&self) -> bool {
        self.delete_candidate
    }

    /// Whether the enforcer deleted (or, in print modes, would delete) it.
    #[must_use]
    pub const fn is_deleted(&self) -> bool {
        self.deleted
    }

    pub(crate) fn mark_delete_candidate(&mut self) {
        self.delete_candidate = true;
    }

    pub(crate) fn mark_deleted(&mut self) {
        self.deleted = true;
    }
}

/// The run's records together with their aggregate size.
#[derive(Clone, Debug, Default)]
pub struct FileSet {
    records: Vec<FileRecord>,
    total_size: u64,
}

impl FileSet {
    /// Takes ownership of `records`, numbering them in iteration order.
    pub fn new(records: impl IntoIterator<Item = FileRecord>) -> Self {
        let mut total_size = 0u64;
        let records = records
            .into_iter()
            .enumerate()
            .map(|(ordinal, mut record)| {
                record.ordinal = ordinal;
                total_size = total_size.saturating_add(record.size);
                record
            })
            .collect();
        Self {
            records,
            total_size,
        }
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns `true` when there are no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sum of all record sizes at load time.
    #[must_use]
    pub const fn total_size(&self) -> u64 {
        self.total_size
    }

    /// Records in their current order.
    #[must_use]
    pub fn records(&self) -> &[FileRecord] {
        &self.records
    }

    /// Mutable access for the matcher and the enforcer.
    pub fn records_mut(&mut self) -> &mut [FileRecord] {
        &mut self.records
    }

    /// Sorts newest first. Records with equal timestamps keep input order.
    pub fn sort_newest_first(&mut self) {
        self.records
            .sort_by(|left, right| right.age_time.cmp(&left.age_time));
    }

    /// Age in days of the oldest record, or zero for an empty set.
    #[must_use]
    pub fn horizon_days(&self, now: SystemTime) -> u64 {
        self.records
            .iter()
            .map(|record| record.age_in_days(now))
            .max()
            .unwrap_or(0)
    }

    /// Counts and sizes used to pick the schedule extent.
    #[must_use]
    pub fn inventory(&self, now: SystemTime) -> Inventory {
        Inventory {
            file_count: self.len(),
            total_size: self.total_size,
            horizon_days: self.horizon_days(now),
        }
    }

    /// Records ordered by their input position.
    #[must_use]
    pub fn in_input_order(&self) -> Vec<&FileRecord> {
        let mut ordered: Vec<&FileRecord> = self.records.iter().collect();
        ordered.sort_by_key(|record| record.ordinal);
        ordered
    }
}
