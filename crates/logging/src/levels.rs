//! crates/logging/src/levels.rs
//! Flag enums and level structures for info and debug verbosity.

/// Info flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum InfoFlag {
    /// Deleted (or, in print modes, would-be deleted) records.
    Del,
    /// Records retained as a bucket representative.
    Keep,
    /// Generated retention schedule.
    Schedule,
    /// End-of-run summary.
    Stats,
}

impl InfoFlag {
    /// Every info flag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Del, Self::Keep, Self::Schedule, Self::Stats];

    /// Token used by `--info` and by tracing targets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Del => "del",
            Self::Keep => "keep",
            Self::Schedule => "schedule",
            Self::Stats => "stats",
        }
    }
}

/// Debug flags for diagnostic categories.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DebugFlag {
    /// Budget satisfaction checks during enforcement.
    Budget,
    /// Per-record schedule matching decisions.
    Match,
    /// Free-space queries.
    Space,
    /// Metadata collection and date parsing.
    Stat,
}

impl DebugFlag {
    /// Every debug flag, in declaration order.
    pub const ALL: [Self; 4] = [Self::Budget, Self::Match, Self::Space, Self::Stat];

    /// Token used by `--debug` and by tracing targets.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Budget => "budget",
            Self::Match => "match",
            Self::Space => "space",
            Self::Stat => "stat",
        }
    }
}

/// Info verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct InfoLevels {
    /// Deletion reporting level.
    pub del: u8,
    /// Retained-record reporting level.
    pub keep: u8,
    /// Schedule reporting level.
    pub schedule: u8,
    /// Summary statistics level.
    pub stats: u8,
}

impl InfoLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: InfoFlag) -> u8 {
        match flag {
            InfoFlag::Del => self.del,
            InfoFlag::Keep => self.keep,
            InfoFlag::Schedule => self.schedule,
            InfoFlag::Stats => self.stats,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: InfoFlag, level: u8) {
        match flag {
            InfoFlag::Del => self.del = level,
            InfoFlag::Keep => self.keep = level,
            InfoFlag::Schedule => self.schedule = level,
            InfoFlag::Stats => self.stats = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in InfoFlag::ALL {
            self.set(flag, level);
        }
    }
}

/// Debug verbosity levels for each flag.
#[derive(Clone, Default, Debug, PartialEq, Eq)]
pub struct DebugLevels {
    /// Budget check level.
    pub budget: u8,
    /// Matching decision level.
    pub matching: u8,
    /// Free-space query level.
    pub space: u8,
    /// Metadata collection level.
    pub stat: u8,
}

impl DebugLevels {
    /// Get the level for a specific flag.
    pub fn get(&self, flag: DebugFlag) -> u8 {
        match flag {
            DebugFlag::Budget => self.budget,
            DebugFlag::Match => self.matching,
            DebugFlag::Space => self.space,
            DebugFlag::Stat => self.stat,
        }
    }

    /// Set the level for a specific flag.
    pub fn set(&mut self, flag: DebugFlag, level: u8) {
        match flag {
            DebugFlag::Budget => self.budget = level,
            DebugFlag::Match => self.matching = level,
            DebugFlag::Space => self.space = level,
            DebugFlag::Stat => self.stat = level,
        }
    }

    /// Set all flags to the specified level.
    pub fn set_all(&mut self, level: u8) {
        for flag in DebugFlag::ALL {
            self.set(flag, level);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn info_levels_get_and_set_round_trip_each_flag() {
        let mut levels = InfoLevels::default();
        for (offset, flag) in InfoFlag::ALL.into_iter().enumerate() {
            levels.set(flag, offset as u8 + 1);
        }
        assert_eq!(levels.get(InfoFlag::Del), 1);
        assert_eq!(levels.get(InfoFlag::Keep), 2);
        assert_eq!(levels.get(InfoFlag::Schedule), 3);
        assert_eq!(levels.get(InfoFlag::Stats), 4);
    }

    #[test]
    fn debug_levels_set_all_touches_every_flag() {
        let mut levels = DebugLevels::default();
        levels.set_all(3);
        assert!(DebugFlag::ALL.iter().all(|flag| levels.get(*flag) == 3));
    }

    #[test]
    fn flag_names_are_unique() {
        let mut names: Vec<&str> = InfoFlag::ALL.iter().map(|flag| flag.name()).collect();
        names.extend(DebugFlag::ALL.iter().map(|flag| flag.name()));
        let total = names.len();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), total);
    }
}
