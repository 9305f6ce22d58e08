#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `engine` decides which records survive a pruning run. It owns the record
//! model ([`FileRecord`], [`FileSet`]), matches records against a
//! [`Schedule`](schedule::Schedule) with [`RetentionMatcher`], and applies a
//! [`RetentionPolicy`] with [`BudgetEnforcer`].
//!
//! # Design
//!
//! - Records are sorted newest first; both the matcher and the enforcer walk
//!   them from the oldest end.
//! - The matcher only sets the delete-candidate flag; the enforcer only sets
//!   the deleted flag.
//! - Filesystem effects go through the [`Deleter`] and [`SpaceProbe`]
//!   traits so the engine can be exercised without touching disk.
//!
//! # Errors
//!
//! A failing deletion or free-space query aborts enforcement with
//! [`EngineError::Io`]. Deletions already performed are not rolled back.
//!
//! # Examples
//!
//! ```
//! use std::time::{Duration, SystemTime};
//! use engine::{Budget, BudgetEnforcer, FileRecord, FileSet, NoSpaceProbe, RetentionMatcher,
//!     RetentionPolicy, SECONDS_PER_DAY};
//! use schedule::{Distribution, Extent, ScheduleGenerator};
//!
//! struct Forget;
//! impl engine::Deleter for Forget {
//!     fn delete(&mut self, _: &FileRecord) -> std::io::Result<()> { Ok(()) }
//! }
//!
//! let now = SystemTime::UNIX_EPOCH + Duration::from_secs(10_000 * SECONDS_PER_DAY);
//! let day = Duration::from_secs(SECONDS_PER_DAY);
//! let mut set = FileSet::new((0..6).map(|n| FileRecord::new(format!("b{n}"), 1, now - day * n)));
//! set.sort_newest_first();
//!
//! let schedule = ScheduleGenerator::new(Distribution::Fibonacci)
//!     .generate(Extent::Depth(4))
//!     .unwrap();
//! RetentionMatcher::new(&schedule, now).mark(set.records_mut());
//!
//! let policy = RetentionPolicy::new(Budget::Count(3));
//! let summary = BudgetEnforcer::new(&policy, &mut Forget, &mut NoSpaceProbe, now)
//!     .enforce(set.records_mut())
//!     .unwrap();
//! assert_eq!(summary.retained, 3);
//! ```

mod collaborators;
mod enforcer;
mod error;
mod matcher;
mod policy;
mod record;

pub use collaborators::{Deleter, NoSpaceProbe, SpaceProbe};
pub use enforcer::{BudgetEnforcer, EnforcementSummary};
pub use error::{EngineError, EngineResult};
pub use matcher::{MatchSummary, RetentionMatcher};
pub use policy::{Budget, RetentionPolicy};
pub use record::{FileRecord, FileSet, SECONDS_PER_DAY, age_in_days};
