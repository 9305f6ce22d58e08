#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `schedule` turns a statistical shape into a [`Schedule`]: an ascending
//! list of day thresholds, one per retention bucket. A file whose age in
//! days falls between two consecutive thresholds is a candidate to
//! represent the upper bucket; everything else is eventually pruned.
//!
//! # Distributions
//!
//! - [`Distribution::Uniform`] keeps one bucket per day (`0, 1, 2, ...`).
//! - [`Distribution::Fibonacci`] follows `1, 1, 2, 3, 5, ...`.
//! - [`Distribution::Exponential`] follows powers of a base, advancing by at
//!   least one day per bucket.
//! - [`Distribution::Gaussian`] gives every bucket the same probability mass
//!   under a half-normal curve ([`HalfNormal`]).
//!
//! # Extents
//!
//! [`resolve_extent`] picks between an explicit depth and an open-ended
//! horizon from the configured budget and an [`Inventory`] of the input.
//! [`ScheduleGenerator::generate`] then produces the thresholds. When the
//! schedule is only matched against records,
//! [`ScheduleGenerator::covering`] stops it at the oldest record so the
//! bucket count stays bounded by the input.
//!
//! # Examples
//!
//! ```
//! use schedule::{Distribution, Extent, ScheduleGenerator};
//!
//! let generator = ScheduleGenerator::new(Distribution::Fibonacci);
//! let schedule = generator.generate(Extent::Depth(6))?;
//! assert_eq!(schedule.as_slice(), &[1, 1, 2, 3, 5, 8]);
//!
//! let open_ended = generator.generate(Extent::Horizon(20))?;
//! assert_eq!(open_ended.last(), Some(21));
//!
//! let covering = generator.covering(4).generate(Extent::Depth(6))?;
//! assert_eq!(covering.as_slice(), &[1, 1, 2, 3, 5]);
//! # Ok::<(), schedule::ScheduleError>(())
//! ```

mod distribution;
mod error;
mod extent;
mod gaussian;
mod generator;
mod progression;
mod schedule;

pub use distribution::{Distribution, Exponent};
pub use error::{ScheduleError, ScheduleResult};
pub use extent::{DepthSource, Extent, Inventory, resolve_extent};
pub use gaussian::{GAUSSIAN_DAY_LIMIT, HalfNormal};
pub use generator::ScheduleGenerator;
pub use progression::EXPONENTIAL_CEILING;
pub use schedule::Schedule;
