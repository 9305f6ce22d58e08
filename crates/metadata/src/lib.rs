#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! Filesystem-facing collaborators of the pruning engine.
//!
//! - [`stat_files`] builds [`FileRecord`](engine::FileRecord)s from operands,
//!   taking the age from the [`TimeBasis`] the user selected.
//! - [`parse_dates`] builds records from date labels with a [`DatePattern`].
//! - [`StatvfsProbe`] implements [`SpaceProbe`](engine::SpaceProbe) for the
//!   free-space budget.
//! - [`FsDeleter`] implements [`Deleter`](engine::Deleter), removing
//!   directories recursively.

mod dates;
mod delete;
mod error;
mod space;
mod stat;
mod time_basis;

pub use dates::{DatePattern, local_offset, parse_dates};
pub use delete::{FsDeleter, remove_path};
pub use error::MetadataError;
pub use space::StatvfsProbe;
pub use stat::{stat_file, stat_files};
pub use time_basis::{ParseTimeBasisError, TimeBasis};
