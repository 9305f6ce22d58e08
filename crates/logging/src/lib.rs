#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! # Overview
//!
//! `logging` provides the verbosity flag system shared by the fileprune
//! workspace. Library crates emit plain `tracing` events; this crate decides
//! which of them are shown, based on per-category levels configured with
//! `-v`, `--info=FLAGS` and `--debug=FLAGS`.
//!
//! # Design
//!
//! - [`InfoFlag`] and [`DebugFlag`] name the diagnostic categories. Their
//!   [`name`](InfoFlag::name) doubles as the last segment of the tracing
//!   target (`fileprune::del`, `fileprune::match`, ...).
//! - [`VerbosityConfig`] stores one level per flag and maps `-v` counts onto
//!   sensible defaults.
//! - [`PruneLayer`] is a `tracing_subscriber` layer that filters events by
//!   flag and level and collects the accepted ones in thread-local storage.
//! - [`scoped`] installs the layer for the duration of a closure, so every
//!   run (and every test) gets its own subscriber.
//!
//! # Invariants
//!
//! - Events whose target does not map to a flag are ignored.
//! - Collected events are kept until [`drain_events`] is called on the same
//!   thread.

mod config;
mod levels;
mod thread_local;
mod tracing_bridge;

pub use config::VerbosityConfig;
pub use levels::{DebugFlag, DebugLevels, InfoFlag, InfoLevels};
pub use thread_local::{
    DiagnosticEvent, debug_gte, drain_events, emit_debug, emit_info, info_gte, init,
};
pub use tracing_bridge::{LOG_FILTER_ENV, PruneLayer, scoped};
