//! crates/logging/src/tracing_bridge.rs
//! Bridge between the tracing crate and the fileprune verbosity flags.
//!
//! Library crates emit ordinary `tracing` events with targets of the form
//! `fileprune::<flag>` (for example `fileprune::del` or `fileprune::match`).
//! [`PruneLayer`] maps each target onto an [`InfoFlag`] or [`DebugFlag`],
//! checks it against the thread-local [`VerbosityConfig`], and stores
//! accepted events so the front-end can render them once the run finishes.
//!
//! # Usage
//!
//! ```
//! use logging::{VerbosityConfig, drain_events, scoped};
//!
//! let config = VerbosityConfig::from_verbose_level(1);
//! scoped(config, || {
//!     tracing::info!(target: "fileprune::del", name = "old.tar", "deleting");
//! });
//! let events = drain_events();
//! assert_eq!(events.len(), 1);
//! assert_eq!(events[0].message(), "deleting name=old.tar");
//! ```

use std::fmt::Write as _;

use super::config::VerbosityConfig;
use super::levels::{DebugFlag, InfoFlag};
use super::thread_local::{debug_gte, emit_debug, emit_info, info_gte, init};
use tracing::{Level, Subscriber};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::{Context, Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;

/// Environment variable holding an optional `EnvFilter` directive string.
pub const LOG_FILTER_ENV: &str = "FILEPRUNE_LOG";

/// A tracing layer that bridges tracing events to the fileprune flags.
///
/// Levels are read from the configuration installed with
/// [`init`](crate::init) on the emitting thread.
#[derive(Clone, Copy, Debug, Default)]
pub struct PruneLayer;

impl PruneLayer {

    /// Last `::` segment of a target, so `fileprune::del` yields `del`.
    fn flag_segment(target: &str) -> &str {
        target.rsplit("::").next().unwrap_or(target)
    }

    /// Map a tracing target to an info flag.
    fn target_to_info_flag(target: &str) -> Option<InfoFlag> {
        let segment = Self::flag_segment(target);
        InfoFlag::ALL.into_iter().find(|flag| flag.name() == segment)
    }

    /// Map a tracing target to a debug flag.
    fn target_to_debug_flag(target: &str) -> Option<DebugFlag> {
        let segment = Self::flag_segment(target);
        DebugFlag::ALL.into_iter().find(|flag| flag.name() == segment)
    }

    /// Map a tracing level to a verbosity level.
    const fn level_to_verbosity_level(level: &Level) -> u8 {
        match *level {
            Level::ERROR | Level::WARN | Level::INFO => 1,
            Level::DEBUG => 2,
            Level::TRACE => 3,
        }
    }
}

impl<S> Layer<S> for PruneLayer
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    fn on_event(&self, event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
        let metadata = event.metadata();
        let target = metadata.target();
        let verbosity_level = Self::level_to_verbosity_level(metadata.level());

        if let Some(debug_flag) = Self::target_to_debug_flag(target) {
            if debug_gte(debug_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                emit_debug(debug_flag, verbosity_level, visitor.finish());
            }
            return;
        }

        if let Some(info_flag) = Self::target_to_info_flag(target) {
            if info_gte(info_flag, verbosity_level) {
                let mut visitor = MessageVisitor::default();
                event.record(&mut visitor);
                emit_info(info_flag, verbosity_level, visitor.finish());
            }
        }
    }
}

/// Visitor that renders the message followed by `key=value` fields.
#[derive(Default)]
struct MessageVisitor {
    message: String,
    fields: String,
}

impl MessageVisitor {
    fn finish(self) -> String {
        match (self.message.is_empty(), self.fields.is_empty()) {
            (_, true) => self.message,
            (true, false) => self.fields,
            (false, false) => format!("{} {}", self.message, self.fields),
        }
    }

    fn push_field(&mut self, name: &str, value: std::fmt::Arguments<'_>) {
        if !self.fields.is_empty() {
            self.fields.push(' ');
        }
        let _ = write!(self.fields, "{name}={value}");
    }
}

impl tracing::field::Visit for MessageVisitor {
    fn record_debug(&mut self, field: &tracing::field::Field, value: &dyn std::fmt::Debug) {
        if field.name() == "message" {
            self.message = format!("{value:?}");
        } else {
            self.push_field(field.name(), format_args!("{value:?}"));
        }
    }

    fn record_str(&mut self, field: &tracing::field::Field, value: &str) {
        if field.name() == "message" {
            value.clone_into(&mut self.message);
        } else {
            self.push_field(field.name(), format_args!("{value}"));
        }
    }
}

/// Runs `f` with a fileprune subscriber installed as the thread's default.
///
/// The verbosity configuration is stored in thread-local state first, so
/// events accepted while `f` runs can be retrieved afterwards with
/// [`drain_events`](crate::drain_events). When [`LOG_FILTER_ENV`] holds a
/// valid directive string it is applied as an additional `EnvFilter`.
pub fn scoped<R>(config: VerbosityConfig, f: impl FnOnce() -> R) -> R {
    init(config);

    let filter = EnvFilter::try_from_env(LOG_FILTER_ENV).ok();
    let subscriber = tracing_subscriber::registry()
        .with(filter)
        .with(PruneLayer);

    tracing::subscriber::with_default(subscriber, f)
}
