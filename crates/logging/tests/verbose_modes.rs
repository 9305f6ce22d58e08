//! Integration tests for verbose mode mappings.
//!
//! These tests verify that VerbosityConfig::from_verbose_level maps the
//! -v, -vv, -vvv flags onto the expected info and debug flag combinations,
//! and that the scoped subscriber honours them.

use logging::{
    DebugFlag, DiagnosticEvent, InfoFlag, VerbosityConfig, debug_gte, drain_events, info_gte,
    init, scoped,
};

// ============================================================================
// Flag mapping
// ============================================================================

/// Verifies level 0 keeps every category silent.
#[test]
fn verbose_level_0_is_silent() {
    init(VerbosityConfig::from_verbose_level(0));

    for flag in InfoFlag::ALL {
        assert!(!info_gte(flag, 1), "{flag:?} should be off");
    }
    for flag in DebugFlag::ALL {
        assert!(!debug_gte(flag, 1), "{flag:?} should be off");
    }
}

/// Verifies -v reports deletions and the summary.
#[test]
fn verbose_level_1_reports_deletions() {
    init(VerbosityConfig::from_verbose_level(1));

    assert!(info_gte(InfoFlag::Del, 1));
    assert!(info_gte(InfoFlag::Stats, 1));
    assert!(!info_gte(InfoFlag::Keep, 1));
    assert!(!debug_gte(DebugFlag::Budget, 1));
}

/// Verifies -vvv enables per-record matching output.
#[test]
fn verbose_level_3_enables_match_debugging() {
    init(VerbosityConfig::from_verbose_level(3));

    assert!(debug_gte(DebugFlag::Match, 2));
    assert!(!debug_gte(DebugFlag::Match, 3));
}

// ============================================================================
// Event collection
// ============================================================================

/// Verifies events are collected per flag with their level.
#[test]
fn scoped_run_collects_info_and_debug_events() {
    drain_events();

    scoped(VerbosityConfig::from_verbose_level(2), || {
        tracing::info!(target: "fileprune::schedule", depth = 3_usize, "generated schedule");
        tracing::debug!(target: "fileprune::budget", surviving = 5_u64, "budget unmet");
        tracing::debug!(target: "fileprune::match", "not enabled at -vv");
    });

    let events = drain_events();
    assert_eq!(events.len(), 2);
    match &events[0] {
        DiagnosticEvent::Info { flag, level, message } => {
            assert_eq!(*flag, InfoFlag::Schedule);
            assert_eq!(*level, 1);
            assert_eq!(message, "generated schedule depth=3");
        }
        other => panic!("expected info event, got {other:?}"),
    }
    match &events[1] {
        DiagnosticEvent::Debug { flag, level, .. } => {
            assert_eq!(*flag, DebugFlag::Budget);
            assert_eq!(*level, 2);
        }
        other => panic!("expected debug event, got {other:?}"),
    }
}

/// Verifies explicit --info tokens can enable categories on top of -v.
#[test]
fn info_tokens_extend_verbose_level() {
    drain_events();
    let mut config = VerbosityConfig::from_verbose_level(1);
    config.apply_info_flag("keep").expect("known flag");

    scoped(config, || {
        tracing::info!(target: "fileprune::keep", "retained");
    });

    assert_eq!(drain_events().len(), 1);
}
