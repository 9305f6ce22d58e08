//! Drives one run: load records, build the schedule, match, enforce, report.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use engine::{BudgetEnforcer, FileRecord, FileSet, NoSpaceProbe, RetentionMatcher, SpaceProbe};
use metadata::{FsDeleter, StatvfsProbe, local_offset, parse_dates, stat_files};
use schedule::{ScheduleGenerator, resolve_extent};

use crate::config::{InputKind, PruneConfig, RunMode};
use crate::error::CliError;
use crate::report;

/// Runs `config` against the current time.
pub(crate) fn execute<Out>(config: &PruneConfig, stdout: &mut Out) -> Result<(), CliError>
where
    Out: Write + ?Sized,
{
    execute_at(config, SystemTime::now(), stdout)
}

/// Runs `config` with ages measured from `now`.
pub(crate) fn execute_at<Out>(
    config: &PruneConfig,
    now: SystemTime,
    stdout: &mut Out,
) -> Result<(), CliError>
where
    Out: Write + ?Sized,
{
    let mut set = FileSet::new(load_records(config)?);
    set.sort_newest_first();

    let inventory = set.inventory(now);
    let source = config.policy().budget().depth_source();
    let extent = resolve_extent(config.distribution(), source, &inventory);
    let generator = ScheduleGenerator::new(*config.distribution());

    if config.mode() == RunMode::PrintSchedule {
        let schedule = generator.generate(extent)?;
        return report::write_schedule(stdout, &schedule).map_err(output_error);
    }

    let schedule = generator.covering(inventory.horizon_days).generate(extent)?;

    let matched = RetentionMatcher::new(&schedule, now).mark(set.records_mut());
    tracing::info!(
        target: "fileprune::stats",
        files = set.len(),
        total_size = set.total_size(),
        kept = matched.kept,
        candidates = matched.candidates,
        "matched records against the schedule"
    );

    let mut deleter = FsDeleter;
    let mut probe = space_probe(config);
    BudgetEnforcer::new(config.policy(), &mut deleter, probe.as_mut(), now)
        .dry_run(config.mode().is_dry_run())
        .enforce(set.records_mut())?;

    let print_deleted = match config.mode() {
        RunMode::PrintDelete => true,
        RunMode::PrintKeep => false,
        RunMode::Execute | RunMode::PrintSchedule => return Ok(()),
    };
    let ordered = set.in_input_order();
    let selected = ordered
        .into_iter()
        .filter(|record| record.is_deleted() == print_deleted);
    report::write_names(stdout, selected).map_err(output_error)
}

fn load_records(config: &PruneConfig) -> Result<Vec<FileRecord>, CliError> {
    let operands = config.operands();
    let records = match config.input() {
        InputKind::Files(basis) => stat_files(operands.iter().map(PathBuf::from), *basis)?,
        InputKind::Dates(pattern) => parse_dates(
            operands.iter().map(|operand| operand.to_string_lossy()),
            pattern,
            local_offset(),
        )?,
    };
    Ok(records)
}

/// Free space is measured next to the first file operand.
fn space_probe(config: &PruneConfig) -> Box<dyn SpaceProbe> {
    match (config.input(), config.operands().first()) {
        (InputKind::Files(_), Some(first)) => Box::new(StatvfsProbe::for_operand(Path::new(first))),
        _ => Box::new(NoSpaceProbe),
    }
}

fn output_error(source: io::Error) -> CliError {
    CliError::Io {
        operation: "write",
        target: PathBuf::from("<stdout>"),
        source,
    }
}
