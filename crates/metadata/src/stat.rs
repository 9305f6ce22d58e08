use std::fs;
use std::path::Path;

use engine::FileRecord;

use crate::error::MetadataError;
use crate::time_basis::TimeBasis;

/// Builds one record per operand from `stat`, following symlinks.
///
/// Stops at the first operand that cannot be inspected.
pub fn stat_files<I, P>(operands: I, basis: TimeBasis) -> Result<Vec<FileRecord>, MetadataError>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    operands
        .into_iter()
        .map(|operand| stat_file(operand.as_ref(), basis))
        .collect()
}

/// Builds the record for a single operand.
pub fn stat_file(path: &Path, basis: TimeBasis) -> Result<FileRecord, MetadataError> {
    let stat_error = |source| MetadataError::Stat {
        path: path.to_path_buf(),
        source,
    };
    let metadata = fs::metadata(path).map_err(stat_error)?;
    let stamp = basis.timestamp(&metadata).map_err(stat_error)?;

    tracing::debug!(
        target: "fileprune::stat",
        name = %path.display(),
        size = metadata.len(),
        basis = %basis,
        directory = metadata.is_dir(),
        "collected metadata"
    );
    Ok(FileRecord::new(path, metadata.len(), stamp))
}
