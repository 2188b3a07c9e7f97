use glob::{glob, Pattern};
use std::path::{Path, PathBuf};
use std::time::Instant;
use tracing::{info, warn};

use crate::analyzer::{analyze_file, AnalyzeOptions};
use crate::error::DiscoveryError;
use crate::stats::DomainAnalysis;

/// File name pattern for per-process access logs inside a log directory.
pub const ACCESS_LOG_PATTERN: &str = "access-*.log";

/// Conventional name of the aggregate log file or log directory in a run.
pub const DEFAULT_LOG_NAME: &str = "access.log";

/// Where a run keeps its access logs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunLogSource {
    /// A directory of `access-*.log` files.
    Directory(PathBuf),
    /// A single aggregate log file.
    File(PathBuf),
}

/// Locate the access logs of a run directory, preferring the directory form.
pub fn locate_run_logs(run_dir: &Path, log_name: &str) -> Option<RunLogSource> {
    let candidate = run_dir.join(log_name);
    if candidate.is_dir() {
        Some(RunLogSource::Directory(candidate))
    } else if candidate.is_file() {
        Some(RunLogSource::File(candidate))
    } else {
        None
    }
}

/// List the `access-*.log` files directly under `log_dir`, sorted by path.
pub fn find_log_files(log_dir: &Path) -> Result<Vec<PathBuf>, DiscoveryError> {
    let escaped_dir = PathBuf::from(Pattern::escape(&log_dir.to_string_lossy()));
    let pattern = escaped_dir
        .join(ACCESS_LOG_PATTERN)
        .to_string_lossy()
        .into_owned();
    let entries = glob(&pattern).map_err(|source| DiscoveryError::Pattern {
        pattern: pattern.clone(),
        source,
    })?;

    let mut paths = Vec::new();
    for entry in entries {
        let path = entry.map_err(|e| DiscoveryError::Io {
            path: e.path().to_path_buf(),
            source: e.into_error(),
        })?;
        if path.is_file() {
            paths.push(path);
        }
    }

    paths.sort();
    Ok(paths)
}

/// Analyze every access log in a directory and merge the results.
///
/// Returns `Ok(None)` when the directory holds no matching files. Files that
/// fail to parse are skipped.
pub fn analyze_log_dir(
    log_dir: &Path,
    opts: &AnalyzeOptions,
) -> Result<Option<DomainAnalysis>, DiscoveryError> {
    let start_time = Instant::now();
    let files = find_log_files(log_dir)?;
    info!(action = "discover", component = "log_dir", dir = ?log_dir, file_count = files.len(), "Found access log files");

    if files.is_empty() {
        return Ok(None);
    }

    let mut analyses = Vec::with_capacity(files.len());
    for path in &files {
        match analyze_file(path, opts) {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => {
                if opts.verbose {
                    warn!(action = "parse", component = "log_dir", file_path = ?path, error = %e, "Skipping unreadable access log");
                }
            }
        }
    }

    let merged = DomainAnalysis::merge(&analyses);
    info!(
        action = "complete",
        component = "log_dir",
        files_parsed = analyses.len(),
        files_skipped = files.len() - analyses.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Merged access logs"
    );
    Ok(Some(merged))
}

/// Analyze the access logs of a single run directory.
///
/// A run without any access log yields `Ok(None)`. An aggregate log file that
/// cannot be read is treated the same way.
pub fn analyze_run(
    run_dir: &Path,
    log_name: &str,
    opts: &AnalyzeOptions,
) -> Result<Option<DomainAnalysis>, DiscoveryError> {
    match locate_run_logs(run_dir, log_name) {
        Some(RunLogSource::Directory(dir)) => analyze_log_dir(&dir, opts),
        Some(RunLogSource::File(path)) => match analyze_file(&path, opts) {
            Ok(analysis) => Ok(Some(analysis)),
            Err(e) => {
                if opts.verbose {
                    warn!(action = "parse", component = "run", file_path = ?path, error = %e, "Skipping unreadable access log");
                }
                Ok(None)
            }
        },
        None => {
            info!(action = "discover", component = "run", run_dir = ?run_dir, "No access logs found for run");
            Ok(None)
        }
    }
}
