use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

use crate::domain::extract_domain;
use crate::entry::{is_skippable, LogEntry};
use crate::error::AnalyzeError;
use crate::outcome::classify;
use crate::stats::{DomainAnalysis, DomainTally};

/// Options threaded through every analysis call.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyzeOptions {
    /// Report malformed lines and skipped files as warnings.
    pub verbose: bool,
}

/// Scan one access log source line by line.
///
/// Malformed lines are skipped and invalid UTF-8 is decoded lossily; only a
/// read failure aborts the scan.
pub fn analyze_reader<R: BufRead>(
    reader: R,
    opts: &AnalyzeOptions,
) -> Result<DomainAnalysis, AnalyzeError> {
    let mut tally = DomainTally::default();
    let mut malformed = 0usize;

    // Raw byte lines: stray non-UTF-8 bytes must not abort the scan
    for (index, raw) in reader.split(b'\n').enumerate() {
        let line_number = index + 1;
        let raw = raw.map_err(|source| AnalyzeError::Read {
            line: line_number,
            source,
        })?;
        let line = String::from_utf8_lossy(&raw);

        if is_skippable(&line) {
            continue;
        }

        let entry = match LogEntry::parse(&line) {
            Ok(entry) => entry,
            Err(e) => {
                malformed += 1;
                if opts.verbose {
                    warn!(action = "parse", component = "access_log", line_number, error = %e, "Skipping malformed log line");
                }
                continue;
            }
        };

        let domain = extract_domain(&entry.url);
        if domain.is_empty() {
            tally.record_unresolved();
            continue;
        }
        tally.record(&domain, classify(&entry.status));
    }

    let analysis = tally.finish();
    info!(
        action = "complete",
        component = "access_log",
        total_requests = analysis.total_requests,
        allowed = analysis.allowed_count,
        denied = analysis.denied_count,
        malformed,
        "Access log scanned"
    );
    Ok(analysis)
}

/// Open and scan a single access log file.
pub fn analyze_file(path: &Path, opts: &AnalyzeOptions) -> Result<DomainAnalysis, AnalyzeError> {
    let start_time = Instant::now();
    info!(action = "start", component = "access_log", file_path = ?path, "Parsing access log");

    let file = File::open(path).map_err(|e| AnalyzeError::open(path, e))?;
    let analysis = analyze_reader(BufReader::new(file), opts)?;

    info!(
        action = "timing",
        component = "access_log",
        file_path = ?path,
        duration_ms = start_time.elapsed().as_millis(),
        "Access log parsed"
    );
    Ok(analysis)
}
