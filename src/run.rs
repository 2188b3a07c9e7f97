use anyhow::{Context, Result};
use std::io::{self, Write};
use std::path::Path;
use std::time::Instant;
use tracing::info;

use crate::analyzer::{analyze_file, AnalyzeOptions};
use crate::discover::analyze_run;
use crate::report::{print_summary, CrossRunSummary, RunAnalysis};
use crate::utils::validate_args;
use crate::Args;

/// Validate arguments, analyze every path and print the summary.
pub fn execute(args: &Args) -> Result<()> {
    validate_args(args)?;
    let runs = analyze_paths(args)?;
    print_results(&runs, args)
}

/// Analyze every path given on the command line.
///
/// Directories are treated as run directories; files are parsed directly and
/// any failure reading them is fatal.
pub fn analyze_paths(args: &Args) -> Result<Vec<RunAnalysis>> {
    let total_start_time = Instant::now();
    let opts = AnalyzeOptions {
        verbose: args.verbose,
    };
    info!(action = "start", component = "egress_audit", path_count = args.paths.len(), "Starting access log analysis");

    let mut runs = Vec::with_capacity(args.paths.len());
    for path in &args.paths {
        let run_id = run_id(path);
        let analysis = if path.is_dir() {
            analyze_run(path, &args.log_name, &opts)
                .with_context(|| format!("Failed to analyze run directory {:?}", path))?
        } else if path.is_file() {
            let analysis = analyze_file(path, &opts)
                .with_context(|| format!("Failed to parse access log {:?}", path))?;
            Some(analysis)
        } else {
            anyhow::bail!("Path not found: {:?}", path);
        };
        runs.push(RunAnalysis { run_id, analysis });
    }

    info!(
        action = "complete",
        component = "egress_audit",
        run_count = runs.len(),
        duration_ms = total_start_time.elapsed().as_millis(),
        "Analysis completed"
    );
    Ok(runs)
}

pub fn print_results(runs: &[RunAnalysis], args: &Args) -> Result<()> {
    let summary = CrossRunSummary::from_runs(runs);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    if args.json {
        serde_json::to_writer_pretty(&mut out, &summary).context("Failed to write JSON summary")?;
        writeln!(out)?;
    } else {
        print_summary(&mut out, summary.as_ref(), args.verbose)?;
    }
    Ok(())
}

fn run_id(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
