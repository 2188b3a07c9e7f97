pub mod analyzer;
pub mod args;
pub mod discover;
pub mod domain;
pub mod entry;
pub mod error;
pub mod outcome;
pub mod report;
pub mod run;
pub mod stats;
pub mod utils;

pub use analyzer::{analyze_file, analyze_reader, AnalyzeOptions};
pub use args::Args;
pub use discover::{analyze_log_dir, analyze_run, find_log_files};
pub use domain::extract_domain;
pub use entry::LogEntry;
pub use error::{AnalyzeError, DiscoveryError, FormatError};
pub use outcome::{classify, Outcome};
pub use report::{print_summary, CrossRunSummary, RunAnalysis};
pub use run::analyze_paths;
pub use stats::DomainAnalysis;
