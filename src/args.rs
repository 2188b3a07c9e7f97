use clap::Parser;
use std::path::PathBuf;

use crate::discover::DEFAULT_LOG_NAME;

#[derive(Parser, Debug)]
#[command(
    name = "egresslog",
    about = "Audit proxy access logs to find which domains were allowed or denied",
    version,
    long_about = None
)]
pub struct Args {
    /// Run directories or individual access log files to analyze
    #[arg(required = true)]
    pub paths: Vec<PathBuf>,

    /// Name of the aggregate log file or log directory inside a run
    #[arg(long, default_value = DEFAULT_LOG_NAME)]
    pub log_name: String,

    /// Print the summary as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging and per-run breakdown
    #[arg(short, long)]
    pub verbose: bool,
}
