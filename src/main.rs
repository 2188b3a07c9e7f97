use clap::Parser;
use tracing::error;

use egresslog::run::execute;
use egresslog::utils::setup_logging;
use egresslog::Args;

fn main() {
    let args = Args::parse();
    setup_logging(args.verbose);

    if let Err(e) = execute(&args) {
        error!("Error: {:#}", e);
        std::process::exit(1);
    }
}
