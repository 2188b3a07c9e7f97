use time::macros::format_description;
use tracing_subscriber::fmt::time::LocalTime;
use tracing_subscriber::EnvFilter;

pub fn setup_logging(verbose: bool) {
    let default_level = if verbose { "info" } else { "error" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let timer = LocalTime::new(format_description!(
        "[hour]:[minute]:[second].[subsecond digits:3]"
    ));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_writer(std::io::stderr)
        .init();
}

pub fn format_number(num: u64) -> String {
    let digits = num.to_string();
    let mut formatted = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            formatted.push(',');
        }
        formatted.push(c);
    }
    formatted
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.log_name.trim().is_empty() {
        anyhow::bail!("--log-name must not be empty");
    }

    if args.log_name.contains('/') || args.log_name.contains(std::path::MAIN_SEPARATOR) {
        anyhow::bail!("--log-name must be a file name, not a path");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::args::Args;
    use clap::Parser;

    #[test]
    fn format_number_groups_thousands() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(1000), "1,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn validate_args_rejects_bad_log_names() {
        let ok = Args::parse_from(["egresslog", "runs/1"]);
        assert!(validate_args(&ok).is_ok());

        let empty = Args::parse_from(["egresslog", "--log-name", "", "runs/1"]);
        assert!(validate_args(&empty).is_err());

        let nested = Args::parse_from(["egresslog", "--log-name", "logs/access.log", "runs/1"]);
        assert!(validate_args(&nested).is_err());
    }
}
