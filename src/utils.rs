use crate::fluctuation::round_tenths;
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

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(timer)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Abbreviates large magnitudes with a B/M/K suffix and one decimal place.
pub fn format_number(num: f64) -> String {
    if num >= 1_000_000_000.0 {
        format!("{:.1}B", round_tenths(num / 1_000_000_000.0))
    } else if num >= 1_000_000.0 {
        format!("{:.1}M", round_tenths(num / 1_000_000.0))
    } else if num >= 1_000.0 {
        format!("{:.1}K", round_tenths(num / 1_000.0))
    } else {
        num.to_string()
    }
}

pub fn validate_args(args: &crate::args::Args) -> anyhow::Result<()> {
    if args.refreshes == 0 {
        anyhow::bail!("--refreshes must be greater than 0");
    }

    if args.metrics.is_empty() {
        anyhow::bail!("--metrics must name at least one metric");
    }

    if let (Some(from), Some(to)) = (args.from, args.to) {
        if from > to {
            anyhow::bail!("--from ({}) must not be after --to ({})", from, to);
        }
    }

    Ok(())
}
