use clap::{Parser, ValueEnum};
use serde::Serialize;

use crate::period::Period;

#[derive(Parser, Debug)]
#[command(
    name = "pandemic-pulse",
    about = "Generate simulated pandemic statistics for a live dashboard",
    version,
    long_about = None
)]
pub struct Args {
    /// Region filter (global, us, eu, asia, africa, sa)
    #[arg(short, long, default_value = "global")]
    pub region: String,

    /// First month of the time series to show, e.g. "Jan 2021"
    #[arg(long)]
    pub from: Option<Period>,

    /// Last month of the time series to show, e.g. "Dec 2022"
    #[arg(long)]
    pub to: Option<Period>,

    /// Metrics to display
    #[arg(
        short,
        long,
        value_enum,
        value_delimiter = ',',
        default_values_t = Metric::ALL.to_vec()
    )]
    pub metrics: Vec<Metric>,

    /// Number of refreshes to run
    #[arg(short = 'n', long, default_value_t = 1)]
    pub refreshes: usize,

    /// Milliseconds to wait between refreshes
    #[arg(short, long, default_value_t = 5000)]
    pub interval_ms: u64,

    /// Seed for reproducible output
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Emit each refresh as JSON instead of text
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Cases,
    Deaths,
    Recoveries,
    Vaccinations,
}

impl Metric {
    pub const ALL: [Metric; 4] = [
        Metric::Cases,
        Metric::Deaths,
        Metric::Recoveries,
        Metric::Vaccinations,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Cases => "Cases",
            Metric::Deaths => "Deaths",
            Metric::Recoveries => "Recoveries",
            Metric::Vaccinations => "Vaccinations",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["pandemic-pulse"]).unwrap();
        assert_eq!(args.region, "global");
        assert_eq!(args.metrics, Metric::ALL.to_vec());
        assert_eq!(args.refreshes, 1);
        assert_eq!(args.interval_ms, 5000);
        assert!(args.from.is_none());
        assert!(!args.json);
    }

    #[test]
    fn test_parses_periods_and_metrics() {
        let args = Args::try_parse_from([
            "pandemic-pulse",
            "--from",
            "Jan 2021",
            "--to",
            "Jun 2022",
            "--metrics",
            "cases,vaccinations",
            "--seed",
            "7",
        ])
        .unwrap();
        assert_eq!(args.from, Some(Period::new(2021, 1).unwrap()));
        assert_eq!(args.to, Some(Period::new(2022, 6).unwrap()));
        assert_eq!(args.metrics, vec![Metric::Cases, Metric::Vaccinations]);
        assert_eq!(args.seed, Some(7));
    }

    #[test]
    fn test_rejects_bad_period() {
        assert!(Args::try_parse_from(["pandemic-pulse", "--from", "soon"]).is_err());
    }
}
