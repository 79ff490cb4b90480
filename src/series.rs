use rand::Rng;
use std::time::Instant;
use tracing::info;

use crate::baseline::SEED_SEQUENCE;
use crate::fluctuation::{fluctuate, DEFAULT_PERCENT_BOUND};
use crate::stats::TimeSeriesPoint;

pub const GENERATED_MONTHS: usize = 36;

const CASES_GROWTH: f64 = 1.05;
const DEATHS_GROWTH: f64 = 1.02;
const RECOVERIES_GROWTH: f64 = 1.08;
const VACCINATIONS_GROWTH: f64 = 1.15;

/// First year in which vaccinations grow instead of carrying forward.
const VACCINE_ROLLOUT_YEAR: i32 = 2021;

/// The fixed 2020 seed months followed by `GENERATED_MONTHS` extrapolated months.
pub fn generate_series<R: Rng + ?Sized>(rng: &mut R) -> Vec<TimeSeriesPoint> {
    let start_time = Instant::now();

    let mut points: Vec<TimeSeriesPoint> = SEED_SEQUENCE
        .iter()
        .map(|seed| TimeSeriesPoint {
            period: seed.period.to_string(),
            cases: seed.cases,
            deaths: seed.deaths,
            recoveries: seed.recoveries,
            vaccinations: seed.vaccinations,
        })
        .collect();
    points.reserve(GENERATED_MONTHS);

    let mut period = SEED_SEQUENCE[SEED_SEQUENCE.len() - 1].period;

    for _ in 0..GENERATED_MONTHS {
        period = period.next();
        let prev = &points[points.len() - 1];

        let vaccinations = if period.year >= VACCINE_ROLLOUT_YEAR {
            fluctuate(
                rng,
                prev.vaccinations as f64 * VACCINATIONS_GROWTH,
                DEFAULT_PERCENT_BOUND,
            )
        } else {
            prev.vaccinations
        };

        let point = TimeSeriesPoint {
            period: period.to_string(),
            cases: fluctuate(rng, prev.cases as f64 * CASES_GROWTH, DEFAULT_PERCENT_BOUND),
            deaths: fluctuate(rng, prev.deaths as f64 * DEATHS_GROWTH, DEFAULT_PERCENT_BOUND),
            recoveries: fluctuate(
                rng,
                prev.recoveries as f64 * RECOVERIES_GROWTH,
                DEFAULT_PERCENT_BOUND,
            ),
            vaccinations,
        };
        points.push(point);
    }

    info!(
        action = "complete",
        component = "series_generator",
        point_count = points.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Generated time series"
    );

    points
}
