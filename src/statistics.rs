use rand::Rng;
use tracing::debug;

use crate::baseline;
use crate::fluctuation::{drift, fluctuate};
use crate::stats::{StatisticsSnapshot, TrendStats, VaccinationStats};

/// A fresh rollup perturbed from the baseline snapshot.
///
/// Counts go through `fluctuate` with per-field bounds; rates drift
/// additively and are rounded to one decimal. `region` does not change the
/// result.
pub fn generate_statistics<R: Rng + ?Sized>(rng: &mut R, region: &str) -> StatisticsSnapshot {
    debug!(action = "generate", component = "statistics_generator", region = region, "Generating statistics rollup");

    let vaccinations = VaccinationStats {
        first_dose: drift(rng, baseline::FIRST_DOSE, -0.1, 0.2),
        second_dose: drift(rng, baseline::SECOND_DOSE, -0.1, 0.2),
        booster: drift(rng, baseline::BOOSTER, -0.1, 0.3),
        total_doses: fluctuate(rng, baseline::TOTAL_DOSES as f64, 0.5),
    };

    let trends = TrendStats {
        weekly_average: fluctuate(rng, baseline::WEEKLY_AVERAGE as f64, 5.0),
        peak_value: fluctuate(rng, baseline::PEAK_VALUE as f64, 1.0),
        peak_date: baseline::PEAK_DATE.to_string(),
        growth_rate: drift(rng, baseline::GROWTH_RATE, -0.5, 0.5),
    };

    StatisticsSnapshot {
        total_cases: fluctuate(rng, baseline::TOTAL_CASES as f64, 1.0),
        new_cases: fluctuate(rng, baseline::NEW_CASES as f64, 10.0),
        cases_change: drift(rng, baseline::CASES_CHANGE, -0.5, 0.5),
        total_deaths: fluctuate(rng, baseline::TOTAL_DEATHS as f64, 0.5),
        new_deaths: fluctuate(rng, baseline::NEW_DEATHS as f64, 8.0),
        deaths_change: drift(rng, baseline::DEATHS_CHANGE, -0.5, 0.5),
        total_recovered: fluctuate(rng, baseline::TOTAL_RECOVERED as f64, 1.0),
        recovery_rate: drift(rng, baseline::RECOVERY_RATE, -0.2, 0.2),
        recovery_change: drift(rng, baseline::RECOVERY_CHANGE, -0.2, 0.2),
        active_cases: fluctuate(rng, baseline::ACTIVE_CASES as f64, 2.0),
        critical_cases: fluctuate(rng, baseline::CRITICAL_CASES as f64, 3.0),
        case_fatality_rate: drift(rng, baseline::CASE_FATALITY_RATE, -0.1, 0.1),
        vaccinations,
        trends,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn has_one_decimal(value: f64) -> bool {
        (value * 10.0 - (value * 10.0).round()).abs() < 1e-9
    }

    fn within_percent(value: u64, base: u64, percent: f64) -> bool {
        let base = base as f64;
        (value as f64 - base).abs() <= base * percent / 100.0 + 0.5
    }

    #[test]
    fn test_dose_percentages_stay_in_band() {
        let mut rng = ChaCha8Rng::seed_from_u64(20);
        for _ in 0..1_000 {
            let stats = generate_statistics(&mut rng, "global");
            assert!((68.6..=68.9).contains(&stats.vaccinations.first_dose));
            assert!((62.2..=62.5).contains(&stats.vaccinations.second_dose));
            assert!((34.7..=35.1).contains(&stats.vaccinations.booster));
        }
    }

    #[test]
    fn test_rates_rounded_to_one_decimal() {
        let mut rng = ChaCha8Rng::seed_from_u64(21);
        for _ in 0..200 {
            let stats = generate_statistics(&mut rng, "eu");
            assert!(has_one_decimal(stats.recovery_rate));
            assert!(has_one_decimal(stats.recovery_change));
            assert!(has_one_decimal(stats.cases_change));
            assert!(has_one_decimal(stats.deaths_change));
            assert!(has_one_decimal(stats.case_fatality_rate));
            assert!(has_one_decimal(stats.trends.growth_rate));
            assert!((96.2..=96.6).contains(&stats.recovery_rate));
        }
    }

    #[test]
    fn test_counts_respect_field_bounds() {
        let mut rng = ChaCha8Rng::seed_from_u64(22);
        for _ in 0..200 {
            let stats = generate_statistics(&mut rng, "global");
            assert!(within_percent(stats.total_cases, baseline::TOTAL_CASES, 1.0));
            assert!(within_percent(stats.new_cases, baseline::NEW_CASES, 10.0));
            assert!(within_percent(stats.total_deaths, baseline::TOTAL_DEATHS, 0.5));
            assert!(within_percent(stats.new_deaths, baseline::NEW_DEATHS, 8.0));
            assert!(within_percent(stats.active_cases, baseline::ACTIVE_CASES, 2.0));
            assert!(within_percent(stats.critical_cases, baseline::CRITICAL_CASES, 3.0));
            assert!(within_percent(stats.vaccinations.total_doses, baseline::TOTAL_DOSES, 0.5));
            assert!(within_percent(stats.trends.weekly_average, baseline::WEEKLY_AVERAGE, 5.0));
            assert!(within_percent(stats.trends.peak_value, baseline::PEAK_VALUE, 1.0));
        }
    }

    #[test]
    fn test_peak_date_passes_through() {
        let mut rng = ChaCha8Rng::seed_from_u64(23);
        assert_eq!(generate_statistics(&mut rng, "asia").trends.peak_date, "2022-01-15");
    }

    #[test]
    fn test_region_does_not_change_shape_or_baseline() {
        let a = generate_statistics(&mut ChaCha8Rng::seed_from_u64(24), "global");
        let b = generate_statistics(&mut ChaCha8Rng::seed_from_u64(24), "no-such-region");
        assert_eq!(a, b);
    }
}
