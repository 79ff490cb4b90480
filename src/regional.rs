use rand::Rng;
use tracing::debug;

use crate::baseline::{INTENSITY, REGIONS};
use crate::fluctuation::{fluctuate, DEFAULT_PERCENT_BOUND};
use crate::stats::{IntensityRecord, RegionalRecord};

const INTENSITY_SWING: f64 = 10.0;

/// Fluctuated figures for every baseline region.
///
/// `region` is accepted for callers that track a selected filter, but the
/// output always covers all regions.
pub fn generate_regional<R: Rng + ?Sized>(rng: &mut R, region: &str) -> Vec<RegionalRecord> {
    debug!(action = "generate", component = "regional_generator", region = region, "Generating regional snapshot");

    REGIONS
        .iter()
        .map(|base| RegionalRecord {
            region: base.region.to_string(),
            cases: fluctuate(rng, base.cases as f64, DEFAULT_PERCENT_BOUND),
            deaths: fluctuate(rng, base.deaths as f64, DEFAULT_PERCENT_BOUND),
            recoveries: fluctuate(rng, base.recoveries as f64, DEFAULT_PERCENT_BOUND),
            vaccinations: fluctuate(rng, base.vaccinations as f64, DEFAULT_PERCENT_BOUND),
        })
        .collect()
}

pub fn generate_intensity<R: Rng + ?Sized>(rng: &mut R) -> Vec<IntensityRecord> {
    INTENSITY
        .iter()
        .map(|base| IntensityRecord {
            id: base.id,
            region: base.region.to_string(),
            intensity: clamp_intensity(
                base.intensity + rng.gen_range(-INTENSITY_SWING..INTENSITY_SWING),
            ),
        })
        .collect()
}

pub fn clamp_intensity(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    const EXPECTED_REGIONS: [&str; 6] = [
        "North America",
        "Europe",
        "Asia",
        "South America",
        "Africa",
        "Oceania",
    ];

    fn names(records: &[RegionalRecord]) -> Vec<&str> {
        records.iter().map(|r| r.region.as_str()).collect()
    }

    #[test]
    fn test_region_argument_does_not_filter() {
        let mut rng = ChaCha8Rng::seed_from_u64(10);
        for region in ["global", "asia", "eu", "Atlantis", ""] {
            let records = generate_regional(&mut rng, region);
            assert_eq!(names(&records), EXPECTED_REGIONS);
        }
    }

    #[test]
    fn test_regional_values_within_five_percent() {
        let mut rng = ChaCha8Rng::seed_from_u64(11);
        for _ in 0..200 {
            for (record, base) in generate_regional(&mut rng, "global").iter().zip(REGIONS.iter()) {
                let within = |value: u64, base: u64| {
                    let base = base as f64;
                    (value as f64 - base).abs() <= base * 0.05 + 0.5
                };
                assert!(within(record.cases, base.cases));
                assert!(within(record.deaths, base.deaths));
                assert!(within(record.recoveries, base.recoveries));
                assert!(within(record.vaccinations, base.vaccinations));
            }
        }
    }

    #[test]
    fn test_intensity_keeps_ids_and_regions() {
        let mut rng = ChaCha8Rng::seed_from_u64(12);
        let records = generate_intensity(&mut rng);
        assert_eq!(records.len(), 6);
        for (i, record) in records.iter().enumerate() {
            assert_eq!(record.id, i as u32 + 1);
            assert_eq!(record.region, EXPECTED_REGIONS[i]);
            assert!((record.intensity - INTENSITY[i].intensity).abs() <= INTENSITY_SWING);
        }
    }

    #[test]
    fn test_clamp_intensity_edges() {
        assert_eq!(clamp_intensity(-3.5), 0.0);
        assert_eq!(clamp_intensity(104.2), 100.0);
        assert_eq!(clamp_intensity(55.5), 55.5);
    }

    proptest! {
        #[test]
        fn prop_intensity_always_in_range(seed in any::<u64>()) {
            let mut rng = ChaCha8Rng::seed_from_u64(seed);
            let records = generate_intensity(&mut rng);
            prop_assert_eq!(records.len(), 6);
            for record in records {
                prop_assert!((0.0..=100.0).contains(&record.intensity));
            }
        }

        #[test]
        fn prop_clamp_intensity_in_range(value in -1e6f64..1e6) {
            let clamped = clamp_intensity(value);
            prop_assert!((0.0..=100.0).contains(&clamped));
        }
    }
}
