use rand::rngs::ThreadRng;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::regional::{generate_intensity, generate_regional};
use crate::series::generate_series;
use crate::statistics::generate_statistics;
use crate::stats::{IntensityRecord, RegionalRecord, StatisticsSnapshot, TimeSeriesPoint};

/// Owns the random source shared by all four generators.
pub struct DataGenerator<R: Rng = ThreadRng> {
    rng: R,
}

impl DataGenerator<ThreadRng> {
    pub fn new() -> Self {
        Self {
            rng: rand::thread_rng(),
        }
    }
}

impl Default for DataGenerator<ThreadRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl DataGenerator<ChaCha8Rng> {
    /// Reproducible output: the same seed yields the same sequence of snapshots.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl<R: Rng> DataGenerator<R> {
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    pub fn series(&mut self) -> Vec<TimeSeriesPoint> {
        generate_series(&mut self.rng)
    }

    pub fn regional(&mut self, region: &str) -> Vec<RegionalRecord> {
        generate_regional(&mut self.rng, region)
    }

    pub fn intensity(&mut self) -> Vec<IntensityRecord> {
        generate_intensity(&mut self.rng)
    }

    pub fn statistics(&mut self, region: &str) -> StatisticsSnapshot {
        generate_statistics(&mut self.rng, region)
    }
}
