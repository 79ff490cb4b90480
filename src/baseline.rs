//! Fixed starting values every generator perturbs from.

use crate::period::Period;

pub struct SeedPoint {
    pub period: Period,
    pub cases: u64,
    pub deaths: u64,
    pub recoveries: u64,
    pub vaccinations: u64,
}

pub struct RegionBaseline {
    pub region: &'static str,
    pub cases: u64,
    pub deaths: u64,
    pub recoveries: u64,
    pub vaccinations: u64,
}

pub struct IntensityBaseline {
    pub id: u32,
    pub region: &'static str,
    pub intensity: f64,
}

const fn seed(
    year: i32,
    month: u32,
    cases: u64,
    deaths: u64,
    recoveries: u64,
    vaccinations: u64,
) -> SeedPoint {
    SeedPoint {
        period: Period { year, month },
        cases,
        deaths,
        recoveries,
        vaccinations,
    }
}

const fn region(
    region: &'static str,
    cases: u64,
    deaths: u64,
    recoveries: u64,
    vaccinations: u64,
) -> RegionBaseline {
    RegionBaseline {
        region,
        cases,
        deaths,
        recoveries,
        vaccinations,
    }
}

/// Monthly figures for 2020; generated months extend from the last entry.
pub const SEED_SEQUENCE: [SeedPoint; 12] = [
    seed(2020, 1, 1_000, 50, 200, 0),
    seed(2020, 2, 2_000, 100, 500, 0),
    seed(2020, 3, 5_000, 300, 1_000, 0),
    seed(2020, 4, 10_000, 700, 3_000, 0),
    seed(2020, 5, 15_000, 1_000, 7_000, 0),
    seed(2020, 6, 18_000, 1_200, 10_000, 0),
    seed(2020, 7, 20_000, 1_500, 15_000, 100),
    seed(2020, 8, 22_000, 1_700, 18_000, 500),
    seed(2020, 9, 23_000, 1_800, 20_000, 1_000),
    seed(2020, 10, 25_000, 1_900, 22_000, 2_000),
    seed(2020, 11, 30_000, 2_100, 25_000, 5_000),
    seed(2020, 12, 35_000, 2_300, 28_000, 10_000),
];

pub const REGIONS: [RegionBaseline; 6] = [
    region("North America", 35_000, 2_300, 28_000, 15_000),
    region("Europe", 40_000, 3_000, 32_000, 18_000),
    region("Asia", 50_000, 3_500, 40_000, 20_000),
    region("South America", 25_000, 2_000, 20_000, 12_000),
    region("Africa", 15_000, 1_000, 10_000, 5_000),
    region("Oceania", 5_000, 300, 4_500, 3_000),
];

pub const INTENSITY: [IntensityBaseline; 6] = [
    IntensityBaseline { id: 1, region: "North America", intensity: 70.0 },
    IntensityBaseline { id: 2, region: "Europe", intensity: 80.0 },
    IntensityBaseline { id: 3, region: "Asia", intensity: 90.0 },
    IntensityBaseline { id: 4, region: "South America", intensity: 60.0 },
    IntensityBaseline { id: 5, region: "Africa", intensity: 40.0 },
    IntensityBaseline { id: 6, region: "Oceania", intensity: 20.0 },
];

pub const TOTAL_CASES: u64 = 768_543_210;
pub const NEW_CASES: u64 = 12_453;
pub const CASES_CHANGE: f64 = 2.3;
pub const TOTAL_DEATHS: u64 = 6_945_321;
pub const NEW_DEATHS: u64 = 287;
pub const DEATHS_CHANGE: f64 = -1.8;
pub const TOTAL_RECOVERED: u64 = 741_234_567;
pub const RECOVERY_RATE: f64 = 96.4;
pub const RECOVERY_CHANGE: f64 = 0.5;
pub const ACTIVE_CASES: u64 = 20_363_322;
pub const CRITICAL_CASES: u64 = 87_654;
pub const CASE_FATALITY_RATE: f64 = 0.9;

pub const FIRST_DOSE: f64 = 68.7;
pub const SECOND_DOSE: f64 = 62.3;
pub const BOOSTER: f64 = 34.8;
pub const TOTAL_DOSES: u64 = 13_456_789_012;

pub const WEEKLY_AVERAGE: u64 = 15_432;
pub const PEAK_VALUE: u64 = 3_245_678;
pub const PEAK_DATE: &str = "2022-01-15";
pub const GROWTH_RATE: f64 = -3.2;
