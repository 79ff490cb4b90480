use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimeSeriesPoint {
    /// Month label, e.g. "Jan 2021"
    pub period: String,
    pub cases: u64,
    pub deaths: u64,
    pub recoveries: u64,
    pub vaccinations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegionalRecord {
    pub region: String,
    pub cases: u64,
    pub deaths: u64,
    pub recoveries: u64,
    pub vaccinations: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct IntensityRecord {
    pub id: u32,
    pub region: String,
    /// Always within [0, 100]
    pub intensity: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VaccinationStats {
    pub first_dose: f64,
    pub second_dose: f64,
    pub booster: f64,
    pub total_doses: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendStats {
    pub weekly_average: u64,
    pub peak_value: u64,
    pub peak_date: String,
    pub growth_rate: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSnapshot {
    pub total_cases: u64,
    pub new_cases: u64,
    pub cases_change: f64,
    pub total_deaths: u64,
    pub new_deaths: u64,
    pub deaths_change: f64,
    pub total_recovered: u64,
    pub recovery_rate: f64,
    pub recovery_change: f64,
    pub active_cases: u64,
    pub critical_cases: u64,
    pub case_fatality_rate: f64,
    pub vaccinations: VaccinationStats,
    pub trends: TrendStats,
}
