pub mod args;
pub mod baseline;
pub mod dashboard;
pub mod fluctuation;
pub mod generator;
pub mod period;
pub mod regional;
pub mod series;
pub mod statistics;
pub mod stats;
pub mod utils;

pub use args::{Args, Metric};
pub use dashboard::{refresh_dashboard, DashboardFilters, DashboardSnapshot};
pub use generator::DataGenerator;
pub use period::Period;
pub use stats::{
    IntensityRecord, RegionalRecord, StatisticsSnapshot, TimeSeriesPoint, TrendStats,
    VaccinationStats,
};
