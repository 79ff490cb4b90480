use anyhow::{Context, Result};
use rand::Rng;
use serde::Serialize;
use std::time::Instant;
use tracing::{info, warn};

use crate::args::{Args, Metric};
use crate::generator::DataGenerator;
use crate::period::Period;
use crate::stats::{IntensityRecord, RegionalRecord, StatisticsSnapshot, TimeSeriesPoint};
use crate::utils::format_number;

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardFilters {
    pub region: String,
    pub from: Option<Period>,
    pub to: Option<Period>,
    pub metrics: Vec<Metric>,
}

impl Default for DashboardFilters {
    fn default() -> Self {
        Self {
            region: "global".to_string(),
            from: None,
            to: None,
            metrics: Metric::ALL.to_vec(),
        }
    }
}

impl From<&Args> for DashboardFilters {
    fn from(args: &Args) -> Self {
        Self {
            region: args.region.clone(),
            from: args.from,
            to: args.to,
            metrics: args.metrics.clone(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSnapshot {
    pub region: String,
    pub series: Vec<TimeSeriesPoint>,
    pub regional: Vec<RegionalRecord>,
    pub intensity: Vec<IntensityRecord>,
    pub statistics: StatisticsSnapshot,
}

/// Runs every generator once and applies the time-range filter to the series.
pub fn refresh_dashboard<R: Rng>(
    generator: &mut DataGenerator<R>,
    filters: &DashboardFilters,
) -> DashboardSnapshot {
    let start_time = Instant::now();
    info!(action = "start", component = "dashboard_refresh", region = %filters.region, "Refreshing dashboard");

    let series = filter_series(generator.series(), filters.from, filters.to);
    let regional = generator.regional(&filters.region);
    let intensity = generator.intensity();
    let statistics = generator.statistics(&filters.region);

    info!(
        action = "complete",
        component = "dashboard_refresh",
        series_points = series.len(),
        regions = regional.len(),
        duration_ms = start_time.elapsed().as_millis(),
        "Dashboard refresh completed"
    );

    DashboardSnapshot {
        region: filters.region.clone(),
        series,
        regional,
        intensity,
        statistics,
    }
}

/// Keeps points whose month lies within the inclusive `[from, to]` range.
pub fn filter_series(
    points: Vec<TimeSeriesPoint>,
    from: Option<Period>,
    to: Option<Period>,
) -> Vec<TimeSeriesPoint> {
    if from.is_none() && to.is_none() {
        return points;
    }

    points
        .into_iter()
        .filter(|point| match point.period.parse::<Period>() {
            Ok(period) => {
                from.map_or(true, |from| period >= from) && to.map_or(true, |to| period <= to)
            }
            Err(e) => {
                warn!(action = "filter", component = "series_filter", period = %point.period, error = %e, "Dropping point with unparseable period");
                false
            }
        })
        .collect()
}

/// "global" -> "Global Statistics"
pub fn region_heading(region: &str) -> String {
    let mut chars = region.chars();
    match chars.next() {
        Some(first) => format!("{}{} Statistics", first.to_uppercase(), chars.as_str()),
        None => "Statistics".to_string(),
    }
}

fn metric_value(metric: Metric, cases: u64, deaths: u64, recoveries: u64, vaccinations: u64) -> u64 {
    match metric {
        Metric::Cases => cases,
        Metric::Deaths => deaths,
        Metric::Recoveries => recoveries,
        Metric::Vaccinations => vaccinations,
    }
}

pub fn render_json(snapshot: &DashboardSnapshot) -> Result<String> {
    serde_json::to_string_pretty(snapshot).context("Failed to serialize dashboard snapshot")
}

pub fn print_dashboard(snapshot: &DashboardSnapshot, filters: &DashboardFilters) {
    let stats = &snapshot.statistics;

    println!("\n--- {} ---", region_heading(&snapshot.region));
    println!(
        "Total cases: {} ({} new, {:+.1}%)",
        format_number(stats.total_cases as f64),
        format_number(stats.new_cases as f64),
        stats.cases_change
    );
    println!(
        "Total deaths: {} ({} new, {:+.1}%)",
        format_number(stats.total_deaths as f64),
        format_number(stats.new_deaths as f64),
        stats.deaths_change
    );
    println!(
        "Recovered: {} ({:.1}% recovery rate, {:+.1}%)",
        format_number(stats.total_recovered as f64),
        stats.recovery_rate,
        stats.recovery_change
    );
    println!(
        "Active cases: {} ({} critical), fatality rate {:.1}%",
        format_number(stats.active_cases as f64),
        format_number(stats.critical_cases as f64),
        stats.case_fatality_rate
    );
    println!(
        "Vaccinations: {:.1}% first dose, {:.1}% second dose, {:.1}% booster, {} doses administered",
        stats.vaccinations.first_dose,
        stats.vaccinations.second_dose,
        stats.vaccinations.booster,
        format_number(stats.vaccinations.total_doses as f64)
    );
    println!(
        "Trends: weekly average {}, peak {} on {}, growth {:+.1}%",
        format_number(stats.trends.weekly_average as f64),
        format_number(stats.trends.peak_value as f64),
        stats.trends.peak_date,
        stats.trends.growth_rate
    );

    let header: Vec<&str> = filters.metrics.iter().map(|m| m.label()).collect();

    println!("\nMonthly trend ({} months):", snapshot.series.len());
    println!("{:<10} {}", "Month", header.join(" | "));
    for point in &snapshot.series {
        let values: Vec<String> = filters
            .metrics
            .iter()
            .map(|&m| {
                format_number(
                    metric_value(m, point.cases, point.deaths, point.recoveries, point.vaccinations)
                        as f64,
                )
            })
            .collect();
        println!("{:<10} {}", point.period, values.join(" | "));
    }

    println!("\nBy region:");
    for record in &snapshot.regional {
        let values: Vec<String> = filters
            .metrics
            .iter()
            .map(|&m| {
                format!(
                    "{} {}",
                    m.label().to_lowercase(),
                    format_number(
                        metric_value(m, record.cases, record.deaths, record.recoveries, record.vaccinations)
                            as f64
                    )
                )
            })
            .collect();
        println!("- {}: {}", record.region, values.join(", "));
    }

    println!("\nIntensity:");
    for record in &snapshot.intensity {
        println!("- {}: {:.1}", record.region, record.intensity);
    }
}
