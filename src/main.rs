use anyhow::Result;
use clap::Parser;
use rand::Rng;
use std::thread;
use std::time::{Duration, Instant};
use tracing::{error, info};

use pandemic_pulse::dashboard::{print_dashboard, refresh_dashboard, render_json};
use pandemic_pulse::utils::{setup_logging, validate_args};
use pandemic_pulse::{Args, DashboardFilters, DataGenerator};

fn run<R: Rng>(generator: &mut DataGenerator<R>, args: &Args) -> Result<()> {
    let total_start_time = Instant::now();
    let filters = DashboardFilters::from(args);
    let interval = Duration::from_millis(args.interval_ms);

    for refresh in 0..args.refreshes {
        if refresh > 0 {
            thread::sleep(interval);
        }

        let snapshot = refresh_dashboard(generator, &filters);
        if args.json {
            println!("{}", render_json(&snapshot)?);
        } else {
            print_dashboard(&snapshot, &filters);
        }
    }

    info!(
        action = "complete",
        component = "dashboard",
        refreshes = args.refreshes,
        duration_ms = total_start_time.elapsed().as_millis(),
        "All refreshes completed"
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    validate_args(&args)?;

    let result = match args.seed {
        Some(seed) => {
            info!(action = "configure", component = "generator", seed, "Using seeded generator");
            run(&mut DataGenerator::seeded(seed), &args)
        }
        None => run(&mut DataGenerator::new(), &args),
    };

    if let Err(e) = result {
        error!("Error: {}", e);
        std::process::exit(1);
    }
    Ok(())
}
