//! lake_town — run one outbreak over a location roster and write CSV output.
//!
//! Usage:
//!
//! ```text
//! lake_town [ROSTER_CSV] [SCENARIO_JSON] [OUTPUT_DIR]
//! ```
//!
//! Defaults to the bundled `data/coords.csv`, the built-in scenario defaults,
//! and `output/lake_town`.  Set `RUST_LOG=info` (or `debug`) for progress.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use log::info;

use ob_core::HOURS_PER_DAY;
use ob_output::{CityOutputObserver, CsvWriter, OutputWriter, retrace};
use ob_sim::{Scenario, ScenarioConfig, Seeded};

const DEFAULT_ROSTER:  &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data/coords.csv");
const DEFAULT_OUTPUT:  &str = "output/lake_town";
const GEO_INTERVAL:    u64  = 24; // one location snapshot per day
const CASES_TO_SHOW:   usize = 10;

/// Fail the run if any output write failed.
fn check_output<W: OutputWriter>(obs: &mut CityOutputObserver<W>, dir: &Path) -> Result<()> {
    match obs.take_error() {
        Some(e) => Err(anyhow::Error::new(e).context(format!("writing output to {}", dir.display()))),
        None => Ok(()),
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let roster_path = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_ROSTER.to_owned()));
    let config = match args.next() {
        Some(path) => ScenarioConfig::load(Path::new(&path))?,
        None => ScenarioConfig::default(),
    };
    let output_dir = PathBuf::from(args.next().unwrap_or_else(|| DEFAULT_OUTPUT.to_owned()));

    println!("=== lake_town — outbreak simulation ===");
    println!("Scenario: {}  |  Pathogen: {}  |  Seed: {}", config.name, config.pathogen, config.seed);

    // 1. Roster.
    let roster = ob_location::load_roster_csv(&roster_path)
        .with_context(|| format!("loading roster {}", roster_path.display()))?;
    println!("Roster: {} locations from {}", roster.len(), roster_path.display());

    // 2. City and scenario.
    let mut scenario = Scenario::from_config(&config, &roster)?;
    println!(
        "City: {} people, {} locations, stop rule {:?}",
        scenario.city().people().len(),
        scenario.city().locations().len(),
        scenario.stop_rule()
    );
    println!();

    // 3. Output.
    std::fs::create_dir_all(&output_dir)
        .with_context(|| format!("creating {}", output_dir.display()))?;
    let writer = CsvWriter::new(&output_dir)?;
    let mut obs = CityOutputObserver::new(writer).with_geo_interval(GEO_INTERVAL);

    // 4. Run.
    let t0 = Instant::now();
    let report = scenario.run(&mut obs)?;
    let elapsed = t0.elapsed();
    check_output(&mut obs, &output_dir)?;
    info!("wrote output to {}", output_dir.display());

    // 5. Summary.
    let city = scenario.city();
    let counts = city.sir_counts();
    println!("Simulation complete in {:.3} s", elapsed.as_secs_f64());
    println!(
        "  {} turns ({:.2} days), stopped: {:?}",
        report.turns,
        city.time().0 as f64 / HOURS_PER_DAY as f64,
        report.reason
    );
    match scenario.patient() {
        Some(Seeded::Person(id)) => println!("  patient zero: {id}"),
        Some(Seeded::Location(id)) => println!("  contaminated first: {id}"),
        None => println!("  the infection was never seeded"),
    }
    println!(
        "  S={}  I={}  R={}",
        counts.susceptible, counts.infected, counts.resistant
    );
    for (name, totals) in city.ledger().iter() {
        println!(
            "  {name}: {} people affected, cost {:.2}",
            totals.people_affected, totals.total_cost
        );
    }
    println!();

    // 6. First few cases.
    let cases: Vec<_> = city.people().iter().filter_map(|p| retrace(p, city)).collect();
    println!("{} cases", cases.len());
    println!("{:<14} {:<6} {:>9} {:>9} {:>9}  {}", "Person", "Age", "Infected", "Symptoms", "Recovered", "Restaurants");
    println!("{}", "-".repeat(72));
    let hour = |t: Option<ob_core::Tick>| t.map_or_else(|| "-".to_owned(), |t| t.0.to_string());
    for case in cases.iter().take(CASES_TO_SHOW) {
        println!(
            "{:<14} {:<6} {:>9} {:>9} {:>9}  {}",
            case.person.to_string(),
            case.age.as_str(),
            hour(case.infected_at),
            hour(case.symptoms_at),
            hour(case.recovered_at),
            case.restaurants.join(", ")
        );
    }

    Ok(())
}
