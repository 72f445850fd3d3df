//! pathogen_lab — follow a single infection hour by hour.
//!
//! Usage: `pathogen_lab [PRESET] [AGE]` where `AGE` is `adult` (default) or
//! `child`.  Prints one line per `REPORT_EVERY` hours and a summary of the
//! milestones once the host has recovered.

use anyhow::{Result, bail};

use ob_agent::{HealthState, Person, Progression};
use ob_core::{AgeGroup, HOURS_PER_DAY, LocationId, PersonId, Tick};
use ob_pathogen::Pathogen;
use ob_pathogen::presets::LAKE_SPORE;

const REPORT_EVERY: u64 = 12;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let mut args = std::env::args().skip(1);
    let name = args.next().unwrap_or_else(|| LAKE_SPORE.to_owned());
    let age = match args.next().as_deref() {
        None | Some("adult") => AgeGroup::Adult,
        Some("child") => AgeGroup::Child,
        Some(other) => bail!("unknown age group {other:?}, expected adult or child"),
    };

    let pathogen = Pathogen::preset(&name)?;
    let bound = pathogen.max_infection_hours();
    println!("=== pathogen_lab — {} in one {} ===", pathogen.name(), age.as_str());
    println!(
        "infectivity {:.2}  toxigenicity {:.2}  resistance {:.2}  threshold {:.0}  (clears within {bound} h)",
        pathogen.infectivity(age),
        pathogen.toxigenicity(age),
        pathogen.resistance(age),
        pathogen.symptom_threshold()
    );
    println!();

    let mut host = Person::new(PersonId(0), age, LocationId(0), Tick(0));
    host.infect(&pathogen);

    println!("{:>6} {:<12} {:>10} {:>9}", "hour", "state", "bacteria", "response");
    println!("{}", "-".repeat(40));

    let mut symptoms_at = None;
    let mut recovered_at = None;
    let mut peak = host.bacteria();
    for hour in 1..=bound {
        match host.progress() {
            Some(Progression::BecameSymptomatic) => {
                symptoms_at.get_or_insert(hour);
            }
            Some(Progression::Recovered) => recovered_at = Some(hour),
            None => {}
        }
        peak = peak.max(host.bacteria());

        if hour % REPORT_EVERY == 0 || recovered_at.is_some() {
            let state = match host.state() {
                HealthState::Infected if host.feels_sick() => "SYMPTOMATIC",
                state => state.as_str(),
            };
            println!("{hour:>6} {state:<12} {:>10} {:>9.3}", host.bacteria(), host.response());
        }
        if recovered_at.is_some() {
            break;
        }
    }

    let days = |h: Option<u64>| h.map_or_else(|| "never".to_owned(), |h| format!("{:.2} days", h as f64 / HOURS_PER_DAY as f64));
    println!();
    println!("peak load:   {peak}");
    println!("symptoms:    {}", days(symptoms_at));
    println!("recovery:    {}", days(recovered_at));
    Ok(())
}
