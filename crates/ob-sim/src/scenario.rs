//! A configured outbreak: city, pathogen, seeding plan, and stop rule.

use log::{debug, info};

use ob_behavior::{IsolationMeasure, QuarantineMeasure};
use ob_core::{AgeGroup, HOURS_PER_DAY, LocationId, PersonId, SimRng};
use ob_location::{LocationDescriptor, LocationKind, Mixing};
use ob_pathogen::Pathogen;

use crate::{
    City, CityBuilder, CityObserver, InfectionConfig, InfectionTarget, MeasureConfig, RunReport,
    ScenarioConfig, SimError, SimResult, StopReason, StopRule, populate_city,
};

/// Daily cleaning plan with names resolved.
#[derive(Clone, Debug)]
struct Cleaning {
    hour:    u32,
    targets: Vec<LocationId>,
}

/// A city ready to run one configured outbreak.
///
/// The run loop is [`City::run`]'s, plus two hooks evaluated after each
/// turn: the infection is seeded after the first turn ending at
/// `infection.start_hour`, and configured locations are disinfected at the
/// cleaning hour.  Extinction only ends the run once the infection has been
/// seeded.
#[derive(Debug)]
pub struct Scenario {
    city:      City,
    pathogen:  Pathogen,
    stop:      StopRule,
    infection: InfectionConfig,
    cleaning:  Option<Cleaning>,
    patient:   Option<Seeded>,
}

/// What the seeding step infected or contaminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Seeded {
    Person(PersonId),
    Location(LocationId),
}

impl Scenario {
    /// Build the city and resolve every name in `config` against `roster`.
    ///
    /// All configuration problems surface here, before the first turn.
    pub fn from_config(config: &ScenarioConfig, roster: &[LocationDescriptor]) -> SimResult<Self> {
        let pathogen = Pathogen::preset(&config.pathogen)?;
        if config.infection.start_hour as u64 >= HOURS_PER_DAY {
            return Err(SimError::Config(format!(
                "infection start_hour {} is not an hour of day",
                config.infection.start_hour
            )));
        }

        let mut builder =
            populate_city(&config.name, roster, &config.population, SimRng::new(config.seed))?;

        let mixing = Mixing::Restaurant(config.restaurant.mixing()?);
        for id in builder.index().restaurants().to_vec() {
            builder.set_mixing(id, mixing)?;
        }

        if let Some(measure) = &config.measure {
            attach_measures(&mut builder, measure)?;
        }

        let cleaning = match &config.disinfection {
            Some(plan) => {
                if !(0.0..=1.0).contains(&plan.efficacy) {
                    return Err(SimError::Config(format!(
                        "disinfection efficacy must be in [0, 1], got {}",
                        plan.efficacy
                    )));
                }
                let targets = plan
                    .targets
                    .iter()
                    .map(|name| builder.location_id(name))
                    .collect::<SimResult<Vec<_>>>()?;
                for &id in &targets {
                    builder.location_mut(id)?.set_disinfection_efficacy(plan.efficacy);
                }
                Some(Cleaning { hour: plan.hour, targets })
            }
            None => None,
        };

        match &config.infection.target {
            InfectionTarget::NamedRestaurantPatron { restaurant } => {
                let id = builder.location_id(restaurant)?;
                if builder.locations()[id.index()].kind() != LocationKind::Restaurant {
                    return Err(SimError::Config(format!("{restaurant:?} is not a restaurant")));
                }
            }
            InfectionTarget::Contaminate { location } => {
                builder.location_id(location)?;
            }
            InfectionTarget::RestaurantPatron | InfectionTarget::FirstAdult => {}
        }

        Ok(Self {
            city: builder.build()?,
            pathogen,
            stop: config.stop.into(),
            infection: config.infection.clone(),
            cleaning,
            patient: None,
        })
    }

    pub fn city(&self) -> &City {
        &self.city
    }

    pub fn city_mut(&mut self) -> &mut City {
        &mut self.city
    }

    pub fn pathogen(&self) -> &Pathogen {
        &self.pathogen
    }

    pub fn stop_rule(&self) -> StopRule {
        self.stop
    }

    /// The seeding target, once seeded.
    pub fn patient(&self) -> Option<Seeded> {
        self.patient
    }

    /// Run the outbreak to the configured stop.
    pub fn run<O: CityObserver>(&mut self, observer: &mut O) -> SimResult<RunReport> {
        observer.on_start(&self.city);
        let mut turns = 0;
        let reason = loop {
            if self.stop.budget_spent(turns) {
                break StopReason::TurnLimit;
            }
            let summary = self.city.do_turn();
            turns += 1;

            if self.patient.is_none() && self.city.hour() == self.infection.start_hour {
                self.patient = Some(self.seed()?);
            }
            self.clean()?;

            observer.on_turn_end(&self.city, &summary);
            if self.patient.is_some() && self.stop.outbreak_over(&self.city) {
                break StopReason::Extinct;
            }
        };

        let report = RunReport { turns, reason };
        let counts = self.city.sir_counts();
        info!(
            "{}: outbreak ended after {:.2} days ({:?}); S={} I={} R={}",
            self.city.name(),
            self.city.time().0 as f64 / HOURS_PER_DAY as f64,
            reason,
            counts.susceptible,
            counts.infected,
            counts.resistant
        );
        for (name, totals) in self.city.ledger().iter() {
            info!("{name}: {} people affected, cost {:.2}", totals.people_affected, totals.total_cost);
        }
        observer.on_finish(&self.city, &report);
        Ok(report)
    }

    fn seed(&mut self) -> SimResult<Seeded> {
        let city = &mut self.city;
        let seeded = match &self.infection.target {
            InfectionTarget::Contaminate { location } => {
                let id = city
                    .location_by_name(location)
                    .map(|l| l.id())
                    .ok_or_else(|| SimError::UnknownLocation(location.clone()))?;
                city.contaminate(id, &self.pathogen)?;
                Seeded::Location(id)
            }
            target => {
                let patient = pick_patient(city, target).ok_or_else(|| {
                    SimError::Seeding(format!("nobody to infect at {}", city.time()))
                })?;
                city.infect_person(patient, &self.pathogen)?;
                Seeded::Person(patient)
            }
        };
        info!("{}: seeded {} into {seeded:?} at {}", city.name(), self.pathogen.name(), city.time());
        Ok(seeded)
    }

    fn clean(&mut self) -> SimResult<()> {
        let Some(cleaning) = &self.cleaning else {
            return Ok(());
        };
        if self.city.hour() != cleaning.hour {
            return Ok(());
        }
        for &id in &cleaning.targets {
            let outcome = self.city.disinfect(id)?;
            debug!("cleaning {id}: {outcome:?}");
        }
        Ok(())
    }
}

fn pick_patient(city: &City, target: &InfectionTarget) -> Option<PersonId> {
    match target {
        InfectionTarget::FirstAdult => {
            city.people().iter().find(|p| p.age() == AgeGroup::Adult).map(|p| p.id())
        }
        InfectionTarget::NamedRestaurantPatron { restaurant } => {
            let id = city.location_by_name(restaurant)?.id();
            city.occupants(id).next().map(|p| p.id())
        }
        InfectionTarget::RestaurantPatron => city
            .index()
            .restaurants()
            .iter()
            .find_map(|&id| city.occupants(id).next().map(|p| p.id())),
        InfectionTarget::Contaminate { .. } => None,
    }
}

fn attach_measures(builder: &mut CityBuilder, measure: &MeasureConfig) -> SimResult<()> {
    let quarantine = measure.quarantine(|name| builder.location_id(name))?;
    let isolation = measure.isolation();
    let people: Vec<PersonId> = builder.people().iter().map(|p| p.id()).collect();
    for id in people {
        if let Some(config) = &quarantine {
            builder.attach_measure(id, Box::new(QuarantineMeasure::new(config.clone())))?;
        } else if let Some(config) = isolation {
            builder.attach_measure(id, Box::new(IsolationMeasure::new(config)))?;
        }
    }
    Ok(())
}
