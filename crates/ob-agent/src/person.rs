//! The `Person` agent.

use std::collections::BTreeMap;

use log::debug;

use ob_core::{AgeGroup, LocationId, PersonId, SimRng, Tick};
use ob_pathogen::Pathogen;

use crate::state::Condition;
use crate::{HealthState, HistoryRecord, Infection, Progression};

/// Key of the person's home in the named-location table.
pub const HOME: &str = "Home";
/// Key of the person's workplace, when it has one.
pub const WORK: &str = "Work";
/// Key of the person's grocery store, when it has one.
pub const GROCERY: &str = "Grocery";

/// One member of the population.
///
/// A person never leaves the city: recovery is a state transition, not a
/// removal.  Routines and control measures are held by the city alongside the
/// person (same index), so policies can borrow a `&Person` while they run.
#[derive(Clone, Debug)]
pub struct Person {
    id:        PersonId,
    age:       AgeGroup,
    location:  LocationId,
    condition: Condition,
    places:    BTreeMap<String, LocationId>,
    history:   Vec<HistoryRecord>,
}

impl Person {
    /// Place a new susceptible person at `location` and record the placement.
    pub fn new(id: PersonId, age: AgeGroup, location: LocationId, now: Tick) -> Self {
        let mut person = Self {
            id,
            age,
            location,
            condition: Condition::Susceptible,
            places:    BTreeMap::new(),
            history:   Vec::new(),
        };
        person.record(now);
        person
    }

    // ── Identity and placement ────────────────────────────────────────────

    pub fn id(&self) -> PersonId {
        self.id
    }

    pub fn age(&self) -> AgeGroup {
        self.age
    }

    pub fn location(&self) -> LocationId {
        self.location
    }

    /// Move to `location` and append this tick's history record.
    pub fn relocate(&mut self, location: LocationId, now: Tick) {
        self.location = location;
        self.record(now);
    }

    fn record(&mut self, now: Tick) {
        debug_assert!(
            self.history.last().is_none_or(|last| last.time < now),
            "history time must strictly increase"
        );
        self.history.push(HistoryRecord {
            time:        now,
            state:       self.state(),
            location:    self.location,
            symptomatic: self.feels_sick(),
        });
    }

    /// Every record since placement, oldest first.
    pub fn history(&self) -> &[HistoryRecord] {
        &self.history
    }

    // ── Named places ──────────────────────────────────────────────────────

    pub fn set_named_location(&mut self, name: impl Into<String>, location: LocationId) {
        self.places.insert(name.into(), location);
    }

    pub fn named_location(&self, name: &str) -> Option<LocationId> {
        self.places.get(name).copied()
    }

    /// The person's home, falling back to the current location if no home
    /// was registered.
    pub fn home(&self) -> LocationId {
        self.named_location(HOME).unwrap_or(self.location)
    }

    pub fn named_locations(&self) -> impl Iterator<Item = (&str, LocationId)> {
        self.places.iter().map(|(k, v)| (k.as_str(), *v))
    }

    // ── Disease state queries ─────────────────────────────────────────────

    pub fn state(&self) -> HealthState {
        self.condition.state()
    }

    pub fn infection(&self) -> Option<&Infection> {
        match &self.condition {
            Condition::Infected(infection) => Some(infection),
            _ => None,
        }
    }

    /// The personal pathogen instance; present exactly while infected.
    pub fn pathogen(&self) -> Option<&Pathogen> {
        self.infection().map(Infection::pathogen)
    }

    pub fn is_infected(&self) -> bool {
        matches!(self.condition, Condition::Infected(_))
    }

    /// Capable of transmitting: any infected person, latent or not.
    pub fn is_contagious(&self) -> bool {
        self.is_infected()
    }

    pub fn is_latent(&self) -> bool {
        self.infection().is_some_and(Infection::is_latent)
    }

    pub fn is_incubated(&self) -> bool {
        self.infection().is_some_and(Infection::is_incubated)
    }

    /// Symptomatic; routines and measures use this to send people home.
    pub fn feels_sick(&self) -> bool {
        self.is_incubated()
    }

    /// Current bacterial load (0 unless infected).
    pub fn bacteria(&self) -> u64 {
        self.infection().map_or(0, Infection::load)
    }

    /// Current immune response (0 unless infected).
    pub fn response(&self) -> f64 {
        self.infection().map_or(0.0, Infection::response)
    }

    // ── Transitions ───────────────────────────────────────────────────────

    /// Infect with a private copy of `pathogen`.
    ///
    /// Only a susceptible person can be infected; for anyone else this is a
    /// no-op returning `false`.
    pub fn infect(&mut self, pathogen: &Pathogen) -> bool {
        if !matches!(self.condition, Condition::Susceptible) {
            return false;
        }
        debug!("{} infected with {}", self.id, pathogen.name());
        self.condition = Condition::Infected(Infection::new(pathogen));
        true
    }

    /// One exposure to `pathogen`.
    ///
    /// A non-susceptible person is unaffected and no randomness is drawn.
    /// Otherwise exactly one draw decides infection with probability
    /// `infectivity(age)`.  Returns `true` if this exposure infected.
    pub fn expose(&mut self, pathogen: &Pathogen, rng: &mut SimRng) -> bool {
        if !matches!(self.condition, Condition::Susceptible) {
            return false;
        }
        if rng.gen_bool(pathogen.infectivity(self.age)) {
            self.infect(pathogen)
        } else {
            false
        }
    }

    /// Advance the infection by one hour.  No-op unless infected.
    pub fn progress(&mut self) -> Option<Progression> {
        let age = self.age;
        let Condition::Infected(infection) = &mut self.condition else {
            return None;
        };
        let pathogen = &infection.pathogen;

        infection.load = pathogen.growth(infection.load);

        let boost = if infection.incubated { 1.0 + pathogen.toxigenicity(age) } else { 1.0 };
        let gain = pathogen.resistance(age) * pathogen.response_rate() * boost;
        infection.response = (infection.response + gain).min(1.0);

        let cleared = (infection.load as f64 * infection.response).floor() as u64;
        infection.load = infection.load.saturating_sub(cleared);

        if infection.load == 0 {
            debug!("{} recovered from {}", self.id, pathogen.name());
            self.condition = Condition::Resistant;
            return Some(Progression::Recovered);
        }

        let toxin = infection.load as f64 * pathogen.toxigenicity(age);
        let was_incubated = infection.incubated;
        infection.incubated = toxin >= pathogen.symptom_threshold();
        infection.latent = !infection.incubated;

        (!was_incubated && infection.incubated).then_some(Progression::BecameSymptomatic)
    }
}
