//! The `City` and its turn loop.

use log::{info, trace};

use ob_agent::{HealthState, Person, Progression};
use ob_behavior::{ControlMeasure, MeasureLedger, Routine, TurnContext};
use ob_core::{CoreError, LocationId, PersonId, SimClock, SimRng, Tick};
use ob_location::{DisinfectOutcome, InteractionReport, Location, LocationIndex};
use ob_pathogen::Pathogen;

use crate::{CityObserver, RunReport, SimResult, StopReason, StopRule};

// ── Per-turn reporting ────────────────────────────────────────────────────────

/// Population split by health state.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct SirCounts {
    pub susceptible: usize,
    pub infected:    usize,
    pub resistant:   usize,
}

impl SirCounts {
    pub fn tally<'a>(people: impl IntoIterator<Item = &'a Person>) -> Self {
        let mut counts = Self::default();
        for person in people {
            match person.state() {
                HealthState::Susceptible => counts.susceptible += 1,
                HealthState::Infected    => counts.infected += 1,
                HealthState::Resistant   => counts.resistant += 1,
            }
        }
        counts
    }

    pub fn total(&self) -> usize {
        self.susceptible + self.infected + self.resistant
    }
}

/// What happened during one call to [`City::do_turn`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct TurnSummary {
    pub tick:               Tick,
    pub interactions:       InteractionReport,
    pub became_symptomatic: u32,
    pub recovered:          u32,
    /// Counts after progression.
    pub counts:             SirCounts,
}

// ── City ──────────────────────────────────────────────────────────────────────

/// The whole simulated world.
///
/// `City` owns every location and person, each person's routine and control
/// measure (parallel vectors indexed by `PersonId`), the measure ledger and
/// the run's single `SimRng`.
///
/// Create via [`CityBuilder`][crate::CityBuilder].
pub struct City {
    pub(crate) name:      String,
    pub(crate) clock:     SimClock,
    pub(crate) rng:       SimRng,
    pub(crate) locations: Vec<Location>,
    pub(crate) index:     LocationIndex,
    pub(crate) people:    Vec<Person>,
    pub(crate) routines:  Vec<Box<dyn Routine>>,
    pub(crate) measures:  Vec<Option<Box<dyn ControlMeasure>>>,
    pub(crate) ledger:    MeasureLedger,
    /// Reused per-turn presence lists, indexed by `LocationId`.
    pub(crate) presence:  Vec<Vec<PersonId>>,
}

impl City {
    // ── Turn ──────────────────────────────────────────────────────────────

    /// Advance the city by one hour.
    ///
    /// The order below is fixed; it defines the order in which the shared
    /// random source is consumed.
    pub fn do_turn(&mut self) -> TurnSummary {
        // ── ① Clock ───────────────────────────────────────────────────────
        self.clock.advance();
        let now = self.clock.now();

        // ── ② Movement: routine, then measure, then relocate ─────────────
        {
            // Explicit field borrows so the borrow checker sees disjoint access.
            let ctx = TurnContext::new(now, &self.locations, &self.index);
            let rng = &mut self.rng;
            let ledger = &mut self.ledger;

            for ((person, routine), measure) in self
                .people
                .iter_mut()
                .zip(&self.routines)
                .zip(&mut self.measures)
            {
                let candidate = routine.next_location(person, &ctx, rng);
                let destination = match measure {
                    Some(measure) => {
                        let outcome = measure.apply(person, &ctx, candidate);
                        ledger.record(measure.name(), &outcome);
                        outcome.destination
                    }
                    None => candidate,
                };
                debug_assert!(destination.index() < self.locations.len());
                person.relocate(destination, now);
            }
        }

        // ── ③ Interactions, in roster order ───────────────────────────────
        for present in &mut self.presence {
            present.clear();
        }
        for person in &self.people {
            self.presence[person.location().index()].push(person.id());
        }
        let mut interactions = InteractionReport::default();
        for (location, present) in self.locations.iter().zip(&self.presence) {
            interactions += location.interact(present, &mut self.people, &mut self.rng);
        }

        // ── ④ Disease progression ─────────────────────────────────────────
        let mut became_symptomatic = 0;
        let mut recovered = 0;
        for person in &mut self.people {
            match person.progress() {
                Some(Progression::BecameSymptomatic) => became_symptomatic += 1,
                Some(Progression::Recovered) => recovered += 1,
                None => {}
            }
        }

        let counts = self.sir_counts();
        trace!(
            "{} {}: S={} I={} R={} (+{} infections)",
            self.name, now, counts.susceptible, counts.infected, counts.resistant,
            interactions.infections
        );

        TurnSummary { tick: now, interactions, became_symptomatic, recovered, counts }
    }

    // ── Run loops ─────────────────────────────────────────────────────────

    /// Run until `stop` says so.
    ///
    /// The turn budget is checked before each turn and extinction after it,
    /// so an `Extinct` rule always runs at least one turn when the budget
    /// allows.
    pub fn run<O: CityObserver>(&mut self, stop: StopRule, observer: &mut O) -> RunReport {
        observer.on_start(self);
        let mut turns = 0;
        let reason = loop {
            if stop.budget_spent(turns) {
                break StopReason::TurnLimit;
            }
            let summary = self.do_turn();
            turns += 1;
            observer.on_turn_end(self, &summary);
            if stop.outbreak_over(self) {
                break StopReason::Extinct;
            }
        };
        let report = RunReport { turns, reason };
        info!("{}: run ended after {} turns ({:?}) at {}", self.name, turns, reason, self.clock);
        observer.on_finish(self, &report);
        report
    }

    /// Run exactly `n` turns.
    pub fn run_turns<O: CityObserver>(&mut self, n: u64, observer: &mut O) -> RunReport {
        self.run(StopRule::TurnBudget(n), observer)
    }

    // ── Scenario hooks ────────────────────────────────────────────────────

    /// Contaminate a location.  Returns whether it was clean before.
    pub fn contaminate(&mut self, id: LocationId, pathogen: &Pathogen) -> SimResult<bool> {
        let location = self
            .locations
            .get_mut(id.index())
            .ok_or(CoreError::LocationNotFound(id))?;
        Ok(location.contaminate(pathogen))
    }

    /// Attempt to disinfect a location, drawing from the city's random source.
    pub fn disinfect(&mut self, id: LocationId) -> SimResult<DisinfectOutcome> {
        let location = self
            .locations
            .get_mut(id.index())
            .ok_or(CoreError::LocationNotFound(id))?;
        Ok(location.disinfect(&mut self.rng))
    }

    /// Infect a person directly.  Returns `false` if they were not susceptible.
    pub fn infect_person(&mut self, id: PersonId, pathogen: &Pathogen) -> SimResult<bool> {
        let person = self
            .people
            .get_mut(id.index())
            .ok_or(CoreError::PersonNotFound(id))?;
        Ok(person.infect(pathogen))
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Hours elapsed since the start.
    pub fn time(&self) -> Tick {
        self.clock.now()
    }

    pub fn hour(&self) -> u32 {
        self.clock.hour()
    }

    pub fn day(&self) -> u64 {
        self.clock.day()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    /// Every person, indexed by `PersonId`.
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    pub fn person(&self, id: PersonId) -> Option<&Person> {
        self.people.get(id.index())
    }

    /// Every location in roster order, indexed by `LocationId`.
    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }

    /// First location in roster order with this exact name.
    pub fn location_by_name(&self, name: &str) -> Option<&Location> {
        self.locations.iter().find(|l| l.name() == name)
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    /// People standing at `id` as of the last turn (or the initial placement).
    pub fn occupants(&self, id: LocationId) -> impl Iterator<Item = &Person> {
        self.people.iter().filter(move |p| p.location() == id)
    }

    pub fn measure(&self, id: PersonId) -> Option<&dyn ControlMeasure> {
        self.measures.get(id.index()).and_then(|m| m.as_deref())
    }

    pub fn sir_counts(&self) -> SirCounts {
        SirCounts::tally(&self.people)
    }

    pub fn infected_count(&self) -> usize {
        self.people.iter().filter(|p| p.is_infected()).count()
    }

    /// No person carries the pathogen any more.  Contaminated locations do
    /// not count; see [`is_outbreak_over`](Self::is_outbreak_over).
    pub fn is_pathogen_extinct(&self) -> bool {
        !self.people.iter().any(Person::is_infected)
    }

    /// Nobody is infected and no location is contaminated.
    pub fn is_outbreak_over(&self) -> bool {
        self.is_pathogen_extinct() && !self.locations.iter().any(Location::is_contaminated)
    }

    pub fn ledger(&self) -> &MeasureLedger {
        &self.ledger
    }

    pub fn rng_mut(&mut self) -> &mut SimRng {
        &mut self.rng
    }
}

impl std::fmt::Debug for City {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("City")
            .field("name", &self.name)
            .field("time", &self.clock.now())
            .field("locations", &self.locations.len())
            .field("people", &self.people.len())
            .finish_non_exhaustive()
    }
}
