//! Fluent builder for constructing a [`City`].

use log::info;

use ob_agent::{HOME, Person};
use ob_behavior::{ControlMeasure, MeasureLedger, Routine};
use ob_core::{AgeGroup, CoreError, GeoPoint, LocationId, PersonId, SimClock, SimRng, Tick};
use ob_location::{Location, LocationIndex, LocationKind, Mixing};

use crate::{City, SimError, SimResult};

/// Fluent builder for [`City`].
///
/// Locations must be added before the people who live in them; routines are
/// usually built against the index while populating, drawing from the
/// city's own random source (see [`policy_inputs`](Self::policy_inputs)) so
/// the whole setup is reproducible from the seed.
///
/// # Example
///
/// ```rust,ignore
/// let mut b = CityBuilder::new("Lake Town", SimRng::new(12));
/// let home = b.add_location(LocationKind::Home, point, "12 Shore Road");
/// let mill = b.add_location(LocationKind::Company, point, "Mill (C)");
/// let (index, rng) = b.policy_inputs();
/// let routine = AdultRoutine::builder(home).build(index, rng)?;
/// b.add_person(AgeGroup::Adult, home, Box::new(routine))?;
/// let city = b.build()?;
/// ```
pub struct CityBuilder {
    name:      String,
    rng:       SimRng,
    locations: Vec<Location>,
    index:     LocationIndex,
    people:    Vec<Person>,
    routines:  Vec<Box<dyn Routine>>,
    measures:  Vec<Option<Box<dyn ControlMeasure>>>,
}

impl std::fmt::Debug for CityBuilder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CityBuilder")
            .field("name", &self.name)
            .field("locations", &self.locations.len())
            .field("people", &self.people.len())
            .finish_non_exhaustive()
    }
}

impl CityBuilder {
    pub fn new(name: impl Into<String>, rng: SimRng) -> Self {
        Self {
            name: name.into(),
            rng,
            locations: Vec::new(),
            index: LocationIndex::new(),
            people: Vec::new(),
            routines: Vec::new(),
            measures: Vec::new(),
        }
    }

    // ── Locations ─────────────────────────────────────────────────────────

    /// Append a location to the roster and return its id.
    pub fn add_location(&mut self, kind: LocationKind, point: GeoPoint, name: impl Into<String>) -> LocationId {
        let id = LocationId(self.locations.len() as u32);
        let location = Location::new(id, kind, point, name);
        self.index.insert(&location);
        self.locations.push(location);
        id
    }

    pub fn set_mixing(&mut self, id: LocationId, mixing: Mixing) -> SimResult<()> {
        self.location_mut(id)?.set_mixing(mixing);
        Ok(())
    }

    pub fn location_mut(&mut self, id: LocationId) -> SimResult<&mut Location> {
        self.locations
            .get_mut(id.index())
            .ok_or(SimError::Core(CoreError::LocationNotFound(id)))
    }

    /// Resolve a roster name to its id.
    pub fn location_id(&self, name: &str) -> SimResult<LocationId> {
        self.locations
            .iter()
            .find(|l| l.name() == name)
            .map(Location::id)
            .ok_or_else(|| SimError::UnknownLocation(name.to_owned()))
    }

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn index(&self) -> &LocationIndex {
        &self.index
    }

    pub fn rng_mut(&mut self) -> &mut SimRng {
        &mut self.rng
    }

    /// The index and the random source together, for building routines.
    pub fn policy_inputs(&mut self) -> (&LocationIndex, &mut SimRng) {
        (&self.index, &mut self.rng)
    }

    // ── People ────────────────────────────────────────────────────────────

    /// Place a new susceptible person at `home` with the given routine.
    ///
    /// `home` is registered as the person's named `"Home"`.
    pub fn add_person(&mut self, age: AgeGroup, home: LocationId, routine: Box<dyn Routine>) -> SimResult<PersonId> {
        if home.index() >= self.locations.len() {
            return Err(CoreError::LocationNotFound(home).into());
        }
        let id = PersonId(self.people.len() as u32);
        let mut person = Person::new(id, age, home, Tick::ZERO);
        person.set_named_location(HOME, home);
        self.people.push(person);
        self.routines.push(routine);
        self.measures.push(None);
        Ok(id)
    }

    /// Register a named place (e.g. `"Work"`) for a person.
    pub fn name_place(&mut self, person: PersonId, key: &str, location: LocationId) -> SimResult<()> {
        if location.index() >= self.locations.len() {
            return Err(CoreError::LocationNotFound(location).into());
        }
        self.people
            .get_mut(person.index())
            .ok_or(CoreError::PersonNotFound(person))?
            .set_named_location(key, location);
        Ok(())
    }

    /// Give a person their control measure, replacing any previous one.
    pub fn attach_measure(&mut self, person: PersonId, measure: Box<dyn ControlMeasure>) -> SimResult<()> {
        let slot = self
            .measures
            .get_mut(person.index())
            .ok_or(CoreError::PersonNotFound(person))?;
        *slot = Some(measure);
        Ok(())
    }

    pub fn people(&self) -> &[Person] {
        &self.people
    }

    // ── Build ─────────────────────────────────────────────────────────────

    /// Validate and return a ready-to-run [`City`] at tick 0.
    pub fn build(self) -> SimResult<City> {
        if self.locations.is_empty() {
            return Err(SimError::EmptyRoster);
        }
        if self.people.is_empty() {
            return Err(SimError::EmptyPopulation);
        }

        let mut ledger = MeasureLedger::new();
        for measure in self.measures.iter().flatten() {
            ledger.register(measure.name());
        }

        info!(
            "{}: {} locations, {} people, seed {}",
            self.name,
            self.locations.len(),
            self.people.len(),
            self.rng.seed()
        );

        Ok(City {
            presence:  vec![Vec::new(); self.locations.len()],
            name:      self.name,
            clock:     SimClock::new(),
            rng:       self.rng,
            locations: self.locations,
            index:     self.index,
            people:    self.people,
            routines:  self.routines,
            measures:  self.measures,
            ledger,
        })
    }
}
