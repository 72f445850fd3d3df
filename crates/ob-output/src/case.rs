//! Case retracing from a person's history log.
//!
//! Everything here is derived by walking [`Person::history`] only; the
//! engine keeps no separate case records.  A history record is taken when the
//! person moves, before that turn's interactions, so an infection picked up
//! during turn `t` first shows in the record for `t + 1`.

use ob_agent::{GROCERY, HOME, HealthState, Person, WORK};
use ob_core::{AgeGroup, PersonId, Tick};
use ob_location::LocationKind;
use ob_sim::City;

use crate::CaseRow;

/// The story of one infection.
#[derive(Debug, Clone, PartialEq)]
pub struct CaseReport {
    pub person:       PersonId,
    pub age:          AgeGroup,
    /// First record showing the person infected.
    pub infected_at:  Option<Tick>,
    /// First record showing symptoms.
    pub symptoms_at:  Option<Tick>,
    /// First record showing the person resistant.
    pub recovered_at: Option<Tick>,
    pub home:         String,
    pub work:         Option<String>,
    pub grocery:      Option<String>,
    /// Restaurants visited while still susceptible, in first-visit order.
    pub restaurants:  Vec<String>,
}

/// Retrace a person's case, or `None` if they were never infected.
pub fn retrace(person: &Person, city: &City) -> Option<CaseReport> {
    if person.state() == HealthState::Susceptible {
        return None;
    }

    let name_of = |key: &str| {
        person
            .named_location(key)
            .and_then(|id| city.location(id))
            .map(|l| l.name().to_owned())
    };

    let mut report = CaseReport {
        person:       person.id(),
        age:          person.age(),
        infected_at:  None,
        symptoms_at:  None,
        recovered_at: None,
        home:         name_of(HOME).unwrap_or_default(),
        work:         name_of(WORK),
        grocery:      name_of(GROCERY),
        restaurants:  Vec::new(),
    };

    for record in person.history() {
        match record.state {
            HealthState::Susceptible => {
                let Some(location) = city.location(record.location) else { continue };
                if location.kind() == LocationKind::Restaurant
                    && !report.restaurants.iter().any(|r| r == location.name())
                {
                    report.restaurants.push(location.name().to_owned());
                }
            }
            HealthState::Infected => {
                report.infected_at.get_or_insert(record.time);
            }
            HealthState::Resistant => {
                report.recovered_at.get_or_insert(record.time);
            }
        }
        if record.symptomatic {
            report.symptoms_at.get_or_insert(record.time);
        }
    }
    Some(report)
}

impl CaseReport {
    /// Hours from first infected record to first resistant record.
    pub fn duration_hours(&self) -> Option<u64> {
        Some(self.recovered_at?.since(self.infected_at?))
    }

    pub fn to_row(&self) -> CaseRow {
        CaseRow {
            person_id:    self.person.0,
            age:          self.age.as_str(),
            infected_at:  self.infected_at.map(|t| t.0),
            symptoms_at:  self.symptoms_at.map(|t| t.0),
            recovered_at: self.recovered_at.map(|t| t.0),
            home:         self.home.clone(),
            work:         self.work.clone(),
            restaurants:  self.restaurants.join(";"),
        }
    }
}
