//! Per-location interaction models.
//!
//! # Restaurant mixing draw order
//!
//! ```text
//! for source in present (contagious only):
//!     contacts = next_int(max_contacts + 1)
//!     repeat contacts times:
//!         target = present[next_int(present.len())]
//!         target != source  →  target.expose(source's pathogen)
//! if contaminated:
//!     for patron in present:
//!         gen_bool(food_exposure)  →  patron.expose(contamination)
//! ```
//!
//! Sources are decided before anyone is exposed, so a patron infected during
//! this turn does not transmit until the next one.

use ob_agent::Person;
use ob_core::{PersonId, SimRng};
use ob_pathogen::Pathogen;

use crate::{LocationError, LocationKind, LocationResult};

/// Parameters of the restaurant contact model.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestaurantMixing {
    /// Upper bound (inclusive) on contacts drawn per contagious patron.
    pub max_contacts:  u32,
    /// Chance that one patron eats contaminated food in a turn.
    pub food_exposure: f64,
}

impl RestaurantMixing {
    pub fn new(max_contacts: u32, food_exposure: f64) -> LocationResult<Self> {
        if !(0.0..=1.0).contains(&food_exposure) {
            return Err(LocationError::Mixing(format!(
                "food_exposure must be in [0, 1], got {food_exposure}"
            )));
        }
        Ok(Self { max_contacts, food_exposure })
    }
}

impl Default for RestaurantMixing {
    fn default() -> Self {
        Self { max_contacts: 3, food_exposure: 0.05 }
    }
}

/// How the people present at a location affect each other.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Mixing {
    /// No exposure and no random draws.
    #[default]
    Isolated,
    Restaurant(RestaurantMixing),
}

/// What happened during one location's interaction step.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct InteractionReport {
    /// Exposures attempted (person-to-person and food).
    pub exposures:  u32,
    /// Exposures that produced a new infection.
    pub infections: u32,
}

impl std::ops::AddAssign for InteractionReport {
    fn add_assign(&mut self, rhs: Self) {
        self.exposures += rhs.exposures;
        self.infections += rhs.infections;
    }
}

impl Mixing {
    /// Default mixing model for a location kind.
    pub fn default_for(kind: LocationKind) -> Self {
        match kind {
            LocationKind::Restaurant => Mixing::Restaurant(RestaurantMixing::default()),
            _ => Mixing::Isolated,
        }
    }

    pub(crate) fn run(
        &self,
        present: &[PersonId],
        contamination: Option<&Pathogen>,
        people: &mut [Person],
        rng: &mut SimRng,
    ) -> InteractionReport {
        let mut report = InteractionReport::default();
        let Mixing::Restaurant(params) = self else {
            return report;
        };
        if present.is_empty() {
            return report;
        }

        // Snapshot sources first; the list of transmitters is fixed for the turn.
        let sources: Vec<(PersonId, Pathogen)> = present
            .iter()
            .filter_map(|&id| {
                let person = &people[id.index()];
                person.pathogen().filter(|_| person.is_contagious()).map(|p| (id, p.clone()))
            })
            .collect();

        for (source, pathogen) in &sources {
            let contacts = rng.next_int(params.max_contacts as usize + 1);
            for _ in 0..contacts {
                let target = present[rng.next_int(present.len())];
                if target == *source {
                    continue;
                }
                report.exposures += 1;
                if people[target.index()].expose(pathogen, rng) {
                    report.infections += 1;
                }
            }
        }

        if let Some(pathogen) = contamination {
            for &id in present {
                if rng.gen_bool(params.food_exposure) {
                    report.exposures += 1;
                    if people[id.index()].expose(pathogen, rng) {
                        report.infections += 1;
                    }
                }
            }
        }

        report
    }
}
