//! The `Location` type and its contamination state.

use log::debug;

use ob_agent::Person;
use ob_core::{GeoPoint, LocationId, PersonId, SimRng};
use ob_pathogen::Pathogen;

use crate::{InteractionReport, LocationKind, Mixing};

/// Whether a location currently harbours a pathogen of its own.
///
/// A contaminated location keeps its private pathogen copy until a
/// successful disinfection.
#[derive(Clone, Debug, Default, PartialEq)]
pub enum Contamination {
    #[default]
    Clean,
    Contaminated(Pathogen),
}

impl Contamination {
    pub fn is_contaminated(&self) -> bool {
        matches!(self, Contamination::Contaminated(_))
    }

    pub fn pathogen(&self) -> Option<&Pathogen> {
        match self {
            Contamination::Contaminated(pathogen) => Some(pathogen),
            Contamination::Clean => None,
        }
    }
}

/// Result of one disinfection attempt.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum DisinfectOutcome {
    /// The location was already clean; nothing happened.
    NoEffect,
    /// The contamination was removed.
    Cleared,
    /// The attempt was made but the contamination survived.
    Failed,
}

/// A fixed site in the city.
#[derive(Clone, Debug)]
pub struct Location {
    id:                    LocationId,
    point:                 GeoPoint,
    name:                  String,
    kind:                  LocationKind,
    contamination:         Contamination,
    mixing:                Mixing,
    disinfection_efficacy: f64,
}

impl Location {
    /// A clean location with the default mixing model for its kind and a
    /// disinfection that always succeeds.
    pub fn new(id: LocationId, kind: LocationKind, point: GeoPoint, name: impl Into<String>) -> Self {
        Self {
            id,
            point,
            name: name.into(),
            kind,
            contamination: Contamination::Clean,
            mixing: Mixing::default_for(kind),
            disinfection_efficacy: 1.0,
        }
    }

    pub fn id(&self) -> LocationId {
        self.id
    }

    pub fn point(&self) -> GeoPoint {
        self.point
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> LocationKind {
        self.kind
    }

    pub fn mixing(&self) -> &Mixing {
        &self.mixing
    }

    pub fn set_mixing(&mut self, mixing: Mixing) {
        self.mixing = mixing;
    }

    pub fn disinfection_efficacy(&self) -> f64 {
        self.disinfection_efficacy
    }

    /// Probability in `[0, 1]` that one disinfection clears contamination.
    pub fn set_disinfection_efficacy(&mut self, efficacy: f64) {
        self.disinfection_efficacy = efficacy.clamp(0.0, 1.0);
    }

    pub fn contamination(&self) -> &Contamination {
        &self.contamination
    }

    pub fn is_contaminated(&self) -> bool {
        self.contamination.is_contaminated()
    }

    // ── Scenario hooks ────────────────────────────────────────────────────

    /// Contaminate with a private copy of `pathogen`.
    ///
    /// Replaces any existing contamination.  Returns `true` if the location
    /// was clean before.
    pub fn contaminate(&mut self, pathogen: &Pathogen) -> bool {
        let was_clean = !self.is_contaminated();
        debug!("{} ({}) contaminated with {}", self.name, self.id, pathogen.name());
        self.contamination = Contamination::Contaminated(pathogen.clone());
        was_clean
    }

    /// Attempt to remove contamination.
    ///
    /// A clean location is left alone and draws nothing.  An efficacy of 1.0
    /// always clears without drawing; anything lower costs exactly one draw.
    pub fn disinfect(&mut self, rng: &mut SimRng) -> DisinfectOutcome {
        if !self.is_contaminated() {
            return DisinfectOutcome::NoEffect;
        }
        let cleared = self.disinfection_efficacy >= 1.0 || rng.gen_bool(self.disinfection_efficacy);
        if cleared {
            debug!("{} ({}) disinfected", self.name, self.id);
            self.contamination = Contamination::Clean;
            DisinfectOutcome::Cleared
        } else {
            debug!("{} ({}) disinfection failed", self.name, self.id);
            DisinfectOutcome::Failed
        }
    }

    // ── Turn step ─────────────────────────────────────────────────────────

    /// Run this turn's interactions among the people standing here.
    ///
    /// `present` holds the ids of exactly those people, in population order;
    /// `people` is the whole population indexed by `PersonId`.
    pub fn interact(
        &self,
        present: &[PersonId],
        people: &mut [Person],
        rng: &mut SimRng,
    ) -> InteractionReport {
        self.mixing.run(present, self.contamination.pathogen(), people, rng)
    }
}
