//! Scenario configuration.
//!
//! Typically loaded from a JSON file by the application crate.  Every field
//! has a default, so `{}` is a valid scenario: seed 12, families of four
//! with two working adults, Lake Spore seeded into a lunchtime restaurant
//! patron, no control measures, at most 400 turns.
//!
//! ```json
//! {
//!   "name": "Lake Town",
//!   "seed": 12,
//!   "stop": { "kind": "extinct", "max_turns": 400 },
//!   "pathogen": "Lake Spore",
//!   "infection": { "start_hour": 11, "target": { "kind": "restaurant_patron" } },
//!   "measure": { "kind": "quarantine", "start_day": 2, "end_day": 30,
//!                "targets": ["Lakeside Diner (R)"], "duration_days": 7,
//!                "cost_per_day": 150.0 }
//! }
//! ```

use std::collections::BTreeSet;
use std::path::Path;

use serde::{Deserialize, Serialize};

use ob_behavior::{IsolationConfig, LunchChoice, QuarantineConfig, WorkHours};
use ob_core::{DayWindow, HOURS_PER_DAY, LocationId};
use ob_location::RestaurantMixing;
use ob_pathogen::presets::LAKE_SPORE;

use crate::{SimError, SimResult, StopRule};

// ── Top level ─────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenarioConfig {
    pub name:         String,
    pub seed:         u64,
    pub stop:         StopConfig,
    /// Preset name, see `ob_pathogen::preset`.
    pub pathogen:     String,
    pub infection:    InfectionConfig,
    pub population:   PopulationConfig,
    pub restaurant:   RestaurantConfig,
    pub measure:      Option<MeasureConfig>,
    pub disinfection: Option<DisinfectionConfig>,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        Self {
            name:         "Lake Town".to_owned(),
            seed:         12,
            stop:         StopConfig::default(),
            pathogen:     LAKE_SPORE.to_owned(),
            infection:    InfectionConfig::default(),
            population:   PopulationConfig::default(),
            restaurant:   RestaurantConfig::default(),
            measure:      None,
            disinfection: None,
        }
    }
}

impl ScenarioConfig {
    pub fn from_json(text: &str) -> SimResult<Self> {
        serde_json::from_str(text).map_err(|e| SimError::Config(e.to_string()))
    }

    pub fn load(path: &Path) -> SimResult<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| SimError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json(&text)
    }

    pub fn to_json_pretty(&self) -> SimResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| SimError::Config(e.to_string()))
    }
}

// ── Stop rule ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StopConfig {
    Extinct { max_turns: u64 },
    Budget { turns: u64 },
}

impl Default for StopConfig {
    fn default() -> Self {
        StopConfig::Extinct { max_turns: 400 }
    }
}

impl From<StopConfig> for StopRule {
    fn from(config: StopConfig) -> Self {
        match config {
            StopConfig::Extinct { max_turns } => StopRule::Extinct { max_turns },
            StopConfig::Budget { turns } => StopRule::TurnBudget(turns),
        }
    }
}

// ── Initial infection ─────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InfectionConfig {
    /// The first turn ending at this hour of day seeds the infection.
    pub start_hour: u32,
    pub target:     InfectionTarget,
}

impl Default for InfectionConfig {
    fn default() -> Self {
        Self { start_hour: 11, target: InfectionTarget::default() }
    }
}

/// Who or what receives the pathogen when the infection is seeded.
#[derive(Clone, Debug, PartialEq, Default, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InfectionTarget {
    /// The first person (population order) in the first occupied restaurant
    /// (roster order).
    #[default]
    RestaurantPatron,
    /// The first person standing in this restaurant.
    NamedRestaurantPatron { restaurant: String },
    /// The first adult in population order.
    FirstAdult,
    /// Contaminate a location instead of infecting a person.
    Contaminate { location: String },
}

// ── Population ────────────────────────────────────────────────────────────────

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PopulationConfig {
    /// People per residential unit.
    pub family_size:       u32,
    /// The first this-many members of each family are working adults.
    pub adults_per_family: u32,
    pub with_grocery:      bool,
    pub errand_hour:       u32,
    pub work_hours:        WorkHours,
    pub lunch:             LunchChoice,
}

impl Default for PopulationConfig {
    fn default() -> Self {
        Self {
            family_size:       4,
            adults_per_family: 2,
            with_grocery:      false,
            errand_hour:       17,
            work_hours:        WorkHours::default(),
            lunch:             LunchChoice::Uniform,
        }
    }
}

impl PopulationConfig {
    pub fn validate(&self) -> SimResult<()> {
        if self.adults_per_family > self.family_size {
            return Err(SimError::Config(format!(
                "adults_per_family ({}) exceeds family_size ({})",
                self.adults_per_family, self.family_size
            )));
        }
        Ok(())
    }
}

// ── Restaurants ───────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RestaurantConfig {
    pub max_contacts:  u32,
    pub food_exposure: f64,
}

impl Default for RestaurantConfig {
    fn default() -> Self {
        let mixing = RestaurantMixing::default();
        Self { max_contacts: mixing.max_contacts, food_exposure: mixing.food_exposure }
    }
}

impl RestaurantConfig {
    pub fn mixing(&self) -> SimResult<RestaurantMixing> {
        Ok(RestaurantMixing::new(self.max_contacts, self.food_exposure)?)
    }
}

// ── Control measures ──────────────────────────────────────────────────────────

/// The control measure given to every person, if any.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MeasureConfig {
    Quarantine {
        start_day:     u64,
        end_day:       u64,
        /// Location names; visiting any of them triggers quarantine.
        targets:       Vec<String>,
        duration_days: u64,
        cost_per_day:  f64,
    },
    Isolation {
        start_day:    u64,
        end_day:      u64,
        cost_per_day: f64,
    },
}

impl MeasureConfig {
    pub fn window(&self) -> DayWindow {
        match *self {
            MeasureConfig::Quarantine { start_day, end_day, .. }
            | MeasureConfig::Isolation { start_day, end_day, .. } => DayWindow::new(start_day, end_day),
        }
    }

    /// Resolve target names into a quarantine configuration.
    pub(crate) fn quarantine(
        &self,
        resolve: impl Fn(&str) -> SimResult<LocationId>,
    ) -> SimResult<Option<QuarantineConfig>> {
        let MeasureConfig::Quarantine { targets, duration_days, cost_per_day, .. } = self else {
            return Ok(None);
        };
        let targets = targets.iter().map(|name| resolve(name)).collect::<SimResult<BTreeSet<_>>>()?;
        Ok(Some(QuarantineConfig {
            window: self.window(),
            targets,
            duration_hours: duration_days * HOURS_PER_DAY,
            cost_per_day: *cost_per_day,
        }))
    }

    pub(crate) fn isolation(&self) -> Option<IsolationConfig> {
        match *self {
            MeasureConfig::Isolation { cost_per_day, .. } => {
                Some(IsolationConfig { window: self.window(), cost_per_day })
            }
            MeasureConfig::Quarantine { .. } => None,
        }
    }
}

// ── Disinfection ──────────────────────────────────────────────────────────────

/// Daily cleaning of selected locations.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DisinfectionConfig {
    /// Hour of day at which the targets are cleaned.
    pub hour:     u32,
    pub targets:  Vec<String>,
    pub efficacy: f64,
}
