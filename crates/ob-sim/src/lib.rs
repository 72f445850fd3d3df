//! `ob-sim` — the city and its turn loop.
//!
//! # One turn
//!
//! ```text
//! City::do_turn():
//!   ① Clock     — time += 1 hour.
//!   ② Movement  — for each person in population order:
//!                   candidate   = routine.next_location(..)
//!                   destination = measure.apply(.., candidate)   (if any)
//!                   person.relocate(destination)                 (history += 1)
//!   ③ Contact   — presence lists rebuilt; every location in roster order
//!                 runs interact(present people).
//!   ④ Disease   — every infected person progresses one hour.
//! ```
//!
//! The city's single `SimRng` is consumed only in this order, so a fixed seed
//! and fixed roster reproduce the run exactly.  The engine never decides when
//! to stop: callers pass a [`StopRule`] to [`City::run`] or drive
//! `do_turn` themselves.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`city`]     | `City`, `TurnSummary`, `SirCounts`                        |
//! | [`builder`]  | `CityBuilder`                                             |
//! | [`stop`]     | `StopRule`, `StopReason`, `RunReport`                     |
//! | [`observer`] | `CityObserver`, `NoopObserver`                            |
//! | [`config`]   | `ScenarioConfig` and its sections (serde / JSON)          |
//! | [`setup`]    | `populate_city` — roster + families                       |
//! | [`scenario`] | `Scenario` — configured city with seeding and cleaning    |
//! | [`error`]    | `SimError`, `SimResult<T>`                                |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use ob_location::load_roster_csv;
//! use ob_sim::{NoopObserver, Scenario, ScenarioConfig};
//!
//! let roster = load_roster_csv(Path::new("coords.csv"))?;
//! let mut scenario = Scenario::from_config(&ScenarioConfig::default(), &roster)?;
//! let report = scenario.run(&mut NoopObserver)?;
//! ```

pub mod builder;
pub mod city;
pub mod config;
pub mod error;
pub mod observer;
pub mod scenario;
pub mod setup;
pub mod stop;


pub use builder::CityBuilder;
pub use city::{City, SirCounts, TurnSummary};
pub use config::{
    DisinfectionConfig, InfectionConfig, InfectionTarget, MeasureConfig, PopulationConfig,
    RestaurantConfig, ScenarioConfig, StopConfig,
};
pub use error::{SimError, SimResult};
pub use observer::{CityObserver, NoopObserver};
pub use scenario::{Scenario, Seeded};
pub use setup::populate_city;
pub use stop::{RunReport, StopReason, StopRule};
