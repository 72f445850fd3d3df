//! `ob-core` — foundational types for the outbreak simulation workspace.
//!
//! This crate is a dependency of every other `ob-*` crate.  It has no `ob-*`
//! dependencies and minimal external ones (`rand`, `rand_distr` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module   | Contents                                               |
//! |----------|--------------------------------------------------------|
//! | [`ids`]  | `PersonId`, `LocationId`                               |
//! | [`age`]  | `AgeGroup`                                             |
//! | [`geo`]  | `GeoPoint`, haversine distance                         |
//! | [`time`] | `Tick`, `SimClock`, `DayWindow`                        |
//! | [`rng`]  | `SimRng` — the single seeded random source of a run    |
//! | [`error`]| `CoreError`, `CoreResult`                              |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public value types.  |

pub mod age;
pub mod error;
pub mod geo;
pub mod ids;
pub mod rng;
pub mod time;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use age::AgeGroup;
pub use error::{CoreError, CoreResult};
pub use geo::GeoPoint;
pub use ids::{LocationId, PersonId};
pub use rng::SimRng;
pub use time::{DayWindow, HOURS_PER_DAY, SimClock, Tick};
