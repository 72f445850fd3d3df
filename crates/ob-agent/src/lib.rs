//! `ob-agent` — person agents for the outbreak simulation.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                   |
//! |--------------|------------------------------------------------------------|
//! | [`state`]    | `HealthState`, `Infection`, `Progression`                  |
//! | [`history`]  | `HistoryRecord` — one entry per turn of a person's life    |
//! | [`person`]   | `Person` — identity, place table, disease state machine    |
//!
//! # Disease model (summary)
//!
//! ```text
//! SUSCEPTIBLE ──infect/expose──▶ INFECTED ──load cleared──▶ RESISTANT (terminal)
//! ```
//!
//! While infected, each turn:
//!
//! ```text
//! load      = pathogen.growth(load)
//! response  = min(1, response + resistance · rate · (1 + toxigenicity if sick))
//! load     -= floor(load · response)
//! sick      = load · toxigenicity ≥ symptom_threshold
//! ```
//!
//! A load of zero ends the infection.  Because the response climbs by at
//! least `resistance · rate` per hour and clears everything once it reaches
//! 1.0, every infection ends within [`ob_pathogen::Pathogen::max_infection_hours`].

pub mod history;
pub mod person;
pub mod state;

#[cfg(test)]
mod tests;

pub use history::HistoryRecord;
pub use person::{HOME, Person, GROCERY, WORK};
pub use state::{HealthState, Infection, Progression};
