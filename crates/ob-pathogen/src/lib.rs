//! `ob-pathogen` — pathogen parameter sets.
//!
//! # Crate layout
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`growth`]  | `GrowthCurve` — hourly bacterial expansion law        |
//! | [`pathogen`]| `Pathogen`, `AgeProfile`, `PathogenBuilder`           |
//! | [`presets`] | Named variants (`lake_spore`, `kineosphaera`)         |
//! | [`error`]   | `PathogenError`, `PathogenResult<T>`                  |
//!
//! A pathogen is plain immutable data.  Named variants differ only in their
//! numbers and curve; the engine only ever calls `infectivity`,
//! `toxigenicity`, `resistance`, and `growth`.

pub mod error;
pub mod growth;
pub mod pathogen;
pub mod presets;

#[cfg(test)]
mod tests;

pub use error::{PathogenError, PathogenResult};
pub use growth::GrowthCurve;
pub use pathogen::{AgeProfile, Pathogen, PathogenBuilder};
