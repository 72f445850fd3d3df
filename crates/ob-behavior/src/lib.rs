//! `ob-behavior` — where people go, and what overrides it.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                         |
//! |-------------|------------------------------------------------------------------|
//! | [`context`] | `TurnContext<'a>` — read-only snapshot shared by all policies    |
//! | [`routine`] | `Routine` trait, `ChildRoutine`, `AdultRoutine`, `LunchChoice`   |
//! | [`measure`] | `ControlMeasure` trait, `QuarantineMeasure`, `IsolationMeasure`  |
//! | [`ledger`]  | `MeasureLedger` — per-measure people affected and cost           |
//! | [`error`]   | `BehaviorError`, `BehaviorResult<T>`                             |
//!
//! # Composition
//!
//! Each person owns exactly one `Routine` and zero or one `ControlMeasure`.
//! Every turn the city asks the routine for a candidate location, then lets
//! the measure (if any) replace it:
//!
//! ```text
//! candidate   = routine.next_location(person, ctx, rng)
//! destination = measure.apply(person, ctx, candidate).destination
//! ```
//!
//! Routines are immutable once built and may draw randomness.  Measures keep
//! per-person state (hence `&mut self`) and never draw.

pub mod context;
pub mod error;
pub mod ledger;
pub mod measure;
pub mod routine;


pub use context::TurnContext;
pub use error::{BehaviorError, BehaviorResult};
pub use ledger::{MeasureLedger, MeasureTotals};
pub use measure::{
    ControlMeasure, IsolationConfig, IsolationMeasure, MeasureOutcome, QuarantineConfig,
    QuarantineMeasure,
};
pub use routine::{AdultRoutine, AdultRoutineBuilder, ChildRoutine, LunchChoice, Routine, WorkHours};
