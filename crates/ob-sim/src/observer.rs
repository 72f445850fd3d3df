//! Run observer trait for progress reporting and data collection.

use crate::{City, RunReport, TurnSummary};

/// Callbacks invoked by the run loops at key points.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example: daily progress printer
///
/// ```rust,ignore
/// struct Daily;
///
/// impl CityObserver for Daily {
///     fn on_turn_end(&mut self, city: &City, summary: &TurnSummary) {
///         if city.hour() == 0 {
///             println!("day {}: {} infected", city.day(), summary.counts.infected);
///         }
///     }
/// }
/// ```
pub trait CityObserver {
    /// Called once before the first turn, with the initial placement.
    fn on_start(&mut self, _city: &City) {}

    /// Called after every turn.
    fn on_turn_end(&mut self, _city: &City, _summary: &TurnSummary) {}

    /// Called once after the last turn.
    fn on_finish(&mut self, _city: &City, _report: &RunReport) {}
}

/// A [`CityObserver`] that does nothing.
pub struct NoopObserver;

impl CityObserver for NoopObserver {}
