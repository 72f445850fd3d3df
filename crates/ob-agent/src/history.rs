//! The per-turn history log.

use ob_core::{LocationId, Tick};

use crate::HealthState;

/// Where a person was, and in what condition, at one tick.
///
/// A person's history holds exactly one record per tick from its placement
/// at tick 0 onward, in strictly increasing time.  Every downstream case
/// analysis walks this log.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HistoryRecord {
    pub time:        Tick,
    pub state:       HealthState,
    pub location:    LocationId,
    /// `true` if the person felt sick when the record was taken.
    pub symptomatic: bool,
}
