//! Read-only city state passed to every routine and measure.

use ob_core::Tick;
use ob_location::{Location, LocationIndex};

/// A snapshot of the city for one turn.
///
/// Built once per turn by the city after the clock advances and shared by
/// every policy call of the movement phase.  Locations cannot change while
/// it is live.
#[derive(Copy, Clone, Debug)]
pub struct TurnContext<'a> {
    /// The tick being simulated (already advanced).
    pub tick: Tick,

    /// Hour of day, `tick % 24`.
    pub hour: u32,

    /// Day number, `tick / 24`.
    pub day: u64,

    /// Every location, indexed by `LocationId`.
    pub locations: &'a [Location],

    pub index: &'a LocationIndex,
}

impl<'a> TurnContext<'a> {
    #[inline]
    pub fn new(tick: Tick, locations: &'a [Location], index: &'a LocationIndex) -> Self {
        Self { tick, hour: tick.hour(), day: tick.day(), locations, index }
    }
}
