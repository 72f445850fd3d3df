//! Simulation time model.
//!
//! # Design
//!
//! Time is a monotonically increasing `Tick` counter of whole simulated
//! hours since the start of the run.  Tick 0 is the initial placement of
//! every person; each call to `City::do_turn` advances the clock by exactly
//! one tick before anything else happens.
//!
//! Hour-of-day and day number are derived (`tick % 24`, `tick / 24`), so all
//! schedule arithmetic is exact integer arithmetic.

use std::fmt;

/// Hours in one simulated day.
pub const HOURS_PER_DAY: u64 = 24;

// ── Tick ─────────────────────────────────────────────────────────────────────

/// An absolute simulation hour counter.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// Hour of day in `0..24`.
    #[inline]
    pub fn hour(self) -> u32 {
        (self.0 % HOURS_PER_DAY) as u32
    }

    /// Whole days elapsed since tick 0.
    #[inline]
    pub fn day(self) -> u64 {
        self.0 / HOURS_PER_DAY
    }

    /// Ticks elapsed from `earlier` to `self`.
    ///
    /// # Panics
    /// Panics in debug mode if `earlier > self`.
    #[inline]
    pub fn since(self, earlier: Tick) -> u64 {
        self.0 - earlier.0
    }
}

impl std::ops::Add<u64> for Tick {
    type Output = Tick;
    #[inline]
    fn add(self, rhs: u64) -> Tick {
        Tick(self.0 + rhs)
    }
}

impl std::ops::Sub for Tick {
    type Output = u64;
    #[inline]
    fn sub(self, rhs: Tick) -> u64 {
        self.0 - rhs.0
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

// ── SimClock ──────────────────────────────────────────────────────────────────

/// The city clock.  Starts at tick 0 and only ever moves forward by one.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimClock {
    current_tick: Tick,
}

impl SimClock {
    pub fn new() -> Self {
        Self { current_tick: Tick::ZERO }
    }

    /// Advance the clock by one hour.
    #[inline]
    pub fn advance(&mut self) {
        self.current_tick = Tick(self.current_tick.0 + 1);
    }

    #[inline]
    pub fn now(&self) -> Tick {
        self.current_tick
    }

    /// Hour of day of the current tick.
    #[inline]
    pub fn hour(&self) -> u32 {
        self.current_tick.hour()
    }

    /// Day number of the current tick.
    #[inline]
    pub fn day(&self) -> u64 {
        self.current_tick.day()
    }

    /// How many ticks span `days` days.
    #[inline]
    pub fn ticks_for_days(days: u64) -> u64 {
        days * HOURS_PER_DAY
    }
}

impl fmt::Display for SimClock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} (day {} {:02}:00)", self.current_tick, self.day(), self.hour())
    }
}

// ── DayWindow ─────────────────────────────────────────────────────────────────

/// A half-open range of simulation days `[start_day, end_day)`.
///
/// Control measures are active only while the current day falls inside their
/// window.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DayWindow {
    pub start_day: u64,
    pub end_day:   u64,
}

impl DayWindow {
    pub fn new(start_day: u64, end_day: u64) -> Self {
        Self { start_day, end_day }
    }

    /// A window that never closes.
    pub fn always() -> Self {
        Self { start_day: 0, end_day: u64::MAX }
    }

    #[inline]
    pub fn contains(&self, day: u64) -> bool {
        (self.start_day..self.end_day).contains(&day)
    }
}
