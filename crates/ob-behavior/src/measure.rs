//! Control measures: per-person overrides of the routine's choice.
//!
//! A measure is consulted after the routine and before the person moves.  It
//! only acts while the current day is inside its [`DayWindow`]; outside the
//! window the candidate passes through and the measure's state is frozen.

use std::collections::BTreeSet;

use log::debug;

use ob_agent::{HealthState, Person};
use ob_core::{DayWindow, HOURS_PER_DAY, LocationId};

use crate::TurnContext;

/// What a measure decided for one person this turn.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MeasureOutcome {
    pub destination:    LocationId,
    /// `true` on the first turn this measure ever affects the person.
    pub newly_affected: bool,
    /// Cost incurred by this turn's intervention.
    pub cost:           f64,
}

impl MeasureOutcome {
    /// Leave the routine's choice alone at no cost.
    pub fn pass(candidate: LocationId) -> Self {
        Self { destination: candidate, newly_affected: false, cost: 0.0 }
    }

    fn redirect(destination: LocationId, newly_affected: bool, cost: f64) -> Self {
        Self { destination, newly_affected, cost }
    }
}

/// A policy that can override where a person goes.
///
/// One instance belongs to one person; implementations keep that person's
/// state (quarantine timers, latches) in `self`.
pub trait ControlMeasure: Send + Sync + 'static {
    /// Ledger key.  Instances of the same measure share a name.
    fn name(&self) -> &str;

    /// Days on which the measure is in force.
    fn window(&self) -> DayWindow;

    /// The measure's decision for an in-window turn.
    fn intervene(&mut self, person: &Person, ctx: &TurnContext<'_>, candidate: LocationId) -> MeasureOutcome;

    /// Gate [`intervene`](Self::intervene) by the window.
    fn apply(&mut self, person: &Person, ctx: &TurnContext<'_>, candidate: LocationId) -> MeasureOutcome {
        if self.window().contains(ctx.day) {
            self.intervene(person, ctx, candidate)
        } else {
            MeasureOutcome::pass(candidate)
        }
    }
}

// ── Quarantine ────────────────────────────────────────────────────────────────

/// Settings shared by every person's quarantine instance.
#[derive(Clone, Debug, PartialEq)]
pub struct QuarantineConfig {
    pub window:         DayWindow,
    /// Visiting (or heading to) any of these triggers quarantine.
    pub targets:        BTreeSet<LocationId>,
    pub duration_hours: u64,
    pub cost_per_day:   f64,
}

/// Sends a still-susceptible person home for a fixed time once they have
/// been to a target location.
///
/// Each person is quarantined at most once.  The trigger turn counts as hour
/// zero; the person is released on the first turn where the hours spent
/// exceed `duration_hours`.
#[derive(Clone, Debug)]
pub struct QuarantineMeasure {
    config:           QuarantineConfig,
    quarantined:      bool,
    time_quarantined: u64,
    was_quarantined:  bool,
    visited_target:   bool,
    scanned:          usize,
}

impl QuarantineMeasure {
    pub const NAME: &'static str = "Quarantine";

    pub fn new(config: QuarantineConfig) -> Self {
        Self {
            config,
            quarantined:      false,
            time_quarantined: 0,
            was_quarantined:  false,
            visited_target:   false,
            scanned:          0,
        }
    }

    pub fn config(&self) -> &QuarantineConfig {
        &self.config
    }

    pub fn is_quarantined(&self) -> bool {
        self.quarantined
    }

    pub fn time_quarantined(&self) -> u64 {
        self.time_quarantined
    }

    pub fn was_quarantined(&self) -> bool {
        self.was_quarantined
    }

    fn hourly_cost(&self) -> f64 {
        self.config.cost_per_day / HOURS_PER_DAY as f64
    }

    /// Examine history records not seen yet.
    fn scan_history(&mut self, person: &Person) {
        let history = person.history();
        if self.scanned < history.len() {
            let targets = &self.config.targets;
            self.visited_target |= history[self.scanned..].iter().any(|r| targets.contains(&r.location));
            self.scanned = history.len();
        }
    }
}

impl ControlMeasure for QuarantineMeasure {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn window(&self) -> DayWindow {
        self.config.window
    }

    fn intervene(&mut self, person: &Person, _ctx: &TurnContext<'_>, candidate: LocationId) -> MeasureOutcome {
        if self.quarantined {
            self.time_quarantined += 1;
            if self.time_quarantined > self.config.duration_hours {
                debug!("{} released from quarantine after {} h", person.id(), self.time_quarantined);
                self.quarantined = false;
                return MeasureOutcome::pass(candidate);
            }
            return MeasureOutcome::redirect(person.home(), false, self.hourly_cost());
        }
        if self.was_quarantined {
            return MeasureOutcome::pass(candidate);
        }

        self.scan_history(person);
        let exposed = self.visited_target || self.config.targets.contains(&candidate);
        if exposed && person.state() == HealthState::Susceptible {
            debug!("{} quarantined at home", person.id());
            self.quarantined = true;
            self.was_quarantined = true;
            self.time_quarantined = 0;
            return MeasureOutcome::redirect(person.home(), true, self.hourly_cost());
        }
        MeasureOutcome::pass(candidate)
    }
}

// ── Isolation ─────────────────────────────────────────────────────────────────

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct IsolationConfig {
    pub window:       DayWindow,
    pub cost_per_day: f64,
}

/// Keeps symptomatic people at home for as long as they feel sick.
#[derive(Clone, Debug)]
pub struct IsolationMeasure {
    config:        IsolationConfig,
    ever_isolated: bool,
}

impl IsolationMeasure {
    pub const NAME: &'static str = "Isolation";

    pub fn new(config: IsolationConfig) -> Self {
        Self { config, ever_isolated: false }
    }

    pub fn ever_isolated(&self) -> bool {
        self.ever_isolated
    }
}

impl ControlMeasure for IsolationMeasure {
    fn name(&self) -> &str {
        Self::NAME
    }

    fn window(&self) -> DayWindow {
        self.config.window
    }

    fn intervene(&mut self, person: &Person, _ctx: &TurnContext<'_>, candidate: LocationId) -> MeasureOutcome {
        if !person.feels_sick() {
            return MeasureOutcome::pass(candidate);
        }
        let first = !self.ever_isolated;
        if first {
            debug!("{} isolating at home", person.id());
            self.ever_isolated = true;
        }
        MeasureOutcome::redirect(person.home(), first, self.config.cost_per_day / HOURS_PER_DAY as f64)
    }
}
