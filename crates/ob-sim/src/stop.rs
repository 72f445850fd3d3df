//! When a run ends.

use crate::City;

/// Termination policy chosen by whoever drives the run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopRule {
    /// Stop once no person is infected and no location is contaminated, or
    /// after `max_turns`.
    Extinct { max_turns: u64 },
    /// Run exactly this many turns.
    TurnBudget(u64),
}

/// Why a run ended.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum StopReason {
    Extinct,
    TurnLimit,
}

/// Outcome of a completed run.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct RunReport {
    pub turns:  u64,
    pub reason: StopReason,
}

impl StopRule {
    /// Most turns the rule allows.
    pub fn max_turns(&self) -> u64 {
        match *self {
            StopRule::Extinct { max_turns } => max_turns,
            StopRule::TurnBudget(n) => n,
        }
    }

    /// Checked before each turn.
    pub fn budget_spent(&self, turns: u64) -> bool {
        turns >= self.max_turns()
    }

    /// Checked after each turn.
    pub fn outbreak_over(&self, city: &City) -> bool {
        matches!(self, StopRule::Extinct { .. }) && city.is_outbreak_over()
    }
}
