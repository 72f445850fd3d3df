//! Running totals per control measure.

use std::collections::BTreeMap;

use crate::MeasureOutcome;

#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct MeasureTotals {
    /// Distinct people the measure has affected so far.
    pub people_affected: u64,
    pub total_cost:      f64,
}

/// Totals for every measure in a city, keyed by measure name.
///
/// Owned by the city and updated from each turn's [`MeasureOutcome`]s, so
/// two cities never share counts.
#[derive(Clone, Debug, Default)]
pub struct MeasureLedger {
    totals: BTreeMap<String, MeasureTotals>,
}

impl MeasureLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Make `name` appear in reports even before it affects anyone.
    pub fn register(&mut self, name: &str) {
        if !self.totals.contains_key(name) {
            self.totals.insert(name.to_owned(), MeasureTotals::default());
        }
    }

    pub fn record(&mut self, name: &str, outcome: &MeasureOutcome) {
        self.register(name);
        if let Some(totals) = self.totals.get_mut(name) {
            if outcome.newly_affected {
                totals.people_affected += 1;
            }
            totals.total_cost += outcome.cost;
        }
    }

    pub fn get(&self, name: &str) -> Option<&MeasureTotals> {
        self.totals.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &MeasureTotals)> {
        self.totals.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn total_cost(&self) -> f64 {
        self.totals.values().map(|t| t.total_cost).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.totals.is_empty()
    }
}
