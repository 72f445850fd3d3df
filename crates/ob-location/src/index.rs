//! Location ids grouped by kind.

use std::collections::BTreeMap;

use ob_core::LocationId;

use crate::{Location, LocationKind};

/// Ids of every location of each kind, in roster order.
///
/// Built once after the roster is loaded; routines use it to pick
/// workplaces, groceries and restaurants without scanning every location.
#[derive(Clone, Debug, Default)]
pub struct LocationIndex {
    by_kind:   BTreeMap<LocationKind, Vec<LocationId>>,
    employers: Vec<LocationId>,
}

impl LocationIndex {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn build(locations: &[Location]) -> Self {
        let mut index = Self::new();
        for location in locations {
            index.insert(location);
        }
        index
    }

    /// Register one location.  Callers insert in roster order.
    pub fn insert(&mut self, location: &Location) {
        self.by_kind.entry(location.kind()).or_default().push(location.id());
        if location.kind().can_employ() {
            self.employers.push(location.id());
        }
    }

    pub fn of_kind(&self, kind: LocationKind) -> &[LocationId] {
        self.by_kind.get(&kind).map_or(&[], Vec::as_slice)
    }

    /// Locations that can be an adult's workplace.
    pub fn workplaces(&self) -> &[LocationId] {
        &self.employers
    }

    pub fn restaurants(&self) -> &[LocationId] {
        self.of_kind(LocationKind::Restaurant)
    }

    pub fn groceries(&self) -> &[LocationId] {
        self.of_kind(LocationKind::Grocery)
    }

    pub fn homes(&self) -> &[LocationId] {
        self.of_kind(LocationKind::Home)
    }

    pub fn count(&self, kind: LocationKind) -> usize {
        self.of_kind(kind).len()
    }
}
