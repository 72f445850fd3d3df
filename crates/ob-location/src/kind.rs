//! Location categories and the roster's category-tag convention.
//!
//! Roster names carry their category as a letter in parentheses, e.g.
//! `"Restaurant 2 (R)"`.  Names without a recognised tag are residential.

use std::fmt;

/// The category of a location.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LocationKind {
    Home,
    Restaurant,
    Grocery,
    Company,
    Beach,
}

impl LocationKind {
    pub const ALL: [LocationKind; 5] = [
        LocationKind::Home,
        LocationKind::Restaurant,
        LocationKind::Grocery,
        LocationKind::Company,
        LocationKind::Beach,
    ];

    /// Map a category tag to a kind.  Unknown tags yield `None`.
    pub fn from_tag(tag: &str) -> Option<LocationKind> {
        match tag.trim() {
            "H" => Some(LocationKind::Home),
            "R" => Some(LocationKind::Restaurant),
            "G" => Some(LocationKind::Grocery),
            "C" => Some(LocationKind::Company),
            "B" => Some(LocationKind::Beach),
            _ => None,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            LocationKind::Home       => "H",
            LocationKind::Restaurant => "R",
            LocationKind::Grocery    => "G",
            LocationKind::Company    => "C",
            LocationKind::Beach      => "B",
        }
    }

    /// Whether adults can be assigned here as their workplace.
    pub fn can_employ(self) -> bool {
        matches!(
            self,
            LocationKind::Company | LocationKind::Restaurant | LocationKind::Grocery
        )
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Home       => "home",
            LocationKind::Restaurant => "restaurant",
            LocationKind::Grocery    => "grocery",
            LocationKind::Company    => "company",
            LocationKind::Beach      => "beach",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Category encoded in a roster name.
///
/// Reads the text inside the first `(...)`.  Missing or unrecognised tags
/// mean a residential unit.
pub fn parse_category_tag(name: &str) -> LocationKind {
    name.split_once('(')
        .and_then(|(_, rest)| rest.split_once(')'))
        .and_then(|(tag, _)| LocationKind::from_tag(tag))
        .unwrap_or(LocationKind::Home)
}
