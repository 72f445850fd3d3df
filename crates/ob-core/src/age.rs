//! Host age groups.  Pathogen parameters are looked up per group.

use std::fmt;

/// The two age groups a person can belong to.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AgeGroup {
    Child,
    Adult,
}

impl AgeGroup {
    /// Upper-case label used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            AgeGroup::Child => "CHILD",
            AgeGroup::Adult => "ADULT",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
