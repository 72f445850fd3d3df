//! Disease state types.

use std::fmt;

use ob_pathogen::Pathogen;

/// The three SIR states.  `Resistant` is terminal.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthState {
    Susceptible,
    Infected,
    Resistant,
}

impl HealthState {
    pub const ALL: [HealthState; 3] =
        [HealthState::Susceptible, HealthState::Infected, HealthState::Resistant];

    /// Upper-case label used in reports.
    pub fn as_str(self) -> &'static str {
        match self {
            HealthState::Susceptible => "SUSCEPTIBLE",
            HealthState::Infected    => "INFECTED",
            HealthState::Resistant   => "RESISTANT",
        }
    }
}

impl fmt::Display for HealthState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An ongoing infection inside one host.
///
/// The host holds a private copy of the pathogen so its bacterial load
/// evolves independently of every other host.
#[derive(Clone, Debug, PartialEq)]
pub struct Infection {
    pub(crate) pathogen:  Pathogen,
    pub(crate) load:      u64,
    pub(crate) response:  f64,
    pub(crate) latent:    bool,
    pub(crate) incubated: bool,
}

impl Infection {
    pub(crate) fn new(pathogen: &Pathogen) -> Self {
        Self {
            pathogen:  pathogen.clone(),
            load:      pathogen.inoculum(),
            response:  0.0,
            latent:    true,
            incubated: false,
        }
    }

    pub fn pathogen(&self) -> &Pathogen {
        &self.pathogen
    }

    pub fn load(&self) -> u64 {
        self.load
    }

    /// Immune response in `[0, 1]`: the fraction of the load cleared per hour.
    pub fn response(&self) -> f64 {
        self.response
    }

    pub fn is_latent(&self) -> bool {
        self.latent
    }

    pub fn is_incubated(&self) -> bool {
        self.incubated
    }
}

/// Per-state payload.  Only the infected variant carries a pathogen, so
/// "infected ⇔ holds a personal pathogen" cannot be violated.
#[derive(Clone, Debug, PartialEq)]
pub(crate) enum Condition {
    Susceptible,
    Infected(Infection),
    Resistant,
}

impl Condition {
    pub(crate) fn state(&self) -> HealthState {
        match self {
            Condition::Susceptible => HealthState::Susceptible,
            Condition::Infected(_) => HealthState::Infected,
            Condition::Resistant   => HealthState::Resistant,
        }
    }
}

/// A notable change produced by one turn of disease progression.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum Progression {
    /// The host just crossed the symptomatic threshold.
    BecameSymptomatic,
    /// The load reached zero; the host is now resistant.
    Recovered,
}
