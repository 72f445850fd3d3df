//! The `Pathogen` parameter set and its builder.

use std::sync::Arc;

use ob_core::AgeGroup;

use crate::{GrowthCurve, PathogenError, PathogenResult};

// ── AgeProfile ────────────────────────────────────────────────────────────────

/// Per-age-group host interaction parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgeProfile {
    /// Probability that one exposure infects a susceptible host.
    pub infectivity: f64,
    /// Toxin produced per bacterium.  Drives symptoms, and symptomatic hosts
    /// mount a stronger immune response.
    pub toxigenicity: f64,
    /// Immune response gained per hour, in units of `response_rate`.
    pub resistance: f64,
}

impl AgeProfile {
    pub fn new(infectivity: f64, toxigenicity: f64, resistance: f64) -> Self {
        Self { infectivity, toxigenicity, resistance }
    }
}

// ── Pathogen ──────────────────────────────────────────────────────────────────

/// An immutable pathogen parameter set.
///
/// Cloning is cheap (the name is reference-counted); every infected host and
/// every contaminated location holds its own copy.
#[derive(Clone, Debug, PartialEq)]
pub struct Pathogen {
    pub(crate) name:              Arc<str>,
    pub(crate) child:             AgeProfile,
    pub(crate) adult:             AgeProfile,
    pub(crate) curve:             GrowthCurve,
    pub(crate) inoculum:          u64,
    pub(crate) response_rate:     f64,
    pub(crate) symptom_threshold: f64,
}

impl Pathogen {
    /// Start building a pathogen called `name`.
    pub fn builder(name: impl Into<String>) -> PathogenBuilder {
        PathogenBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self, age: AgeGroup) -> &AgeProfile {
        match age {
            AgeGroup::Child => &self.child,
            AgeGroup::Adult => &self.adult,
        }
    }

    #[inline]
    pub fn infectivity(&self, age: AgeGroup) -> f64 {
        self.profile(age).infectivity
    }

    #[inline]
    pub fn toxigenicity(&self, age: AgeGroup) -> f64 {
        self.profile(age).toxigenicity
    }

    #[inline]
    pub fn resistance(&self, age: AgeGroup) -> f64 {
        self.profile(age).resistance
    }

    /// Load after one hour of unchecked growth from `bacteria`.
    #[inline]
    pub fn growth(&self, bacteria: u64) -> u64 {
        bacteria.saturating_add(self.curve.expansion(bacteria))
    }

    pub fn curve(&self) -> &GrowthCurve {
        &self.curve
    }

    /// Bacterial load of a freshly infected host.
    pub fn inoculum(&self) -> u64 {
        self.inoculum
    }

    /// Immune response gained per hour per unit of resistance.
    pub fn response_rate(&self) -> f64 {
        self.response_rate
    }

    /// Toxin level (`load · toxigenicity`) at which a host feels sick.
    pub fn symptom_threshold(&self) -> f64 {
        self.symptom_threshold
    }

    /// Upper bound, in hours, on how long any host can stay infected.
    ///
    /// The response reaches 1.0 (clearing the whole load in one hour) after
    /// at most `ceil(1 / (resistance · response_rate))` hours; one extra hour
    /// absorbs floating-point rounding.
    pub fn max_infection_hours(&self) -> u64 {
        let slowest = self.child.resistance.min(self.adult.resistance) * self.response_rate;
        (1.0 / slowest).ceil() as u64 + 1
    }
}

// ── PathogenBuilder ───────────────────────────────────────────────────────────

/// Fluent builder for [`Pathogen`].
///
/// | Method                     | Default                          |
/// |----------------------------|----------------------------------|
/// | `.profile(age, p)`         | `AgeProfile::new(0.1, 1.0, 1.0)` |
/// | `.both(p)`                 | —                                |
/// | `.curve(c)`                | `ScaledSqrt { factor: 0.5 }`     |
/// | `.inoculum(n)`             | 10                               |
/// | `.response_rate(r)`        | 0.001                            |
/// | `.symptom_threshold(t)`    | 100.0                            |
#[derive(Clone, Debug)]
pub struct PathogenBuilder {
    name:              String,
    child:             AgeProfile,
    adult:             AgeProfile,
    curve:             GrowthCurve,
    inoculum:          u64,
    response_rate:     f64,
    symptom_threshold: f64,
}

impl PathogenBuilder {
    pub fn new(name: impl Into<String>) -> Self {
        let default_profile = AgeProfile::new(0.1, 1.0, 1.0);
        Self {
            name:              name.into(),
            child:             default_profile,
            adult:             default_profile,
            curve:             GrowthCurve::ScaledSqrt { factor: 0.5 },
            inoculum:          10,
            response_rate:     0.001,
            symptom_threshold: 100.0,
        }
    }

    pub fn profile(mut self, age: AgeGroup, profile: AgeProfile) -> Self {
        match age {
            AgeGroup::Child => self.child = profile,
            AgeGroup::Adult => self.adult = profile,
        }
        self
    }

    /// Use the same profile for both age groups.
    pub fn both(mut self, profile: AgeProfile) -> Self {
        self.child = profile;
        self.adult = profile;
        self
    }

    pub fn curve(mut self, curve: GrowthCurve) -> Self {
        self.curve = curve;
        self
    }

    pub fn inoculum(mut self, inoculum: u64) -> Self {
        self.inoculum = inoculum;
        self
    }

    pub fn response_rate(mut self, rate: f64) -> Self {
        self.response_rate = rate;
        self
    }

    pub fn symptom_threshold(mut self, threshold: f64) -> Self {
        self.symptom_threshold = threshold;
        self
    }

    /// Validate and freeze the parameter set.
    ///
    /// Rejects parameters under which an infection could never clear
    /// (non-positive resistance or response rate) or never start
    /// (zero inoculum).
    pub fn build(self) -> PathogenResult<Pathogen> {
        let invalid = |reason: &str| PathogenError::Invalid {
            name:   self.name.clone(),
            reason: reason.to_owned(),
        };

        if self.name.trim().is_empty() {
            return Err(invalid("name must not be empty"));
        }
        for profile in [&self.child, &self.adult] {
            if !(0.0..=1.0).contains(&profile.infectivity) {
                return Err(invalid("infectivity must lie in [0, 1]"));
            }
            if !(profile.toxigenicity.is_finite() && profile.toxigenicity >= 0.0) {
                return Err(invalid("toxigenicity must be finite and non-negative"));
            }
            if !(profile.resistance.is_finite() && profile.resistance > 0.0) {
                return Err(invalid("resistance must be finite and positive"));
            }
        }
        if !self.curve.is_valid() {
            return Err(invalid("growth factor must be finite and non-negative"));
        }
        if self.inoculum == 0 {
            return Err(invalid("inoculum must be positive"));
        }
        if !(self.response_rate.is_finite() && self.response_rate > 0.0) {
            return Err(invalid("response rate must be finite and positive"));
        }
        if !(self.symptom_threshold.is_finite() && self.symptom_threshold > 0.0) {
            return Err(invalid("symptom threshold must be finite and positive"));
        }

        Ok(Pathogen {
            name:              Arc::from(self.name),
            child:             self.child,
            adult:             self.adult,
            curve:             self.curve,
            inoculum:          self.inoculum,
            response_rate:     self.response_rate,
            symptom_threshold: self.symptom_threshold,
        })
    }
}
