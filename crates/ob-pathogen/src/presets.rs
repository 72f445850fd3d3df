//! Named pathogen variants.
//!
//! Presets are ordinary [`Pathogen`] values.  Scenario files refer to them by
//! name through [`Pathogen::preset`].

use std::sync::Arc;

use crate::{AgeProfile, GrowthCurve, Pathogen, PathogenError, PathogenResult};

pub const LAKE_SPORE: &str = "Lake Spore";
pub const KINEOSPHAERA: &str = "Kineosphaera";

impl Pathogen {
    /// A low-infectivity, highly toxic spore form with slow square-root
    /// growth: `floor(0.5 · sqrt(load))` new bacteria per hour.
    pub fn lake_spore() -> Pathogen {
        let profile = AgeProfile::new(0.1, 2.0, 2.0);
        Pathogen {
            name:              Arc::from(LAKE_SPORE),
            child:             profile,
            adult:             profile,
            curve:             GrowthCurve::ScaledSqrt { factor: 0.5 },
            inoculum:          10,
            response_rate:     0.001,
            symptom_threshold: 80.0,
        }
    }

    /// A fast-growing, more infectious bacterium that hits children harder.
    pub fn kineosphaera() -> Pathogen {
        Pathogen {
            name:              Arc::from(KINEOSPHAERA),
            child:             AgeProfile::new(0.4, 1.5, 1.0),
            adult:             AgeProfile::new(0.3, 1.0, 1.5),
            curve:             GrowthCurve::ScaledSqrt { factor: 2.0 },
            inoculum:          10,
            response_rate:     0.002,
            symptom_threshold: 100.0,
        }
    }

    /// Look up a preset by name (case-insensitive; `_` and `-` read as spaces).
    pub fn preset(name: &str) -> PathogenResult<Pathogen> {
        let key = name.trim().to_ascii_lowercase().replace(['_', '-'], " ");
        match key.as_str() {
            "lake spore" => Ok(Pathogen::lake_spore()),
            "kineosphaera" => Ok(Pathogen::kineosphaera()),
            _ => Err(PathogenError::UnknownPreset(name.to_owned())),
        }
    }
}
