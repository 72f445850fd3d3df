//! Bacterial growth laws.
//!
//! A curve gives the number of new bacteria produced in one hour by a host
//! currently carrying `load`.  [`Pathogen::growth`][crate::Pathogen::growth]
//! adds that expansion to the load.  Curves should be monotonically
//! non-decreasing in `load`; the engine does not check.

/// Hourly expansion law of a pathogen.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum GrowthCurve {
    /// The same number of new bacteria every hour.
    Constant { per_hour: u64 },
    /// `floor(factor · sqrt(load))`.
    ScaledSqrt { factor: f64 },
    /// `floor(factor · load)`.
    Proportional { factor: f64 },
}

impl GrowthCurve {
    /// New bacteria produced this hour.
    pub fn expansion(&self, load: u64) -> u64 {
        match *self {
            GrowthCurve::Constant { per_hour } => per_hour,
            GrowthCurve::ScaledSqrt { factor } => floor_non_negative(factor * (load as f64).sqrt()),
            GrowthCurve::Proportional { factor } => floor_non_negative(factor * load as f64),
        }
    }

    /// `true` if every factor is finite and non-negative.
    pub(crate) fn is_valid(&self) -> bool {
        match *self {
            GrowthCurve::Constant { .. } => true,
            GrowthCurve::ScaledSqrt { factor } | GrowthCurve::Proportional { factor } => {
                factor.is_finite() && factor >= 0.0
            }
        }
    }
}

#[inline]
fn floor_non_negative(x: f64) -> u64 {
    // `as` saturates, so huge values clamp to u64::MAX.
    x.max(0.0).floor() as u64
}
