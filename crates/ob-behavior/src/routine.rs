//! Daily movement policies.

use ob_agent::Person;
use ob_core::{LocationId, SimRng};
use ob_location::LocationIndex;

use crate::{BehaviorError, BehaviorResult, TurnContext};

/// Decides where a person wants to be next turn.
///
/// Called once per person per turn, in population order, before any
/// control measure.  Every draw an implementation makes comes from the
/// city's single `SimRng`, so the number and order of draws must depend only
/// on the inputs.
pub trait Routine: Send + Sync + 'static {
    fn next_location(&self, person: &Person, ctx: &TurnContext<'_>, rng: &mut SimRng) -> LocationId;
}

// ── ChildRoutine ──────────────────────────────────────────────────────────────

/// Children stay where they are.
#[derive(Copy, Clone, Debug, Default)]
pub struct ChildRoutine;

impl Routine for ChildRoutine {
    fn next_location(&self, person: &Person, _ctx: &TurnContext<'_>, _rng: &mut SimRng) -> LocationId {
        person.location()
    }
}

// ── AdultRoutine ──────────────────────────────────────────────────────────────

/// Working day, in hours of the day.
///
/// Before `start` and after `end` the adult is off work; at `lunch` they eat
/// at a restaurant; in between they are at their workplace.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorkHours {
    pub start: u32,
    pub end:   u32,
    pub lunch: u32,
}

impl Default for WorkHours {
    fn default() -> Self {
        Self { start: 9, end: 16, lunch: 11 }
    }
}

impl WorkHours {
    fn validate(&self) -> BehaviorResult<()> {
        if self.start > self.lunch || self.lunch > self.end || self.end >= 24 {
            return Err(BehaviorError::InvalidHours(format!(
                "need start <= lunch <= end < 24, got {}/{}/{}",
                self.start, self.lunch, self.end
            )));
        }
        Ok(())
    }

    #[inline]
    fn off_work(&self, hour: u32) -> bool {
        hour < self.start || hour > self.end
    }
}

/// How an adult picks a restaurant at lunch time.
#[derive(Copy, Clone, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", rename_all = "snake_case"))]
pub enum LunchChoice {
    /// Any restaurant, uniformly.  One `next_int` draw.
    #[default]
    Uniform,
    /// A restaurant roughly `|N(0,1)| · spread_m` metres from the workplace.
    /// One `next_gaussian` draw.
    Nearby { spread_m: f64 },
}

/// The working adult's day.
#[derive(Clone, Debug)]
pub struct AdultRoutine {
    home:        LocationId,
    workplace:   LocationId,
    grocery:     Option<LocationId>,
    hours:       WorkHours,
    lunch:       LunchChoice,
    errand_hour: u32,
}

impl AdultRoutine {
    pub fn builder(home: LocationId) -> AdultRoutineBuilder {
        AdultRoutineBuilder::new(home)
    }

    pub fn home(&self) -> LocationId {
        self.home
    }

    pub fn workplace(&self) -> LocationId {
        self.workplace
    }

    pub fn grocery(&self) -> Option<LocationId> {
        self.grocery
    }

    pub fn hours(&self) -> WorkHours {
        self.hours
    }

    fn lunch_spot(&self, ctx: &TurnContext<'_>, rng: &mut SimRng) -> Option<LocationId> {
        let restaurants = ctx.index.restaurants();
        if restaurants.is_empty() {
            return None;
        }
        match self.lunch {
            LunchChoice::Uniform => rng.choose(restaurants).copied(),
            LunchChoice::Nearby { spread_m } => {
                let target = rng.next_gaussian().abs() * spread_m;
                let origin = ctx.locations[self.workplace.index()].point();
                let mut best: Option<(LocationId, f64)> = None;
                for &id in restaurants {
                    let gap = (origin.distance_m(ctx.locations[id.index()].point()) - target).abs();
                    if best.is_none_or(|(_, b)| gap < b) {
                        best = Some((id, gap));
                    }
                }
                best.map(|(id, _)| id)
            }
        }
    }
}

impl Routine for AdultRoutine {
    fn next_location(&self, person: &Person, ctx: &TurnContext<'_>, rng: &mut SimRng) -> LocationId {
        let hour = ctx.hour;
        let planned = if self.hours.off_work(hour) {
            match self.grocery {
                Some(grocery) if hour == self.errand_hour => grocery,
                _ => self.home,
            }
        } else if hour == self.hours.lunch {
            self.lunch_spot(ctx, rng).unwrap_or(self.workplace)
        } else {
            self.workplace
        };

        // The lunch draw above happens whether or not the person is sick.
        if person.feels_sick() { self.home } else { planned }
    }
}

// ── Builder ───────────────────────────────────────────────────────────────────

/// Fluent builder for [`AdultRoutine`].
///
/// # Example
///
/// ```rust,ignore
/// let routine = AdultRoutine::builder(home)
///     .lunch(LunchChoice::Nearby { spread_m: 500.0 })
///     .with_grocery()
///     .build(&index, &mut rng)?;
/// ```
#[derive(Clone, Debug)]
pub struct AdultRoutineBuilder {
    home:         LocationId,
    hours:        WorkHours,
    lunch:        LunchChoice,
    with_grocery: bool,
    errand_hour:  u32,
}

impl AdultRoutineBuilder {
    pub fn new(home: LocationId) -> Self {
        Self {
            home,
            hours: WorkHours::default(),
            lunch: LunchChoice::default(),
            with_grocery: false,
            errand_hour: 17,
        }
    }

    pub fn hours(mut self, hours: WorkHours) -> Self {
        self.hours = hours;
        self
    }

    pub fn lunch(mut self, lunch: LunchChoice) -> Self {
        self.lunch = lunch;
        self
    }

    /// Bind a grocery store, visited at the errand hour.
    pub fn with_grocery(mut self) -> Self {
        self.with_grocery = true;
        self
    }

    /// Off-work hour of the grocery errand.  Ignored if it falls inside
    /// working hours.
    pub fn errand_hour(mut self, hour: u32) -> Self {
        self.errand_hour = hour;
        self
    }

    /// Draw the workplace, then the grocery if requested.
    pub fn build(self, index: &LocationIndex, rng: &mut SimRng) -> BehaviorResult<AdultRoutine> {
        self.hours.validate()?;
        let workplace = *rng.choose(index.workplaces()).ok_or(BehaviorError::NoWorkplaces)?;
        let grocery = if self.with_grocery {
            Some(*rng.choose(index.groceries()).ok_or(BehaviorError::NoGroceries)?)
        } else {
            None
        };
        Ok(AdultRoutine {
            home: self.home,
            workplace,
            grocery,
            hours: self.hours,
            lunch: self.lunch,
            errand_hour: self.errand_hour,
        })
    }
}
