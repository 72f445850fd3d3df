//! Population setup from a location roster.

use log::info;

use ob_agent::{GROCERY, WORK};
use ob_behavior::{AdultRoutine, ChildRoutine};
use ob_core::{AgeGroup, SimRng};
use ob_location::{LocationDescriptor, LocationKind};

use crate::{CityBuilder, PopulationConfig, SimResult};

/// Create every roster location, then one family per residential unit.
///
/// Locations keep roster order.  Families are created home by home in roster
/// order; within a family the first `adults_per_family` members are working
/// adults (their workplace, then grocery, drawn from `rng` as they are
/// created) and the rest are children who stay at home.
///
/// The returned builder can still take control measures and mixing changes.
pub fn populate_city(
    name: &str,
    roster: &[LocationDescriptor],
    population: &PopulationConfig,
    rng: SimRng,
) -> SimResult<CityBuilder> {
    population.validate()?;

    let mut builder = CityBuilder::new(name, rng);
    for descriptor in roster {
        builder.add_location(descriptor.kind(), descriptor.point(), descriptor.name.clone());
    }

    let homes = builder.index().homes().to_vec();
    for home in homes {
        for member in 0..population.family_size {
            if member >= population.adults_per_family {
                builder.add_person(AgeGroup::Child, home, Box::new(ChildRoutine))?;
                continue;
            }

            let mut plan = AdultRoutine::builder(home)
                .hours(population.work_hours)
                .lunch(population.lunch)
                .errand_hour(population.errand_hour);
            if population.with_grocery {
                plan = plan.with_grocery();
            }
            let (index, rng) = builder.policy_inputs();
            let routine = plan.build(index, rng)?;

            let (workplace, grocery) = (routine.workplace(), routine.grocery());
            let id = builder.add_person(AgeGroup::Adult, home, Box::new(routine))?;
            builder.name_place(id, WORK, workplace)?;
            if let Some(grocery) = grocery {
                builder.name_place(id, GROCERY, grocery)?;
            }
        }
    }

    let index = builder.index();
    info!(
        "{name}: {} homes, {} restaurants, {} groceries, {} companies, {} beaches; {} people",
        index.count(LocationKind::Home),
        index.count(LocationKind::Restaurant),
        index.count(LocationKind::Grocery),
        index.count(LocationKind::Company),
        index.count(LocationKind::Beach),
        builder.people().len()
    );
    Ok(builder)
}
