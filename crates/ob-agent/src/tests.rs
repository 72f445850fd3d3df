//! Unit tests for ob-agent.

use ob_core::{AgeGroup, LocationId, PersonId, SimRng, Tick};
use ob_pathogen::{AgeProfile, GrowthCurve, Pathogen};

use crate::{HealthState, Person, Progression};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn adult() -> Person {
    Person::new(PersonId(0), AgeGroup::Adult, LocationId(0), Tick(0))
}

/// No growth, no toxin, response rises by exactly 1/8 per hour.
fn inert_pathogen() -> Pathogen {
    Pathogen::builder("inert")
        .both(AgeProfile::new(1.0, 0.0, 1.0))
        .curve(GrowthCurve::Constant { per_hour: 0 })
        .inoculum(8)
        .response_rate(0.125)
        .build()
        .unwrap()
}

/// Like `inert_pathogen` but toxic enough to cause symptoms above load 5.
fn toxic_pathogen() -> Pathogen {
    Pathogen::builder("toxic")
        .both(AgeProfile::new(1.0, 1.0, 1.0))
        .curve(GrowthCurve::Constant { per_hour: 0 })
        .inoculum(8)
        .response_rate(0.125)
        .symptom_threshold(5.0)
        .build()
        .unwrap()
}

fn never_infects() -> Pathogen {
    Pathogen::builder("harmless")
        .both(AgeProfile::new(0.0, 0.0, 1.0))
        .build()
        .unwrap()
}

// ── Placement and history ─────────────────────────────────────────────────────

#[cfg(test)]
mod history_tests {
    use super::*;

    #[test]
    fn new_person_records_placement() {
        let p = adult();
        assert_eq!(p.history().len(), 1);
        let rec = p.history()[0];
        assert_eq!(rec.time, Tick(0));
        assert_eq!(rec.state, HealthState::Susceptible);
        assert_eq!(rec.location, LocationId(0));
        assert!(!rec.symptomatic);
    }

    #[test]
    fn relocate_appends_one_record_per_call() {
        let mut p = adult();
        for t in 1..=5u64 {
            p.relocate(LocationId(t as u32 % 2), Tick(t));
        }
        assert_eq!(p.history().len(), 6);
        assert_eq!(p.location(), LocationId(1));
        assert!(p.history().windows(2).all(|w| w[0].time < w[1].time));
    }

    #[test]
    fn record_captures_state_at_relocation() {
        let mut p = adult();
        p.infect(&inert_pathogen());
        p.relocate(LocationId(3), Tick(1));
        assert_eq!(p.history()[1].state, HealthState::Infected);
        assert_eq!(p.history()[1].location, LocationId(3));
    }
}

// ── Named places ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod place_tests {
    use super::*;
    use crate::{HOME, WORK};

    #[test]
    fn home_falls_back_to_current_location() {
        let p = Person::new(PersonId(1), AgeGroup::Child, LocationId(9), Tick(0));
        assert_eq!(p.home(), LocationId(9));
    }

    #[test]
    fn named_lookup() {
        let mut p = adult();
        p.set_named_location(HOME, LocationId(4));
        p.set_named_location(WORK, LocationId(7));
        assert_eq!(p.home(), LocationId(4));
        assert_eq!(p.named_location(WORK), Some(LocationId(7)));
        assert_eq!(p.named_location("Beach"), None);
        assert_eq!(p.named_locations().count(), 2);
    }
}

// ── Transitions ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod transition_tests {
    use super::*;

    #[test]
    fn infect_only_from_susceptible() {
        let mut p = adult();
        assert!(p.infect(&inert_pathogen()));
        assert_eq!(p.state(), HealthState::Infected);
        assert_eq!(p.bacteria(), 8);
        assert!(!p.infect(&toxic_pathogen()), "already infected");
        assert_eq!(p.pathogen().unwrap().name(), "inert");
    }

    #[test]
    fn pathogen_present_iff_infected() {
        let mut p = adult();
        assert!(p.pathogen().is_none());
        p.infect(&inert_pathogen());
        assert!(p.pathogen().is_some());
        while p.progress() != Some(Progression::Recovered) {}
        assert_eq!(p.state(), HealthState::Resistant);
        assert!(p.pathogen().is_none());
        assert_eq!(p.bacteria(), 0);
        assert!(!p.is_latent());
        assert!(!p.feels_sick());
    }

    #[test]
    fn resistant_cannot_be_reinfected() {
        let mut p = adult();
        p.infect(&inert_pathogen());
        while p.progress() != Some(Progression::Recovered) {}
        assert!(!p.infect(&inert_pathogen()));
        let mut rng = SimRng::new(1);
        assert!(!p.expose(&inert_pathogen(), &mut rng));
        assert_eq!(p.state(), HealthState::Resistant);
    }

    #[test]
    fn exposure_of_non_susceptible_draws_nothing() {
        let mut p = adult();
        p.infect(&inert_pathogen());

        let mut a = SimRng::new(77);
        let mut b = SimRng::new(77);
        for _ in 0..10 {
            assert!(!p.expose(&inert_pathogen(), &mut a));
        }
        assert_eq!(p.state(), HealthState::Infected);
        assert_eq!(a.next_int(1 << 20), b.next_int(1 << 20));
    }

    #[test]
    fn exposure_follows_infectivity_extremes() {
        let mut rng = SimRng::new(3);
        let mut p = adult();
        for _ in 0..50 {
            assert!(!p.expose(&never_infects(), &mut rng));
        }
        assert_eq!(p.state(), HealthState::Susceptible);
        assert!(p.expose(&inert_pathogen(), &mut rng));
        assert_eq!(p.state(), HealthState::Infected);
    }

    #[test]
    fn private_copy_evolves_independently() {
        let shared = Pathogen::lake_spore();
        let mut a = adult();
        let mut b = Person::new(PersonId(1), AgeGroup::Adult, LocationId(0), Tick(0));
        a.infect(&shared);
        for _ in 0..5 {
            a.progress();
        }
        b.infect(&shared);
        assert_ne!(a.bacteria(), b.bacteria());
        assert_eq!(b.bacteria(), shared.inoculum());
    }
}

// ── Progression ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod progression_tests {
    use super::*;

    #[test]
    fn progress_is_noop_when_not_infected() {
        let mut p = adult();
        assert_eq!(p.progress(), None);
        assert_eq!(p.state(), HealthState::Susceptible);
    }

    #[test]
    fn inert_timeline_is_exact() {
        // load 8 → 7 → 6 → 4 → 2 → 1 → 1 → 1 → 0 as the response climbs by 1/8.
        let mut p = adult();
        p.infect(&inert_pathogen());
        let mut loads = vec![];
        for _ in 0..7 {
            assert_eq!(p.progress(), None);
            loads.push(p.bacteria());
        }
        assert_eq!(loads, [7, 6, 4, 2, 1, 1, 1]);
        assert!(p.is_latent());
        assert_eq!(p.progress(), Some(Progression::Recovered));
        assert_eq!(p.state(), HealthState::Resistant);
    }

    #[test]
    fn symptoms_come_and_go() {
        let mut p = adult();
        p.infect(&toxic_pathogen());
        assert!(p.is_latent());
        assert_eq!(p.progress(), Some(Progression::BecameSymptomatic)); // load 7
        assert!(p.feels_sick());
        assert!(!p.is_latent());
        assert_eq!(p.progress(), None); // load 5, still at threshold
        assert!(p.feels_sick());
        assert_eq!(p.progress(), None); // load 2
        assert!(!p.feels_sick());
        assert!(p.is_latent());
    }

    #[test]
    fn symptomatic_flag_reaches_history() {
        let mut p = adult();
        p.infect(&toxic_pathogen());
        p.progress();
        p.relocate(LocationId(0), Tick(1));
        assert!(p.history()[1].symptomatic);
    }

    #[test]
    fn lake_spore_clears_within_bound() {
        let pathogen = Pathogen::lake_spore();
        let mut p = adult();
        p.infect(&pathogen);
        let bound = pathogen.max_infection_hours();
        let mut hours = 0;
        while p.is_infected() {
            p.progress();
            hours += 1;
            assert!(hours <= bound, "still infected after {hours} hours");
        }
        assert_eq!(p.state(), HealthState::Resistant);
    }

    #[test]
    fn lake_spore_becomes_symptomatic_before_recovering() {
        let mut p = adult();
        p.infect(&Pathogen::lake_spore());
        let mut events = vec![];
        while p.is_infected() {
            if let Some(e) = p.progress() {
                events.push(e);
            }
        }
        assert_eq!(events.first(), Some(&Progression::BecameSymptomatic));
        assert_eq!(events.last(), Some(&Progression::Recovered));
    }

    #[test]
    fn recorded_states_never_leave_resistant() {
        let mut p = adult();
        p.infect(&Pathogen::kineosphaera());
        for t in 1..2_000u64 {
            p.progress();
            p.relocate(LocationId(0), Tick(t));
        }
        let states: Vec<HealthState> = p.history().iter().map(|r| r.state).collect();
        let first_resistant = states
            .iter()
            .position(|&s| s == HealthState::Resistant)
            .expect("kineosphaera clears within 2000 hours");
        assert!(states[first_resistant..].iter().all(|&s| s == HealthState::Resistant));
    }
}
