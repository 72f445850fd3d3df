//! Unit tests for ob-pathogen.

#[cfg(test)]
mod growth_tests {
    use crate::GrowthCurve;

    #[test]
    fn constant_ignores_load() {
        let c = GrowthCurve::Constant { per_hour: 3 };
        assert_eq!(c.expansion(0), 3);
        assert_eq!(c.expansion(1_000), 3);
    }

    #[test]
    fn scaled_sqrt_floors() {
        let c = GrowthCurve::ScaledSqrt { factor: 0.5 };
        assert_eq!(c.expansion(0), 0);
        assert_eq!(c.expansion(3), 0);   // 0.5 · 1.73 = 0.87
        assert_eq!(c.expansion(4), 1);
        assert_eq!(c.expansion(100), 5);
        assert_eq!(c.expansion(99), 4);  // 0.5 · 9.95 = 4.97
    }

    #[test]
    fn proportional() {
        let c = GrowthCurve::Proportional { factor: 0.25 };
        assert_eq!(c.expansion(10), 2);
        assert_eq!(c.expansion(400), 100);
    }

    #[test]
    fn curves_are_monotone_on_a_sample() {
        for c in [
            GrowthCurve::ScaledSqrt { factor: 0.5 },
            GrowthCurve::Proportional { factor: 0.1 },
        ] {
            let mut last = 0;
            for load in 0..2_000 {
                let e = c.expansion(load);
                assert!(e >= last, "{c:?} not monotone at {load}");
                last = e;
            }
        }
    }
}

#[cfg(test)]
mod pathogen_tests {
    use ob_core::AgeGroup;

    use crate::{AgeProfile, GrowthCurve, Pathogen, PathogenError};

    #[test]
    fn growth_adds_expansion() {
        let p = Pathogen::lake_spore();
        assert_eq!(p.growth(100), 105);
        assert_eq!(p.growth(0), 0);
    }

    #[test]
    fn growth_saturates() {
        let p = Pathogen::builder("huge")
            .curve(GrowthCurve::Constant { per_hour: u64::MAX })
            .build()
            .unwrap();
        assert_eq!(p.growth(10), u64::MAX);
    }

    #[test]
    fn per_age_lookup() {
        let p = Pathogen::builder("split")
            .profile(AgeGroup::Child, AgeProfile::new(0.9, 3.0, 0.5))
            .profile(AgeGroup::Adult, AgeProfile::new(0.2, 1.0, 2.0))
            .build()
            .unwrap();
        assert_eq!(p.infectivity(AgeGroup::Child), 0.9);
        assert_eq!(p.infectivity(AgeGroup::Adult), 0.2);
        assert_eq!(p.toxigenicity(AgeGroup::Child), 3.0);
        assert_eq!(p.resistance(AgeGroup::Adult), 2.0);
    }

    #[test]
    fn builder_rejects_zero_resistance() {
        let err = Pathogen::builder("stubborn")
            .both(AgeProfile::new(0.5, 1.0, 0.0))
            .build()
            .unwrap_err();
        assert!(matches!(err, PathogenError::Invalid { .. }));
    }

    #[test]
    fn builder_rejects_bad_infectivity() {
        assert!(Pathogen::builder("x").both(AgeProfile::new(1.5, 1.0, 1.0)).build().is_err());
        assert!(Pathogen::builder("x").both(AgeProfile::new(-0.1, 1.0, 1.0)).build().is_err());
    }

    #[test]
    fn builder_rejects_zero_inoculum_and_empty_name() {
        assert!(Pathogen::builder("x").inoculum(0).build().is_err());
        assert!(Pathogen::builder("  ").build().is_err());
        assert!(Pathogen::builder("x").response_rate(0.0).build().is_err());
    }

    #[test]
    fn max_infection_hours_bounds_slowest_group() {
        let p = Pathogen::builder("bounded")
            .profile(AgeGroup::Child, AgeProfile::new(0.1, 1.0, 0.5))
            .profile(AgeGroup::Adult, AgeProfile::new(0.1, 1.0, 2.0))
            .response_rate(0.01)
            .build()
            .unwrap();
        // slowest: 0.5 · 0.01 = 0.005 → 200 hours, plus one.
        assert_eq!(p.max_infection_hours(), 201);
    }

    #[test]
    fn clones_compare_equal() {
        let p = Pathogen::kineosphaera();
        assert_eq!(p.clone(), p);
    }
}

#[cfg(test)]
mod preset_tests {
    use crate::{Pathogen, PathogenError};
    use crate::presets::{KINEOSPHAERA, LAKE_SPORE};

    #[test]
    fn lake_spore_parameters() {
        let p = Pathogen::lake_spore();
        assert_eq!(p.name(), LAKE_SPORE);
        assert_eq!(p.infectivity(ob_core::AgeGroup::Adult), 0.1);
        assert_eq!(p.toxigenicity(ob_core::AgeGroup::Child), 2.0);
        assert_eq!(p.resistance(ob_core::AgeGroup::Adult), 2.0);
    }

    #[test]
    fn presets_satisfy_builder_rules() {
        for p in [Pathogen::lake_spore(), Pathogen::kineosphaera()] {
            let rebuilt = Pathogen::builder(p.name())
                .profile(ob_core::AgeGroup::Child, *p.profile(ob_core::AgeGroup::Child))
                .profile(ob_core::AgeGroup::Adult, *p.profile(ob_core::AgeGroup::Adult))
                .curve(*p.curve())
                .inoculum(p.inoculum())
                .response_rate(p.response_rate())
                .symptom_threshold(p.symptom_threshold())
                .build()
                .unwrap();
            assert_eq!(rebuilt, p);
        }
    }

    #[test]
    fn preset_lookup_is_forgiving() {
        assert_eq!(Pathogen::preset("lake_spore").unwrap().name(), LAKE_SPORE);
        assert_eq!(Pathogen::preset("Lake Spore").unwrap().name(), LAKE_SPORE);
        assert_eq!(Pathogen::preset("KINEOSPHAERA").unwrap().name(), KINEOSPHAERA);
        assert!(matches!(
            Pathogen::preset("anthrax"),
            Err(PathogenError::UnknownPreset(_))
        ));
    }
}
