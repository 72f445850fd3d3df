//! Unit tests for ob-core primitives.

#[cfg(test)]
mod ids {
    use crate::{LocationId, PersonId};

    #[test]
    fn index_roundtrip() {
        let id = PersonId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(PersonId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PersonId(0) < PersonId(1));
        assert!(LocationId(100) > LocationId(99));
    }

    #[test]
    fn invalid_sentinels_are_max() {
        assert_eq!(PersonId::INVALID.0, u32::MAX);
        assert_eq!(LocationId::default(), LocationId::INVALID);
    }

    #[test]
    fn display() {
        assert_eq!(PersonId(7).to_string(), "PersonId(7)");
        assert_eq!(LocationId(3).to_string(), "LocationId(3)");
    }
}

#[cfg(test)]
mod geo {
    use crate::GeoPoint;

    #[test]
    fn zero_distance() {
        let p = GeoPoint::new(44.27, -71.30);
        assert!(p.distance_m(p) < 0.01);
    }

    #[test]
    fn one_degree_of_latitude() {
        // ~1 degree of latitude ≈ 111 km
        let a = GeoPoint::new(30.0, -88.0);
        let b = GeoPoint::new(31.0, -88.0);
        let d = a.distance_m(b);
        assert!((d - 111_195.0).abs() < 100.0, "got {d}");
    }
}

#[cfg(test)]
mod time {
    use crate::{DayWindow, SimClock, Tick};

    #[test]
    fn tick_arithmetic() {
        let t = Tick(10);
        assert_eq!(t + 5, Tick(15));
        assert_eq!(Tick(15) - Tick(10), 5u64);
        assert_eq!(Tick(15).since(Tick(10)), 5);
    }

    #[test]
    fn hour_and_day() {
        assert_eq!(Tick(0).hour(), 0);
        assert_eq!(Tick(23).hour(), 23);
        assert_eq!(Tick(24).hour(), 0);
        assert_eq!(Tick(24).day(), 1);
        assert_eq!(Tick(59).hour(), 11);
        assert_eq!(Tick(59).day(), 2);
    }

    #[test]
    fn clock_advances_by_one() {
        let mut clock = SimClock::new();
        assert_eq!(clock.now(), Tick(0));
        for _ in 0..25 {
            clock.advance();
        }
        assert_eq!(clock.now(), Tick(25));
        assert_eq!(clock.day(), 1);
        assert_eq!(clock.hour(), 1);
        assert_eq!(clock.to_string(), "T25 (day 1 01:00)");
    }

    #[test]
    fn ticks_for_days() {
        assert_eq!(SimClock::ticks_for_days(10), 240);
    }

    #[test]
    fn day_window_is_half_open() {
        let w = DayWindow::new(2, 5);
        assert!(!w.contains(1));
        assert!(w.contains(2));
        assert!(w.contains(4));
        assert!(!w.contains(5));
        assert!(DayWindow::always().contains(1_000_000));
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn deterministic_same_seed() {
        let mut r1 = SimRng::new(12345);
        let mut r2 = SimRng::new(12345);
        for _ in 0..100 {
            assert_eq!(r1.next_int(1000), r2.next_int(1000));
            assert_eq!(r1.next_double().to_bits(), r2.next_double().to_bits());
            assert_eq!(r1.next_gaussian().to_bits(), r2.next_gaussian().to_bits());
        }
    }

    #[test]
    fn different_seeds_differ() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let xs: Vec<usize> = (0..16).map(|_| a.next_int(1 << 20)).collect();
        let ys: Vec<usize> = (0..16).map(|_| b.next_int(1 << 20)).collect();
        assert_ne!(xs, ys);
    }

    #[test]
    fn next_int_in_bounds() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            assert!(rng.next_int(7) < 7);
        }
    }

    #[test]
    fn next_double_in_unit_interval() {
        let mut rng = SimRng::new(0);
        for _ in 0..1000 {
            let v = rng.next_double();
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    #[should_panic]
    fn next_int_zero_bound_panics() {
        SimRng::new(0).next_int(0);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        assert!(rng.gen_bool(7.5)); // clamped
    }

    #[test]
    fn choose_empty_does_not_draw() {
        let mut a = SimRng::new(9);
        let mut b = SimRng::new(9);
        let empty: [u8; 0] = [];
        assert!(a.choose(&empty).is_none());
        assert_eq!(a.next_int(100), b.next_int(100));
    }

    #[test]
    fn seed_is_remembered() {
        assert_eq!(SimRng::new(12).seed(), 12);
    }
}

#[cfg(test)]
mod age {
    use crate::AgeGroup;

    #[test]
    fn display() {
        assert_eq!(AgeGroup::Child.to_string(), "CHILD");
        assert_eq!(AgeGroup::Adult.to_string(), "ADULT");
    }
}
