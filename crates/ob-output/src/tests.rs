//! Integration tests for ob-output.

use ob_core::SimRng;
use ob_location::LocationDescriptor;
use ob_sim::{City, PopulationConfig, populate_city};

fn roster() -> Vec<LocationDescriptor> {
    [
        (44.970, -93.265, "12 Shore Road"),
        (44.971, -93.263, "Lakeside Diner (R)"),
        (44.972, -93.266, "Mill Works (C)"),
        (44.969, -93.262, "14 Shore Road"),
    ]
    .into_iter()
    .map(|(latitude, longitude, name)| LocationDescriptor { latitude, longitude, name: name.to_owned() })
    .collect()
}

fn town() -> City {
    populate_city("Test Town", &roster(), &PopulationConfig::default(), SimRng::new(3))
        .unwrap()
        .build()
        .unwrap()
}

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use super::*;
    use crate::csv::CsvWriter;
    use crate::row::{CaseRow, HistoryRow, SirRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn headers(dir: &TempDir, file: &str) -> Vec<String> {
        let mut rdr = csv::Reader::from_path(dir.path().join(file)).unwrap();
        rdr.headers().unwrap().iter().map(str::to_owned).collect()
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        for file in ["sir.csv", "geo.csv", "people.csv", "cases.csv"] {
            assert!(dir.path().join(file).exists(), "{file} missing");
        }
    }

    #[test]
    fn csv_missing_dir_is_an_error() {
        let dir = tmp();
        let missing = dir.path().join("nope");
        assert!(matches!(CsvWriter::new(&missing), Err(crate::OutputError::MissingDir(_))));
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        assert_eq!(headers(&dir, "sir.csv"), ["tick", "susceptible", "infected", "resistant"]);
        assert_eq!(headers(&dir, "people.csv"), ["person_id", "tick", "state", "location_id", "symptomatic"]);
        assert_eq!(headers(&dir, "geo.csv").len(), 9);
        assert_eq!(headers(&dir, "cases.csv").len(), 8);
    }

    #[test]
    fn csv_sir_row_written() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_sir(&SirRow { tick: 3, susceptible: 10, infected: 2, resistant: 1 }).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("sir.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 1);
        assert_eq!(&rows[0][0], "3");
        assert_eq!(&rows[0][2], "2");
    }

    #[test]
    fn csv_flags_and_missing_hours() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_history(&[HistoryRow {
            person_id: 4, tick: 7, state: "INFECTED", location_id: 1, symptomatic: true,
        }])
        .unwrap();
        w.write_cases(&[CaseRow {
            person_id:    4,
            age:          "ADULT",
            infected_at:  Some(7),
            symptoms_at:  None,
            recovered_at: None,
            home:         "12 Shore Road".to_owned(),
            work:         None,
            restaurants:  "A (R);B (R)".to_owned(),
        }])
        .unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("people.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "INFECTED");
        assert_eq!(&rows[0][4], "1");

        let mut rdr = csv::Reader::from_path(dir.path().join("cases.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(&rows[0][2], "7");
        assert_eq!(&rows[0][3], "");
        assert_eq!(&rows[0][6], "");
        assert_eq!(&rows[0][7], "A (R);B (R)");
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap();
    }

    #[test]
    fn integration_csv() {
        use ob_core::PersonId;
        use ob_pathogen::Pathogen;
        use ob_sim::StopRule;

        use crate::observer::CityOutputObserver;

        let mut city = town();
        city.infect_person(PersonId(0), &Pathogen::lake_spore()).unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = CityOutputObserver::new(writer).with_geo_interval(2);
        city.run(StopRule::TurnBudget(6), &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // Start + 6 turns.
        let mut rdr = csv::Reader::from_path(dir.path().join("sir.csv")).unwrap();
        assert_eq!(rdr.records().count(), 7);

        // Ticks 0, 2, 4, 6 × 4 locations.
        let mut rdr = csv::Reader::from_path(dir.path().join("geo.csv")).unwrap();
        assert_eq!(rdr.records().count(), 16);

        // 8 people × 7 records.
        let mut rdr = csv::Reader::from_path(dir.path().join("people.csv")).unwrap();
        assert_eq!(rdr.records().count(), 56);

        let mut rdr = csv::Reader::from_path(dir.path().join("cases.csv")).unwrap();
        let cases: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(cases.len(), 1);
        assert_eq!(&cases[0][0], "0");
        assert_eq!(&cases[0][2], "1");
    }
}

// ── Case retracing ────────────────────────────────────────────────────────────

#[cfg(test)]
mod case_tests {
    use ob_agent::HealthState;
    use ob_core::{PersonId, Tick};
    use ob_pathogen::Pathogen;

    use super::*;
    use crate::case::retrace;

    #[test]
    fn never_infected_has_no_case() {
        let mut city = town();
        for _ in 0..30 {
            city.do_turn();
        }
        assert!(city.people().iter().all(|p| retrace(p, &city).is_none()));
    }

    #[test]
    fn restaurants_before_infection_are_listed() {
        let mut city = town();
        for _ in 0..12 {
            city.do_turn();
        }
        city.infect_person(PersonId(0), &Pathogen::lake_spore()).unwrap();
        city.do_turn();

        let person = city.person(PersonId(0)).unwrap();
        let case = retrace(person, &city).unwrap();
        assert_eq!(case.infected_at, Some(Tick(13)));
        assert_eq!(case.restaurants, ["Lakeside Diner (R)"]);
        assert_eq!(case.home, "12 Shore Road");
        assert!(case.work.is_some());
        assert_eq!(case.recovered_at, None);
        assert_eq!(case.duration_hours(), None);
    }

    #[test]
    fn full_case_has_ordered_milestones() {
        let mut city = town();
        city.infect_person(PersonId(2), &Pathogen::lake_spore()).unwrap();
        while city.person(PersonId(2)).unwrap().state() != HealthState::Resistant {
            city.do_turn();
        }
        city.do_turn();

        let case = retrace(city.person(PersonId(2)).unwrap(), &city).unwrap();
        let infected = case.infected_at.unwrap();
        let symptoms = case.symptoms_at.unwrap();
        let recovered = case.recovered_at.unwrap();
        assert!(infected < symptoms && symptoms < recovered);
        assert_eq!(case.duration_hours(), Some(recovered.since(infected)));
        // A child never leaves home, so no restaurants and no workplace.
        assert!(case.restaurants.is_empty());
        assert_eq!(case.work, None);
        assert_eq!(case.to_row().age, "CHILD");
    }
}

// ── SQLite tests ──────────────────────────────────────────────────────────────

#[cfg(all(test, feature = "sqlite"))]
mod sqlite_tests {
    use tempfile::TempDir;

    use crate::row::{HistoryRow, SirRow};
    use crate::sqlite::SqliteWriter;
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    #[test]
    fn sqlite_db_created() {
        let dir = tmp();
        let _w = SqliteWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("outbreak.db").exists());
    }

    #[test]
    fn sqlite_history_count() {
        let dir = tmp();
        let mut w = SqliteWriter::new(dir.path()).unwrap();
        let rows: Vec<_> = (0..3)
            .map(|t| HistoryRow { person_id: 0, tick: t, state: "SUSCEPTIBLE", location_id: 1, symptomatic: false })
            .collect();
        w.write_history(&rows).unwrap();
        w.write_sir(&SirRow { tick: 0, susceptible: 1, infected: 0, resistant: 0 }).unwrap();
        w.finish().unwrap();

        let conn = rusqlite::Connection::open(dir.path().join("outbreak.db")).unwrap();
        let count: i64 = conn.query_row("SELECT COUNT(*) FROM people", [], |r| r.get(0)).unwrap();
        assert_eq!(count, 3);
        let state: String = conn
            .query_row("SELECT state FROM people WHERE tick = 2", [], |r| r.get(0))
            .unwrap();
        assert_eq!(state, "SUSCEPTIBLE");
    }
}
