//! CSV output backend.
//!
//! Creates four files in the configured output directory:
//! - `sir.csv`
//! - `geo.csv`
//! - `people.csv`
//! - `cases.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{CaseRow, GeoRow, HistoryRow, OutputError, OutputResult, SirRow};

/// Writes outbreak output to four CSV files.
pub struct CsvWriter {
    sir:      Writer<File>,
    geo:      Writer<File>,
    people:   Writer<File>,
    cases:    Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the four CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        if !dir.is_dir() {
            return Err(OutputError::MissingDir(dir.to_path_buf()));
        }
        let mut sir = Writer::from_path(dir.join("sir.csv"))?;
        sir.write_record(["tick", "susceptible", "infected", "resistant"])?;

        let mut geo = Writer::from_path(dir.join("geo.csv"))?;
        geo.write_record([
            "tick", "location_id", "name", "kind", "latitude", "longitude",
            "contaminated", "occupants", "infected",
        ])?;

        let mut people = Writer::from_path(dir.join("people.csv"))?;
        people.write_record(["person_id", "tick", "state", "location_id", "symptomatic"])?;

        let mut cases = Writer::from_path(dir.join("cases.csv"))?;
        cases.write_record([
            "person_id", "age", "infected_at", "symptoms_at", "recovered_at",
            "home", "work", "restaurants",
        ])?;

        Ok(Self { sir, geo, people, cases, finished: false })
    }
}

fn opt<T: ToString>(value: Option<T>) -> String {
    value.map(|v| v.to_string()).unwrap_or_default()
}

impl OutputWriter for CsvWriter {
    fn write_sir(&mut self, row: &SirRow) -> OutputResult<()> {
        self.sir.write_record(&[
            row.tick.to_string(),
            row.susceptible.to_string(),
            row.infected.to_string(),
            row.resistant.to_string(),
        ])?;
        Ok(())
    }

    fn write_geo(&mut self, rows: &[GeoRow]) -> OutputResult<()> {
        for row in rows {
            self.geo.write_record(&[
                row.tick.to_string(),
                row.location_id.to_string(),
                row.name.clone(),
                row.kind.to_owned(),
                row.latitude.to_string(),
                row.longitude.to_string(),
                (row.contaminated as u8).to_string(),
                row.occupants.to_string(),
                row.infected.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()> {
        for row in rows {
            self.people.write_record(&[
                row.person_id.to_string(),
                row.tick.to_string(),
                row.state.to_owned(),
                row.location_id.to_string(),
                (row.symptomatic as u8).to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_cases(&mut self, rows: &[CaseRow]) -> OutputResult<()> {
        for row in rows {
            self.cases.write_record(&[
                row.person_id.to_string(),
                row.age.to_owned(),
                opt(row.infected_at),
                opt(row.symptoms_at),
                opt(row.recovered_at),
                row.home.clone(),
                row.work.clone().unwrap_or_default(),
                row.restaurants.clone(),
            ])?;
        }
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.sir.flush()?;
        self.geo.flush()?;
        self.people.flush()?;
        self.cases.flush()?;
        Ok(())
    }
}
