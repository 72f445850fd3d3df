//! `CityOutputObserver<W>` — bridges `CityObserver` to an `OutputWriter`.

use log::warn;

use ob_location::Location;
use ob_sim::{City, CityObserver, RunReport, SirCounts, TurnSummary};

use crate::case::retrace;
use crate::row::{GeoRow, HistoryRow, SirRow};
use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult};

/// A [`CityObserver`] that writes outbreak output to any [`OutputWriter`]
/// backend (CSV, SQLite).
///
/// Errors from the writer are stored internally because `CityObserver`
/// methods have no return value.  After the run returns, check for errors
/// with [`take_error`][Self::take_error].
pub struct CityOutputObserver<W: OutputWriter> {
    writer:       W,
    geo_interval: u64,
    last_error:   Option<OutputError>,
}

impl<W: OutputWriter> CityOutputObserver<W> {
    /// Create an observer backed by `writer` that writes location lines
    /// every turn.
    pub fn new(writer: W) -> Self {
        Self { writer, geo_interval: 1, last_error: None }
    }

    /// Write location lines only every `turns` turns (0 disables them).
    pub fn with_geo_interval(mut self, turns: u64) -> Self {
        self.geo_interval = turns;
        self
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                warn!("output error: {e}");
                self.last_error = Some(e);
            }
        }
    }

    fn write_counts(&mut self, city: &City, counts: SirCounts) {
        let row = SirRow {
            tick:        city.time().0,
            susceptible: counts.susceptible as u64,
            infected:    counts.infected as u64,
            resistant:   counts.resistant as u64,
        };
        let result = self.writer.write_sir(&row);
        self.store_err(result);

        let tick = city.time().0;
        if self.geo_interval > 0 && tick.is_multiple_of(self.geo_interval) {
            let rows = geo_rows(city);
            let result = self.writer.write_geo(&rows);
            self.store_err(result);
        }
    }
}

fn geo_rows(city: &City) -> Vec<GeoRow> {
    let tick = city.time().0;
    let mut occupants = vec![0u64; city.locations().len()];
    let mut infected = vec![0u64; city.locations().len()];
    for person in city.people() {
        let i = person.location().index();
        occupants[i] += 1;
        if person.is_infected() {
            infected[i] += 1;
        }
    }
    city.locations()
        .iter()
        .map(|l: &Location| {
            let i = l.id().index();
            GeoRow {
                tick,
                location_id:  l.id().0,
                name:         l.name().to_owned(),
                kind:         l.kind().as_str(),
                latitude:     l.point().lat,
                longitude:    l.point().lon,
                contaminated: l.is_contaminated(),
                occupants:    occupants[i],
                infected:     infected[i],
            }
        })
        .collect()
}

impl<W: OutputWriter> CityObserver for CityOutputObserver<W> {
    fn on_start(&mut self, city: &City) {
        self.write_counts(city, city.sir_counts());
    }

    fn on_turn_end(&mut self, city: &City, summary: &TurnSummary) {
        self.write_counts(city, summary.counts);
    }

    fn on_finish(&mut self, city: &City, _report: &RunReport) {
        for person in city.people() {
            let rows: Vec<HistoryRow> = person
                .history()
                .iter()
                .map(|r| HistoryRow {
                    person_id:   person.id().0,
                    tick:        r.time.0,
                    state:       r.state.as_str(),
                    location_id: r.location.0,
                    symptomatic: r.symptomatic,
                })
                .collect();
            let result = self.writer.write_history(&rows);
            self.store_err(result);
        }

        let cases: Vec<_> = city
            .people()
            .iter()
            .filter_map(|p| retrace(p, city))
            .map(|case| case.to_row())
            .collect();
        let result = self.writer.write_cases(&cases);
        self.store_err(result);

        let result = self.writer.finish();
        self.store_err(result);
    }
}
