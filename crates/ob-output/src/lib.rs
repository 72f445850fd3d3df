//! `ob-output` — outbreak output writers.
//!
//! Two backends are provided:
//!
//! | Feature   | Backend | Files created                                     |
//! |-----------|---------|---------------------------------------------------|
//! | *(none)*  | CSV     | `sir.csv`, `geo.csv`, `people.csv`, `cases.csv`   |
//! | `sqlite`  | SQLite  | `outbreak.db`                                     |
//!
//! Both implement [`OutputWriter`] and are driven by [`CityOutputObserver`],
//! which implements `ob_sim::CityObserver`:
//!
//! - SIR counts and per-location lines at the start and after every turn;
//! - every person's full history and one retraced case per infection at the
//!   end of the run.
//!
//! # Usage
//!
//! ```rust,ignore
//! use ob_output::{CityOutputObserver, CsvWriter};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = CityOutputObserver::new(writer);
//! scenario.run(&mut obs)?;
//! if let Some(e) = obs.take_error() { eprintln!("output error: {e}"); }
//! ```

pub mod case;
pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;

#[cfg(feature = "sqlite")]
pub mod sqlite;

#[cfg(test)]
mod tests;

pub use case::{CaseReport, retrace};
pub use self::csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::CityOutputObserver;
pub use row::{CaseRow, GeoRow, HistoryRow, SirRow};
pub use writer::OutputWriter;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteWriter;
