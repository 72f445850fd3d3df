//! The `OutputWriter` trait implemented by all backend writers.

use crate::{CaseRow, GeoRow, HistoryRow, OutputResult, SirRow};

/// Trait implemented by the CSV and SQLite writers.
///
/// The observer never propagates these errors; it keeps the first one for
/// retrieval with
/// [`CityOutputObserver::take_error`][crate::CityOutputObserver::take_error].
pub trait OutputWriter {
    /// Write one SIR count row.
    fn write_sir(&mut self, row: &SirRow) -> OutputResult<()>;

    /// Write a batch of location rows.
    fn write_geo(&mut self, rows: &[GeoRow]) -> OutputResult<()>;

    /// Write a batch of history rows.
    fn write_history(&mut self, rows: &[HistoryRow]) -> OutputResult<()>;

    /// Write a batch of case rows.
    fn write_cases(&mut self, rows: &[CaseRow]) -> OutputResult<()>;

    /// Flush and close all underlying handles.
    ///
    /// Calling it again is a no-op.
    fn finish(&mut self) -> OutputResult<()>;
}
