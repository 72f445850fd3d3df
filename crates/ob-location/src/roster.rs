//! CSV roster loader.
//!
//! # CSV format
//!
//! Headerless, one location per row: latitude, longitude, name.  The name
//! carries the category tag (see [`parse_category_tag`](crate::parse_category_tag)).
//!
//! ```csv
//! 44.9701,-93.2650,Lakeside Diner (R)
//! 44.9712,-93.2633,Harbor Foods (G)
//! 44.9698,-93.2671,12 Shore Road
//! ```
//!
//! Row order is significant: it becomes the city's roster order, and with it
//! the interaction order of every turn.

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use ob_core::GeoPoint;

use crate::{LocationError, LocationKind, LocationResult, parse_category_tag};

/// One parsed roster row.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct LocationDescriptor {
    pub latitude:  f64,
    pub longitude: f64,
    pub name:      String,
}

impl LocationDescriptor {
    pub fn point(&self) -> GeoPoint {
        GeoPoint::new(self.latitude, self.longitude)
    }

    pub fn kind(&self) -> LocationKind {
        parse_category_tag(&self.name)
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Load a roster from a CSV file.
pub fn load_roster_csv(path: &Path) -> LocationResult<Vec<LocationDescriptor>> {
    let file = std::fs::File::open(path).map_err(LocationError::Io)?;
    load_roster_reader(file)
}

/// Like [`load_roster_csv`] but accepts any `Read` source.
pub fn load_roster_reader<R: Read>(reader: R) -> LocationResult<Vec<LocationDescriptor>> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .trim(csv::Trim::All)
        .from_reader(reader);

    csv_reader
        .deserialize::<LocationDescriptor>()
        .enumerate()
        .map(|(row, result)| {
            result.map_err(|e| LocationError::Parse(format!("row {}: {e}", row + 1)))
        })
        .collect()
}
