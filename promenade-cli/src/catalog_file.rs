//! JSON catalog files consumed by the `plan` command.
//!
//! A catalog file is an array of records such as:
//!
//! ```json
//! [
//!   {
//!     "name": "Chkalov Staircase",
//!     "coordinates": { "lat": 56.3300, "lon": 44.0125 },
//!     "category": "architecture",
//!     "rating": 4.5,
//!     "visit_time": 0.5,
//!     "description": "Monumental staircase down to the Volga.",
//!     "features": ["Architecture", "Panoramic views"]
//!   }
//! ]
//! ```
//!
//! Only `name` and `coordinates` are required.

use std::io::BufReader;

use camino::Utf8Path;
use geo::Coord;
use promenade_core::{
    Catalog, CityBounds, DEFAULT_RATING, DEFAULT_VISIT_TIME_HOURS, PointOfInterest,
};
use serde::{Deserialize, Serialize};

use crate::{CliError, fs::open_utf8_file};

/// One catalog entry as stored on disk.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub(crate) struct CatalogRecord {
    pub(crate) name: String,
    pub(crate) coordinates: Coordinates,
    #[serde(default)]
    pub(crate) category: String,
    #[serde(default = "default_rating")]
    pub(crate) rating: f64,
    #[serde(default = "default_visit_time")]
    pub(crate) visit_time: f64,
    #[serde(default)]
    pub(crate) description: String,
    #[serde(default)]
    pub(crate) features: Vec<String>,
}

/// Latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub(crate) struct Coordinates {
    pub(crate) lat: f64,
    pub(crate) lon: f64,
}

impl From<Coordinates> for Coord<f64> {
    fn from(value: Coordinates) -> Self {
        Self {
            x: value.lon,
            y: value.lat,
        }
    }
}

const fn default_rating() -> f64 {
    DEFAULT_RATING
}

const fn default_visit_time() -> f64 {
    DEFAULT_VISIT_TIME_HOURS
}

impl From<CatalogRecord> for PointOfInterest {
    fn from(record: CatalogRecord) -> Self {
        Self::new(record.name, record.coordinates.into())
            .with_category(&record.category)
            .with_rating(record.rating)
            .with_visit_time_hours(record.visit_time)
            .with_description(record.description)
            .with_features(record.features)
    }
}

/// Build a catalog from decoded records.
///
/// Records outside `bounds` are skipped. A repeated name replaces the earlier
/// entry while keeping its catalog position.
pub(crate) fn build_catalog(records: Vec<CatalogRecord>, bounds: &CityBounds) -> Catalog {
    let mut catalog = Catalog::new();
    for record in records {
        let location = Coord::from(record.coordinates);
        if !bounds.contains(location) {
            log::warn!(
                "skipping {:?}: ({}, {}) lies outside the city bounds",
                record.name,
                record.coordinates.lat,
                record.coordinates.lon
            );
            continue;
        }
        if let Some(previous) = catalog.insert(record.into()) {
            log::warn!("duplicate catalog entry {:?} replaced", previous.name);
        }
    }
    log::info!("loaded {} catalog entries", catalog.len());
    catalog
}

/// Load a JSON catalog file from disk.
pub(crate) fn load_catalog(path: &Utf8Path, bounds: &CityBounds) -> Result<Catalog, CliError> {
    let file = open_utf8_file(path).map_err(|source| CliError::OpenCatalog {
        path: path.to_path_buf(),
        source,
    })?;
    let reader = BufReader::new(file);
    let records: Vec<CatalogRecord> =
        serde_json::from_reader(reader).map_err(|source| CliError::ParseCatalog {
            path: path.to_path_buf(),
            source,
        })?;
    Ok(build_catalog(records, bounds))
}
