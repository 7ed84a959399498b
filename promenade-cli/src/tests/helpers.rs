//! Test helpers for writing catalog files into temporary workspaces.

use camino::{Utf8Path, Utf8PathBuf};
use serde_json::{Value, json};
use tempfile::TempDir;

/// Name of the catalog record placed outside the city bounds.
pub(super) const OUT_OF_BOUNDS_NAME: &str = "Moscow Kremlin";

/// Create a temporary directory and return it with its UTF-8 path.
pub(super) fn temp_workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// Three central landmarks plus one record far outside the city.
pub(super) fn landmark_records() -> Value {
    json!([
        {
            "name": "Nizhny Novgorod Kremlin",
            "coordinates": { "lat": 56.3271, "lon": 44.0023 },
            "category": "history",
            "rating": 4.8,
            "visit_time": 1.5,
            "description": "Fortress with panoramic views over the Volga.",
            "features": ["Architecture", "History"]
        },
        {
            "name": "Chkalov Staircase",
            "coordinates": { "lat": 56.3300, "lon": 44.0125 },
            "category": "architecture",
            "rating": 4.5,
            "visit_time": 0.5
        },
        {
            "name": "Victory Park",
            "coordinates": { "lat": 56.3100, "lon": 43.9900 },
            "category": "park",
            "rating": 4.3
        },
        {
            "name": OUT_OF_BOUNDS_NAME,
            "coordinates": { "lat": 55.7520, "lon": 37.6175 },
            "category": "history",
            "rating": 5.0
        }
    ])
}

/// Write [`landmark_records`] to `path`.
pub(super) fn write_landmark_catalog(path: &Utf8Path) {
    let payload = serde_json::to_vec_pretty(&landmark_records()).expect("serialise catalog");
    write_utf8(path, &payload);
}
