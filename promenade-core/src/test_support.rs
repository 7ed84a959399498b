//! Test-only catalog fixtures and distance metrics used by unit, behaviour
//! and property tests.

use geo::Coord;

use crate::{Catalog, DistanceMetric, PointOfInterest};

/// Eight central Nizhny Novgorod landmarks, in a fixed catalog order.
#[must_use]
pub fn sample_catalog() -> Catalog {
    [
        landmark("Nizhny Novgorod Kremlin", 56.3271, 44.0023)
            .with_category("history")
            .with_rating(4.8)
            .with_visit_time_hours(1.5)
            .with_description(
                "Sixteenth-century fortress with 13 towers and panoramic views over the Volga and Oka.",
            )
            .with_features(["Architecture", "History", "Panoramic views"]),
        landmark("Chkalov Staircase", 56.3300, 44.0125)
            .with_category("architecture")
            .with_rating(4.5)
            .with_visit_time_hours(0.5)
            .with_description("One of the longest staircases in Russia, 560 steps.")
            .with_features(["Architecture", "Photo spots", "Panoramic views"]),
        landmark("Bolshaya Pokrovskaya Street", 56.3186, 44.0022)
            .with_category("walk")
            .with_rating(4.7)
            .with_visit_time_hours(2.0)
            .with_description("The main pedestrian street of the city.")
            .with_features(["Shopping", "Cafes", "Architecture"]),
        landmark("Rozhdestvenskaya Street", 56.3250, 43.9850)
            .with_category("architecture")
            .with_rating(4.6)
            .with_description("Historic street lined with merchant mansions.")
            .with_features(["Architecture", "History", "Photo spots"]),
        landmark("Fedorovsky Embankment", 56.3320, 43.9950)
            .with_category("walk")
            .with_rating(4.4)
            .with_visit_time_hours(0.5)
            .with_description("Scenic embankment overlooking the Strelka.")
            .with_features(["Panoramic views", "Nature", "Photo spots"]),
        landmark("Victory Park", 56.3100, 43.9900)
            .with_category("park")
            .with_rating(4.3)
            .with_description("Memorial park with military hardware on display.")
            .with_features(["History", "Nature", "Walks"]),
        landmark("Nizhny Novgorod Fair", 56.3350, 43.9750)
            .with_category("architecture")
            .with_rating(4.5)
            .with_description("Historic exhibition complex.")
            .with_features(["Architecture", "History", "Exhibitions"]),
        landmark("Alexander Nevsky Cathedral", 56.3330, 43.9750)
            .with_category("architecture")
            .with_rating(4.6)
            .with_visit_time_hours(0.5)
            .with_description("Orthodox cathedral on the Strelka where the Oka meets the Volga.")
            .with_features(["Architecture", "Religion", "History"]),
    ]
    .into_iter()
    .collect()
}

fn landmark(name: &str, latitude: f64, longitude: f64) -> PointOfInterest {
    PointOfInterest::new(
        name,
        Coord {
            x: longitude,
            y: latitude,
        },
    )
}

/// `DistanceMetric` returning configured distances between exact coordinate
/// pairs and a default for everything else. Lookups are symmetric.
#[derive(Debug, Clone, Default)]
pub struct FixedDistance {
    default_km: f64,
    pairs: Vec<(Coord<f64>, Coord<f64>, f64)>,
}

impl FixedDistance {
    /// Metric returning `default_km` for every pair.
    #[must_use]
    pub const fn new(default_km: f64) -> Self {
        Self {
            default_km,
            pairs: Vec::new(),
        }
    }

    /// Configure the distance between `a` and `b` in both directions.
    #[must_use]
    pub fn with_distance(mut self, a: Coord<f64>, b: Coord<f64>, km: f64) -> Self {
        self.pairs.push((a, b, km));
        self
    }
}

impl DistanceMetric for FixedDistance {
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        self.pairs
            .iter()
            .find(|&&(a, b, _)| (a == from && b == to) || (a == to && b == from))
            .map_or(self.default_km, |&(_, _, km)| km)
    }
}
