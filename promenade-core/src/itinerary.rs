//! Summaries of a built route: walking legs, visit time and rating.
//!
//! Visit times are informational only; route selection never reads them.

use geo::Coord;

use crate::{Catalog, DistanceMetric, Route};

/// One stop of an itinerary and the walk that leads to it.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Leg {
    /// Name of the stop.
    pub name: String,
    /// Straight-line distance from the previous position, in kilometres.
    pub distance_km: f64,
}

/// Aggregate figures for a route.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use promenade_core::{Catalog, GeodesicDistance, Itinerary, PointOfInterest, Route};
///
/// let catalog: Catalog = [
///     PointOfInterest::new("Kremlin", Coord { x: 44.0023, y: 56.3271 })
///         .with_rating(4.8)
///         .with_visit_time_hours(1.5),
/// ]
/// .into_iter()
/// .collect();
/// let route = Route::new(vec!["Kremlin".into()]);
/// let start = Coord { x: 44.0023, y: 56.3271 };
///
/// let itinerary = Itinerary::summarise(&route, &catalog, start, &GeodesicDistance);
/// assert_eq!(itinerary.legs.len(), 1);
/// assert_eq!(itinerary.visit_hours, 1.5);
/// assert_eq!(itinerary.average_rating, Some(4.8));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Itinerary {
    /// Legs in visiting order.
    pub legs: Vec<Leg>,
    /// Total straight-line walking distance, in kilometres.
    pub walking_km: f64,
    /// Sum of suggested visit times, in hours.
    pub visit_hours: f64,
    /// Mean rating of the stops; `None` for an empty route.
    pub average_rating: Option<f64>,
}

impl Itinerary {
    /// Summarise `route` walked from `start`.
    ///
    /// Names missing from `catalog` are skipped.
    #[expect(
        clippy::float_arithmetic,
        reason = "distances, durations and ratings are accumulated as floats"
    )]
    #[must_use]
    pub fn summarise<M>(route: &Route, catalog: &Catalog, start: Coord<f64>, metric: &M) -> Self
    where
        M: DistanceMetric + ?Sized,
    {
        let mut itinerary = Self::default();
        let mut rating_total = 0.0;
        let mut position = start;

        for poi in route.names().iter().filter_map(|name| catalog.get(name)) {
            let distance_km = metric.distance_km(position, poi.location);
            itinerary.walking_km += distance_km;
            itinerary.visit_hours += poi.visit_time_hours;
            rating_total += poi.rating;
            itinerary.legs.push(Leg {
                name: poi.name.clone(),
                distance_km,
            });
            position = poi.location;
        }

        let stops = u32::try_from(itinerary.legs.len()).unwrap_or(u32::MAX);
        if stops > 0 {
            itinerary.average_rating = Some(rating_total / f64::from(stops));
        }
        itinerary
    }

    /// Number of stops.
    #[must_use]
    pub const fn stops(&self) -> usize {
        self.legs.len()
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
mod tests {
    use super::*;
    use crate::PointOfInterest;
    use crate::test_support::FixedDistance;

    fn catalog() -> Catalog {
        [
            PointOfInterest::new("a", Coord { x: 44.01, y: 56.33 })
                .with_rating(4.0)
                .with_visit_time_hours(0.5),
            PointOfInterest::new("b", Coord { x: 44.02, y: 56.33 })
                .with_rating(5.0)
                .with_visit_time_hours(1.5),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_route_has_zero_totals() {
        let itinerary = Itinerary::summarise(
            &Route::empty(),
            &catalog(),
            Coord { x: 44.0, y: 56.33 },
            &FixedDistance::new(1.0),
        );
        assert_eq!(itinerary, Itinerary::default());
        assert!(itinerary.average_rating.is_none());
    }

    #[test]
    fn totals_accumulate_over_legs() {
        let route = Route::new(vec!["a".into(), "b".into()]);
        let itinerary = Itinerary::summarise(
            &route,
            &catalog(),
            Coord { x: 44.0, y: 56.33 },
            &FixedDistance::new(1.25),
        );

        assert_eq!(itinerary.stops(), 2);
        assert!((itinerary.walking_km - 2.5).abs() < 1e-9);
        assert!((itinerary.visit_hours - 2.0).abs() < 1e-9);
        assert_eq!(itinerary.average_rating, Some(4.5));
        let legs: f64 = itinerary.legs.iter().map(|leg| leg.distance_km).sum();
        assert!((legs - itinerary.walking_km).abs() < 1e-9);
    }

    #[test]
    fn unknown_names_are_skipped() {
        let route = Route::new(vec!["ghost".into(), "b".into()]);
        let itinerary = Itinerary::summarise(
            &route,
            &catalog(),
            Coord { x: 44.0, y: 56.33 },
            &FixedDistance::new(1.0),
        );
        assert_eq!(itinerary.stops(), 1);
        assert_eq!(itinerary.legs.first().map(|leg| leg.name.as_str()), Some("b"));
    }
}
