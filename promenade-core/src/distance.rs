//! Great-circle distances between coordinates.
//!
//! The `DistanceMetric` trait lets the route optimizer stay agnostic of the
//! earth model. Any implementation works as long as it is applied
//! consistently across a request.

use geo::{Coord, Distance, Geodesic, Haversine, Point};

/// Straight-line distance between two WGS84 coordinates, in kilometres.
///
/// Implementations must be thread-safe (`Send` + `Sync`) so a single metric
/// can serve concurrent requests. Results must be finite and non-negative
/// for coordinates inside the catalog bounds.
///
/// # Examples
///
/// ```rust
/// use geo::Coord;
/// use promenade_core::{DistanceMetric, GeodesicDistance};
///
/// let kremlin = Coord { x: 44.0023, y: 56.3271 };
/// let stairs = Coord { x: 44.0125, y: 56.3300 };
/// let km = GeodesicDistance.distance_km(kremlin, stairs);
/// assert!(km > 0.5 && km < 1.0);
/// ```
pub trait DistanceMetric: Send + Sync {
    /// Distance from `from` to `to` in kilometres.
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64;
}

/// Geodesic distance on the WGS84 ellipsoid. The default metric.
#[derive(Debug, Default, Clone, Copy)]
pub struct GeodesicDistance;

impl DistanceMetric for GeodesicDistance {
    #[expect(
        clippy::float_arithmetic,
        reason = "converting metres to kilometres"
    )]
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        Geodesic.distance(Point::from(from), Point::from(to)) / 1000.0
    }
}

/// Haversine distance on a sphere of the mean earth radius.
#[derive(Debug, Default, Clone, Copy)]
pub struct HaversineDistance;

impl DistanceMetric for HaversineDistance {
    #[expect(
        clippy::float_arithmetic,
        reason = "converting metres to kilometres"
    )]
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        Haversine.distance(Point::from(from), Point::from(to)) / 1000.0
    }
}

impl<M: DistanceMetric + ?Sized> DistanceMetric for &M {
    fn distance_km(&self, from: Coord<f64>, to: Coord<f64>) -> f64 {
        (**self).distance_km(from, to)
    }
}

#[cfg(test)]
#[expect(
    clippy::float_arithmetic,
    reason = "assertions compare floating point values"
)]
mod tests {
    use super::*;
    use rstest::rstest;

    const KREMLIN: Coord<f64> = Coord { x: 44.0023, y: 56.3271 };
    const FAIR: Coord<f64> = Coord { x: 43.9750, y: 56.3350 };

    #[rstest]
    #[case::geodesic(&GeodesicDistance as &dyn DistanceMetric)]
    #[case::haversine(&HaversineDistance as &dyn DistanceMetric)]
    fn zero_for_identical_points(#[case] metric: &dyn DistanceMetric) {
        assert!(metric.distance_km(KREMLIN, KREMLIN).abs() < 1e-9);
    }

    #[rstest]
    #[case::geodesic(&GeodesicDistance as &dyn DistanceMetric)]
    #[case::haversine(&HaversineDistance as &dyn DistanceMetric)]
    fn symmetric(#[case] metric: &dyn DistanceMetric) {
        let there = metric.distance_km(KREMLIN, FAIR);
        let back = metric.distance_km(FAIR, KREMLIN);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn models_agree_within_a_percent() {
        let geodesic = GeodesicDistance.distance_km(KREMLIN, FAIR);
        let haversine = HaversineDistance.distance_km(KREMLIN, FAIR);
        assert!(geodesic > 1.5 && geodesic < 2.5, "unexpected {geodesic}");
        assert!((geodesic - haversine).abs() / geodesic < 0.01);
    }
}
