//! Select and order a walking route from resolved candidates.
//!
//! Selection keeps the best-rated candidates, ordering builds a greedy
//! nearest-neighbour tour from the visitor's position. Both phases are
//! deterministic: equal ratings keep candidate order and equal distances go
//! to the earlier working-set member. The tour is not guaranteed to be the
//! shortest one.

use std::collections::HashSet;

use geo::Coord;

use crate::{Catalog, DistanceMetric, GeodesicDistance, PointOfInterest, Route};

/// Builds routes against a borrowed catalog snapshot.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use promenade_core::{Catalog, PointOfInterest, RouteOptimizer};
///
/// let catalog: Catalog = [
///     PointOfInterest::new("Fair", Coord { x: 43.9750, y: 56.3350 }).with_rating(4.5),
///     PointOfInterest::new("Kremlin", Coord { x: 44.0023, y: 56.3271 }).with_rating(4.8),
///     PointOfInterest::new("Park", Coord { x: 43.9900, y: 56.3100 }).with_rating(4.3),
/// ]
/// .into_iter()
/// .collect();
///
/// let optimizer = RouteOptimizer::new(&catalog);
/// let start = Coord { x: 44.005986, y: 56.326887 };
/// let route = optimizer.build_route(&["Fair", "Kremlin", "Park"], start, 2);
/// assert_eq!(route.names(), ["Kremlin", "Fair"]);
/// ```
#[derive(Debug, Clone)]
pub struct RouteOptimizer<'a, M = GeodesicDistance> {
    catalog: &'a Catalog,
    metric: M,
}

impl<'a> RouteOptimizer<'a> {
    /// Construct an optimizer using [`GeodesicDistance`].
    #[must_use]
    pub const fn new(catalog: &'a Catalog) -> Self {
        Self::with_metric(catalog, GeodesicDistance)
    }
}

impl<'a, M> RouteOptimizer<'a, M>
where
    M: DistanceMetric,
{
    /// Construct an optimizer with an explicit distance metric.
    #[must_use]
    pub const fn with_metric(catalog: &'a Catalog, metric: M) -> Self {
        Self { catalog, metric }
    }

    /// Select and order up to `max_places` candidates into a route starting
    /// from `start`.
    ///
    /// Returns an empty route when no candidate is catalogued or
    /// `max_places` is zero.
    #[must_use]
    pub fn build_route<S: AsRef<str>>(
        &self,
        candidates: &[S],
        start: Coord<f64>,
        max_places: usize,
    ) -> Route {
        let working_set = self.select(candidates, max_places);
        if working_set.is_empty() {
            return Route::empty();
        }
        self.order(&working_set, start)
    }

    /// Choose the working set: the `max_places` best-rated candidates.
    ///
    /// Names missing from the catalog are dropped and repeated names are
    /// kept once. The sort is stable, so equal ratings keep the incoming
    /// candidate order. A NaN rating ranks below every other rating.
    #[must_use]
    pub fn select<S: AsRef<str>>(
        &self,
        candidates: &[S],
        max_places: usize,
    ) -> Vec<&'a PointOfInterest> {
        let catalog: &'a Catalog = self.catalog;
        let mut seen = HashSet::with_capacity(candidates.len());
        let mut working_set: Vec<&'a PointOfInterest> = candidates
            .iter()
            .map(AsRef::as_ref)
            .filter(|name| seen.insert(*name))
            .filter_map(|name| {
                let found = catalog.get(name);
                if found.is_none() {
                    log::warn!("candidate {name:?} is not catalogued; skipping");
                }
                found
            })
            .collect();

        working_set.sort_by(|lhs, rhs| rating_key(rhs).total_cmp(&rating_key(lhs)));
        working_set.truncate(max_places);
        log::debug!(
            "selected {} of {} candidates (max {max_places})",
            working_set.len(),
            candidates.len()
        );
        working_set
    }

    /// Order the working set as a greedy nearest-neighbour tour from `start`.
    ///
    /// At each step the closest unvisited member is chosen; a tie keeps the
    /// member that appears first in `working_set`.
    #[must_use]
    pub fn order(&self, working_set: &[&PointOfInterest], start: Coord<f64>) -> Route {
        let mut unvisited: Vec<&PointOfInterest> = working_set.to_vec();
        let mut names = Vec::with_capacity(unvisited.len());
        let mut position = start;

        while let Some(index) = self.nearest(position, &unvisited) {
            let next = unvisited.remove(index);
            log::trace!("visiting {:?} next", next.name);
            names.push(next.name.clone());
            position = next.location;
        }

        Route::new(names)
    }

    fn nearest(&self, position: Coord<f64>, unvisited: &[&PointOfInterest]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for (index, poi) in unvisited.iter().enumerate() {
            let raw = self.metric.distance_km(position, poi.location);
            let distance = if raw.is_nan() { f64::INFINITY } else { raw };
            let closer = best.is_none_or(|(_, best_distance)| distance < best_distance);
            if closer {
                best = Some((index, distance));
            }
        }
        best.map(|(index, _)| index)
    }
}

fn rating_key(poi: &PointOfInterest) -> f64 {
    if poi.rating.is_nan() {
        f64::NEG_INFINITY
    } else {
        poi.rating
    }
}
