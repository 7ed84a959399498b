//! Compose interest resolution, time budgeting and route building.
//!
//! A plan is built against a single catalog snapshot: candidates come from
//! the resolver, the place count from the time budget, and the route from
//! the optimizer.

use std::sync::Arc;

use geo::Coord;

use crate::{
    Catalog, DistanceMetric, GeodesicDistance, Itinerary, Route, RouteOptimizer, SharedCatalog,
    place_count, resolve,
};

/// Number of candidates resolved when a request does not say otherwise.
pub const DEFAULT_MAX_CANDIDATES: usize = 15;

/// Nizhny Novgorod city centre, used when a visitor shares no location.
pub const DEFAULT_START: Coord<f64> = Coord {
    x: 44.005_986,
    y: 56.326_887,
};

/// Parameters for a plan request.
///
/// # Examples
/// ```rust
/// use geo::Coord;
/// use promenade_core::{DEFAULT_MAX_CANDIDATES, PlanRequest};
///
/// let request = PlanRequest::new("History", "2 hours", Coord { x: 44.0, y: 56.33 });
/// assert_eq!(request.max_candidates, DEFAULT_MAX_CANDIDATES);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlanRequest {
    /// Interest display label, e.g. "History".
    pub interest: String,
    /// Time budget label, e.g. "2 hours".
    pub time_budget: String,
    /// Start location for the walk.
    pub start: Coord<f64>,
    /// Upper bound on resolved candidates.
    #[cfg_attr(feature = "serde", serde(default = "default_max_candidates"))]
    pub max_candidates: usize,
}

#[cfg(feature = "serde")]
const fn default_max_candidates() -> usize {
    DEFAULT_MAX_CANDIDATES
}

impl PlanRequest {
    /// Construct a request with [`DEFAULT_MAX_CANDIDATES`].
    #[must_use]
    pub fn new(
        interest: impl Into<String>,
        time_budget: impl Into<String>,
        start: Coord<f64>,
    ) -> Self {
        Self {
            interest: interest.into(),
            time_budget: time_budget.into(),
            start,
            max_candidates: DEFAULT_MAX_CANDIDATES,
        }
    }

    /// Override the candidate bound.
    #[must_use]
    pub const fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }
}

/// Outcome of planning a walk.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Plan {
    /// Interest label as requested.
    pub interest: String,
    /// Time budget label as requested.
    pub time_budget: String,
    /// Places allowed by the time budget.
    pub place_count: usize,
    /// Candidates produced by the resolver, in resolver order.
    pub candidates: Vec<String>,
    /// The ordered route.
    pub route: Route,
    /// Summary of the route.
    pub itinerary: Itinerary,
}

impl Plan {
    /// Whether no itinerary could be built.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.route.is_empty()
    }
}

/// Plan a walk for a visitor.
///
/// Planning is infallible: degenerate inputs produce an empty [`Plan`].
/// Planners must be `Send + Sync` to serve concurrent sessions.
pub trait Planner: Send + Sync {
    /// Build a plan for `request`.
    fn plan(&self, request: &PlanRequest) -> Plan;
}

/// Planner using the greedy route optimizer over a shared catalog.
///
/// Every call works on one snapshot, so concurrent catalog updates never
/// show up halfway through a plan.
///
/// # Examples
/// ```rust
/// use std::sync::Arc;
/// use geo::Coord;
/// use promenade_core::{
///     Catalog, GreedyPlanner, PlanRequest, Planner, PointOfInterest, SharedCatalog,
/// };
///
/// let catalog: Catalog = [
///     PointOfInterest::new("Kremlin", Coord { x: 44.0023, y: 56.3271 }).with_category("history"),
///     PointOfInterest::new("Stairs", Coord { x: 44.0125, y: 56.3300 }).with_category("architecture"),
/// ]
/// .into_iter()
/// .collect();
/// let planner = GreedyPlanner::new(Arc::new(SharedCatalog::new(catalog)));
///
/// let plan = planner.plan(&PlanRequest::new("History", "1 hour", Coord { x: 44.0, y: 56.33 }));
/// assert_eq!(plan.place_count, 2);
/// assert_eq!(plan.route.len(), 2);
/// ```
#[derive(Debug, Clone)]
pub struct GreedyPlanner<M = GeodesicDistance> {
    catalog: Arc<SharedCatalog>,
    metric: M,
}

impl GreedyPlanner {
    /// Construct a planner using [`GeodesicDistance`].
    #[must_use]
    pub const fn new(catalog: Arc<SharedCatalog>) -> Self {
        Self::with_metric(catalog, GeodesicDistance)
    }
}

impl<M> GreedyPlanner<M>
where
    M: DistanceMetric,
{
    /// Construct a planner with an explicit distance metric.
    #[must_use]
    pub const fn with_metric(catalog: Arc<SharedCatalog>, metric: M) -> Self {
        Self { catalog, metric }
    }

    /// The shared catalog this planner reads from.
    #[must_use]
    pub fn catalog(&self) -> &SharedCatalog {
        &self.catalog
    }
}

impl<M> Planner for GreedyPlanner<M>
where
    M: DistanceMetric,
{
    fn plan(&self, request: &PlanRequest) -> Plan {
        let snapshot = self.catalog.snapshot();
        plan_with(&snapshot, request, &self.metric)
    }
}

/// Build a plan against an explicit catalog.
#[must_use]
pub fn plan_with<M>(catalog: &Catalog, request: &PlanRequest, metric: &M) -> Plan
where
    M: DistanceMetric + ?Sized,
{
    let candidates = resolve(&request.interest, catalog, request.max_candidates);
    let places = place_count(&request.time_budget);
    let route = RouteOptimizer::with_metric(catalog, metric).build_route(
        &candidates,
        request.start,
        places,
    );
    if route.is_empty() {
        log::info!(
            "no itinerary for interest {:?} with {} candidates",
            request.interest,
            candidates.len()
        );
    }
    let itinerary = Itinerary::summarise(&route, catalog, request.start, metric);

    Plan {
        interest: request.interest.clone(),
        time_budget: request.time_budget.clone(),
        place_count: places,
        candidates,
        route,
        itinerary,
    }
}
