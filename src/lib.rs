//! Facade crate for the Promenade walking-route planner.
//!
//! This crate re-exports the core domain types and the greedy planner. The
//! test fixtures are available behind the `test-support` feature.
//!
//! ```
//! use promenade::{TimeBudget, place_count};
//!
//! assert_eq!(place_count(TimeBudget::FourHours.as_str()), 5);
//! ```

#![forbid(unsafe_code)]

pub use promenade_core::{
    Catalog, CityBounds, DistanceMetric, GeodesicDistance, GreedyPlanner, HaversineDistance,
    Interest, InterestParseError, Itinerary, Leg, Plan, PlanRequest, Planner, PointOfInterest,
    Route, RouteOptimizer, SharedCatalog, TimeBudget, TimeBudgetParseError, place_count,
    plan_with, resolve,
};

#[cfg(feature = "test-support")]
pub use promenade_core::test_support;
