//! Core domain for the Promenade walking-route planner.
//!
//! A [`Catalog`] of named [`PointOfInterest`] records feeds a three-stage
//! pipeline: the resolver maps an [`Interest`] label to candidate names, the
//! [`TimeBudget`] caps how many places fit into the walk, and the
//! [`RouteOptimizer`] selects the best-rated candidates and orders them as a
//! greedy nearest-neighbour tour. [`GreedyPlanner`] runs the whole pipeline
//! against a [`SharedCatalog`] snapshot.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod catalog;
pub mod distance;
pub mod interest;
pub mod itinerary;
pub mod optimizer;
pub mod planner;
pub mod poi;
pub mod resolver;
pub mod route;
pub mod shared;
#[cfg(any(test, feature = "test-support"))]
#[cfg_attr(docsrs, doc(cfg(feature = "test-support")))]
pub mod test_support;
pub mod time_budget;

pub use catalog::Catalog;
pub use distance::{DistanceMetric, GeodesicDistance, HaversineDistance};
pub use interest::{Interest, InterestParseError};
pub use itinerary::{Itinerary, Leg};
pub use optimizer::RouteOptimizer;
pub use planner::{
    DEFAULT_MAX_CANDIDATES, DEFAULT_START, GreedyPlanner, Plan, PlanRequest, Planner, plan_with,
};
pub use poi::{CityBounds, DEFAULT_RATING, DEFAULT_VISIT_TIME_HOURS, PointOfInterest};
pub use resolver::{MIN_MATCHES, matches_any, resolve, resolve_interest};
pub use route::Route;
pub use shared::SharedCatalog;
pub use time_budget::{DEFAULT_PLACE_COUNT, TimeBudget, TimeBudgetParseError, place_count};
