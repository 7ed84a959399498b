#![expect(
    clippy::expect_used,
    reason = "tests should fail fast when setup breaks"
)]

//! Behavioural coverage for end-to-end walk planning.

mod support;

use std::{cell::RefCell, sync::Arc};

use promenade_core::{DEFAULT_START, GreedyPlanner, Plan, PlanRequest, Planner, SharedCatalog};
use rstest::fixture;
use rstest_bdd_macros::{given, scenario, then, when};

use support::{central_landmarks, parse_names};

#[derive(Default)]
struct PlanWorld {
    catalog: Arc<SharedCatalog>,
    plan: RefCell<Option<Plan>>,
}

impl PlanWorld {
    fn plan(&self) -> Plan {
        self.plan.borrow().clone().expect("plan should be built")
    }
}

#[fixture]
fn world() -> PlanWorld {
    PlanWorld::default()
}

#[given("a planner over the central landmarks catalog")]
fn given_landmarks(world: &PlanWorld) {
    world.catalog.replace(central_landmarks());
}

#[given("a planner over an empty catalog")]
fn given_empty(world: &PlanWorld) {
    let _ = world;
}

#[given("the rating of \"{name}\" is raised to {rating}")]
fn given_rating(world: &PlanWorld, name: String, rating: f64) {
    world.catalog.update(|catalog| {
        assert!(catalog.set_rating(&name, rating), "{name} should be catalogued");
    });
}

#[when("I plan a walk for \"{interest}\" lasting \"{time_budget}\"")]
fn when_plan(world: &PlanWorld, interest: String, time_budget: String) {
    let planner = GreedyPlanner::new(Arc::clone(&world.catalog));
    let plan = planner.plan(&PlanRequest::new(interest, time_budget, DEFAULT_START));
    world.plan.replace(Some(plan));
}

#[then("the plan allows {places} places")]
fn then_place_count(world: &PlanWorld, places: usize) {
    assert_eq!(world.plan().place_count, places);
}

#[then("the route is \"{expected}\"")]
fn then_route_is(world: &PlanWorld, expected: String) {
    assert_eq!(world.plan().route.names(), parse_names(&expected).as_slice());
}

#[then("the route has {stops} stops")]
fn then_route_stops(world: &PlanWorld, stops: usize) {
    let plan = world.plan();
    assert_eq!(plan.route.len(), stops);
    assert_eq!(plan.itinerary.stops(), stops);
}

#[then("the plan is empty")]
fn then_plan_is_empty(world: &PlanWorld) {
    let plan = world.plan();
    assert!(plan.is_empty());
    assert!(plan.candidates.is_empty());
    assert_eq!(plan.itinerary.average_rating, None);
}

#[scenario(path = "tests/features/plan_walk.feature", index = 0)]
fn one_hour_walk(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/plan_walk.feature", index = 1)]
fn unknown_budget_falls_back(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/plan_walk.feature", index = 2)]
fn sparse_interest_is_padded(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/plan_walk.feature", index = 3)]
fn rating_updates_are_visible(world: PlanWorld) {
    let _ = world;
}

#[scenario(path = "tests/features/plan_walk.feature", index = 4)]
fn empty_catalog_plans_nothing(world: PlanWorld) {
    let _ = world;
}
