//! Property-based tests for interest resolution and route building.
//!
//! # Invariants tested
//!
//! - **Keyword match:** with enough matches, every candidate matches the
//!   interest.
//! - **Padding:** with too few matches, the result is as long as the cap or
//!   the catalog allows.
//! - **No duplicates:** neither candidates nor routes repeat a name.
//! - **Subsequence:** routes only contain catalogued candidates.
//! - **Length:** a route is as long as the place budget or the distinct
//!   catalogued candidates allow.
//! - **Determinism:** identical inputs give identical candidates and routes.

use std::collections::HashSet;

use geo::Coord;
use promenade_core::{
    Catalog, DEFAULT_START, Interest, MIN_MATCHES, PointOfInterest, RouteOptimizer, matches_any,
    resolve, resolve_interest,
};
use proptest::prelude::*;

const CATEGORIES: &[&str] = &[
    "park", "museum", "cafe", "church", "bridge", "theatre", "gallery", "shop",
];

fn poi_strategy(index: usize) -> impl Strategy<Value = PointOfInterest> {
    (
        prop::sample::select(CATEGORIES),
        0.0_f64..5.0,
        43.9_f64..44.1,
        56.25_f64..56.40,
    )
        .prop_map(move |(category, rating, x, y)| {
            PointOfInterest::new(format!("poi-{index}"), Coord { x, y })
                .with_category(category)
                .with_rating(rating)
        })
}

fn catalog_strategy(max_len: usize) -> impl Strategy<Value = Catalog> {
    (0..=max_len).prop_flat_map(|len| {
        (0..len)
            .map(poi_strategy)
            .collect::<Vec<_>>()
            .prop_map(|pois| pois.into_iter().collect::<Catalog>())
    })
}

fn interest_strategy() -> impl Strategy<Value = Interest> {
    prop::sample::select(Interest::ALL.to_vec())
}

fn has_duplicates<'a>(names: impl IntoIterator<Item = &'a String>) -> bool {
    let mut seen = HashSet::new();
    names.into_iter().any(|name| !seen.insert(name))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: with at least `MIN_MATCHES` matches every candidate matches.
    #[test]
    fn matched_candidates_share_the_interest(
        catalog in catalog_strategy(12),
        interest in interest_strategy(),
        max_results in 0_usize..20,
    ) {
        let keywords = interest.keywords();
        let matched = catalog.iter().filter(|poi| matches_any(poi, keywords)).count();
        prop_assume!(!keywords.is_empty() && matched >= MIN_MATCHES);

        let names = resolve_interest(interest, &catalog, max_results);
        for name in &names {
            let found = catalog.get(name);
            prop_assert!(found.is_some_and(|poi| matches_any(poi, keywords)));
        }
        prop_assert_eq!(names.len(), matched.min(max_results));
    }

    /// Property: too few matches are padded to the cap or the catalog size.
    #[test]
    fn sparse_matches_are_padded(
        catalog in catalog_strategy(12),
        interest in interest_strategy(),
        max_results in 0_usize..20,
    ) {
        let keywords = interest.keywords();
        let matched = catalog.iter().filter(|poi| matches_any(poi, keywords)).count();
        prop_assume!(matched < MIN_MATCHES);

        let names = resolve_interest(interest, &catalog, max_results);
        prop_assert_eq!(names.len(), catalog.len().min(max_results));
        prop_assert!(!has_duplicates(&names));
    }

    /// Property: a route is a duplicate-free selection of catalogued
    /// candidates whose length follows the place budget.
    #[test]
    fn route_respects_candidates_and_budget(
        catalog in catalog_strategy(12),
        picks in prop::collection::vec(0_usize..16, 0..16),
        max_places in 0_usize..8,
    ) {
        let candidates: Vec<String> = picks.iter().map(|pick| format!("poi-{pick}")).collect();
        let route = RouteOptimizer::new(&catalog).build_route(&candidates, DEFAULT_START, max_places);

        let distinct: HashSet<&String> = candidates
            .iter()
            .filter(|name| catalog.contains(name))
            .collect();
        prop_assert_eq!(route.len(), distinct.len().min(max_places));
        prop_assert!(!has_duplicates(route.names()));
        for name in route.names() {
            prop_assert!(distinct.contains(&name));
        }
    }

    /// Property: resolution is deterministic over an unchanged catalog.
    #[test]
    fn resolving_is_repeatable(
        catalog in catalog_strategy(12),
        interest in interest_strategy(),
        max_results in 0_usize..20,
    ) {
        let first = resolve(interest.as_str(), &catalog, max_results);
        let second = resolve(interest.as_str(), &catalog, max_results);
        prop_assert_eq!(&first, &second);
        prop_assert_eq!(first, resolve_interest(interest, &catalog, max_results));
    }

    /// Property: the optimizer is deterministic.
    #[test]
    fn route_building_is_repeatable(
        catalog in catalog_strategy(12),
        max_places in 0_usize..8,
    ) {
        let candidates: Vec<&str> = catalog.names().collect();
        let optimizer = RouteOptimizer::new(&catalog);
        let first = optimizer.build_route(&candidates, DEFAULT_START, max_places);
        let second = optimizer.build_route(&candidates, DEFAULT_START, max_places);
        prop_assert_eq!(first, second);
    }
}
