//! Shared catalog fixtures for behavioural tests.

use geo::Coord;
use promenade_core::{Catalog, PointOfInterest};

/// Six places around the city centre. Only categories are set, so interest
/// matching depends on nothing else.
pub fn central_landmarks() -> Catalog {
    [
        ("Old Fort", "history", 4.8, 44.0023, 56.3271),
        ("Riverside Steps", "architecture", 4.5, 44.0125, 56.3300),
        ("Merchant Row", "church", 4.6, 43.9850, 56.3250),
        ("Green Square", "park", 4.3, 43.9900, 56.3100),
        ("Glass Cafe", "cafe", 4.2, 44.0040, 56.3200),
        ("Drama House", "theatre", 4.4, 44.0000, 56.3230),
    ]
    .into_iter()
    .map(|(name, category, rating, x, y)| {
        PointOfInterest::new(name, Coord { x, y })
            .with_category(category)
            .with_rating(rating)
    })
    .collect()
}

/// Split a comma-separated list of names from a step.
pub fn parse_names(list: &str) -> Vec<String> {
    list.split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}
