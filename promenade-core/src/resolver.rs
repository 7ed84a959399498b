//! Map an interest label to an ordered list of candidate names.
//!
//! Matching is a case-insensitive substring test of each keyword against an
//! entry's category, description and individual features. Results follow
//! catalog order, which later serves as the tie-break for equal ratings.

use std::collections::HashSet;

use crate::{Catalog, Interest, PointOfInterest};

/// Fewer raw matches than this triggers padding from the full catalog.
pub const MIN_MATCHES: usize = 2;

/// Resolve a display label into at most `max_results` candidate names.
///
/// The label must equal a display label exactly. Anything else, including a
/// differently cased label, behaves like [`Interest::Any`] and returns the
/// catalog in order, unfiltered.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use promenade_core::{Catalog, PointOfInterest, resolve};
///
/// let at = Coord { x: 44.0, y: 56.3 };
/// let catalog: Catalog = [
///     PointOfInterest::new("Kremlin", at).with_category("history"),
///     PointOfInterest::new("Cafe Pushkin", at).with_category("cafe"),
///     PointOfInterest::new("Diner", at).with_features(["Food"]),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(resolve("Food", &catalog, 10), ["Cafe Pushkin", "Diner"]);
/// assert_eq!(resolve("Any point of interest", &catalog, 2), ["Kremlin", "Cafe Pushkin"]);
/// ```
#[must_use]
pub fn resolve(label: &str, catalog: &Catalog, max_results: usize) -> Vec<String> {
    Interest::from_display_label(label).map_or_else(
        || {
            log::debug!("unknown interest {label:?}; returning catalog order");
            unfiltered(catalog, max_results)
        },
        |interest| resolve_interest(interest, catalog, max_results),
    )
}

/// Resolve a typed [`Interest`] into at most `max_results` candidate names.
///
/// When fewer than [`MIN_MATCHES`] entries match, the result is padded with
/// the remaining catalog entries in catalog order.
#[must_use]
pub fn resolve_interest(interest: Interest, catalog: &Catalog, max_results: usize) -> Vec<String> {
    let keywords = interest.keywords();
    if keywords.is_empty() {
        return unfiltered(catalog, max_results);
    }

    let mut selected: Vec<&str> = catalog
        .iter()
        .filter(|poi| matches_any(poi, keywords))
        .map(|poi| poi.name.as_str())
        .collect();
    log::debug!(
        "interest {interest} matched {} of {} entries using {keywords:?}",
        selected.len(),
        catalog.len()
    );

    if selected.len() < MIN_MATCHES {
        let included: HashSet<&str> = selected.iter().copied().collect();
        let room = max_results.saturating_sub(selected.len());
        let padding: Vec<&str> = catalog
            .names()
            .filter(|name| !included.contains(name))
            .take(room)
            .collect();
        log::debug!(
            "interest {interest} padded with {} catalog entries",
            padding.len()
        );
        selected.extend(padding);
    }

    selected.truncate(max_results);
    selected.into_iter().map(str::to_owned).collect()
}

fn unfiltered(catalog: &Catalog, max_results: usize) -> Vec<String> {
    catalog
        .names()
        .take(max_results)
        .map(str::to_owned)
        .collect()
}

/// Whether any keyword is a substring of the category, the description or a
/// single feature of `poi`, ignoring case.
#[must_use]
pub fn matches_any(poi: &PointOfInterest, keywords: &[&str]) -> bool {
    let category = poi.category.to_lowercase();
    let description = poi.description.to_lowercase();
    let features: Vec<String> = poi.features.iter().map(|f| f.to_lowercase()).collect();

    keywords.iter().any(|keyword| {
        category.contains(keyword)
            || description.contains(keyword)
            || features.iter().any(|feature| feature.contains(keyword))
    })
}
