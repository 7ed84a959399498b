//! Ordered, name-keyed collection of points of interest.
//!
//! The catalog is the read-only view the resolver and optimizer work against.
//! Iteration follows insertion order; that order is the fallback and
//! tie-break basis for every downstream operation.

use std::collections::HashMap;

use crate::PointOfInterest;

/// Insertion-ordered mapping from name to [`PointOfInterest`].
///
/// # Examples
/// ```
/// use geo::Coord;
/// use promenade_core::{Catalog, PointOfInterest};
///
/// let catalog: Catalog = [
///     PointOfInterest::new("Kremlin", Coord { x: 44.0023, y: 56.3271 }),
///     PointOfInterest::new("Fair", Coord { x: 43.975, y: 56.335 }),
/// ]
/// .into_iter()
/// .collect();
///
/// assert_eq!(catalog.names().collect::<Vec<_>>(), ["Kremlin", "Fair"]);
/// assert!(catalog.get("Fair").is_some());
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    entries: Vec<PointOfInterest>,
    positions: HashMap<String, usize>,
}

impl Catalog {
    /// Construct an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a point of interest.
    ///
    /// A name that is already present is replaced in place, keeping its
    /// original position, and the previous entry is returned.
    pub fn insert(&mut self, poi: PointOfInterest) -> Option<PointOfInterest> {
        if let Some(slot) = self
            .positions
            .get(&poi.name)
            .and_then(|&position| self.entries.get_mut(position))
        {
            return Some(std::mem::replace(slot, poi));
        }
        self.positions.insert(poi.name.clone(), self.entries.len());
        self.entries.push(poi);
        None
    }

    /// Look up a point of interest by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&PointOfInterest> {
        self.positions
            .get(name)
            .and_then(|&position| self.entries.get(position))
    }

    /// Whether `name` is catalogued.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.positions.contains_key(name)
    }

    /// Replace the rating of `name`. Returns `false` when the name is unknown.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use promenade_core::{Catalog, PointOfInterest};
    ///
    /// let mut catalog = Catalog::new();
    /// catalog.insert(PointOfInterest::new("Fair", Coord { x: 43.975, y: 56.335 }));
    /// assert!(catalog.set_rating("Fair", 4.9));
    /// assert!(!catalog.set_rating("Nowhere", 1.0));
    /// ```
    pub fn set_rating(&mut self, name: &str, rating: f64) -> bool {
        let Some(poi) = self
            .positions
            .get(name)
            .and_then(|&position| self.entries.get_mut(position))
        else {
            return false;
        };
        poi.rating = rating;
        true
    }

    /// Number of catalogued entries.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog has no entries.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate entries in catalog order.
    #[must_use]
    pub fn iter(&self) -> std::slice::Iter<'_, PointOfInterest> {
        self.entries.iter()
    }

    /// Iterate names in catalog order.
    #[must_use]
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|poi| poi.name.as_str())
    }
}

impl FromIterator<PointOfInterest> for Catalog {
    fn from_iter<I: IntoIterator<Item = PointOfInterest>>(iter: I) -> Self {
        let mut catalog = Self::new();
        catalog.extend(iter);
        catalog
    }
}

impl Extend<PointOfInterest> for Catalog {
    fn extend<I: IntoIterator<Item = PointOfInterest>>(&mut self, iter: I) {
        for poi in iter {
            self.insert(poi);
        }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a PointOfInterest;
    type IntoIter = std::slice::Iter<'a, PointOfInterest>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
