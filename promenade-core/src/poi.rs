//! Points of interest and the city envelope they must fall within.

use geo::{Coord, Intersects, Rect};

/// Rating assumed when the catalog does not provide one.
pub const DEFAULT_RATING: f64 = 4.0;

/// Visit duration, in hours, assumed when the catalog does not provide one.
pub const DEFAULT_VISIT_TIME_HOURS: f64 = 1.0;

/// A catalogued place worth visiting.
///
/// Coordinates are WGS84 with `x = longitude` and `y = latitude`. The `name`
/// is the identity key within a [`Catalog`](crate::Catalog).
///
/// # Examples
/// ```
/// use geo::Coord;
/// use promenade_core::PointOfInterest;
///
/// let poi = PointOfInterest::new("Kremlin", Coord { x: 44.0023, y: 56.3271 })
///     .with_category("History")
///     .with_rating(4.8)
///     .with_features(["Architecture", "Panoramic views"]);
///
/// assert_eq!(poi.name, "Kremlin");
/// assert_eq!(poi.category, "history");
/// assert_eq!(poi.features.len(), 2);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointOfInterest {
    /// Unique name, used as the catalog key.
    pub name: String,
    /// Geospatial position.
    pub location: Coord<f64>,
    /// Lowercase free-text category.
    #[cfg_attr(feature = "serde", serde(default))]
    pub category: String,
    /// Rating, conventionally in `0.0..=5.0`.
    #[cfg_attr(feature = "serde", serde(default = "default_rating"))]
    pub rating: f64,
    /// Suggested visit duration in hours.
    #[cfg_attr(feature = "serde", serde(default = "default_visit_time_hours"))]
    pub visit_time_hours: f64,
    /// Free-text description.
    #[cfg_attr(feature = "serde", serde(default))]
    pub description: String,
    /// Ordered free-text features, e.g. "Panoramic views".
    #[cfg_attr(feature = "serde", serde(default))]
    pub features: Vec<String>,
}

#[cfg(feature = "serde")]
const fn default_rating() -> f64 {
    DEFAULT_RATING
}

#[cfg(feature = "serde")]
const fn default_visit_time_hours() -> f64 {
    DEFAULT_VISIT_TIME_HOURS
}

impl PointOfInterest {
    /// Construct a `PointOfInterest` with default rating and visit time and
    /// no descriptive metadata.
    ///
    /// # Examples
    /// ```
    /// use geo::Coord;
    /// use promenade_core::{DEFAULT_RATING, PointOfInterest};
    ///
    /// let poi = PointOfInterest::new("Fair", Coord { x: 43.975, y: 56.335 });
    /// assert_eq!(poi.rating, DEFAULT_RATING);
    /// assert!(poi.features.is_empty());
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, location: Coord<f64>) -> Self {
        Self {
            name: name.into(),
            location,
            category: String::new(),
            rating: DEFAULT_RATING,
            visit_time_hours: DEFAULT_VISIT_TIME_HOURS,
            description: String::new(),
            features: Vec::new(),
        }
    }

    /// Set the category, normalised to trimmed lowercase.
    #[must_use]
    pub fn with_category(mut self, category: &str) -> Self {
        self.category = category.trim().to_lowercase();
        self
    }

    /// Set the rating.
    #[must_use]
    pub const fn with_rating(mut self, rating: f64) -> Self {
        self.rating = rating;
        self
    }

    /// Set the suggested visit duration in hours.
    #[must_use]
    pub const fn with_visit_time_hours(mut self, hours: f64) -> Self {
        self.visit_time_hours = hours;
        self
    }

    /// Set the description.
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Replace the feature list.
    #[must_use]
    pub fn with_features<I, S>(mut self, features: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.features = features.into_iter().map(Into::into).collect();
        self
    }
}

/// Geographic envelope that catalog entries must fall within.
///
/// Ingestion uses it to reject entries outside the target city; the route
/// optimizer assumes every catalog coordinate already satisfies it.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use promenade_core::CityBounds;
///
/// let bounds = CityBounds::default();
/// assert!(bounds.contains(Coord { x: 44.0, y: 56.33 }));
/// assert!(!bounds.contains(Coord { x: 37.6, y: 55.75 }));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CityBounds {
    rect: Rect<f64>,
}

impl CityBounds {
    /// Build bounds from two opposite corners; corners are normalised.
    #[must_use]
    pub fn new(corner: Coord<f64>, opposite: Coord<f64>) -> Self {
        Self {
            rect: Rect::new(corner, opposite),
        }
    }

    /// Whether `location` lies inside the bounds. Boundary points count as
    /// inside.
    #[must_use]
    pub fn contains(&self, location: Coord<f64>) -> bool {
        self.rect.intersects(&location)
    }

    /// Underlying rectangle in lon/lat space.
    #[must_use]
    pub const fn rect(&self) -> Rect<f64> {
        self.rect
    }
}

impl Default for CityBounds {
    /// Nizhny Novgorod: latitude 56.0 to 57.0, longitude 43.0 to 45.0.
    fn default() -> Self {
        Self::new(Coord { x: 43.0, y: 56.0 }, Coord { x: 45.0, y: 57.0 })
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

    #[test]
    fn new_applies_defaults() {
        let poi = PointOfInterest::new("Stairs", Coord { x: 44.0125, y: 56.33 });
        assert_eq!(poi.category, "");
        assert!((poi.rating - DEFAULT_RATING).abs() < f64::EPSILON);
        assert!((poi.visit_time_hours - DEFAULT_VISIT_TIME_HOURS).abs() < f64::EPSILON);
    }

    #[test]
    fn category_is_lowercased() {
        let poi = PointOfInterest::new("Park", Coord { x: 43.99, y: 56.31 }).with_category(" Park ");
        assert_eq!(poi.category, "park");
    }

    #[rstest]
    #[case(Coord { x: 43.0, y: 56.0 })]
    #[case(Coord { x: 45.0, y: 57.0 })]
    #[case(Coord { x: 44.0, y: 56.5 })]
    fn default_bounds_include(#[case] location: Coord<f64>) {
        assert!(CityBounds::default().contains(location));
    }

    #[rstest]
    #[case(Coord { x: 42.999, y: 56.5 })]
    #[case(Coord { x: 45.001, y: 56.5 })]
    #[case(Coord { x: 44.0, y: 55.999 })]
    #[case(Coord { x: 44.0, y: 57.001 })]
    fn default_bounds_exclude(#[case] location: Coord<f64>) {
        assert!(!CityBounds::default().contains(location));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn deserialising_fills_defaults() {
        let json = r#"{"name":"Embankment","location":{"x":43.995,"y":56.332}}"#;
        let poi: PointOfInterest = serde_json::from_str(json).expect("valid poi json");
        assert!((poi.rating - DEFAULT_RATING).abs() < f64::EPSILON);
        assert!((poi.visit_time_hours - DEFAULT_VISIT_TIME_HOURS).abs() < f64::EPSILON);
        assert!(poi.features.is_empty());
    }
}
