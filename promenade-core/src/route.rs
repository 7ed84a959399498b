//! Ordered walks through points of interest.

/// An ordered path through catalogued points of interest, by name.
///
/// Routes are produced fresh per request and never contain a name twice.
///
/// # Examples
/// ```
/// use promenade_core::Route;
///
/// let route = Route::new(vec!["Kremlin".into(), "Stairs".into()]);
/// assert_eq!(route.len(), 2);
/// assert_eq!(route.names(), ["Kremlin", "Stairs"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Route {
    names: Vec<String>,
}

impl Route {
    /// Construct a route from names in visiting order.
    #[must_use]
    pub const fn new(names: Vec<String>) -> Self {
        Self { names }
    }

    /// Construct an empty route.
    ///
    /// # Examples
    /// ```
    /// use promenade_core::Route;
    ///
    /// assert!(Route::empty().is_empty());
    /// ```
    #[must_use]
    pub const fn empty() -> Self {
        Self::new(Vec::new())
    }

    /// Names in visiting order.
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Number of stops.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.names.len()
    }

    /// Whether the route has no stops. Callers report "no itinerary
    /// possible" in that case.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Consume the route, returning the names.
    #[must_use]
    pub fn into_names(self) -> Vec<String> {
        self.names
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.names.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_preserves_order() {
        let route = Route::new(vec!["b".into(), "a".into()]);
        assert_eq!(route.names(), ["b", "a"]);
        assert_eq!(route.into_names(), vec!["b".to_owned(), "a".to_owned()]);
    }

    #[test]
    fn empty_route_has_no_stops() {
        let route = Route::empty();
        assert!(route.is_empty());
        assert_eq!(route.len(), 0);
    }
}
