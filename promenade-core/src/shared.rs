//! Shared catalog with copy-on-write snapshots.
//!
//! Readers take an `Arc<Catalog>` snapshot without locking and keep using it
//! for a whole request. Writers publish a modified copy atomically, so a
//! request never observes a half-updated entry.

use std::sync::Arc;

use arc_swap::ArcSwap;

use crate::Catalog;

/// Catalog shared between concurrent sessions.
///
/// # Examples
/// ```
/// use geo::Coord;
/// use promenade_core::{Catalog, PointOfInterest, SharedCatalog};
///
/// let catalog: Catalog =
///     std::iter::once(PointOfInterest::new("Fair", Coord { x: 43.975, y: 56.335 })).collect();
/// let shared = SharedCatalog::new(catalog);
///
/// let before = shared.snapshot();
/// shared.update(|catalog| {
///     catalog.set_rating("Fair", 4.9);
/// });
///
/// assert_eq!(before.get("Fair").map(|p| p.rating), Some(4.0));
/// assert_eq!(shared.snapshot().get("Fair").map(|p| p.rating), Some(4.9));
/// ```
#[derive(Debug)]
pub struct SharedCatalog {
    current: ArcSwap<Catalog>,
}

impl SharedCatalog {
    /// Wrap an initial catalog.
    #[must_use]
    pub fn new(catalog: Catalog) -> Self {
        Self {
            current: ArcSwap::from_pointee(catalog),
        }
    }

    /// Return the current catalog snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<Catalog> {
        self.current.load_full()
    }

    /// Apply `edit` to a copy of the current catalog and publish the result.
    ///
    /// Concurrent updates are retried against the latest catalog, so `edit`
    /// may run more than once and must not have side effects.
    pub fn update<F>(&self, edit: F)
    where
        F: Fn(&mut Catalog),
    {
        self.current.rcu(|current| {
            let mut next = Catalog::clone(current);
            edit(&mut next);
            next
        });
        log::debug!("published catalog update");
    }

    /// Replace the catalog wholesale.
    pub fn replace(&self, catalog: Catalog) {
        self.current.store(Arc::new(catalog));
    }
}

impl Default for SharedCatalog {
    fn default() -> Self {
        Self::new(Catalog::new())
    }
}

impl From<Catalog> for SharedCatalog {
    fn from(catalog: Catalog) -> Self {
        Self::new(catalog)
    }
}
