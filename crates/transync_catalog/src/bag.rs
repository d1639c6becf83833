//! Bags of catalogs.

use crate::catalog::Catalog;

/// An ordered collection of catalogs, at most one per `(locale, domain)`.
///
/// This is the unit exchanged with the sync engine in both directions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CatalogBag {
    catalogs: Vec<Catalog>,
}

impl CatalogBag {
    /// Creates an empty bag.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a catalog.
    ///
    /// If the bag already holds a catalog for the same locale and domain,
    /// the new translations are merged into it.
    pub fn add_catalog(&mut self, catalog: Catalog) {
        match self.catalogs.iter_mut().find(|c| c.same_target(&catalog)) {
            Some(existing) => existing.merge(&catalog),
            None => self.catalogs.push(catalog),
        }
    }

    /// Returns the catalog for a locale and domain.
    pub fn catalog(&self, locale: &str, domain: &str) -> Option<&Catalog> {
        self.catalogs
            .iter()
            .find(|c| c.locale() == locale && c.domain() == domain)
    }

    /// Returns all catalogs in insertion order.
    pub fn catalogs(&self) -> &[Catalog] {
        &self.catalogs
    }

    /// Iterates over catalogs in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Catalog> {
        self.catalogs.iter()
    }

    /// Returns the number of catalogs.
    pub fn len(&self) -> usize {
        self.catalogs.len()
    }

    /// Returns true if the bag holds no catalogs.
    pub fn is_empty(&self) -> bool {
        self.catalogs.is_empty()
    }

    /// Returns the distinct locales, in first-seen order.
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = Vec::new();
        for catalog in &self.catalogs {
            if !locales.contains(&catalog.locale()) {
                locales.push(catalog.locale());
            }
        }
        locales
    }

    /// Returns the distinct domains, in first-seen order.
    pub fn domains(&self) -> Vec<&str> {
        let mut domains: Vec<&str> = Vec::new();
        for catalog in &self.catalogs {
            if !domains.contains(&catalog.domain()) {
                domains.push(catalog.domain());
            }
        }
        domains
    }

    /// Adds every catalog of `other` into this bag.
    pub fn merge(&mut self, other: CatalogBag) {
        for catalog in other.catalogs {
            self.add_catalog(catalog);
        }
    }

    /// Returns the translations of this bag that are absent from `other`.
    ///
    /// Catalogs that end up empty are omitted.
    pub fn diff(&self, other: &CatalogBag) -> CatalogBag {
        self.filter_against(other, false)
    }

    /// Returns the translations of this bag whose keys also exist in `other`.
    ///
    /// Catalogs that end up empty are omitted.
    pub fn intersect(&self, other: &CatalogBag) -> CatalogBag {
        self.filter_against(other, true)
    }

    fn filter_against(&self, other: &CatalogBag, present: bool) -> CatalogBag {
        let mut result = CatalogBag::new();
        for catalog in &self.catalogs {
            let counterpart = other.catalog(catalog.locale(), catalog.domain());
            let mut filtered = catalog.clone();
            filtered.retain(|key| counterpart.is_some_and(|c| c.contains(key)) == present);
            if !filtered.is_empty() {
                result.add_catalog(filtered);
            }
        }
        result
    }
}

impl<'a> IntoIterator for &'a CatalogBag {
    type Item = &'a Catalog;
    type IntoIter = std::slice::Iter<'a, Catalog>;

    fn into_iter(self) -> Self::IntoIter {
        self.catalogs.iter()
    }
}

impl IntoIterator for CatalogBag {
    type Item = Catalog;
    type IntoIter = std::vec::IntoIter<Catalog>;

    fn into_iter(self) -> Self::IntoIter {
        self.catalogs.into_iter()
    }
}

impl FromIterator<Catalog> for CatalogBag {
    fn from_iter<I: IntoIterator<Item = Catalog>>(iter: I) -> Self {
        let mut bag = CatalogBag::new();
        for catalog in iter {
            bag.add_catalog(catalog);
        }
        bag
    }
}
