//! Catalog decoding seam.

use crate::catalog::Catalog;
use crate::error::CatalogResult;

/// Decodes downloaded content into a catalog.
///
/// Implement this trait to support the interchange format selected on the
/// engine (XLIFF, JSON, etc.). Implementations must be pure: the same input
/// always yields the same catalog.
pub trait CatalogLoader: Send + Sync {
    /// Decodes `content` into a catalog for the given locale and domain.
    fn load(&self, content: &str, locale: &str, domain: &str) -> CatalogResult<Catalog>;

    /// Returns the download format selector this loader decodes, if known.
    fn format(&self) -> Option<&str> {
        None
    }
}

impl<L: CatalogLoader + ?Sized> CatalogLoader for &L {
    fn load(&self, content: &str, locale: &str, domain: &str) -> CatalogResult<Catalog> {
        (**self).load(content, locale, domain)
    }

    fn format(&self) -> Option<&str> {
        (**self).format()
    }
}

impl<L: CatalogLoader + ?Sized> CatalogLoader for Box<L> {
    fn load(&self, content: &str, locale: &str, domain: &str) -> CatalogResult<Catalog> {
        (**self).load(content, locale, domain)
    }

    fn format(&self) -> Option<&str> {
        (**self).format()
    }
}
