//! Catalog directory layout.
//!
//! Each catalog is stored as `<domain>.<locale>.json` in `simple_json`
//! format. Locales may not contain dots; domains may.

use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;
use transync_catalog::{CatalogBag, CatalogLoader, SimpleJsonFormat};

/// File extension of catalog files.
pub const EXTENSION: &str = "json";

/// Returns the file name of a catalog.
pub fn file_name(domain: &str, locale: &str) -> String {
    format!("{domain}.{locale}.{EXTENSION}")
}

/// Splits a catalog file name into `(domain, locale)`.
pub fn parse_file_name(name: &str) -> Option<(&str, &str)> {
    let stem = name.strip_suffix(EXTENSION)?.strip_suffix('.')?;
    let (domain, locale) = stem.rsplit_once('.')?;
    if domain.is_empty() || locale.is_empty() {
        return None;
    }
    Some((domain, locale))
}

/// Reads every catalog file of `dir`.
///
/// Empty `locales` or `domains` filters accept everything. Files that do
/// not follow the naming scheme are skipped.
pub fn read_bag(
    dir: &Path,
    locales: &[String],
    domains: &[String],
) -> Result<CatalogBag, Box<dyn std::error::Error>> {
    if !dir.is_dir() {
        return Err(format!("Catalog directory not found: {:?}", dir).into());
    }

    let mut paths: Vec<PathBuf> = fs::read_dir(dir)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<Result<_, _>>()?;
    paths.sort();

    let accepts = |filter: &[String], value: &str| filter.is_empty() || filter.iter().any(|f| f == value);

    let mut bag = CatalogBag::new();
    for path in paths {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };
        let Some((domain, locale)) = parse_file_name(name) else {
            debug!("Skipping {:?}: not a catalog file", path);
            continue;
        };
        if !accepts(locales, locale) || !accepts(domains, domain) {
            continue;
        }

        let content = fs::read_to_string(&path)?;
        let catalog = SimpleJsonFormat
            .load(&content, locale, domain)
            .map_err(|e| format!("{}: {}", path.display(), e))?;
        debug!(locale, domain, keys = catalog.len(), "Read {:?}", path);
        bag.add_catalog(catalog);
    }
    Ok(bag)
}

/// Writes every catalog of `bag` into `dir`, creating it if needed.
///
/// Returns the written paths.
pub fn write_bag(dir: &Path, bag: &CatalogBag) -> Result<Vec<PathBuf>, Box<dyn std::error::Error>> {
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(bag.len());
    for catalog in bag {
        let path = dir.join(file_name(catalog.domain(), catalog.locale()));
        let mut content = SimpleJsonFormat.dump(catalog)?;
        content.push('\n');
        fs::write(&path, content)?;
        written.push(path);
    }
    Ok(written)
}
