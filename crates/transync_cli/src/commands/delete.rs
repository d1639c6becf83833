//! Delete command implementation.

use super::{catalog_dir, ProviderOptions};
use std::path::Path;
use transync_catalog::CatalogBag;
use transync_engine::TranslationProvider;

/// Asks the provider to delete the keys of the catalogs in `dir`.
///
/// The Phrase provider does not support deletion, so this reports an error.
pub fn run(options: &ProviderOptions, dir: Option<&Path>) -> Result<(), Box<dyn std::error::Error>> {
    let provider = options.provider()?;
    execute(provider.as_ref(), dir)?;
    println!("✓ Deleted");
    Ok(())
}

fn execute(
    provider: &dyn TranslationProvider,
    dir: Option<&Path>,
) -> Result<(), Box<dyn std::error::Error>> {
    let bag = match dir {
        Some(dir) => catalog_dir::read_bag(dir, &[], &[])?,
        None => CatalogBag::new(),
    };
    provider.delete(&bag)?;
    Ok(())
}
