//! Pull command implementation.

use super::{catalog_dir, ProviderOptions};
use std::path::Path;
use tracing::info;
use transync_engine::TranslationProvider;

/// Downloads catalogs and writes them into `dir`.
pub fn run(
    options: &ProviderOptions,
    locales: &[String],
    domains: &[String],
    dir: &Path,
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = options.provider()?;
    let written = execute(provider.as_ref(), locales, domains, dir)?;

    println!("✓ Pulled {} catalog(s)", written.len());
    for path in &written {
        println!("  {}", path.display());
    }
    Ok(())
}

fn execute(
    provider: &dyn TranslationProvider,
    locales: &[String],
    domains: &[String],
    dir: &Path,
) -> Result<Vec<std::path::PathBuf>, Box<dyn std::error::Error>> {
    info!("Pulling {} locale(s) into {:?}", locales.len(), dir);
    let bag = provider.pull(domains, locales)?;
    catalog_dir::write_bag(dir, &bag)
}
