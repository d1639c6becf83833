//! Push command implementation.

use super::{catalog_dir, ProviderOptions};
use std::path::Path;
use tracing::{info, warn};
use transync_engine::TranslationProvider;

/// Outcome of one push, as reported by the provider.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushSummary {
    /// Catalogs read from the directory.
    pub catalogs: usize,
    /// Translations submitted.
    pub submitted: u64,
    /// Keys created remotely.
    pub keys_created: u64,
    /// Keys whose creation failed.
    pub key_failures: u64,
    /// Translations the remote accepted.
    pub translations_pushed: u64,
    /// Translations the remote rejected.
    pub translation_failures: u64,
}

/// Reads the catalogs of `dir` and pushes them.
pub fn run(
    options: &ProviderOptions,
    dir: &Path,
    locales: &[String],
    domains: &[String],
) -> Result<(), Box<dyn std::error::Error>> {
    let provider = options.provider()?;
    let summary = execute(provider.as_ref(), dir, locales, domains)?;

    println!(
        "✓ Pushed {} of {} translation(s) from {} catalog(s)",
        summary.translations_pushed, summary.submitted, summary.catalogs
    );
    println!("  Keys created: {}", summary.keys_created);
    if summary.key_failures > 0 || summary.translation_failures > 0 {
        println!(
            "  Failures: {} key(s), {} translation(s)",
            summary.key_failures, summary.translation_failures
        );
    }
    Ok(())
}

fn execute(
    provider: &dyn TranslationProvider,
    dir: &Path,
    locales: &[String],
    domains: &[String],
) -> Result<PushSummary, Box<dyn std::error::Error>> {
    let bag = catalog_dir::read_bag(dir, locales, domains)?;
    if bag.is_empty() {
        return Err(format!("No catalogs found in {:?}", dir).into());
    }

    info!("Pushing {} catalog(s) from {:?}", bag.len(), dir);
    let before = provider.stats();
    provider.push(&bag)?;
    let after = provider.stats();

    let summary = PushSummary {
        catalogs: bag.len(),
        submitted: bag.iter().map(|catalog| catalog.len() as u64).sum(),
        keys_created: after.keys_created - before.keys_created,
        key_failures: after.key_failures - before.key_failures,
        translations_pushed: after.translations_pushed - before.translations_pushed,
        translation_failures: after.translation_failures - before.translation_failures,
    };
    if summary.key_failures > 0 || summary.translation_failures > 0 {
        warn!(
            key_failures = summary.key_failures,
            translation_failures = summary.translation_failures,
            "Push finished with failures"
        );
    }
    Ok(summary)
}
