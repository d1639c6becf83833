//! Test fixtures and engine helpers.

use crate::fake_remote::{FakeRemote, FAKE_BASE_URL};
use std::sync::Arc;
use transync_catalog::{Catalog, CatalogBag, SimpleJsonFormat};
use transync_engine::{Endpoint, SyncConfig, SyncEngine, DEFAULT_TIMEOUT};

/// Engine type used against a shared [`FakeRemote`].
pub type FakeEngine = SyncEngine<Arc<FakeRemote>, SimpleJsonFormat>;

/// Returns the endpoint the fake remote pretends to be.
pub fn test_endpoint() -> Endpoint {
    Endpoint::new(FAKE_BASE_URL, "test-token", DEFAULT_TIMEOUT).expect("valid fake endpoint")
}

/// Returns a small catalog with three keys.
pub fn sample_catalog(locale: &str) -> Catalog {
    Catalog::new(locale)
        .with_translation("greeting", format!("Hello ({locale})"))
        .with_translation("farewell", format!("Goodbye ({locale})"))
        .with_translation("form.submit", format!("Submit ({locale})"))
}

/// Collects catalogs into a bag.
pub fn bag_of(catalogs: Vec<Catalog>) -> CatalogBag {
    catalogs.into_iter().collect()
}

/// Creates an engine talking to `remote` with the `simple_json` format.
pub fn fake_engine(remote: &Arc<FakeRemote>) -> FakeEngine {
    fake_engine_with(remote, SyncConfig::new())
}

/// Creates an engine talking to `remote` with a custom configuration.
pub fn fake_engine_with(remote: &Arc<FakeRemote>, config: SyncConfig) -> FakeEngine {
    SyncEngine::with_config(test_endpoint(), Arc::clone(remote), SimpleJsonFormat, config)
}
