//! CLI command implementations.

pub mod catalog_dir;
pub mod delete;
pub mod endpoint;
pub mod pull;
pub mod push;

use transync_catalog::SimpleJsonFormat;
use transync_engine::{ProviderFactory, RetryConfig, SyncConfig, SyncResult, TranslationProvider};

/// Options shared by every command that talks to the provider.
#[derive(Debug, Clone)]
pub struct ProviderOptions {
    /// Provider DSN.
    pub dsn: String,
    /// Page size for key discovery.
    pub page_size: u32,
    /// Requests in flight at once.
    pub max_in_flight: usize,
    /// Attempts per request; `0` disables retries.
    pub retries: u32,
}

impl ProviderOptions {
    /// Returns a factory configured from the options.
    pub fn factory(&self) -> ProviderFactory {
        let retry = if self.retries == 0 {
            RetryConfig::no_retry()
        } else {
            RetryConfig::new(self.retries)
        };
        ProviderFactory::new().with_config(
            SyncConfig::new()
                .with_page_size(self.page_size)
                .with_max_in_flight(self.max_in_flight)
                .with_retry(retry),
        )
    }

    /// Creates the provider named by the DSN.
    pub fn provider(&self) -> SyncResult<Box<dyn TranslationProvider>> {
        let engine = self.factory().create(&self.dsn, SimpleJsonFormat)?;
        Ok(Box::new(engine))
    }
}
