//! # Transync Engine
//!
//! Synchronizes local translation catalogs with a Phrase-compatible
//! translation management service.
//!
//! This crate provides:
//! - Connection parameters, DSN parsing and endpoint resolution
//! - HTTP transport abstraction with a blocking `reqwest` implementation
//! - Batch dispatch with optional retry of transient failures
//! - The sync engine: pull, push, and (unsupported) delete
//!
//! ## Architecture
//!
//! Push is a **create-then-populate** model:
//! 1. Discover the keys the remote already has (paginated)
//! 2. Create the missing keys
//! 3. Post every translation against its remote key id
//!
//! ## Key Invariants
//!
//! - Key discovery runs from scratch on every push
//! - Key names are trimmed and lower-cased before creation
//! - A failed key or translation never aborts the rest of the batch
//! - A pull either returns every available catalog or fails as a whole
//! - Nothing is ever deleted or overwritten by key

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod dispatch;
mod endpoint;
mod engine;
mod error;
mod factory;
mod http;
mod links;
mod transport;

pub use config::{
    ConnectionParameters, RetryConfig, SyncConfig, DEFAULT_FILE_FORMAT, PROVIDER_SCHEME,
};
pub use dispatch::{dispatch_all, execute_with_retry};
pub use endpoint::{Endpoint, EndpointResolver, DEFAULT_HOST, DEFAULT_TIMEOUT};
pub use engine::{SyncEngine, SyncStats, TranslationProvider};
pub use error::{SyncError, SyncResult};
pub use factory::ProviderFactory;
pub use http::{HttpClient, HttpRequest, HttpResponse, Method, ReqwestClient, RequestBody};
pub use links::next_page;
pub use transport::MockHttpClient;
