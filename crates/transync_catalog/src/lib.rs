//! # Transync Catalog
//!
//! Translation catalog types and codecs for Transync.
//!
//! This crate provides:
//! - `TranslationKey` and key name normalization
//! - `Catalog` for one locale within one domain
//! - `CatalogBag` for exchanging many catalogs at once
//! - `RemoteKeyIndex` for mapping key names onto remote identifiers
//! - The `CatalogLoader` seam and the `simple_json` codec
//!
//! This is a pure data crate with no network I/O.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod bag;
mod catalog;
mod error;
mod index;
mod json;
mod key;
mod loader;

pub use bag::CatalogBag;
pub use catalog::{Catalog, DEFAULT_DOMAIN};
pub use error::{CatalogError, CatalogResult};
pub use index::RemoteKeyIndex;
pub use json::SimpleJsonFormat;
pub use key::{normalize_key_name, TranslationKey};
pub use loader::CatalogLoader;
