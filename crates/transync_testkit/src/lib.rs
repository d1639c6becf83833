//! # Transync Testkit
//!
//! Test utilities for Transync.
//!
//! This crate provides:
//! - `FakeRemote`, a stateful in-memory stand-in for the remote service
//! - Fixtures for endpoints, catalogs and engines
//! - Property-based test generators using proptest
//!
//! ## Usage
//!
//! ```rust,ignore
//! use transync_testkit::prelude::*;
//!
//! #[test]
//! fn push_creates_keys() {
//!     let remote = FakeRemote::shared();
//!     let engine = fake_engine(&remote);
//!     engine.push(&bag_of(vec![sample_catalog("en")])).unwrap();
//!     assert_eq!(remote.keys().len(), 3);
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fake_remote;
pub mod fixtures;
pub mod generators;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fake_remote::*;
    pub use crate::fixtures::*;
    pub use crate::generators::*;
}

pub use fake_remote::*;
pub use fixtures::*;
pub use generators::*;
