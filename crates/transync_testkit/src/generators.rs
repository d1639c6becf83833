//! Property-based test generators using proptest.
//!
//! Provides strategies for generating catalogs whose key names exercise
//! normalization (mixed case, surrounding whitespace).

use proptest::prelude::*;
use transync_catalog::Catalog;

/// Strategy for generating already-normalized key names.
pub fn normalized_key_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-z][a-z0-9_.]{0,15}").expect("Invalid regex")
}

/// Strategy for generating raw key names: random case and padding.
pub fn raw_key_strategy() -> impl Strategy<Value = String> {
    (
        prop::string::string_regex("[a-zA-Z][a-zA-Z0-9_.]{0,15}").expect("Invalid regex"),
        prop::string::string_regex("[ \t]{0,2}").expect("Invalid regex"),
        prop::string::string_regex("[ \t]{0,2}").expect("Invalid regex"),
    )
        .prop_map(|(name, left, right)| format!("{left}{name}{right}"))
}

/// Strategy for generating translation content.
pub fn content_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[a-zA-Z0-9 ,.!?'%{}éàü]{0,40}").expect("Invalid regex")
}

/// Strategy for generating a catalog for `locale` with up to `max_keys` keys.
pub fn catalog_strategy(locale: &'static str, max_keys: usize) -> impl Strategy<Value = Catalog> {
    prop::collection::btree_map(raw_key_strategy(), content_strategy(), 0..=max_keys).prop_map(
        move |entries| {
            let mut catalog = Catalog::new(locale);
            catalog.extend(entries);
            catalog
        },
    )
}
