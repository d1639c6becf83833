//! Property tests for push against the fake remote.

use proptest::prelude::*;
use transync_catalog::normalize_key_name;
use transync_engine::{Method, SyncConfig};
use transync_testkit::prelude::*;

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn discovery_reads_every_page_once(existing in 0usize..40, page_size in 1u32..8) {
        let remote = FakeRemote::shared();
        for i in 0..existing {
            remote.add_key(&format!("key.{i:03}"));
        }
        let engine = fake_engine_with(&remote, SyncConfig::new().with_page_size(page_size));
        engine.push(&bag_of(vec![sample_catalog("en")])).unwrap();

        let pages = existing.div_ceil(page_size as usize).max(1);
        prop_assert_eq!(remote.count(Method::Get, "keys"), pages);
    }

    #[test]
    fn created_keys_are_normalized(catalog in catalog_strategy("en", 12)) {
        let remote = FakeRemote::shared();
        let engine = fake_engine(&remote);
        engine.push(&bag_of(vec![catalog.clone()])).unwrap();

        let mut expected: Vec<String> = catalog.keys().map(normalize_key_name).collect();
        expected.sort();
        expected.dedup();

        let mut created: Vec<String> = remote.keys().into_iter().map(|(_, name)| name).collect();
        created.sort();
        prop_assert_eq!(created, expected);
    }

    #[test]
    fn second_push_creates_no_keys(catalog in catalog_strategy("de", 12)) {
        let remote = FakeRemote::shared();
        let engine = fake_engine(&remote);
        let bag = bag_of(vec![catalog]);

        engine.push(&bag).unwrap();
        let keys_after_first = remote.keys();
        remote.clear_requests();

        engine.push(&bag).unwrap();
        prop_assert_eq!(remote.count(Method::Post, "keys"), 0);
        prop_assert_eq!(remote.keys(), keys_after_first);
    }
}
