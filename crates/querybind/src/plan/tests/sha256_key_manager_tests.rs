use crate::plan::QueryPlanKeyManager;
use crate::plan::Sha256KeyManager;
use proptest::prelude::*;

#[test]
fn key_carries_schema_identity_prefix() {
    let key = Sha256KeyManager::new().create_key("bakery-v1", "{ hello }", None);
    let (prefix, digest) = key.split_once(":sha256:").unwrap();
    assert_eq!(prefix, "bakery-v1");
    assert_eq!(digest.len(), 64);
    assert!(digest.chars().all(|c| c.is_ascii_hexdigit()));
}

#[test]
fn missing_operation_name_differs_from_empty_name() {
    let keys = Sha256KeyManager::new();
    assert_ne!(
        keys.create_key("s", "{ hello }", None),
        keys.create_key("s", "{ hello }", Some("")),
    );
}

#[test]
fn inputs_do_not_bleed_into_each_other() {
    let keys = Sha256KeyManager::new();
    assert_ne!(
        keys.create_key("ab", "c", None),
        keys.create_key("a", "bc", None),
    );
    assert_ne!(
        keys.create_key("s", "{ a }", Some("b")),
        keys.create_key("s", "{ a }b", None),
    );
}

proptest! {
    #[test]
    fn keys_are_deterministic(
        identity in "[a-z0-9-]{1,16}",
        query in ".{0,64}",
        operation in proptest::option::of("[A-Za-z_][A-Za-z0-9_]{0,12}"),
    ) {
        let keys = Sha256KeyManager::new();
        prop_assert_eq!(
            keys.create_key(&identity, &query, operation.as_deref()),
            keys.create_key(&identity, &query, operation.as_deref()),
        );
    }

    #[test]
    fn changing_any_input_changes_the_key(
        identity in "[a-z0-9-]{1,16}",
        query in ".{0,64}",
        operation in "[A-Za-z_][A-Za-z0-9_]{0,12}",
    ) {
        let keys = Sha256KeyManager::new();
        let key = keys.create_key(&identity, &query, Some(&operation));
        prop_assert_ne!(&key, &keys.create_key(&format!("{identity}x"), &query, Some(&operation)));
        prop_assert_ne!(&key, &keys.create_key(&identity, &format!("{query} "), Some(&operation)));
        prop_assert_ne!(&key, &keys.create_key(&identity, &query, Some(&format!("{operation}2"))));
        prop_assert_ne!(&key, &keys.create_key(&identity, &query, None));
    }
}
