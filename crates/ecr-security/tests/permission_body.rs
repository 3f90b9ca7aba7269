//! Dynamic-shape property of the permission request body.
//!
//! Permission names are server-defined: the body must accept any string
//! key without fixed-field validation, and entries must survive a
//! serialize/deserialize roundtrip unchanged.

use proptest::prelude::*;

use ecr_security::{PermissionEntry, PermissionRequestBody, PermissionValue};

fn permission_value() -> impl Strategy<Value = PermissionValue> {
    prop_oneof![
        Just(PermissionValue::Undefined),
        Just(PermissionValue::Allow),
        Just(PermissionValue::Deny),
    ]
}

// Keys avoid "identity", which is the one reserved field of the body.
fn permission_name() -> impl Strategy<Value = String> {
    "[A-Za-z][A-Za-z0-9_]{0,30}".prop_filter("reserved key", |s| s != "identity")
}

proptest! {
    #[test]
    fn arbitrary_permission_names_roundtrip(
        entries in proptest::collection::btree_map(permission_name(), permission_value(), 0..16),
        identity in proptest::option::of("/Root/IMS/[A-Za-z]{1,12}"),
    ) {
        let body = PermissionRequestBody {
            identity,
            permissions: entries
                .into_iter()
                .map(|(name, value)| (name, PermissionEntry::Value(value)))
                .collect(),
        };

        let json = serde_json::to_string(&body).unwrap();
        let back: PermissionRequestBody = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(back, body);
    }

    #[test]
    fn unknown_keys_are_never_rejected(
        name in permission_name(),
        raw in 0u8..=2,
    ) {
        let json = format!("{{\"{name}\":{raw}}}");
        let body: PermissionRequestBody = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(body.permissions.len(), 1);
        prop_assert!(body.permissions.contains_key(&name));
    }
}
