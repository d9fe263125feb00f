#![allow(clippy::unwrap_used, clippy::expect_used)]

use jacl_core::subset_match;
use proptest::prelude::*;
use serde_json::{Map, Value};

fn arb_scalar() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(Value::from),
        "[a-z]{0,8}".prop_map(Value::String),
    ]
}

fn arb_json() -> impl Strategy<Value = Value> {
    arb_scalar().prop_recursive(3, 32, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4).prop_map(Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0..4)
                .prop_map(|m| Value::Object(m.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

fn arb_record() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map("[a-z]{1,4}", arb_json(), 0..5)
        .prop_map(|m| m.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_reflexive(x in arb_json()) {
        prop_assert!(subset_match(&x, &x));
    }

    #[test]
    fn prop_subset_asymmetry(base in arb_record(), extra in arb_json()) {
        let sub = Value::Object(base.clone());
        let mut wider = base;
        wider.insert("x_extra".to_string(), extra);
        let sup = Value::Object(wider);

        prop_assert!(subset_match(&sub, &sup));
        prop_assert!(!subset_match(&sup, &sub));
    }

    #[test]
    fn prop_dropping_a_key_keeps_subset(base in arb_record()) {
        let full = Value::Object(base.clone());
        let mut narrowed = base;
        let first = narrowed.keys().next().cloned();
        if let Some(k) = first {
            narrowed.remove(&k);
        }
        prop_assert!(subset_match(&Value::Object(narrowed), &full));
    }
}
