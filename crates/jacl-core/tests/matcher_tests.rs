#![allow(clippy::unwrap_used, clippy::expect_used)]

use jacl_core::{cmp, cmp_nil, cmps, key, Matcher};
use serde::Serialize;
use serde_json::json;
use std::collections::BTreeMap;

#[derive(Serialize)]
struct Account {
    id: u32,
    name: String,
    tags: Vec<String>,
}

fn account(id: u32, name: &str) -> Account {
    Account {
        id,
        name: name.to_string(),
        tags: vec!["x".to_string()],
    }
}

#[test]
fn test_single_partial_record_against_typed_struct() {
    let m = cmp(&json!({"name": "alice"})).unwrap();
    assert!(m.cmp(&account(1, "alice")).is_ok());

    let err = m.cmp(&account(1, "bob")).unwrap_err();
    assert!(err.is_comparison());
    assert_eq!(
        err.to_string(),
        r#"have {"id":1,"name":"bob","tags":["x"]} want {"name":"alice"}"#
    );
}

#[test]
fn test_single_different_concrete_types_same_shape() {
    let mut expected = BTreeMap::new();
    expected.insert("id", 7);
    let m = cmp(&expected).unwrap();
    assert!(m.cmp(&account(7, "a")).is_ok());
}

#[test]
fn test_single_nested_list_is_positional() {
    let m = cmp(&json!({"tags": ["x"]})).unwrap();
    assert!(m.cmp(&json!({"tags": ["x"]})).is_ok());
    assert!(m.cmp(&json!({"tags": ["x", "y"]})).unwrap_err().is_comparison());
}

#[test]
fn test_single_scalar() {
    let m = cmp("a").unwrap();
    assert!(m.cmp("a").is_ok());
    assert!(m.cmp(&String::from("a")).is_ok());
    assert_eq!(m.cmp("b").unwrap_err().to_string(), r#"have "b" want "a""#);
}

#[test]
fn test_single_record_against_non_record_cannot_be_evaluated() {
    let m = cmp(&json!({"a": 1})).unwrap();
    for actual in [json!("a"), json!(1), json!(true), json!([1])] {
        let err = m.cmp(&actual).unwrap_err();
        assert!(err.is_evaluation(), "{actual} gave {err}");
    }
    assert!(m.cmp(&Option::<u8>::None).unwrap_err().is_comparison());
}

#[test]
fn test_positional_list_length_mismatch() {
    let m = cmps().items(&["a", "b"]).build().unwrap();
    let err = m.cmp(&["a"]).unwrap_err();
    assert!(err.is_comparison());
    assert_eq!(err.to_string(), "have length 1 want length 2");
}

#[test]
fn test_positional_records_typed() {
    let m = cmps()
        .item(&json!({"id": 1}))
        .item(&json!({"id": 2, "name": "b"}))
        .build()
        .unwrap();
    assert!(m.cmp(&vec![account(1, "a"), account(2, "b")]).is_ok());
    assert!(m.cmp(&vec![account(2, "b"), account(1, "a")]).is_err());
}

#[test]
fn test_keyed_pairing_finds_out_of_order_match() {
    let m = cmps().func(key(["a"])).item(&json!({"a": "x"})).build().unwrap();
    assert!(m.cmp(&json!([{"a": "y"}, {"a": "x", "b": "z"}])).is_ok());
}

#[test]
fn test_keyed_pairing_rejects_missing_partner() {
    let m = cmps()
        .func(key(["a", "b"]))
        .item(&json!({"a": "d", "b": "e"}))
        .item(&json!({"a": "x", "b": "y"}))
        .build()
        .unwrap();
    let err = m.cmp(&json!([{"a": "x", "b": "y"}])).unwrap_err();
    assert!(err.is_comparison());
    assert_eq!(
        err.to_string(),
        r#"no match for key a,b: want {"a":"d","b":"e"}"#
    );
}

#[test]
fn test_keyed_pairing_typed_rows() {
    let m = cmps()
        .func(key(["id"]))
        .item(&json!({"id": 3, "name": "c"}))
        .item(&json!({"id": 1}))
        .build()
        .unwrap();
    let rows = vec![account(1, "a"), account(2, "b"), account(3, "c")];
    assert!(m.cmp(&rows).is_ok());

    let err = m.cmp(&vec![account(3, "z")]).unwrap_err();
    assert!(err.to_string().starts_with("have {\"id\":3"));
}

#[test]
fn test_absent_actual_collection() {
    assert!(cmps().build().unwrap().cmp(&Option::<Vec<u8>>::None).is_ok());
    assert!(cmps().item(&"a").build().unwrap().cmp(&Option::<Vec<u8>>::None).is_err());
}

#[test]
fn test_nil_matcher() {
    assert!(cmp_nil().cmp(&()).is_ok());
    assert!(cmp_nil().cmp(&json!({})).unwrap_err().is_comparison());
}

#[test]
fn test_matchers_are_reusable_across_threads() {
    let m: Matcher = cmps().func(key(["id"])).item(&json!({"id": 1})).build().unwrap();
    std::thread::scope(|s| {
        for _ in 0..4 {
            s.spawn(|| {
                assert!(m.cmp(&json!([{"id": 2}, {"id": 1}])).is_ok());
                assert!(m.cmp(&json!([{"id": 2}])).is_err());
            });
        }
    });
}
