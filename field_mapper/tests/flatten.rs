//! Tests for breadth-first flattening of records.
#![allow(
    unfulfilled_lint_expectations,
    reason = "clippy::expect_used is denied globally; tests may not hit those branches"
)]
#![expect(
    clippy::expect_used,
    reason = "tests panic to surface mapping mistakes"
)]

use std::collections::BTreeMap;

use field_mapper::{FieldMap, FieldMapper};
use rstest::{fixture, rstest};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct Flat {
    id: u32,
    secret: &'static str,
    name: &'static str,
}

#[derive(Serialize)]
struct Embedded {
    a: u8,
    b: u8,
}

#[derive(Serialize)]
struct WithEmbedded {
    inner: Embedded,
    c: u8,
}

#[derive(Serialize)]
struct Deep {
    level: u8,
}

#[derive(Serialize)]
struct Middle {
    level: u8,
    deep: Box<Deep>,
}

#[derive(Serialize)]
struct Top<'a> {
    middle: &'a Middle,
    level: u8,
    note: Option<&'static str>,
}

#[derive(Serialize)]
struct Renamed {
    #[serde(rename = "user_id")]
    id: u32,
    #[serde(skip)]
    _cache: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    nickname: Option<String>,
}

#[derive(Serialize)]
struct Leaves {
    tags: Vec<&'static str>,
    labels: BTreeMap<&'static str, u8>,
    pointer: Option<Box<u8>>,
    missing: Option<Embedded>,
}

#[derive(Serialize)]
struct Empty {}

#[fixture]
fn no_filters() -> FieldMapper {
    FieldMapper::default()
}

fn flatten(mapper: &FieldMapper, record: &impl Serialize) -> Value {
    Value::Object(mapper.flatten(record).expect("record is a struct"))
}

fn keys(map: &FieldMap) -> Vec<&str> {
    map.keys().map(String::as_str).collect()
}

#[rstest]
fn ignored_fields_are_left_out() {
    let mapper = FieldMapper::new(["secret"], Vec::<String>::new());
    let record = Flat {
        id: 1,
        secret: "x",
        name: "a",
    };
    assert_eq!(flatten(&mapper, &record), json!({"id": 1, "name": "a"}));
}

#[rstest]
fn flat_records_keep_every_field(no_filters: FieldMapper) {
    let record = Flat {
        id: 1,
        secret: "x",
        name: "a",
    };
    assert_eq!(
        flatten(&no_filters, &record),
        json!({"id": 1, "secret": "x", "name": "a"})
    );
}

#[rstest]
fn embedded_structs_are_inlined(no_filters: FieldMapper) {
    let record = WithEmbedded {
        inner: Embedded { a: 1, b: 2 },
        c: 3,
    };
    let flat = no_filters.flatten(&record).expect("record is a struct");
    let mut names = keys(&flat);
    names.sort_unstable();
    assert_eq!(names, ["a", "b", "c"]);
}

#[rstest]
fn traversal_is_breadth_first(no_filters: FieldMapper) {
    let middle = Middle {
        level: 2,
        deep: Box::new(Deep { level: 3 }),
    };
    let top = Top {
        middle: &middle,
        level: 1,
        note: None,
    };
    let flat = no_filters.flatten(&top).expect("record is a struct");
    // `level` is written by Top, then Middle, then Deep: the deepest wins.
    assert_eq!(flat.get("level"), Some(&json!(3)));
    assert_eq!(keys(&flat), ["level", "note"]);
}

#[rstest]
fn sibling_order_follows_declaration(no_filters: FieldMapper) {
    let record = Flat {
        id: 1,
        secret: "x",
        name: "a",
    };
    let flat = no_filters.flatten(&record).expect("record is a struct");
    assert_eq!(keys(&flat), ["id", "secret", "name"]);
}

#[rstest]
fn serialised_names_are_the_keys(no_filters: FieldMapper) {
    let record = Renamed {
        id: 4,
        _cache: 9,
        nickname: None,
    };
    assert_eq!(flatten(&no_filters, &record), json!({"user_id": 4}));
}

#[rstest]
fn ignore_list_matches_serialised_names() {
    let mapper = FieldMapper::new(["user_id"], Vec::<String>::new());
    let record = Renamed {
        id: 4,
        _cache: 9,
        nickname: Some("ada".into()),
    };
    assert_eq!(flatten(&mapper, &record), json!({"nickname": "ada"}));
}

#[rstest]
fn non_struct_fields_are_leaves(no_filters: FieldMapper) {
    let record = Leaves {
        tags: vec!["x", "y"],
        labels: BTreeMap::from([("k", 1)]),
        pointer: Some(Box::new(5)),
        missing: None,
    };
    assert_eq!(
        flatten(&no_filters, &record),
        json!({"tags": ["x", "y"], "labels": {"k": 1}, "pointer": 5, "missing": null})
    );
}

#[rstest]
fn references_are_dereferenced(no_filters: FieldMapper) {
    let record = Flat {
        id: 1,
        secret: "x",
        name: "a",
    };
    let boxed = Box::new(&record);
    assert_eq!(flatten(&no_filters, &boxed), flatten(&no_filters, &record));
}

#[rstest]
fn empty_structs_flatten_to_an_empty_map(no_filters: FieldMapper) {
    assert_eq!(no_filters.flatten(&Empty {}), Some(FieldMap::new()));
}

#[rstest]
#[case(json!(1))]
#[case(json!("text"))]
#[case(json!([1, 2]))]
#[case(json!({"id": 1}))]
#[case(Value::Null)]
fn non_structs_yield_nothing(no_filters: FieldMapper, #[case] input: Value) {
    assert!(no_filters.flatten(&input).is_none());
}

#[rstest]
fn unrepresentable_leaves_yield_nothing(no_filters: FieldMapper) {
    #[derive(Serialize)]
    struct BadKeys {
        table: BTreeMap<(u8, u8), u8>,
    }
    let record = BadKeys {
        table: BTreeMap::from([((1, 2), 3)]),
    };
    assert!(no_filters.flatten(&record).is_none());
}
