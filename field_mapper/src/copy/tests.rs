//! Unit tests for the field-name copier and the copier seam.

use std::collections::BTreeMap;

use rstest::{fixture, rstest};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::{CopyOptions, FieldNameCopier, StructuralCopier};
use crate::{CopyError, FieldMap, FieldMapError, FieldMapper};

fn object(value: Value) -> FieldMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected an object, got {other}"),
    }
}

#[fixture]
fn no_aliases() -> BTreeMap<String, String> {
    BTreeMap::new()
}

#[rstest]
fn copies_matching_names_and_skips_banned(no_aliases: BTreeMap<String, String>) {
    let src = object(json!({"id": 1, "secret": "x", "name": "a"}));
    let mut dst = object(json!({"id": 0, "secret": "", "name": ""}));
    let banned = vec!["secret".to_owned()];
    let options = CopyOptions {
        banned_fields: &banned,
        alias_fields: &no_aliases,
    };
    assert!(FieldNameCopier.copy(&src, &mut dst, &options).is_ok());
    assert_eq!(Value::Object(dst), json!({"id": 1, "secret": "", "name": "a"}));
}

#[rstest]
fn aliases_redirect_the_destination_name() {
    let src = object(json!({"id": 9}));
    let mut dst = object(json!({"user_id": 0}));
    let aliases = BTreeMap::from([("id".to_owned(), "user_id".to_owned())]);
    let options = CopyOptions {
        banned_fields: &[],
        alias_fields: &aliases,
    };
    assert!(FieldNameCopier.copy(&src, &mut dst, &options).is_ok());
    assert_eq!(dst.get("user_id"), Some(&json!(9)));
    assert!(!dst.contains_key("id"));
}

#[rstest]
fn nested_objects_merge_by_name(no_aliases: BTreeMap<String, String>) {
    let src = object(json!({"audit": {"by": "ada"}}));
    let mut dst = object(json!({"audit": {"by": "", "at": 5}}));
    let options = CopyOptions {
        banned_fields: &[],
        alias_fields: &no_aliases,
    };
    assert!(FieldNameCopier.copy(&src, &mut dst, &options).is_ok());
    assert_eq!(Value::Object(dst), json!({"audit": {"by": "ada", "at": 5}}));
}

#[rstest]
fn names_missing_from_the_destination_are_not_written(no_aliases: BTreeMap<String, String>) {
    let src = object(json!({"name": "ada", "extra": 1, "audit": {"by": "ada", "note": "x"}}));
    let mut dst = object(json!({"name": "", "audit": {"by": ""}}));
    let options = CopyOptions {
        banned_fields: &[],
        alias_fields: &no_aliases,
    };
    assert!(FieldNameCopier.copy(&src, &mut dst, &options).is_ok());
    assert_eq!(Value::Object(dst), json!({"name": "ada", "audit": {"by": "ada"}}));
}

#[derive(Debug)]
struct Refuse;

impl StructuralCopier for Refuse {
    fn copy(&self, _: &FieldMap, _: &mut FieldMap, _: &CopyOptions<'_>) -> Result<(), CopyError> {
        Err("shapes are incompatible".into())
    }
}

#[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
struct Target {
    id: u32,
}

#[rstest]
fn copier_errors_propagate_verbatim() {
    let mut dst = Target { id: 3 };
    let Err(err) = FieldMapper::default().copy_struct_with(&Refuse, &Target { id: 1 }, &mut dst)
    else {
        panic!("refusing copier must fail");
    };
    assert!(matches!(err, FieldMapError::Delegate(_)));
    assert_eq!(err.to_string(), "shapes are incompatible");
    assert_eq!(dst, Target { id: 3 });
}

#[rstest]
fn copier_can_be_a_trait_object() {
    let copier: &dyn StructuralCopier = &FieldNameCopier;
    let mut dst = Target::default();
    assert!(
        FieldMapper::default()
            .copy_struct_with(copier, &Target { id: 4 }, &mut dst)
            .is_ok()
    );
    assert_eq!(dst, Target { id: 4 });
}
