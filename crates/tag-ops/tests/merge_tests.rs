/// Tests for map merging through `TagOps::merge_to_map*` and `MapMerger`.

use serde_json::json;
use tag_ops::{
    CompoundView, DataResult, DynamicOps, JsonOps, MapMerger, OpsError, Shape, TagOps,
};
use tag_tree::{Compound, Value};

fn key(s: &str) -> Value {
    Value::from(s)
}

// ============================================================================
// Multi-entry merge
// ============================================================================

#[test]
fn non_string_key_is_skipped_and_reported() {
    let result = TagOps.merge_to_map_entries(
        &Value::Compound(Compound::new()),
        vec![
            (key("a"), Value::Int(1)),
            (Value::Int(42), Value::Int(2)),
            (key("b"), Value::Int(3)),
        ],
    );
    assert!(result.is_error());
    assert_eq!(
        result.error(),
        Some(&OpsError::NonStringKeys(vec!["42".to_string()]))
    );
    assert_eq!(
        result.error().unwrap().to_string(),
        "some keys are not strings: [42]"
    );
    assert_eq!(
        result.partial(),
        Some(Value::Compound(Compound::new().with("a", 1).with("b", 3)))
    );
}

#[test]
fn every_rejected_key_is_listed() {
    let result = TagOps.merge_to_map_entries(
        &Value::End,
        vec![
            (Value::Byte(1), Value::Int(1)),
            (key("ok"), Value::Int(2)),
            (Value::List(vec![]), Value::Int(3)),
        ],
    );
    assert_eq!(
        result.error(),
        Some(&OpsError::NonStringKeys(vec!["1b".to_string(), "[]".to_string()]))
    );
    assert_eq!(
        result.result_or_partial(),
        Some(Value::Compound(Compound::new().with("ok", 2)))
    );
}

#[test]
fn all_string_keys_succeed() {
    let base = Value::Compound(Compound::new().with("x", 0));
    let result = TagOps.merge_to_map_entries(
        &base,
        vec![(key("y"), Value::Int(1)), (key("z"), Value::Int(2))],
    );
    assert_eq!(
        result,
        tag_ops::DataResult::success(Value::Compound(
            Compound::new().with("x", 0).with("y", 1).with("z", 2)
        ))
    );
    assert_eq!(base, Value::Compound(Compound::new().with("x", 0)));
}

#[test]
fn later_duplicate_overwrites_in_first_position() {
    let result = TagOps
        .merge_to_map_entries(
            &Value::End,
            vec![
                (key("a"), Value::Int(1)),
                (key("b"), Value::Int(2)),
                (key("a"), Value::Int(3)),
            ],
        )
        .result()
        .unwrap();
    assert_eq!(
        result,
        Value::Compound(Compound::new().with("a", 3).with("b", 2))
    );
}

#[test]
fn end_merges_into_fresh_compound() {
    let result = TagOps
        .merge_to_map_entries(&Value::End, vec![(key("a"), Value::End)])
        .result()
        .unwrap();
    assert_eq!(result, Value::Compound(Compound::new().with("a", Value::End)));
}

#[test]
fn non_map_start_fails_with_input_as_partial() {
    let input = Value::List(vec![]);
    let result = TagOps.merge_to_map_entries(&input, vec![(key("a"), Value::Int(1))]);
    assert_eq!(
        result.error(),
        Some(&OpsError::Mismatch {
            expected: Shape::Map,
            found: "[]".to_string(),
        })
    );
    assert_eq!(result.partial(), Some(input));
}

#[test]
fn merge_from_map_like_view() {
    let source = Compound::new().with("b", 2).with("c", 3);
    let base = Value::Compound(Compound::new().with("a", 1).with("b", 0));
    let result = TagOps
        .merge_to_map_like(&base, &CompoundView::new(&source))
        .result()
        .unwrap();
    assert_eq!(
        result,
        Value::Compound(Compound::new().with("a", 1).with("b", 2).with("c", 3))
    );
}

#[test]
fn no_entries_onto_scalar_still_fails() {
    let result = TagOps.merge_to_map_entries(&Value::Int(5), Vec::new());
    assert_eq!(
        result,
        DataResult::fail_with_partial(OpsError::mismatch(Shape::Map, "5"), Value::Int(5))
    );
}

// ============================================================================
// JSON objects
// ============================================================================

#[test]
fn json_no_entries_onto_scalar_fails() {
    let result = JsonOps.merge_to_map_entries(&json!(5), Vec::new());
    assert_eq!(
        result,
        DataResult::fail_with_partial(OpsError::mismatch(Shape::Map, "5"), json!(5))
    );
}

#[test]
fn json_scalar_start_reports_one_mismatch() {
    let entries = vec![
        (json!("a"), json!(1)),
        (json!("b"), json!(2)),
        (json!("c"), json!(3)),
    ];
    let result = JsonOps.merge_to_map_entries(&json!(5), entries);
    assert_eq!(result.error(), Some(&OpsError::mismatch(Shape::Map, "5")));
    assert_eq!(result.partial(), Some(json!(5)));
}

#[test]
fn json_non_string_keys_are_collected() {
    let result = JsonOps.merge_to_map_entries(
        &json!({"a": 1}),
        vec![
            (json!(42), json!(2)),
            (json!("b"), json!(3)),
            (json!(true), json!(4)),
        ],
    );
    assert_eq!(
        result.error(),
        Some(&OpsError::NonStringKeys(vec!["42".into(), "true".into()]))
    );
    assert_eq!(result.partial(), Some(json!({"a": 1, "b": 3})));
}

#[test]
fn json_entries_onto_null_build_object() {
    let result = JsonOps.merge_to_map_entries(
        &json!(null),
        vec![(json!("x"), json!([1])), (json!("y"), json!(null))],
    );
    assert_eq!(result, DataResult::success(json!({"x": [1], "y": null})));
}

// ============================================================================
// Single-entry merge
// ============================================================================

#[test]
fn single_entry_merge_puts_key() {
    let result = TagOps
        .merge_to_map(&Value::End, key("k"), Value::Long(5))
        .result()
        .unwrap();
    assert_eq!(result, Value::Compound(Compound::new().with("k", 5i64)));
}

#[test]
fn single_entry_non_string_key_returns_map_unchanged() {
    let map = Value::Compound(Compound::new().with("a", 1));
    let result = TagOps.merge_to_map(&map, Value::Byte(1), Value::Int(2));
    assert_eq!(
        result.error(),
        Some(&OpsError::NonStringKey("1b".to_string()))
    );
    assert_eq!(result.partial(), Some(map));
}

#[test]
fn single_entry_merge_onto_scalar_fails() {
    let result = TagOps.merge_to_map(&Value::Int(5), key("a"), Value::Int(1));
    assert_eq!(result.error().unwrap().to_string(), "not a map: 5");
    assert_eq!(result.partial(), Some(Value::Int(5)));
}

// ============================================================================
// MapMerger directly
// ============================================================================

#[test]
fn merger_tracks_rejected_keys() {
    let mut merger = MapMerger::new(&Value::End).unwrap();
    merger
        .accept(key("a"), Value::Int(1))
        .accept(Value::Double(2.0), Value::Int(2));
    assert_eq!(merger.rejected(), &[Value::Double(2.0)]);
    assert!(merger.finish().is_error());
}

#[test]
fn merger_is_only_built_for_map_shapes() {
    assert!(MapMerger::new(&Value::End).is_some());
    assert!(MapMerger::new(&Value::Compound(Compound::new())).is_some());
    assert!(MapMerger::new(&Value::List(vec![])).is_none());
    assert!(MapMerger::new(&Value::from("x")).is_none());
}
