/// Tests for list merging through `TagOps::merge_to_list` and `ListCollector`.

use serde_json::json;
use tag_ops::{DataResult, DynamicOps, JsonOps, ListCollector, OpsError, Shape, TagOps};
use tag_tree::{Compound, Value};

/// Merge `values` onto `list`, expecting success.
fn merged(list: Value, values: Vec<Value>) -> Value {
    TagOps
        .merge_to_list_all(&list, values)
        .result()
        .expect("merge should succeed")
}

fn bytes(values: &[i8]) -> Vec<Value> {
    values.iter().map(|b| Value::Byte(*b)).collect()
}

// ============================================================================
// Compact arrays stay compact
// ============================================================================

#[test]
fn byte_array_plus_byte_stays_byte_array() {
    let result = TagOps
        .merge_to_list(&Value::ByteArray(vec![1, 2]), Value::Byte(3))
        .result()
        .unwrap();
    assert_eq!(result, Value::ByteArray(vec![1, 2, 3]));
}

#[test]
fn int_array_plus_ints_stays_int_array() {
    let result = merged(
        Value::IntArray(vec![10]),
        vec![Value::Int(20), Value::Int(30)],
    );
    assert_eq!(result, Value::IntArray(vec![10, 20, 30]));
}

#[test]
fn long_array_plus_longs_stays_long_array() {
    let result = merged(Value::LongArray(vec![]), vec![Value::Long(i64::MAX)]);
    assert_eq!(result, Value::LongArray(vec![i64::MAX]));
}

#[test]
fn appending_nothing_keeps_representation() {
    assert_eq!(
        merged(Value::IntArray(vec![1, 2]), vec![]),
        Value::IntArray(vec![1, 2])
    );
    assert_eq!(
        merged(Value::List(vec![Value::from("a")]), vec![]),
        Value::List(vec![Value::from("a")])
    );
}

// ============================================================================
// Starting from End
// ============================================================================

#[test]
fn end_plus_bytes_becomes_byte_array() {
    assert_eq!(
        merged(Value::End, bytes(&[1, 2])),
        Value::ByteArray(vec![1, 2])
    );
}

#[test]
fn end_plus_ints_becomes_int_array() {
    assert_eq!(
        merged(Value::End, vec![Value::Int(1)]),
        Value::IntArray(vec![1])
    );
}

#[test]
fn end_plus_longs_becomes_long_array() {
    assert_eq!(
        merged(Value::End, vec![Value::Long(1), Value::Long(2)]),
        Value::LongArray(vec![1, 2])
    );
}

#[test]
fn end_plus_non_array_scalar_becomes_list() {
    assert_eq!(
        merged(Value::End, vec![Value::Short(1)]),
        Value::List(vec![Value::Short(1)])
    );
    assert_eq!(
        merged(Value::End, vec![Value::Double(1.5), Value::Byte(1)]),
        Value::List(vec![Value::Double(1.5), Value::Byte(1)])
    );
}

#[test]
fn end_plus_mixed_widths_becomes_list() {
    assert_eq!(
        merged(Value::End, vec![Value::Byte(1), Value::Int(2)]),
        Value::List(vec![Value::Byte(1), Value::Int(2)])
    );
}

#[test]
fn end_plus_nothing_is_an_empty_list() {
    assert_eq!(merged(Value::End, vec![]), Value::List(vec![]));
}

// ============================================================================
// Widening
// ============================================================================

#[test]
fn byte_array_plus_string_widens_to_list() {
    let result = TagOps
        .merge_to_list(&Value::ByteArray(vec![1, 2]), Value::from("x"))
        .result()
        .unwrap();
    assert_eq!(
        result,
        Value::List(vec![Value::Byte(1), Value::Byte(2), Value::from("x")])
    );
}

#[test]
fn int_array_plus_long_widens_to_list() {
    assert_eq!(
        merged(Value::IntArray(vec![1]), vec![Value::Long(2)]),
        Value::List(vec![Value::Int(1), Value::Long(2)])
    );
}

#[test]
fn long_array_plus_int_widens_to_list() {
    assert_eq!(
        merged(Value::LongArray(vec![1]), vec![Value::Int(2)]),
        Value::List(vec![Value::Long(1), Value::Int(2)])
    );
}

#[test]
fn nested_containers_widen_compact_arrays() {
    let nested = Value::List(vec![Value::Int(9)]);
    let compound = Value::Compound(Compound::new().with("k", 1));
    assert_eq!(
        merged(Value::ByteArray(vec![5]), vec![nested.clone()]),
        Value::List(vec![Value::Byte(5), nested])
    );
    assert_eq!(
        merged(Value::IntArray(vec![]), vec![compound.clone()]),
        Value::List(vec![compound])
    );
}

#[test]
fn widening_is_irreversible() {
    let result = merged(
        Value::ByteArray(vec![1]),
        vec![Value::from("x"), Value::Byte(2), Value::Byte(3)],
    );
    assert_eq!(
        result,
        Value::List(vec![
            Value::Byte(1),
            Value::from("x"),
            Value::Byte(2),
            Value::Byte(3),
        ])
    );
}

#[test]
fn existing_list_never_compacts() {
    assert_eq!(
        merged(Value::List(vec![]), bytes(&[1, 2])),
        Value::List(bytes(&[1, 2]))
    );
}

#[test]
fn input_is_not_modified() {
    let input = Value::ByteArray(vec![1, 2]);
    let _ = TagOps.merge_to_list(&input, Value::from("x"));
    assert_eq!(input, Value::ByteArray(vec![1, 2]));
}

// ============================================================================
// Not list-shaped
// ============================================================================

#[test]
fn scalar_is_not_list_shaped() {
    let input = Value::Int(1);
    let result = TagOps.merge_to_list(&input, Value::Int(2));
    assert_eq!(
        result.error(),
        Some(&OpsError::Mismatch {
            expected: Shape::List,
            found: "1".to_string(),
        })
    );
    assert_eq!(result.partial(), Some(input));
}

#[test]
fn compound_is_not_list_shaped() {
    let input = Value::Compound(Compound::new());
    let result = TagOps.merge_to_list_all(&input, vec![Value::Byte(1)]);
    assert_eq!(result.error().unwrap().to_string(), "not a list: {}");
    assert_eq!(result.partial(), Some(input));
}

#[test]
fn json_merge_checks_start_shape_with_no_values() {
    let result = JsonOps.merge_to_list_all(&json!(5), Vec::new());
    assert_eq!(
        result,
        DataResult::fail_with_partial(OpsError::mismatch(Shape::List, "5"), json!(5))
    );
}

#[test]
fn json_merge_appends_to_array_or_null() {
    assert_eq!(
        JsonOps.merge_to_list_all(&json!([1]), vec![json!("x"), json!(null)]),
        DataResult::success(json!([1, "x", null]))
    );
    assert_eq!(
        JsonOps.merge_to_list_all(&json!(null), Vec::new()),
        DataResult::success(json!([]))
    );
}

// ============================================================================
// ListCollector directly
// ============================================================================

#[test]
fn collector_reports_fallback_state() {
    let mut collector = ListCollector::new(&Value::LongArray(vec![1])).unwrap();
    collector.accept(Value::Long(2));
    assert!(!collector.is_heterogeneous());
    collector.accept(Value::Float(3.0));
    assert!(collector.is_heterogeneous());
    assert_eq!(
        collector.finish(),
        Value::List(vec![Value::Long(1), Value::Long(2), Value::Float(3.0)])
    );
}

#[test]
fn collector_is_only_built_for_list_shapes() {
    assert!(ListCollector::new(&Value::End).is_some());
    assert!(ListCollector::new(&Value::List(vec![])).is_some());
    assert!(ListCollector::new(&Value::ByteArray(vec![])).is_some());
    assert!(ListCollector::new(&Value::IntArray(vec![])).is_some());
    assert!(ListCollector::new(&Value::LongArray(vec![])).is_some());
    assert!(ListCollector::new(&Value::from("x")).is_none());
    assert!(ListCollector::new(&Value::Byte(1)).is_none());
    assert!(ListCollector::new(&Value::Compound(Compound::new())).is_none());
}

#[test]
fn collector_chains_accepts() {
    let mut collector = ListCollector::new(&Value::End).unwrap();
    collector
        .accept(Value::Int(1))
        .accept_all(vec![Value::Int(2), Value::Int(3)]);
    assert_eq!(collector.finish(), Value::IntArray(vec![1, 2, 3]));
}
