//! [`DynamicOps`] for `serde_json::Value`.
//!
//! Gives [`DynamicOps::convert_to`] a foreign encoding to transcode to and
//! from. JSON has a single number type, so tag widths collapse on the way
//! out; on the way in, integers go through `create_numeric` and floats
//! through `create_double`. Non-finite floats have no JSON form and become
//! `null`. Objects keep insertion order (`preserve_order`).

use serde_json::{Map, Number as JsonNumber, Value};
use tracing::debug;

use crate::builder::MergingRecordBuilder;
use crate::error::{OpsError, Shape};
use crate::map_like::MapLike;
use crate::number::Number;
use crate::ops::{mismatch, DynamicOps, PairIter, ValueIter};
use crate::result::DataResult;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonOps;

/// [`MapLike`] view over a JSON object.
#[derive(Debug, Clone, Copy)]
pub struct ObjectView<'a> {
    object: &'a Map<String, Value>,
}

impl<'a> ObjectView<'a> {
    /// Entries tied to the object's lifetime rather than the view's.
    fn entries_owned(self) -> PairIter<'a, Value> {
        Box::new(
            self.object
                .iter()
                .map(|(key, value)| (Value::String(key.clone()), value.clone())),
        )
    }
}

impl MapLike<Value> for ObjectView<'_> {
    fn get(&self, key: &Value) -> Option<&Value> {
        match key {
            Value::String(key) => self.get_str(key),
            other => panic!("cannot look up object entry with non-string key: {other}"),
        }
    }

    fn get_str(&self, key: &str) -> Option<&Value> {
        self.object.get(key)
    }

    fn entries(&self) -> PairIter<'_, Value> {
        self.entries_owned()
    }
}

impl DynamicOps for JsonOps {
    type Value = Value;
    type Builder = MergingRecordBuilder<JsonOps>;

    fn empty(&self) -> Value {
        Value::Null
    }

    fn convert_to<U: DynamicOps>(&self, target: &U, input: &Value) -> DataResult<U::Value> {
        match input {
            Value::Null => DataResult::success(target.empty()),
            Value::Bool(b) => DataResult::success(target.create_bool(*b)),
            Value::Number(n) => DataResult::success(match n.as_i64() {
                Some(i) => target.create_numeric(Number::Long(i)),
                None => target.create_double(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::String(s) => DataResult::success(target.create_string(s)),
            Value::Array(items) => {
                let converted = items
                    .iter()
                    .map(|item| self.convert_to(target, item).into_result())
                    .collect::<Result<Vec<_>, _>>();
                match converted {
                    Ok(items) => DataResult::success(target.create_list(items)),
                    Err(error) => DataResult::fail(error),
                }
            }
            Value::Object(object) => {
                let converted = object
                    .iter()
                    .map(|(key, value)| {
                        self.convert_to(target, value)
                            .into_result()
                            .map(|value| (target.create_string(key), value))
                    })
                    .collect::<Result<Vec<_>, _>>();
                match converted {
                    Ok(entries) => target.create_map(entries),
                    Err(error) => DataResult::fail(error),
                }
            }
        }
    }

    fn get_number_value(&self, input: &Value) -> DataResult<Number> {
        match input {
            Value::Number(n) => DataResult::success(match n.as_i64() {
                Some(i) => Number::Long(i),
                None => Number::Double(n.as_f64().unwrap_or(f64::NAN)),
            }),
            Value::Bool(b) => DataResult::success(Number::Byte(i8::from(*b))),
            other => mismatch(Shape::Number, other),
        }
    }

    fn create_numeric(&self, number: Number) -> Value {
        match number {
            Number::Byte(v) => Value::from(v),
            Number::Short(v) => Value::from(v),
            Number::Int(v) => Value::from(v),
            Number::Long(v) => Value::from(v),
            Number::Float(v) => float(f64::from(v)),
            Number::Double(v) => float(v),
        }
    }

    fn create_bool(&self, value: bool) -> Value {
        Value::Bool(value)
    }

    fn get_bool_value(&self, input: &Value) -> DataResult<bool> {
        match input {
            Value::Bool(b) => DataResult::success(*b),
            other => self.get_number_value(other).map(|n| n.as_i8() != 0),
        }
    }

    fn get_string_value(&self, input: &Value) -> DataResult<String> {
        match input {
            Value::String(s) => DataResult::success(s.clone()),
            other => mismatch(Shape::String, other),
        }
    }

    fn create_string(&self, value: &str) -> Value {
        Value::String(value.to_string())
    }

    fn merge_to_list(&self, list: &Value, value: Value) -> DataResult<Value> {
        match list {
            Value::Null => DataResult::success(Value::Array(vec![value])),
            Value::Array(items) => {
                let mut items = items.clone();
                items.push(value);
                DataResult::success(Value::Array(items))
            }
            other => DataResult::fail_with_partial(
                OpsError::mismatch(Shape::List, other),
                other.clone(),
            ),
        }
    }

    fn merge_to_list_all(
        &self,
        list: &Value,
        values: impl IntoIterator<Item = Value>,
    ) -> DataResult<Value> {
        let mut items = match list {
            Value::Null => Vec::new(),
            Value::Array(items) => items.clone(),
            other => {
                return DataResult::fail_with_partial(
                    OpsError::mismatch(Shape::List, other),
                    other.clone(),
                )
            }
        };
        items.extend(values);
        DataResult::success(Value::Array(items))
    }

    fn merge_to_map(&self, map: &Value, key: Value, value: Value) -> DataResult<Value> {
        let Value::String(key) = key else {
            return DataResult::fail_with_partial(
                OpsError::NonStringKey(key.to_string()),
                map.clone(),
            );
        };
        let mut object = match map {
            Value::Object(object) => object.clone(),
            Value::Null => Map::new(),
            other => {
                return DataResult::fail_with_partial(
                    OpsError::mismatch(Shape::Map, other),
                    other.clone(),
                )
            }
        };
        object.insert(key, value);
        DataResult::success(Value::Object(object))
    }

    /// Checks the shape of `map` once, then merges every string-keyed entry;
    /// other keys are collected into a single [`OpsError::NonStringKeys`].
    fn merge_to_map_entries(
        &self,
        map: &Value,
        entries: impl IntoIterator<Item = (Value, Value)>,
    ) -> DataResult<Value> {
        let mut object = match map {
            Value::Object(object) => object.clone(),
            Value::Null => Map::new(),
            other => {
                return DataResult::fail_with_partial(
                    OpsError::mismatch(Shape::Map, other),
                    other.clone(),
                )
            }
        };
        let mut rejected = Vec::new();
        for (key, value) in entries {
            match key {
                Value::String(key) => {
                    object.insert(key, value);
                }
                other => rejected.push(other.to_string()),
            }
        }
        let merged = Value::Object(object);
        if rejected.is_empty() {
            return DataResult::success(merged);
        }
        debug!(keys = ?rejected, "dropped non-string keys while merging into object");
        DataResult::fail_with_partial(OpsError::NonStringKeys(rejected), merged)
    }

    fn get_map_values<'a>(&'a self, input: &'a Value) -> DataResult<PairIter<'a, Value>> {
        match input {
            Value::Object(object) => DataResult::success(ObjectView { object }.entries_owned()),
            other => mismatch(Shape::Map, other),
        }
    }

    fn get_map<'a>(&'a self, input: &'a Value) -> DataResult<Box<dyn MapLike<Value> + 'a>> {
        match input {
            Value::Object(object) => {
                let view: Box<dyn MapLike<Value> + 'a> = Box::new(ObjectView { object });
                DataResult::success(view)
            }
            other => mismatch(Shape::Map, other),
        }
    }

    fn create_map(&self, entries: impl IntoIterator<Item = (Value, Value)>) -> DataResult<Value> {
        let mut object = Map::new();
        for (key, value) in entries {
            match key {
                Value::String(key) => {
                    object.insert(key, value);
                }
                other => return DataResult::fail(OpsError::NonStringKey(other.to_string())),
            }
        }
        DataResult::success(Value::Object(object))
    }

    fn remove(&self, input: &Value, key: &str) -> Value {
        match input {
            Value::Object(object) => Value::Object(
                object
                    .iter()
                    .filter(|(k, _)| k.as_str() != key)
                    .map(|(k, v)| (k.clone(), v.clone()))
                    .collect(),
            ),
            other => other.clone(),
        }
    }

    fn map_builder(&self) -> MergingRecordBuilder<JsonOps> {
        MergingRecordBuilder::new(*self)
    }

    fn get_stream<'a>(&'a self, input: &'a Value) -> DataResult<ValueIter<'a, Value>> {
        match input {
            Value::Array(items) => {
                DataResult::success(Box::new(items.iter().cloned()) as ValueIter<'a, Value>)
            }
            other => mismatch(Shape::List, other),
        }
    }

    fn create_list(&self, values: impl IntoIterator<Item = Value>) -> Value {
        Value::Array(values.into_iter().collect())
    }
}

fn float(value: f64) -> Value {
    JsonNumber::from_f64(value).map_or(Value::Null, Value::Number)
}
