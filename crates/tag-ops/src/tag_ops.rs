//! [`DynamicOps`] for binary tag trees.
//!
//! Scalars map one-to-one onto tag widths, except [`DynamicOps::create_numeric`],
//! which always produces a `Double`: it is the entry point for numbers of
//! unknown width and is lossy for large longs. Merges go through
//! [`ListCollector`] and [`MapMerger`], so merging bytes onto a byte array
//! keeps it a byte array.
//!
//! # Example
//! ```
//! use tag_ops::{DynamicOps, TagOps};
//! use tag_tree::Value;
//!
//! let bytes = Value::ByteArray(vec![1, 2]);
//! let merged = TagOps.merge_to_list(&bytes, Value::Byte(3)).result().unwrap();
//! assert_eq!(merged, Value::ByteArray(vec![1, 2, 3]));
//!
//! let widened = TagOps.merge_to_list(&bytes, Value::from("x")).result().unwrap();
//! assert_eq!(widened.to_string(), r#"[1b, 2b, "x"]"#);
//! ```

use std::borrow::Cow;

use tag_tree::{Compound, Value};

use crate::builder::TagRecordBuilder;
use crate::collector::ListCollector;
use crate::error::{OpsError, Shape};
use crate::map_like::{CompoundView, MapLike};
use crate::merge::MapMerger;
use crate::number::Number;
use crate::ops::{
    mismatch, numbers_from_stream, DynamicOps, EntryVisitor, PairIter, ValueIter,
};
use crate::result::DataResult;

/// The ops algebra over [`Value`]. Stateless; use the unit value `TagOps`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TagOps;

impl TagOps {
    fn collect_list(
        &self,
        input: &Value,
        collect: impl FnOnce(&mut ListCollector),
    ) -> DataResult<Value> {
        match ListCollector::new(input) {
            Some(mut collector) => {
                collect(&mut collector);
                DataResult::success(collector.finish())
            }
            None => DataResult::fail_with_partial(
                OpsError::mismatch(Shape::List, input),
                input.clone(),
            ),
        }
    }

    fn convert_list<U: DynamicOps>(&self, target: &U, items: &[Value]) -> DataResult<U::Value> {
        let converted = items
            .iter()
            .map(|item| self.convert_to(target, item).into_result())
            .collect::<Result<Vec<_>, _>>();
        match converted {
            Ok(items) => DataResult::success(target.create_list(items)),
            Err(error) => DataResult::fail(error),
        }
    }

    fn convert_map<U: DynamicOps>(&self, target: &U, compound: &Compound) -> DataResult<U::Value> {
        let converted = compound
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

impl DynamicOps for TagOps {
    type Value = Value;
    type Builder = TagRecordBuilder;

    fn empty(&self) -> Value {
        Value::End
    }

    fn convert_to<U: DynamicOps>(&self, target: &U, input: &Value) -> DataResult<U::Value> {
        match input {
            Value::Byte(v) => DataResult::success(target.create_byte(*v)),
            Value::Short(v) => DataResult::success(target.create_short(*v)),
            Value::Int(v) => DataResult::success(target.create_int(*v)),
            Value::Long(v) => DataResult::success(target.create_long(*v)),
            Value::Float(v) => DataResult::success(target.create_float(*v)),
            Value::Double(v) => DataResult::success(target.create_double(*v)),

            Value::ByteArray(bytes) => DataResult::success(target.create_byte_list(bytes)),
            Value::IntArray(ints) => {
                DataResult::success(target.create_int_list(ints.iter().copied()))
            }
            Value::LongArray(longs) => {
                DataResult::success(target.create_long_list(longs.iter().copied()))
            }

            Value::Compound(compound) => self.convert_map(target, compound),
            Value::List(items) => self.convert_list(target, items),
            Value::String(s) => DataResult::success(target.create_string(s)),
            Value::End => DataResult::success(target.empty()),
        }
    }

    fn get_number_value(&self, input: &Value) -> DataResult<Number> {
        match input {
            Value::Byte(v) => DataResult::success(Number::Byte(*v)),
            Value::Short(v) => DataResult::success(Number::Short(*v)),
            Value::Int(v) => DataResult::success(Number::Int(*v)),
            Value::Long(v) => DataResult::success(Number::Long(*v)),
            Value::Float(v) => DataResult::success(Number::Float(*v)),
            Value::Double(v) => DataResult::success(Number::Double(*v)),
            other => mismatch(Shape::Number, other),
        }
    }

    fn create_numeric(&self, number: Number) -> Value {
        Value::Double(number.as_f64())
    }

    fn create_byte(&self, value: i8) -> Value {
        Value::Byte(value)
    }

    fn create_short(&self, value: i16) -> Value {
        Value::Short(value)
    }

    fn create_int(&self, value: i32) -> Value {
        Value::Int(value)
    }

    fn create_long(&self, value: i64) -> Value {
        Value::Long(value)
    }

    fn create_float(&self, value: f32) -> Value {
        Value::Float(value)
    }

    fn create_double(&self, value: f64) -> Value {
        Value::Double(value)
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
        self.collect_list(list, |collector| {
            collector.accept(value);
        })
    }

    fn merge_to_list_all(
        &self,
        list: &Value,
        values: impl IntoIterator<Item = Value>,
    ) -> DataResult<Value> {
        self.collect_list(list, |collector| {
            collector.accept_all(values);
        })
    }

    fn merge_to_map(&self, map: &Value, key: Value, value: Value) -> DataResult<Value> {
        let Value::String(key) = key else {
            return DataResult::fail_with_partial(
                OpsError::NonStringKey(key.to_string()),
                map.clone(),
            );
        };
        let mut compound = match map {
            Value::Compound(compound) => compound.clone(),
            Value::End => Compound::new(),
            other => {
                return DataResult::fail_with_partial(
                    OpsError::mismatch(Shape::Map, other),
                    other.clone(),
                )
            }
        };
        compound.insert(key, value);
        DataResult::success(Value::Compound(compound))
    }

    fn merge_to_map_entries(
        &self,
        map: &Value,
        entries: impl IntoIterator<Item = (Value, Value)>,
    ) -> DataResult<Value> {
        match MapMerger::new(map) {
            Some(mut merger) => {
                merger.accept_all(entries);
                merger.finish()
            }
            None => DataResult::fail_with_partial(OpsError::mismatch(Shape::Map, map), map.clone()),
        }
    }

    fn get_map_values<'a>(&'a self, input: &'a Value) -> DataResult<PairIter<'a, Value>> {
        match input {
            Value::Compound(compound) => {
                let entries: PairIter<'a, Value> = Box::new(
                    compound
                        .iter()
                        .map(|(key, value)| (self.create_string(key), value.clone())),
                );
                DataResult::success(entries)
            }
            other => mismatch(Shape::Map, other),
        }
    }

    fn get_map_entries<'a>(&'a self, input: &'a Value) -> DataResult<EntryVisitor<'a, Value>> {
        match input {
            Value::Compound(compound) => {
                let visitor: EntryVisitor<'a, Value> =
                    Box::new(move |sink: &mut dyn FnMut(Value, Value)| {
                        for (key, value) in compound {
                            sink(self.create_string(key), value.clone());
                        }
                    });
                DataResult::success(visitor)
            }
            other => mismatch(Shape::Map, other),
        }
    }

    fn get_map<'a>(&'a self, input: &'a Value) -> DataResult<Box<dyn MapLike<Value> + 'a>> {
        match input {
            Value::Compound(compound) => {
                let view: Box<dyn MapLike<Value> + 'a> = Box::new(CompoundView::new(compound));
                DataResult::success(view)
            }
            other => mismatch(Shape::Map, other),
        }
    }

    /// Fails on the first non-string key; no partial compound is returned.
    fn create_map(&self, entries: impl IntoIterator<Item = (Value, Value)>) -> DataResult<Value> {
        let entries = entries.into_iter();
        let mut compound = Compound::with_capacity(entries.size_hint().0);
        for (key, value) in entries {
            match key {
                Value::String(key) => {
                    compound.insert(key, value);
                }
                other => return DataResult::fail(OpsError::NonStringKey(other.to_string())),
            }
        }
        DataResult::success(Value::Compound(compound))
    }

    fn remove(&self, input: &Value, key: &str) -> Value {
        match input {
            Value::Compound(compound) => {
                let mut compound = compound.clone();
                compound.remove(key);
                Value::Compound(compound)
            }
            other => other.clone(),
        }
    }

    fn map_builder(&self) -> TagRecordBuilder {
        TagRecordBuilder::new()
    }

    fn get_stream<'a>(&'a self, input: &'a Value) -> DataResult<ValueIter<'a, Value>> {
        let elements: ValueIter<'a, Value> = match input {
            Value::List(items) => Box::new(items.iter().cloned()),
            Value::ByteArray(bytes) => Box::new(bytes.iter().map(|b| self.create_byte(*b))),
            Value::IntArray(ints) => Box::new(ints.iter().map(|i| self.create_int(*i))),
            Value::LongArray(longs) => Box::new(longs.iter().map(|l| self.create_long(*l))),
            other => return mismatch(Shape::List, other),
        };
        DataResult::success(elements)
    }

    fn create_list(&self, values: impl IntoIterator<Item = Value>) -> Value {
        Value::List(values.into_iter().collect())
    }

    fn get_byte_buffer<'a>(&'a self, input: &'a Value) -> DataResult<Cow<'a, [i8]>> {
        match input {
            Value::ByteArray(bytes) => DataResult::success(Cow::Borrowed(bytes.as_slice())),
            other => numbers_from_stream(self, other, "bytes", Number::as_i8).map(Cow::Owned),
        }
    }

    fn create_byte_list(&self, bytes: &[i8]) -> Value {
        Value::ByteArray(bytes.to_vec())
    }

    fn get_int_stream<'a>(&'a self, input: &'a Value) -> DataResult<ValueIter<'a, i32>> {
        match input {
            Value::IntArray(ints) => {
                DataResult::success(Box::new(ints.iter().copied()) as ValueIter<'a, i32>)
            }
            other => numbers_from_stream(self, other, "ints", Number::as_i32)
                .map(|ints| Box::new(ints.into_iter()) as ValueIter<'a, i32>),
        }
    }

    fn create_int_list(&self, ints: impl IntoIterator<Item = i32>) -> Value {
        Value::IntArray(ints.into_iter().collect())
    }

    fn get_long_stream<'a>(&'a self, input: &'a Value) -> DataResult<ValueIter<'a, i64>> {
        match input {
            Value::LongArray(longs) => {
                DataResult::success(Box::new(longs.iter().copied()) as ValueIter<'a, i64>)
            }
            other => numbers_from_stream(self, other, "longs", Number::as_i64)
                .map(|longs| Box::new(longs.into_iter()) as ValueIter<'a, i64>),
        }
    }

    fn create_long_list(&self, longs: impl IntoIterator<Item = i64>) -> Value {
        Value::LongArray(longs.into_iter().collect())
    }
}
