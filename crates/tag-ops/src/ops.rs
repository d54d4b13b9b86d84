//! The encoding-agnostic ops algebra.
//!
//! A codec describes a data shape once and drives it through [`DynamicOps`]
//! without knowing which tree encoding sits underneath. Each encoding
//! (the tag tree, JSON, ...) implements the trait over its own value type;
//! [`DynamicOps::convert_to`] rebuilds a tree of one encoding with the
//! constructors of another.
//!
//! Provided methods cover encodings without native typed arrays: typed lists
//! become generic lists of boxed numbers and typed streams are read back from
//! generic streams. Encodings with compact arrays override them.

use std::borrow::Cow;
use std::fmt;

use crate::builder::RecordBuilder;
use crate::error::{OpsError, Shape};
use crate::map_like::MapLike;
use crate::number::Number;
use crate::result::DataResult;

/// Lazy sequence of values borrowed from an input tree.
pub type ValueIter<'a, V> = Box<dyn Iterator<Item = V> + 'a>;

/// Lazy sequence of `(key, value)` pairs borrowed from an input map.
pub type PairIter<'a, V> = Box<dyn Iterator<Item = (V, V)> + 'a>;

/// Push-style walk over map entries; may be invoked more than once.
pub type EntryVisitor<'a, V> = Box<dyn Fn(&mut dyn FnMut(V, V)) + 'a>;

/// Push-style walk over list elements; may be invoked more than once.
pub type ElementVisitor<'a, V> = Box<dyn Fn(&mut dyn FnMut(V)) + 'a>;

pub trait DynamicOps: Sized {
    type Value: Clone + fmt::Debug;
    type Builder: RecordBuilder<Value = Self::Value>;

    /// The canonical empty value.
    fn empty(&self) -> Self::Value;

    fn empty_list(&self) -> Self::Value {
        self.create_list(std::iter::empty())
    }

    /// Rebuild `input` with the constructors of `target`.
    fn convert_to<U: DynamicOps>(&self, target: &U, input: &Self::Value) -> DataResult<U::Value>;

    // ------------------------------------------------------------------
    // Numbers
    // ------------------------------------------------------------------

    fn get_number_value(&self, input: &Self::Value) -> DataResult<Number>;

    fn get_number_value_or(&self, input: &Self::Value, default: Number) -> Number {
        self.get_number_value(input).result().unwrap_or(default)
    }

    /// Create a number whose intended width is unknown.
    fn create_numeric(&self, number: Number) -> Self::Value;

    fn create_byte(&self, value: i8) -> Self::Value {
        self.create_numeric(Number::Byte(value))
    }

    fn create_short(&self, value: i16) -> Self::Value {
        self.create_numeric(Number::Short(value))
    }

    fn create_int(&self, value: i32) -> Self::Value {
        self.create_numeric(Number::Int(value))
    }

    fn create_long(&self, value: i64) -> Self::Value {
        self.create_numeric(Number::Long(value))
    }

    fn create_float(&self, value: f32) -> Self::Value {
        self.create_numeric(Number::Float(value))
    }

    fn create_double(&self, value: f64) -> Self::Value {
        self.create_numeric(Number::Double(value))
    }

    fn create_bool(&self, value: bool) -> Self::Value {
        self.create_byte(i8::from(value))
    }

    fn get_bool_value(&self, input: &Self::Value) -> DataResult<bool> {
        self.get_number_value(input).map(|number| number.as_i8() != 0)
    }

    // ------------------------------------------------------------------
    // Strings
    // ------------------------------------------------------------------

    fn get_string_value(&self, input: &Self::Value) -> DataResult<String>;

    fn create_string(&self, value: &str) -> Self::Value;

    // ------------------------------------------------------------------
    // Merging
    // ------------------------------------------------------------------

    /// Append one element to a list-shaped value.
    fn merge_to_list(&self, list: &Self::Value, value: Self::Value) -> DataResult<Self::Value>;

    /// Folds [`DynamicOps::merge_to_list`] over `values`. The shape of `list`
    /// is only seen by that call, so an encoding that must reject a
    /// non-list start even with no values overrides this.
    fn merge_to_list_all(
        &self,
        list: &Self::Value,
        values: impl IntoIterator<Item = Self::Value>,
    ) -> DataResult<Self::Value> {
        values
            .into_iter()
            .fold(DataResult::success(list.clone()), |acc, value| {
                acc.and_then(|list| self.merge_to_list(&list, value))
            })
    }

    /// Put one entry into a map-shaped value.
    fn merge_to_map(
        &self,
        map: &Self::Value,
        key: Self::Value,
        value: Self::Value,
    ) -> DataResult<Self::Value>;

    /// Folds [`DynamicOps::merge_to_map`] over `entries`. Encodings override
    /// this to check the shape of `map` once and to report rejected keys
    /// together.
    fn merge_to_map_entries(
        &self,
        map: &Self::Value,
        entries: impl IntoIterator<Item = (Self::Value, Self::Value)>,
    ) -> DataResult<Self::Value> {
        entries
            .into_iter()
            .fold(DataResult::success(map.clone()), |acc, (key, value)| {
                acc.and_then(|map| self.merge_to_map(&map, key, value))
            })
    }

    fn merge_to_map_like(
        &self,
        map: &Self::Value,
        values: &dyn MapLike<Self::Value>,
    ) -> DataResult<Self::Value> {
        self.merge_to_map_entries(map, values.entries())
    }

    // ------------------------------------------------------------------
    // Maps
    // ------------------------------------------------------------------

    fn get_map_values<'a>(
        &'a self,
        input: &'a Self::Value,
    ) -> DataResult<PairIter<'a, Self::Value>>;

    fn get_map_entries<'a>(
        &'a self,
        input: &'a Self::Value,
    ) -> DataResult<EntryVisitor<'a, Self::Value>> {
        if let Some(error) = self.get_map_values(input).error() {
            return DataResult::fail(error.clone());
        }
        let visitor: EntryVisitor<'a, Self::Value> =
            Box::new(move |sink: &mut dyn FnMut(Self::Value, Self::Value)| {
                if let Some(entries) = self.get_map_values(input).result() {
                    for (key, value) in entries {
                        sink(key, value);
                    }
                }
            });
        DataResult::success(visitor)
    }

    fn get_map<'a>(
        &'a self,
        input: &'a Self::Value,
    ) -> DataResult<Box<dyn MapLike<Self::Value> + 'a>>;

    /// Build a map from `(key, value)` pairs. A key the encoding cannot use
    /// fails the whole call with no partial map.
    fn create_map(
        &self,
        entries: impl IntoIterator<Item = (Self::Value, Self::Value)>,
    ) -> DataResult<Self::Value>;

    /// Look up one field of a map-shaped value.
    fn get(&self, input: &Self::Value, key: &str) -> DataResult<Self::Value> {
        self.get_map(input).and_then(|map| match map.get_str(key) {
            Some(value) => DataResult::success(value.clone()),
            None => DataResult::fail(OpsError::MissingKey(key.to_string())),
        })
    }

    /// Set one field, returning the input unchanged if it is not map-shaped.
    fn set(&self, input: &Self::Value, key: &str, value: Self::Value) -> Self::Value {
        self.merge_to_map(input, self.create_string(key), value)
            .result()
            .unwrap_or_else(|| input.clone())
    }

    /// Remove one field, returning the input unchanged if it is not a map.
    fn remove(&self, input: &Self::Value, key: &str) -> Self::Value;

    fn map_builder(&self) -> Self::Builder;

    // ------------------------------------------------------------------
    // Lists
    // ------------------------------------------------------------------

    fn get_stream<'a>(&'a self, input: &'a Self::Value) -> DataResult<ValueIter<'a, Self::Value>>;

    fn get_list<'a>(
        &'a self,
        input: &'a Self::Value,
    ) -> DataResult<ElementVisitor<'a, Self::Value>> {
        if let Some(error) = self.get_stream(input).error() {
            return DataResult::fail(error.clone());
        }
        let visitor: ElementVisitor<'a, Self::Value> =
            Box::new(move |sink: &mut dyn FnMut(Self::Value)| {
                if let Some(elements) = self.get_stream(input).result() {
                    elements.for_each(|element| sink(element));
                }
            });
        DataResult::success(visitor)
    }

    fn create_list(&self, values: impl IntoIterator<Item = Self::Value>) -> Self::Value;

    fn get_byte_buffer<'a>(&'a self, input: &'a Self::Value) -> DataResult<Cow<'a, [i8]>> {
        numbers_from_stream(self, input, "bytes", Number::as_i8).map(Cow::Owned)
    }

    /// Create a byte list holding a copy of `bytes`.
    fn create_byte_list(&self, bytes: &[i8]) -> Self::Value {
        self.create_list(bytes.iter().map(|b| self.create_byte(*b)))
    }

    fn get_int_stream<'a>(&'a self, input: &'a Self::Value) -> DataResult<ValueIter<'a, i32>> {
        numbers_from_stream(self, input, "ints", Number::as_i32)
            .map(|ints| Box::new(ints.into_iter()) as ValueIter<'a, i32>)
    }

    fn create_int_list(&self, ints: impl IntoIterator<Item = i32>) -> Self::Value {
        self.create_list(ints.into_iter().map(|i| self.create_int(i)))
    }

    fn get_long_stream<'a>(&'a self, input: &'a Self::Value) -> DataResult<ValueIter<'a, i64>> {
        numbers_from_stream(self, input, "longs", Number::as_i64)
            .map(|longs| Box::new(longs.into_iter()) as ValueIter<'a, i64>)
    }

    fn create_long_list(&self, longs: impl IntoIterator<Item = i64>) -> Self::Value {
        self.create_list(longs.into_iter().map(|l| self.create_long(l)))
    }
}

/// Read a generic list back as numbers of one width.
///
/// Fails with [`OpsError::NotNumeric`] if any element is not a number, so a
/// typed stream is never silently truncated.
pub fn numbers_from_stream<O: DynamicOps, N>(
    ops: &O,
    input: &O::Value,
    expected: &'static str,
    narrow: fn(Number) -> N,
) -> DataResult<Vec<N>> {
    ops.get_stream(input).and_then(|elements| {
        let mut numbers = Vec::new();
        for element in elements {
            match ops.get_number_value(&element).result() {
                Some(number) => numbers.push(narrow(number)),
                None => return DataResult::fail(OpsError::NotNumeric { expected }),
            }
        }
        DataResult::success(numbers)
    })
}

/// Render a foreign value for a shape-mismatch diagnostic.
pub(crate) fn mismatch<T>(expected: Shape, found: &impl fmt::Display) -> DataResult<T> {
    DataResult::fail(OpsError::mismatch(expected, found))
}
