//! Incremental record builders.
//!
//! A codec encoding a struct appends fields one at a time and finally calls
//! [`RecordBuilder::build`] with an optional prefix: a map the fields are
//! merged into. Builders are single-use and owned by one caller.

use tag_tree::{Compound, Value};
use tracing::debug;

use crate::error::{OpsError, Shape};
use crate::ops::DynamicOps;
use crate::result::DataResult;

pub trait RecordBuilder {
    type Value;

    fn add(&mut self, key: &str, value: Self::Value) -> &mut Self;

    /// Add a field whose encoding may have failed. The error is kept and
    /// reported by `build`; a partial value is still added.
    fn add_result(&mut self, key: &str, value: DataResult<Self::Value>) -> &mut Self {
        match value {
            DataResult::Success(value) => self.add(key, value),
            DataResult::Error { error, partial } => {
                self.record_error(error);
                match partial {
                    Some(partial) => self.add(key, partial),
                    None => self,
                }
            }
        }
    }

    /// Add a field keyed by a value of the encoding; the key must be a string.
    fn add_keyed(&mut self, key: Self::Value, value: Self::Value) -> &mut Self;

    fn record_error(&mut self, error: OpsError);

    /// Finish the record, merging the fields into `prefix` if one is given.
    fn build(self, prefix: Option<Self::Value>) -> DataResult<Self::Value>;
}

/// Folds recorded errors into a build outcome.
#[derive(Debug, Default)]
struct Errors(Option<OpsError>);

impl Errors {
    fn push(&mut self, error: OpsError) {
        self.0 = Some(match self.0.take() {
            Some(previous) => previous.and(error),
            None => error,
        });
    }

    fn apply<T>(self, result: DataResult<T>) -> DataResult<T> {
        match self.0 {
            None => result,
            Some(error) => match result {
                DataResult::Success(value) => DataResult::fail_with_partial(error, value),
                DataResult::Error {
                    error: next,
                    partial,
                } => DataResult::Error {
                    error: error.and(next),
                    partial,
                },
            },
        }
    }
}

/// Record builder producing a [`Value::Compound`].
///
/// Fields accumulate in a private compound. On `build`, an absent or `End`
/// prefix yields the fields alone; a compound prefix is copied and the
/// fields are merged over it (fields win on collision); any other prefix
/// fails and is handed back as the partial value.
#[derive(Debug, Default)]
pub struct TagRecordBuilder {
    fields: Compound,
    errors: Errors,
}

impl TagRecordBuilder {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RecordBuilder for TagRecordBuilder {
    type Value = Value;

    fn add(&mut self, key: &str, value: Value) -> &mut Self {
        self.fields.insert(key, value);
        self
    }

    fn add_keyed(&mut self, key: Value, value: Value) -> &mut Self {
        match key {
            Value::String(key) => {
                self.fields.insert(key, value);
            }
            other => self.record_error(OpsError::NonStringKey(other.to_string())),
        }
        self
    }

    fn record_error(&mut self, error: OpsError) {
        self.errors.push(error);
    }

    fn build(self, prefix: Option<Value>) -> DataResult<Value> {
        let result = match prefix {
            None | Some(Value::End) => DataResult::success(Value::Compound(self.fields)),
            Some(Value::Compound(mut compound)) => {
                compound.extend(self.fields);
                DataResult::success(Value::Compound(compound))
            }
            Some(other) => {
                debug!(prefix = %other, "record prefix is not a compound");
                DataResult::fail_with_partial(OpsError::mismatch(Shape::Map, &other), other)
            }
        };
        self.errors.apply(result)
    }
}

/// Record builder for any encoding: fields are replayed through
/// [`DynamicOps::merge_to_map_entries`] onto the prefix, or onto the
/// encoding's empty value when there is none.
#[derive(Debug)]
pub struct MergingRecordBuilder<O: DynamicOps> {
    ops: O,
    fields: Vec<(String, O::Value)>,
    errors: Errors,
}

impl<O: DynamicOps> MergingRecordBuilder<O> {
    pub fn new(ops: O) -> Self {
        Self {
            ops,
            fields: Vec::new(),
            errors: Errors::default(),
        }
    }
}

impl<O: DynamicOps> RecordBuilder for MergingRecordBuilder<O> {
    type Value = O::Value;

    fn add(&mut self, key: &str, value: O::Value) -> &mut Self {
        self.fields.push((key.to_string(), value));
        self
    }

    fn add_keyed(&mut self, key: O::Value, value: O::Value) -> &mut Self {
        match self.ops.get_string_value(&key).into_result() {
            Ok(key) => self.fields.push((key, value)),
            Err(_) => self.record_error(OpsError::NonStringKey(format!("{key:?}"))),
        }
        self
    }

    fn record_error(&mut self, error: OpsError) {
        self.errors.push(error);
    }

    fn build(self, prefix: Option<O::Value>) -> DataResult<O::Value> {
        let ops = &self.ops;
        let prefix = prefix.unwrap_or_else(|| ops.empty());
        let entries = self
            .fields
            .into_iter()
            .map(|(key, value)| (ops.create_string(&key), value));
        let result = ops.merge_to_map_entries(&prefix, entries);
        self.errors.apply(result)
    }
}
