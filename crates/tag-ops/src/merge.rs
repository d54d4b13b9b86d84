//! Incremental map merging into compounds.
//!
//! Only string keys can live in a compound. A [`MapMerger`] skips any other
//! key, remembers it, and keeps merging; `finish` then reports failure while
//! still handing back everything that could be merged.

use tag_tree::{Compound, Value};
use tracing::debug;

use crate::error::OpsError;
use crate::result::DataResult;

#[derive(Debug)]
pub struct MapMerger {
    compound: Compound,
    rejected: Vec<Value>,
}

impl MapMerger {
    /// Start merging onto `input`, or `None` if it is not `End` or a compound.
    pub fn new(input: &Value) -> Option<Self> {
        let compound = match input {
            Value::End => Compound::new(),
            Value::Compound(compound) => compound.clone(),
            Value::Byte(_)
            | Value::Short(_)
            | Value::Int(_)
            | Value::Long(_)
            | Value::Float(_)
            | Value::Double(_)
            | Value::String(_)
            | Value::ByteArray(_)
            | Value::IntArray(_)
            | Value::LongArray(_)
            | Value::List(_) => return None,
        };
        Some(Self {
            compound,
            rejected: Vec::new(),
        })
    }

    /// Put one entry. A later duplicate key overwrites the value in place.
    pub fn accept(&mut self, key: Value, value: Value) -> &mut Self {
        match key {
            Value::String(key) => {
                self.compound.insert(key, value);
            }
            other => self.rejected.push(other),
        }
        self
    }

    pub fn accept_all(&mut self, entries: impl IntoIterator<Item = (Value, Value)>) -> &mut Self {
        for (key, value) in entries {
            self.accept(key, value);
        }
        self
    }

    /// Keys skipped so far because they were not strings.
    pub fn rejected(&self) -> &[Value] {
        &self.rejected
    }

    pub fn finish(self) -> DataResult<Value> {
        let merged = Value::Compound(self.compound);
        if self.rejected.is_empty() {
            return DataResult::success(merged);
        }
        let keys: Vec<String> = self.rejected.iter().map(ToString::to_string).collect();
        debug!(?keys, "dropped non-string keys while merging into compound");
        DataResult::fail_with_partial(OpsError::NonStringKeys(keys), merged)
    }
}
