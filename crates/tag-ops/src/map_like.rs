//! Read-only keyed view over a map-shaped value.

use tag_tree::{Compound, Value};

use crate::ops::PairIter;

/// Keyed lookup over a map of some encoding, as handed out by
/// [`crate::DynamicOps::get_map`].
pub trait MapLike<V> {
    /// Look up an entry by a key of the encoding itself.
    ///
    /// # Panics
    ///
    /// Implementations may panic when `key` is not a string. Callers of the
    /// algebra only pass keys produced by `create_string`.
    fn get(&self, key: &V) -> Option<&V>;

    fn get_str(&self, key: &str) -> Option<&V>;

    /// Entries as `(key, value)` pairs in map order. Each call starts over.
    fn entries(&self) -> PairIter<'_, V>;
}

/// [`MapLike`] view over a [`Compound`].
#[derive(Debug, Clone, Copy)]
pub struct CompoundView<'a> {
    compound: &'a Compound,
}

impl<'a> CompoundView<'a> {
    pub fn new(compound: &'a Compound) -> Self {
        Self { compound }
    }
}

impl MapLike<Value> for CompoundView<'_> {
    fn get(&self, key: &Value) -> Option<&Value> {
        match key {
            Value::String(key) => self.get_str(key),
            other => panic!("cannot look up compound entry with non-string key: {other}"),
        }
    }

    fn get_str(&self, key: &str) -> Option<&Value> {
        self.compound.get(key)
    }

    fn entries(&self) -> PairIter<'_, Value> {
        Box::new(
            self.compound
                .iter()
                .map(|(key, value)| (Value::String(key.clone()), value.clone())),
        )
    }
}
