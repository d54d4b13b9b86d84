//! Incremental list merging that keeps compact arrays compact.
//!
//! A [`ListCollector`] starts from a list-shaped value and appends elements
//! one at a time. While every element matches the width of a compact array
//! the elements go into a typed buffer; the first element that does not
//! match widens the buffer into a heterogeneous list. Widening is one-way
//! and keeps element order.
//!
//! ```text
//! Empty ──Byte──▶ Bytes ──anything but Byte──┐
//!       ──Int───▶ Ints  ──anything but Int───┤
//!       ──Long──▶ Longs ──anything but Long──┤
//!       ──other──────────────────────────────┴──▶ Heterogeneous
//! ```

use tag_tree::Value;
use tracing::trace;

#[derive(Debug, Default)]
enum State {
    /// Seeded from `End`; the first element picks the representation.
    #[default]
    Empty,
    Bytes(Vec<i8>),
    Ints(Vec<i32>),
    Longs(Vec<i64>),
    Heterogeneous(Vec<Value>),
}

impl State {
    fn accept(self, value: Value) -> State {
        match (self, value) {
            (State::Bytes(mut bytes), Value::Byte(b)) => {
                bytes.push(b);
                State::Bytes(bytes)
            }
            (State::Ints(mut ints), Value::Int(i)) => {
                ints.push(i);
                State::Ints(ints)
            }
            (State::Longs(mut longs), Value::Long(l)) => {
                longs.push(l);
                State::Longs(longs)
            }
            (State::Heterogeneous(mut items), value) => {
                items.push(value);
                State::Heterogeneous(items)
            }
            (State::Empty, value) => State::first(value),
            (compact, value) => {
                let mut items = compact.widen();
                items.push(value);
                State::Heterogeneous(items)
            }
        }
    }

    fn first(value: Value) -> State {
        match value {
            Value::Byte(b) => State::Bytes(vec![b]),
            Value::Int(i) => State::Ints(vec![i]),
            Value::Long(l) => State::Longs(vec![l]),
            other => State::Heterogeneous(vec![other]),
        }
    }

    /// Re-emit the buffered elements as boxed scalars.
    fn widen(self) -> Vec<Value> {
        match self {
            State::Empty => Vec::new(),
            State::Bytes(bytes) => {
                trace!(len = bytes.len(), "widening byte array into list");
                bytes.into_iter().map(Value::Byte).collect()
            }
            State::Ints(ints) => {
                trace!(len = ints.len(), "widening int array into list");
                ints.into_iter().map(Value::Int).collect()
            }
            State::Longs(longs) => {
                trace!(len = longs.len(), "widening long array into list");
                longs.into_iter().map(Value::Long).collect()
            }
            State::Heterogeneous(items) => items,
        }
    }
}

/// Single-owner accumulator for [`crate::DynamicOps::merge_to_list`].
#[derive(Debug)]
pub struct ListCollector {
    state: State,
}

impl ListCollector {
    /// Start collecting onto `input`, or `None` if `input` is not list-shaped.
    ///
    /// `End`, `List`, `ByteArray`, `IntArray` and `LongArray` are list-shaped.
    pub fn new(input: &Value) -> Option<Self> {
        let state = match input {
            Value::End => State::Empty,
            Value::List(items) => State::Heterogeneous(items.clone()),
            Value::ByteArray(bytes) => State::Bytes(bytes.clone()),
            Value::IntArray(ints) => State::Ints(ints.clone()),
            Value::LongArray(longs) => State::Longs(longs.clone()),
            Value::Byte(_)
            | Value::Short(_)
            | Value::Int(_)
            | Value::Long(_)
            | Value::Float(_)
            | Value::Double(_)
            | Value::String(_)
            | Value::Compound(_) => return None,
        };
        Some(Self { state })
    }

    pub fn accept(&mut self, value: Value) -> &mut Self {
        self.state = std::mem::take(&mut self.state).accept(value);
        self
    }

    pub fn accept_all(&mut self, values: impl IntoIterator<Item = Value>) -> &mut Self {
        for value in values {
            self.accept(value);
        }
        self
    }

    /// True once the collector has fallen back to a heterogeneous list.
    pub fn is_heterogeneous(&self) -> bool {
        matches!(self.state, State::Heterogeneous(_))
    }

    /// Finish into a compact array, or a list once heterogeneous.
    /// A collector seeded from `End` that received nothing yields an empty list.
    pub fn finish(self) -> Value {
        match self.state {
            State::Empty => Value::List(Vec::new()),
            State::Bytes(bytes) => Value::ByteArray(bytes),
            State::Ints(ints) => Value::IntArray(ints),
            State::Longs(longs) => Value::LongArray(longs),
            State::Heterogeneous(items) => Value::List(items),
        }
    }
}
