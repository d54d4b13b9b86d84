//! `serde::Serialize` for tag trees.
//!
//! Each width goes through its own serializer method, so formats that keep
//! integer widths (postcard, msgpack) see the exact tag type.

use serde::ser::{Serialize, SerializeMap, SerializeSeq, Serializer};

use crate::compound::Compound;
use crate::value::Value;

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Value::End => serializer.serialize_unit(),
            Value::Byte(v) => serializer.serialize_i8(*v),
            Value::Short(v) => serializer.serialize_i16(*v),
            Value::Int(v) => serializer.serialize_i32(*v),
            Value::Long(v) => serializer.serialize_i64(*v),
            Value::Float(v) => serializer.serialize_f32(*v),
            Value::Double(v) => serializer.serialize_f64(*v),
            Value::String(s) => serializer.serialize_str(s),
            Value::ByteArray(bytes) => serializer.collect_seq(bytes),
            Value::IntArray(ints) => serializer.collect_seq(ints),
            Value::LongArray(longs) => serializer.collect_seq(longs),
            Value::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Value::Compound(compound) => compound.serialize(serializer),
        }
    }
}

impl Serialize for Compound {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.len()))?;
        for (key, value) in self {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
