//! The tag tree value type.
//!
//! [`Value`] is a closed sum type: every consumer matches it exhaustively, so
//! adding a variant is a compile error at each site that must handle it.

use crate::compound::Compound;
use crate::error::{Result, TagError};

/// A node of a binary tag tree.
///
/// Integer and float widths are kept distinct, and the three compact integer
/// arrays are separate variants from a generic [`Value::List`] of boxed
/// integers. `End` is the canonical empty value and is not the same thing as
/// an empty list or an empty compound.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    /// The empty value.
    #[default]
    End,
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
    /// Compact array of signed bytes.
    ByteArray(Vec<i8>),
    /// Compact array of 32-bit integers.
    IntArray(Vec<i32>),
    /// Compact array of 64-bit integers.
    LongArray(Vec<i64>),
    /// Ordered sequence of arbitrary values; element types may differ.
    List(Vec<Value>),
    /// String-keyed map in insertion order.
    Compound(Compound),
}

/// Type ids of the binary tag format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagType {
    End,
    Byte,
    Short,
    Int,
    Long,
    Float,
    Double,
    ByteArray,
    String,
    List,
    Compound,
    IntArray,
    LongArray,
}

impl TagType {
    /// The one-byte id written before a tag in the binary format.
    pub fn id(self) -> u8 {
        match self {
            TagType::End => 0,
            TagType::Byte => 1,
            TagType::Short => 2,
            TagType::Int => 3,
            TagType::Long => 4,
            TagType::Float => 5,
            TagType::Double => 6,
            TagType::ByteArray => 7,
            TagType::String => 8,
            TagType::List => 9,
            TagType::Compound => 10,
            TagType::IntArray => 11,
            TagType::LongArray => 12,
        }
    }

    /// Look up a tag type by its binary id.
    pub fn from_id(id: u8) -> Result<TagType> {
        Ok(match id {
            0 => TagType::End,
            1 => TagType::Byte,
            2 => TagType::Short,
            3 => TagType::Int,
            4 => TagType::Long,
            5 => TagType::Float,
            6 => TagType::Double,
            7 => TagType::ByteArray,
            8 => TagType::String,
            9 => TagType::List,
            10 => TagType::Compound,
            11 => TagType::IntArray,
            12 => TagType::LongArray,
            other => return Err(TagError::UnknownTagType(other)),
        })
    }

    /// Upper-snake name as used by the reference tooling (`TAG_Int` → `INT`).
    pub fn name(self) -> &'static str {
        match self {
            TagType::End => "END",
            TagType::Byte => "BYTE",
            TagType::Short => "SHORT",
            TagType::Int => "INT",
            TagType::Long => "LONG",
            TagType::Float => "FLOAT",
            TagType::Double => "DOUBLE",
            TagType::ByteArray => "BYTE_ARRAY",
            TagType::String => "STRING",
            TagType::List => "LIST",
            TagType::Compound => "COMPOUND",
            TagType::IntArray => "INT_ARRAY",
            TagType::LongArray => "LONG_ARRAY",
        }
    }

    /// True for the six scalar number types.
    pub fn is_numeric(self) -> bool {
        matches!(
            self,
            TagType::Byte
                | TagType::Short
                | TagType::Int
                | TagType::Long
                | TagType::Float
                | TagType::Double
        )
    }
}

impl Value {
    pub fn tag_type(&self) -> TagType {
        match self {
            Value::End => TagType::End,
            Value::Byte(_) => TagType::Byte,
            Value::Short(_) => TagType::Short,
            Value::Int(_) => TagType::Int,
            Value::Long(_) => TagType::Long,
            Value::Float(_) => TagType::Float,
            Value::Double(_) => TagType::Double,
            Value::String(_) => TagType::String,
            Value::ByteArray(_) => TagType::ByteArray,
            Value::IntArray(_) => TagType::IntArray,
            Value::LongArray(_) => TagType::LongArray,
            Value::List(_) => TagType::List,
            Value::Compound(_) => TagType::Compound,
        }
    }

    pub fn is_end(&self) -> bool {
        matches!(self, Value::End)
    }

    pub fn is_numeric(&self) -> bool {
        self.tag_type().is_numeric()
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_compound(&self) -> Option<&Compound> {
        match self {
            Value::Compound(compound) => Some(compound),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_byte_array(&self) -> Option<&[i8]> {
        match self {
            Value::ByteArray(bytes) => Some(bytes),
            _ => None,
        }
    }

    pub fn as_int_array(&self) -> Option<&[i32]> {
        match self {
            Value::IntArray(ints) => Some(ints),
            _ => None,
        }
    }

    pub fn as_long_array(&self) -> Option<&[i64]> {
        match self {
            Value::LongArray(longs) => Some(longs),
            _ => None,
        }
    }
}

macro_rules! impl_from {
    ($($ty:ty => $variant:ident),* $(,)?) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    };
}

impl_from! {
    i8 => Byte,
    i16 => Short,
    i32 => Int,
    i64 => Long,
    f32 => Float,
    f64 => Double,
    String => String,
    Vec<i8> => ByteArray,
    Vec<i32> => IntArray,
    Vec<i64> => LongArray,
    Vec<Value> => List,
    Compound => Compound,
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_string())
    }
}
