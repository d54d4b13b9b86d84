//! Width-tagged numbers exchanged through the ops algebra.

/// A number of known width. Narrowing accessors use `as` cast semantics
/// (truncation for integers, saturation for float to integer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Byte(i8),
    Short(i16),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
}

macro_rules! narrow {
    ($($name:ident -> $ty:ty),* $(,)?) => {
        $(
            pub fn $name(self) -> $ty {
                match self {
                    Number::Byte(v) => v as $ty,
                    Number::Short(v) => v as $ty,
                    Number::Int(v) => v as $ty,
                    Number::Long(v) => v as $ty,
                    Number::Float(v) => v as $ty,
                    Number::Double(v) => v as $ty,
                }
            }
        )*
    };
}

impl Number {
    narrow! {
        as_i8 -> i8,
        as_i16 -> i16,
        as_i32 -> i32,
        as_i64 -> i64,
        as_f32 -> f32,
        as_f64 -> f64,
    }
}

impl From<i8> for Number {
    fn from(value: i8) -> Self {
        Number::Byte(value)
    }
}

impl From<i16> for Number {
    fn from(value: i16) -> Self {
        Number::Short(value)
    }
}

impl From<i32> for Number {
    fn from(value: i32) -> Self {
        Number::Int(value)
    }
}

impl From<i64> for Number {
    fn from(value: i64) -> Self {
        Number::Long(value)
    }
}

impl From<f32> for Number {
    fn from(value: f32) -> Self {
        Number::Float(value)
    }
}

impl From<f64> for Number {
    fn from(value: f64) -> Self {
        Number::Double(value)
    }
}
