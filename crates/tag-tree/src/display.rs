//! SNBT-like text rendering, used for diagnostics.
//!
//! Scalars carry their width suffix (`1b`, `2s`, `3`, `4L`, `1.5f`, `2.5d`),
//! compact arrays carry a type prefix (`[B; 1b, 2b]`), and compound keys are
//! quoted only when they are not plain identifiers.

use std::fmt::{self, Display, Formatter, Write};

use crate::compound::Compound;
use crate::value::Value;

impl Display for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Value::End => f.write_str("END"),
            Value::Byte(v) => write!(f, "{v}b"),
            Value::Short(v) => write!(f, "{v}s"),
            Value::Int(v) => write!(f, "{v}"),
            Value::Long(v) => write!(f, "{v}L"),
            Value::Float(v) => write!(f, "{v}f"),
            Value::Double(v) => write!(f, "{v}d"),
            Value::String(s) => write_quoted(s, f),
            Value::ByteArray(bytes) => write_array(f, "B", bytes.iter().map(|b| Value::Byte(*b))),
            Value::IntArray(ints) => write_array(f, "I", ints.iter().map(|i| Value::Int(*i))),
            Value::LongArray(longs) => write_array(f, "L", longs.iter().map(|l| Value::Long(*l))),
            Value::List(items) => {
                f.write_char('[')?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    Display::fmt(item, f)?;
                }
                f.write_char(']')
            }
            Value::Compound(compound) => Display::fmt(compound, f),
        }
    }
}

impl Display for Compound {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_char('{')?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            if is_bare_key(key) {
                f.write_str(key)?;
            } else {
                write_quoted(key, f)?;
            }
            f.write_str(": ")?;
            Display::fmt(value, f)?;
        }
        f.write_char('}')
    }
}

fn write_array(f: &mut Formatter<'_>, prefix: &str, items: impl Iterator<Item = Value>) -> fmt::Result {
    write!(f, "[{prefix};")?;
    for (i, item) in items.enumerate() {
        f.write_str(if i > 0 { ", " } else { " " })?;
        Display::fmt(&item, f)?;
    }
    f.write_char(']')
}

fn write_quoted(s: &str, f: &mut Formatter<'_>) -> fmt::Result {
    f.write_char('"')?;
    for ch in s.chars() {
        match ch {
            '\\' => f.write_str("\\\\")?,
            '"' => f.write_str("\\\"")?,
            '\n' => f.write_str("\\n")?,
            '\r' => f.write_str("\\r")?,
            '\t' => f.write_str("\\t")?,
            _ => f.write_char(ch)?,
        }
    }
    f.write_char('"')
}

/// Keys matching `[A-Za-z0-9_.+-]+` are written unquoted.
fn is_bare_key(key: &str) -> bool {
    !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '.' | '+' | '-'))
}
