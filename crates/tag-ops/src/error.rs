//! Error types for ops operations.
//!
//! Offending values are carried pre-rendered, so one error type serves every
//! encoding the algebra is implemented for.

use std::fmt;

use thiserror::Error;

/// The structural shape an operation expected to find.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    List,
    Map,
    String,
    Number,
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::List => "list",
            Shape::Map => "map",
            Shape::String => "string",
            Shape::Number => "number",
        })
    }
}

/// Errors reported through [`crate::DataResult`].
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OpsError {
    /// The input had the wrong shape for the operation.
    #[error("not a {expected}: {found}")]
    Mismatch { expected: Shape, found: String },

    /// A single map key was not a string.
    #[error("key is not a string: {0}")]
    NonStringKey(String),

    /// Keys rejected during a map merge; the remaining entries were merged.
    #[error("some keys are not strings: [{}]", .0.join(", "))]
    NonStringKeys(Vec<String>),

    /// A typed stream was requested but an element was not a number.
    #[error("some elements are not {expected}")]
    NotNumeric { expected: &'static str },

    #[error("no key {0} in map")]
    MissingKey(String),

    #[error("{}", join_errors(.0))]
    Multiple(Vec<OpsError>),
}

impl OpsError {
    pub fn mismatch(expected: Shape, found: impl fmt::Display) -> Self {
        OpsError::Mismatch {
            expected,
            found: found.to_string(),
        }
    }

    /// Combine two errors, flattening nested `Multiple`s.
    pub fn and(self, other: OpsError) -> OpsError {
        let mut errors = self.into_errors();
        errors.extend(other.into_errors());
        OpsError::Multiple(errors)
    }

    fn into_errors(self) -> Vec<OpsError> {
        match self {
            OpsError::Multiple(errors) => errors,
            other => vec![other],
        }
    }
}

fn join_errors(errors: &[OpsError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

/// Convenience alias used throughout tag-ops.
pub type Result<T> = std::result::Result<T, OpsError>;
