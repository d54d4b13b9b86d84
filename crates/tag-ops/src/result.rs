//! Outcome type of every fallible ops operation.
//!
//! Unlike `Result`, a failed [`DataResult`] may still carry a best-effort
//! value: a map merge that rejected some keys returns the merged map anyway,
//! and a merge onto the wrong shape hands back the untouched input.

use crate::error::{OpsError, Result};

#[derive(Debug, Clone, PartialEq)]
pub enum DataResult<T> {
    Success(T),
    Error {
        error: OpsError,
        partial: Option<T>,
    },
}

impl<T> DataResult<T> {
    pub fn success(value: T) -> Self {
        DataResult::Success(value)
    }

    pub fn fail(error: OpsError) -> Self {
        DataResult::Error {
            error,
            partial: None,
        }
    }

    pub fn fail_with_partial(error: OpsError, partial: T) -> Self {
        DataResult::Error {
            error,
            partial: Some(partial),
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self, DataResult::Success(_))
    }

    pub fn is_error(&self) -> bool {
        !self.is_success()
    }

    /// The value, only if the operation succeeded.
    pub fn result(self) -> Option<T> {
        match self {
            DataResult::Success(value) => Some(value),
            DataResult::Error { .. } => None,
        }
    }

    /// The best-effort value, only if the operation failed with one.
    pub fn partial(self) -> Option<T> {
        match self {
            DataResult::Success(_) => None,
            DataResult::Error { partial, .. } => partial,
        }
    }

    /// The value on success, or the partial value on failure.
    pub fn result_or_partial(self) -> Option<T> {
        match self {
            DataResult::Success(value) => Some(value),
            DataResult::Error { partial, .. } => partial,
        }
    }

    pub fn error(&self) -> Option<&OpsError> {
        match self {
            DataResult::Success(_) => None,
            DataResult::Error { error, .. } => Some(error),
        }
    }

    /// Map the value, including a partial value on failure.
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> DataResult<U> {
        match self {
            DataResult::Success(value) => DataResult::Success(f(value)),
            DataResult::Error { error, partial } => DataResult::Error {
                error,
                partial: partial.map(f),
            },
        }
    }

    /// Chain a dependent operation.
    ///
    /// A failure with a partial value still runs `f` on that partial value;
    /// the errors of both steps are accumulated.
    pub fn and_then<U>(self, f: impl FnOnce(T) -> DataResult<U>) -> DataResult<U> {
        match self {
            DataResult::Success(value) => f(value),
            DataResult::Error {
                error,
                partial: None,
            } => DataResult::fail(error),
            DataResult::Error {
                error,
                partial: Some(partial),
            } => match f(partial) {
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

    pub fn map_error(self, f: impl FnOnce(OpsError) -> OpsError) -> Self {
        match self {
            DataResult::Error { error, partial } => DataResult::Error {
                error: f(error),
                partial,
            },
            success => success,
        }
    }

    /// Drop any partial value and convert into a plain `Result`.
    pub fn into_result(self) -> Result<T> {
        match self {
            DataResult::Success(value) => Ok(value),
            DataResult::Error { error, .. } => Err(error),
        }
    }
}

impl<T> From<Result<T>> for DataResult<T> {
    fn from(result: Result<T>) -> Self {
        match result {
            Ok(value) => DataResult::Success(value),
            Err(error) => DataResult::fail(error),
        }
    }
}
