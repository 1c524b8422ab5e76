//! Error types

use crate::value::{Value, ValueType};
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Any error that can occur while invoking an array method
#[derive(Debug, Error)]
pub enum Error {
    /// Method was invoked on `null` or `undefined`
    #[error("Array.prototype.{method} called on {receiver}")]
    InvalidReceiver {
        method: &'static str,
        receiver: ValueType,
    },

    /// Callback argument is missing or not a function
    #[error("Array.prototype.{method}: {actual} is not a function")]
    InvalidCallback {
        method: &'static str,
        actual: ValueType,
    },

    /// Method name isn't defined on the array prototype
    #[error("Array.prototype.{name} is not defined")]
    UnknownMethod { name: String },

    #[error(transparent)]
    Value(#[from] ValueError),

    /// A callback raised an error. The traversal that invoked it is aborted
    /// and the thrown value is handed back unchanged.
    #[error("Uncaught {value}")]
    Thrown { value: Value },
}

impl Error {
    /// Raise an arbitrary value from within a callback
    pub fn thrown(value: impl Into<Value>) -> Self {
        Self::Thrown {
            value: value.into(),
        }
    }
}

/// An error converting a [Value] into a static Rust type
#[derive(Debug, Error)]
pub enum ValueError {
    #[error("Expected {expected}, received {actual}")]
    Type {
        expected: ValueType,
        actual: ValueType,
    },

    /// Number can't be represented by the requested numeric type
    #[error("Number {number} is out of range for {target}")]
    Range { number: f64, target: &'static str },
}
