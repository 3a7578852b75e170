//! Error taxonomy shared by every operator.

use thiserror::Error;

/// Convenience result type for sequence operators.
pub type Result<T> = std::result::Result<T, SequenceError>;

/// Error type returned by sequence operators.
///
/// Argument and range errors are raised eagerly, at call time. `InvalidCast` is
/// also raised at call time because [`cast`](crate::ops::cast) scans its whole
/// source before returning. `EmptySequence` is the only error produced while a
/// result is being pulled.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// A required argument (source, predicate, selector, key) was absent.
    #[error("value cannot be absent: {name}")]
    ArgumentNull { name: &'static str },

    /// A numeric argument is outside its allowed domain.
    #[error("argument '{name}' is out of range: {value}")]
    ArgumentOutOfRange { name: &'static str, value: i64 },

    /// An element is neither null nor an instance of the requested type.
    #[error("element at index {index} cannot be cast to {target}")]
    InvalidCast { index: usize, target: &'static str },

    /// The operator requires at least one element.
    #[error("source sequence cannot be empty")]
    EmptySequence,
}

impl SequenceError {
    pub(crate) fn null(name: &'static str) -> Self {
        SequenceError::ArgumentNull { name }
    }
}

/// Unwraps a required argument or reports it as absent.
pub(crate) fn required<T>(value: Option<T>, name: &'static str) -> Result<T> {
    value.ok_or(SequenceError::null(name))
}
