//! Decode error definitions.

use thiserror::Error;

/// Errors raised while turning an upstream body into typed data.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// An integer literal does not fit in 32 bits.
    #[error("Number out of range: {0}")]
    NumberOutOfRange(String),

    /// Objects and arrays nest deeper than the parser allows.
    #[error("Nesting deeper than {0} levels")]
    NestingTooDeep(usize),

    /// A value expected to be an object is something else.
    #[error("Expected an object at '{0}'")]
    NotAnObject(&'static str),

    /// A required key is absent.
    #[error("Missing field '{0}'")]
    MissingField(&'static str),

    /// A required key holds a value that cannot be read as text.
    #[error("Unexpected value type for '{0}'")]
    UnexpectedType(&'static str),
}
