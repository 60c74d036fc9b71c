//! Lenient JSON decoder for upstream payloads.
//!
//! # Grammar
//! ```text
//! value  := object | array | string | number      (anything else is skipped)
//! object := '{' (key value)? (',' key value)* '}'
//! array  := '[' value? (',' value)* ']'
//! string := '"' <bytes up to the next '"'> '"'   (no escape sequences)
//! number := [0-9]+                               (fits in i32)
//! ```
//!
//! # Design Decisions
//! - Separators and whitespace are not validated; unknown bytes are skipped
//! - Malformed input degrades to partial or empty results instead of errors
//! - The only structured errors are an integer that does not fit in `i32`
//!   and nesting beyond [`parser::MAX_DEPTH`]
//! - `\"` inside a string ends the string early; payloads consumed here never
//!   carry escaped quotes

pub mod error;
pub mod parser;
pub mod value;

pub use error::DecodeError;
pub use parser::{Parser, MAX_DEPTH};
pub use value::{JsonObject, JsonValue};

/// Parse a document whose root is an object.
pub fn parse_object(input: &str) -> Result<JsonObject, DecodeError> {
    Parser::new(input).parse_object()
}

/// Parse the first value found in `input`.
pub fn parse(input: &str) -> Result<JsonValue, DecodeError> {
    Parser::new(input).parse_value()
}
