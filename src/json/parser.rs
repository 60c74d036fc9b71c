//! Recursive-descent parser over a shared cursor.

use crate::json::error::DecodeError;
use crate::json::value::{JsonObject, JsonValue};

/// Deepest allowed nesting of objects and arrays.
pub const MAX_DEPTH: usize = 128;

/// Cursor-based parser over an immutable input.
///
/// All delimiters are ASCII, so every slice boundary lands on a UTF-8
/// character boundary even though the cursor steps byte by byte.
pub struct Parser<'a> {
    input: &'a str,
    pos: usize,
    depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            depth: 0,
        }
    }

    /// Current byte offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.pos).copied()
    }

    fn advance(&mut self) {
        self.pos = (self.pos + 1).min(self.input.len());
    }

    fn enter(&mut self) -> Result<(), DecodeError> {
        if self.depth >= MAX_DEPTH {
            return Err(DecodeError::NestingTooDeep(MAX_DEPTH));
        }
        self.depth += 1;
        Ok(())
    }

    /// Parse the next value, skipping any byte that cannot start one.
    ///
    /// Returns [`JsonValue::Null`] when the input is exhausted.
    pub fn parse_value(&mut self) -> Result<JsonValue, DecodeError> {
        while let Some(b) = self.peek() {
            match b {
                b'{' => return self.parse_object().map(JsonValue::Object),
                b'[' => return self.parse_array().map(JsonValue::Array),
                b'"' => return Ok(JsonValue::String(self.parse_string())),
                b if b.is_ascii_digit() => return self.parse_number().map(JsonValue::Number),
                _ => self.advance(),
            }
        }
        Ok(JsonValue::Null)
    }

    /// Parse key/value pairs until the closing `}` or end of input.
    pub fn parse_object(&mut self) -> Result<JsonObject, DecodeError> {
        self.enter()?;
        let mut object = JsonObject::new();
        while let Some(b) = self.peek() {
            match b {
                b'{' | b',' => {
                    // the key is the next quoted run, wherever it starts
                    let key = self.parse_string();
                    let value = self.parse_value()?;
                    object.insert(key, value);
                }
                b'}' => {
                    self.advance();
                    break;
                }
                _ => self.advance(),
            }
        }
        self.depth -= 1;
        Ok(object)
    }

    /// Parse elements until the closing `]` or end of input.
    pub fn parse_array(&mut self) -> Result<Vec<JsonValue>, DecodeError> {
        self.enter()?;
        let mut items = Vec::new();
        while let Some(b) = self.peek() {
            match b {
                b'[' | b',' => {
                    self.advance();
                    items.push(self.parse_value()?);
                }
                b']' => {
                    self.advance();
                    break;
                }
                _ => self.advance(),
            }
        }
        self.depth -= 1;
        Ok(items)
    }

    fn parse_string(&mut self) -> String {
        while let Some(b) = self.peek() {
            self.advance();
            if b == b'"' {
                let start = self.pos;
                while self.peek().is_some_and(|b| b != b'"') {
                    self.advance();
                }
                let text = self.input[start..self.pos].to_string();
                self.advance();
                return text;
            }
        }
        String::new()
    }

    fn parse_number(&mut self) -> Result<i32, DecodeError> {
        let start = self.pos;
        while self.peek().is_some_and(|b| b.is_ascii_digit()) {
            self.advance();
        }
        let digits = &self.input[start..self.pos];
        digits
            .parse()
            .map_err(|_| DecodeError::NumberOutOfRange(digits.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::json::{parse, parse_object};

    #[test]
    fn single_entry_object() {
        let object = parse_object(r#"{"k":"v"}"#).unwrap();
        assert_eq!(object.keys().count(), 1);
        assert_eq!(object.get("k"), Some(&JsonValue::from("v")));
    }

    #[test]
    fn integer_at_value_position() {
        let value = parse(r#"{"n":123}"#).unwrap();
        assert_eq!(value.get("n"), Some(&JsonValue::Number(123)));

        assert_eq!(parse("123").unwrap(), JsonValue::Number(123));
    }

    #[test]
    fn escaped_quote_truncates_string() {
        // known limitation: no escape handling
        let object = parse_object(r#"{"k":"a\"b"}"#).unwrap();
        assert_eq!(object.get("k"), Some(&JsonValue::from("a\\")));
        assert_eq!(object.keys().count(), 1);
    }

    #[test]
    fn nested_objects_and_arrays() {
        let value = parse(r#"{"outer": {"list": [1, "two", [3]], "x": "y"}, "z": 4}"#).unwrap();

        let outer = value.get("outer").unwrap();
        assert_eq!(outer.get("x"), Some(&JsonValue::from("y")));
        assert_eq!(
            outer.get("list").and_then(JsonValue::as_array).unwrap(),
            &[
                JsonValue::Number(1),
                JsonValue::from("two"),
                JsonValue::Array(vec![JsonValue::Number(3)]),
            ]
        );
        assert_eq!(value.get("z"), Some(&JsonValue::Number(4)));
    }

    #[test]
    fn whitespace_and_separators_are_not_validated() {
        let strict = parse_object(r#"{"a":"1","b":"2"}"#).unwrap();
        let sloppy = parse_object("{ \"a\" ;; \"1\" ,\n\t\"b\" = \"2\" }").unwrap();
        assert_eq!(strict, sloppy);
    }

    #[test]
    fn duplicate_keys_last_wins() {
        let object = parse_object(r#"{"a":"1","b":"2","a":"3"}"#).unwrap();
        assert_eq!(object.keys().collect::<Vec<_>>(), vec!["a", "b"]);
        assert_eq!(object.get("a"), Some(&JsonValue::from("3")));
    }

    #[test]
    fn literals_are_skipped_as_noise() {
        // `null` is not in the grammar; the next string becomes the value
        let object = parse_object(r#"{"a":null,"b":"x"}"#).unwrap();
        assert_eq!(object.get("a"), Some(&JsonValue::from("b")));
    }

    #[test]
    fn exhausted_input_yields_null() {
        assert_eq!(parse("   ").unwrap(), JsonValue::Null);

        let object = parse_object(r#"{"a":"#).unwrap();
        assert_eq!(object.get("a"), Some(&JsonValue::Null));
    }

    #[test]
    fn unterminated_string_takes_the_rest() {
        assert_eq!(parse(r#""abc"#).unwrap(), JsonValue::from("abc"));
    }

    #[test]
    fn negative_and_fractional_numbers_split_on_noise() {
        // sign and decimal point are not part of a number
        assert_eq!(parse("-42").unwrap(), JsonValue::Number(42));
        let items = Parser::new("[1.5]").parse_array().unwrap();
        assert_eq!(items, vec![JsonValue::Number(1)]);
    }

    #[test]
    fn overflowing_integer_is_an_error() {
        let err = parse(r#"{"n":99999999999}"#).unwrap_err();
        assert_eq!(err, DecodeError::NumberOutOfRange("99999999999".into()));
    }

    #[test]
    fn multibyte_text_is_preserved() {
        let object = parse_object(r#"{"name":"Юань ¥","note":"ok"}"#).unwrap();
        assert_eq!(object.get("name"), Some(&JsonValue::from("Юань ¥")));
        assert_eq!(object.get("note"), Some(&JsonValue::from("ok")));
    }

    #[test]
    fn nesting_limit_is_an_error() {
        let err = parse(&"[".repeat(200_000)).unwrap_err();
        assert_eq!(err, DecodeError::NestingTooDeep(MAX_DEPTH));

        let err = parse_object(&"{\"k\":".repeat(MAX_DEPTH + 1)).unwrap_err();
        assert_eq!(err, DecodeError::NestingTooDeep(MAX_DEPTH));
    }

    #[test]
    fn nesting_at_the_limit_parses() {
        let input = format!("{}{}", "[".repeat(MAX_DEPTH), "]".repeat(MAX_DEPTH));
        let mut value = parse(&input).unwrap();
        let mut levels = 0;
        while let JsonValue::Array(mut items) = value {
            levels += 1;
            value = items.pop().unwrap_or(JsonValue::Null);
        }
        assert_eq!(levels, MAX_DEPTH);
    }

    #[test]
    fn siblings_do_not_accumulate_depth() {
        let input = format!("[{}]", "[1],".repeat(MAX_DEPTH * 2));
        let value = parse(&input).unwrap();
        assert_eq!(value.as_array().map(<[JsonValue]>::len), Some(MAX_DEPTH * 2 + 1));
    }

    #[test]
    fn cursor_stops_after_root_object() {
        let mut parser = Parser::new(r#"{"a":"b"} trailing"#);
        parser.parse_object().unwrap();
        assert_eq!(parser.position(), 9);
    }
}
