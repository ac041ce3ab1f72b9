use crate::cursor::Cursor;
use crate::error::{Expected, ParseFailure};
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;
use std::borrow::Cow;

/// Parser that matches an exact string
#[derive(Debug, Clone)]
pub struct LiteralParser {
    expected: Cow<'static, str>,
    char_len: usize,
}

impl LiteralParser {
    pub fn new(expected: impl Into<Cow<'static, str>>) -> Self {
        let expected = expected.into();
        let char_len = expected.chars().count();
        Self { expected, char_len }
    }
}

impl<'src> Parser<'src> for LiteralParser {
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let found = cursor.read(self.char_len);
        if found == self.expected {
            cursor.advance(found.len());
            // Borrow the source rather than cloning the expected string
            Ok(Payload::text(found))
        } else {
            Err(ParseFailure::new(
                Expected::Literal(self.expected.to_string()),
                cursor.position(),
            ))
        }
    }
}

/// Convenience function to create a LiteralParser
pub fn literal(expected: impl Into<Cow<'static, str>>) -> LiteralParser {
    LiteralParser::new(expected)
}
