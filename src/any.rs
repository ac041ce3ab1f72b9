use crate::cursor::Cursor;
use crate::error::{Expected, ParseFailure};
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;

/// Parser that consumes and returns a single char
#[derive(Debug, Clone, Copy, Default)]
pub struct AnyCharParser;

impl AnyCharParser {
    pub fn new() -> Self {
        AnyCharParser
    }
}

/// Convenience function to create an AnyCharParser
pub fn any_char() -> AnyCharParser {
    AnyCharParser::new()
}

impl<'src> Parser<'src> for AnyCharParser {
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let next = cursor.read(1);
        if next.is_empty() {
            return Err(ParseFailure::new(Expected::AnyChar, cursor.position()));
        }
        cursor.advance(next.len());
        Ok(Payload::text(next))
    }
}
