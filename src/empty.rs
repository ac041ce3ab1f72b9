use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;

/// Parser that always succeeds with the empty list without consuming input
#[derive(Debug, Clone, Copy, Default)]
pub struct EmptyParser;

impl EmptyParser {
    pub fn new() -> Self {
        EmptyParser
    }
}

impl<'src> Parser<'src> for EmptyParser {
    fn parse(&self, _cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        Ok(Payload::empty())
    }
}

/// Convenience function to create an EmptyParser
pub fn empty() -> EmptyParser {
    EmptyParser::new()
}
