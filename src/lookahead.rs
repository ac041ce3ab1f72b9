use crate::cursor::Cursor;
use crate::error::{Expected, ParseFailure};
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;

/// Parser combinator that performs positive lookahead
///
/// Succeeds with the empty list if the given parser matches here, fails
/// with that parser's failure otherwise. Never consumes input.
pub struct AndP<P> {
    parser: P,
}

impl<P> AndP<P> {
    pub fn new(parser: P) -> Self {
        AndP { parser }
    }
}

impl<'src, P> Parser<'src> for AndP<P>
where
    P: Parser<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let origin = cursor.position();
        let result = self.parser.parse(cursor);
        cursor.reset(origin);

        match result {
            Ok(_) => Ok(Payload::empty()),
            Err(failure) => Err(ParseFailure::new(failure.into_expected(), origin)),
        }
    }
}

/// Parser combinator that performs negative lookahead
///
/// Succeeds with the empty list if the given parser fails here, fails if it
/// matches. Never consumes input.
pub struct NotP<P> {
    parser: P,
}

impl<P> NotP<P> {
    pub fn new(parser: P) -> Self {
        NotP { parser }
    }
}

impl<'src, P> Parser<'src> for NotP<P>
where
    P: Parser<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let origin = cursor.position();
        let result = self.parser.parse(cursor);
        cursor.reset(origin);

        match result {
            // Parser succeeded when we wanted it to fail
            Ok(payload) => Err(ParseFailure::new(
                Expected::Unexpected(payload.to_json()),
                origin,
            )),
            Err(_) => Ok(Payload::empty()),
        }
    }
}

/// Convenience function to create an AndP parser for positive lookahead
pub fn andp<'src, P>(parser: P) -> AndP<P>
where
    P: Parser<'src>,
{
    AndP::new(parser)
}

/// Convenience function to create a NotP parser for negative lookahead
pub fn notp<'src, P>(parser: P) -> NotP<P>
where
    P: Parser<'src>,
{
    NotP::new(parser)
}

/// Extension trait to add .andp() and .notp() method support for parsers
pub trait LookaheadExt<'src>: Parser<'src> + Sized {
    fn andp(self) -> AndP<Self> {
        AndP::new(self)
    }

    fn notp(self) -> NotP<Self> {
        NotP::new(self)
    }
}

/// Implement LookaheadExt for all parsers
impl<'src, P> LookaheadExt<'src> for P where P: Parser<'src> {}
