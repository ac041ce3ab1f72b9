use crate::cursor::Cursor;
use crate::error::ParseFailure;
use crate::payload::Payload;
use std::rc::Rc;

/// Outcome of a parse attempt
pub type ParseResult<'src> = Result<Payload<'src>, ParseFailure>;

/// Core parser trait for parser combinators
///
/// Implementations must leave the cursor where they found it whenever they
/// return `Err`, so that alternatives and enclosing parsers can retry from
/// the same point.
pub trait Parser<'src> {
    /// Attempt to parse at the cursor's current position
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src>;
}

/// An owned, type-erased parser
pub type BoxedParser<'src> = Box<dyn Parser<'src> + 'src>;

/// A type-erased parser that can be reused by several parents
pub type Rule<'src> = Rc<dyn Parser<'src> + 'src>;

/// Parser backed by a plain function or closure
///
/// The escape hatch for custom parsers. The function is responsible for
/// restoring the cursor when it fails.
#[derive(Clone, Copy)]
pub struct FnParser<F> {
    function: F,
}

impl<'src, F> Parser<'src> for FnParser<F>
where
    F: Fn(&mut Cursor<'src>) -> ParseResult<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        (self.function)(cursor)
    }
}

/// Wrap a function as a parser
pub fn from_fn<'src, F>(function: F) -> FnParser<F>
where
    F: Fn(&mut Cursor<'src>) -> ParseResult<'src>,
{
    FnParser { function }
}

impl<'src, P> Parser<'src> for &P
where
    P: Parser<'src> + ?Sized,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        (**self).parse(cursor)
    }
}

impl<'src, P> Parser<'src> for Box<P>
where
    P: Parser<'src> + ?Sized,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        (**self).parse(cursor)
    }
}

impl<'src, P> Parser<'src> for Rc<P>
where
    P: Parser<'src> + ?Sized,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        (**self).parse(cursor)
    }
}

/// Extension trait for erasing parser types
pub trait ParserExt<'src>: Parser<'src> + Sized + 'src {
    fn boxed(self) -> BoxedParser<'src> {
        Box::new(self)
    }

    fn shared(self) -> Rule<'src> {
        Rc::new(self)
    }
}

impl<'src, P> ParserExt<'src> for P where P: Parser<'src> + 'src {}

/// Result of running a parser over a whole source text
#[derive(Debug, Clone)]
pub struct Parsed<'src> {
    pub result: ParseResult<'src>,
    pub cursor: Cursor<'src>,
}

impl<'src> Parsed<'src> {
    /// True when the parser succeeded and consumed every byte
    pub fn is_complete(&self) -> bool {
        self.result.is_ok() && self.cursor.is_eof()
    }
}

/// Run `parser` from the start of `source`
pub fn parse_str<'src, P>(parser: &P, source: &'src str) -> Parsed<'src>
where
    P: Parser<'src> + ?Sized,
{
    let mut cursor = Cursor::new(source);
    let result = parser.parse(&mut cursor);
    log::debug!(
        "parse finished at {}/{} ({})",
        cursor.position(),
        source.len(),
        if result.is_ok() { "success" } else { "failure" }
    );
    Parsed { result, cursor }
}
