use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;

/// Parser combinator that matches zero or more occurrences of the given parser
///
/// Greedy and never fails. Repetition also stops when the parser succeeds
/// without consuming anything, since it would match there forever.
pub struct Rep0<P> {
    parser: P,
}

impl<P> Rep0<P> {
    pub fn new(parser: P) -> Self {
        Rep0 { parser }
    }

    pub(crate) fn parser(&self) -> &P {
        &self.parser
    }
}

impl<'src, P> Rep0<P>
where
    P: Parser<'src>,
{
    /// Collect matches into `results` until the parser stops matching
    pub(crate) fn collect_into(
        &self,
        cursor: &mut Cursor<'src>,
        results: &mut Vec<Payload<'src>>,
    ) {
        loop {
            let before = cursor.position();
            match self.parser.parse(cursor) {
                Ok(_) if cursor.position() == before => {
                    log::trace!("rep0 stopped on zero-width match at {}", before);
                    break;
                }
                Ok(payload) => results.push(payload),
                // The failed attempt already restored the cursor
                Err(_) => break,
            }
        }
    }
}

impl<'src, P> Parser<'src> for Rep0<P>
where
    P: Parser<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let mut results = Vec::new();
        self.collect_into(cursor, &mut results);
        Ok(Payload::List(results))
    }
}

/// Convenience function to create a Rep0 parser
pub fn rep0<'src, P>(parser: P) -> Rep0<P>
where
    P: Parser<'src>,
{
    Rep0::new(parser)
}

/// Extension trait to add .rep0() method support for parsers
pub trait ManyExt<'src>: Parser<'src> + Sized {
    fn rep0(self) -> Rep0<Self> {
        Rep0::new(self)
    }
}

/// Implement ManyExt for all parsers
impl<'src, P> ManyExt<'src> for P where P: Parser<'src> {}
