use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;

/// Parser combinator that matches the given parser zero or one time
///
/// Never fails: a miss yields the empty list and leaves the cursor alone.
pub struct Opt<P> {
    parser: P,
}

impl<P> Opt<P> {
    pub fn new(parser: P) -> Self {
        Opt { parser }
    }
}

impl<'src, P> Parser<'src> for Opt<P>
where
    P: Parser<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        Ok(self.parser.parse(cursor).unwrap_or_else(|_| Payload::empty()))
    }
}

/// Convenience function to create an Opt parser
pub fn opt<'src, P>(parser: P) -> Opt<P>
where
    P: Parser<'src>,
{
    Opt::new(parser)
}

/// Extension trait to add .opt() method support for parsers
pub trait OptExt<'src>: Parser<'src> + Sized {
    fn opt(self) -> Opt<Self> {
        Opt::new(self)
    }
}

/// Implement OptExt for all parsers
impl<'src, P> OptExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::seq;

    #[test]
    fn test_opt_present() {
        let mut cursor = Cursor::new("-5");
        let payload = opt(literal("-")).parse(&mut cursor).unwrap();

        assert_eq!(payload, Payload::text("-"));
        assert_eq!(cursor.remaining(), "5");
    }

    #[test]
    fn test_opt_absent() {
        let mut cursor = Cursor::new("5");
        let payload = literal("-").opt().parse(&mut cursor).unwrap();

        assert_eq!(payload, Payload::empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_opt_partial_sequence_is_undone() {
        let mut cursor = Cursor::new("ax");
        let payload = opt(seq![literal("a"), literal("b")])
            .parse(&mut cursor)
            .unwrap();

        assert_eq!(payload, Payload::empty());
        assert_eq!(cursor.position(), 0);
    }
}
