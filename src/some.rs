use crate::cursor::Cursor;
use crate::many::Rep0;
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;

/// Parser combinator that matches one or more occurrences of the given parser
///
/// Behaves as `seq(p, rep0(p))` with the two parts spliced into one flat
/// list, so it fails exactly when the first attempt fails, with that
/// attempt's failure.
pub struct Rep1<P> {
    repeat: Rep0<P>,
}

impl<P> Rep1<P> {
    pub fn new(parser: P) -> Self {
        Rep1 {
            repeat: Rep0::new(parser),
        }
    }
}

impl<'src, P> Parser<'src> for Rep1<P>
where
    P: Parser<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        // First parse must succeed
        let first = self.repeat.parser().parse(cursor)?;
        let mut results = vec![first];
        self.repeat.collect_into(cursor, &mut results);
        Ok(Payload::List(results))
    }
}

/// Convenience function to create a Rep1 parser
pub fn rep1<'src, P>(parser: P) -> Rep1<P>
where
    P: Parser<'src>,
{
    Rep1::new(parser)
}

/// Extension trait to add .rep1() method support for parsers
pub trait SomeExt<'src>: Parser<'src> + Sized {
    fn rep1(self) -> Rep1<Self> {
        Rep1::new(self)
    }
}

/// Implement SomeExt for all parsers
impl<'src, P> SomeExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::opt::opt;
    use crate::pattern::pattern;

    #[test]
    fn test_rep1_zero_matches_fails() {
        let mut cursor = Cursor::new("xyz");
        let failure = rep1(literal("a")).parse(&mut cursor).unwrap_err();

        assert_eq!(failure.to_string(), "a");
        assert_eq!(failure.position(), 0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_rep1_one_match() {
        let mut cursor = Cursor::new("abc");
        let payload = rep1(literal("a")).parse(&mut cursor).unwrap();

        assert_eq!(payload, Payload::list([Payload::text("a")]));
        assert_eq!(cursor.remaining(), "bc");
    }

    #[test]
    fn test_rep1_multiple_matches_are_flat() {
        let mut cursor = Cursor::new("123abc");
        let payload = pattern("[0-9]").unwrap().rep1().parse(&mut cursor).unwrap();

        assert_eq!(
            payload,
            Payload::list([Payload::text("1"), Payload::text("2"), Payload::text("3")])
        );
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_rep1_empty_input() {
        let mut cursor = Cursor::new("");
        assert!(rep1(literal("a")).parse(&mut cursor).is_err());
    }

    #[test]
    fn test_rep1_keeps_zero_width_first_match() {
        // The mandatory first match is kept even when it consumes nothing
        let mut cursor = Cursor::new("b");
        let payload = rep1(opt(literal("a"))).parse(&mut cursor).unwrap();

        assert_eq!(payload, Payload::list([Payload::empty()]));
        assert_eq!(cursor.position(), 0);
    }
}
