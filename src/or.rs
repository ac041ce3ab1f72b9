use crate::cursor::Cursor;
use crate::error::{Expected, ParseFailure};
use crate::parser::{BoxedParser, ParseResult, Parser};

/// Parser combinator that tries alternatives in order and keeps the first success
///
/// Every alternative starts from the same position, since a failing parser
/// leaves the cursor untouched. When all of them fail, the failure lists
/// every alternative's description.
pub struct Or<'src> {
    alternatives: Vec<BoxedParser<'src>>,
}

impl<'src> Or<'src> {
    pub fn new(alternatives: Vec<BoxedParser<'src>>) -> Self {
        Or { alternatives }
    }

    /// Add a lower-priority alternative
    pub fn push<P>(mut self, parser: P) -> Self
    where
        P: Parser<'src> + 'src,
    {
        self.alternatives.push(Box::new(parser));
        self
    }
}

impl<'src> Parser<'src> for Or<'src> {
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let origin = cursor.position();
        let mut expected = Vec::with_capacity(self.alternatives.len());

        for alternative in &self.alternatives {
            match alternative.parse(cursor) {
                Ok(payload) => return Ok(payload),
                Err(failure) => expected.push(failure.into_expected()),
            }
        }

        log::trace!(
            "all {} alternatives failed at {}",
            self.alternatives.len(),
            origin
        );
        let expected = if expected.len() == 1 {
            expected.remove(0)
        } else {
            Expected::Choice(expected)
        };
        Err(ParseFailure::new(expected, origin))
    }
}

/// Convenience function to create an Or parser
pub fn or(alternatives: Vec<BoxedParser<'_>>) -> Or<'_> {
    Or::new(alternatives)
}

/// Build an [`Or`] from any number of parsers
///
/// ```
/// use pegcomb::{Cursor, Parser, Payload, literal, or};
///
/// let parser = or![literal("foo"), literal("bar")];
/// let mut cursor = Cursor::new("bar");
/// assert_eq!(parser.parse(&mut cursor).unwrap(), Payload::text("bar"));
/// ```
#[macro_export]
macro_rules! or {
    ($($parser:expr),* $(,)?) => {
        $crate::or::Or::new(::std::vec![
            $($crate::parser::ParserExt::boxed($parser)),*
        ])
    };
}

/// Extension trait to add .or() method support for parsers
pub trait OrExt<'src>: Parser<'src> + Sized + 'src {
    fn or<P>(self, other: P) -> Or<'src>
    where
        P: Parser<'src> + 'src,
    {
        Or::new(vec![Box::new(self), Box::new(other)])
    }
}

/// Implement OrExt for all parsers
impl<'src, P> OrExt<'src> for P where P: Parser<'src> + 'src {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::any::any_char;
    use crate::literal::literal;
    use crate::payload::Payload;
    use crate::seq;

    #[test]
    fn test_or_first_succeeds() {
        let mut cursor = Cursor::new("foo");
        let parser = or![literal("foo"), literal("bar")];

        assert_eq!(parser.parse(&mut cursor).unwrap(), Payload::text("foo"));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_or_second_succeeds() {
        let mut cursor = Cursor::new("bar");
        let parser = or![literal("foo"), literal("bar")];

        assert_eq!(parser.parse(&mut cursor).unwrap(), Payload::text("bar"));
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_or_is_ordered() {
        // PEG choice: the shorter first alternative wins even though the
        // second would consume more
        let mut cursor = Cursor::new("abc");
        let parser = or![literal("a"), literal("abc")];

        assert_eq!(parser.parse(&mut cursor).unwrap(), Payload::text("a"));
        assert_eq!(cursor.remaining(), "bc");
    }

    #[test]
    fn test_or_all_fail() {
        let mut cursor = Cursor::new("xyz");
        let parser = or![literal("a"), literal("b"), literal("c")];

        let failure = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "or(or(a, b), c)");
        assert_eq!(failure.position(), 0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_or_retries_after_partial_sequence() {
        let mut cursor = Cursor::new("abd");
        let parser = or![
            seq![literal("a"), literal("b"), literal("c")],
            seq![literal("a"), literal("b"), literal("d")]
        ];

        let payload = parser.parse(&mut cursor).unwrap();
        assert_eq!(payload.concat(), "abd");
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_or_single_is_transparent() {
        let mut cursor = Cursor::new("");
        let failure = or![any_char()].parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "any char");
    }

    #[test]
    fn test_or_no_alternatives() {
        let mut cursor = Cursor::new("abc");
        let failure = or(Vec::new()).parse(&mut cursor).unwrap_err();

        assert_eq!(failure.expected(), &Expected::Choice(Vec::new()));
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_or_method_chain() {
        let mut cursor = Cursor::new("c");
        let parser = literal("a").or(literal("b")).push(literal("c"));

        assert_eq!(parser.parse(&mut cursor).unwrap(), Payload::text("c"));
    }
}
