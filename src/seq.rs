use crate::cursor::Cursor;
use crate::error::{Expected, ParseFailure};
use crate::parser::{BoxedParser, ParseResult, Parser};
use crate::payload::Payload;

/// Parser combinator that runs parsers one after another
///
/// Succeeds with the list of every child payload, in order. When a child
/// fails the cursor goes back to where the sequence started, and the failure
/// describes what had matched so far followed by what was expected:
/// `seq(a, b)` on `"ac"` fails with `seq(a, b)`.
pub struct Seq<'src> {
    parsers: Vec<BoxedParser<'src>>,
}

impl<'src> Seq<'src> {
    pub fn new(parsers: Vec<BoxedParser<'src>>) -> Self {
        Seq { parsers }
    }

    /// Append another parser to the end of the sequence
    pub fn push<P>(mut self, parser: P) -> Self
    where
        P: Parser<'src> + 'src,
    {
        self.parsers.push(Box::new(parser));
        self
    }
}

impl<'src> Parser<'src> for Seq<'src> {
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let origin = cursor.position();
        let mut payloads = Vec::with_capacity(self.parsers.len());

        for parser in &self.parsers {
            match parser.parse(cursor) {
                Ok(payload) => payloads.push(payload),
                Err(failure) => {
                    log::trace!(
                        "seq failed after {} of {} parsers, resetting {} -> {}",
                        payloads.len(),
                        self.parsers.len(),
                        cursor.position(),
                        origin
                    );
                    cursor.reset(origin);

                    let expected = if payloads.is_empty() {
                        failure.into_expected()
                    } else {
                        Expected::Sequence {
                            matched: payloads.iter().map(Payload::to_plain_string).collect(),
                            failed: Box::new(failure.into_expected()),
                        }
                    };
                    return Err(ParseFailure::new(expected, origin));
                }
            }
        }

        Ok(Payload::List(payloads))
    }
}

/// Convenience function to create a Seq parser
pub fn seq(parsers: Vec<BoxedParser<'_>>) -> Seq<'_> {
    Seq::new(parsers)
}

/// Build a [`Seq`] from any number of parsers
///
/// ```
/// use pegcomb::{Cursor, Parser, Payload, literal, seq};
///
/// let parser = seq![literal("a"), literal("b")];
/// let mut cursor = Cursor::new("ab");
/// let payload = parser.parse(&mut cursor).unwrap();
/// assert_eq!(payload, Payload::list([Payload::text("a"), Payload::text("b")]));
/// ```
#[macro_export]
macro_rules! seq {
    ($($parser:expr),* $(,)?) => {
        $crate::seq::Seq::new(::std::vec![
            $($crate::parser::ParserExt::boxed($parser)),*
        ])
    };
}

/// Extension trait to add .then() method support for parsers
pub trait SeqExt<'src>: Parser<'src> + Sized + 'src {
    fn then<P>(self, other: P) -> Seq<'src>
    where
        P: Parser<'src> + 'src,
    {
        Seq::new(vec![Box::new(self), Box::new(other)])
    }
}

/// Implement SeqExt for all parsers
impl<'src, P> SeqExt<'src> for P where P: Parser<'src> + 'src {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::parser::ParserExt;
    use crate::pattern::pattern;

    #[test]
    fn test_seq_all_succeed() {
        let mut cursor = Cursor::new("abcd");
        let parser = seq![literal("a"), literal("b"), literal("c")];

        let payload = parser.parse(&mut cursor).unwrap();
        assert_eq!(
            payload,
            Payload::list([Payload::text("a"), Payload::text("b"), Payload::text("c")])
        );
        assert_eq!(cursor.remaining(), "d");
    }

    #[test]
    fn test_seq_first_fails() {
        let mut cursor = Cursor::new("xbc");
        let parser = seq![literal("a"), literal("b")];

        let failure = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "a");
        assert_eq!(failure.position(), 0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_seq_later_failure_resets() {
        let mut cursor = Cursor::new("ac");
        let parser = seq![literal("a"), literal("b")];

        let failure = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "seq(a, b)");
        assert_eq!(failure.position(), 0);
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_seq_failure_folds_left() {
        let mut cursor = Cursor::new("x1y!");
        let parser = seq![
            literal("x"),
            pattern("[0-9]").unwrap(),
            literal("y"),
            literal("z")
        ];

        let failure = parser.parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "seq(seq(seq(x, 1), y), z)");
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_seq_reset_from_middle_of_input() {
        let mut cursor = Cursor::with_position("--ab-", 2);
        let parser = seq![literal("a"), literal("b"), literal("c")];

        assert!(parser.parse(&mut cursor).is_err());
        assert_eq!(cursor.position(), 2);
    }

    #[test]
    fn test_seq_single_is_transparent() {
        let mut cursor = Cursor::new("a");
        let payload = seq![literal("a")].parse(&mut cursor).unwrap();
        assert_eq!(payload, Payload::list([Payload::text("a")]));

        let mut cursor = Cursor::new("b");
        let failure = seq![literal("a")].parse(&mut cursor).unwrap_err();
        assert_eq!(failure.to_string(), "a");
    }

    #[test]
    fn test_seq_empty_succeeds() {
        let mut cursor = Cursor::new("abc");
        let payload = seq(Vec::new()).parse(&mut cursor).unwrap();

        assert_eq!(payload, Payload::empty());
        assert_eq!(cursor.position(), 0);
    }

    #[test]
    fn test_then_method_and_push() {
        let mut cursor = Cursor::new("abc");
        let parser = literal("a").then(literal("b")).push(literal("c"));

        let payload = parser.parse(&mut cursor).unwrap();
        assert_eq!(payload.concat(), "abc");
        assert!(cursor.is_eof());
    }

    #[test]
    fn test_seq_function_syntax() {
        let mut cursor = Cursor::new("xy");
        let parser = seq(vec![literal("x").boxed(), literal("y").boxed()]);

        assert!(parser.parse(&mut cursor).is_ok());
        assert!(cursor.is_eof());
    }
}
