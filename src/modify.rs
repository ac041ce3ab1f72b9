use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;

/// Parser combinator that transforms the payload of a successful parse
///
/// Failures pass through untouched and the transform is never called for them.
pub struct Modify<P, F> {
    parser: P,
    transform: F,
}

impl<P, F> Modify<P, F> {
    pub fn new(parser: P, transform: F) -> Self {
        Modify { parser, transform }
    }
}

impl<'src, P, F> Parser<'src> for Modify<P, F>
where
    P: Parser<'src>,
    F: Fn(Payload<'src>) -> Payload<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        let payload = self.parser.parse(cursor)?;
        Ok((self.transform)(payload))
    }
}

/// Convenience function to create a Modify parser
pub fn modify<'src, P, F>(parser: P, transform: F) -> Modify<P, F>
where
    P: Parser<'src>,
    F: Fn(Payload<'src>) -> Payload<'src>,
{
    Modify::new(parser, transform)
}

/// Extension trait to add .modify() method support for parsers
pub trait ModifyExt<'src>: Parser<'src> + Sized {
    fn modify<F>(self, transform: F) -> Modify<Self, F>
    where
        F: Fn(Payload<'src>) -> Payload<'src>,
    {
        Modify::new(self, transform)
    }
}

/// Implement ModifyExt for all parsers
impl<'src, P> ModifyExt<'src> for P where P: Parser<'src> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::literal::literal;
    use crate::pattern::pattern;
    use crate::some::rep1;
    use std::cell::Cell;

    #[test]
    fn test_modify_joins_digits() {
        let mut cursor = Cursor::new("123abc");
        let number = modify(rep1(pattern("[0-9]").unwrap()), |digits| {
            Payload::text(digits.concat())
        });

        assert_eq!(number.parse(&mut cursor).unwrap(), Payload::text("123"));
        assert_eq!(cursor.position(), 3);
    }

    #[test]
    fn test_modify_preserves_failure() {
        let mut cursor = Cursor::new("abc");
        let calls = Cell::new(0);
        let parser = literal("x").modify(|payload| {
            calls.set(calls.get() + 1);
            payload
        });

        let failure = parser.parse(&mut cursor).unwrap_err();
        let plain = literal("x").parse(&mut cursor).unwrap_err();
        assert_eq!(failure, plain);
        assert_eq!(calls.get(), 0);
    }

    #[test]
    fn test_modify_chaining() {
        let mut cursor = Cursor::new("ab");
        let parser = literal("ab")
            .modify(|payload| Payload::list([payload]))
            .modify(|payload| Payload::list([payload, Payload::text("!")]));

        assert_eq!(parser.parse(&mut cursor).unwrap().to_json(), r#"[["ab"],"!"]"#);
    }
}
