use crate::cursor::Cursor;
use crate::parser::{ParseResult, Parser};

/// A lazy parser that defers the construction of the actual parser until parse time.
///
/// This is what lets a rule refer to itself: wrapping the recursive reference
/// in `lazy` means it is only built when the parser actually runs, instead of
/// recursing forever while the grammar is being assembled.
///
/// ```
/// use pegcomb::{BoxedParser, Cursor, Parser, ParserExt, lazy, literal, or, seq};
///
/// // nested = "(" nested ")" / "x"
/// fn nested<'src>() -> BoxedParser<'src> {
///     or![seq![literal("("), lazy(nested), literal(")")], literal("x")].boxed()
/// }
///
/// let mut cursor = Cursor::new("((x))");
/// assert!(nested().parse(&mut cursor).is_ok());
/// assert!(cursor.is_eof());
/// ```
///
/// The factory runs on every parse attempt, so a rule function like `nested`
/// rebuilds its sub-grammar, patterns included, at each level of recursion.
/// For grammars that run often, build the rule once and let the factory hand
/// out a shared [`Rule`](crate::parser::Rule):
///
/// ```
/// use pegcomb::{Cursor, Parser, ParserExt, Rule, lazy, literal, or, seq};
/// use std::cell::OnceCell;
/// use std::rc::Rc;
///
/// let slot: Rc<OnceCell<Rule<'_>>> = Rc::new(OnceCell::new());
/// let inner = Rc::clone(&slot);
/// let nested = or![
///     seq![
///         literal("("),
///         lazy(move || inner.get().map(Rc::clone).unwrap()),
///         literal(")")
///     ],
///     literal("x")
/// ]
/// .shared();
/// assert!(slot.set(Rc::clone(&nested)).is_ok());
///
/// let mut cursor = Cursor::new("((x))");
/// assert!(nested.parse(&mut cursor).is_ok());
/// assert!(cursor.is_eof());
/// ```
///
/// The rule then owns a reference to itself and is never freed.
pub struct Lazy<F> {
    factory: F,
}

impl<F> Lazy<F> {
    /// Create a new lazy parser with the given factory function
    pub fn new(factory: F) -> Self {
        Self { factory }
    }
}

impl<'src, F, P> Parser<'src> for Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        log::trace!("resolving lazy parser at {}", cursor.position());
        let parser = (self.factory)();
        parser.parse(cursor)
    }
}

/// Create a lazy parser from a factory function
pub fn lazy<'src, F, P>(factory: F) -> Lazy<F>
where
    F: Fn() -> P,
    P: Parser<'src>,
{
    Lazy::new(factory)
}
