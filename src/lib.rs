//! # PegComb - PEG Parser Combinator Library
//!
//! Small composable parsers for building recursive-descent grammars over
//! text, with ordered choice, backtracking and lookahead.
//!
//! - **One cursor per parse**: every parser receives the same [`Cursor`] by
//!   mutable reference and must leave it untouched when it fails
//! - **Uniform results**: success is a [`Payload`] tree of text, failure is a
//!   [`ParseFailure`] describing what was expected and where
//! - **Composability**: grammars are plain values built from combinators;
//!   [`lazy`] breaks the cycle for rules that refer to themselves
//!
//! ```
//! use pegcomb::{Cursor, ModifyExt, Parser, Payload, SomeExt, pattern};
//!
//! let number = pattern("[0-9]").unwrap()
//!     .rep1()
//!     .modify(|digits| Payload::text(digits.concat()));
//!
//! let mut cursor = Cursor::new("123abc");
//! assert_eq!(number.parse(&mut cursor).unwrap(), Payload::text("123"));
//! assert_eq!(cursor.position(), 3);
//! ```

pub mod any;
pub mod cursor;
pub mod empty;
pub mod error;
pub mod lazy;
pub mod literal;
pub mod lookahead;
pub mod many;
pub mod modify;
pub mod opt;
pub mod or;
pub mod parser;
pub mod pattern;
pub mod payload;
pub mod prettify;
pub mod report;
pub mod seq;
pub mod some;

pub use any::{AnyCharParser, any_char};
pub use cursor::Cursor;
pub use empty::{EmptyParser, empty};
pub use error::{CodeLoc, Expected, GrammarError, ParseFailure, ReadablePosition};
pub use lazy::{Lazy, lazy};
pub use literal::{LiteralParser, literal};
pub use lookahead::{AndP, LookaheadExt, NotP, andp, notp};
pub use many::{ManyExt, Rep0, rep0};
pub use modify::{Modify, ModifyExt, modify};
pub use opt::{Opt, OptExt, opt};
pub use or::{Or, OrExt, or};
pub use parser::{
    BoxedParser, FnParser, ParseResult, Parsed, Parser, ParserExt, Rule, from_fn, parse_str,
};
pub use pattern::{Pattern, PatternParser, pattern};
pub use payload::Payload;
pub use report::{Report, ReportOptions, report};
pub use seq::{Seq, SeqExt, seq};
pub use some::{Rep1, SomeExt, rep1};
