use crate::cursor::Cursor;
use crate::error::{Expected, GrammarError, ParseFailure};
use crate::parser::{ParseResult, Parser};
use crate::payload::Payload;
use regex_automata::meta::Regex;
use regex_automata::{Anchored, Input};
use std::fmt;

/// A regular expression matched at a fixed position of a text
///
/// The whole text stays visible to the regex, so `^`, `\b` and other
/// assertions see what comes before the match position.
#[derive(Clone)]
pub struct Pattern {
    source: String,
    regex: Regex,
}

impl Pattern {
    /// Compile `source` as a regular expression
    pub fn new(source: impl Into<String>) -> Result<Self, GrammarError> {
        let source = source.into();
        let regex = Regex::new(&source).map_err(|error| GrammarError::InvalidPattern {
            pattern: source.clone(),
            source: error,
        })?;
        Ok(Pattern { source, regex })
    }

    /// The pattern as written
    pub fn as_str(&self) -> &str {
        &self.source
    }

    /// Match starting exactly at byte `position` of `haystack`
    ///
    /// Empty matches count as no match.
    pub(crate) fn match_at<'h>(&self, haystack: &'h str, position: usize) -> Option<&'h str> {
        let input = Input::new(haystack)
            .range(position..)
            .anchored(Anchored::Yes);
        self.regex
            .find(input)
            .filter(|found| !found.is_empty())
            .map(|found| &haystack[found.range()])
    }
}

impl fmt::Debug for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Pattern").field(&self.source).finish()
    }
}

impl TryFrom<&str> for Pattern {
    type Error = GrammarError;

    fn try_from(source: &str) -> Result<Self, Self::Error> {
        Pattern::new(source)
    }
}

/// Parser that matches a regular expression at the current position
#[derive(Debug, Clone)]
pub struct PatternParser {
    pattern: Pattern,
}

impl PatternParser {
    pub fn new(pattern: Pattern) -> Self {
        PatternParser { pattern }
    }
}

impl<'src> Parser<'src> for PatternParser {
    fn parse(&self, cursor: &mut Cursor<'src>) -> ParseResult<'src> {
        match cursor.match_pattern(&self.pattern) {
            Some(matched) => {
                cursor.advance(matched.len());
                Ok(Payload::text(matched))
            }
            None => Err(ParseFailure::new(
                Expected::Pattern(self.pattern.as_str().to_string()),
                cursor.position(),
            )),
        }
    }
}

/// Convenience function to compile a pattern and wrap it in a parser
pub fn pattern(source: &str) -> Result<PatternParser, GrammarError> {
    Ok(PatternParser::new(Pattern::new(source)?))
}
