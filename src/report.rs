use crate::cursor::Cursor;
use crate::parser::ParseResult;
use std::fmt;

/// Settings for rendering a parse result
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOptions {
    /// How many chars of input to show after a failure position
    pub excerpt_len: usize,
    /// Append the line, offset and surrounding lines of a failure
    pub show_location: bool,
}

impl Default for ReportOptions {
    fn default() -> Self {
        ReportOptions {
            excerpt_len: 20,
            show_location: false,
        }
    }
}

impl ReportOptions {
    pub fn excerpt_len(mut self, excerpt_len: usize) -> Self {
        self.excerpt_len = excerpt_len;
        self
    }

    pub fn show_location(mut self, show_location: bool) -> Self {
        self.show_location = show_location;
        self
    }
}

/// Human-readable rendering of a parse result
///
/// Success shows the prettified payload as JSON:
///
/// ```text
/// [Parse Succeeded] accepted: ["1","+","2"]
/// ```
///
/// Failure shows the expected description and what was found instead:
///
/// ```text
/// [Parse Failed]    expected: "or(foo, bar)" received: baz qux
/// ```
pub struct Report<'a, 'src> {
    result: &'a ParseResult<'src>,
    source: &'src str,
    options: ReportOptions,
}

impl<'a, 'src> Report<'a, 'src> {
    pub fn new(result: &'a ParseResult<'src>, source: &'src str) -> Self {
        Report {
            result,
            source,
            options: ReportOptions::default(),
        }
    }

    pub fn with_options(mut self, options: ReportOptions) -> Self {
        self.options = options;
        self
    }
}

impl fmt::Display for Report<'_, '_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.result {
            Ok(payload) => write!(
                f,
                "[Parse Succeeded] accepted: {}",
                payload.prettify().to_json()
            ),
            Err(failure) => {
                let at = Cursor::with_position(self.source, failure.position());
                // JSON string quoting, as the description may contain anything
                let expected = serde_json::Value::String(failure.to_string());
                write!(
                    f,
                    "[Parse Failed]    expected: {} received: {}",
                    expected,
                    at.excerpt(self.options.excerpt_len)
                )?;
                if self.options.show_location {
                    write!(f, "\n{}", failure.locate(self.source))?;
                }
                Ok(())
            }
        }
    }
}

/// Render `result` with the default options
pub fn report<'a, 'src>(result: &'a ParseResult<'src>, source: &'src str) -> Report<'a, 'src> {
    Report::new(result, source)
}
