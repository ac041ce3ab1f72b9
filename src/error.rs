use std::borrow::Cow;
use std::error::Error;
use std::fmt;

/// What a failed parser was looking for
///
/// Kept as a tree so callers can inspect it, but rendered through `Display`
/// as the flattened left fold used in diagnostics, e.g.
/// `or(or(foo, bar), [0-9])`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expected {
    /// An exact string
    Literal(String),
    /// The source of a regular expression
    Pattern(String),
    /// Any single char
    AnyChar,
    /// A sequence that matched `matched` and then failed on `failed`
    ///
    /// `matched` holds the plain rendering of each successful child payload.
    Sequence {
        matched: Vec<String>,
        failed: Box<Expected>,
    },
    /// Every alternative of a choice failed
    Choice(Vec<Expected>),
    /// A negative lookahead saw its parser succeed with this payload (as JSON)
    Unexpected(String),
    /// Free-form description from a custom parser
    Message(Cow<'static, str>),
}

impl Expected {
    pub fn message(message: impl Into<Cow<'static, str>>) -> Self {
        Expected::Message(message.into())
    }
}

fn fold_into(f: &mut fmt::Formatter<'_>, name: &str, items: &[String]) -> fmt::Result {
    let mut iter = items.iter();
    let Some(first) = iter.next() else {
        return write!(f, "{}()", name);
    };
    let folded = iter.fold(first.clone(), |acc, next| format!("{}({}, {})", name, acc, next));
    f.write_str(&folded)
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Expected::Literal(text) => f.write_str(text),
            Expected::Pattern(source) => f.write_str(source),
            Expected::AnyChar => f.write_str("any char"),
            Expected::Sequence { matched, failed } => {
                let mut items = matched.clone();
                items.push(failed.to_string());
                fold_into(f, "seq", &items)
            }
            Expected::Choice(alternatives) => {
                let items: Vec<String> = alternatives.iter().map(ToString::to_string).collect();
                fold_into(f, "or", &items)
            }
            Expected::Unexpected(json) => write!(f, "notp {}", json),
            Expected::Message(message) => f.write_str(message),
        }
    }
}

/// The one way a parse can fail
///
/// Carries what was expected and the byte position the attempt was made at.
/// The position is for diagnostics only; combinators never act on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseFailure {
    expected: Expected,
    position: usize,
}

impl ParseFailure {
    pub fn new(expected: Expected, position: usize) -> Self {
        ParseFailure { expected, position }
    }

    pub fn expected(&self) -> &Expected {
        &self.expected
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn into_expected(self) -> Expected {
        self.expected
    }

    /// Attach the failure to the source it was produced from
    pub fn locate<'src>(&self, source: &'src str) -> CodeLoc<'src> {
        CodeLoc::new(source, self.position)
    }
}

impl fmt::Display for ParseFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expected)
    }
}

impl Error for ParseFailure {}

/// Errors raised while building a grammar, before any parsing happens
#[derive(Debug)]
pub enum GrammarError {
    InvalidPattern {
        pattern: String,
        source: regex_automata::meta::BuildError,
    },
}

impl fmt::Display for GrammarError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GrammarError::InvalidPattern { pattern, source } => {
                write!(f, "invalid pattern '{}': {}", pattern, source)
            }
        }
    }
}

impl Error for GrammarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            GrammarError::InvalidPattern { source, .. } => Some(source),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadablePosition {
    pub line: usize,
    pub byte_offset: usize,
}

/// A position inside a source text, able to describe itself in lines
#[derive(Debug, Copy, Clone)]
pub struct CodeLoc<'src> {
    code: &'src str,
    /// Byte offset into `code`
    loc: usize,
}

impl<'src> CodeLoc<'src> {
    pub fn new(code: &'src str, loc: usize) -> Self {
        Self {
            code,
            loc: loc.min(code.len()),
        }
    }

    pub fn position(&self) -> usize {
        self.loc
    }

    /// Line number (1-based) and byte offset within that line
    ///
    /// Byte offsets rather than columns: columns depend on tab width and
    /// how wide the terminal renders each char.
    pub fn readable_position(&self) -> ReadablePosition {
        let before = &self.code[..self.loc];
        let line = before.matches('\n').count() + 1;
        let line_start = before.rfind('\n').map_or(0, |i| i + 1);
        ReadablePosition {
            line,
            byte_offset: self.loc - line_start,
        }
    }

    /// Up to 2 lines either side of the position, with a marker under it
    pub fn context_lines(&self) -> Vec<String> {
        let pos = self.readable_position();
        let first = pos.line.saturating_sub(2).max(1);
        let last = pos.line + 2;
        let mut lines = Vec::new();

        // `split` rather than `lines` so a trailing newline yields a final empty line
        for (index, content) in self.code.split('\n').enumerate() {
            let number = index + 1;
            if number < first {
                continue;
            }
            if number > last {
                break;
            }
            let content = content.strip_suffix('\r').unwrap_or(content);
            let prefix = if number == pos.line {
                format!("  > {} | ", number)
            } else {
                format!("    {} | ", number)
            };
            lines.push(format!("{}{}", prefix, content));

            if number == pos.line {
                let pointer_offset = prefix.len() + pos.byte_offset;
                lines.push(format!("{}^--- here", " ".repeat(pointer_offset)));
            }
        }

        lines
    }
}

impl fmt::Display for CodeLoc<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pos = self.readable_position();
        writeln!(
            f,
            "at line {}, byte offset {} (absolute position: {})",
            pos.line, pos.byte_offset, self.loc
        )?;
        for line in self.context_lines() {
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
