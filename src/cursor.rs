use crate::pattern::Pattern;

/// Read position into a borrowed source text
///
/// A single cursor is created per parse and handed to every combinator by
/// mutable reference. Combinators move it forward with [`Cursor::advance`]
/// and rewind it with [`Cursor::reset`] when an attempt fails.
///
/// Positions are byte offsets into `source` and always sit on a char
/// boundary. Reads are counted in chars.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cursor<'src> {
    source: &'src str,
    position: usize,
}

impl<'src> Cursor<'src> {
    /// Create a cursor at the start of `source`
    pub fn new(source: &'src str) -> Self {
        Self::with_position(source, 0)
    }

    /// Create a cursor at an arbitrary position
    ///
    /// Positions past the end are clamped to the end of the source, and a
    /// position inside a multi-byte char moves back to that char's start.
    pub fn with_position(source: &'src str, position: usize) -> Self {
        let mut position = position.min(source.len());
        while !source.is_char_boundary(position) {
            position -= 1;
        }
        Cursor { source, position }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn position(&self) -> usize {
        self.position
    }

    /// The unread part of the source
    pub fn remaining(&self) -> &'src str {
        &self.source[self.position..]
    }

    pub fn is_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Return up to `n` chars starting at the current position
    ///
    /// Never moves the cursor. Near the end of input fewer than `n` chars
    /// (possibly none) are returned.
    pub fn read(&self, n: usize) -> &'src str {
        let rest = self.remaining();
        let end = rest
            .char_indices()
            .nth(n)
            .map_or(rest.len(), |(offset, _)| offset);
        &rest[..end]
    }

    /// Match `pattern` anchored at the current position
    ///
    /// Returns the matched text, or `None` when the pattern does not match
    /// right here. Empty matches count as no match.
    pub fn match_pattern(&self, pattern: &Pattern) -> Option<&'src str> {
        pattern.match_at(self.source, self.position)
    }

    /// Move forward by `n` bytes
    ///
    /// `n` must be the length of something just read or matched at this
    /// position; the cursor does not check this beyond clamping to the end.
    pub fn advance(&mut self, n: usize) {
        self.position = (self.position + n).min(self.source.len());
        debug_assert!(self.source.is_char_boundary(self.position));
    }

    /// Jump back to a previously observed position
    pub fn reset(&mut self, position: usize) {
        debug_assert!(position <= self.source.len());
        debug_assert!(self.source.is_char_boundary(position));
        self.position = position;
    }

    /// Up to `n` chars of the remaining input, for diagnostics
    pub fn excerpt(&self, n: usize) -> &'src str {
        self.read(n)
    }
}
