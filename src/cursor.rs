use crate::error::ParseError;

/// Read position within an input string.
///
/// A cursor holds the full input plus a byte offset that is always on a
/// `char` boundary, so it never exposes already-consumed characters and the
/// unconsumed remainder is always a suffix of the original input. Cursors are
/// `Copy`: a parser receives one by value, and backtracking is simply
/// reverting to a saved copy, which is O(1).
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct StrCursor<'text> {
    input: &'text str,
    /// Byte offset into `input`, always on a char boundary.
    offset: usize,
}

impl<'text> StrCursor<'text> {
    pub fn new(input: &'text str) -> Self {
        StrCursor { input, offset: 0 }
    }

    /// Get the character at the current position.
    ///
    /// Returns [`ParseError::EmptyInput`] if no input remains.
    pub fn value(&self) -> Result<char, ParseError> {
        self.rest().chars().next().ok_or(ParseError::EmptyInput)
    }

    /// Advance past the current character.
    ///
    /// If already at the end, stays at the end.
    pub fn next(self) -> Self {
        match self.value() {
            Ok(ch) => self.advance(ch.len_utf8()),
            Err(_) => self,
        }
    }

    /// Advance the cursor by `bytes`, saturating at the end of the input.
    ///
    /// `bytes` must land on a char boundary; callers derive it from
    /// `char_indices`/`len_utf8` over `rest()`.
    pub fn advance(self, bytes: usize) -> Self {
        let offset = usize::min(self.offset + bytes, self.input.len());
        debug_assert!(self.input.is_char_boundary(offset));
        StrCursor {
            input: self.input,
            offset,
        }
    }

    /// Check whether the cursor is at the end of the input.
    pub fn eos(&self) -> bool {
        self.offset >= self.input.len()
    }

    /// Byte offset of the cursor within the original input.
    pub fn position(&self) -> usize {
        self.offset
    }

    /// The unconsumed remainder of the input.
    pub fn rest(&self) -> &'text str {
        &self.input[self.offset..]
    }

    /// The full original input.
    pub fn source(&self) -> &'text str {
        self.input
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_basic_operations() {
        let cursor = StrCursor::new("hello");
        assert_eq!(cursor.value().unwrap(), 'h');

        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), 'e');
        assert_eq!(cursor.rest(), "ello");
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_multibyte_advance() {
        let cursor = StrCursor::new("åäö");
        assert_eq!(cursor.value().unwrap(), 'å');

        let cursor = cursor.next();
        assert_eq!(cursor.value().unwrap(), 'ä');
        assert_eq!(cursor.position(), 2);

        let cursor = cursor.next().next();
        assert!(cursor.eos());
    }

    #[test]
    fn test_empty_input() {
        let cursor = StrCursor::new("");
        assert!(cursor.eos());
        assert_eq!(cursor.value(), Err(ParseError::EmptyInput));
        assert_eq!(cursor.rest(), "");
    }

    #[test]
    fn test_next_saturates_at_end() {
        let cursor = StrCursor::new("x").next();
        assert!(cursor.eos());

        let cursor = cursor.next();
        assert!(cursor.eos());
        assert_eq!(cursor.position(), 1);
    }

    #[test]
    fn test_copy_independence() {
        let cursor = StrCursor::new("abcd");
        let saved = cursor;

        let advanced = cursor.next().next();
        assert_eq!(advanced.value().unwrap(), 'c');

        // The saved copy is unaffected and can restart its own path.
        assert_eq!(saved.value().unwrap(), 'a');
        assert_eq!(saved.next().value().unwrap(), 'b');
    }

    #[test]
    fn test_rest_is_suffix_of_source() {
        let cursor = StrCursor::new("hello world").advance(6);
        assert_eq!(cursor.rest(), "world");
        assert!(cursor.source().ends_with(cursor.rest()));
    }
}
