//! Position tracking over the token sequence.

/// Explicit index into the argument tokens.
///
/// The parse loop moves the cursor by one token (attached value, bare switch,
/// cluster), by two tokens (name and value given separately), and back by one
/// when a look-ahead token turns out to be the next option.
#[derive(Debug, Clone, Copy)]
pub struct Cursor<'a> {
    tokens: &'a [String],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor at the first token.
    #[must_use]
    pub const fn new(tokens: &'a [String]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Index of the current token.
    #[must_use]
    pub const fn position(&self) -> usize {
        self.position
    }

    /// The current token, or `None` once every token has been consumed.
    #[must_use]
    pub fn current(&self) -> Option<&'a str> {
        self.tokens.get(self.position).map(String::as_str)
    }

    /// The token after the current one.
    #[must_use]
    pub fn peek(&self) -> Option<&'a str> {
        self.tokens.get(self.position + 1).map(String::as_str)
    }

    /// Moves past the current token.
    pub fn advance(&mut self) {
        self.position += 1;
    }

    /// Moves past the current token and the one after it.
    pub fn advance_pair(&mut self) {
        self.position += 2;
    }

    /// Gives back the last token consumed.
    pub fn regress(&mut self) {
        debug_assert!(self.position > 0, "cannot regress before the first token");
        self.position = self.position.saturating_sub(1);
    }

    /// Returns true once every token has been consumed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position >= self.tokens.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokens(args: &[&str]) -> Vec<String> {
        args.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn empty_sequence_is_finished() {
        let tokens = tokens(&[]);
        let cursor = Cursor::new(&tokens);

        assert!(cursor.is_finished());
        assert_eq!(cursor.current(), None);
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn current_and_peek_follow_position() {
        let tokens = tokens(&["--a", "1", "--b"]);
        let mut cursor = Cursor::new(&tokens);

        assert_eq!(cursor.current(), Some("--a"));
        assert_eq!(cursor.peek(), Some("1"));

        cursor.advance();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), Some("1"));
        assert_eq!(cursor.peek(), Some("--b"));
    }

    #[test]
    fn advance_pair_skips_value_token() {
        let tokens = tokens(&["--a", "1", "--b"]);
        let mut cursor = Cursor::new(&tokens);

        cursor.advance_pair();
        assert_eq!(cursor.current(), Some("--b"));
        assert_eq!(cursor.peek(), None);
    }

    #[test]
    fn regress_cancels_half_of_a_pair() {
        let tokens = tokens(&["--quiet", "--b"]);
        let mut cursor = Cursor::new(&tokens);

        cursor.advance_pair();
        assert!(cursor.is_finished());

        cursor.regress();
        assert_eq!(cursor.position(), 1);
        assert_eq!(cursor.current(), Some("--b"));
    }

    #[test]
    fn advancing_past_the_end_is_finished() {
        let tokens = tokens(&["--a"]);
        let mut cursor = Cursor::new(&tokens);

        cursor.advance();
        assert!(cursor.is_finished());
        assert_eq!(cursor.current(), None);
    }
}
