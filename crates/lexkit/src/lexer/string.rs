//! String-like literal scanning.

use crate::config::StringKind;
use crate::error::LexError;
use crate::hooks::Hooks;
use crate::lexer::Lexer;

impl<'src, H: Hooks> Lexer<'src, H> {
    /// Scans a string-like literal whose opener has already been
    /// consumed, up to and including `closer`. Returns the number of
    /// bytes consumed.
    ///
    /// A byte in the configured escape set suppresses the special
    /// meaning of what follows: an escaped closer is consumed
    /// literally and does not terminate the string. Reaching the end
    /// of input (or, for [`StringKind::Line`] strings, a line feed)
    /// raises [`LexError::UnclosedString`].
    pub fn lex_string(&mut self, closer: &str, kind: StringKind) -> usize {
        let start = self.cursor.offset();
        loop {
            if self.match_string(closer) {
                break;
            }
            let escapes = self.config.string_escape_chars;
            if self.match_chars(escapes) && self.match_string(closer) {
                // Escaped closer, consumed literally.
                continue;
            }
            match self.cursor.advance() {
                Some(b'\n') if kind == StringKind::Line => {
                    self.set_error(LexError::UnclosedString);
                    break;
                }
                Some(_) => {}
                None => {
                    self.set_error(LexError::UnclosedString);
                    break;
                }
            }
        }
        self.cursor.offset() - start
    }
}
