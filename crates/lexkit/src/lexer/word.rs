//! Word scanning and keyword resolution.
//!
//! Words are the fallback token: whatever no other rule claimed. Under
//! the symbolic rule a word runs to the next whitespace byte; under the
//! word rule it also stops at reserved constructs (comment openers,
//! string openers, punctuation).

use crate::hooks::Hooks;
use crate::lexer::Lexer;

impl<'src, H: Hooks> Lexer<'src, H> {
    /// Consumes a run of non-whitespace bytes, returning the count.
    pub fn lex_symbolic(&mut self) -> usize {
        let start = self.cursor.offset();
        while !self.cursor.is_at_end() && !self.check_whitespace_with_lf() {
            self.cursor.advance();
        }
        self.cursor.offset() - start
    }

    /// Consumes a run of non-reserved bytes, returning the count.
    pub fn lex_word(&mut self) -> usize {
        let start = self.cursor.offset();
        while !self.cursor.is_at_end() && !self.check_reserved() {
            self.cursor.advance();
        }
        self.cursor.offset() - start
    }

    /// Resolves the type of the word spanning from the token start to
    /// the cursor: the matching keyword's type, or the default word
    /// type.
    pub fn word_type(&self) -> i32 {
        let word = self.cursor.slice(self.token_start, self.cursor.offset());
        self.config
            .keywords
            .iter()
            .find(|keyword| keyword.word.as_bytes() == word)
            .map(|keyword| keyword.token_type)
            .unwrap_or(self.config.default_word_type)
    }
}
