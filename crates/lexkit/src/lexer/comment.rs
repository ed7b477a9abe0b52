//! Whitespace and comment skipping.
//!
//! These primitives run between tokens: `skip_whitespace` folds
//! whitespace, line comments and block comments into one loop, stopping
//! at the first byte that must become part of a token (including a line
//! feed that is due to be emitted as its own token).

use crate::config::DelimPair;
use crate::error::LexError;
use crate::hooks::Hooks;
use crate::lexer::Lexer;

impl<'src, H: Hooks> Lexer<'src, H> {
    /// Skips whitespace and comments, returning the number of bytes
    /// consumed.
    ///
    /// An unclosed block comment raises its error and stops the skip;
    /// the caller turns it into an error token.
    pub fn skip_whitespace(&mut self) -> usize {
        let start = self.cursor.offset();
        loop {
            if self.check_whitespace() {
                self.cursor.advance();
            } else if self.check_string("\n") {
                // A line feed due to become its own token.
                break;
            } else if self.match_line_comment() {
                // Comment consumed.
            } else if self.match_block_comment() {
                if self.error().is_some() {
                    break;
                }
            } else {
                break;
            }
        }
        self.cursor.offset() - start
    }

    /// Advances to the end of the current line, returning the number
    /// of bytes consumed. The line feed itself is not consumed.
    pub fn skip_line(&mut self) -> usize {
        let rest = self.cursor.remaining();
        let len = memchr::memchr(b'\n', rest).unwrap_or(rest.len());
        self.cursor.advance_by(len);
        len
    }

    /// Skips a block comment whose opener has already been consumed,
    /// returning the number of bytes consumed.
    ///
    /// When `nestable` is set, an inner opener recurses and must be
    /// balanced by an additional closer. Reaching the end of input
    /// without the closer raises [`LexError::UnclosedComment`], which
    /// also propagates out of unclosed inner comments.
    pub fn skip_block_comment(&mut self, delims: DelimPair<'_>, nestable: bool) -> usize {
        let start = self.cursor.offset();
        loop {
            if self.match_string(delims.closer) {
                break;
            }
            if nestable && self.match_string(delims.opener) {
                self.skip_block_comment(delims, true);
                if self.error().is_some() {
                    break;
                }
                continue;
            }
            if self.cursor.advance().is_none() {
                self.set_error(LexError::UnclosedComment);
                break;
            }
        }
        self.cursor.offset() - start
    }
}
