//! Lexical error taxonomy.
//!
//! Errors are in-band: when a sub-scanner detects a malformed construct
//! it flags the lexer, and dispatch materialises a token whose type is
//! the error's code and whose span covers everything consumed. The
//! codes occupy the reserved range at or below [`LexError::Generic`],
//! distinct from the sentinel token types.

use thiserror::Error;

/// A lexical error, convertible to and from its reserved token-type
/// code.
///
/// The `Display` implementation provides the human-readable message for
/// each code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
#[repr(i32)]
pub enum LexError {
    /// Fallback error with no more specific cause.
    #[error("generic lexing error")]
    Generic = -16,

    /// Unexpected end of input. Reserved; not currently produced.
    #[error("unexpected end of input")]
    Eof = -17,

    /// A block comment had no closing delimiter before the end.
    #[error("unclosed block comment")]
    UnclosedComment = -18,

    /// A string-like literal had no closing delimiter before the end
    /// (or the end of the line, for line strings).
    #[error("unclosed string-like literal")]
    UnclosedString = -19,

    /// An integer literal had a prefix but no digits.
    #[error("invalid integer literal")]
    InvalidInteger = -20,

    /// A floating-point literal had no digits in any of its parts.
    #[error("invalid floating-point literal")]
    InvalidFloat = -21,
}

impl LexError {
    /// Returns the reserved token-type code for this error.
    #[inline]
    pub const fn code(self) -> i32 {
        self as i32
    }

    /// Looks up the error for a token-type code, if it is an error
    /// code.
    pub const fn from_code(code: i32) -> Option<LexError> {
        match code {
            -16 => Some(LexError::Generic),
            -17 => Some(LexError::Eof),
            -18 => Some(LexError::UnclosedComment),
            -19 => Some(LexError::UnclosedString),
            -20 => Some(LexError::InvalidInteger),
            -21 => Some(LexError::InvalidFloat),
            _ => None,
        }
    }
}
