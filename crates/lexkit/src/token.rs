//! Token type and reserved sentinel values.
//!
//! A token is a borrowed view into the source plus an integer type.
//! Non-negative types belong to the caller; negative types are reserved:
//! the sentinels below, and the error codes of [`LexError`].

use static_assertions::const_assert;

use crate::error::LexError;
use lexkit_util::{Location, Span};

/// Special token type signifying the end of the token stream.
pub const TOKENS_END: i32 = -1;
/// Special token type for a token whose type is yet to be determined.
pub const TOKEN_UNINIT: i32 = -2;
/// Special token type signifying an abnormal end of the token stream.
pub const TOKENS_END_ABNORMAL: i32 = -3;
/// Special token type for a line-ending token.
pub const TOKEN_LINE_ENDING: i32 = -4;
/// Special token type for a non-existent token.
pub const TOKEN_NO_TOKEN: i32 = -5;

// The sentinel range and the error range must stay disjoint.
const_assert!(LexError::Generic.code() == -16);
const_assert!(LexError::Generic.code() < TOKEN_NO_TOKEN);
const_assert!(TOKENS_END < 0);

/// A lexical token.
///
/// The token's value is the `text` slice of the source; further
/// processing of that value is left to the caller. Tokens are valid for
/// as long as the source they borrow from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Token<'src> {
    /// The token's value, borrowed from the source.
    ///
    /// Exactly the bytes of `span` for ASCII-configured grammars. A
    /// grammar whose delimiters split a multi-byte character yields
    /// text trimmed to whole characters; `span` stays byte-exact.
    pub text: &'src str,
    /// The byte range of the token within the source.
    pub span: Span,
    /// The location (line, column) of the token's first byte.
    pub loc: Location,
    /// The type of the token. Negative values have special meanings.
    pub token_type: i32,
}

impl<'src> Token<'src> {
    /// Returns the length of the token in bytes.
    #[inline]
    pub fn len(&self) -> usize {
        self.span.len()
    }

    /// Returns true if the token spans no bytes.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    /// Returns whether this is a special end-of-tokens token.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.token_type == TOKENS_END || self.token_type == TOKENS_END_ABNORMAL
    }

    /// Returns whether this is an error token.
    #[inline]
    pub fn is_error(&self) -> bool {
        self.token_type <= LexError::Generic.code()
    }

    /// Returns the error carried by this token, if it is an error
    /// token with a known code.
    #[inline]
    pub fn error(&self) -> Option<LexError> {
        LexError::from_code(self.token_type)
    }
}
