//! Optional lexer callbacks.
//!
//! Hooks are invoked at well-defined points of the scanning engine:
//! just before a failed integer or float recognition rewinds the
//! cursor, and after every token is finalised (including end-of-tokens
//! and error tokens). Callers that mirror the lexer's digit consumption
//! in shadow state use the unlex hooks to stay in sync.
//!
//! All methods default to no-ops, so a hook implementation overrides
//! only what it needs. A hook must leave the cursor at a position
//! consistent with the token span it observes.

use crate::cursor::Cursor;
use crate::token::Token;

/// Callbacks invoked by the lexer.
pub trait Hooks {
    /// Called immediately before a failed integer scan rewinds the
    /// cursor.
    fn before_unlex_int(&mut self, _cursor: &mut Cursor<'_>) {}

    /// Called immediately before a failed float scan rewinds the
    /// cursor.
    fn before_unlex_float(&mut self, _cursor: &mut Cursor<'_>) {}

    /// Called after every finalised token.
    fn after_token(&mut self, _token: &Token<'_>) {}
}

/// The default hook set: every callback is a no-op.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NoHooks;

impl Hooks for NoHooks {}
