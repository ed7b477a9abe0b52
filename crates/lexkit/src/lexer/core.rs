//! Core lexer implementation.
//!
//! This module contains the main [`Lexer`] struct, the per-token
//! dispatch engine and the token lifecycle (start, finish, end and
//! error tokens).

use crate::config::{LexerConfig, StringKind, WordRule};
use crate::cursor::Cursor;
use crate::error::LexError;
use crate::hooks::{Hooks, NoHooks};
use crate::token::{Token, TOKENS_END, TOKENS_END_ABNORMAL, TOKEN_NO_TOKEN, TOKEN_UNINIT};
use lexkit_util::{Location, Span};

/// The lexer's progress through its source.
///
/// The status and the current error form one sum: an error raised while
/// scanning replaces the in-progress state and is drained when the
/// token is finalised.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Status {
    /// Ready to lex the next token.
    Ready,
    /// In the process of lexing a token.
    Lexing,
    /// An error was raised while scanning the current token.
    Error(LexError),
    /// Reached the end of tokens.
    Finished,
    /// Reached the end of tokens abnormally.
    FinishedAbnormal,
}

/// A configurable, non-backtracking lexical scanner.
///
/// The lexer borrows its source and produces zero-copy [`Token`]s on
/// demand. Its grammar lives in the public [`config`](Self::config)
/// field and may be rewritten between tokens. See the crate docs for a
/// complete example.
pub struct Lexer<'src, H: Hooks = NoHooks> {
    /// Byte cursor over the source.
    pub cursor: Cursor<'src>,

    /// The lexical grammar.
    pub config: LexerConfig<'src>,

    /// Caller hooks, invoked at well-defined scanning stages.
    pub hooks: H,

    /// Byte offset of the start of the token currently being lexed.
    pub(crate) token_start: usize,

    /// Location of the start of the token currently being lexed.
    pub(crate) token_loc: Location,

    /// Current status (including any pending error).
    status: Status,

    /// The type of the most recently finalised token.
    previous_token_type: i32,
}

impl<'src> Lexer<'src, NoHooks> {
    /// Creates a new lexer over `source` with a default (empty)
    /// grammar and no hooks.
    pub fn new(source: &'src str) -> Self {
        Self::with_hooks(source, NoHooks)
    }
}

impl<'src, H: Hooks> Lexer<'src, H> {
    /// Creates a new lexer over `source` with the given hooks.
    pub fn with_hooks(source: &'src str, hooks: H) -> Self {
        Self {
            cursor: Cursor::new(source),
            config: LexerConfig::default(),
            hooks,
            token_start: 0,
            token_loc: Location::START,
            status: Status::Ready,
            previous_token_type: TOKEN_NO_TOKEN,
        }
    }

    /// Returns the next token from the source.
    ///
    /// Whitespace and comments are skipped, then the first matching
    /// rule wins: a pending line ending, a string opener, an integer
    /// prefix (with a one-token speculative re-lex to float when a
    /// radix separator follows), a float prefix, punctuation, and
    /// finally a word. Once the source is exhausted, an end-of-tokens
    /// sentinel is returned on this and every subsequent call.
    pub fn next_token(&mut self) -> Token<'src> {
        if self.is_finished() {
            return self.end_token();
        }
        self.skip_whitespace();
        if matches!(self.status, Status::Error(_)) {
            // token_start/token_loc were pinned to the failing opener
            // when the error was raised.
            return self.finish_token(TOKEN_UNINIT);
        }
        if self.cursor.is_at_end() {
            return self.end_token();
        }
        self.start_token();
        let token_type = self.dispatch();
        self.finish_token(token_type)
    }

    /// Decides what the token beginning at the cursor is and scans it,
    /// returning its tentative type.
    fn dispatch(&mut self) -> i32 {
        if self.can_emit_line_ending() && self.match_chars("\n") {
            return self.config.line_ending_type;
        }
        if let Some(rule) = self.match_string_opener(StringKind::Line) {
            self.lex_string(rule.delims.closer, StringKind::Line);
            return rule.token_type;
        }
        if let Some(rule) = self.match_string_opener(StringKind::Multiline) {
            self.lex_string(rule.delims.closer, StringKind::Multiline);
            return rule.token_type;
        }
        if let Some(base) = self.match_int_prefix() {
            return self.lex_int_token(base);
        }
        if let Some((base, marker)) = self.match_float_prefix() {
            return self.lex_float_token(base, marker);
        }
        if let Some(punct) = self.match_punct() {
            return punct.token_type;
        }
        match self.config.word_rule {
            WordRule::Symbolic => self.lex_symbolic(),
            WordRule::Word => self.lex_word(),
        };
        self.word_type()
    }

    /// Scans the remainder of an integer token whose prefix (or first
    /// default-base digit) has been recognised.
    ///
    /// A radix separator directly after the digits triggers the
    /// speculative re-lex: the token is unlexed and re-attempted as a
    /// float. If the float prefix does not re-match, the integer scan
    /// is restored and the token flagged invalid; no suffix is
    /// consumed on that path.
    fn lex_int_token(&mut self, base: u32) -> i32 {
        if self.lex_integer(base) == 0 {
            // Prefix with no digits.
            self.match_int_suffix();
            return LexError::InvalidInteger.code();
        }
        if self.check_radix_separator() && self.config.default_float_base != 0 {
            let after_int = self.cursor.offset();
            self.hooks.before_unlex_int(&mut self.cursor);
            self.unlex();
            if let Some((base, marker)) = self.match_float_prefix() {
                return self.lex_float_token(base, marker);
            }
            self.cursor.advance_to(after_int);
            return LexError::InvalidInteger.code();
        }
        self.match_int_suffix();
        self.config.default_int_type
    }

    /// Scans the remainder of a float token whose prefix has been
    /// recognised.
    fn lex_float_token(&mut self, base: u32, exponent_marker: &str) -> i32 {
        if self.lex_float(base, exponent_marker) == 0 {
            return LexError::InvalidFloat.code();
        }
        self.config.default_float_type
    }

    /// Returns whether the token stream is exhausted.
    pub fn is_finished(&self) -> bool {
        matches!(self.status, Status::Finished | Status::FinishedAbnormal)
    }

    /// Returns the current status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Returns the error raised while scanning the current token, if
    /// any.
    pub fn error(&self) -> Option<LexError> {
        match self.status {
            Status::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Raises an error for the current token.
    pub(crate) fn set_error(&mut self, error: LexError) {
        self.status = Status::Error(error);
    }

    /// Returns the type of the most recently finalised token.
    pub fn previous_token_type(&self) -> i32 {
        self.previous_token_type
    }

    /// Returns the byte offset at which the current token began.
    pub fn token_start(&self) -> usize {
        self.token_start
    }

    /// Marks the token stream as abnormally finished; subsequent calls
    /// to [`next_token`](Self::next_token) return the abnormal end
    /// sentinel.
    pub fn finish_abnormally(&mut self) {
        self.status = Status::FinishedAbnormal;
    }

    /// Resets the lexer to the start of its input.
    ///
    /// The configuration and hooks are retained; re-lexing after a
    /// reset reproduces the exact token sequence.
    pub fn reset(&mut self) {
        self.cursor.reset();
        self.status = Status::Ready;
        self.previous_token_type = TOKEN_NO_TOKEN;
        self.token_start = 0;
        self.token_loc = Location::START;
    }

    /// Rewinds the cursor to the start of the current token,
    /// discarding the speculative scan.
    pub(crate) fn unlex(&mut self) {
        let rewound = self.cursor.rewind_to(self.token_start);
        debug_assert!(rewound, "cannot rewind to the start of the token");
    }

    /// Returns whether a line feed at the cursor may become its own
    /// token under the current policy.
    pub fn can_emit_line_ending(&self) -> bool {
        if !self.config.emit_line_endings {
            return false;
        }
        if self.previous_token_type == self.config.line_ending_type {
            return !self.config.collect_line_endings;
        }
        true
    }

    /// Begins a token at the cursor.
    pub(crate) fn start_token(&mut self) {
        if self.status == Status::Ready {
            self.status = Status::Lexing;
        }
        self.token_start = self.cursor.offset();
        self.token_loc = self.cursor.location();
    }

    /// Finishes the token ending at the cursor. A pending error
    /// overrides the token type and is cleared, so the next call
    /// starts clean.
    pub(crate) fn finish_token(&mut self, token_type: i32) -> Token<'src> {
        let token_type = match self.status {
            Status::Error(err) => {
                self.status = Status::Ready;
                err.code()
            }
            Status::Lexing => {
                self.status = Status::Ready;
                token_type
            }
            _ => token_type,
        };
        let span = Span::new(self.token_start, self.cursor.offset());
        let token = Token {
            text: self.cursor.slice_str(span.start, span.end),
            span,
            loc: self.token_loc,
            token_type,
        };
        self.previous_token_type = token_type;
        self.hooks.after_token(&token);
        token
    }

    /// Emits the end-of-tokens sentinel at the cursor.
    fn end_token(&mut self) -> Token<'src> {
        self.start_token();
        let token_type = if self.status == Status::FinishedAbnormal {
            TOKENS_END_ABNORMAL
        } else {
            self.status = Status::Finished;
            TOKENS_END
        };
        self.finish_token(token_type)
    }
}

impl<'src, H: Hooks> Iterator for Lexer<'src, H> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}
