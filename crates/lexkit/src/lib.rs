//! lexkit - a configurable, zero-copy lexical scanner.
//!
//! A caller supplies a source text and a lexical grammar (comment
//! openers, string delimiters, numeric prefixes, punctuation, keywords)
//! and repeatedly requests the next token. The lexer owns no parsing
//! state above the token, performs no interpretation of token contents,
//! and never copies the source: every [`Token`] is a borrowed view.
//!
//! Non-negative token types are defined by the caller; negative types
//! are reserved sentinels and error codes (see [`token`] and
//! [`LexError`]).
//!
//! # Example
//!
//! ```
//! use lexkit::{DelimPair, Lexer, Punct, StringRule, WordRule};
//!
//! const T_INT: i32 = 0;
//! const T_STRING: i32 = 1;
//! const T_WORD: i32 = 2;
//! const T_LPAREN: i32 = 3;
//! const T_RPAREN: i32 = 4;
//!
//! let mut lexer = Lexer::new("println(\"total\", 2 + 2)  # report\n");
//! lexer.config.line_comment_openers = &["#"];
//! lexer.config.default_int_type = T_INT;
//! lexer.config.default_int_base = 10;
//! lexer.config.line_string_rules = &[StringRule {
//!     delims: DelimPair { opener: "\"", closer: "\"" },
//!     token_type: T_STRING,
//! }];
//! lexer.config.string_escape_chars = "\\";
//! lexer.config.puncts = &[
//!     Punct { text: "(", token_type: T_LPAREN },
//!     Punct { text: ")", token_type: T_RPAREN },
//! ];
//! lexer.config.default_word_type = T_WORD;
//! lexer.config.word_rule = WordRule::Word;
//!
//! let first = lexer.next_token();
//! assert_eq!(first.token_type, T_WORD);
//! assert_eq!(first.text, "println");
//!
//! let second = lexer.next_token();
//! assert_eq!(second.token_type, T_LPAREN);
//!
//! let third = lexer.next_token();
//! assert_eq!(third.token_type, T_STRING);
//! assert_eq!(third.text, "\"total\"");
//! ```
//!
//! The token stream ends with a sentinel of type [`token::TOKENS_END`],
//! returned on every call once the source is exhausted. Errors are
//! in-band: a malformed construct produces a token whose type is the
//! corresponding [`LexError`] code and whose span covers everything the
//! scanner consumed, after which lexing continues.

pub mod config;
pub mod cursor;
pub mod error;
pub mod hooks;
mod lexer;
pub mod token;

#[cfg(test)]
mod edge_cases;

pub use config::{
    ConfigError, DelimPair, FloatPrefix, IntPrefix, Keyword, LexerConfig, Punct, StringKind,
    StringRule, WordRule,
};
pub use cursor::Cursor;
pub use error::LexError;
pub use hooks::{Hooks, NoHooks};
pub use lexer::{Lexer, Status};
pub use lexkit_util::{Location, Span};
pub use token::Token;
