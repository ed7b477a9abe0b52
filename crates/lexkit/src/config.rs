//! Lexer configuration: the lexical grammar.
//!
//! All configuration is caller-owned, borrowed data. Each rule class is
//! a slice of record structs (delimiter + token type, prefix + base,
//! ...); an empty slice disables the corresponding feature. The slices
//! are searched in order, so longer alternatives must precede their own
//! prefixes to avoid shadowing (list `"<<"` before `"<"`).
//!
//! Configuration fields may be rewritten between tokens; rewriting them
//! while a token is being lexed (from a hook) is unsupported.

use thiserror::Error;

use crate::token::{TOKEN_LINE_ENDING, TOKEN_UNINIT};
use crate::LexError;

/// A pair of delimiters bracketing a comment or string, e.g. `/*` and
/// `*/` for C-style block comments.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DelimPair<'a> {
    /// The opening delimiter.
    pub opener: &'a str,
    /// The closing delimiter.
    pub closer: &'a str,
}

/// A string-literal rule: its delimiters and the token type produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StringRule<'a> {
    /// The delimiters bracketing the literal.
    pub delims: DelimPair<'a>,
    /// The token type for literals bracketed by these delimiters.
    pub token_type: i32,
}

/// Whether a string is lexed as single-line or multiline.
///
/// A line feed terminates a [`StringKind::Line`] string with an
/// unclosed-string error; a [`StringKind::Multiline`] string runs
/// until its closer or the end of input.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StringKind {
    Line,
    Multiline,
}

/// An integer-literal prefix and the base it selects, e.g. `0x` / 16.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IntPrefix<'a> {
    /// The prefix introducing the literal.
    pub prefix: &'a str,
    /// The numeric base (2..=36) of the digits that follow.
    pub base: u32,
}

/// A float-literal prefix: the base it selects and the exponent marker
/// used with it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FloatPrefix<'a> {
    /// The prefix introducing the literal.
    pub prefix: &'a str,
    /// The numeric base (2..=36) of the digits that follow.
    pub base: u32,
    /// The exponent marker for this form (e.g. `p` for hex floats).
    pub exponent_marker: &'a str,
}

/// A punctuation token value and its type, e.g. `==` or `;`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Punct<'a> {
    /// The punctuation text.
    pub text: &'a str,
    /// The token type it produces.
    pub token_type: i32,
}

/// A keyword: a word token with a unique type.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Keyword<'a> {
    /// The keyword text, compared byte-for-byte against word tokens.
    pub word: &'a str,
    /// The token type it produces.
    pub token_type: i32,
}

/// The rule used to delimit word tokens.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum WordRule {
    /// Consume any run of non-whitespace bytes.
    #[default]
    Symbolic,
    /// Consume only non-reserved bytes (stop at comment openers,
    /// string openers and punctuation as well as whitespace).
    Word,
}

/// The characters treated as whitespace, apart from line feed (which
/// has special handling in the lexer).
pub const WHITESPACE_CHARS_NO_LF: &str = " \t\r\x0C\x0B";
/// The characters treated as whitespace, including line feed.
pub const WHITESPACE_CHARS: &str = " \t\r\x0C\x0B\n";

/// The default exponent signs, `+` and `-`.
pub const DEFAULT_EXPONENT_SIGNS: &[&str] = &["+", "-"];
/// The default radix separator, `.`.
pub const DEFAULT_RADIX_SEPARATORS: &[&str] = &["."];
/// The default exponent marker, `e`.
pub const DEFAULT_EXPONENT_MARKER: &str = "e";

/// The lexical grammar consumed by [`Lexer`](crate::Lexer).
///
/// The default configuration recognises nothing but symbolic words:
/// every feature starts disabled and is switched on by assigning its
/// field.
#[derive(Clone, Copy, Debug)]
pub struct LexerConfig<'a> {
    /// Line comment openers (comment runs to end of line).
    pub line_comment_openers: &'a [&'a str],
    /// Delimiters of block comments whose openers nest.
    pub nestable_comment_delims: &'a [DelimPair<'a>],
    /// Delimiters of block comments that do not nest.
    pub unnestable_comment_delims: &'a [DelimPair<'a>],
    /// Single-line string rules.
    pub line_string_rules: &'a [StringRule<'a>],
    /// Multiline string rules.
    pub multiline_string_rules: &'a [StringRule<'a>],
    /// Escape characters inside strings (a closer directly after one
    /// does not terminate the literal).
    pub string_escape_chars: &'a str,
    /// Digit separator characters allowed inside number literals.
    pub digit_separators: &'a str,
    /// Signs that may precede number literals (e.g. `+`, `-`).
    pub number_signs: &'a [&'a str],
    /// Integer literal prefixes and their bases.
    pub int_prefixes: &'a [IntPrefix<'a>],
    /// Integer literal suffixes.
    pub int_suffixes: &'a [&'a str],
    /// Token type for integer literals.
    pub default_int_type: i32,
    /// Base for unprefixed integer literals; 0 disables integer
    /// lexing.
    pub default_int_base: u32,
    /// Float literal prefixes, their bases and exponent markers.
    pub float_prefixes: &'a [FloatPrefix<'a>],
    /// Signs allowed in float exponents.
    pub exponent_signs: &'a [&'a str],
    /// Radix separators for float literals.
    pub radix_separators: &'a [&'a str],
    /// Float literal suffixes.
    pub float_suffixes: &'a [&'a str],
    /// Token type for float literals.
    pub default_float_type: i32,
    /// Base for unprefixed float literals; 0 disables float lexing.
    pub default_float_base: u32,
    /// Exponent marker for unprefixed float literals.
    pub default_exponent_marker: &'a str,
    /// Punctuation tokens, searched in order.
    pub puncts: &'a [Punct<'a>],
    /// Keywords, compared against completed word tokens.
    pub keywords: &'a [Keyword<'a>],
    /// Token type for non-keyword words.
    pub default_word_type: i32,
    /// The word lexing rule.
    pub word_rule: WordRule,
    /// Token type for line-ending tokens.
    pub line_ending_type: i32,
    /// Should line endings have their own tokens?
    pub emit_line_endings: bool,
    /// Should consecutive line-ending tokens be combined?
    pub collect_line_endings: bool,
}

impl Default for LexerConfig<'_> {
    fn default() -> Self {
        Self {
            line_comment_openers: &[],
            nestable_comment_delims: &[],
            unnestable_comment_delims: &[],
            line_string_rules: &[],
            multiline_string_rules: &[],
            string_escape_chars: "",
            digit_separators: "",
            number_signs: &[],
            int_prefixes: &[],
            int_suffixes: &[],
            default_int_type: LexError::Generic.code(),
            default_int_base: 0,
            float_prefixes: &[],
            exponent_signs: DEFAULT_EXPONENT_SIGNS,
            radix_separators: DEFAULT_RADIX_SEPARATORS,
            float_suffixes: &[],
            default_float_type: LexError::Generic.code(),
            default_float_base: 0,
            default_exponent_marker: DEFAULT_EXPONENT_MARKER,
            puncts: &[],
            keywords: &[],
            default_word_type: TOKEN_UNINIT,
            word_rule: WordRule::default(),
            line_ending_type: TOKEN_LINE_ENDING,
            emit_line_endings: false,
            collect_line_endings: true,
        }
    }
}

/// A configuration mistake detected by [`LexerConfig::validate`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// A numeric base lies outside 2..=36.
    #[error("base {base} out of range (2..=36) for prefix '{prefix}'")]
    BaseOutOfRange { prefix: String, base: u32 },

    /// A default base is neither 0 (disabled) nor within 2..=36.
    #[error("default {kind} base {base} out of range (0 or 2..=36)")]
    DefaultBaseOutOfRange { kind: &'static str, base: u32 },

    /// A delimiter, opener, prefix or punct is the empty string, which
    /// would match everywhere.
    #[error("empty {what} in configuration")]
    EmptyMatcher { what: &'static str },
}

impl LexerConfig<'_> {
    /// Validates the configuration once, before lexing.
    ///
    /// Checks that every base is within 2..=36 (default bases may also
    /// be 0, meaning disabled) and that no matcher string is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        fn default_base(kind: &'static str, base: u32) -> Result<(), ConfigError> {
            if base == 0 || (2..=36).contains(&base) {
                Ok(())
            } else {
                Err(ConfigError::DefaultBaseOutOfRange { kind, base })
            }
        }
        fn non_empty(what: &'static str, text: &str) -> Result<(), ConfigError> {
            if text.is_empty() {
                Err(ConfigError::EmptyMatcher { what })
            } else {
                Ok(())
            }
        }

        default_base("integer", self.default_int_base)?;
        default_base("float", self.default_float_base)?;
        for p in self.int_prefixes {
            non_empty("integer prefix", p.prefix)?;
            if !(2..=36).contains(&p.base) {
                return Err(ConfigError::BaseOutOfRange {
                    prefix: p.prefix.to_owned(),
                    base: p.base,
                });
            }
        }
        for p in self.float_prefixes {
            non_empty("float prefix", p.prefix)?;
            if !(2..=36).contains(&p.base) {
                return Err(ConfigError::BaseOutOfRange {
                    prefix: p.prefix.to_owned(),
                    base: p.base,
                });
            }
        }
        for opener in self.line_comment_openers {
            non_empty("line comment opener", opener)?;
        }
        for delims in self
            .nestable_comment_delims
            .iter()
            .chain(self.unnestable_comment_delims)
        {
            non_empty("comment opener", delims.opener)?;
            non_empty("comment closer", delims.closer)?;
        }
        for rule in self
            .line_string_rules
            .iter()
            .chain(self.multiline_string_rules)
        {
            non_empty("string opener", rule.delims.opener)?;
            non_empty("string closer", rule.delims.closer)?;
        }
        for sign in self.number_signs.iter().chain(self.exponent_signs) {
            non_empty("number sign", sign)?;
        }
        for sep in self.radix_separators {
            non_empty("radix separator", sep)?;
        }
        for punct in self.puncts {
            non_empty("punct", punct.text)?;
        }
        for keyword in self.keywords {
            non_empty("keyword", keyword.word)?;
        }
        Ok(())
    }
}
