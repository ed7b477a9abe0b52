//! Edge case and end-to-end scenario tests for the lexer.

use pretty_assertions::assert_eq;

use crate::config::{DelimPair, IntPrefix, Keyword, Punct, StringRule, WordRule};
use crate::error::LexError;
use crate::hooks::Hooks;
use crate::token::{Token, TOKENS_END, TOKEN_LINE_ENDING};
use crate::Lexer;
use lexkit_util::{Location, Span};

const T_WORD: i32 = 0;
const T_INT: i32 = 1;
const T_FLOAT: i32 = 2;
const T_STR: i32 = 3;
const T_DEF: i32 = 4;
const T_ID: i32 = 5;
const T_LPAREN: i32 = 6;
const T_RPAREN: i32 = 7;

fn lex_all<'a, H: Hooks>(lexer: &mut Lexer<'a, H>) -> Vec<Token<'a>> {
    let mut tokens = Vec::new();
    loop {
        let token = lexer.next_token();
        let done = token.is_end();
        tokens.push(token);
        if done {
            break;
        }
    }
    tokens
}

fn types(tokens: &[Token<'_>]) -> Vec<i32> {
    tokens.iter().map(|t| t.token_type).collect()
}

fn texts<'a>(tokens: &[Token<'a>]) -> Vec<&'a str> {
    tokens.iter().map(|t| t.text).collect()
}

// ==================== END-TO-END SCENARIOS ====================

#[test]
fn test_arithmetic_with_line_comment() {
    let mut lexer = Lexer::new("#hi\n  1 2 +  3 4 /*end*/");
    lexer.config.line_comment_openers = &["#"];
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [T_INT, T_INT, T_WORD, T_INT, T_INT, T_WORD, TOKENS_END]
    );
    assert_eq!(tokens[2].text, "+");
    // No block comments configured, so the trailing run is a plain
    // symbolic word.
    assert_eq!(tokens[5].text, "/*end*/");
}

#[test]
fn test_signed_integers_with_separator() {
    let mut lexer = Lexer::new("+1 -2 0_12_2__ _0");
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.number_signs = &["+", "-"];
    lexer.config.digit_separators = "_";
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_INT, T_INT, T_INT, T_WORD, TOKENS_END]);
    // `_` is a separator, not a digit, so `_0` is not an integer.
    assert_eq!(texts(&tokens)[..4], ["+1", "-2", "0_12_2__", "_0"]);
}

#[test]
fn test_string_with_escaped_delimiter() {
    let mut lexer = Lexer::new("\"a\\\"b\"");
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    lexer.config.string_escape_chars = "\\";
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_STR, TOKENS_END]);
    assert_eq!(tokens[0].text, "\"a\\\"b\"");
    assert_eq!(tokens[0].span, Span::new(0, 6));
}

#[test]
fn test_nested_block_comment() {
    let mut lexer = Lexer::new("/* a /* b */ c */x");
    lexer.config.nestable_comment_delims = &[DelimPair {
        opener: "/*",
        closer: "*/",
    }];
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_WORD, TOKENS_END]);
    assert_eq!(tokens[0].text, "x");
}

#[test]
fn test_unterminated_string() {
    let mut lexer = Lexer::new("\"abc");
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [LexError::UnclosedString.code(), TOKENS_END]
    );
    // The error token spans everything that was consumed.
    assert_eq!(tokens[0].span, Span::new(0, 4));
    assert!(tokens[0].is_error());
    assert_eq!(tokens[0].error(), Some(LexError::UnclosedString));
}

#[test]
fn test_keyword_vs_identifier() {
    let mut lexer = Lexer::new("def hello()");
    lexer.config.word_rule = WordRule::Word;
    lexer.config.default_word_type = T_ID;
    lexer.config.keywords = &[Keyword {
        word: "def",
        token_type: T_DEF,
    }];
    lexer.config.puncts = &[
        Punct {
            text: "(",
            token_type: T_LPAREN,
        },
        Punct {
            text: ")",
            token_type: T_RPAREN,
        },
        Punct {
            text: "{",
            token_type: 8,
        },
        Punct {
            text: "}",
            token_type: 9,
        },
    ];
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [T_DEF, T_ID, T_LPAREN, T_RPAREN, TOKENS_END]
    );
    assert_eq!(texts(&tokens)[..4], ["def", "hello", "(", ")"]);
}

// ==================== BOUNDARIES ====================

#[test]
fn test_empty_source() {
    let mut lexer = Lexer::new("");
    let token = lexer.next_token();
    assert_eq!(token.token_type, TOKENS_END);
    assert_eq!(token.loc, Location::new(0, 0));
}

#[test]
fn test_unclosed_block_comment_at_end() {
    let mut lexer = Lexer::new("x /* trailing");
    lexer.config.nestable_comment_delims = &[DelimPair {
        opener: "/*",
        closer: "*/",
    }];
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [T_WORD, LexError::UnclosedComment.code(), TOKENS_END]
    );
    // The error token starts at the comment opener and reaches the
    // end of the source.
    assert_eq!(tokens[1].span, Span::new(2, 13));
    assert_eq!(tokens[1].loc, Location::new(0, 2));
}

#[test]
fn test_int_prefix_without_digits() {
    let mut lexer = Lexer::new("0x");
    lexer.config.int_prefixes = &[IntPrefix {
        prefix: "0x",
        base: 16,
    }];
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [LexError::InvalidInteger.code(), TOKENS_END]
    );
    assert_eq!(tokens[0].text, "0x");
}

#[test]
fn test_int_to_float_relex() {
    let mut lexer = Lexer::new("12.34");
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.default_float_type = T_FLOAT;
    lexer.config.default_float_base = 10;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_FLOAT, TOKENS_END]);
    assert_eq!(tokens[0].span, Span::new(0, 5));
}

#[test]
fn test_float_with_empty_fraction() {
    let mut lexer = Lexer::new("12.");
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.default_float_type = T_FLOAT;
    lexer.config.default_float_base = 10;
    let tokens = lex_all(&mut lexer);
    // The integer part supplies the digits; the fraction may be empty.
    assert_eq!(types(&tokens), [T_FLOAT, TOKENS_END]);
    assert_eq!(tokens[0].text, "12.");
}

#[test]
fn test_bare_integer_stays_integer() {
    let mut lexer = Lexer::new("1234 x");
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.default_float_type = T_FLOAT;
    lexer.config.default_float_base = 10;
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_INT, T_WORD, TOKENS_END]);
}

#[test]
fn test_radix_separator_without_float_lexing() {
    let mut lexer = Lexer::new("12.34");
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    // Float lexing disabled: the dot is not part of the number.
    assert_eq!(types(&tokens), [T_INT, T_WORD, TOKENS_END]);
    assert_eq!(texts(&tokens)[..2], ["12", ".34"]);
}

#[test]
fn test_hex_digits_case_insensitive() {
    let mut lexer = Lexer::new("0xAbCdEf");
    lexer.config.int_prefixes = &[IntPrefix {
        prefix: "0x",
        base: 16,
    }];
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_INT, TOKENS_END]);
    assert_eq!(tokens[0].text, "0xAbCdEf");
}

#[test]
fn test_integer_suffix_consumed() {
    let mut lexer = Lexer::new("10u x");
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.int_suffixes = &["u", "i"];
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_INT, T_WORD, TOKENS_END]);
    assert_eq!(tokens[0].text, "10u");
}

#[test]
fn test_failed_relex_keeps_integer_span() {
    // `#` introduces base-10 integers; float lexing is enabled but in
    // base 2, so the re-lex after the radix separator cannot re-match.
    let mut lexer = Lexer::new("#9.1");
    lexer.config.int_prefixes = &[IntPrefix {
        prefix: "#",
        base: 10,
    }];
    lexer.config.default_int_type = T_INT;
    lexer.config.default_float_type = T_FLOAT;
    lexer.config.default_float_base = 2;
    lexer.config.default_word_type = T_WORD;
    lexer.config.int_suffixes = &["u"];
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [LexError::InvalidInteger.code(), T_WORD, TOKENS_END]
    );
    // The invalid token covers the integer scan; no suffix is consumed
    // after a failed re-lex, and lexing resumes at the separator.
    assert_eq!(texts(&tokens)[..2], ["#9", ".1"]);
}

#[test]
fn test_invalid_float_spans_prefix() {
    let mut lexer = Lexer::new("0fx");
    lexer.config.float_prefixes = &[crate::FloatPrefix {
        prefix: "0f",
        base: 10,
        exponent_marker: "e",
    }];
    lexer.config.default_float_type = T_FLOAT;
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [LexError::InvalidFloat.code(), T_WORD, TOKENS_END]
    );
    assert_eq!(texts(&tokens)[..2], ["0f", "x"]);
}

#[test]
fn test_string_opener_beats_punct() {
    let mut lexer = Lexer::new("\"s\"");
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    lexer.config.puncts = &[Punct {
        text: "\"",
        token_type: 42,
    }];
    let tokens = lex_all(&mut lexer);
    // The delimiter also appears in the punctuation list, but strings
    // are tried first.
    assert_eq!(types(&tokens), [T_STR, TOKENS_END]);
}

#[test]
fn test_unclosed_line_string_resumes_next_line() {
    let mut lexer = Lexer::new("\"ab\ncd");
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [LexError::UnclosedString.code(), T_WORD, TOKENS_END]
    );
    assert_eq!(tokens[0].text, "\"ab\n");
    assert_eq!(tokens[1].text, "cd");
}

#[test]
fn test_multiline_string_token() {
    let mut lexer = Lexer::new("'''a\nb''' x");
    lexer.config.multiline_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "'''",
            closer: "'''",
        },
        token_type: T_STR,
    }];
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_STR, T_WORD, TOKENS_END]);
    assert_eq!(tokens[0].text, "'''a\nb'''");
}

#[test]
fn test_multibyte_source_words() {
    let mut lexer = Lexer::new("wörld ☃ end");
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_WORD, T_WORD, T_WORD, TOKENS_END]);
    assert_eq!(texts(&tokens)[..3], ["wörld", "☃", "end"]);
}

#[test]
fn test_multibyte_string_content() {
    let mut lexer = Lexer::new("\"héllo wörld\" x");
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    lexer.config.string_escape_chars = "\\";
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_STR, T_WORD, TOKENS_END]);
    assert_eq!(tokens[0].text, "\"héllo wörld\"");
}

#[test]
fn test_unclosed_string_with_multibyte_content() {
    let mut lexer = Lexer::new("\"é");
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [LexError::UnclosedString.code(), TOKENS_END]
    );
    assert_eq!(tokens[0].span, Span::new(0, 3));
    assert_eq!(tokens[0].text, "\"é");
}

#[test]
fn test_multibyte_comment_content() {
    let mut lexer = Lexer::new("/* à la /* carté */ ☃ */x");
    lexer.config.nestable_comment_delims = &[DelimPair {
        opener: "/*",
        closer: "*/",
    }];
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(types(&tokens), [T_WORD, TOKENS_END]);
    assert_eq!(tokens[0].text, "x");
}

#[test]
fn test_line_ending_token_value() {
    let mut lexer = Lexer::new("a\nb");
    lexer.config.emit_line_endings = true;
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(
        types(&tokens),
        [T_WORD, TOKEN_LINE_ENDING, T_WORD, TOKENS_END]
    );
    assert_eq!(tokens[1].text, "\n");
    assert_eq!(tokens[1].loc, Location::new(0, 1));
    assert_eq!(tokens[2].loc, Location::new(1, 0));
}

#[test]
fn test_locations_across_lines() {
    let mut lexer = Lexer::new("one\n  two\nthree");
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    assert_eq!(tokens[0].loc, Location::new(0, 0));
    assert_eq!(tokens[1].loc, Location::new(1, 2));
    assert_eq!(tokens[2].loc, Location::new(2, 0));
}

#[test]
fn test_reset_reproduces_rich_stream() {
    let mut lexer = Lexer::new("let x = 0x1f; // c\n\"s\" 1.5");
    lexer.config.line_comment_openers = &["//"];
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    lexer.config.int_prefixes = &[IntPrefix {
        prefix: "0x",
        base: 16,
    }];
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.default_float_type = T_FLOAT;
    lexer.config.default_float_base = 10;
    lexer.config.word_rule = WordRule::Word;
    lexer.config.default_word_type = T_ID;
    lexer.config.keywords = &[Keyword {
        word: "let",
        token_type: T_DEF,
    }];
    lexer.config.puncts = &[
        Punct {
            text: "=",
            token_type: 10,
        },
        Punct {
            text: ";",
            token_type: 11,
        },
    ];
    let first: Vec<_> = lex_all(&mut lexer)
        .iter()
        .map(|t| (t.token_type, t.span, t.loc))
        .collect();
    lexer.reset();
    let second: Vec<_> = lex_all(&mut lexer)
        .iter()
        .map(|t| (t.token_type, t.span, t.loc))
        .collect();
    assert_eq!(first, second);
}

#[test]
fn test_spans_tile_the_source() {
    let source = " 1 + two /* c */ \"s\" ";
    let mut lexer = Lexer::new(source);
    lexer.config.nestable_comment_delims = &[DelimPair {
        opener: "/*",
        closer: "*/",
    }];
    lexer.config.line_string_rules = &[StringRule {
        delims: DelimPair {
            opener: "\"",
            closer: "\"",
        },
        token_type: T_STR,
    }];
    lexer.config.default_int_type = T_INT;
    lexer.config.default_int_base = 10;
    lexer.config.default_word_type = T_WORD;
    let tokens = lex_all(&mut lexer);
    let mut cursor = 0;
    for token in &tokens {
        // Gaps contain only skipped whitespace and comments.
        assert!(token.span.start >= cursor);
        assert!(token.span.end >= token.span.start);
        assert!(token.span.end <= source.len());
        cursor = token.span.end;
    }
    assert_eq!(tokens.last().unwrap().token_type, TOKENS_END);
}
