//! Match primitives.
//!
//! Two parallel method families over the configured grammar: `check_*`
//! inspects the upcoming bytes without (net) cursor movement, `match_*`
//! inspects and, on success, consumes exactly the matched span. The
//! domain-specific wrappers (comments, string openers, digits, numeric
//! prefixes, punctuation) are thin layers over the generic character,
//! string and list matchers.
//!
//! List matchers take the first match in order, so the caller controls
//! precedence: longer alternatives must precede their own prefixes.

use crate::config::{StringKind, StringRule, WHITESPACE_CHARS, WHITESPACE_CHARS_NO_LF};
use crate::hooks::Hooks;
use crate::lexer::Lexer;
use crate::Punct;

/// Digit values per input byte: `0-9` map to 0..=9 and the latin
/// letters map case-insensitively to 10..=35; everything else is 0xFF.
const DIGIT_VALUES: [u8; 256] = build_digit_values();

const fn build_digit_values() -> [u8; 256] {
    let mut table = [0xFF_u8; 256];
    let mut i = 0;
    while i < 10 {
        table[b'0' as usize + i] = i as u8;
        i += 1;
    }
    let mut j = 0;
    while j < 26 {
        table[b'a' as usize + j] = 10 + j as u8;
        table[b'A' as usize + j] = 10 + j as u8;
        j += 1;
    }
    table
}

impl<'src, H: Hooks> Lexer<'src, H> {
    /// Returns whether the current byte is one of `chars`.
    pub fn check_chars(&self, chars: &str) -> bool {
        match self.cursor.current() {
            Some(byte) => chars.as_bytes().contains(&byte),
            None => false,
        }
    }

    /// Consumes the current byte if it is one of `chars`.
    pub fn match_chars(&mut self, chars: &str) -> bool {
        if self.check_chars(chars) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Returns whether the next bytes match `s` exactly. Fails when
    /// fewer than `s.len()` bytes remain.
    pub fn check_string(&self, s: &str) -> bool {
        self.cursor.remaining().starts_with(s.as_bytes())
    }

    /// Consumes `s` if the next bytes match it exactly.
    pub fn match_string(&mut self, s: &str) -> bool {
        if self.check_string(s) {
            self.cursor.advance_by(s.len());
            true
        } else {
            false
        }
    }

    /// Returns whether the next `n` bytes match the first `n` bytes of
    /// `s` (`n` is clamped to the length of `s`).
    pub fn check_string_n(&self, s: &str, n: usize) -> bool {
        let n = n.min(s.len());
        let remaining = self.cursor.remaining();
        remaining.len() >= n && remaining[..n] == s.as_bytes()[..n]
    }

    /// Consumes the first `n` bytes of `s` if the next bytes match
    /// them.
    pub fn match_string_n(&mut self, s: &str, n: usize) -> bool {
        if self.check_string_n(s, n) {
            self.cursor.advance_by(n.min(s.len()));
            true
        } else {
            false
        }
    }

    /// Returns the index of the first string in `strings` matching the
    /// next bytes, without consuming it.
    pub fn check_strs(&self, strings: &[&str]) -> Option<usize> {
        strings.iter().position(|s| self.check_string(s))
    }

    /// Consumes the first string in `strings` matching the next bytes
    /// and returns its index.
    pub fn match_strs(&mut self, strings: &[&str]) -> Option<usize> {
        for (i, s) in strings.iter().enumerate() {
            if self.match_string(s) {
                return Some(i);
            }
        }
        None
    }

    /// Returns whether the current byte is whitespace under the
    /// line-ending policy: when a line feed could become its own
    /// token, it does not count as whitespace.
    pub fn check_whitespace(&self) -> bool {
        if self.can_emit_line_ending() {
            self.check_chars(WHITESPACE_CHARS_NO_LF)
        } else {
            self.check_chars(WHITESPACE_CHARS)
        }
    }

    /// Returns whether the current byte is whitespace, always counting
    /// line feed.
    pub fn check_whitespace_with_lf(&self) -> bool {
        self.check_chars(WHITESPACE_CHARS)
    }

    /// Returns whether the upcoming bytes are reserved: whitespace, a
    /// comment opener, a string opener, or punctuation.
    pub fn check_reserved(&self) -> bool {
        self.check_whitespace_with_lf()
            || self.check_line_comment()
            || self.check_block_comment()
            || self.check_string_opener(StringKind::Line).is_some()
            || self.check_string_opener(StringKind::Multiline).is_some()
            || self.check_punct().is_some()
    }

    /// Returns whether the next bytes open a line comment.
    pub fn check_line_comment(&self) -> bool {
        self.check_strs(self.config.line_comment_openers).is_some()
    }

    /// Consumes a line comment (to the end of the line, line feed not
    /// consumed) if one starts here.
    pub fn match_line_comment(&mut self) -> bool {
        if !self.check_line_comment() {
            return false;
        }
        self.skip_line();
        true
    }

    /// Returns whether the next bytes open a block comment of either
    /// kind.
    pub fn check_block_comment(&self) -> bool {
        self.check_nestable_comment() || self.check_unnestable_comment()
    }

    /// Consumes a block comment of either kind if one starts here.
    pub fn match_block_comment(&mut self) -> bool {
        if self.match_nestable_comment() {
            return true;
        }
        self.match_unnestable_comment()
    }

    /// Returns whether the next bytes open a nestable block comment.
    pub fn check_nestable_comment(&self) -> bool {
        self.config
            .nestable_comment_delims
            .iter()
            .any(|delims| self.check_string(delims.opener))
    }

    /// Returns whether the next bytes open an unnestable block
    /// comment.
    pub fn check_unnestable_comment(&self) -> bool {
        self.config
            .unnestable_comment_delims
            .iter()
            .any(|delims| self.check_string(delims.opener))
    }

    /// Consumes a whole nestable block comment if one starts here. On
    /// an unclosed comment the error is raised and the token origin is
    /// pinned to the comment opener.
    pub fn match_nestable_comment(&mut self) -> bool {
        let delims_list = self.config.nestable_comment_delims;
        for delims in delims_list {
            let start = self.cursor.offset();
            let loc = self.cursor.location();
            if self.match_string(delims.opener) {
                self.skip_block_comment(*delims, true);
                if self.error().is_some() {
                    self.token_start = start;
                    self.token_loc = loc;
                }
                return true;
            }
        }
        false
    }

    /// Consumes a whole unnestable block comment if one starts here.
    /// On an unclosed comment the error is raised and the token origin
    /// is pinned to the comment opener.
    pub fn match_unnestable_comment(&mut self) -> bool {
        let delims_list = self.config.unnestable_comment_delims;
        for delims in delims_list {
            let start = self.cursor.offset();
            let loc = self.cursor.location();
            if self.match_string(delims.opener) {
                self.skip_block_comment(*delims, false);
                if self.error().is_some() {
                    self.token_start = start;
                    self.token_loc = loc;
                }
                return true;
            }
        }
        false
    }

    /// Returns the first string rule of the given kind whose opener
    /// matches the next bytes, without consuming the opener.
    pub fn check_string_opener(&self, kind: StringKind) -> Option<StringRule<'src>> {
        let rules = match kind {
            StringKind::Line => self.config.line_string_rules,
            StringKind::Multiline => self.config.multiline_string_rules,
        };
        rules
            .iter()
            .copied()
            .find(|rule| self.check_string(rule.delims.opener))
    }

    /// Consumes the opener of the first matching string rule of the
    /// given kind and returns the rule.
    pub fn match_string_opener(&mut self, kind: StringKind) -> Option<StringRule<'src>> {
        let rule = self.check_string_opener(kind)?;
        self.cursor.advance_by(rule.delims.opener.len());
        Some(rule)
    }

    /// Returns whether the current byte is a digit of the given base
    /// (2..=36). Digits 10+ use the latin letters case-insensitively.
    /// Base 0 means disabled and matches nothing.
    pub fn check_digit(&self, base: u32) -> bool {
        if base == 0 {
            return false;
        }
        debug_assert!((2..=36).contains(&base));
        match self.cursor.current() {
            Some(byte) => (DIGIT_VALUES[byte as usize] as u32) < base,
            None => false,
        }
    }

    /// Consumes the current byte if it is a digit of the given base.
    pub fn match_digit(&mut self, base: u32) -> bool {
        if self.check_digit(base) {
            self.cursor.advance();
            true
        } else {
            false
        }
    }

    /// Returns whether the current byte is a digit separator.
    pub fn check_digit_separator(&self) -> bool {
        self.check_chars(self.config.digit_separators)
    }

    /// Consumes the current byte if it is a digit separator.
    pub fn match_digit_separator(&mut self) -> bool {
        let separators = self.config.digit_separators;
        self.match_chars(separators)
    }

    /// Returns whether the current byte is a digit of the given base
    /// or a digit separator.
    pub fn check_digit_or_separator(&self, base: u32) -> bool {
        self.check_digit(base) || self.check_digit_separator()
    }

    /// Consumes the current byte if it is a digit of the given base or
    /// a digit separator.
    pub fn match_digit_or_separator(&mut self, base: u32) -> bool {
        self.match_digit(base) || self.match_digit_separator()
    }

    /// Returns the base selected by an integer prefix at the cursor
    /// (tolerating a leading number sign), without consuming anything.
    /// Falls back to the default integer base when its digits start
    /// here.
    pub fn check_int_prefix(&mut self) -> Option<u32> {
        let start = self.cursor.offset();
        self.match_number_sign();
        let mut base = None;
        for p in self.config.int_prefixes {
            if self.check_string(p.prefix) {
                base = Some(p.base);
                break;
            }
        }
        if base.is_none() && self.check_digit(self.config.default_int_base) {
            base = Some(self.config.default_int_base);
        }
        self.cursor.rewind_to(start);
        base
    }

    /// Consumes a number sign and integer prefix (or just the sign,
    /// for a default-base literal) and returns the selected base.
    /// Consumes nothing when no integer literal starts here.
    pub fn match_int_prefix(&mut self) -> Option<u32> {
        let start = self.cursor.offset();
        self.match_number_sign();
        for p in self.config.int_prefixes {
            if self.match_string(p.prefix) {
                return Some(p.base);
            }
        }
        if self.check_digit(self.config.default_int_base) {
            return Some(self.config.default_int_base);
        }
        self.cursor.rewind_to(start);
        None
    }

    /// Returns whether the next bytes are an integer suffix.
    pub fn check_int_suffix(&self) -> bool {
        self.check_strs(self.config.int_suffixes).is_some()
    }

    /// Consumes an integer suffix if one starts here.
    pub fn match_int_suffix(&mut self) -> bool {
        let suffixes = self.config.int_suffixes;
        self.match_strs(suffixes).is_some()
    }

    /// Returns the base and exponent marker selected by a float prefix
    /// at the cursor (tolerating a leading number sign), without
    /// consuming anything.
    pub fn check_float_prefix(&mut self) -> Option<(u32, &'src str)> {
        let start = self.cursor.offset();
        self.match_number_sign();
        let mut result = None;
        for p in self.config.float_prefixes {
            if self.check_string(p.prefix) {
                result = Some((p.base, p.exponent_marker));
                break;
            }
        }
        if result.is_none() && self.check_digit(self.config.default_float_base) {
            result = Some((
                self.config.default_float_base,
                self.config.default_exponent_marker,
            ));
        }
        self.cursor.rewind_to(start);
        result
    }

    /// Consumes a number sign and float prefix (or just the sign, for
    /// a default-base literal) and returns the base and exponent
    /// marker. Consumes nothing when no float literal starts here.
    pub fn match_float_prefix(&mut self) -> Option<(u32, &'src str)> {
        let start = self.cursor.offset();
        self.match_number_sign();
        for p in self.config.float_prefixes {
            if self.match_string(p.prefix) {
                return Some((p.base, p.exponent_marker));
            }
        }
        if self.check_digit(self.config.default_float_base) {
            return Some((
                self.config.default_float_base,
                self.config.default_exponent_marker,
            ));
        }
        self.cursor.rewind_to(start);
        None
    }

    /// Returns whether the next bytes are a float suffix.
    pub fn check_float_suffix(&self) -> bool {
        self.check_strs(self.config.float_suffixes).is_some()
    }

    /// Consumes a float suffix if one starts here.
    pub fn match_float_suffix(&mut self) -> bool {
        let suffixes = self.config.float_suffixes;
        self.match_strs(suffixes).is_some()
    }

    /// Returns whether the next bytes are a number sign.
    pub fn check_number_sign(&self) -> bool {
        self.check_strs(self.config.number_signs).is_some()
    }

    /// Consumes a number sign if one starts here.
    pub fn match_number_sign(&mut self) -> bool {
        let signs = self.config.number_signs;
        self.match_strs(signs).is_some()
    }

    /// Returns whether the next bytes are a radix separator.
    pub fn check_radix_separator(&self) -> bool {
        self.check_strs(self.config.radix_separators).is_some()
    }

    /// Consumes a radix separator if one starts here.
    pub fn match_radix_separator(&mut self) -> bool {
        let separators = self.config.radix_separators;
        self.match_strs(separators).is_some()
    }

    /// Returns whether the next bytes are an exponent sign.
    pub fn check_exponent_sign(&self) -> bool {
        self.check_strs(self.config.exponent_signs).is_some()
    }

    /// Consumes an exponent sign if one starts here.
    pub fn match_exponent_sign(&mut self) -> bool {
        let signs = self.config.exponent_signs;
        self.match_strs(signs).is_some()
    }

    /// Returns the first punctuation rule matching the next bytes,
    /// without consuming it.
    pub fn check_punct(&self) -> Option<Punct<'src>> {
        self.config
            .puncts
            .iter()
            .copied()
            .find(|punct| self.check_string(punct.text))
    }

    /// Consumes the first punctuation rule matching the next bytes and
    /// returns it.
    pub fn match_punct(&mut self) -> Option<Punct<'src>> {
        let punct = self.check_punct()?;
        self.cursor.advance_by(punct.text.len());
        Some(punct)
    }
}
