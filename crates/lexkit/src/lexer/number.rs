//! Integer and float literal scanning.
//!
//! Both scanners consume digit runs in a configured base, with digit
//! separators allowed anywhere in the run but counting for nothing. A
//! scan that finds no real digit calls the matching unlex hook, rewinds
//! exactly what it consumed, and reports zero; the caller decides what
//! that means (an invalid literal at the top level, an empty part
//! inside a float).

use crate::hooks::Hooks;
use crate::lexer::Lexer;

impl<'src, H: Hooks> Lexer<'src, H> {
    /// Consumes the digits of an integer literal in the given base,
    /// returning the number of bytes consumed.
    ///
    /// At least one real digit is required; separators alone do not
    /// count. On zero digits the scan is rewound and 0 returned.
    pub fn lex_integer(&mut self, base: u32) -> usize {
        let start = self.cursor.offset();
        let mut digit_count = 0usize;
        loop {
            if self.match_digit(base) {
                digit_count += 1;
            } else if self.match_digit_separator() {
                // Consumed, but satisfies nothing.
            } else {
                break;
            }
        }
        if digit_count == 0 {
            self.hooks.before_unlex_int(&mut self.cursor);
            self.cursor.rewind_to(start);
            return 0;
        }
        self.cursor.offset() - start
    }

    /// Consumes the body of a float literal in the given base:
    /// integer part, optional radix separator and fraction, optional
    /// exponent marker with sign and exponent digits. Returns the
    /// number of bytes consumed.
    ///
    /// Any single part may be empty; the literal is accepted as long
    /// as the three parts contribute at least one digit between them.
    /// Otherwise the scan is rewound and 0 returned.
    pub fn lex_float(&mut self, base: u32, exponent_marker: &str) -> usize {
        let start = self.cursor.offset();
        let mut digits = self.lex_integer(base);
        if self.match_radix_separator() {
            digits += self.lex_integer(base);
        }
        if self.match_string(exponent_marker) {
            self.match_exponent_sign();
            digits += self.lex_integer(base);
        }
        if digits == 0 {
            self.hooks.before_unlex_float(&mut self.cursor);
            self.cursor.rewind_to(start);
            return 0;
        }
        self.cursor.offset() - start
    }
}
