//! Structural check applied before any numeral is decoded.
//!
//! A numeral is accepted only if it is non-empty and matches the canonical
//! construction order: thousands, then a hundreds group, a tens group and a
//! units group. Each group is either one subtractive pair (`CM`/`CD`,
//! `XC`/`XL`, `IX`/`IV`) or an optional five-symbol followed by at most three
//! repeats of the one-symbol. Anchoring the grammar at both ends also rules out
//! lowercase letters, foreign characters, repeated `V`/`L`/`D`, runs of four,
//! non-canonical pairs such as `IC` and repeated pairs such as `IVIV`.

use regex::Regex;
use std::sync::LazyLock;

use crate::utils::error::{RomanError, Result};

pub const ROMAN_GRAMMAR: &str = r"^M{0,3}(CM|CD|D?C{0,3})(XC|XL|L?X{0,3})(IX|IV|V?I{0,3})$";

static ROMAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    // The pattern is a compile-time constant; failing here is a programming error.
    Regex::new(ROMAN_GRAMMAR).expect("roman numeral grammar must compile")
});

pub fn is_valid_roman(roman: &str) -> bool {
    // The grammar matches the empty string, which is not a numeral.
    !roman.is_empty() && ROMAN_PATTERN.is_match(roman)
}

pub fn validate(roman: &str) -> Result<()> {
    if is_valid_roman(roman) {
        Ok(())
    } else {
        Err(RomanError::InvalidFormat)
    }
}
