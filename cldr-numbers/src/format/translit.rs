use crate::data::Symbols;
use super::{
    DECIMAL_SENTINEL, EXPONENT_SENTINEL, GROUP_SENTINEL, MINUS_SENTINEL, PLUS_SENTINEL,
};

/// Single pass over the assembled string: sentinel separators become the
/// locale's symbols and ASCII digits map into the numbering system's glyph
/// table by index.
pub(crate) fn transliterate(input: &str, symbols: &Symbols, digits: &[char; 10]) -> String {
    let mut out = String::with_capacity(input.len() + 8);
    for c in input.chars() {
        match c {
            DECIMAL_SENTINEL => out.push_str(&symbols.decimal),
            GROUP_SENTINEL => out.push_str(&symbols.group),
            EXPONENT_SENTINEL => out.push_str(&symbols.exponential),
            PLUS_SENTINEL => out.push_str(&symbols.plus_sign),
            MINUS_SENTINEL => out.push_str(&symbols.minus_sign),
            '0'..='9' => out.push(digits[(c as u8 - b'0') as usize]),
            other => out.push(other),
        }
    }
    out
}
