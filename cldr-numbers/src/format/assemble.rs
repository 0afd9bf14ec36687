use cldr_pattern::{CurrencyWidth, Meta, Token};
use unicode_segmentation::UnicodeSegmentation;

use crate::data::Symbols;
use super::shape::Shaped;
use super::{DECIMAL_SENTINEL, EXPONENT_SENTINEL, MINUS_SENTINEL, PLUS_SENTINEL};

/// Joins the shaped digit fields into the provisional number body, still
/// carrying sentinel separators. An empty integer renders as `"0"`, an
/// empty fraction drops the decimal separator entirely, and the exponent
/// segment only appears in scientific mode.
pub(crate) fn reassemble(shaped: &Shaped, meta: &Meta) -> String {
    let mut body = String::with_capacity(shaped.integer.len() + shaped.fraction.len() + 4);
    if shaped.integer.is_empty() {
        body.push('0');
    } else {
        body.push_str(&shaped.integer);
    }
    if !shaped.fraction.is_empty() {
        body.push(DECIMAL_SENTINEL);
        body.push_str(&shaped.fraction);
    }
    if meta.exponent_digits > 0 {
        body.push(EXPONENT_SENTINEL);
        if shaped.exponent_negative {
            body.push(MINUS_SENTINEL);
        } else if meta.exponent_sign {
            body.push(PLUS_SENTINEL);
        }
        body.push_str(&shaped.exponent);
    }
    body
}

/// Currency strings resolved for each placeholder width.
#[derive(Debug, Clone)]
pub(crate) struct CurrencyGlyphs {
    pub symbol: String,
    pub iso: String,
    pub long_name: String,
    pub narrow: String,
}

pub(crate) struct AssembleEnv<'a> {
    pub body: &'a str,
    /// The body rendered as exactly `"0"`; suppresses a fabricated minus so
    /// a rounded-away negative never shows as `-0`.
    pub body_is_zero: bool,
    pub symbols: &'a Symbols,
    pub currency: Option<&'a CurrencyGlyphs>,
}

/// Walks the selected sub-pattern's tokens and substitutes each one.
pub(crate) fn assemble(tokens: &[Token], env: &AssembleEnv<'_>, meta: &Meta) -> String {
    let mut out = String::new();
    let mut pad_at = None;
    for token in tokens {
        match token {
            Token::Format => out.push_str(env.body),
            Token::Pad => pad_at = Some(out.len()),
            Token::Plus => out.push_str(&env.symbols.plus_sign),
            Token::Minus => {
                if !env.body_is_zero {
                    out.push_str(&env.symbols.minus_sign);
                }
            }
            Token::Currency(width) => {
                if let Some(currency) = env.currency {
                    out.push_str(match width {
                        CurrencyWidth::Symbol => &currency.symbol,
                        CurrencyWidth::Iso => &currency.iso,
                        CurrencyWidth::LongName => &currency.long_name,
                        CurrencyWidth::Narrow => &currency.narrow,
                    });
                }
            }
            Token::Percent => out.push_str(&env.symbols.percent_sign),
            Token::PerMille => out.push_str(&env.symbols.per_mille),
            Token::Literal(text) => out.push_str(text),
            Token::Quote => out.push('\''),
            Token::QuotedChar(c) => out.push(*c),
        }
    }

    if meta.padding_length > 0 {
        if let Some(position) = pad_at {
            // Pad width is measured in graphemes, not bytes.
            let width = out.graphemes(true).count();
            if meta.padding_length > width {
                let fill: String = std::iter::repeat(meta.padding_char)
                    .take(meta.padding_length - width)
                    .collect();
                out.insert_str(position, &fill);
            }
        }
    }
    out
}
