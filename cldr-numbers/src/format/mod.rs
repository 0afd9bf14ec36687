//! The formatter pipeline.
//!
//! `(number, meta, options)` flows through: meta adjustment → arithmetic
//! (absolute value, multiplier, significant digits, nearest increment,
//! mantissa split or fractional rounding) → digit tuple → shape (zero
//! padding, truncation, grouping) → reassembly → token assembly →
//! transliteration. The whole chain is a pure function; all locale state
//! comes in through the context handle.

pub(crate) mod adjust;
pub(crate) mod assemble;
pub(crate) mod kernel;
pub(crate) mod shape;
pub(crate) mod translit;
pub(crate) mod tuple;

use std::borrow::Cow;
use std::sync::OnceLock;

use cldr_pattern::{DigitRange, Meta, Token};

use crate::context::{CldrContext, LocaleData, ResolvedSystem};
use crate::errors::FormatError;
use crate::options::{FormatOptions, SubPattern};
use crate::types::number::Number;
use crate::types::plural;

use assemble::{AssembleEnv, CurrencyGlyphs};
use shape::Direction;

// Private-use sentinels carried through the provisional number string and
// resolved in the final transliteration pass.
pub(crate) const DECIMAL_SENTINEL: char = '\u{e000}';
pub(crate) const GROUP_SENTINEL: char = '\u{e001}';
pub(crate) const EXPONENT_SENTINEL: char = '\u{e002}';
pub(crate) const PLUS_SENTINEL: char = '\u{e003}';
pub(crate) const MINUS_SENTINEL: char = '\u{e004}';

/// The canonical `#,##0.###` meta; locale styles that compile to the same
/// record take the specialized integer/float routes.
fn standard_meta() -> &'static Meta {
    static STANDARD: OnceLock<Meta> = OnceLock::new();
    STANDARD.get_or_init(|| {
        cldr_pattern::compile("#,##0.###").expect("the standard pattern compiles")
    })
}

pub(crate) fn format_number(
    ctx: &CldrContext,
    data: &LocaleData,
    number: &Number,
    meta: &Meta,
    options: &FormatOptions,
) -> Result<String, FormatError> {
    let system = ctx.resolve_system(data, &options.number_system)?;
    let currency_info = match &options.currency {
        Some(code) => Some(ctx.currency_info(code)?),
        None => None,
    };

    if let Number::Float(value) = number {
        if !value.is_finite() {
            return Ok(format_non_finite(*value, meta, &system, options));
        }
    }

    if options.currency.is_none() && options.pattern.is_none() && *meta == *standard_meta() {
        match number {
            Number::Int(value) if options.fractional_digits.is_none() => {
                return Ok(fast_int(*value, meta, data, &system));
            }
            Number::Float(value) => {
                return Ok(fast_float(*value, meta, data, &system, options));
            }
            _ => {}
        }
    }

    let meta = adjust::adjust_meta(
        meta,
        number,
        currency_info,
        options.cash,
        options.fractional_digits,
    );
    let mode = options.rounding_mode;
    let negative = number.is_negative();

    let mut value = kernel::abs(number);
    value = kernel::multiply(value, meta.multiplier);
    value = kernel::round_significant(
        value,
        meta.significant_digits.min,
        meta.significant_digits.max,
        mode,
    );
    value = kernel::round_to_nearest(value, meta.rounding, mode);

    let mut exponent = 0;
    if meta.exponent_digits > 0 {
        let (mantissa, split_exponent) = kernel::mantissa_exponent(value);
        value = mantissa;
        exponent = split_exponent;
        value = kernel::round_significant(value, 0, meta.scientific_rounding, mode);
        // Fractional rounding deliberately does not run in scientific mode.
    } else {
        value = kernel::round_fractional(value, meta.fractional_digits.max, mode);
    }

    let mut tuple = tuple::output_to_tuple(&value, if negative { -1 } else { 1 }, exponent);
    shape::apply_digit_bounds(&mut tuple, &meta);
    let plain = tuple.plain();
    let shaped = shape::group_tuple(&tuple, &meta, data.minimum_grouping_digits);
    let body = assemble::reassemble(&shaped, &meta);

    let currency = match (&options.currency, currency_info) {
        (Some(code), Some(_)) => Some(currency_glyphs(ctx, data, code, &plain, options)),
        _ => None,
    };

    let tokens = select_tokens(&meta, tuple.sign < 0, options.pattern);
    let env = AssembleEnv {
        body: &body,
        body_is_zero: body == "0",
        symbols: system.symbols,
        currency: currency.as_ref(),
    };
    let assembled = assemble::assemble(&tokens, &env, &meta);
    Ok(translit::transliterate(&assembled, system.symbols, system.digits))
}

fn select_tokens<'m>(
    meta: &'m Meta,
    negative: bool,
    forced: Option<SubPattern>,
) -> Cow<'m, [Token]> {
    let negative = match forced {
        Some(SubPattern::Positive) => false,
        Some(SubPattern::Negative) => true,
        None => negative,
    };
    if negative {
        meta.negative_tokens()
    } else {
        Cow::Borrowed(meta.positive.as_slice())
    }
}

fn currency_glyphs(
    ctx: &CldrContext,
    data: &LocaleData,
    code: &str,
    plain_digits: &str,
    options: &FormatOptions,
) -> CurrencyGlyphs {
    let display = data.currencies.get(code);
    let symbol = display
        .map(|entry| entry.symbol.clone())
        .unwrap_or_else(|| code.to_string());
    let narrow = display
        .and_then(|entry| entry.narrow_symbol.clone())
        .unwrap_or_else(|| symbol.clone());
    let long_name = display
        .and_then(|entry| {
            let operands = plural::operands_from_digits(plain_digits);
            let category = ctx.pluralizer().cardinal(&options.locale, operands);
            entry
                .display_names
                .get(plural::category_key(category))
                .or_else(|| entry.display_names.get("other"))
                .cloned()
        })
        .unwrap_or_else(|| code.to_string());
    CurrencyGlyphs {
        symbol,
        iso: code.to_string(),
        long_name,
        narrow,
    }
}

/// NaN and ±∞ render the locale's glyph in place of the digit body, inside
/// the selected sub-pattern's affixes.
fn format_non_finite(
    value: f64,
    meta: &Meta,
    system: &ResolvedSystem<'_>,
    options: &FormatOptions,
) -> String {
    let body = if value.is_nan() {
        system.symbols.nan.clone()
    } else {
        system.symbols.infinity.clone()
    };
    let tokens = select_tokens(meta, value < 0.0, options.pattern);
    let env = AssembleEnv {
        body: &body,
        body_is_zero: false,
        symbols: system.symbols,
        currency: None,
    };
    let assembled = assemble::assemble(&tokens, &env, meta);
    translit::transliterate(&assembled, system.symbols, system.digits)
}

/// `(standard, integer)`: no float or decimal math at all, the digits are
/// grouped and transliterated directly. A negative input recurses on its
/// magnitude and prepends the sign, suppressed when the body is zero.
fn fast_int(
    value: i128,
    meta: &Meta,
    data: &LocaleData,
    system: &ResolvedSystem<'_>,
) -> String {
    let negative = value < 0;
    let magnitude = value.unsigned_abs().to_string();
    let body = shape::group(
        magnitude.as_bytes(),
        meta.grouping.integer,
        data.minimum_grouping_digits,
        Direction::Reverse,
    );
    let mut provisional = String::new();
    if negative && body != "0" {
        provisional.push(MINUS_SENTINEL);
    }
    provisional.push_str(&body);
    translit::transliterate(&provisional, system.symbols, system.digits)
}

/// `(standard, float)`: only the fractional-digits override applies, then
/// fractional rounding and the ordinary shape/reassemble/transliterate
/// tail. No currency, no significant digits, no multiplier.
fn fast_float(
    value: f64,
    meta: &Meta,
    data: &LocaleData,
    system: &ResolvedSystem<'_>,
    options: &FormatOptions,
) -> String {
    let mut meta = Cow::Borrowed(meta);
    if let Some(digits) = options.fractional_digits {
        meta.to_mut().fractional_digits = DigitRange::new(digits, digits);
    }
    let negative = value < 0.0;
    let rounded = kernel::round_fractional(
        Number::Float(value.abs()),
        meta.fractional_digits.max,
        options.rounding_mode,
    );

    let mut tuple = tuple::output_to_tuple(&rounded, if negative { -1 } else { 1 }, 0);
    shape::apply_digit_bounds(&mut tuple, &meta);
    let shaped = shape::group_tuple(&tuple, &meta, data.minimum_grouping_digits);
    let body = assemble::reassemble(&shaped, &meta);

    let mut provisional = String::new();
    if negative && body != "0" {
        provisional.push(MINUS_SENTINEL);
    }
    provisional.push_str(&body);
    translit::transliterate(&provisional, system.symbols, system.digits)
}
