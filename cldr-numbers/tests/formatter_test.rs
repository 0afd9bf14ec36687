use cldr_numbers::{
    CldrContext, FormatError, FormatOptions, NumberStyle, NumberSystem, PatternError,
    RoundingMode, SubPattern,
};
use icu::locid::locale;

fn en() -> FormatOptions {
    FormatOptions::new(locale!("en"))
}

fn en_currency(code: &str) -> FormatOptions {
    let mut options = en();
    options.currency = Some(code.to_string());
    options
}

#[test]
fn accounting_currency() {
    let ctx = CldrContext::new();
    let options = en_currency("JPY");
    assert_eq!(
        ctx.format(1234, NumberStyle::Accounting, &options).unwrap(),
        "¥1,234"
    );
    assert_eq!(
        ctx.format(-1234, NumberStyle::Accounting, &options).unwrap(),
        "(¥1,234)"
    );
}

#[test]
fn inline_patterns() {
    let ctx = CldrContext::new();
    let options = en();
    assert_eq!(ctx.format(12345, "#,##0.00", &options).unwrap(), "12,345.00");
    assert_eq!(ctx.format(12345, "000000", &options).unwrap(), "012345");
    assert_eq!(ctx.format(12345, "#,##6.00", &options).unwrap(), "12,348.00");
    // A lone required digit never clips an overflowing value.
    assert_eq!(ctx.format(12345, "0", &options).unwrap(), "12345");
}

#[test]
fn fraction_grouping() {
    let ctx = CldrContext::new();
    assert_eq!(ctx.format(0.123456, "0.###,#", &en()).unwrap(), "0.123,5");
}

#[test]
fn explicit_integer_width_truncates() {
    let ctx = CldrContext::new();
    assert_eq!(ctx.format(12345, "0000.00", &en()).unwrap(), "2345.00");
}

#[test]
fn standard_fast_paths() {
    let ctx = CldrContext::new();
    let options = en();
    assert_eq!(ctx.format(0, NumberStyle::Standard, &options).unwrap(), "0");
    assert_eq!(ctx.format(0.5, NumberStyle::Standard, &options).unwrap(), "0.5");
    assert_eq!(
        ctx.format(1234567, NumberStyle::Standard, &options).unwrap(),
        "1,234,567"
    );
    assert_eq!(
        ctx.format(-1234567, NumberStyle::Standard, &options).unwrap(),
        "-1,234,567"
    );
    assert_eq!(
        ctx.format(1234.5678, NumberStyle::Standard, &options).unwrap(),
        "1,234.568"
    );
}

#[test]
fn rounded_away_negative_drops_the_sign() {
    let ctx = CldrContext::new();
    let mut options = en();
    options.rounding_mode = RoundingMode::HalfEven;
    assert_eq!(ctx.format(-0.004, "0.##", &options).unwrap(), "0");
}

#[test]
fn indic_grouping_pattern() {
    let ctx = CldrContext::new();
    assert_eq!(
        ctx.format(1234567, "##,##,##0", &en()).unwrap(),
        "12,34,567"
    );
}

#[test]
fn percent_and_permille() {
    let ctx = CldrContext::new();
    let options = en();
    assert_eq!(
        ctx.format(0.75, NumberStyle::Percent, &options).unwrap(),
        "75%"
    );
    assert_eq!(
        ctx.format(0.756, NumberStyle::Percent, &options).unwrap(),
        "76%"
    );
    assert_eq!(ctx.format(0.25, "0.0‰", &options).unwrap(), "250.0‰");
}

#[test]
fn percent_multiplier_matches_scaling_by_hand() {
    let ctx = CldrContext::new();
    let options = en();
    for n in [0i64, 3, 41, 567] {
        let percent = ctx.format(n * 100, "#0%", &options).unwrap();
        let scaled = ctx.format(n * 10000, "#0", &options).unwrap();
        assert_eq!(percent.trim_end_matches('%'), scaled);
    }
}

#[test]
fn scientific_notation() {
    let ctx = CldrContext::new();
    let options = en();
    assert_eq!(
        ctx.format(12345, NumberStyle::Scientific, &options).unwrap(),
        "1.2345E4"
    );
    assert_eq!(
        ctx.format(0.0012, NumberStyle::Scientific, &options).unwrap(),
        "1.2E-3"
    );
    assert_eq!(
        ctx.format(0, NumberStyle::Scientific, &options).unwrap(),
        "0E0"
    );
    assert_eq!(ctx.format(12345, "0.###E+00", &options).unwrap(), "1.234E+04");
}

#[test]
fn significant_digit_patterns() {
    let ctx = CldrContext::new();
    let options = en();
    assert_eq!(ctx.format(12345, "@@@", &options).unwrap(), "12300");
    assert_eq!(ctx.format(1.2345, "@@@", &options).unwrap(), "1.23");
    assert_eq!(ctx.format(0.00123456, "@@", &options).unwrap(), "0.0012");
}

#[test]
fn currency_widths() {
    let ctx = CldrContext::new();
    let usd = en_currency("USD");
    assert_eq!(
        ctx.format(12.3, "¤¤#,##0.00", &usd).unwrap(),
        "USD12.30"
    );
    assert_eq!(
        ctx.format(1.5, "#,##0.00 ¤¤¤", &usd).unwrap(),
        "1.50 US dollars"
    );
    // Visible fraction digits keep English away from the "one" category.
    assert_eq!(
        ctx.format(1, "#,##0.00 ¤¤¤", &usd).unwrap(),
        "1.00 US dollars"
    );
    assert_eq!(
        ctx.format(1, "#,##0 ¤¤¤", &en_currency("JPY")).unwrap(),
        "1 Japanese yen"
    );
    let mut whole_pounds = en_currency("GBP");
    whole_pounds.fractional_digits = Some(0);
    assert_eq!(
        ctx.format(1, "#,##0.00 ¤¤¤", &whole_pounds).unwrap(),
        "1 British pound"
    );
    let cad = en_currency("CAD");
    assert_eq!(
        ctx.format(12.3, "¤#,##0.00", &cad).unwrap(),
        "CA$12.30"
    );
    assert_eq!(
        ctx.format(12.3, "¤¤¤¤#,##0.00", &cad).unwrap(),
        "$12.30"
    );
}

#[test]
fn cash_rounding() {
    let ctx = CldrContext::new();
    let mut chf = en_currency("CHF");
    chf.cash = true;
    assert_eq!(
        ctx.format(10.33, NumberStyle::Currency, &chf).unwrap(),
        "CHF10.35"
    );

    let mut dkk = en_currency("DKK");
    dkk.cash = true;
    assert_eq!(
        ctx.format(10.26, NumberStyle::Currency, &dkk).unwrap(),
        "DKK10.50"
    );
}

#[test]
fn currency_fraction_digits_follow_the_currency() {
    let ctx = CldrContext::new();
    assert_eq!(
        ctx.format(1234.5, NumberStyle::Currency, &en_currency("JPY"))
            .unwrap(),
        "¥1,234"
    );
    assert_eq!(
        ctx.format(1234.5, NumberStyle::Currency, &en_currency("USD"))
            .unwrap(),
        "$1,234.50"
    );
}

#[test]
fn german_separators() {
    let ctx = CldrContext::new();
    let options = FormatOptions::new(locale!("de"));
    assert_eq!(
        ctx.format(1234567.891, NumberStyle::Standard, &options).unwrap(),
        "1.234.567,891"
    );
    let mut eur = FormatOptions::new(locale!("de"));
    eur.currency = Some("EUR".to_string());
    assert_eq!(
        ctx.format(9.99, NumberStyle::Currency, &eur).unwrap(),
        "9,99\u{a0}€"
    );
}

#[test]
fn spanish_minimum_grouping() {
    let ctx = CldrContext::new();
    let options = FormatOptions::new(locale!("es"));
    assert_eq!(ctx.format(1234, NumberStyle::Standard, &options).unwrap(), "1234");
    assert_eq!(
        ctx.format(12345, NumberStyle::Standard, &options).unwrap(),
        "12.345"
    );
}

#[test]
fn arabic_numbering_system() {
    let ctx = CldrContext::new();
    let options = FormatOptions::new(locale!("ar"));
    assert_eq!(
        ctx.format(1234, NumberStyle::Standard, &options).unwrap(),
        "١٬٢٣٤"
    );
    let mut latin = FormatOptions::new(locale!("ar"));
    latin.number_system = NumberSystem::from("latn");
    assert_eq!(
        ctx.format(1234, NumberStyle::Standard, &latin).unwrap(),
        "1,234"
    );
}

#[test]
fn hindi_native_digits_and_lakh_grouping() {
    let ctx = CldrContext::new();
    let mut options = FormatOptions::new(locale!("hi"));
    assert_eq!(
        ctx.format(1234567, NumberStyle::Standard, &options).unwrap(),
        "12,34,567"
    );
    options.number_system = NumberSystem::Native;
    assert_eq!(
        ctx.format(1234567, NumberStyle::Standard, &options).unwrap(),
        "१२,३४,५६७"
    );
}

#[test]
fn fractional_digit_override() {
    let ctx = CldrContext::new();
    let mut options = en();
    options.fractional_digits = Some(2);
    assert_eq!(
        ctx.format(12345, NumberStyle::Standard, &options).unwrap(),
        "12,345.00"
    );
    assert_eq!(
        ctx.format(3.14159, NumberStyle::Standard, &options).unwrap(),
        "3.14"
    );
}

#[test]
fn rounding_modes_act_on_the_magnitude() {
    let ctx = CldrContext::new();
    let mut options = en();
    options.rounding_mode = RoundingMode::HalfUp;
    assert_eq!(ctx.format(2.5, "0.#", &options).unwrap(), "2.5");
    assert_eq!(ctx.format(0.25, "0.#", &options).unwrap(), "0.3");
    options.rounding_mode = RoundingMode::HalfEven;
    assert_eq!(ctx.format(0.25, "0.#", &options).unwrap(), "0.2");
    options.rounding_mode = RoundingMode::Floor;
    assert_eq!(ctx.format(-2.7, "0.#", &options).unwrap(), "-2.7");
    assert_eq!(ctx.format(-2.75, "0.#", &options).unwrap(), "-2.7");
    options.rounding_mode = RoundingMode::Up;
    assert_eq!(ctx.format(2.01, "0", &options).unwrap(), "3");
}

#[test]
fn forced_sub_pattern() {
    let ctx = CldrContext::new();
    let mut options = en_currency("JPY");
    options.pattern = Some(SubPattern::Negative);
    assert_eq!(
        ctx.format(1234, NumberStyle::Accounting, &options).unwrap(),
        "(¥1,234)"
    );
    options.pattern = Some(SubPattern::Positive);
    assert_eq!(
        ctx.format(-1234, NumberStyle::Accounting, &options).unwrap(),
        "¥1,234"
    );
}

#[test]
fn padding_fills_to_pattern_width() {
    let ctx = CldrContext::new();
    assert_eq!(ctx.format(1.2, "*x#,##0.0", &en()).unwrap(), "xxxx1.2");
    // Already wider than the pattern: no fill.
    assert_eq!(
        ctx.format(1234567.8, "*x#,##0.0", &en()).unwrap(),
        "1,234,567.8"
    );
}

#[test]
fn quoted_literals_pass_through() {
    let ctx = CldrContext::new();
    assert_eq!(ctx.format(3, "0 'apples'", &en()).unwrap(), "3 apples");
    assert_eq!(ctx.format(5, "0''", &en()).unwrap(), "5'");
}

#[test]
fn plus_sign_token() {
    let ctx = CldrContext::new();
    assert_eq!(ctx.format(7, "+0", &en()).unwrap(), "+7");
}

#[test]
fn non_finite_values_use_locale_glyphs() {
    let ctx = CldrContext::new();
    let options = en();
    assert_eq!(
        ctx.format(f64::NAN, NumberStyle::Standard, &options).unwrap(),
        "NaN"
    );
    assert_eq!(
        ctx.format(f64::INFINITY, NumberStyle::Standard, &options).unwrap(),
        "∞"
    );
    assert_eq!(
        ctx.format(f64::NEG_INFINITY, NumberStyle::Standard, &options)
            .unwrap(),
        "-∞"
    );
}

#[test]
fn decimal_inputs_preserve_their_scale() {
    let ctx = CldrContext::new();
    let number: cldr_numbers::Number = "1.50".parse().unwrap();
    assert_eq!(
        ctx.format(&number, NumberStyle::Standard, &en()).unwrap(),
        "1.50"
    );
    let big: cldr_numbers::Number = "123456789012345678901234567890".parse().unwrap();
    assert_eq!(
        ctx.format(&big, NumberStyle::Standard, &en()).unwrap(),
        "123,456,789,012,345,678,901,234,567,890"
    );
}

#[test]
fn validation_errors() {
    let ctx = CldrContext::new();
    let options = FormatOptions::new(locale!("zu"));
    assert_eq!(
        ctx.format(1, NumberStyle::Standard, &options),
        Err(FormatError::UnknownLocale(locale!("zu")))
    );

    let mut bad_system = en();
    bad_system.number_system = NumberSystem::from("wxyz");
    assert_eq!(
        ctx.format(1, NumberStyle::Standard, &bad_system),
        Err(FormatError::UnknownNumberSystem("wxyz".to_string()))
    );

    assert_eq!(
        ctx.format(1, NumberStyle::Currency, &en_currency("XYZ")),
        Err(FormatError::UnknownCurrency("XYZ".to_string()))
    );

    assert_eq!(
        ctx.format(1, "no digits here", &en()),
        Err(FormatError::Pattern(PatternError::MissingDigits))
    );
}

#[test]
fn standard_output_always_has_a_digit() {
    let ctx = CldrContext::new();
    let options = en();
    for n in [-7i64, 0, 7] {
        let out = ctx.format(n, "0", &options).unwrap();
        assert!(!out.is_empty());
        assert!(out.chars().any(|c| c.is_ascii_digit()), "{out:?}");
    }
}
